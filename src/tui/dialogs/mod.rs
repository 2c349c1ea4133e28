pub mod booking_form;
pub mod help;
