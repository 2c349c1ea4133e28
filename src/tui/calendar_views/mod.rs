pub mod booking_list;
pub mod day;
pub mod month;
pub mod week;
