pub mod app;
pub mod booking;
pub mod form;
pub mod gesture;
pub mod i18n;
pub mod input;
pub mod storage;
pub mod store;
pub mod ui;

pub use app::{AppState, Mode, StatusLine, ViewType};
pub use booking::{Booking, BookingId, RenderableEvent, RoomFilter, RoomType, SelectedRange};
pub use form::{BookingForm, Draft, FormError, FormField, ValidationPolicy};
pub use gesture::{GestureHandler, RenderFeed};
pub use store::{EventStore, StoreError};
