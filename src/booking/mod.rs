pub mod id;
pub mod model;
pub mod room;

pub use id::{BookingId, DEFAULT_ID_LENGTH};
pub use model::{Booking, RenderableEvent, SelectedRange};
pub use room::{ParseRoomError, RoomFilter, RoomType};
