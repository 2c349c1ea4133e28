use chrono::NaiveDate;

use crate::booking::{BookingId, RenderableEvent, RoomFilter, SelectedRange};
use crate::form::FormError;
use crate::store::StoreError;

/// Gestures the host delivers, one call per user interaction.
pub trait GestureHandler {
    fn on_date_selected(&mut self, range: SelectedRange);

    fn on_event_dragged(
        &mut self,
        id: &BookingId,
        new_start: NaiveDate,
        new_end: NaiveDate,
    ) -> Result<(), StoreError>;

    fn on_filter_changed(&mut self, filter: RoomFilter);

    fn on_field_edited(&mut self, name: &str, value: &str) -> Result<(), FormError>;

    fn on_form_submitted(&mut self) -> Result<BookingId, FormError>;

    fn on_form_cancelled(&mut self) -> Result<(), FormError>;
}

/// The host re-reads this after every gesture and draws what it returns.
pub trait RenderFeed {
    fn render_events(&self) -> Vec<RenderableEvent>;
}
