use chrono::NaiveDate;

use crate::app::AppState;
use crate::booking::{BookingId, RoomType};

#[derive(Debug, Clone, PartialEq)]
pub struct DayLayout {
    pub date: NaiveDate,
    pub is_today: bool,
    pub entries: Vec<BookingEntry>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BookingEntry {
    pub booking_id: BookingId,
    pub title: String,
    pub room: RoomType,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub span_days: i64,
    pub color: String,
    pub participants: Option<String>,
    pub comment: Option<String>,
    pub is_selected: bool,
}

pub fn calculate_layout(state: &AppState) -> DayLayout {
    let date = state.selected_date;
    let today = chrono::Local::now().date_naive();

    let entries = state
        .bookings_for_date(date)
        .into_iter()
        .enumerate()
        .map(|(idx, b)| BookingEntry {
            booking_id: b.id.clone(),
            title: b.user_name.clone(),
            room: b.room,
            start: b.start,
            end: b.end,
            span_days: b.span_days(),
            color: state.color_for(b),
            participants: b.participants.clone(),
            comment: b.comment.clone(),
            is_selected: idx == state.selected_booking_index,
        })
        .collect();

    DayLayout {
        date,
        is_today: date == today,
        entries,
    }
}
