use chrono::{Days, NaiveDate};

use crate::app::AppState;
use crate::booking::{BookingId, RoomType};
use crate::ui::week_containing;

#[derive(Debug, Clone, PartialEq)]
pub struct WeekLayout {
    pub week_start: NaiveDate,
    pub days: Vec<DayColumn>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DayColumn {
    pub date: NaiveDate,
    pub is_selected: bool,
    pub is_today: bool,
    pub bookings: Vec<BookingChip>,
}

/// One booking as drawn inside a week column.
#[derive(Debug, Clone, PartialEq)]
pub struct BookingChip {
    pub booking_id: BookingId,
    pub title: String,
    pub room: RoomType,
    pub color: String,
    pub starts_here: bool,
    pub ends_here: bool,
}

pub fn calculate_layout(state: &AppState) -> WeekLayout {
    let week_start = week_containing(state.selected_date, state.first_day_of_week);
    let today = chrono::Local::now().date_naive();

    let mut days = Vec::new();

    for day_offset in 0..7u64 {
        let Some(date) = week_start.checked_add_days(Days::new(day_offset)) else {
            continue;
        };

        let bookings = state
            .bookings_for_date(date)
            .into_iter()
            .map(|b| BookingChip {
                booking_id: b.id.clone(),
                title: b.user_name.clone(),
                room: b.room,
                color: state.color_for(b),
                starts_here: b.start == date,
                ends_here: b.end == date || b.end < b.start,
            })
            .collect();

        days.push(DayColumn {
            date,
            is_selected: date == state.selected_date,
            is_today: date == today,
            bookings,
        });
    }

    WeekLayout { week_start, days }
}
