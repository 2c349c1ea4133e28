use chrono::{Datelike, Days, NaiveDate};

use crate::app::AppState;
use crate::ui::{days_from_week_start, ordered_weekdays};

#[derive(Debug, Clone, PartialEq)]
pub struct MonthLayout {
    pub year: i32,
    pub month: u32,
    pub weekdays: [chrono::Weekday; 7],
    pub weeks: Vec<Week>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Week {
    pub days: Vec<DayCell>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DayCell {
    pub date: NaiveDate,
    pub is_selected: bool,
    pub is_today: bool,
    pub booking_count: usize,
    pub is_current_month: bool,
}

impl DayCell {
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            is_selected: false,
            is_today: false,
            booking_count: 0,
            is_current_month: true,
        }
    }

    pub fn with_selected(mut self, selected: bool) -> Self {
        self.is_selected = selected;
        self
    }

    pub fn with_today(mut self, today: bool) -> Self {
        self.is_today = today;
        self
    }

    pub fn with_bookings(mut self, count: usize) -> Self {
        self.booking_count = count;
        self
    }

    pub fn with_current_month(mut self, current_month: bool) -> Self {
        self.is_current_month = current_month;
        self
    }

    pub fn has_bookings(&self) -> bool {
        self.booking_count > 0
    }
}

/// Lays out the month around the selected date as whole weeks. Days from the
/// neighbouring months pad the first and last week; only visible bookings count.
pub fn calculate_layout(state: &AppState) -> MonthLayout {
    let year = state.selected_date.year();
    let month = state.selected_date.month();
    let today = chrono::Local::now().date_naive();
    let weekdays = ordered_weekdays(state.first_day_of_week);

    let Some(first_day) = NaiveDate::from_ymd_opt(year, month, 1) else {
        return MonthLayout { year, month, weekdays, weeks: Vec::new() };
    };

    let days_before = days_from_week_start(first_day, state.first_day_of_week);
    let Some(mut current) = first_day.checked_sub_days(Days::new(days_before)) else {
        return MonthLayout { year, month, weekdays, weeks: Vec::new() };
    };

    let mut weeks = Vec::new();
    let mut calendar_ended = false;
    while !calendar_ended {
        let mut week = Week { days: Vec::with_capacity(7) };

        for _ in 0..7 {
            let in_month = current.year() == year && current.month() == month;
            let count = if in_month {
                state.bookings_for_date(current).len()
            } else {
                0
            };

            week.days.push(
                DayCell::new(current)
                    .with_selected(current == state.selected_date)
                    .with_today(current == today)
                    .with_bookings(count)
                    .with_current_month(in_month),
            );

            let Some(next) = current.succ_opt() else {
                calendar_ended = true;
                break;
            };
            current = next;
        }

        weeks.push(week);

        if current.month() != month || current.year() != year {
            break;
        }
    }

    MonthLayout { year, month, weekdays, weeks }
}
