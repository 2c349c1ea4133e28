pub mod day_view;
pub mod month_view;
pub mod theme;
pub mod week_view;

use chrono::{Datelike, NaiveDate, Weekday};

/// Position of `date` within a week that begins on `week_start`, 0..7.
pub fn days_from_week_start(date: NaiveDate, week_start: Weekday) -> u64 {
    let offset = 7 + date.weekday().num_days_from_monday() - week_start.num_days_from_monday();
    u64::from(offset % 7)
}

/// The first day of the week containing `date`.
pub fn week_containing(date: NaiveDate, week_start: Weekday) -> NaiveDate {
    date.checked_sub_days(chrono::Days::new(days_from_week_start(date, week_start)))
        .unwrap_or(date)
}

/// Weekdays in display order for a week beginning on `week_start`.
pub fn ordered_weekdays(week_start: Weekday) -> [Weekday; 7] {
    let mut days = [week_start; 7];
    for i in 1..7 {
        days[i] = days[i - 1].succ();
    }
    days
}
