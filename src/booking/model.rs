use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use super::{BookingId, RoomType};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    pub id: BookingId,
    pub user_name: String,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub all_day: bool,
    pub room: RoomType,
    pub comment: Option<String>,
    pub participants: Option<String>,
    pub color: Option<String>,
}

impl Booking {
    /// Days covered, counting both ends. Zero or negative when `end` precedes `start`.
    pub fn span_days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }

    /// Inverted bookings only cover their start date.
    pub fn covers(&self, date: NaiveDate) -> bool {
        if self.end < self.start {
            date == self.start
        } else {
            self.start <= date && date <= self.end
        }
    }

    pub fn shifted_by(&self, days: i64) -> Option<(NaiveDate, NaiveDate)> {
        Some((shift_date(self.start, days)?, shift_date(self.end, days)?))
    }

    pub fn to_renderable(&self) -> RenderableEvent {
        RenderableEvent {
            id: self.id.clone(),
            title: self.user_name.clone(),
            start: self.start,
            end: self.end,
            all_day: self.all_day,
            color: self.color.clone(),
            room_type: self.room,
            comment: self.comment.clone(),
            participants: self.participants.clone(),
        }
    }
}

pub fn shift_date(date: NaiveDate, days: i64) -> Option<NaiveDate> {
    if days >= 0 {
        date.checked_add_days(Days::new(days.unsigned_abs()))
    } else {
        date.checked_sub_days(Days::new(days.unsigned_abs()))
    }
}

/// Dates picked by a selection gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectedRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub all_day: bool,
}

impl SelectedRange {
    pub fn single_day(date: NaiveDate) -> Self {
        Self {
            start: date,
            end: date,
            all_day: true,
        }
    }

    pub fn spanning(a: NaiveDate, b: NaiveDate) -> Self {
        let (start, end) = if a <= b { (a, b) } else { (b, a) };
        Self {
            start,
            end,
            all_day: true,
        }
    }

    pub fn days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }
}

/// What the host draws for one booking.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderableEvent {
    pub id: BookingId,
    pub title: String,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub all_day: bool,
    pub color: Option<String>,
    pub room_type: RoomType,
    pub comment: Option<String>,
    pub participants: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn booking(start: NaiveDate, end: NaiveDate) -> Booking {
        Booking {
            id: BookingId::new("b1"),
            user_name: "Ana".to_string(),
            start,
            end,
            all_day: true,
            room: RoomType::Meeting,
            comment: Some("Quarterly review".to_string()),
            participants: None,
            color: Some("#1a73e8".to_string()),
        }
    }

    #[test]
    fn single_day_booking_spans_one_day() {
        let b = booking(date(2024, 3, 1), date(2024, 3, 1));
        assert_eq!(b.span_days(), 1);
    }

    #[test]
    fn booking_covers_inclusive_range() {
        let b = booking(date(2024, 4, 10), date(2024, 4, 12));
        assert!(b.covers(date(2024, 4, 10)));
        assert!(b.covers(date(2024, 4, 11)));
        assert!(b.covers(date(2024, 4, 12)));
        assert!(!b.covers(date(2024, 4, 13)));
        assert!(!b.covers(date(2024, 4, 9)));
    }

    #[test]
    fn inverted_booking_covers_only_start() {
        let b = booking(date(2024, 4, 12), date(2024, 4, 10));
        assert!(b.covers(date(2024, 4, 12)));
        assert!(!b.covers(date(2024, 4, 11)));
        assert!(b.span_days() <= 0);
    }

    #[test]
    fn shifting_moves_both_ends() {
        let b = booking(date(2024, 4, 10), date(2024, 4, 12));
        assert_eq!(b.shifted_by(-7), Some((date(2024, 4, 3), date(2024, 4, 5))));
        assert_eq!(b.shifted_by(1), Some((date(2024, 4, 11), date(2024, 4, 13))));
    }

    #[test]
    fn renderable_uses_user_name_as_title() {
        let b = booking(date(2024, 3, 1), date(2024, 3, 1));
        let event = b.to_renderable();
        assert_eq!(event.title, "Ana");
        assert_eq!(event.room_type, RoomType::Meeting);
        assert!(event.all_day);
    }

    #[test]
    fn renderable_serializes_with_camel_case_keys() {
        let event = booking(date(2024, 3, 1), date(2024, 3, 2)).to_renderable();
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["allDay"], true);
        assert_eq!(json["roomType"], "meeting");
        assert_eq!(json["start"], "2024-03-01");
    }

    #[test]
    fn spanning_range_orders_dates() {
        let range = SelectedRange::spanning(date(2024, 3, 5), date(2024, 3, 2));
        assert_eq!(range.start, date(2024, 3, 2));
        assert_eq!(range.end, date(2024, 3, 5));
        assert_eq!(range.days(), 4);
    }
}
