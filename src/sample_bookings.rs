use chrono::{Days, Local};
use room_booker::{app::AppState, booking::model::shift_date, Booking, BookingId, RoomType};

pub fn add_sample_bookings(app: &mut AppState) {
    let today = Local::now().date_naive();

    let bookings = [
        ("Ana", 0, 0, RoomType::Meeting, Some("Bo, Cai"), Some("Weekly planning")),
        ("Bo", 0, 2, RoomType::Conference, None, Some("Partner workshop")),
        ("Cai", 1, 1, RoomType::Event, Some("Whole team"), None),
        ("Dee", -1, -1, RoomType::Unassigned, None, None),
        ("Eli", 3, 4, RoomType::Meeting, None, Some("Interviews")),
    ];

    for (i, (name, start_offset, end_offset, room, participants, comment)) in bookings.into_iter().enumerate() {
        let (Some(start), Some(end)) = (shift_date(today, start_offset), shift_date(today, end_offset)) else {
            continue;
        };

        app.store.append(Booking {
            id: BookingId::new(format!("sample{}", i)),
            user_name: name.to_string(),
            start,
            end,
            all_day: true,
            room,
            comment: comment.map(String::from),
            participants: participants.map(String::from),
            color: None,
        });
    }

    if let Some(next_week) = today.checked_add_days(Days::new(7)) {
        app.store.append(Booking {
            id: BookingId::new("sample_offsite"),
            user_name: "Offsite".to_string(),
            start: next_week,
            end: next_week,
            all_day: true,
            room: RoomType::Event,
            comment: None,
            participants: None,
            color: Some("#8e24aa".to_string()),
        });
    }

    tracing::info!("Added {} sample bookings", app.store.len());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_bookings_cover_today() {
        let mut app = AppState::new();
        add_sample_bookings(&mut app);

        assert_eq!(app.store.len(), 6);
        assert_eq!(app.bookings_for_date(Local::now().date_naive()).len(), 2);
    }
}
