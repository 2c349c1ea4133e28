use chrono::NaiveDate;
use thiserror::Error;

use crate::booking::{Booking, BookingId, RenderableEvent, RoomFilter};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum StoreError {
    #[error("No booking with id {0}")]
    NotFound(BookingId),
}

/// Committed bookings in insertion order, plus the room filter that decides
/// which of them the calendar shows.
#[derive(Debug, Clone, Default)]
pub struct EventStore {
    bookings: Vec<Booking>,
    room_filter: RoomFilter,
}

impl EventStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Id freshness is the caller's job. A duplicate is logged and kept.
    pub fn append(&mut self, booking: Booking) {
        if self.contains(&booking.id) {
            tracing::warn!("Appending booking with duplicate id {}", booking.id);
        }
        tracing::debug!(
            "Appending booking {} ({} to {}, room {:?})",
            booking.id,
            booking.start,
            booking.end,
            booking.room
        );
        self.bookings.push(booking);
    }

    pub fn reschedule(
        &mut self,
        id: &BookingId,
        new_start: NaiveDate,
        new_end: NaiveDate,
    ) -> Result<(), StoreError> {
        let booking = self
            .bookings
            .iter_mut()
            .find(|b| &b.id == id)
            .ok_or_else(|| StoreError::NotFound(id.clone()))?;

        tracing::debug!(
            "Rescheduling booking {} from {}..{} to {}..{}",
            id,
            booking.start,
            booking.end,
            new_start,
            new_end
        );
        booking.start = new_start;
        booking.end = new_end;
        Ok(())
    }

    pub fn set_room_filter(&mut self, filter: RoomFilter) {
        tracing::debug!("Room filter set to {:?}", filter);
        self.room_filter = filter;
    }

    pub fn room_filter(&self) -> RoomFilter {
        self.room_filter
    }

    pub fn visible_bookings(&self) -> Vec<&Booking> {
        self.bookings
            .iter()
            .filter(|b| self.room_filter.matches(b.room))
            .collect()
    }

    pub fn visible_on(&self, date: NaiveDate) -> Vec<&Booking> {
        self.bookings
            .iter()
            .filter(|b| self.room_filter.matches(b.room) && b.covers(date))
            .collect()
    }

    pub fn render_events(&self) -> Vec<RenderableEvent> {
        self.visible_bookings()
            .into_iter()
            .map(Booking::to_renderable)
            .collect()
    }

    pub fn get(&self, id: &BookingId) -> Option<&Booking> {
        self.bookings.iter().find(|b| &b.id == id)
    }

    pub fn contains(&self, id: &BookingId) -> bool {
        self.get(id).is_some()
    }

    pub fn bookings(&self) -> &[Booking] {
        &self.bookings
    }

    pub fn len(&self) -> usize {
        self.bookings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bookings.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::booking::RoomType;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn create_booking(id: &str, room: RoomType, start: NaiveDate) -> Booking {
        Booking {
            id: BookingId::new(id),
            user_name: format!("Booking {}", id),
            start,
            end: start,
            all_day: true,
            room,
            comment: None,
            participants: None,
            color: None,
        }
    }

    fn ids(bookings: &[&Booking]) -> Vec<String> {
        bookings.iter().map(|b| b.id.to_string()).collect()
    }

    #[test]
    fn new_store_is_empty() {
        let store = EventStore::new();
        assert!(store.is_empty());
        assert_eq!(store.room_filter(), RoomFilter::All);
    }

    #[test]
    fn append_keeps_insertion_order() {
        let mut store = EventStore::new();
        store.append(create_booking("c", RoomType::Event, date(2024, 3, 3)));
        store.append(create_booking("a", RoomType::Meeting, date(2024, 3, 1)));
        store.append(create_booking("b", RoomType::Meeting, date(2024, 3, 2)));

        assert_eq!(ids(&store.visible_bookings()), vec!["c", "a", "b"]);
    }

    #[test]
    fn filter_by_room_shows_matching_bookings() {
        let mut store = EventStore::new();
        store.append(create_booking("A", RoomType::Meeting, date(2024, 3, 1)));
        store.append(create_booking("B", RoomType::Conference, date(2024, 3, 1)));

        store.set_room_filter(RoomFilter::Only(RoomType::Meeting));

        assert_eq!(ids(&store.visible_bookings()), vec!["A"]);
    }

    #[test]
    fn filter_with_no_matches_yields_empty_view() {
        let mut store = EventStore::new();
        store.append(create_booking("A", RoomType::Meeting, date(2024, 3, 1)));

        store.set_room_filter(RoomFilter::Only(RoomType::Event));

        assert!(store.visible_bookings().is_empty());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn filter_can_select_unassigned_bookings() {
        let mut store = EventStore::new();
        store.append(create_booking("A", RoomType::Unassigned, date(2024, 3, 1)));
        store.append(create_booking("B", RoomType::Meeting, date(2024, 3, 1)));

        store.set_room_filter(RoomFilter::Only(RoomType::Unassigned));

        assert_eq!(ids(&store.visible_bookings()), vec!["A"]);
    }

    #[test]
    fn reschedule_updates_dates() {
        let mut store = EventStore::new();
        store.append(create_booking("x1", RoomType::Meeting, date(2024, 3, 1)));

        store
            .reschedule(&BookingId::new("x1"), date(2024, 4, 10), date(2024, 4, 12))
            .unwrap();

        let booking = store.get(&BookingId::new("x1")).unwrap();
        assert_eq!(booking.start, date(2024, 4, 10));
        assert_eq!(booking.end, date(2024, 4, 12));
    }

    #[test]
    fn reschedule_unknown_id_reports_not_found_and_leaves_store_unchanged() {
        let mut store = EventStore::new();
        store.append(create_booking("x1", RoomType::Meeting, date(2024, 3, 1)));
        let before = store.bookings().to_vec();

        let result = store.reschedule(&BookingId::new("unknown"), date(2024, 1, 1), date(2024, 1, 1));

        assert_eq!(result, Err(StoreError::NotFound(BookingId::new("unknown"))));
        assert_eq!(store.bookings(), before.as_slice());
    }

    #[test]
    fn reschedule_accepts_inverted_range() {
        let mut store = EventStore::new();
        store.append(create_booking("x1", RoomType::Meeting, date(2024, 3, 1)));

        let result = store.reschedule(&BookingId::new("x1"), date(2024, 3, 9), date(2024, 3, 2));

        assert!(result.is_ok());
    }

    #[test]
    fn reschedule_only_changes_dates() {
        let mut store = EventStore::new();
        let mut original = create_booking("x1", RoomType::Conference, date(2024, 3, 1));
        original.comment = Some("Projector needed".to_string());
        store.append(original.clone());

        store
            .reschedule(&original.id, date(2024, 3, 5), date(2024, 3, 6))
            .unwrap();

        let moved = store.get(&original.id).unwrap();
        assert_eq!(moved.user_name, original.user_name);
        assert_eq!(moved.room, original.room);
        assert_eq!(moved.comment, original.comment);
    }

    #[test]
    fn visible_on_respects_filter_and_span() {
        let mut store = EventStore::new();
        let mut long = create_booking("long", RoomType::Event, date(2024, 5, 1));
        long.end = date(2024, 5, 3);
        store.append(long);
        store.append(create_booking("short", RoomType::Meeting, date(2024, 5, 2)));

        assert_eq!(ids(&store.visible_on(date(2024, 5, 2))), vec!["long", "short"]);

        store.set_room_filter(RoomFilter::Only(RoomType::Meeting));
        assert_eq!(ids(&store.visible_on(date(2024, 5, 2))), vec!["short"]);
        assert!(store.visible_on(date(2024, 5, 3)).is_empty());
    }

    #[test]
    fn render_events_follow_filter() {
        let mut store = EventStore::new();
        store.append(create_booking("A", RoomType::Meeting, date(2024, 3, 1)));
        store.append(create_booking("B", RoomType::Event, date(2024, 3, 1)));
        store.set_room_filter(RoomFilter::Only(RoomType::Event));

        let events = store.render_events();

        assert_eq!(events.len(), 1);
        assert_eq!(events[0].id, BookingId::new("B"));
        assert_eq!(events[0].title, "Booking B");
    }

    fn room_strategy() -> impl Strategy<Value = RoomType> {
        prop_oneof![
            Just(RoomType::Unassigned),
            Just(RoomType::Meeting),
            Just(RoomType::Conference),
            Just(RoomType::Event),
        ]
    }

    fn filter_strategy() -> impl Strategy<Value = RoomFilter> {
        prop_oneof![
            Just(RoomFilter::All),
            room_strategy().prop_map(RoomFilter::Only),
        ]
    }

    fn store_from(rooms: &[RoomType]) -> EventStore {
        let mut store = EventStore::new();
        for (i, room) in rooms.iter().enumerate() {
            store.append(create_booking(&format!("b{}", i), *room, date(2024, 1, 1)));
        }
        store
    }

    proptest! {
        #[test]
        fn generated_ids_stay_unique(count in 1usize..200) {
            let mut store = EventStore::new();
            for _ in 0..count {
                let mut booking = create_booking("", RoomType::Meeting, date(2024, 1, 1));
                booking.id = BookingId::generate(crate::booking::DEFAULT_ID_LENGTH);
                store.append(booking);
            }

            let mut seen: Vec<&BookingId> = store.bookings().iter().map(|b| &b.id).collect();
            seen.sort();
            seen.dedup();
            prop_assert_eq!(seen.len(), count);
        }

        #[test]
        fn visible_bookings_is_ordered_subset_matching_filter(
            rooms in prop::collection::vec(room_strategy(), 0..40),
            filter in filter_strategy(),
        ) {
            let mut store = store_from(&rooms);
            store.set_room_filter(filter);

            let expected: Vec<String> = rooms
                .iter()
                .enumerate()
                .filter(|(_, room)| filter.matches(**room))
                .map(|(i, _)| format!("b{}", i))
                .collect();

            prop_assert_eq!(ids(&store.visible_bookings()), expected);
            prop_assert_eq!(store.len(), rooms.len());
        }

        #[test]
        fn reschedule_twice_equals_reschedule_once(
            rooms in prop::collection::vec(room_strategy(), 1..20),
            target in 0usize..20,
            start_offset in 0u64..400,
            span in 0u64..10,
        ) {
            let mut store = store_from(&rooms);
            let id = BookingId::new(format!("b{}", target % rooms.len()));
            let start = date(2024, 1, 1).checked_add_days(chrono::Days::new(start_offset)).unwrap();
            let end = start.checked_add_days(chrono::Days::new(span)).unwrap();

            store.reschedule(&id, start, end).unwrap();
            let after_first = store.bookings().to_vec();
            store.reschedule(&id, start, end).unwrap();

            prop_assert_eq!(store.bookings(), after_first.as_slice());
        }
    }
}
