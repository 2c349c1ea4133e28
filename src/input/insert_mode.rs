use crossterm::event::KeyCode;

use crate::app::AppState;
use crate::form::FormField;
use crate::gesture::GestureHandler;

pub fn handle_key(key: KeyCode, state: &mut AppState) {
    if !state.form.is_open() {
        return;
    }

    match key {
        KeyCode::Enter => {
            if let Ok(id) = state.on_form_submitted() {
                state.selected_date = state.store.get(&id).map_or(state.selected_date, |b| b.start);
                state.reset_booking_selection();
            }
        }
        KeyCode::Esc => {
            if let Err(e) = state.on_form_cancelled() {
                tracing::warn!("Cancel ignored: {}", e);
            }
        }
        KeyCode::Tab => state.form.next_field(),
        KeyCode::BackTab => state.form.prev_field(),
        KeyCode::Left if state.form.active_field() == FormField::Room => state.cycle_room(false),
        KeyCode::Right if state.form.active_field() == FormField::Room => state.cycle_room(true),
        KeyCode::Char(' ') if state.form.active_field() == FormField::Room => state.cycle_room(true),
        KeyCode::Backspace => state.edit_active_field(|value| {
            value.pop();
        }),
        KeyCode::Char(c) => state.edit_active_field(|value| value.push(c)),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use crate::app::Mode;
    use crate::booking::{RoomType, SelectedRange};
    use crate::form::ValidationPolicy;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn setup_state_with_form() -> AppState {
        let mut state = AppState::new();
        state.on_date_selected(SelectedRange::single_day(date(2024, 3, 1)));
        state
    }

    fn type_text(state: &mut AppState, text: &str) {
        for c in text.chars() {
            handle_key(KeyCode::Char(c), state);
        }
    }

    #[test]
    fn tab_moves_to_next_field() {
        let mut state = setup_state_with_form();
        assert_eq!(state.form.active_field(), FormField::UserName);

        handle_key(KeyCode::Tab, &mut state);

        assert_eq!(state.form.active_field(), FormField::Room);
    }

    #[test]
    fn backtab_moves_to_previous_field() {
        let mut state = setup_state_with_form();

        handle_key(KeyCode::BackTab, &mut state);

        assert_eq!(state.form.active_field(), FormField::Comment);
    }

    #[test]
    fn char_appends_to_name_field() {
        let mut state = setup_state_with_form();

        type_text(&mut state, "Hi");

        assert_eq!(state.form.draft().unwrap().user_name, "Hi");
    }

    #[test]
    fn backspace_removes_from_active_field() {
        let mut state = setup_state_with_form();
        type_text(&mut state, "Hello");

        handle_key(KeyCode::Backspace, &mut state);

        assert_eq!(state.form.draft().unwrap().user_name, "Hell");
    }

    #[test]
    fn arrows_cycle_room_on_room_field() {
        let mut state = setup_state_with_form();
        handle_key(KeyCode::Tab, &mut state);

        handle_key(KeyCode::Right, &mut state);
        handle_key(KeyCode::Char(' '), &mut state);
        assert_eq!(state.form.draft().unwrap().room, RoomType::Conference);

        handle_key(KeyCode::Left, &mut state);
        assert_eq!(state.form.draft().unwrap().room, RoomType::Meeting);
    }

    #[test]
    fn typing_on_room_field_is_ignored() {
        let mut state = setup_state_with_form();
        handle_key(KeyCode::Tab, &mut state);

        type_text(&mut state, "xyz");

        assert_eq!(state.form.draft().unwrap().room, RoomType::Unassigned);
    }

    #[test]
    fn each_text_field_receives_input() {
        let mut state = setup_state_with_form();
        type_text(&mut state, "Ana");
        handle_key(KeyCode::Tab, &mut state);
        handle_key(KeyCode::Tab, &mut state);
        type_text(&mut state, "#fff");
        handle_key(KeyCode::Tab, &mut state);
        type_text(&mut state, "Bo");
        handle_key(KeyCode::Tab, &mut state);
        type_text(&mut state, "Late");

        let draft = state.form.draft().unwrap();
        assert_eq!(draft.user_name, "Ana");
        assert_eq!(draft.color, "#fff");
        assert_eq!(draft.participants, "Bo");
        assert_eq!(draft.comment, "Late");
    }

    #[test]
    fn enter_commits_booking() {
        let mut state = setup_state_with_form();
        type_text(&mut state, "Ana");

        handle_key(KeyCode::Enter, &mut state);

        assert_eq!(state.mode, Mode::Normal);
        assert_eq!(state.store.len(), 1);
        assert_eq!(state.store.bookings()[0].user_name, "Ana");
    }

    #[test]
    fn enter_with_missing_name_keeps_form_open_under_strict_policy() {
        let mut state = setup_state_with_form();
        state.form.set_policy(ValidationPolicy {
            require_user_name: true,
            reject_inverted_ranges: false,
        });

        handle_key(KeyCode::Enter, &mut state);

        assert_eq!(state.mode, Mode::Insert);
        assert!(state.form.is_open());
        assert!(state.store.is_empty());
    }

    #[test]
    fn esc_discards_draft() {
        let mut state = setup_state_with_form();
        type_text(&mut state, "Ana");

        handle_key(KeyCode::Esc, &mut state);

        assert_eq!(state.mode, Mode::Normal);
        assert!(!state.form.is_open());
        assert!(state.store.is_empty());
    }
}
