use crossterm::event::KeyCode;

use crate::app::AppState;

/// Keys while a booking is held. Dropping is the drag gesture.
pub fn handle_key(key: KeyCode, state: &mut AppState) {
    match key {
        KeyCode::Char('h') | KeyCode::Left => state.shift_move(-1),
        KeyCode::Char('l') | KeyCode::Right => state.shift_move(1),
        KeyCode::Char('j') | KeyCode::Down => state.shift_move(7),
        KeyCode::Char('k') | KeyCode::Up => state.shift_move(-7),
        KeyCode::Enter | KeyCode::Char('M') => {
            if state.drop_move().is_ok() {
                state.reset_booking_selection();
            }
        }
        KeyCode::Esc => state.abort_move(),
        _ => {}
    }
}
