use crossterm::event::KeyCode;

use crate::app::{AppState, Mode};
use crate::booking::{model::shift_date, SelectedRange};
use crate::gesture::GestureHandler;

pub fn handle_key(key: KeyCode, state: &mut AppState) {
    match key {
        KeyCode::Char('h') | KeyCode::Left => extend(state, -1),
        KeyCode::Char('l') | KeyCode::Right => extend(state, 1),
        KeyCode::Char('j') | KeyCode::Down => extend(state, 7),
        KeyCode::Char('k') | KeyCode::Up => extend(state, -7),
        KeyCode::Char('a') | KeyCode::Enter => {
            if let Some((start, end)) = state.get_visual_selection_range() {
                state.selected_date = start;
                state.on_date_selected(SelectedRange::spanning(start, end));
            }
        }
        KeyCode::Esc => {
            state.visual_selection_start = None;
            state.mode = Mode::Normal;
        }
        _ => {}
    }
}

fn extend(state: &mut AppState, days: i64) {
    if let Some(new_date) = shift_date(state.selected_date, days) {
        state.selected_date = new_date;
    }
}
