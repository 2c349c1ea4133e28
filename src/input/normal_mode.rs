use chrono::{Datelike, Days, NaiveDate};
use crossterm::event::KeyCode;

use crate::app::{AppState, Mode, ViewType};
use crate::gesture::GestureHandler;

pub fn handle_key(key: KeyCode, state: &mut AppState) {
    match key {
        KeyCode::Char('h') | KeyCode::Left => move_by_days(state, -1),
        KeyCode::Char('l') | KeyCode::Right => move_by_days(state, 1),
        KeyCode::Char('j') | KeyCode::Down => move_by_days(state, 7),
        KeyCode::Char('k') | KeyCode::Up => move_by_days(state, -7),
        KeyCode::Char('J') => state.move_booking_selection_down(),
        KeyCode::Char('K') => state.move_booking_selection_up(),
        KeyCode::Char('t') => jump_to_today(state),
        KeyCode::Char('m') => state.view = ViewType::Month,
        KeyCode::Char('w') => state.view = ViewType::Week,
        KeyCode::Char('d') => state.view = ViewType::Day,
        KeyCode::Char('a') | KeyCode::Enter => state.begin_booking_on_selected_date(),
        KeyCode::Char('v') => enter_visual_mode(state),
        KeyCode::Char('M') => {
            state.begin_move();
        }
        KeyCode::Char('f') => cycle_room_filter(state),
        KeyCode::Char(':') => enter_command_mode(state),
        KeyCode::Char('?') => state.show_help = true,
        KeyCode::Char('g') => move_to_start_of_month(state),
        KeyCode::Char('G') => move_to_end_of_month(state),
        KeyCode::Char('{') => move_by_months(state, -1),
        KeyCode::Char('}') => move_by_months(state, 1),
        _ => {}
    }
}

fn set_selected_date(state: &mut AppState, date: NaiveDate) {
    if date != state.selected_date {
        state.selected_date = date;
        state.reset_booking_selection();
    }
}

fn move_by_days(state: &mut AppState, days: i64) {
    if let Some(new_date) = crate::booking::model::shift_date(state.selected_date, days) {
        set_selected_date(state, new_date);
    }
}

fn jump_to_today(state: &mut AppState) {
    set_selected_date(state, chrono::Local::now().date_naive());
}

fn enter_visual_mode(state: &mut AppState) {
    state.visual_selection_start = Some(state.selected_date);
    state.mode = Mode::Visual;
}

fn cycle_room_filter(state: &mut AppState) {
    let next = state.store.room_filter().next();
    state.on_filter_changed(next);
}

fn enter_command_mode(state: &mut AppState) {
    state.mode = Mode::Command;
    state.command_buffer = ":".to_string();
}

fn move_to_start_of_month(state: &mut AppState) {
    if let Some(first) = state.selected_date.with_day(1) {
        set_selected_date(state, first);
    }
}

fn move_to_end_of_month(state: &mut AppState) {
    let date = state.selected_date;
    if let Some(last) = last_day_of_month(date.year(), date.month()) {
        set_selected_date(state, last);
    }
}

fn move_by_months(state: &mut AppState, months: i32) {
    let date = state.selected_date;
    let index = date.year() * 12 + date.month0() as i32 + months;
    let (year, month) = (index.div_euclid(12), index.rem_euclid(12) as u32 + 1);

    let Some(last) = last_day_of_month(year, month) else { return };
    if let Some(new_date) = NaiveDate::from_ymd_opt(year, month, date.day().min(last.day())) {
        set_selected_date(state, new_date);
    }
}

fn last_day_of_month(year: i32, month: u32) -> Option<NaiveDate> {
    let next_month_first = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    };
    next_month_first?.checked_sub_days(Days::new(1))
}
