use chrono::NaiveDate;
use crossterm::event::KeyCode;

use crate::app::{AppState, Mode, StatusLine};
use crate::booking::RoomFilter;
use crate::gesture::GestureHandler;
use crate::i18n::Locale;
use crate::ui::theme::Theme;

#[derive(Debug, PartialEq)]
pub enum Command {
    Quit,
    Goto(NaiveDate),
    NewBooking(Option<String>),
    Room(RoomFilter),
    Theme(String),
    Language(Locale),
    Help,
    Error(String),
}

pub fn parse_command(input: &str) -> Command {
    let trimmed = input.trim();

    let Some(command_text) = trimmed.strip_prefix(':') else {
        return Command::Error("Commands must start with ':'".to_string());
    };

    let parts: Vec<&str> = command_text.split_whitespace().collect();

    let Some(&name) = parts.first() else {
        return Command::Error("Empty command".to_string());
    };

    match name {
        "q" | "quit" => Command::Quit,
        "help" => Command::Help,
        "goto" => match parts.get(1) {
            None => Command::Error("goto requires a date argument".to_string()),
            Some(arg) => NaiveDate::parse_from_str(arg, "%Y-%m-%d")
                .map(Command::Goto)
                .unwrap_or_else(|_| Command::Error(format!("Invalid date format: {}", arg))),
        },
        "new" => {
            if parts.len() < 2 {
                Command::NewBooking(None)
            } else {
                Command::NewBooking(Some(parts[1..].join(" ")))
            }
        }
        "room" | "filter" => match parts.get(1) {
            None => Command::Room(RoomFilter::All),
            Some(arg) => arg
                .parse()
                .map(Command::Room)
                .unwrap_or_else(|e| Command::Error(format!("{}", e))),
        },
        "theme" => match parts.get(1) {
            None => Command::Error("theme requires a theme name".to_string()),
            Some(arg) => Command::Theme(arg.to_string()),
        },
        "lang" | "language" => match parts.get(1) {
            None => Command::Error("lang requires a locale (en, es)".to_string()),
            Some(arg) => arg
                .parse()
                .map(Command::Language)
                .unwrap_or_else(|e| Command::Error(format!("{}", e))),
        },
        _ => Command::Error(format!("Unknown command: {}", name)),
    }
}

/// Runs a parsed command. Returns true when the session should end.
pub fn apply_command(command: Command, state: &mut AppState) -> bool {
    state.command_buffer.clear();
    state.mode = Mode::Normal;

    match command {
        Command::Quit => return true,
        Command::Goto(date) => {
            state.selected_date = date;
            state.reset_booking_selection();
        }
        Command::NewBooking(name) => {
            state.begin_booking_on_selected_date();
            if let Some(name) = name
                && let Err(e) = state.on_field_edited("name", &name)
            {
                state.status = StatusLine::Error(e.to_string());
            }
        }
        Command::Room(filter) => state.on_filter_changed(filter),
        Command::Theme(name) => state.theme = Theme::get_by_name(&name),
        Command::Language(locale) => state.locale = locale,
        Command::Help => state.show_help = !state.show_help,
        Command::Error(message) => {
            tracing::debug!("Command rejected: {}", message);
            state.status = StatusLine::Error(message);
        }
    }
    false
}

/// Edits the command line. Returns true when the session should end.
pub fn handle_key(key: KeyCode, state: &mut AppState) -> bool {
    match key {
        KeyCode::Enter => {
            let command = parse_command(&state.command_buffer);
            apply_command(command, state)
        }
        KeyCode::Esc => {
            state.command_buffer.clear();
            state.mode = Mode::Normal;
            false
        }
        KeyCode::Backspace => {
            state.command_buffer.pop();
            if state.command_buffer.is_empty() {
                state.mode = Mode::Normal;
            }
            false
        }
        KeyCode::Char(c) => {
            state.command_buffer.push(c);
            false
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::booking::RoomType;

    #[test]
    fn parse_quit_command() {
        assert_eq!(parse_command(":q"), Command::Quit);
        assert_eq!(parse_command(":quit"), Command::Quit);
    }

    #[test]
    fn parse_goto_command_with_date() {
        let cmd = parse_command(":goto 2025-01-15");
        let expected_date = NaiveDate::from_ymd_opt(2025, 1, 15).unwrap();
        assert_eq!(cmd, Command::Goto(expected_date));
    }

    #[test]
    fn parse_goto_command_with_invalid_date_returns_error() {
        assert!(matches!(parse_command(":goto invalid"), Command::Error(_)));
        assert!(matches!(parse_command(":goto"), Command::Error(_)));
    }

    #[test]
    fn parse_new_booking_with_multiple_words() {
        let cmd = parse_command(":new Board review session");
        assert_eq!(cmd, Command::NewBooking(Some("Board review session".to_string())));
        assert_eq!(parse_command(":new"), Command::NewBooking(None));
    }

    #[test]
    fn parse_room_filter_command() {
        assert_eq!(parse_command(":room meeting"), Command::Room(RoomFilter::Only(RoomType::Meeting)));
        assert_eq!(parse_command(":room all"), Command::Room(RoomFilter::All));
        assert_eq!(parse_command(":room"), Command::Room(RoomFilter::All));
        assert_eq!(parse_command(":filter none"), Command::Room(RoomFilter::Only(RoomType::Unassigned)));
        assert!(matches!(parse_command(":room garage"), Command::Error(_)));
    }

    #[test]
    fn parse_language_command() {
        assert_eq!(parse_command(":lang es"), Command::Language(Locale::Spanish));
        assert!(matches!(parse_command(":lang"), Command::Error(_)));
        assert!(matches!(parse_command(":lang xx"), Command::Error(_)));
    }

    #[test]
    fn parse_command_without_colon_returns_error() {
        assert!(matches!(parse_command("quit"), Command::Error(_)));
    }

    #[test]
    fn parse_empty_command_returns_error() {
        assert!(matches!(parse_command(":"), Command::Error(_)));
    }

    #[test]
    fn parse_unknown_command_returns_error() {
        assert!(matches!(parse_command(":sync"), Command::Error(_)));
    }

    #[test]
    fn new_command_opens_draft_with_name() {
        let mut state = AppState::new();

        let quit = apply_command(Command::NewBooking(Some("Ana".to_string())), &mut state);

        assert!(!quit);
        assert_eq!(state.mode, Mode::Insert);
        assert_eq!(state.form.draft().unwrap().user_name, "Ana");
    }

    #[test]
    fn room_command_changes_filter() {
        let mut state = AppState::new();

        apply_command(Command::Room(RoomFilter::Only(RoomType::Event)), &mut state);

        assert_eq!(state.store.room_filter(), RoomFilter::Only(RoomType::Event));
        assert_eq!(state.mode, Mode::Normal);
    }

    #[test]
    fn typed_command_runs_on_enter() {
        let mut state = AppState::new();
        state.mode = Mode::Command;
        state.command_buffer = ":".to_string();

        for c in "lang es".chars() {
            handle_key(KeyCode::Char(c), &mut state);
        }
        let quit = handle_key(KeyCode::Enter, &mut state);

        assert!(!quit);
        assert_eq!(state.locale, Locale::Spanish);
        assert!(state.command_buffer.is_empty());
    }

    #[test]
    fn goto_far_future_still_lays_out_month() {
        let mut state = AppState::new();

        apply_command(parse_command(":goto +262142-12-15"), &mut state);

        assert_eq!(state.selected_date, NaiveDate::from_ymd_opt(262142, 12, 15).unwrap());
        let layout = crate::ui::month_view::calculate_layout(&state);
        assert!(layout.weeks.len() <= 6);
    }

    #[test]
    fn quit_command_ends_session() {
        let mut state = AppState::new();
        state.command_buffer = ":q".to_string();
        assert!(handle_key(KeyCode::Enter, &mut state));
    }

    #[test]
    fn error_command_sets_status() {
        let mut state = AppState::new();
        apply_command(Command::Error("Unknown command: x".to_string()), &mut state);
        assert_eq!(state.status, StatusLine::Error("Unknown command: x".to_string()));
    }
}
