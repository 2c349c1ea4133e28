use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use room_booker::app::{AppState, Mode, StatusLine, ViewType};
use crate::tui::{calendar_views, dialogs};

pub fn ui(f: &mut Frame, app: &AppState) {
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(f.size());

    let content_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(60),
            Constraint::Percentage(40),
        ])
        .split(main_chunks[1]);

    let chunks = [main_chunks[0], content_chunks[0], content_chunks[1], main_chunks[2]];

    let title = Paragraph::new(title_text(app))
        .style(Style::default().fg(app.theme.title).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, chunks[0]);

    match app.view {
        ViewType::Month => calendar_views::month::render(f, app, chunks[1]),
        ViewType::Week => calendar_views::week::render(f, app, chunks[1]),
        ViewType::Day => calendar_views::day::render(f, app, chunks[1]),
    }

    calendar_views::booking_list::render(f, app, chunks[2]);

    let (status_text, status_color) = status_line(app);
    let status = Paragraph::new(status_text)
        .style(Style::default().fg(status_color))
        .alignment(if matches!(app.mode, Mode::Command) { Alignment::Left } else { Alignment::Center })
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(status, chunks[3]);

    if app.show_help {
        dialogs::help::render(f, app);
    }

    if app.form.is_open() {
        dialogs::booking_form::render(f, app);
    }
}

fn title_text(app: &AppState) -> String {
    let labels = app.locale.labels();
    let view = match app.view {
        ViewType::Month => labels.month_view,
        ViewType::Week => labels.week_view,
        ViewType::Day => labels.day_view,
    };
    format!(
        "{} - {} - {}: {} - {}",
        labels.app_title,
        view,
        labels.filter,
        app.locale.filter_label(app.store.room_filter()),
        app.locale.mode_label(&app.mode)
    )
}

fn status_line(app: &AppState) -> (String, ratatui::style::Color) {
    if matches!(app.mode, Mode::Command) {
        return (app.command_buffer.clone(), app.theme.status_bar);
    }

    let labels = app.locale.labels();
    match &app.status {
        StatusLine::Ready => (
            format!("{} | {} | q / ?", labels.ready, app.store.len()),
            app.theme.status_bar,
        ),
        StatusLine::Notice(message) => (message.clone(), app.theme.notice),
        StatusLine::Error(message) => (message.clone(), app.theme.error),
    }
}
