use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use chrono::Datelike;
use room_booker::{
    app::{AppState, Mode},
    ui::month_view,
};

pub fn render(f: &mut Frame, app: &AppState, area: ratatui::layout::Rect) {
    let layout = month_view::calculate_layout(app);
    let labels = app.locale.labels();

    let month_name = app.locale.format_month_year(layout.year, layout.month);

    let header = layout
        .weekdays
        .iter()
        .map(|wd| Span::styled(format!(" {:<4}", app.locale.weekday_label(*wd)), Style::default().fg(app.theme.weekday_header)))
        .collect::<Vec<_>>();

    let mut lines = vec![
        Line::from(vec![
            Span::styled(month_name, Style::default().fg(app.theme.title).add_modifier(Modifier::BOLD)),
        ]),
        Line::from(""),
        Line::from(header),
    ];

    for week in &layout.weeks {
        let mut day_spans = Vec::new();

        for day_cell in &week.days {
            let marker = if day_cell.has_bookings() { '•' } else { ' ' };
            let day_text = format!(" {:>2}{}  ", day_cell.date.day(), marker);

            let mut style = Style::default();

            if !day_cell.is_current_month {
                style = style.fg(app.theme.inactive_day);
            } else if app.is_date_in_move_preview(day_cell.date) {
                style = style.bg(app.theme.move_preview).fg(app.theme.selected_fg).add_modifier(Modifier::BOLD);
            } else if app.is_date_in_visual_selection(day_cell.date) {
                style = style.bg(app.theme.range_bg).fg(app.theme.selected_fg).add_modifier(Modifier::BOLD);
            } else if day_cell.is_selected {
                style = style.bg(app.theme.selected_bg).fg(app.theme.selected_fg).add_modifier(Modifier::BOLD);
            } else if day_cell.is_today {
                style = style.fg(app.theme.today).add_modifier(Modifier::BOLD);
            } else if day_cell.has_bookings() {
                style = style.fg(app.theme.booking_marker);
            }

            day_spans.push(Span::styled(day_text, style));
        }

        lines.push(Line::from(day_spans));
    }

    lines.push(Line::from(""));

    match app.mode {
        Mode::Visual => {
            if let Some((start, end)) = app.get_visual_selection_range() {
                let days = (end - start).num_days() + 1;
                lines.push(Line::from(vec![
                    Span::styled("VISUAL ", Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD)),
                    Span::styled(format!("({} {}) ", days, labels.days_suffix), Style::default().fg(Color::Yellow)),
                    Span::raw(labels.visual_hint),
                ]));
            }
        }
        Mode::Move => {
            lines.push(Line::from(vec![
                Span::styled("MOVE ", Style::default().fg(app.theme.move_preview).add_modifier(Modifier::BOLD)),
                Span::raw(labels.move_hint),
            ]));
        }
        _ => {
            lines.push(Line::from(Span::styled(labels.month_hint, Style::default().fg(Color::DarkGray))));
        }
    }

    let content = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(content, area);
}
