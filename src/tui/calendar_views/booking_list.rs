use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use room_booker::{app::AppState, ui::theme::parse_color};

pub fn render(f: &mut Frame, app: &AppState, area: ratatui::layout::Rect) {
    let bookings = app.bookings_for_date(app.selected_date);
    let labels = app.locale.labels();

    let title = format!("{} {}", labels.bookings_on, app.locale.format_long_date(app.selected_date));

    let mut lines = vec![
        Line::from(vec![
            Span::styled(title, Style::default().fg(app.theme.title).add_modifier(Modifier::BOLD)),
        ]),
        Line::from(""),
    ];

    if bookings.is_empty() {
        lines.push(Line::from(vec![
            Span::styled(labels.no_bookings, Style::default().fg(Color::DarkGray)),
        ]));
    } else {
        let selected_base = Style::default().bg(app.theme.selected_bg).add_modifier(Modifier::BOLD);

        for (idx, booking) in bookings.iter().enumerate() {
            let is_selected = idx == app.selected_booking_index;
            let swatch = parse_color(&app.color_for(booking)).unwrap_or(app.theme.booking_marker);

            let (room_style, title_style) = if is_selected {
                (selected_base.fg(Color::Black), selected_base.fg(app.theme.selected_fg))
            } else {
                (Style::default().fg(Color::Yellow), Style::default().fg(Color::White))
            };

            let cursor = if is_selected { ">" } else { " " };
            let name = if booking.user_name.is_empty() { "-" } else { booking.user_name.as_str() };

            lines.push(Line::from(vec![
                Span::styled(cursor, Style::default().fg(app.theme.selected_bg)),
                Span::styled("■ ", Style::default().fg(swatch)),
                Span::styled(name.to_string(), title_style),
                Span::raw(" "),
                Span::styled(app.locale.room_label(booking.room), room_style),
            ]));

            if let Some(participants) = &booking.participants {
                lines.push(Line::from(vec![
                    Span::raw("    + "),
                    Span::styled(participants.clone(), Style::default().fg(Color::DarkGray)),
                ]));
            }
        }

        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(labels.list_hint, Style::default().fg(Color::DarkGray))));
    }

    let content = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(content, area);
}
