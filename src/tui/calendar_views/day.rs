use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use room_booker::{
    app::AppState,
    ui::{day_view, theme::parse_color},
};

pub fn render(f: &mut Frame, app: &AppState, area: ratatui::layout::Rect) {
    let layout = day_view::calculate_layout(app);
    let labels = app.locale.labels();

    let day_title = app.locale.format_long_date(layout.date);
    let title_color = if layout.is_today { app.theme.today } else { app.theme.title };

    let mut lines = vec![
        Line::from(vec![
            Span::styled(day_title, Style::default().fg(title_color).add_modifier(Modifier::BOLD)),
        ]),
        Line::from(""),
    ];

    for entry in &layout.entries {
        let span = if entry.span_days > 1 {
            format!(
                "{} {} ({} - {})",
                entry.span_days,
                labels.days_suffix,
                app.format_date(entry.start),
                app.format_date(entry.end)
            )
        } else {
            labels.all_day.to_string()
        };

        let swatch = parse_color(&entry.color).unwrap_or(app.theme.booking_marker);
        let title_style = if entry.is_selected {
            Style::default().bg(app.theme.selected_bg).fg(app.theme.selected_fg).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };

        lines.push(Line::from(vec![
            Span::styled("■ ", Style::default().fg(swatch)),
            Span::styled(entry.title.clone(), title_style),
            Span::styled(format!("  {}", app.locale.room_label(entry.room)), Style::default().fg(Color::Yellow)),
        ]));
        lines.push(Line::from(vec![
            Span::raw("  "),
            Span::styled(span, Style::default().fg(Color::Green)),
        ]));

        if let Some(participants) = &entry.participants {
            lines.push(Line::from(vec![
                Span::styled(format!("  {}: ", labels.participants), Style::default().fg(Color::DarkGray)),
                Span::raw(participants.clone()),
            ]));
        }
        if let Some(comment) = &entry.comment {
            lines.push(Line::from(vec![
                Span::styled(format!("  {}: ", labels.comment), Style::default().fg(Color::DarkGray)),
                Span::raw(comment.clone()),
            ]));
        }

        lines.push(Line::from(""));
    }

    if layout.entries.is_empty() {
        lines.push(Line::from(vec![
            Span::styled(labels.no_bookings, Style::default().fg(Color::DarkGray)),
        ]));
    }

    let content = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(content, area);
}
