use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use chrono::Datelike;
use room_booker::{
    app::AppState,
    ui::{theme::parse_color, week_view},
};

const COLUMN_WIDTH: usize = 12;

pub fn render(f: &mut Frame, app: &AppState, area: ratatui::layout::Rect) {
    let layout = week_view::calculate_layout(app);

    let week_range = if let Some(last_day) = layout.days.last() {
        format!("{} - {}",
            short_date(app, layout.week_start),
            app.locale.format_long_date(last_day.date))
    } else {
        app.locale.format_long_date(layout.week_start)
    };

    let mut lines = vec![
        Line::from(vec![
            Span::styled(week_range, Style::default().fg(app.theme.title).add_modifier(Modifier::BOLD)),
        ]),
        Line::from(""),
    ];

    let mut header_spans = Vec::new();
    for day in &layout.days {
        let day_str = format!(" {:<4}{:>2}", app.locale.weekday_label(day.date.weekday()), day.date.day());

        let style = if app.is_date_in_move_preview(day.date) {
            Style::default().bg(app.theme.move_preview).fg(app.theme.selected_fg)
        } else if app.is_date_in_visual_selection(day.date) {
            Style::default().bg(app.theme.range_bg).fg(app.theme.selected_fg).add_modifier(Modifier::BOLD)
        } else if day.is_selected {
            Style::default().bg(app.theme.selected_bg).fg(app.theme.selected_fg)
        } else if day.is_today {
            Style::default().fg(app.theme.today).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(app.theme.weekday_header)
        };

        header_spans.push(Span::styled(format!("{:<width$}", day_str, width = COLUMN_WIDTH), style));
    }

    lines.push(Line::from(header_spans));
    lines.push(Line::from(""));

    let rows = layout.days.iter().map(|d| d.bookings.len()).max().unwrap_or(0);

    for row in 0..rows {
        let mut line_spans = Vec::new();

        for day in &layout.days {
            let Some(chip) = day.bookings.get(row) else {
                line_spans.push(Span::raw(" ".repeat(COLUMN_WIDTH)));
                continue;
            };

            let open = if chip.starts_here { '[' } else { '<' };
            let close = if chip.ends_here { ']' } else { '>' };
            let title: String = chip.title.chars().take(COLUMN_WIDTH - 3).collect();
            let cell_text = format!("{}{:<width$}{}", open, title, close, width = COLUMN_WIDTH - 3);

            let color = parse_color(&chip.color).unwrap_or(app.theme.booking_marker);
            line_spans.push(Span::styled(format!("{} ", cell_text), Style::default().fg(color)));
        }

        lines.push(Line::from(line_spans));
    }

    if rows == 0 {
        lines.push(Line::from(vec![
            Span::styled(app.locale.labels().no_bookings, Style::default().fg(Color::DarkGray)),
        ]));
    }

    let content = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(content, area);
}

fn short_date(app: &AppState, date: chrono::NaiveDate) -> String {
    format!("{} {}", date.day(), app.locale.month_label(date.month()))
}
