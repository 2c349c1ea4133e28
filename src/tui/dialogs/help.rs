use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use room_booker::{app::AppState, ui::theme::Theme};

pub fn render(f: &mut Frame, app: &AppState) {
    let area = f.size();
    let help_width = 60u16.min(area.width);
    let help_height = 23u16.min(area.height);
    let x = (area.width.saturating_sub(help_width)) / 2;
    let y = (area.height.saturating_sub(help_height)) / 2;

    let help_area = ratatui::layout::Rect {
        x,
        y,
        width: help_width,
        height: help_height,
    };

    f.render_widget(Clear, help_area);

    let section = |title: &'static str| {
        Line::from(vec![Span::styled(title, Style::default().fg(app.theme.help_section))])
    };

    let help_text = vec![
        Line::from(vec![Span::styled(app.locale.labels().app_title, Style::default().fg(app.theme.help_title).add_modifier(Modifier::BOLD))]),
        Line::from(""),
        section("Navigation:"),
        Line::from("  h/l      - Previous/next day"),
        Line::from("  j/k      - Next/previous week"),
        Line::from("  J/K      - Select booking on the day"),
        Line::from("  t        - Jump to today"),
        Line::from("  g/G      - First/last day of month"),
        Line::from("  { / }    - Previous/next month"),
        Line::from(""),
        section("Views:"),
        Line::from("  m/w/d    - Month/Week/Day view"),
        Line::from("  f        - Cycle room filter"),
        Line::from(""),
        section("Bookings:"),
        Line::from("  a/Enter  - Book the selected day"),
        Line::from("  v        - Select a range, Enter to book it"),
        Line::from("  M        - Move selected booking (hjkl, Enter)"),
        Line::from(""),
        section("Booking form:"),
        Line::from("  Tab      - Next field (Shift-Tab back)"),
        Line::from("  ←/→      - Change room"),
        Line::from("  Enter    - Save"),
        Line::from("  Esc      - Discard"),
        Line::from(""),
        section("Commands:"),
        Line::from("  :q       - Quit"),
        Line::from("  :goto    - Jump to date (:goto 2025-12-25)"),
        Line::from("  :new     - Book selected day (:new [name])"),
        Line::from("  :room    - Filter rooms (:room meeting|all)"),
        Line::from("  :lang    - Switch language (:lang es)"),
        Line::from(format!("  :theme   - {}", Theme::available_themes().join(", "))),
        Line::from("  :help    - Show this help"),
        Line::from(""),
    ];

    let visible_lines = help_height.saturating_sub(3) as usize;
    let total_lines = help_text.len();
    let max_scroll = total_lines.saturating_sub(visible_lines);
    let scroll = app.help_scroll.min(max_scroll);

    let scrolled_text: Vec<Line> = help_text
        .into_iter()
        .skip(scroll)
        .take(visible_lines)
        .collect();

    let help_paragraph = Paragraph::new(scrolled_text)
        .block(Block::default()
            .borders(Borders::ALL)
            .title(format!(" Help (j/k to scroll, q to close) [{}/{}] ", scroll + 1, total_lines))
            .style(Style::default().bg(Color::Black)))
        .alignment(Alignment::Left);

    f.render_widget(help_paragraph, help_area);
}
