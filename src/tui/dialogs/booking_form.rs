use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use room_booker::{app::AppState, ui::theme::parse_color, FormField};

pub fn render(f: &mut Frame, app: &AppState) {
    let Some(draft) = app.form.draft() else {
        return;
    };
    let labels = app.locale.labels();

    let area = f.size();
    let form_width = 70u16.min(area.width);
    let form_height = 18u16.min(area.height);
    let x = (area.width.saturating_sub(form_width)) / 2;
    let y = (area.height.saturating_sub(form_height)) / 2;

    let form_area = ratatui::layout::Rect {
        x,
        y,
        width: form_width,
        height: form_height,
    };

    f.render_widget(Clear, form_area);

    let active_color = app.theme.selected_bg;
    let inactive_color = Color::DarkGray;

    let dates = if draft.range.start == draft.range.end {
        app.locale.format_long_date(draft.range.start)
    } else {
        format!(
            "{} - {} ({} {})",
            app.locale.format_long_date(draft.range.start),
            app.locale.format_long_date(draft.range.end),
            draft.range.days(),
            labels.days_suffix
        )
    };

    let mut form_text = vec![
        Line::from(vec![Span::styled(labels.new_booking, Style::default().fg(app.theme.title).add_modifier(Modifier::BOLD))]),
        Line::from(""),
        Line::from(vec![
            Span::styled(format!("{}: ", labels.dates), Style::default().fg(inactive_color)),
            Span::raw(dates),
        ]),
        Line::from(""),
    ];

    for field in FormField::ORDER {
        let label_color = if app.form.active_field() == field { active_color } else { inactive_color };
        let value = match field {
            FormField::Room => format!("< {} >", app.locale.room_label(draft.room)),
            _ => draft.value(field),
        };

        let mut spans = vec![
            Span::styled(format!("{}: ", app.locale.field_label(field)), Style::default().fg(label_color)),
            Span::raw(value),
        ];
        if field == FormField::Color
            && let Some(color) = parse_color(&draft.color)
        {
            spans.push(Span::styled(" ■", Style::default().fg(color)));
        }

        form_text.push(Line::from(spans));
        form_text.push(Line::from(""));
    }

    form_text.push(Line::from(Span::styled(labels.form_hint, Style::default().fg(Color::Cyan))));

    let form_paragraph = Paragraph::new(form_text)
        .block(Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} ", labels.new_booking))
            .style(Style::default().bg(Color::Black)))
        .alignment(Alignment::Left);

    f.render_widget(form_paragraph, form_area);
}
