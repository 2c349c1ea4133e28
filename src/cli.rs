use std::{
    env,
    io::{self, Write},
    process::{Command, Stdio},
};

use chrono::{Local, NaiveDate};

use room_booker::{i18n::Locale, AppState, Booking, RenderFeed};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CliOptions {
    pub sample: bool,
    pub locale: Option<Locale>,
    pub agenda: Option<NaiveDate>,
    pub json: bool,
    pub help: bool,
}

pub fn usage() -> &'static str {
    "Usage: room-booker [--sample] [--locale en|es] [--agenda [YYYY/MM/DD] [--json]]"
}

pub fn parse_cli_args<I>(args: I) -> Result<CliOptions, String>
where
    I: IntoIterator<Item = String>,
{
    let mut options = CliOptions::default();
    let mut args = args.into_iter().peekable();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--sample" => options.sample = true,
            "--json" => options.json = true,
            "--help" | "-h" => options.help = true,
            "--locale" => {
                let value = args.next().ok_or("--locale requires a value (en, es)")?;
                options.locale = Some(value.parse().map_err(|e| format!("{}", e))?);
            }
            "--agenda" => {
                let date = match args.next_if(|next| !next.starts_with("--")) {
                    Some(date_str) => NaiveDate::parse_from_str(&date_str, "%Y/%m/%d")
                        .map_err(|_| format!("Invalid date '{}'. Use YYYY/MM/DD.", date_str))?,
                    None => Local::now().date_naive(),
                };
                options.agenda = Some(date);
            }
            _ => return Err(format!("Unknown argument: {}", arg)),
        }
    }

    if options.json && options.agenda.is_none() {
        return Err("--json only applies to --agenda".to_string());
    }

    Ok(options)
}

/// Prints the bookings visible on `date`. Nothing is persisted, so only
/// `--sample` bookings can show up here.
pub fn run_agenda_mode(app: &AppState, date: NaiveDate, json: bool) -> anyhow::Result<()> {
    if json {
        let events: Vec<_> = app
            .render_events()
            .into_iter()
            .filter(|e| app.store.get(&e.id).is_some_and(|b| b.covers(date)))
            .collect();
        println!("{}", serde_json::to_string_pretty(&events)?);
        return Ok(());
    }

    let agenda = format_agenda_text(app, date, &app.bookings_for_date(date));
    display_with_pager(&agenda)?;
    Ok(())
}

fn format_agenda_text(app: &AppState, date: NaiveDate, bookings: &[&Booking]) -> String {
    let labels = app.locale.labels();
    let mut lines = Vec::new();
    lines.push(format!("{} – {}", labels.app_title, app.locale.format_long_date(date)));
    lines.push(String::new());

    if bookings.is_empty() {
        lines.push(labels.no_bookings.to_string());
    } else {
        for booking in bookings {
            lines.push(format!("- {}", build_agenda_line(app, booking)));
        }
    }

    lines.join("\n")
}

fn build_agenda_line(app: &AppState, booking: &Booking) -> String {
    let span_label = if booking.span_days() > 1 {
        format!(
            "{} {} ({} - {})",
            booking.span_days(),
            app.locale.labels().days_suffix,
            app.format_date(booking.start),
            app.format_date(booking.end)
        )
    } else {
        app.locale.labels().all_day.to_string()
    };

    let mut line = format!(
        "{:<32} {} [{}]",
        span_label,
        booking.user_name,
        app.locale.room_label(booking.room)
    );
    if let Some(participants) = &booking.participants {
        line.push_str(&format!(" + {}", participants));
    }
    line
}

fn display_with_pager(text: &str) -> Result<(), io::Error> {
    let pager_value = env::var("PAGER").unwrap_or_else(|_| "less".to_string());
    let mut parts = pager_value.split_whitespace();
    let Some(cmd) = parts.next() else {
        println!("{text}");
        return Ok(());
    };
    let args: Vec<&str> = parts.collect();

    match Command::new(cmd).args(&args).stdin(Stdio::piped()).spawn() {
        Ok(mut child) => {
            if let Some(stdin) = child.stdin.as_mut() {
                stdin.write_all(text.as_bytes())?;
            }
            let _ = child.wait();
        }
        Err(e) => {
            tracing::debug!("Pager {} unavailable: {}", cmd, e);
            println!("{text}");
        }
    }

    Ok(())
}
