use anyhow::Context;
use tracing_subscriber::EnvFilter;

use room_booker::{storage::config::Config, AppState};

mod cli;
use cli::{parse_cli_args, run_agenda_mode, usage, CliOptions};
mod sample_bookings;
mod tui;
use tui::run_tui;

fn main() -> anyhow::Result<()> {
    setup_logging();

    let options = match parse_cli_args(std::env::args().skip(1)) {
        Ok(options) => options,
        Err(err) => {
            eprintln!("Error: {}", err);
            println!("{}", usage());
            return Ok(());
        }
    };

    if options.help {
        println!("{}", usage());
        return Ok(());
    }

    let config = Config::load_or_create().context("loading configuration")?;
    let app = build_app(&config, &options);

    if let Some(date) = options.agenda {
        return run_agenda_mode(&app, date, options.json);
    }

    run_tui(app).context("running terminal session")
}

fn build_app(config: &Config, options: &CliOptions) -> AppState {
    let mut app = AppState::from_config(config);
    if let Some(locale) = options.locale {
        app = app.with_locale(locale);
    }
    if options.sample {
        sample_bookings::add_sample_bookings(&mut app);
    }
    app
}

fn setup_logging() {
    let log_dir = Config::config_dir();

    std::fs::create_dir_all(&log_dir).ok();

    let file_appender = tracing_appender::rolling::daily(log_dir, "room-booker.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_target(false)
        .init();

    std::mem::forget(guard);

    tracing::info!("room-booker started");
}
