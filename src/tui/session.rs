use std::io;
use crossterm::{
    event::{self, Event as TermEvent, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    Terminal,
};
use room_booker::{
    app::{AppState, Mode},
    input::{command_mode, insert_mode, move_mode, normal_mode, visual_mode},
};
use crate::tui::presentation::ui;

pub fn run_tui(mut app: AppState) -> Result<(), io::Error> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    tracing::info!(
        "Session started with {} bookings, locale {}",
        app.store.len(),
        app.locale.code()
    );

    let res = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!("Session ended with error: {}", err);
        println!("Error: {:?}", err);
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut AppState,
) -> io::Result<()> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        if let TermEvent::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
            && dispatch_key(key.code, app)
        {
            tracing::info!("Session closed");
            return Ok(());
        }
    }
}

/// Routes one key press to the handler for the current mode. Returns true
/// when the session should end.
fn dispatch_key(code: KeyCode, app: &mut AppState) -> bool {
    match app.mode {
        Mode::Normal => {
            if app.show_help {
                handle_help_keys(code, app);
                false
            } else if code == KeyCode::Char('q') {
                true
            } else {
                normal_mode::handle_key(code, app);
                false
            }
        }
        Mode::Command => command_mode::handle_key(code, app),
        Mode::Insert => {
            insert_mode::handle_key(code, app);
            false
        }
        Mode::Visual => {
            visual_mode::handle_key(code, app);
            false
        }
        Mode::Move => {
            move_mode::handle_key(code, app);
            false
        }
    }
}

fn handle_help_keys(code: KeyCode, app: &mut AppState) {
    match code {
        KeyCode::Char('j') => {
            app.help_scroll = app.help_scroll.saturating_add(1);
        }
        KeyCode::Char('k') => {
            app.help_scroll = app.help_scroll.saturating_sub(1);
        }
        KeyCode::Char('q') | KeyCode::Esc => {
            app.show_help = false;
            app.help_scroll = 0;
        }
        _ => {}
    }
}
