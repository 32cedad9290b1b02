//! Terminal UI for tally.

mod app;
mod input;
mod ui;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use tracing::{debug, error, info, instrument};

use crate::settings::Settings;
use app::App;

/// Runs the interactive game until the user quits.
pub fn run_tui(settings: Settings) -> Result<()> {
    // Setup logging to file to avoid interfering with TUI
    let log_file = std::fs::File::create(settings.log_file())
        .with_context(|| format!("Creating log file {}", settings.log_file().display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    info!("Starting tally TUI");

    enable_raw_mode()?;
    let mut terminal = setup_or_restore(setup_terminal, restore_terminal)?;

    let res = run_app(&mut terminal, App::new(settings));

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }

    res
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    Ok(Terminal::new(CrosstermBackend::new(stdout))?)
}

fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)
}

/// Runs `setup`, calling `restore` before returning its error.
fn setup_or_restore<T>(
    setup: impl FnOnce() -> Result<T>,
    restore: impl FnOnce() -> io::Result<()>,
) -> Result<T> {
    setup().or_else(|e| {
        error!(error = %e, "Failed to set up terminal");
        if let Err(restore_err) = restore() {
            error!(error = %restore_err, "Failed to restore terminal");
        }
        Err(e)
    })
}

/// Draws, then blocks for the next key; one key is fully handled before the next.
#[instrument(skip_all)]
fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|frame| ui::draw(frame, &app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            debug!(code = ?key.code, "Key pressed");
            app.handle_key(key.code);
        }

        if app.should_quit() {
            info!(
                games = app.session().history().len(),
                "Leaving TUI"
            );
            return Ok(());
        }
    }
}
