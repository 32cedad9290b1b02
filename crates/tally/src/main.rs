//! Tally - terminal tic-tac-toe
//!
//! Interactive play plus a couple of scripting commands over the same core.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod commands;
mod settings;
mod tui;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use settings::Settings;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Play => {
            let settings = Settings::load(&cli.config)
                .with_context(|| format!("Loading {}", cli.config.display()))?;
            tui::run_tui(settings)
        }
        Command::Eval { board } => {
            init_stderr_logging();
            commands::eval(&board, &mut std::io::stdout().lock())?;
            Ok(())
        }
        Command::Replay { moves } => {
            init_stderr_logging();
            let settings = Settings::load(&cli.config)
                .with_context(|| format!("Loading {}", cli.config.display()))?;
            commands::replay(&moves, &settings, &mut std::io::stdout().lock())?;
            Ok(())
        }
    }
}

/// Logs to stderr so command output on stdout stays clean.
fn init_stderr_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();
}
