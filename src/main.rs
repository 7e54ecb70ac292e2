//! tictactoe - play in the terminal or replay actions headlessly.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use tictactoe_history::{Action, Cli, Command, GameController, UiConfig, tui};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = UiConfig::load(cli.config.as_deref())?;

    match cli.command.unwrap_or_default() {
        Command::Play => {
            initialize_file_tracing(&config)?;
            tui::run_tui(config)
        }
        Command::Replay { actions } => {
            initialize_stderr_tracing(&config);
            replay(&actions)
        }
    }
}

fn env_filter(config: &UiConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config.log_filter()))
}

/// Logs go to a file so they don't tear up the terminal UI.
fn initialize_file_tracing(config: &UiConfig) -> Result<()> {
    let log_file = std::fs::File::create(config.log_file()).with_context(|| {
        format!("Failed to create log file {}", config.log_file().display())
    })?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter(config))
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .init();

    info!(log_file = %config.log_file().display(), "File tracing initialized");
    Ok(())
}

fn initialize_stderr_tracing(config: &UiConfig) {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(config))
        .with_writer(std::io::stderr)
        .init();
}

/// Runs actions against a fresh game and prints the final view.
#[instrument(skip(actions), fields(count = actions.len()))]
fn replay(actions: &[Action]) -> Result<()> {
    let controller = GameController::replay(actions).context("Replay failed")?;
    let view = controller.view();
    info!(status = %view.status(), "Replay finished");

    println!("{}", serde_json::to_string_pretty(&view)?);
    Ok(())
}
