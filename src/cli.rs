//! Command-line interface.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::Action;

/// Tic-tac-toe with move history and time travel
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Tic-tac-toe in the terminal with jump-to-move history", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (defaults to ./tictactoe.toml if present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, Default)]
pub enum Command {
    /// Play interactively in the terminal
    #[default]
    Play,

    /// Apply actions headlessly and print the resulting view as JSON
    Replay {
        /// Actions in order: click:<0-8|label>, jump:<step>, restart
        #[arg(required = true)]
        actions: Vec<Action>,
    },
}
