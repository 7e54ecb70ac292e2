//! Tic-tac-toe with a move history you can travel through.
//!
//! # Architecture
//!
//! - **Controller**: [`GameController`] owns the only mutable state, a
//!   [`GameState`] holding every board snapshot, the step being shown and
//!   whose turn it is.
//! - **Rules**: [`evaluate_winner`] is a pure check over the eight lines.
//! - **Views**: the [`tui`] module builds a stateless view tree (grid,
//!   cells, move list) from a [`GameView`] snapshot. User input runs the
//!   callbacks in that tree, which send [`Action`]s back to the controller.
//!
//! # Example
//!
//! ```
//! use tictactoe_history::{Action, GameController, Position};
//!
//! let mut game = GameController::new();
//! game.dispatch(Action::Click(Position::Center)).unwrap();
//! assert_eq!(game.view().status(), "Next player: O");
//!
//! game.dispatch(Action::JumpTo(0)).unwrap();
//! assert_eq!(game.view().status(), "Next player: X");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod games;
pub mod tui;

// Crate-level exports - CLI
pub use cli::{Cli, Command};

// Crate-level exports - Configuration
pub use config::{ConfigError, DEFAULT_CONFIG_FILE, UiConfig};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    Action, ActionParseError, Board, ClickOutcome, ControllerError, GameController, GameState,
    GameView, HistoryEntry, MoveDescriptor, Player, Position, Rejection, Square, evaluate_winner,
    rules::WINNING_LINES,
};
