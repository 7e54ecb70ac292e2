//! Tic-tac-toe with move history.

mod action;
mod controller;
pub mod invariants;
mod position;
pub mod rules;
mod types;
mod view;

pub use action::{Action, ActionParseError};
pub use controller::{
    ClickOutcome, ControllerError, GameController, GameState, HistoryEntry, Rejection,
};
pub use position::Position;
pub use rules::evaluate_winner;
pub use types::{Board, Player, Square};
pub use view::{GameView, MoveDescriptor};
