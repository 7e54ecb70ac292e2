//! Game rules for tic-tac-toe.
//!
//! Pure functions over [`Board`](super::Board) snapshots. The controller
//! consults them on every click and every render.

pub mod win;

pub use win::{WINNING_LINES, evaluate_winner};
