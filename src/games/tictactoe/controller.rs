//! The game controller: single owner of all mutable game state.
//!
//! Views receive a [`GameView`] snapshot and report user intent as
//! [`Action`]s. Every accepted action builds a fresh [`GameState`] and swaps
//! it in with one assignment; nothing else ever writes the state.

use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_new::new;
use serde::Serialize;
use tracing::{debug, info, instrument, warn};

use super::action::Action;
use super::invariants::debug_assert_invariants;
use super::rules::evaluate_winner;
use super::view::{GameView, MoveDescriptor};
use super::{Board, Player, Position};

/// The board as it stood right after one move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Getters, new)]
pub struct HistoryEntry {
    board: Board,
}

/// Complete game state.
///
/// Invariants:
/// - `history` is never empty; entry 0 is the empty board.
/// - `step_number < history.len()`.
/// - `x_is_next == (step_number % 2 == 0)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Getters)]
pub struct GameState {
    history: Vec<HistoryEntry>,
    step_number: usize,
    x_is_next: bool,
}

impl GameState {
    /// The state every game starts from: one empty board, X to move.
    pub fn initial() -> Self {
        Self {
            history: vec![HistoryEntry::new(Board::new())],
            step_number: 0,
            x_is_next: true,
        }
    }

    /// The board currently displayed.
    pub fn current_board(&self) -> &Board {
        self.history[self.step_number].board()
    }

    /// The player who places the next mark.
    pub fn next_player(&self) -> Player {
        Player::from_x_is_next(self.x_is_next)
    }

    /// State after placing the next mark at `pos` on the displayed board.
    ///
    /// Any history past the displayed step is dropped first.
    fn with_move(&self, pos: Position) -> Self {
        let board = self.current_board().with_mark(pos, self.next_player());
        let mut history = self.history[..=self.step_number].to_vec();
        history.push(HistoryEntry::new(board));
        Self {
            step_number: history.len() - 1,
            history,
            x_is_next: !self.x_is_next,
        }
    }

    /// State showing `step`, keeping the full history.
    fn at_step(&self, step: usize) -> Self {
        Self {
            history: self.history.clone(),
            step_number: step,
            x_is_next: step % 2 == 0,
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::initial()
    }
}

/// Why a click left the game untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Rejection {
    /// The clicked square already holds a mark.
    #[display("square occupied")]
    Occupied,
    /// The displayed board already has a winner.
    #[display("game already won")]
    AlreadyWon,
}

/// Result of a click. Rejected clicks are silent no-ops, not errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// A mark was placed for this player.
    Placed(Player),
    /// The click was ignored.
    Ignored(Rejection),
}

/// Errors raised by the controller.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum ControllerError {
    /// A jump targeted a step that is not in the history.
    #[display("Step {} is out of range (history has {} entries)", step, len)]
    StepOutOfRange {
        /// Requested step.
        step: usize,
        /// Number of history entries at the time.
        len: usize,
    },
}

/// Owns the [`GameState`] and applies actions to it.
#[derive(Debug, Clone, Default)]
pub struct GameController {
    state: GameState,
}

impl GameController {
    /// Creates a controller holding the initial state.
    #[instrument]
    pub fn new() -> Self {
        Self {
            state: GameState::initial(),
        }
    }

    /// Returns the current state snapshot.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Handles a click on `pos` of the displayed board.
    #[instrument(skip(self), fields(position = %pos, step = self.state.step_number))]
    pub fn click(&mut self, pos: Position) -> ClickOutcome {
        let current = self.state.current_board();

        if let Some(winner) = evaluate_winner(current) {
            debug!(%winner, "Ignoring click, game already decided");
            return ClickOutcome::Ignored(Rejection::AlreadyWon);
        }
        if !current.is_empty(pos) {
            debug!("Ignoring click on occupied square");
            return ClickOutcome::Ignored(Rejection::Occupied);
        }

        let player = self.state.next_player();
        let discarded = self.state.history.len() - 1 - self.state.step_number;
        if discarded > 0 {
            debug!(discarded, "Dropping future moves after time travel");
        }

        self.state = self.state.with_move(pos);
        debug_assert_invariants(&self.state);
        info!(%player, step = self.state.step_number, "Mark placed");
        debug!(board = %self.state.current_board(), "Board after move");
        ClickOutcome::Placed(player)
    }

    /// Shows the board as it was after `step` moves.
    ///
    /// # Errors
    ///
    /// Returns [`ControllerError::StepOutOfRange`] if `step` is not a valid
    /// history index; the state is left unchanged.
    #[instrument(skip(self))]
    pub fn jump_to(&mut self, step: usize) -> Result<(), ControllerError> {
        let len = self.state.history.len();
        if step >= len {
            warn!(step, len, "Rejecting jump outside history");
            return Err(ControllerError::StepOutOfRange { step, len });
        }

        self.state = self.state.at_step(step);
        debug_assert_invariants(&self.state);
        debug!(x_is_next = self.state.x_is_next, "Jumped");
        Ok(())
    }

    /// Discards all history and starts a fresh game.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        info!(moves = self.state.history.len() - 1, "Restarting game");
        self.state = GameState::initial();
    }

    /// Applies one action coming up from the views.
    ///
    /// # Errors
    ///
    /// Propagates [`ControllerError`] from [`GameController::jump_to`].
    #[instrument(skip(self))]
    pub fn dispatch(&mut self, action: Action) -> Result<(), ControllerError> {
        match action {
            Action::Click(pos) => {
                self.click(pos);
                Ok(())
            }
            Action::JumpTo(step) => self.jump_to(step),
            Action::Restart => {
                self.restart();
                Ok(())
            }
        }
    }

    /// Applies `actions` in order to a fresh controller.
    ///
    /// # Errors
    ///
    /// Stops at the first action the controller rejects.
    #[instrument(skip(actions), fields(count = actions.len()))]
    pub fn replay(actions: &[Action]) -> Result<Self, ControllerError> {
        let mut controller = Self::new();
        for &action in actions {
            controller.dispatch(action)?;
        }
        Ok(controller)
    }

    /// Derives everything a view needs from the current state.
    #[instrument(level = "trace", skip(self))]
    pub fn view(&self) -> GameView {
        let board = *self.state.current_board();
        let winner = evaluate_winner(&board);
        let status = match winner {
            Some(winner) => format!("Winner: {}", winner),
            None => format!("Next player: {}", self.state.next_player()),
        };
        let moves = (0..self.state.history.len())
            .map(MoveDescriptor::for_step)
            .collect();

        GameView::new(
            board,
            winner,
            status,
            self.state.step_number,
            self.state.next_player(),
            moves,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_serializes_for_inspection() {
        let mut game = GameController::new();
        game.click(Position::Center);

        let json = serde_json::to_value(game.state()).expect("state serializes");
        assert_eq!(json["step_number"], 1);
        assert_eq!(json["x_is_next"], false);
        assert_eq!(json["history"].as_array().map(Vec::len), Some(2));
    }

    #[test]
    #[cfg_attr(debug_assertions, should_panic(expected = "Invariant violation"))]
    fn test_broken_state_trips_invariant_check() {
        let broken = GameState {
            history: Vec::new(),
            step_number: 0,
            x_is_next: true,
        };
        debug_assert_invariants(&broken);
    }
}
