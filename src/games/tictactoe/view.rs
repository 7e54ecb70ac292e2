//! Read-only snapshots handed from the controller to the views.

use derive_getters::Getters;
use derive_new::new;
use serde::Serialize;

use super::action::Action;
use super::{Board, Player};

/// One row of the move list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Getters)]
pub struct MoveDescriptor {
    step: usize,
    label: String,
}

impl MoveDescriptor {
    /// Describes history entry `step`.
    pub fn for_step(step: usize) -> Self {
        let label = if step == 0 {
            "Go to game start".to_string()
        } else {
            format!("Go to move #{}", step)
        };
        Self { step, label }
    }

    /// The action selecting this entry produces.
    pub fn action(&self) -> Action {
        Action::JumpTo(self.step)
    }
}

/// Everything derived from the game state for one render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Getters, new)]
pub struct GameView {
    board: Board,
    winner: Option<Player>,
    status: String,
    step_number: usize,
    next_player: Player,
    moves: Vec<MoveDescriptor>,
}
