//! Properties every [`GameState`] must satisfy.
//!
//! The controller checks them in debug builds each time it swaps in a new
//! state. Tests can check them directly.

use tracing::error;

use super::{GameState, Player, Square};

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// A group of invariants checked together.
pub trait InvariantSet<S> {
    /// Returns the descriptions of every invariant that does not hold.
    fn violations(state: &S) -> Vec<&'static str>;
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn violations(state: &S) -> Vec<&'static str> {
        [
            (I1::holds(state), I1::description()),
            (I2::holds(state), I2::description()),
            (I3::holds(state), I3::description()),
        ]
        .into_iter()
        .filter_map(|(holds, description)| (!holds).then_some(description))
        .collect()
    }
}

/// The step pointer addresses an existing snapshot.
pub struct StepInRange;

impl Invariant<GameState> for StepInRange {
    fn holds(state: &GameState) -> bool {
        *state.step_number() < state.history().len()
    }

    fn description() -> &'static str {
        "Step pointer lies inside the history"
    }
}

/// X moves on even steps, O on odd ones.
pub struct TurnMatchesStep;

impl Invariant<GameState> for TurnMatchesStep {
    fn holds(state: &GameState) -> bool {
        *state.x_is_next() == (state.step_number() % 2 == 0)
    }

    fn description() -> &'static str {
        "X is next exactly when the step number is even"
    }
}

/// Each snapshot adds one mark for the right player and keeps all others.
pub struct HistoryConsistent;

impl Invariant<GameState> for HistoryConsistent {
    fn holds(state: &GameState) -> bool {
        let history = state.history();
        let Some(first) = history.first() else {
            return false;
        };
        if first.board().marks() != 0 {
            return false;
        }

        history.windows(2).enumerate().all(|(step, pair)| {
            let mover = if step % 2 == 0 { Player::X } else { Player::O };
            let before = pair[0].board().squares();
            let after = pair[1].board().squares();

            let mut added = 0;
            for (old, new) in before.iter().zip(after) {
                match (old, new) {
                    (a, b) if a == b => {}
                    (Square::Empty, Square::Occupied(p)) if *p == mover => added += 1,
                    _ => return false,
                }
            }
            added == 1
        })
    }

    fn description() -> &'static str {
        "Each move adds one mark, alternating X then O, never overwriting"
    }
}

/// Every invariant the controller maintains.
pub type GameStateInvariants = (StepInRange, TurnMatchesStep, HistoryConsistent);

/// Panics in debug builds if `state` breaks an invariant.
pub fn debug_assert_invariants(state: &GameState) {
    if cfg!(debug_assertions) {
        let violations = GameStateInvariants::violations(state);
        if !violations.is_empty() {
            error!(?violations, step = state.step_number(), "Game state invariant violated");
        }
        assert!(violations.is_empty(), "Invariant violation: {:?}", violations);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{GameController, Position};

    #[test]
    fn test_initial_state_holds() {
        assert!(GameStateInvariants::violations(&GameState::initial()).is_empty());
    }

    #[test]
    fn test_holds_through_jumps_and_branches() {
        let mut game = GameController::new();
        for pos in [Position::Center, Position::TopLeft, Position::BottomRight] {
            game.click(pos);
        }
        game.jump_to(1).expect("step 1 exists");
        assert!(GameStateInvariants::violations(game.state()).is_empty());

        game.click(Position::TopRight);
        assert!(GameStateInvariants::violations(game.state()).is_empty());
    }
}
