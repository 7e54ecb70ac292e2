//! First-class action types for tic-tac-toe.
//!
//! Views never touch game state. A cell click or a move-list selection is
//! turned into an [`Action`] and handed back up to the
//! [`GameController`](super::GameController), which is the only place state
//! changes.

use std::str::FromStr;

use derive_more::{Display, Error};
use serde::Serialize;
use tracing::instrument;

use super::Position;

/// A request flowing from the views up to the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Action {
    /// Place the next mark at a position.
    #[display("click:{}", _0.to_index())]
    Click(Position),
    /// Show the board as it was after `step` moves.
    #[display("jump:{}", _0)]
    JumpTo(usize),
    /// Throw away the whole history and start over.
    #[display("restart")]
    Restart,
}

/// Error returned when an action string cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Invalid action '{}': {}", input, reason)]
pub struct ActionParseError {
    /// The text that failed to parse.
    pub input: String,
    /// Why it was rejected.
    pub reason: String,
}

impl ActionParseError {
    fn new(input: &str, reason: impl Into<String>) -> Self {
        Self {
            input: input.to_string(),
            reason: reason.into(),
        }
    }
}

impl FromStr for Action {
    type Err = ActionParseError;

    /// Parses `click:<index|label>`, `jump:<step>` or `restart`.
    #[instrument]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("restart") {
            return Ok(Action::Restart);
        }

        let (verb, arg) = trimmed
            .split_once(':')
            .ok_or_else(|| ActionParseError::new(s, "expected <verb>:<argument>"))?;

        match verb.trim().to_ascii_lowercase().as_str() {
            "click" => Position::from_label_or_number(arg)
                .map(Action::Click)
                .ok_or_else(|| ActionParseError::new(s, "unknown board position")),
            "jump" => arg
                .trim()
                .parse::<usize>()
                .map(Action::JumpTo)
                .map_err(|e| ActionParseError::new(s, format!("bad step: {}", e))),
            other => Err(ActionParseError::new(s, format!("unknown verb '{}'", other))),
        }
    }
}
