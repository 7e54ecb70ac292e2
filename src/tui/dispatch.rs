//! Upward channel from views to the controller.

use std::sync::mpsc;

use tracing::{trace, warn};

use crate::games::tictactoe::Action;

/// Sending half of the action channel, shared by every view callback.
#[derive(Debug, Clone)]
pub struct Dispatcher {
    tx: mpsc::Sender<Action>,
}

impl Dispatcher {
    /// Creates a dispatcher and the receiver the event loop drains.
    pub fn channel() -> (Self, mpsc::Receiver<Action>) {
        let (tx, rx) = mpsc::channel();
        (Self { tx }, rx)
    }

    /// Queues `action` for the controller.
    pub fn dispatch(&self, action: Action) {
        trace!(%action, "Dispatching action");
        if let Err(e) = self.tx.send(action) {
            warn!(action = %e.0, "Action receiver dropped");
        }
    }
}
