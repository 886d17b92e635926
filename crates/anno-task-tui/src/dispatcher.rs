//! Dispatcher for middleware action dispatch
//!
//! When middleware (or an async task it spawned) needs to dispatch
//! actions, it uses the Dispatcher. Dispatched actions re-enter the
//! middleware chain from the beginning, so middleware can trigger other
//! middleware handlers.

use crate::actions::Action;
use std::sync::mpsc::Sender;

/// Dispatcher for sending actions through the middleware chain
#[derive(Clone)]
pub struct Dispatcher {
    action_tx: Sender<Action>,
}

impl Dispatcher {
    /// Create a new dispatcher
    ///
    /// `action_tx` must be a clone of the channel feeding the background
    /// worker, so dispatched actions re-enter the middleware chain.
    pub fn new(action_tx: Sender<Action>) -> Self {
        Self { action_tx }
    }

    /// Dispatch an action to be processed through the middleware chain
    pub fn dispatch(&self, action: Action) {
        if let Err(e) = self.action_tx.send(action) {
            log::error!("Dispatcher: failed to send action: {}", e);
        }
    }
}
