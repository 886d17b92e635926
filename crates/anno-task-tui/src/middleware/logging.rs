//! Logging Middleware
//!
//! Traces every action flowing through the chain. Key events are logged
//! at trace level to keep debug logs readable.

use crate::actions::{Action, GlobalAction};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::AppState;

/// Middleware that logs every dispatched action
pub struct LoggingMiddleware;

impl LoggingMiddleware {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LoggingMiddleware {
    fn default() -> Self {
        Self::new()
    }
}

impl Middleware for LoggingMiddleware {
    fn handle(&mut self, action: &Action, _state: &AppState, _dispatcher: &Dispatcher) -> bool {
        match action {
            Action::Global(GlobalAction::KeyPressed(_)) => log::trace!("action: {:?}", action),
            _ => log::debug!("action: {:?}", action),
        }
        true
    }
}
