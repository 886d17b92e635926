use crate::actions::Action;
use crate::dispatcher::Dispatcher;
use crate::state::AppState;

pub mod keyboard;
pub mod logging;
pub mod server;

/// Middleware trait - intercepts actions before they reach the reducer
///
/// Middleware runs on the background thread, so it can perform blocking
/// operations (API calls, file I/O) without affecting the render loop.
pub trait Middleware: Send {
    /// Handle an action
    ///
    /// - `action`: The action to process
    /// - `state`: Current application state (read-only snapshot)
    /// - `dispatcher`: Use to dispatch actions that should re-enter the chain
    ///
    /// Returns `true` to continue the chain, `false` to consume the action
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool;
}
