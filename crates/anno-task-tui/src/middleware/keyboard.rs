//! Keyboard Middleware
//!
//! Translates key events into actions, context-sensitively:
//!
//! 1. Ctrl+C and `q` always quit.
//! 2. While the retry popup is open, only its keys work (`r` retry,
//!    `d`/Esc dismiss); everything else is swallowed.
//! 3. While a bulk run is fetching, only cancel (`x`/Esc) and navigation
//!    work; operations are blocked until the run is over.
//! 4. Otherwise keys map to list navigation and task operations.

use crate::actions::{
    Action, BulkAction, GlobalAction, NavigationAction, StatusBarAction, TaskAction,
};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::AppState;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Middleware translating raw key events into domain actions
pub struct KeyboardMiddleware;

impl KeyboardMiddleware {
    pub fn new() -> Self {
        Self
    }

    fn handle_key(&self, key: KeyEvent, state: &AppState, dispatcher: &Dispatcher) {
        // Quit always works
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            dispatcher.dispatch(Action::Global(GlobalAction::Quit));
            return;
        }
        if key.code == KeyCode::Char('q') {
            dispatcher.dispatch(Action::Global(GlobalAction::Quit));
            return;
        }

        // Retry popup takes priority over everything else
        if state.retry_popup.is_some() {
            match key.code {
                KeyCode::Char('r') => dispatcher.dispatch(Action::Bulk(BulkAction::Retry)),
                KeyCode::Char('d') | KeyCode::Esc => {
                    dispatcher.dispatch(Action::Bulk(BulkAction::DiscardRetry))
                }
                _ => log::trace!("key {:?} ignored while retry popup is open", key.code),
            }
            return;
        }

        // During a bulk run the only operation is cancelling it
        if state.bulk.fetching {
            match key.code {
                KeyCode::Char('x') | KeyCode::Esc => {
                    dispatcher.dispatch(Action::Bulk(BulkAction::CancelRequest))
                }
                KeyCode::Char('j') | KeyCode::Down => {
                    dispatcher.dispatch(Action::Navigate(NavigationAction::Next))
                }
                KeyCode::Char('k') | KeyCode::Up => {
                    dispatcher.dispatch(Action::Navigate(NavigationAction::Previous))
                }
                _ => log::trace!("key {:?} ignored during bulk run", key.code),
            }
            return;
        }

        match key.code {
            KeyCode::Char('j') | KeyCode::Down => {
                dispatcher.dispatch(Action::Navigate(NavigationAction::Next))
            }
            KeyCode::Char('k') | KeyCode::Up => {
                dispatcher.dispatch(Action::Navigate(NavigationAction::Previous))
            }
            KeyCode::Char('g') | KeyCode::Home => {
                dispatcher.dispatch(Action::Navigate(NavigationAction::Top))
            }
            KeyCode::Char('G') | KeyCode::End => {
                dispatcher.dispatch(Action::Navigate(NavigationAction::Bottom))
            }
            KeyCode::Char(' ') => dispatcher.dispatch(Action::Task(TaskAction::ToggleSelection)),
            KeyCode::Char('a') => dispatcher.dispatch(Action::Task(TaskAction::SelectAll)),
            KeyCode::Char('A') => dispatcher.dispatch(Action::Task(TaskAction::DeselectAll)),
            KeyCode::Char('f') => dispatcher.dispatch(Action::Task(TaskAction::CycleFilter)),
            KeyCode::Char('r') => dispatcher.dispatch(Action::Task(TaskAction::Refresh)),
            KeyCode::Char('d') => dispatcher.dispatch(Action::Task(TaskAction::DeleteRequest)),
            KeyCode::Char('e') => dispatcher.dispatch(Action::Task(TaskAction::ExportRequest)),
            KeyCode::Char('c') => dispatcher.dispatch(Action::StatusBar(StatusBarAction::Clear)),
            _ => {}
        }
    }
}

impl Default for KeyboardMiddleware {
    fn default() -> Self {
        Self::new()
    }
}

impl Middleware for KeyboardMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        if let Action::Global(GlobalAction::KeyPressed(key)) = action {
            self.handle_key(*key, state, dispatcher);
            return false; // Key events never reach the reducer
        }
        true
    }
}
