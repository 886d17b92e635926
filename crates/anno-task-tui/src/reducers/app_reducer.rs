//! App Reducer
//!
//! The root reducer: handles global actions, then delegates to the
//! per-slice reducers.

use crate::actions::{Action, GlobalAction};
use crate::reducers::{bulk_reducer, status_bar_reducer, task_reducer};
use crate::state::AppState;

/// Reduce application state from an action
pub fn reduce(mut state: AppState, action: &Action) -> AppState {
    if let Action::Global(GlobalAction::Quit) = action {
        state.running = false;
        return state;
    }

    state.task_view = task_reducer::reduce(state.task_view, action);

    let (bulk, retry_popup) = bulk_reducer::reduce(state.bulk, state.retry_popup, action);
    state.bulk = bulk;
    state.retry_popup = retry_popup;

    state.status_bar = status_bar_reducer::reduce(state.status_bar, action);

    state
}
