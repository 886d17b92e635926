//! Application State

use anno_bulk::BulkState;

use super::{RetryPopupState, StatusBarState, TaskViewState};

/// Application state
#[derive(Debug, Clone)]
pub struct AppState {
    pub running: bool,
    /// The task table with selection and filter
    pub task_view: TaskViewState,
    /// Progress/cancellation state of the bulk run in flight
    pub bulk: BulkState,
    /// Retry offer after a failed bulk run (present only while shown)
    pub retry_popup: Option<RetryPopupState>,
    pub status_bar: StatusBarState,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            running: true,
            task_view: TaskViewState::default(),
            bulk: BulkState::default(),
            retry_popup: None,
            status_bar: StatusBarState::default(),
        }
    }
}
