//! Task screen actions
//!
//! Loading, selection and the operations that fan out into bulk runs.

use anno_client::AnnoTask;

/// Actions for the task list
#[derive(Debug, Clone)]
pub enum TaskAction {
    /// Reload the task list from the server (handled by middleware)
    Refresh,
    /// Task loading started
    LoadStart,
    /// Tasks loaded successfully
    Loaded(Vec<AnnoTask>),
    /// Failed to load tasks
    LoadError(String),

    /// Toggle selection of the task under the cursor
    ToggleSelection,
    /// Select every visible task
    SelectAll,
    /// Clear the selection
    DeselectAll,

    /// Cycle through the task state filters
    CycleFilter,

    /// Delete the selected tasks (or the cursor task)
    DeleteRequest,
    /// Export annotations for the selected tasks (or the cursor task)
    ExportRequest,
}
