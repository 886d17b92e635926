//! Bulk run actions
//!
//! The four runner transitions plus the failure/retry flow around them.

use anno_bulk::{BulkTransition, RetryPayload};
use anno_client::AnnoTask;

/// Actions for the bulk-operation state and retry flow
#[derive(Debug, Clone)]
pub enum BulkAction {
    /// A state transition emitted by the running bulk operation
    Transition(BulkTransition),
    /// The running bulk operation failed; the unprocessed tail is offered
    /// back for retry
    Failed {
        /// What the run was doing, for the popup title (e.g. "Delete")
        source: String,
        /// Rendered error message
        error: String,
        /// Items that never completed, the failing one included
        remaining: usize,
        /// The tail of the run, ready to be re-run
        retry: RetryPayload<AnnoTask>,
    },
    /// User asked to cancel the running bulk operation
    CancelRequest,
    /// User asked to retry the failed tail
    Retry,
    /// User dismissed the retry offer
    DiscardRetry,
}
