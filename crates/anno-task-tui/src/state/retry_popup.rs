//! Retry Popup State
//!
//! After a bulk run fails, the unprocessed tail is kept here until the
//! user retries or dismisses it.

use anno_bulk::RetryPayload;
use anno_client::AnnoTask;

/// Offer to resume a failed bulk run
#[derive(Debug, Clone)]
pub struct RetryPopupState {
    /// What the run was doing (e.g. "Delete")
    pub source: String,
    /// Rendered error message from the failing operation
    pub error: String,
    /// Items that never completed
    pub remaining: usize,
    /// The tail of the run; retrying turns it back into a request
    pub payload: RetryPayload<AnnoTask>,
}
