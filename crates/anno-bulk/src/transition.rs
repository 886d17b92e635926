//! Bulk run transitions
//!
//! The protocol between a running bulk operation and whatever layer
//! presents it. Exactly four transition kinds exist; failure reports
//! travel on a separate observer method so this union stays closed.

/// Progress snapshot for the item currently being processed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BulkStatus {
    /// Display message for the current item
    pub message: String,
    /// Percent complete, `0..=100`, computed from the 1-based item index
    pub percent: u8,
}

impl BulkStatus {
    pub fn new(message: impl Into<String>, percent: u8) -> Self {
        Self {
            message: message.into(),
            percent,
        }
    }
}

/// State transitions emitted over the lifetime of a multi-item bulk run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BulkTransition {
    /// A run began
    Start,
    /// An item finished; carries the message and percent for that item
    Progress(BulkStatus),
    /// Cancellation was requested for the current run
    Cancel,
    /// The run is over, whether it succeeded, was cancelled, or failed
    Finish,
}
