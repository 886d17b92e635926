//! Bulk Reducer
//!
//! Feeds runner transitions through the bulk state container and manages
//! the retry popup around failures. Cancel and retry *requests* are side
//! effects and belong to the server middleware, not here.

use anno_bulk::BulkState;

use crate::actions::{Action, BulkAction};
use crate::state::RetryPopupState;

/// Reduce bulk state and the retry popup based on actions
pub fn reduce(
    bulk: BulkState,
    popup: Option<RetryPopupState>,
    action: &Action,
) -> (BulkState, Option<RetryPopupState>) {
    match action {
        Action::Bulk(BulkAction::Transition(transition)) => {
            (anno_bulk::reduce(bulk, transition), popup)
        }

        Action::Bulk(BulkAction::Failed {
            source,
            error,
            remaining,
            retry,
        }) => {
            log::warn!("{source} failed with {remaining} items left: {error}");
            let popup = RetryPopupState {
                source: source.clone(),
                error: error.clone(),
                remaining: *remaining,
                payload: retry.clone(),
            };
            (bulk, Some(popup))
        }

        Action::Bulk(BulkAction::DiscardRetry) => (bulk, None),

        _ => (bulk, popup),
    }
}
