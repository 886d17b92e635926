//! Bulk run state container
//!
//! A small state struct reduced from [`BulkTransition`]s. The reducer is a
//! pure function with no side effects; the UI owns the state value and
//! feeds every transition through it.

use crate::transition::{BulkStatus, BulkTransition};

/// State of the bulk run currently visible to the UI
///
/// Created once as all-idle and kept for the life of the session; only the
/// four transitions mutate it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BulkState {
    /// A multi-item run is in flight
    pub fetching: bool,
    /// Progress of the item most recently processed
    pub status: Option<BulkStatus>,
    /// Cancellation has been requested for the current run
    pub cancelled: bool,
}

/// Reduce bulk state from a transition
///
/// `Start` clears `cancelled` but preserves any stale `status`; `Finish`
/// resets everything, so `status` is gone before `fetching` drops.
pub fn reduce(mut state: BulkState, transition: &BulkTransition) -> BulkState {
    match transition {
        BulkTransition::Start => {
            state.fetching = true;
            state.cancelled = false;
        }
        BulkTransition::Progress(status) => {
            state.status = Some(status.clone());
        }
        BulkTransition::Cancel => {
            state.cancelled = true;
        }
        BulkTransition::Finish => {
            state.fetching = false;
            state.status = None;
            state.cancelled = false;
        }
    }
    state
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state_is_idle() {
        let state = BulkState::default();
        assert!(!state.fetching);
        assert!(state.status.is_none());
        assert!(!state.cancelled);
    }

    #[test]
    fn test_start_clears_cancelled_but_keeps_status() {
        let state = BulkState {
            fetching: false,
            status: Some(BulkStatus::new("leftover", 40)),
            cancelled: true,
        };
        let state = reduce(state, &BulkTransition::Start);
        assert!(state.fetching);
        assert!(!state.cancelled);
        assert_eq!(state.status, Some(BulkStatus::new("leftover", 40)));
    }

    #[test]
    fn test_progress_only_touches_status() {
        let state = reduce(BulkState::default(), &BulkTransition::Start);
        let state = reduce(
            state,
            &BulkTransition::Progress(BulkStatus::new("item 1", 25)),
        );
        assert!(state.fetching);
        assert_eq!(state.status, Some(BulkStatus::new("item 1", 25)));

        let state = reduce(
            state,
            &BulkTransition::Progress(BulkStatus::new("item 2", 50)),
        );
        assert_eq!(state.status, Some(BulkStatus::new("item 2", 50)));
    }

    #[test]
    fn test_cancel_sets_flag_only() {
        let state = reduce(BulkState::default(), &BulkTransition::Start);
        let state = reduce(
            state,
            &BulkTransition::Progress(BulkStatus::new("item", 10)),
        );
        let state = reduce(state, &BulkTransition::Cancel);
        assert!(state.cancelled);
        assert!(state.fetching);
        assert!(state.status.is_some());
    }

    #[test]
    fn test_finish_resets_everything() {
        let state = reduce(BulkState::default(), &BulkTransition::Start);
        let state = reduce(
            state,
            &BulkTransition::Progress(BulkStatus::new("item", 90)),
        );
        let state = reduce(state, &BulkTransition::Cancel);
        let state = reduce(state, &BulkTransition::Finish);
        assert_eq!(state, BulkState::default());
    }

    #[test]
    fn test_two_runs_end_in_the_same_shape() {
        let first = [
            BulkTransition::Start,
            BulkTransition::Progress(BulkStatus::new("a", 50)),
            BulkTransition::Progress(BulkStatus::new("b", 100)),
            BulkTransition::Finish,
        ];
        let second = [
            BulkTransition::Start,
            BulkTransition::Progress(BulkStatus::new("c", 100)),
            BulkTransition::Cancel,
            BulkTransition::Finish,
        ];

        let after_first = first
            .iter()
            .fold(BulkState::default(), |state, t| reduce(state, t));
        let after_second = second.iter().fold(after_first.clone(), |state, t| {
            reduce(state, t)
        });

        assert_eq!(after_first, BulkState::default());
        assert_eq!(after_second, after_first);
    }
}
