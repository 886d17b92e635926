//! Status Bar Reducer

use crate::actions::{Action, StatusBarAction};
use crate::state::{StatusBarState, StatusMessage};

/// Reduce status bar state
pub fn reduce(mut state: StatusBarState, action: &Action) -> StatusBarState {
    match action {
        Action::StatusBar(StatusBarAction::Push { kind, message }) => {
            state.push(StatusMessage::new(*kind, message.clone()));
        }
        Action::StatusBar(StatusBarAction::Clear) => {
            state.clear();
        }
        _ => {}
    }
    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::StatusKind;

    #[test]
    fn test_push_and_clear() {
        let state = reduce(
            StatusBarState::default(),
            &Action::StatusBar(StatusBarAction::success("done")),
        );
        assert_eq!(state.latest().map(|m| m.kind), Some(StatusKind::Success));

        let state = reduce(state, &Action::StatusBar(StatusBarAction::Clear));
        assert!(state.latest().is_none());
    }
}
