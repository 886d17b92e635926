//! Task Reducer
//!
//! Handles state updates for the task table: loading, navigation,
//! selection and filtering.

use crate::actions::{Action, NavigationAction, TaskAction};
use crate::state::{LoadingState, TaskViewState};

/// Reduce task view state based on actions
pub fn reduce(mut state: TaskViewState, action: &Action) -> TaskViewState {
    match action {
        Action::Task(TaskAction::LoadStart) => {
            state.loading = LoadingState::Loading;
            log::debug!("task loading started");
        }

        Action::Task(TaskAction::Loaded(tasks)) => {
            log::info!("loaded {} tasks", tasks.len());
            state.tasks = tasks.clone();
            state.loading = LoadingState::Loaded;
            state.last_updated = Some(chrono::Local::now());
            state.cursor = 0;
            // A reload invalidates the previous selection
            state.selected_ids.clear();
        }

        Action::Task(TaskAction::LoadError(error)) => {
            state.loading = LoadingState::Error(error.clone());
            log::error!("failed to load tasks: {}", error);
        }

        Action::Navigate(NavigationAction::Next) => {
            let len = state.visible_tasks().len();
            if len > 0 {
                state.cursor = (state.cursor + 1) % len;
            }
        }

        Action::Navigate(NavigationAction::Previous) => {
            let len = state.visible_tasks().len();
            if len > 0 {
                state.cursor = if state.cursor == 0 {
                    len - 1
                } else {
                    state.cursor - 1
                };
            }
        }

        Action::Navigate(NavigationAction::Top) => {
            state.cursor = 0;
        }

        Action::Navigate(NavigationAction::Bottom) => {
            let len = state.visible_tasks().len();
            state.cursor = len.saturating_sub(1);
        }

        Action::Task(TaskAction::ToggleSelection) => {
            if let Some(task) = state.cursor_task() {
                let id = task.id;
                if state.selected_ids.contains(&id) {
                    state.selected_ids.remove(&id);
                    log::debug!("deselected task #{id}");
                } else {
                    state.selected_ids.insert(id);
                    log::debug!("selected task #{id}");
                }
            }
        }

        Action::Task(TaskAction::SelectAll) => {
            state.selected_ids = state.visible_tasks().iter().map(|task| task.id).collect();
            log::debug!("selected all {} visible tasks", state.selected_ids.len());
        }

        Action::Task(TaskAction::DeselectAll) => {
            let count = state.selected_ids.len();
            state.selected_ids.clear();
            log::debug!("deselected {count} tasks");
        }

        Action::Task(TaskAction::CycleFilter) => {
            state.filter = state.filter.next();
            state.clamp_cursor();
            log::debug!("filter set to {}", state.filter.label());
        }

        _ => {}
    }

    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use anno_client::{AnnoTask, TaskState};
    use chrono::Utc;

    fn task(id: u64, status: TaskState) -> AnnoTask {
        AnnoTask {
            id,
            name: format!("task-{id}"),
            project_id: None,
            status,
            size: 1,
            assignee: None,
            created_date: Utc::now(),
            updated_date: Utc::now(),
            url: String::new(),
        }
    }

    fn loaded_state() -> TaskViewState {
        reduce(
            TaskViewState::default(),
            &Action::Task(TaskAction::Loaded(vec![
                task(1, TaskState::Annotation),
                task(2, TaskState::Validation),
                task(3, TaskState::Annotation),
            ])),
        )
    }

    #[test]
    fn test_loaded_resets_cursor_and_selection() {
        let mut state = TaskViewState::default();
        state.cursor = 5;
        state.selected_ids.insert(99);

        let state = reduce(
            state,
            &Action::Task(TaskAction::Loaded(vec![task(1, TaskState::Annotation)])),
        );
        assert_eq!(state.cursor, 0);
        assert!(state.selected_ids.is_empty());
        assert_eq!(state.loading, LoadingState::Loaded);
        assert!(state.last_updated.is_some());
    }

    #[test]
    fn test_load_error_keeps_the_old_tasks() {
        let state = loaded_state();
        let state = reduce(
            state,
            &Action::Task(TaskAction::LoadError("boom".to_string())),
        );
        assert_eq!(state.loading, LoadingState::Error("boom".to_string()));
        assert_eq!(state.tasks.len(), 3);
    }

    #[test]
    fn test_navigation_wraps_both_ways() {
        let state = loaded_state();
        let state = reduce(state, &Action::Navigate(NavigationAction::Previous));
        assert_eq!(state.cursor, 2);
        let state = reduce(state, &Action::Navigate(NavigationAction::Next));
        assert_eq!(state.cursor, 0);
    }

    #[test]
    fn test_toggle_selection_flips_the_cursor_task() {
        let state = loaded_state();
        let state = reduce(state, &Action::Task(TaskAction::ToggleSelection));
        assert!(state.selected_ids.contains(&1));
        let state = reduce(state, &Action::Task(TaskAction::ToggleSelection));
        assert!(!state.selected_ids.contains(&1));
    }

    #[test]
    fn test_select_all_only_covers_visible_tasks() {
        let mut state = loaded_state();
        state = reduce(state, &Action::Task(TaskAction::CycleFilter));
        assert_eq!(state.filter.label(), "annotation");

        state = reduce(state, &Action::Task(TaskAction::SelectAll));
        assert_eq!(state.selected_ids.len(), 2);
        assert!(state.selected_ids.contains(&1));
        assert!(state.selected_ids.contains(&3));
    }

    #[test]
    fn test_cycle_filter_clamps_the_cursor() {
        let mut state = loaded_state();
        state.cursor = 2;
        // Two tasks remain visible under the annotation filter
        let state = reduce(state, &Action::Task(TaskAction::CycleFilter));
        assert_eq!(state.filter.label(), "annotation");
        assert_eq!(state.cursor, 1);
    }
}
