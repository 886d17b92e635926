//! Task View State
//!
//! The task table: loaded tasks, cursor, multi-selection and filter.
//! The cursor always indexes the *visible* (filtered) list.

use anno_client::{AnnoTask, TaskState};
use chrono::{DateTime, Local};
use std::collections::HashSet;

/// Loading state of the task list
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LoadingState {
    #[default]
    Idle,
    Loading,
    Loaded,
    Error(String),
}

/// Filter over task lifecycle stages
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TaskFilter {
    #[default]
    All,
    Annotation,
    Validation,
    Completed,
}

impl TaskFilter {
    /// The next filter in cycling order
    pub fn next(self) -> Self {
        match self {
            TaskFilter::All => TaskFilter::Annotation,
            TaskFilter::Annotation => TaskFilter::Validation,
            TaskFilter::Validation => TaskFilter::Completed,
            TaskFilter::Completed => TaskFilter::All,
        }
    }

    /// Label for the table title
    pub fn label(self) -> &'static str {
        match self {
            TaskFilter::All => "all",
            TaskFilter::Annotation => "annotation",
            TaskFilter::Validation => "validation",
            TaskFilter::Completed => "completed",
        }
    }

    pub fn matches(self, state: TaskState) -> bool {
        match self {
            TaskFilter::All => true,
            TaskFilter::Annotation => state == TaskState::Annotation,
            TaskFilter::Validation => state == TaskState::Validation,
            TaskFilter::Completed => state == TaskState::Completed,
        }
    }
}

/// State of the task table
#[derive(Debug, Clone, Default)]
pub struct TaskViewState {
    /// All loaded tasks, in server order
    pub tasks: Vec<AnnoTask>,
    pub loading: LoadingState,
    /// Cursor position within the visible (filtered) list
    pub cursor: usize,
    /// Ids of the selected tasks
    pub selected_ids: HashSet<u64>,
    pub filter: TaskFilter,
    /// When the list was last refreshed
    pub last_updated: Option<DateTime<Local>>,
}

impl TaskViewState {
    /// Tasks passing the current filter, in display order
    pub fn visible_tasks(&self) -> Vec<&AnnoTask> {
        self.tasks
            .iter()
            .filter(|task| self.filter.matches(task.status))
            .collect()
    }

    /// The task under the cursor, if any
    pub fn cursor_task(&self) -> Option<&AnnoTask> {
        self.visible_tasks().get(self.cursor).copied()
    }

    /// Targets for a bulk operation: the selected tasks in display
    /// order, or the cursor task when nothing is selected
    pub fn selected_or_cursor(&self) -> Vec<AnnoTask> {
        let visible = self.visible_tasks();
        if !self.selected_ids.is_empty() {
            return visible
                .iter()
                .filter(|task| self.selected_ids.contains(&task.id))
                .map(|task| (*task).clone())
                .collect();
        }
        self.cursor_task().cloned().into_iter().collect()
    }

    /// Keep the cursor inside the visible list after it shrank
    pub fn clamp_cursor(&mut self) {
        let len = self.visible_tasks().len();
        if len == 0 {
            self.cursor = 0;
        } else if self.cursor >= len {
            self.cursor = len - 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn task(id: u64, name: &str, status: TaskState) -> AnnoTask {
        AnnoTask {
            id,
            name: name.to_string(),
            project_id: None,
            status,
            size: 10,
            assignee: None,
            created_date: Utc::now(),
            updated_date: Utc::now(),
            url: format!("http://localhost:8080/api/tasks/{id}"),
        }
    }

    fn view() -> TaskViewState {
        TaskViewState {
            tasks: vec![
                task(1, "one", TaskState::Annotation),
                task(2, "two", TaskState::Validation),
                task(3, "three", TaskState::Annotation),
            ],
            ..TaskViewState::default()
        }
    }

    #[test]
    fn test_filter_cycles_through_every_stage() {
        let mut filter = TaskFilter::All;
        for _ in 0..4 {
            filter = filter.next();
        }
        assert_eq!(filter, TaskFilter::All);
    }

    #[test]
    fn test_visible_tasks_respect_the_filter() {
        let mut view = view();
        assert_eq!(view.visible_tasks().len(), 3);

        view.filter = TaskFilter::Annotation;
        let visible: Vec<u64> = view.visible_tasks().iter().map(|t| t.id).collect();
        assert_eq!(visible, vec![1, 3]);

        view.filter = TaskFilter::Completed;
        assert!(view.visible_tasks().is_empty());
    }

    #[test]
    fn test_targets_fall_back_to_the_cursor_task() {
        let mut view = view();
        view.cursor = 1;
        let targets = view.selected_or_cursor();
        assert_eq!(targets.len(), 1);
        assert_eq!(targets[0].id, 2);
    }

    #[test]
    fn test_targets_use_the_selection_in_display_order() {
        let mut view = view();
        view.selected_ids.insert(3);
        view.selected_ids.insert(1);
        let ids: Vec<u64> = view.selected_or_cursor().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn test_clamp_cursor_after_the_list_shrinks() {
        let mut view = view();
        view.cursor = 2;
        view.filter = TaskFilter::Validation;
        view.clamp_cursor();
        assert_eq!(view.cursor, 0);
    }
}
