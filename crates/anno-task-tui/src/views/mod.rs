//! Views
//!
//! Plain render functions over ratatui widgets. Views read state, never
//! mutate it; all interaction goes through actions.

pub mod bulk_progress;
pub mod retry_popup;
pub mod status_bar;
pub mod task_table;

use crate::state::AppState;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::Frame;

/// Render the whole screen
pub fn render(state: &AppState, frame: &mut Frame) {
    let mut constraints = vec![Constraint::Min(5)];
    if state.bulk.fetching {
        constraints.push(Constraint::Length(3));
    }
    constraints.push(Constraint::Length(1));

    let chunks = Layout::vertical(constraints).split(frame.area());

    task_table::render(state, chunks[0], frame);

    let mut next = 1;
    if state.bulk.fetching {
        bulk_progress::render(state, chunks[next], frame);
        next += 1;
    }

    status_bar::render(state, chunks[next], frame);

    if let Some(popup) = &state.retry_popup {
        retry_popup::render(popup, frame);
    }
}

/// A centered rect of the given size, clamped to the frame
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
