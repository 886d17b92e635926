//! Task Table View
//!
//! The main table of annotation tasks with selection markers and the
//! cursor row highlighted.

use crate::state::{AppState, LoadingState};
use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Cell, Row, Table};
use ratatui::Frame;

const KEY_HINTS: &str =
    " j/k move · space select · a/A all/none · d delete · e export · r refresh · f filter · q quit ";

/// Render the task table
pub fn render(state: &AppState, area: Rect, frame: &mut Frame) {
    let view = &state.task_view;
    let visible = view.visible_tasks();

    let title = match &view.loading {
        LoadingState::Loading => " Tasks — loading... ".to_string(),
        LoadingState::Error(e) => format!(" Tasks — load failed: {e} "),
        _ => format!(
            " Tasks [{}] — {} shown, {} selected ",
            view.filter.label(),
            visible.len(),
            view.selected_ids.len()
        ),
    };

    let header = Row::new(vec![
        Cell::from(" "),
        Cell::from("ID"),
        Cell::from("Name"),
        Cell::from("State"),
        Cell::from("Frames"),
        Cell::from("Assignee"),
    ])
    .style(Style::default().add_modifier(Modifier::BOLD));

    let rows: Vec<Row> = visible
        .iter()
        .enumerate()
        .map(|(index, task)| {
            let marker = if view.selected_ids.contains(&task.id) {
                "✓"
            } else {
                " "
            };
            let mut style = Style::default();
            if view.selected_ids.contains(&task.id) {
                style = style.fg(Color::Yellow);
            }
            if index == view.cursor {
                style = style.add_modifier(Modifier::REVERSED);
            }
            Row::new(vec![
                Cell::from(marker),
                Cell::from(task.id.to_string()),
                Cell::from(task.name.clone()),
                Cell::from(task.status.label()),
                Cell::from(task.size.to_string()),
                Cell::from(task.assignee.clone().unwrap_or_default()),
            ])
            .style(style)
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(1),
            Constraint::Length(6),
            Constraint::Min(20),
            Constraint::Length(12),
            Constraint::Length(8),
            Constraint::Length(14),
        ],
    )
    .header(header)
    .block(
        Block::bordered()
            .title(title)
            .title_bottom(KEY_HINTS),
    );

    frame.render_widget(table, area);
}
