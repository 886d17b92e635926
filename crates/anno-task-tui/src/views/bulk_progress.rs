//! Bulk Progress View
//!
//! A gauge shown only while a bulk run is in flight.

use crate::state::AppState;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Gauge};
use ratatui::Frame;

/// Render the bulk progress gauge
pub fn render(state: &AppState, area: Rect, frame: &mut Frame) {
    let (message, percent) = match &state.bulk.status {
        Some(status) => (status.message.as_str(), status.percent),
        None => ("Starting...", 0),
    };

    let title = if state.bulk.cancelled {
        " Bulk operation — cancelling... "
    } else {
        " Bulk operation — x to cancel "
    };

    let gauge = Gauge::default()
        .block(Block::bordered().title(title))
        .gauge_style(Style::default().fg(Color::Cyan))
        .ratio(f64::from(percent) / 100.0)
        .label(format!("{message} ({percent}%)"));

    frame.render_widget(gauge, area);
}
