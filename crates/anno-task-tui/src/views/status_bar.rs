//! Status Bar View
//!
//! Renders the latest status message at the bottom of the screen.
//! Format: `[timestamp] emoji message`

use crate::state::{AppState, StatusKind};
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::Span;
use ratatui::widgets::Paragraph;
use ratatui::Frame;

fn kind_color(kind: StatusKind) -> Color {
    match kind {
        StatusKind::Running => Color::Cyan,
        StatusKind::Success => Color::Green,
        StatusKind::Error => Color::Red,
        StatusKind::Warning => Color::Yellow,
        StatusKind::Info => Color::Gray,
    }
}

/// Render the status bar
pub fn render(state: &AppState, area: Rect, frame: &mut Frame) {
    let Some(message) = state.status_bar.latest() else {
        return;
    };

    let text = format!(
        "[{}] {} {}",
        message.timestamp.format("%H:%M:%S"),
        message.kind.emoji(),
        message.message
    );
    let paragraph =
        Paragraph::new(Span::styled(text, Style::default().fg(kind_color(message.kind))));
    frame.render_widget(paragraph, area);
}
