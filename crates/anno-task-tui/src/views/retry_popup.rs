//! Retry Popup View
//!
//! Centered overlay offering to re-run the unprocessed tail of a failed
//! bulk run.

use crate::state::RetryPopupState;
use ratatui::layout::Alignment;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Clear, Paragraph, Wrap};
use ratatui::Frame;

use super::centered_rect;

/// Render the retry popup over the current frame
pub fn render(popup: &RetryPopupState, frame: &mut Frame) {
    let area = centered_rect(60, 8, frame.area());

    let block = Block::bordered()
        .title(format!(" {} failed ", popup.source))
        .border_style(Style::default().fg(Color::Red));

    let lines = vec![
        Line::from(popup.error.clone()),
        Line::from(""),
        Line::from(format!("{} task(s) were not processed.", popup.remaining)),
        Line::from(""),
        Line::from(Span::styled(
            "[r] retry remaining · [d] dismiss",
            Style::default().add_modifier(Modifier::BOLD),
        )),
    ];

    let paragraph = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Left)
        .wrap(Wrap { trim: true });

    frame.render_widget(Clear, area);
    frame.render_widget(paragraph, area);
}
