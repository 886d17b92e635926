//! Global actions

use ratatui::crossterm::event::KeyEvent;

/// Application-wide actions
#[derive(Debug, Clone)]
pub enum GlobalAction {
    /// A key was pressed; the keyboard middleware translates it
    KeyPressed(KeyEvent),
    /// Quit the application
    Quit,
}
