//! Status Bar State

use chrono::{DateTime, Local};
use std::collections::VecDeque;

/// Kind of status message (determines icon and color)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    /// Action started/in progress
    Running,
    /// Action completed successfully
    Success,
    /// Action failed with error
    Error,
    /// Warning (non-fatal issue)
    Warning,
    /// Informational message
    Info,
}

impl StatusKind {
    /// Get the emoji for this status kind
    pub fn emoji(&self) -> &'static str {
        match self {
            Self::Running => "⏳",
            Self::Success => "✅",
            Self::Error => "🚨",
            Self::Warning => "⚠️",
            Self::Info => "ℹ️",
        }
    }
}

/// A single status message
#[derive(Debug, Clone)]
pub struct StatusMessage {
    /// When the message was created
    pub timestamp: DateTime<Local>,
    pub kind: StatusKind,
    pub message: String,
}

impl StatusMessage {
    /// Create a new status message with current timestamp
    pub fn new(kind: StatusKind, message: impl Into<String>) -> Self {
        Self {
            timestamp: Local::now(),
            kind,
            message: message.into(),
        }
    }
}

/// Status bar state - bounded history of messages, newest at the back
#[derive(Debug, Clone)]
pub struct StatusBarState {
    pub messages: VecDeque<StatusMessage>,
    /// Maximum messages to keep
    pub max_history: usize,
}

impl Default for StatusBarState {
    fn default() -> Self {
        Self {
            messages: VecDeque::new(),
            max_history: 50,
        }
    }
}

impl StatusBarState {
    /// The latest message, if any
    pub fn latest(&self) -> Option<&StatusMessage> {
        self.messages.back()
    }

    /// Push a new message, trimming the oldest when over the limit
    pub fn push(&mut self, message: StatusMessage) {
        self.messages.push_back(message);
        if self.messages.len() > self.max_history {
            self.messages.pop_front();
        }
    }

    pub fn clear(&mut self) {
        self.messages.clear();
    }
}
