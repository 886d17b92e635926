//! Annotation server data transfer objects
//!
//! These types mirror the server's JSON wire format. They are
//! intentionally separate from application state so this crate stays
//! pure and reusable.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lifecycle stage of an annotation task
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskState {
    /// Frames are still being annotated
    #[default]
    Annotation,
    /// Annotation is done, review in progress
    Validation,
    /// Accepted and closed
    Completed,
}

impl TaskState {
    /// Short label for table cells
    pub fn label(&self) -> &'static str {
        match self {
            TaskState::Annotation => "annotation",
            TaskState::Validation => "validation",
            TaskState::Completed => "completed",
        }
    }
}

/// An annotation task as returned by the server
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnnoTask {
    /// Task id
    pub id: u64,

    /// Human-readable task name
    pub name: String,

    /// Owning project, if the task belongs to one
    pub project_id: Option<u64>,

    /// Lifecycle stage
    pub status: TaskState,

    /// Number of frames in the task
    pub size: u64,

    /// Username of the assignee, if any
    pub assignee: Option<String>,

    /// When the task was created
    pub created_date: DateTime<Utc>,

    /// When the task was last updated
    pub updated_date: DateTime<Utc>,

    /// API URL of the task
    pub url: String,
}

/// Annotation export formats the server understands
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ExportFormat {
    #[default]
    Coco,
    CvatImages,
    Datumaro,
}

impl ExportFormat {
    /// The format name the server expects in the `format` query parameter
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Coco => "COCO 1.0",
            ExportFormat::CvatImages => "CVAT for images 1.1",
            ExportFormat::Datumaro => "Datumaro 1.0",
        }
    }

    /// Look a format up by its server name
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "COCO 1.0" => Some(ExportFormat::Coco),
            "CVAT for images 1.1" => Some(ExportFormat::CvatImages),
            "Datumaro 1.0" => Some(ExportFormat::Datumaro),
            _ => None,
        }
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One page of a paginated list response
///
/// The server paginates every collection endpoint with
/// `count`/`next`/`previous`/`results`; `next` is an absolute URL.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paginated<T> {
    pub count: u64,
    pub next: Option<String>,
    pub previous: Option<String>,
    pub results: Vec<T>,
}
