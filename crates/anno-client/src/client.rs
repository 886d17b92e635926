//! Annotation client trait
//!
//! The interface application code programs against. Implementations can
//! hit the API directly or be decorated with caching, retry, etc.

use crate::error::Result;
use crate::types::{AnnoTask, ExportFormat};
use async_trait::async_trait;

/// Annotation server API client
///
/// Implementations must be `Send + Sync` so they can be shared across
/// async tasks behind an `Arc`.
#[async_trait]
pub trait AnnotationClient: Send + Sync {
    /// Fetch every annotation task visible to the current token,
    /// following pagination to the end.
    async fn fetch_tasks(&self) -> Result<Vec<AnnoTask>>;

    /// Delete a task and all of its annotations. Irreversible.
    async fn delete_task(&self, task_id: u64) -> Result<()>;

    /// Kick off a server-side annotation export for a task.
    ///
    /// The export job runs on the server; this call only schedules it.
    async fn export_annotations(&self, task_id: u64, format: ExportFormat) -> Result<()>;
}
