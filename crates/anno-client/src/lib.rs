//! Annotation server API client
//!
//! This crate provides a trait-based client for an annotation server's
//! JSON REST API: listing annotation tasks, deleting them, and kicking
//! off server-side annotation exports.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │             AnnotationClient trait               │
//! │  - fetch_tasks()                                 │
//! │  - delete_task()                                 │
//! │  - export_annotations()                          │
//! └─────────────────────────────────────────────────┘
//!                        │
//!                        ▼
//!              ┌─────────────────┐
//!              │   RestClient    │
//!              │ (reqwest, token │
//!              │  auth, paging)  │
//!              └─────────────────┘
//! ```
//!
//! The trait keeps consumers testable: application code holds an
//! `Arc<dyn AnnotationClient>` and never talks to `reqwest` directly.

pub mod client;
pub mod error;
pub mod rest_client;
pub mod types;

pub use client::AnnotationClient;
pub use error::{ClientError, Result};
pub use rest_client::RestClient;
pub use types::{AnnoTask, ExportFormat, Paginated, TaskState};
