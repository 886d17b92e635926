//! Bulk-operation runner for resource management UIs
//!
//! This crate implements the machinery behind "apply this action to N
//! selected resources" flows: a sequential async runner that reports
//! progress, honors cooperative cancellation, and hands the unprocessed
//! tail of a failed run back to the caller for a manual retry.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────┐
//! │                   run(request)                    │
//! │  - iterates items in order                        │
//! │  - one operation in flight at a time              │
//! │  - checks the CancelFlag at item boundaries       │
//! └──────────────────────────────────────────────────┘
//!          │ transitions                │ failure report
//!          ▼                            ▼
//! ┌─────────────────┐         ┌─────────────────────┐
//! │ BulkTransition  │         │ BulkFailure         │
//! │ (4 variants,    │         │ (error + retry      │
//! │  reduced into   │         │  payload for the    │
//! │  BulkState)     │         │  unprocessed tail)  │
//! └─────────────────┘         └─────────────────────┘
//! ```
//!
//! Both channels arrive through the [`BulkObserver`] seam, so the runner
//! has no dependency on any particular store or UI framework and can be
//! exercised in isolation.
//!
//! Single-item runs take a fast path: no transitions, no cancellation
//! checks, just the operation itself, so trivial actions never flash a
//! progress bar.

pub mod runner;
pub mod state;
pub mod transition;

pub use runner::{
    run, BulkFailure, BulkObserver, BulkOperation, BulkRequest, CancelFlag, RetryPayload,
    StatusMessageFn,
};
pub use state::{reduce, BulkState};
pub use transition::{BulkStatus, BulkTransition};
