//! Preview module - transient what-if overlays over the live snapshot.

mod preview_model;
mod preview_service;

pub use preview_model::{CommitReport, FailedOp, PendingOp};
pub use preview_service::PreviewSession;
