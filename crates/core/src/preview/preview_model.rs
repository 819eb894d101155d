use serde::{Deserialize, Serialize};

use crate::schedule::{NewScheduledItem, ScheduledItemUpdate};

/// A pending mutation staged in a what-if overlay.
///
/// Ops are replayed in staging order, both against the overlay snapshot
/// and, on commit, through the store adapter.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case", rename_all_fields = "camelCase")]
pub enum PendingOp {
    /// Stage a new scheduled item under a preview-local id.
    Insert {
        item_id: String,
        item: NewScheduledItem,
    },
    /// Patch an existing (or preview-local) item.
    Update {
        item_id: String,
        patch: ScheduledItemUpdate,
    },
    /// Remove an existing (or preview-local) item.
    Delete { item_id: String },
}

impl PendingOp {
    /// The item id the op addresses.
    pub fn item_id(&self) -> &str {
        match self {
            PendingOp::Insert { item_id, .. }
            | PendingOp::Update { item_id, .. }
            | PendingOp::Delete { item_id } => item_id,
        }
    }
}

/// The op that stopped a commit.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FailedOp {
    /// Position of the failed op within the originally staged sequence.
    pub index: usize,
    pub message: String,
}

/// Outcome of replaying an overlay through the store.
///
/// A commit stops at the first failure; the failed op and everything after
/// it stay in the overlay for retry.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommitReport {
    pub applied: usize,
    pub failed: Option<FailedOp>,
    pub remaining: Vec<PendingOp>,
}

impl CommitReport {
    pub fn is_complete(&self) -> bool {
        self.failed.is_none() && self.remaining.is_empty()
    }
}
