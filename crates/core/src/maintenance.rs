//! Account maintenance operations delegated to the store.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::errors::Result;

/// Rows removed by a sample-data purge.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurgeReport {
    pub children: usize,
    pub items: usize,
    pub interests: usize,
}

impl PurgeReport {
    pub fn total(&self) -> usize {
        self.children + self.items + self.interests
    }
}

/// Destructive multi-row flows that must run as a single server-side
/// routine. Implementations fail as a unit when the routine is
/// unavailable; partial application is not acceptable.
#[async_trait]
pub trait MaintenanceTrait: Send + Sync {
    /// Removes every sample-flagged row owned by `owner` across children,
    /// scheduled items, and interests.
    async fn purge_sample_data(&self, owner: &str) -> Result<PurgeReport>;
}
