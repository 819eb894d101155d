//! Interest repository trait.

use async_trait::async_trait;

use super::interests_model::{CampInterest, InterestUpsert};
use crate::errors::Result;

/// Trait defining the contract for interest repository operations.
///
/// Interests are written via upsert keyed by `(owner, child, camp, week)`.
#[async_trait]
pub trait InterestRepositoryTrait: Send + Sync {
    /// Inserts or refreshes the row for the upsert's key.
    async fn upsert(&self, owner: &str, upsert: InterestUpsert) -> Result<CampInterest>;

    /// Deletes every interest belonging to a child (cascade path).
    async fn delete_for_child(&self, owner: &str, child_id: &str) -> Result<usize>;

    /// Lists the caller's interest rows.
    fn list_for_owner(&self, owner: &str) -> Result<Vec<CampInterest>>;

    /// Lists interest rows across a set of accounts. Used by squad
    /// aggregation; identity handling is the caller's responsibility via
    /// the disclosure filter.
    fn list_for_owners(&self, owners: &[String]) -> Result<Vec<CampInterest>>;
}
