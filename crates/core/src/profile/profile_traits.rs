//! Profile repository trait.

use async_trait::async_trait;

use super::profile_model::{AccountProfile, ProfileUpdate};
use crate::errors::Result;

/// Trait defining the contract for profile repository operations.
///
/// Each account has at most one profile row; writes are upserts.
#[async_trait]
pub trait ProfileRepositoryTrait: Send + Sync {
    /// Retrieves the caller's profile, `None` when never configured.
    fn get(&self, owner: &str) -> Result<Option<AccountProfile>>;

    /// Creates or updates the caller's profile from the allow-listed
    /// update record.
    async fn upsert(&self, owner: &str, update: ProfileUpdate) -> Result<AccountProfile>;
}
