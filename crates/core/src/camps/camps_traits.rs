//! Camp repository trait.
//!
//! The camp collection is managed externally; the core only reads it.

use super::camps_model::{Camp, CampFilter};
use crate::errors::Result;

/// Read-side contract for the camp collection.
pub trait CampRepositoryTrait: Send + Sync {
    /// Retrieves a camp by its ID, `None` when the row is gone.
    fn get_by_id(&self, camp_id: &str) -> Result<Option<Camp>>;

    /// Lists camps matching the filter.
    fn list(&self, filter: &CampFilter) -> Result<Vec<Camp>>;
}
