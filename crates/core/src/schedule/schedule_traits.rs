//! Scheduled item repository and service traits.

use async_trait::async_trait;

use super::schedule_model::{NewScheduledItem, ScheduledItem, ScheduledItemUpdate};
use crate::errors::Result;

/// Trait defining the contract for scheduled item repository operations.
#[async_trait]
pub trait ScheduleRepositoryTrait: Send + Sync {
    /// Creates a scheduled item owned by the authenticated caller.
    async fn create(&self, owner: &str, new_item: NewScheduledItem) -> Result<ScheduledItem>;

    /// Updates a scheduled item. The store enforces row ownership.
    async fn update(
        &self,
        owner: &str,
        item_id: &str,
        update: ScheduledItemUpdate,
    ) -> Result<ScheduledItem>;

    /// Deletes a scheduled item; fails with `NotOwner` on a foreign row.
    async fn delete(&self, owner: &str, item_id: &str) -> Result<usize>;

    /// Deletes every item belonging to a child (cascade path). Returns the
    /// number of deleted records.
    async fn delete_for_child(&self, owner: &str, child_id: &str) -> Result<usize>;

    /// Retrieves an item by its ID.
    fn get_by_id(&self, item_id: &str) -> Result<Option<ScheduledItem>>;

    /// Lists the caller's items across all children.
    fn list_for_owner(&self, owner: &str) -> Result<Vec<ScheduledItem>>;

    /// Lists the caller's items for one child.
    fn list_for_child(&self, owner: &str, child_id: &str) -> Result<Vec<ScheduledItem>>;
}

/// Trait defining the contract for scheduled item service operations.
#[async_trait]
pub trait ScheduleServiceTrait: Send + Sync {
    async fn create_item(&self, owner: &str, new_item: NewScheduledItem) -> Result<ScheduledItem>;

    async fn update_item(
        &self,
        owner: &str,
        item_id: &str,
        update: ScheduledItemUpdate,
    ) -> Result<ScheduledItem>;

    async fn delete_item(&self, owner: &str, item_id: &str) -> Result<()>;

    fn get_item(&self, item_id: &str) -> Result<Option<ScheduledItem>>;

    /// Items for one child, ordered by start date ascending then id.
    fn list_child_items(&self, owner: &str, child_id: &str) -> Result<Vec<ScheduledItem>>;
}
