use log::warn;
use std::sync::Arc;

use super::schedule_model::{NewScheduledItem, ScheduledItem, ScheduledItemUpdate};
use super::schedule_traits::{ScheduleRepositoryTrait, ScheduleServiceTrait};
use crate::errors::Result;

/// Service for managing scheduled items.
pub struct ScheduleService {
    repository: Arc<dyn ScheduleRepositoryTrait>,
}

impl ScheduleService {
    /// Creates a new ScheduleService instance.
    pub fn new(repository: Arc<dyn ScheduleRepositoryTrait>) -> Self {
        Self { repository }
    }
}

#[async_trait::async_trait]
impl ScheduleServiceTrait for ScheduleService {
    async fn create_item(&self, owner: &str, new_item: NewScheduledItem) -> Result<ScheduledItem> {
        new_item.validate()?;
        self.repository.create(owner, new_item).await
    }

    async fn update_item(
        &self,
        owner: &str,
        item_id: &str,
        update: ScheduledItemUpdate,
    ) -> Result<ScheduledItem> {
        update.validate()?;
        if update.is_empty() {
            warn!("update for item {} carries no recognized fields", item_id);
        }
        self.repository.update(owner, item_id, update).await
    }

    async fn delete_item(&self, owner: &str, item_id: &str) -> Result<()> {
        self.repository.delete(owner, item_id).await?;
        Ok(())
    }

    fn get_item(&self, item_id: &str) -> Result<Option<ScheduledItem>> {
        self.repository.get_by_id(item_id)
    }

    fn list_child_items(&self, owner: &str, child_id: &str) -> Result<Vec<ScheduledItem>> {
        let mut items = self.repository.list_for_child(owner, child_id)?;
        items.sort_by(|a, b| a.start_date.cmp(&b.start_date).then_with(|| a.id.cmp(&b.id)));
        Ok(items)
    }
}
