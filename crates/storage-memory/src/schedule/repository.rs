use async_trait::async_trait;
use log::debug;
use std::sync::Arc;

use summerplan_core::errors::{Error, Result};
use summerplan_core::events::Topic;
use summerplan_core::schedule::{
    NewScheduledItem, ScheduleRepositoryTrait, ScheduledItem, ScheduledItemUpdate,
};

use crate::store::MemoryStore;

/// In-memory repository for scheduled items.
pub struct ScheduleRepository {
    store: Arc<MemoryStore>,
}

impl ScheduleRepository {
    pub fn new(store: Arc<MemoryStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl ScheduleRepositoryTrait for ScheduleRepository {
    async fn create(&self, owner: &str, new_item: NewScheduledItem) -> Result<ScheduledItem> {
        new_item.validate()?;

        let now = MemoryStore::now();
        let item = ScheduledItem {
            id: MemoryStore::mint_id(),
            owner: owner.to_string(),
            child_id: new_item.child_id,
            entry: new_item.entry,
            start_date: new_item.start_date,
            end_date: new_item.end_date,
            price: new_item.price,
            status: new_item.status,
            is_sample: new_item.is_sample,
            created_at: now,
            updated_at: now,
        };

        {
            let mut items = self.store.items.write().unwrap();
            items.insert(item.id.clone(), item.clone());
        }
        self.store.publish(Topic::ScheduledItems);
        debug!("created scheduled item {} for {}", item.id, owner);
        Ok(item)
    }

    async fn update(
        &self,
        owner: &str,
        item_id: &str,
        update: ScheduledItemUpdate,
    ) -> Result<ScheduledItem> {
        update.validate()?;

        let updated = {
            let mut items = self.store.items.write().unwrap();
            let item = items
                .get_mut(item_id)
                .ok_or_else(|| Error::NotFound(format!("scheduled item {item_id}")))?;
            if item.owner != owner {
                return Err(Error::NotOwner(item_id.to_string()));
            }
            update.apply_to(item);
            item.updated_at = MemoryStore::now();
            item.clone()
        };
        self.store.publish(Topic::ScheduledItems);
        Ok(updated)
    }

    async fn delete(&self, owner: &str, item_id: &str) -> Result<usize> {
        {
            let mut items = self.store.items.write().unwrap();
            let item = items
                .get(item_id)
                .ok_or_else(|| Error::NotFound(format!("scheduled item {item_id}")))?;
            if item.owner != owner {
                return Err(Error::NotOwner(item_id.to_string()));
            }
            items.remove(item_id);
        }
        self.store.publish(Topic::ScheduledItems);
        Ok(1)
    }

    async fn delete_for_child(&self, owner: &str, child_id: &str) -> Result<usize> {
        let removed = {
            let mut items = self.store.items.write().unwrap();
            let before = items.len();
            items.retain(|_, item| !(item.owner == owner && item.child_id == child_id));
            before - items.len()
        };
        if removed > 0 {
            self.store.publish(Topic::ScheduledItems);
        }
        Ok(removed)
    }

    fn get_by_id(&self, item_id: &str) -> Result<Option<ScheduledItem>> {
        Ok(self.store.items.read().unwrap().get(item_id).cloned())
    }

    fn list_for_owner(&self, owner: &str) -> Result<Vec<ScheduledItem>> {
        let mut items: Vec<ScheduledItem> = self
            .store
            .items
            .read()
            .unwrap()
            .values()
            .filter(|item| item.owner == owner)
            .cloned()
            .collect();
        items.sort_by(|a, b| a.start_date.cmp(&b.start_date).then_with(|| a.id.cmp(&b.id)));
        Ok(items)
    }

    fn list_for_child(&self, owner: &str, child_id: &str) -> Result<Vec<ScheduledItem>> {
        let mut items: Vec<ScheduledItem> = self
            .store
            .items
            .read()
            .unwrap()
            .values()
            .filter(|item| item.owner == owner && item.child_id == child_id)
            .cloned()
            .collect();
        items.sort_by(|a, b| a.start_date.cmp(&b.start_date).then_with(|| a.id.cmp(&b.id)));
        Ok(items)
    }
}
