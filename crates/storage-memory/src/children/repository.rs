use async_trait::async_trait;
use log::debug;
use std::sync::Arc;

use summerplan_core::children::{Child, ChildRepositoryTrait, ChildUpdate, NewChild};
use summerplan_core::errors::{Error, Result};
use summerplan_core::events::Topic;

use crate::store::MemoryStore;

/// In-memory repository for children.
pub struct ChildRepository {
    store: Arc<MemoryStore>,
}

impl ChildRepository {
    pub fn new(store: Arc<MemoryStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl ChildRepositoryTrait for ChildRepository {
    async fn create(&self, owner: &str, new_child: NewChild) -> Result<Child> {
        let new_child = new_child.sanitized();
        new_child.validate()?;

        let now = MemoryStore::now();
        // Owner comes from the authenticated caller; the payload cannot
        // carry one.
        let child = Child {
            id: MemoryStore::mint_id(),
            owner: owner.to_string(),
            name: new_child.name,
            color: new_child.color,
            age: new_child.age,
            is_sample: new_child.is_sample,
            created_at: now,
            updated_at: now,
        };

        {
            let mut children = self.store.children.write().unwrap();
            children.insert(child.id.clone(), child.clone());
        }
        self.store.publish(Topic::Children);
        debug!("created child {} for {}", child.id, owner);
        Ok(child)
    }

    async fn update(&self, owner: &str, child_id: &str, update: ChildUpdate) -> Result<Child> {
        let update = update.sanitized();
        update.validate()?;

        let updated = {
            let mut children = self.store.children.write().unwrap();
            let child = children
                .get_mut(child_id)
                .ok_or_else(|| Error::NotFound(format!("child {child_id}")))?;
            if child.owner != owner {
                return Err(Error::NotOwner(child_id.to_string()));
            }
            update.apply_to(child);
            child.updated_at = MemoryStore::now();
            child.clone()
        };
        self.store.publish(Topic::Children);
        Ok(updated)
    }

    async fn delete(&self, owner: &str, child_id: &str) -> Result<usize> {
        {
            let mut children = self.store.children.write().unwrap();
            let child = children
                .get(child_id)
                .ok_or_else(|| Error::NotFound(format!("child {child_id}")))?;
            if child.owner != owner {
                return Err(Error::NotOwner(child_id.to_string()));
            }
            children.remove(child_id);
        }
        self.store.publish(Topic::Children);
        debug!("deleted child {}", child_id);
        Ok(1)
    }

    fn get_by_id(&self, child_id: &str) -> Result<Option<Child>> {
        Ok(self.store.children.read().unwrap().get(child_id).cloned())
    }

    fn list_for_owner(&self, owner: &str) -> Result<Vec<Child>> {
        let mut children: Vec<Child> = self
            .store
            .children
            .read()
            .unwrap()
            .values()
            .filter(|child| child.owner == owner)
            .cloned()
            .collect();
        children.sort_by(|a, b| a.created_at.cmp(&b.created_at).then_with(|| a.id.cmp(&b.id)));
        Ok(children)
    }
}
