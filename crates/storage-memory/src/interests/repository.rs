use async_trait::async_trait;
use std::sync::Arc;

use summerplan_core::errors::Result;
use summerplan_core::events::Topic;
use summerplan_core::interests::{CampInterest, InterestKey, InterestRepositoryTrait, InterestUpsert};

use crate::store::MemoryStore;

/// In-memory repository for camp interests. Rows are unique by
/// `(owner, child, camp, week)` and written via upsert.
pub struct InterestRepository {
    store: Arc<MemoryStore>,
}

impl InterestRepository {
    pub fn new(store: Arc<MemoryStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl InterestRepositoryTrait for InterestRepository {
    async fn upsert(&self, owner: &str, upsert: InterestUpsert) -> Result<CampInterest> {
        upsert.validate()?;

        let key = InterestKey {
            owner: owner.to_string(),
            child_id: upsert.child_id.clone(),
            camp_id: upsert.camp_id.clone(),
            week: upsert.week,
        };
        let now = MemoryStore::now();

        let row = {
            let mut interests = self.store.interests.write().unwrap();
            let row = match interests.remove(&key) {
                Some(mut existing) => {
                    existing.looking_for_friends = upsert.looking_for_friends;
                    existing.updated_at = now;
                    existing
                }
                None => CampInterest {
                    owner: owner.to_string(),
                    child_id: upsert.child_id,
                    camp_id: upsert.camp_id,
                    week: upsert.week,
                    looking_for_friends: upsert.looking_for_friends,
                    created_at: now,
                    updated_at: now,
                },
            };
            interests.insert(key, row.clone());
            row
        };
        self.store.publish(Topic::Interests);
        Ok(row)
    }

    async fn delete_for_child(&self, owner: &str, child_id: &str) -> Result<usize> {
        let removed = {
            let mut interests = self.store.interests.write().unwrap();
            let before = interests.len();
            interests.retain(|key, _| !(key.owner == owner && key.child_id == child_id));
            before - interests.len()
        };
        if removed > 0 {
            self.store.publish(Topic::Interests);
        }
        Ok(removed)
    }

    fn list_for_owner(&self, owner: &str) -> Result<Vec<CampInterest>> {
        self.list_for_owners(&[owner.to_string()])
    }

    fn list_for_owners(&self, owners: &[String]) -> Result<Vec<CampInterest>> {
        let mut rows: Vec<CampInterest> = self
            .store
            .interests
            .read()
            .unwrap()
            .values()
            .filter(|interest| owners.iter().any(|owner| owner == &interest.owner))
            .cloned()
            .collect();
        rows.sort_by(|a, b| {
            a.owner
                .cmp(&b.owner)
                .then_with(|| a.child_id.cmp(&b.child_id))
                .then_with(|| a.camp_id.cmp(&b.camp_id))
                .then_with(|| a.week.cmp(&b.week))
        });
        Ok(rows)
    }
}
