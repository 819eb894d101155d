use async_trait::async_trait;
use std::sync::Arc;

use summerplan_core::errors::Result;
use summerplan_core::events::Topic;
use summerplan_core::profile::{AccountProfile, ProfileRepositoryTrait, ProfileUpdate};

use crate::store::MemoryStore;

/// In-memory repository for account profiles. One row per account,
/// written via upsert.
pub struct ProfileRepository {
    store: Arc<MemoryStore>,
}

impl ProfileRepository {
    pub fn new(store: Arc<MemoryStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl ProfileRepositoryTrait for ProfileRepository {
    fn get(&self, owner: &str) -> Result<Option<AccountProfile>> {
        Ok(self.store.profiles.read().unwrap().get(owner).cloned())
    }

    async fn upsert(&self, owner: &str, update: ProfileUpdate) -> Result<AccountProfile> {
        update.validate()?;

        let now = MemoryStore::now();
        let profile = {
            let mut profiles = self.store.profiles.write().unwrap();
            let profile = profiles
                .entry(owner.to_string())
                .or_insert_with(|| AccountProfile::empty(owner, now));
            update.apply_to(profile);
            profile.updated_at = now;
            profile.clone()
        };
        self.store.publish(Topic::Profile);
        Ok(profile)
    }
}
