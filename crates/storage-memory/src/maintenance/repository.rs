use async_trait::async_trait;
use log::debug;
use std::sync::Arc;

use summerplan_core::errors::Result;
use summerplan_core::events::Topic;
use summerplan_core::maintenance::{MaintenanceTrait, PurgeReport};

use crate::store::MemoryStore;

/// Atomic multi-collection routines, the analog of server-side functions
/// in the remote store.
pub struct StoreMaintenance {
    store: Arc<MemoryStore>,
}

impl StoreMaintenance {
    pub fn new(store: Arc<MemoryStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl MaintenanceTrait for StoreMaintenance {
    async fn purge_sample_data(&self, owner: &str) -> Result<PurgeReport> {
        // All three collections are locked for the whole purge so no
        // reader observes a partial removal.
        let report = {
            let mut children = self.store.children.write().unwrap();
            let mut items = self.store.items.write().unwrap();
            let mut interests = self.store.interests.write().unwrap();

            let sample_children: Vec<String> = children
                .values()
                .filter(|child| child.owner == owner && child.is_sample)
                .map(|child| child.id.clone())
                .collect();

            let children_before = children.len();
            children.retain(|_, child| !(child.owner == owner && child.is_sample));

            let items_before = items.len();
            items.retain(|_, item| {
                !(item.owner == owner
                    && (item.is_sample || sample_children.contains(&item.child_id)))
            });

            let interests_before = interests.len();
            interests.retain(|key, _| {
                !(key.owner == owner && sample_children.contains(&key.child_id))
            });

            PurgeReport {
                children: children_before - children.len(),
                items: items_before - items.len(),
                interests: interests_before - interests.len(),
            }
        };

        if report.children > 0 {
            self.store.publish(Topic::Children);
        }
        if report.items > 0 {
            self.store.publish(Topic::ScheduledItems);
        }
        if report.interests > 0 {
            self.store.publish(Topic::Interests);
        }
        debug!("purged {} sample rows for {}", report.total(), owner);
        Ok(report)
    }
}
