use std::sync::Arc;

use summerplan_core::camps::{Camp, CampFilter, CampRepositoryTrait};
use summerplan_core::errors::Result;

use crate::store::MemoryStore;

/// In-memory repository for camps. Read-only; rows are seeded through
/// [`MemoryStore::seed_camps`].
pub struct CampRepository {
    store: Arc<MemoryStore>,
}

impl CampRepository {
    pub fn new(store: Arc<MemoryStore>) -> Self {
        Self { store }
    }
}

impl CampRepositoryTrait for CampRepository {
    fn get_by_id(&self, camp_id: &str) -> Result<Option<Camp>> {
        Ok(self.store.camps.read().unwrap().get(camp_id).cloned())
    }

    fn list(&self, filter: &CampFilter) -> Result<Vec<Camp>> {
        let mut camps: Vec<Camp> = self
            .store
            .camps
            .read()
            .unwrap()
            .values()
            .filter(|camp| filter.matches(camp))
            .cloned()
            .collect();
        camps.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.id.cmp(&b.id)));
        Ok(camps)
    }
}
