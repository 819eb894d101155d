//! The shared in-memory store backing every repository.

use chrono::NaiveDateTime;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use summerplan_core::camps::Camp;
use summerplan_core::children::Child;
use summerplan_core::events::{InvalidationBus, Topic};
use summerplan_core::favorites::Favorite;
use summerplan_core::interests::{CampInterest, InterestKey};
use summerplan_core::profile::AccountProfile;
use summerplan_core::schedule::ScheduledItem;
use summerplan_core::squads::Squad;

/// Typed in-memory collections plus the invalidation bus.
///
/// Repositories share one store the way database repositories share a
/// connection pool. The camp collection is read-only and seeded by the
/// host; everything else is written through the repositories.
pub struct MemoryStore {
    pub(crate) children: RwLock<HashMap<String, Child>>,
    pub(crate) items: RwLock<HashMap<String, ScheduledItem>>,
    pub(crate) interests: RwLock<HashMap<InterestKey, CampInterest>>,
    pub(crate) squads: RwLock<HashMap<String, Squad>>,
    pub(crate) favorites: RwLock<HashMap<String, Favorite>>,
    pub(crate) profiles: RwLock<HashMap<String, AccountProfile>>,
    pub(crate) camps: RwLock<HashMap<String, Camp>>,
    bus: Arc<InvalidationBus>,
}

impl MemoryStore {
    pub fn new() -> Arc<Self> {
        Self::with_bus(Arc::new(InvalidationBus::new()))
    }

    pub fn with_bus(bus: Arc<InvalidationBus>) -> Arc<Self> {
        Arc::new(Self {
            children: RwLock::new(HashMap::new()),
            items: RwLock::new(HashMap::new()),
            interests: RwLock::new(HashMap::new()),
            squads: RwLock::new(HashMap::new()),
            favorites: RwLock::new(HashMap::new()),
            profiles: RwLock::new(HashMap::new()),
            camps: RwLock::new(HashMap::new()),
            bus,
        })
    }

    /// The bus consumers subscribe to for invalidation signals.
    pub fn bus(&self) -> Arc<InvalidationBus> {
        self.bus.clone()
    }

    /// Seeds the read-only camp collection.
    pub fn seed_camps(&self, camps: Vec<Camp>) {
        let mut map = self.camps.write().unwrap();
        for camp in camps {
            map.insert(camp.id.clone(), camp);
        }
    }

    /// Publishes an invalidation. Called after the mutation's locks are
    /// released so subscribers can re-read immediately.
    pub(crate) fn publish(&self, topic: Topic) {
        self.bus.publish(topic);
    }

    pub(crate) fn now() -> NaiveDateTime {
        chrono::Utc::now().naive_utc()
    }

    pub(crate) fn mint_id() -> String {
        uuid::Uuid::new_v4().to_string()
    }
}
