use async_trait::async_trait;
use std::sync::Arc;

use summerplan_core::errors::{Error, Result};
use summerplan_core::events::Topic;
use summerplan_core::favorites::{Favorite, FavoriteRepositoryTrait, NewFavorite};

use crate::store::MemoryStore;

/// In-memory repository for camp favorites.
pub struct FavoriteRepository {
    store: Arc<MemoryStore>,
}

impl FavoriteRepository {
    pub fn new(store: Arc<MemoryStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl FavoriteRepositoryTrait for FavoriteRepository {
    async fn create(&self, owner: &str, new_favorite: NewFavorite) -> Result<Favorite> {
        new_favorite.validate()?;

        let existing = self
            .store
            .favorites
            .read()
            .unwrap()
            .values()
            .find(|favorite| favorite.owner == owner && favorite.camp_id == new_favorite.camp_id)
            .cloned();
        if let Some(existing) = existing {
            return Ok(existing);
        }

        let favorite = Favorite {
            id: MemoryStore::mint_id(),
            owner: owner.to_string(),
            camp_id: new_favorite.camp_id,
            created_at: MemoryStore::now(),
        };
        {
            let mut favorites = self.store.favorites.write().unwrap();
            favorites.insert(favorite.id.clone(), favorite.clone());
        }
        self.store.publish(Topic::Favorites);
        Ok(favorite)
    }

    async fn delete(&self, owner: &str, favorite_id: &str) -> Result<usize> {
        {
            let mut favorites = self.store.favorites.write().unwrap();
            let favorite = favorites
                .get(favorite_id)
                .ok_or_else(|| Error::NotFound(format!("favorite {favorite_id}")))?;
            if favorite.owner != owner {
                return Err(Error::NotOwner(favorite_id.to_string()));
            }
            favorites.remove(favorite_id);
        }
        self.store.publish(Topic::Favorites);
        Ok(1)
    }

    fn list_for_owner(&self, owner: &str) -> Result<Vec<Favorite>> {
        let mut favorites: Vec<Favorite> = self
            .store
            .favorites
            .read()
            .unwrap()
            .values()
            .filter(|favorite| favorite.owner == owner)
            .cloned()
            .collect();
        favorites.sort_by(|a, b| a.created_at.cmp(&b.created_at).then_with(|| a.id.cmp(&b.id)));
        Ok(favorites)
    }
}
