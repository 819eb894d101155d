//! Favorite repository trait.

use async_trait::async_trait;

use super::favorites_model::{Favorite, NewFavorite};
use crate::errors::Result;

/// Trait defining the contract for favorite repository operations.
#[async_trait]
pub trait FavoriteRepositoryTrait: Send + Sync {
    /// Creates a favorite; returns the existing row when the camp is
    /// already bookmarked by the caller.
    async fn create(&self, owner: &str, new_favorite: NewFavorite) -> Result<Favorite>;

    /// Deletes a favorite; fails with `NotOwner` on a foreign row.
    async fn delete(&self, owner: &str, favorite_id: &str) -> Result<usize>;

    /// Lists the caller's favorites.
    fn list_for_owner(&self, owner: &str) -> Result<Vec<Favorite>>;
}
