//! Favorites module - per-account camp bookmarks.

mod favorites_model;
mod favorites_traits;

pub use favorites_model::{Favorite, NewFavorite};
pub use favorites_traits::FavoriteRepositoryTrait;
