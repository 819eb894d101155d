//! In-memory storage for camp favorites.

mod repository;

pub use repository::FavoriteRepository;
