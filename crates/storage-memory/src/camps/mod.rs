//! In-memory storage for the read-only camp collection.

mod repository;

pub use repository::CampRepository;
