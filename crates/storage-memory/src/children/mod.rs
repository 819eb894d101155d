//! In-memory storage for children.

mod repository;

pub use repository::ChildRepository;
