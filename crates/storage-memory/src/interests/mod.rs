//! In-memory storage for camp interests.

mod repository;

pub use repository::InterestRepository;
