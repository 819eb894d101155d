//! In-memory storage for account profiles.

mod repository;

pub use repository::ProfileRepository;
