//! In-memory storage for squads.

mod repository;

pub use repository::SquadRepository;
