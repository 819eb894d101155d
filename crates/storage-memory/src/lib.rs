//! In-memory storage implementation for SummerPlan.
//!
//! This crate implements the repository traits defined by
//! `summerplan-core` over typed in-memory collections. It stands in for
//! the remote object store: every mutation enforces row-level ownership,
//! injects the authenticated owner, and publishes on the matching
//! invalidation topic. Cross-user reads pass through the disclosure
//! filter at this boundary.

mod camps;
mod children;
mod favorites;
mod interests;
mod maintenance;
mod profile;
mod schedule;
mod squads;
mod store;

pub use camps::CampRepository;
pub use children::ChildRepository;
pub use favorites::FavoriteRepository;
pub use interests::InterestRepository;
pub use maintenance::StoreMaintenance;
pub use profile::ProfileRepository;
pub use schedule::ScheduleRepository;
pub use squads::SquadRepository;
pub use store::MemoryStore;
