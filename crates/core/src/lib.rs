//! SummerPlan Core - domain entities, derivations, and the store protocol.
//!
//! This crate contains the planning core: the data model binding children,
//! camps, scheduled items, and interests together, and the derivation engine
//! computing coverage, gaps, cost, conflicts, registration readiness, and
//! work-hour fit. It is storage-agnostic and defines traits that are
//! implemented by the `storage-memory` crate.

pub mod calendar;
pub mod camps;
pub mod children;
pub mod constants;
pub mod errors;
pub mod events;
pub mod favorites;
pub mod interests;
pub mod maintenance;
pub mod planning;
pub mod preview;
pub mod profile;
pub mod schedule;
pub mod squads;
pub mod utils;

// Re-export common types from the planning module
pub use planning::*;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
