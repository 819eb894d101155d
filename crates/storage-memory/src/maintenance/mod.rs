//! Atomic maintenance routines.

mod repository;

pub use repository::StoreMaintenance;
