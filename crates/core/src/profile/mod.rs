//! Profile module - per-account planning configuration.

mod profile_model;
mod profile_traits;

pub use profile_model::{school_dates_or_default, AccountProfile, ProfileUpdate};
pub use profile_traits::ProfileRepositoryTrait;
