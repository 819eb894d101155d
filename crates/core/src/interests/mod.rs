//! Interests module - non-binding camp/week declarations per child.

mod interests_model;
mod interests_traits;

pub use interests_model::{CampInterest, InterestKey, InterestUpsert};
pub use interests_traits::InterestRepositoryTrait;
