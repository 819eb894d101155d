//! Camps module - the externally managed, read-only camp collection.

mod camps_model;
mod camps_traits;

pub use camps_model::{Camp, CampFilter};
pub use camps_traits::CampRepositoryTrait;
