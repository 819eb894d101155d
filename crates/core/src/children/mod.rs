//! Children module - domain models, services, and traits.

mod children_model;
mod children_service;
mod children_traits;

pub use children_model::{Child, ChildUpdate, NewChild};
pub use children_service::ChildService;
pub use children_traits::{ChildRepositoryTrait, ChildServiceTrait};
