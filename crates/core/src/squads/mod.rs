//! Squads module - small groups of accounts sharing camp interests.

mod disclosure;
mod squads_model;
mod squads_service;
mod squads_traits;

pub use disclosure::{disclose, disclose_squad_interests, DisclosedInterest};
pub use squads_model::{NewSquad, Squad, SquadMember, SquadMemberUpdate};
pub use squads_service::SquadService;
pub use squads_traits::{SquadRepositoryTrait, SquadServiceTrait};
