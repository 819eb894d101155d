//! Schedule module - scheduled items assigning children to camps or blocks.

mod schedule_model;
mod schedule_service;
mod schedule_traits;

pub use schedule_model::{
    BlockType, ItemStatus, NewScheduledItem, ScheduleEntry, ScheduledItem, ScheduledItemUpdate,
};
pub use schedule_service::ScheduleService;
pub use schedule_traits::{ScheduleRepositoryTrait, ScheduleServiceTrait};
