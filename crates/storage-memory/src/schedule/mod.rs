//! In-memory storage for scheduled items.

mod repository;

pub use repository::ScheduleRepository;
