//! Calendar engine - canonicalizes the summer season into week slots.

mod calendar_model;
mod calendar_service;

pub use calendar_model::{Season, SeasonGap, WeekSlot};
pub use calendar_service::{build_season, default_school_dates, season_from_strings};
