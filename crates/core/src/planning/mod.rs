//! Derivation engine.
//!
//! Every derivation here is a pure function of an immutable
//! [`PlanningSnapshot`] plus a query. Derivations never fail: every
//! function has a well-defined output for every snapshot, including empty
//! ones.

mod conflict_calculator;
mod cost_calculator;
mod coverage_calculator;
mod friend_interest_calculator;
mod planning_model;
mod planning_service;
mod registration_calculator;
mod snapshot;
mod work_hours_calculator;


pub use conflict_calculator::{conflicts_by_item, overlapping_items};
pub use cost_calculator::{budget_status, family_cost, total_cost};
pub use coverage_calculator::week_coverage;
pub use friend_interest_calculator::friend_interest_counts;
pub use planning_model::{
    BudgetStatus, ChildPlanOverview, FamilyPlanSummary, FriendInterestCount, PlanSummary,
    RegistrationKind, RegistrationStatus, Severity, WeekCoverage, WorkHourFit,
};
pub use planning_service::{derive_plan, PlanningService};
pub use registration_calculator::registration_status;
pub use snapshot::PlanningSnapshot;
pub use work_hours_calculator::work_hour_fit;
