//! Derived view records returned to consumers.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::calendar::{SeasonGap, WeekSlot};
use crate::utils::time_utils::MinuteOfDay;

/// Coverage result for one child: which season weeks hold at least one
/// non-cancelled scheduled item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeekCoverage {
    pub covered_weeks: Vec<u32>,
    pub gap_weeks: Vec<u32>,
    /// Covered / total, rounded to an integer percentage.
    pub coverage_percent: u8,
}

/// Budget posture derived from total cost and the configured budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetStatus {
    pub total_cost: i64,
    pub budget: Option<i64>,
    /// True when spending reached the warn fraction of the budget.
    pub warn: bool,
}

/// Registration status tag kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RegistrationKind {
    Open,
    Waitlist,
    Closed,
    Upcoming,
    Unknown,
}

/// Urgency attached to a registration status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Critical,
    Info,
}

/// Registration readiness for a camp as of a given day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationStatus {
    pub kind: RegistrationKind,
    /// Days until registration opens; set only for upcoming openings.
    pub days_until: Option<i64>,
    pub label: String,
    pub severity: Severity,
}

impl RegistrationStatus {
    /// The fallback for unparseable registration input.
    pub fn unknown() -> Self {
        Self {
            kind: RegistrationKind::Unknown,
            days_until: None,
            label: "Registration unknown".to_string(),
            severity: Severity::Info,
        }
    }
}

/// Work-hour compatibility between a camp and the account's work window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkHourFit {
    /// `None` when the camp hours or work window could not be parsed; the
    /// camp is then shown as "unknown" rather than excluded.
    pub covers: Option<bool>,
    pub needs_extended_care: bool,
    pub effective_drop_off: Option<MinuteOfDay>,
    pub effective_pick_up: Option<MinuteOfDay>,
}

/// Interest pressure from squad peers for one camp-week.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FriendInterestCount {
    pub camp_id: String,
    pub week: u32,
    pub count: u32,
}

/// The full derived view for one child.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanSummary {
    pub child_id: String,
    pub weeks: Vec<WeekSlot>,
    pub pre_season_gap: Option<SeasonGap>,
    pub post_season_gap: Option<SeasonGap>,
    #[serde(flatten)]
    pub coverage: WeekCoverage,
    pub total_cost: i64,
    pub budget: BudgetStatus,
    pub conflicts_by_item_id: HashMap<String, Vec<String>>,
    pub registration_by_camp_id: HashMap<String, RegistrationStatus>,
    pub work_hour_by_camp_id: HashMap<String, WorkHourFit>,
    pub friend_interest_counts: Vec<FriendInterestCount>,
}

/// Per-child line in the family rollup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChildPlanOverview {
    pub child_id: String,
    pub name: String,
    pub coverage: WeekCoverage,
    pub total_cost: i64,
}

/// Cross-child rollup for the whole account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FamilyPlanSummary {
    pub total_cost: i64,
    pub budget: BudgetStatus,
    pub children: Vec<ChildPlanOverview>,
}
