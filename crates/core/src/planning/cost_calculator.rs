//! Season cost derivation.

use super::planning_model::BudgetStatus;
use super::snapshot::PlanningSnapshot;
use crate::constants::SEASON_BUDGET_WARN_FRACTION;

/// Sums the price of every non-cancelled item for the child, in integer
/// dollars. Null prices count as zero. Out-of-season and date-less items
/// still contribute.
pub fn total_cost(snapshot: &PlanningSnapshot, child_id: &str) -> i64 {
    snapshot
        .items
        .iter()
        .filter(|item| item.child_id == child_id && item.status.is_active())
        .map(|item| item.price.unwrap_or(0))
        .sum()
}

/// Cross-child total: the sum of per-child totals.
pub fn family_cost(snapshot: &PlanningSnapshot) -> i64 {
    snapshot
        .children
        .iter()
        .map(|child| total_cost(snapshot, &child.id))
        .sum()
}

/// Flags spending against the configured season budget.
pub fn budget_status(total_cost: i64, budget: Option<i64>) -> BudgetStatus {
    let warn = match budget {
        Some(budget) if budget > 0 => {
            total_cost as f64 >= budget as f64 * SEASON_BUDGET_WARN_FRACTION
        }
        _ => false,
    };
    BudgetStatus {
        total_cost,
        budget,
        warn,
    }
}
