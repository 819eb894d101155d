//! Week coverage and gap derivation.

use super::planning_model::WeekCoverage;
use super::snapshot::PlanningSnapshot;

/// Derives covered and gap weeks for one child.
///
/// A week is covered when any non-cancelled item for the child intersects
/// its date span. A multi-week item counts each week it intersects; a
/// zero-length item counts only its containing week. Items without a
/// usable date span never cover anything. Out-of-season items simply
/// intersect no slot.
pub fn week_coverage(snapshot: &PlanningSnapshot, child_id: &str) -> WeekCoverage {
    let items = snapshot.active_items_for_child(child_id);

    let mut covered_weeks = Vec::new();
    let mut gap_weeks = Vec::new();
    for slot in &snapshot.season.weeks {
        let covered = items.iter().any(|item| match item.date_span() {
            Some((start, end)) => slot.intersects(start, end),
            None => false,
        });
        if covered {
            covered_weeks.push(slot.week);
        } else {
            gap_weeks.push(slot.week);
        }
    }

    let total = snapshot.season.weeks.len();
    let coverage_percent = if total == 0 {
        0
    } else {
        ((covered_weeks.len() as f64 / total as f64) * 100.0).round() as u8
    };

    WeekCoverage {
        covered_weeks,
        gap_weeks,
        coverage_percent,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::planning::property_tests::support::{item_for_week, snapshot_2026, spanning_item};
    use crate::schedule::ItemStatus;

    #[test]
    fn covered_and_gap_weeks_partition_the_season() {
        let mut snapshot = snapshot_2026("owner-1", &["child-1"]);
        snapshot.items.push(item_for_week(&snapshot, "child-1", 1, Some(400)));
        snapshot.items.push(item_for_week(&snapshot, "child-1", 2, Some(250)));
        snapshot.items.push(item_for_week(&snapshot, "child-1", 5, Some(300)));

        let coverage = week_coverage(&snapshot, "child-1");
        assert_eq!(coverage.covered_weeks, vec![1, 2, 5]);
        assert_eq!(coverage.gap_weeks, vec![3, 4, 6, 7, 8, 9, 10, 11]);
        assert_eq!(coverage.coverage_percent, 27);
    }

    #[test]
    fn cancelled_items_do_not_cover() {
        let mut snapshot = snapshot_2026("owner-1", &["child-1"]);
        let mut item = item_for_week(&snapshot, "child-1", 3, Some(100));
        item.status = ItemStatus::Cancelled;
        snapshot.items.push(item);

        let coverage = week_coverage(&snapshot, "child-1");
        assert!(coverage.covered_weeks.is_empty());
        assert_eq!(coverage.coverage_percent, 0);
    }

    #[test]
    fn multi_week_items_count_each_intersected_week() {
        let mut snapshot = snapshot_2026("owner-1", &["child-1"]);
        snapshot
            .items
            .push(spanning_item(&snapshot, "child-1", 2, 4, Some(900)));

        let coverage = week_coverage(&snapshot, "child-1");
        assert_eq!(coverage.covered_weeks, vec![2, 3, 4]);
    }

    #[test]
    fn zero_length_item_counts_its_containing_week() {
        let mut snapshot = snapshot_2026("owner-1", &["child-1"]);
        let mut item = item_for_week(&snapshot, "child-1", 6, None);
        item.end_date = item.start_date;
        snapshot.items.push(item);

        let coverage = week_coverage(&snapshot, "child-1");
        assert_eq!(coverage.covered_weeks, vec![6]);
    }

    #[test]
    fn empty_season_yields_zero_percent() {
        let mut snapshot = snapshot_2026("owner-1", &[]);
        snapshot.season.weeks.clear();
        let coverage = week_coverage(&snapshot, "child-1");
        assert_eq!(coverage.coverage_percent, 0);
        assert!(coverage.covered_weeks.is_empty());
        assert!(coverage.gap_weeks.is_empty());
    }
}
