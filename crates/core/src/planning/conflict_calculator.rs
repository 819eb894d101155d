//! Overlap detection between scheduled items.

use chrono::NaiveDate;
use std::collections::HashMap;

use super::snapshot::PlanningSnapshot;

/// Derives the conflict set per item id for one child.
///
/// Two items conflict when their date spans overlap inclusively on at
/// least one day. The result is symmetric and never pairs an item with
/// itself. `exclude_item` removes one id from consideration, used when
/// previewing an edit to that item. Cancelled and date-less items cannot
/// conflict.
pub fn conflicts_by_item(
    snapshot: &PlanningSnapshot,
    child_id: &str,
    exclude_item: Option<&str>,
) -> HashMap<String, Vec<String>> {
    let spans: Vec<(&str, NaiveDate, NaiveDate)> = snapshot
        .active_items_for_child(child_id)
        .into_iter()
        .filter(|item| Some(item.id.as_str()) != exclude_item)
        .filter_map(|item| item.date_span().map(|(start, end)| (item.id.as_str(), start, end)))
        .collect();

    let mut conflicts: HashMap<String, Vec<String>> = HashMap::new();
    for (i, &(id_a, start_a, end_a)) in spans.iter().enumerate() {
        for &(id_b, start_b, end_b) in spans.iter().skip(i + 1) {
            if start_a <= end_b && end_a >= start_b {
                conflicts.entry(id_a.to_string()).or_default().push(id_b.to_string());
                conflicts.entry(id_b.to_string()).or_default().push(id_a.to_string());
            }
        }
    }
    conflicts
}

/// Item ids for the child whose spans overlap a candidate placement.
/// Used by what-if flows before staging an item.
pub fn overlapping_items(
    snapshot: &PlanningSnapshot,
    child_id: &str,
    start: NaiveDate,
    end: NaiveDate,
    exclude_item: Option<&str>,
) -> Vec<String> {
    snapshot
        .active_items_for_child(child_id)
        .into_iter()
        .filter(|item| Some(item.id.as_str()) != exclude_item)
        .filter(|item| match item.date_span() {
            Some((item_start, item_end)) => start <= item_end && end >= item_start,
            None => false,
        })
        .map(|item| item.id.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::planning::property_tests::support::{snapshot_2026, spanning_dates_item};
    use crate::schedule::ItemStatus;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn overlapping_items_conflict_symmetrically() {
        let mut snapshot = snapshot_2026("owner-1", &["child-1"]);
        let a = spanning_dates_item(
            "item-a",
            "child-1",
            date(2026, 6, 8),
            date(2026, 6, 12),
        );
        let b = spanning_dates_item(
            "item-b",
            "child-1",
            date(2026, 6, 10),
            date(2026, 6, 16),
        );
        snapshot.items.push(a);
        snapshot.items.push(b);

        let conflicts = conflicts_by_item(&snapshot, "child-1", None);
        assert_eq!(conflicts["item-a"], vec!["item-b".to_string()]);
        assert_eq!(conflicts["item-b"], vec!["item-a".to_string()]);
    }

    #[test]
    fn disjoint_items_do_not_conflict() {
        let mut snapshot = snapshot_2026("owner-1", &["child-1"]);
        snapshot.items.push(spanning_dates_item(
            "item-a",
            "child-1",
            date(2026, 6, 8),
            date(2026, 6, 12),
        ));
        snapshot.items.push(spanning_dates_item(
            "item-b",
            "child-1",
            date(2026, 6, 15),
            date(2026, 6, 19),
        ));

        assert!(conflicts_by_item(&snapshot, "child-1", None).is_empty());
    }

    #[test]
    fn single_day_touch_is_a_conflict() {
        let mut snapshot = snapshot_2026("owner-1", &["child-1"]);
        snapshot.items.push(spanning_dates_item(
            "item-a",
            "child-1",
            date(2026, 6, 8),
            date(2026, 6, 12),
        ));
        snapshot.items.push(spanning_dates_item(
            "item-b",
            "child-1",
            date(2026, 6, 12),
            date(2026, 6, 15),
        ));

        let conflicts = conflicts_by_item(&snapshot, "child-1", None);
        assert_eq!(conflicts.len(), 2);
    }

    #[test]
    fn excluded_and_cancelled_items_never_conflict() {
        let mut snapshot = snapshot_2026("owner-1", &["child-1"]);
        snapshot.items.push(spanning_dates_item(
            "item-a",
            "child-1",
            date(2026, 6, 8),
            date(2026, 6, 12),
        ));
        let mut cancelled = spanning_dates_item(
            "item-b",
            "child-1",
            date(2026, 6, 10),
            date(2026, 6, 16),
        );
        cancelled.status = ItemStatus::Cancelled;
        snapshot.items.push(cancelled);

        assert!(conflicts_by_item(&snapshot, "child-1", None).is_empty());

        snapshot.items.push(spanning_dates_item(
            "item-c",
            "child-1",
            date(2026, 6, 11),
            date(2026, 6, 12),
        ));
        let without_a = conflicts_by_item(&snapshot, "child-1", Some("item-a"));
        assert!(without_a.is_empty());
    }

    #[test]
    fn candidate_placement_reports_overlaps() {
        let mut snapshot = snapshot_2026("owner-1", &["child-1"]);
        snapshot.items.push(spanning_dates_item(
            "item-a",
            "child-1",
            date(2026, 6, 8),
            date(2026, 6, 12),
        ));

        let hits = overlapping_items(
            &snapshot,
            "child-1",
            date(2026, 6, 12),
            date(2026, 6, 18),
            None,
        );
        assert_eq!(hits, vec!["item-a".to_string()]);

        let hits = overlapping_items(
            &snapshot,
            "child-1",
            date(2026, 6, 15),
            date(2026, 6, 18),
            None,
        );
        assert!(hits.is_empty());
    }

    #[test]
    fn different_children_never_conflict() {
        let mut snapshot = snapshot_2026("owner-1", &["child-1", "child-2"]);
        snapshot.items.push(spanning_dates_item(
            "item-a",
            "child-1",
            date(2026, 6, 8),
            date(2026, 6, 12),
        ));
        snapshot.items.push(spanning_dates_item(
            "item-b",
            "child-2",
            date(2026, 6, 8),
            date(2026, 6, 12),
        ));

        assert!(conflicts_by_item(&snapshot, "child-1", None).is_empty());
        assert!(conflicts_by_item(&snapshot, "child-2", None).is_empty());
    }
}
