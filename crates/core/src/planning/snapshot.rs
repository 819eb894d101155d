//! The immutable snapshot every derivation reads.

use serde::{Deserialize, Serialize};

use crate::calendar::Season;
use crate::camps::Camp;
use crate::children::Child;
use crate::interests::CampInterest;
use crate::profile::AccountProfile;
use crate::schedule::ScheduledItem;

/// An immutable view of all core entities at a point in time.
///
/// Snapshots are cheap to clone and never mutated by derivations; the
/// preview layer materializes overlay snapshots with the same shape, so
/// every derivation accepts either.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanningSnapshot {
    pub season: Season,
    pub children: Vec<Child>,
    pub items: Vec<ScheduledItem>,
    pub interests: Vec<CampInterest>,
    pub camps: Vec<Camp>,
    /// `None` when the account never configured one.
    pub profile: Option<AccountProfile>,
}

impl PlanningSnapshot {
    /// Non-cancelled items for one child in canonical order: start date
    /// ascending, then id ascending.
    pub fn active_items_for_child(&self, child_id: &str) -> Vec<&ScheduledItem> {
        let mut items: Vec<&ScheduledItem> = self
            .items
            .iter()
            .filter(|item| item.child_id == child_id && item.status.is_active())
            .collect();
        items.sort_by(|a, b| a.start_date.cmp(&b.start_date).then_with(|| a.id.cmp(&b.id)));
        items
    }

    /// Looks up a camp by id.
    pub fn camp(&self, camp_id: &str) -> Option<&Camp> {
        self.camps.iter().find(|camp| camp.id == camp_id)
    }

    /// Looks up a camp, substituting the deleted-camp placeholder for a
    /// dangling reference.
    pub fn camp_or_placeholder(&self, camp_id: &str) -> Camp {
        match self.camp(camp_id) {
            Some(camp) => camp.clone(),
            None => Camp::placeholder(camp_id),
        }
    }

    /// Every camp id referenced by a child's items and interests, deduped,
    /// in first-seen order.
    pub fn referenced_camp_ids(&self, child_id: &str) -> Vec<String> {
        let mut seen = Vec::new();
        for item in self.active_items_for_child(child_id) {
            if let Some(camp_id) = item.camp_id() {
                if !seen.iter().any(|id: &String| id == camp_id) {
                    seen.push(camp_id.to_string());
                }
            }
        }
        for interest in self
            .interests
            .iter()
            .filter(|interest| interest.child_id == child_id)
        {
            if !seen.iter().any(|id: &String| id == &interest.camp_id) {
                seen.push(interest.camp_id.clone());
            }
        }
        seen
    }
}
