//! Friend interest aggregation across squads.

use std::collections::{HashMap, HashSet};

use super::planning_model::FriendInterestCount;
use crate::interests::CampInterest;
use crate::squads::Squad;

/// Counts peer interest per camp-week across the caller's squads.
///
/// Peers must have `share_schedule = true`; the caller's own interests are
/// excluded, and a peer appearing in several squads is counted once. The
/// output carries no identity, so no disclosure filtering is needed here.
pub fn friend_interest_counts(
    caller: &str,
    squads: &[Squad],
    interests: &[CampInterest],
) -> Vec<FriendInterestCount> {
    let mut sharing_peers: HashSet<&str> = HashSet::new();
    for squad in squads {
        for member in &squad.members {
            if member.user_id != caller && member.share_schedule {
                sharing_peers.insert(member.user_id.as_str());
            }
        }
    }

    let mut counts: HashMap<(String, u32), u32> = HashMap::new();
    for interest in interests {
        if sharing_peers.contains(interest.owner.as_str()) {
            *counts
                .entry((interest.camp_id.clone(), interest.week))
                .or_insert(0) += 1;
        }
    }

    let mut rows: Vec<FriendInterestCount> = counts
        .into_iter()
        .map(|((camp_id, week), count)| FriendInterestCount {
            camp_id,
            week,
            count,
        })
        .collect();
    rows.sort_by(|a, b| a.camp_id.cmp(&b.camp_id).then(a.week.cmp(&b.week)));
    rows
}
