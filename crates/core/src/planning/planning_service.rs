//! Snapshot assembly and the full derived view.

use chrono::NaiveDate;
use log::debug;
use std::collections::HashMap;
use std::sync::Arc;

use super::conflict_calculator::conflicts_by_item;
use super::cost_calculator::{budget_status, family_cost, total_cost};
use super::coverage_calculator::week_coverage;
use super::friend_interest_calculator::friend_interest_counts;
use super::planning_model::{
    ChildPlanOverview, FamilyPlanSummary, FriendInterestCount, PlanSummary,
};
use super::registration_calculator::registration_status;
use super::snapshot::PlanningSnapshot;
use super::work_hours_calculator::work_hour_fit;
use crate::calendar::build_season;
use crate::camps::{CampFilter, CampRepositoryTrait};
use crate::children::ChildRepositoryTrait;
use crate::errors::Result;
use crate::interests::InterestRepositoryTrait;
use crate::profile::{school_dates_or_default, ProfileRepositoryTrait};
use crate::schedule::ScheduleRepositoryTrait;
use crate::squads::SquadRepositoryTrait;

/// Derives the full view for one child from an already-materialized
/// snapshot. Pure; the preview layer calls this against overlay snapshots.
///
/// Friend interest counts need peer data outside the snapshot and are left
/// empty here; [`PlanningService::plan_for_child`] fills them.
pub fn derive_plan(snapshot: &PlanningSnapshot, child_id: &str, today: NaiveDate) -> PlanSummary {
    let coverage = week_coverage(snapshot, child_id);
    let cost = total_cost(snapshot, child_id);
    let budget = budget_status(
        cost,
        snapshot.profile.as_ref().and_then(|profile| profile.budget),
    );
    let conflicts = conflicts_by_item(snapshot, child_id, None);

    let work_window = snapshot
        .profile
        .as_ref()
        .and_then(|profile| profile.work_window());
    let mut registration_by_camp_id = HashMap::new();
    let mut work_hour_by_camp_id = HashMap::new();
    for camp_id in snapshot.referenced_camp_ids(child_id) {
        let camp = snapshot.camp_or_placeholder(&camp_id);
        registration_by_camp_id.insert(camp_id.clone(), registration_status(&camp, today));
        work_hour_by_camp_id.insert(camp_id, work_hour_fit(&camp, work_window));
    }

    PlanSummary {
        child_id: child_id.to_string(),
        weeks: snapshot.season.weeks.clone(),
        pre_season_gap: snapshot.season.pre_gap.clone(),
        post_season_gap: snapshot.season.post_gap.clone(),
        coverage,
        total_cost: cost,
        budget,
        conflicts_by_item_id: conflicts,
        registration_by_camp_id,
        work_hour_by_camp_id,
        friend_interest_counts: Vec::new(),
    }
}

/// Service assembling snapshots from the repositories and running the
/// derivation engine over them.
pub struct PlanningService {
    children: Arc<dyn ChildRepositoryTrait>,
    schedule: Arc<dyn ScheduleRepositoryTrait>,
    interests: Arc<dyn InterestRepositoryTrait>,
    camps: Arc<dyn CampRepositoryTrait>,
    profiles: Arc<dyn ProfileRepositoryTrait>,
    squads: Arc<dyn SquadRepositoryTrait>,
}

impl PlanningService {
    /// Creates a new PlanningService instance.
    pub fn new(
        children: Arc<dyn ChildRepositoryTrait>,
        schedule: Arc<dyn ScheduleRepositoryTrait>,
        interests: Arc<dyn InterestRepositoryTrait>,
        camps: Arc<dyn CampRepositoryTrait>,
        profiles: Arc<dyn ProfileRepositoryTrait>,
        squads: Arc<dyn SquadRepositoryTrait>,
    ) -> Self {
        Self {
            children,
            schedule,
            interests,
            camps,
            profiles,
            squads,
        }
    }

    /// Loads the current snapshot for an account: season weeks from the
    /// profile's school dates (or the configured defaults) plus every
    /// owned entity.
    pub fn snapshot(&self, owner: &str) -> Result<PlanningSnapshot> {
        let profile = self.profiles.get(owner)?;
        let (school_end, school_start) = school_dates_or_default(profile.as_ref())?;
        let season = build_season(school_end, school_start)?;
        debug!(
            "snapshot for {}: {} weeks in season",
            owner,
            season.weeks.len()
        );

        Ok(PlanningSnapshot {
            season,
            children: self.children.list_for_owner(owner)?,
            items: self.schedule.list_for_owner(owner)?,
            interests: self.interests.list_for_owner(owner)?,
            camps: self.camps.list(&CampFilter::default())?,
            profile,
        })
    }

    /// The full derived view for one child as of `today`.
    pub fn plan_for_child(
        &self,
        owner: &str,
        child_id: &str,
        today: NaiveDate,
    ) -> Result<PlanSummary> {
        let snapshot = self.snapshot(owner)?;
        let mut summary = derive_plan(&snapshot, child_id, today);
        summary.friend_interest_counts = self.friend_counts(owner)?;
        Ok(summary)
    }

    /// Cross-child rollup for the whole account.
    pub fn family_plan(&self, owner: &str) -> Result<FamilyPlanSummary> {
        let snapshot = self.snapshot(owner)?;
        let total = family_cost(&snapshot);
        let budget = budget_status(
            total,
            snapshot.profile.as_ref().and_then(|profile| profile.budget),
        );
        let children = snapshot
            .children
            .iter()
            .map(|child| ChildPlanOverview {
                child_id: child.id.clone(),
                name: child.name.clone(),
                coverage: week_coverage(&snapshot, &child.id),
                total_cost: total_cost(&snapshot, &child.id),
            })
            .collect();

        Ok(FamilyPlanSummary {
            total_cost: total,
            budget,
            children,
        })
    }

    /// Peer interest counts across the caller's squads.
    pub fn friend_counts(&self, owner: &str) -> Result<Vec<FriendInterestCount>> {
        let squads = self.squads.list_for_member(owner)?;
        if squads.is_empty() {
            return Ok(Vec::new());
        }
        let mut peer_ids: Vec<String> = squads
            .iter()
            .flat_map(|squad| squad.members.iter())
            .filter(|member| member.user_id != owner && member.share_schedule)
            .map(|member| member.user_id.clone())
            .collect();
        peer_ids.sort();
        peer_ids.dedup();

        let peer_interests = self.interests.list_for_owners(&peer_ids)?;
        Ok(friend_interest_counts(owner, &squads, &peer_interests))
    }
}
