//! The what-if session: stage, materialize, discard, or commit.

use chrono::NaiveDateTime;
use log::debug;
use std::collections::HashMap;

use super::preview_model::{CommitReport, FailedOp, PendingOp};
use crate::errors::{Error, Result};
use crate::planning::PlanningSnapshot;
use crate::schedule::{NewScheduledItem, ScheduleRepositoryTrait, ScheduledItem, ScheduledItemUpdate};

/// A transient overlay of pending schedule mutations over a base snapshot.
///
/// Staging and materializing never touch the store; committing replays the
/// ops through the schedule repository in staging order.
pub struct PreviewSession {
    owner: String,
    base: PlanningSnapshot,
    ops: Vec<PendingOp>,
    next_local_id: u64,
}

impl PreviewSession {
    /// Opens a session over an immutable clone of the live snapshot.
    pub fn new(owner: &str, base: PlanningSnapshot) -> Self {
        Self {
            owner: owner.to_string(),
            base,
            ops: Vec::new(),
            next_local_id: 0,
        }
    }

    /// Stages an insert, returning the preview-local item id later ops and
    /// derivations can address.
    pub fn stage_insert(&mut self, item: NewScheduledItem) -> Result<String> {
        item.validate()?;
        self.next_local_id += 1;
        let item_id = format!("preview-{}", self.next_local_id);
        self.ops.push(PendingOp::Insert {
            item_id: item_id.clone(),
            item,
        });
        Ok(item_id)
    }

    /// Stages an update against an existing or preview-local item.
    pub fn stage_update(&mut self, item_id: &str, patch: ScheduledItemUpdate) -> Result<()> {
        patch.validate()?;
        self.ops.push(PendingOp::Update {
            item_id: item_id.to_string(),
            patch,
        });
        Ok(())
    }

    /// Stages a delete.
    pub fn stage_delete(&mut self, item_id: &str) {
        self.ops.push(PendingOp::Delete {
            item_id: item_id.to_string(),
        });
    }

    /// The staged ops, in order.
    pub fn ops(&self) -> &[PendingOp] {
        &self.ops
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// Drops the overlay without applying anything.
    pub fn discard(&mut self) {
        self.ops.clear();
    }

    /// Applies the overlay, in order, to a clone of the base snapshot.
    ///
    /// Pure: neither the base snapshot nor the store is modified. Ops
    /// addressing unknown ids are skipped, matching replay semantics where
    /// they would fail individually.
    pub fn materialize(&self) -> PlanningSnapshot {
        let mut snapshot = self.base.clone();
        for op in &self.ops {
            match op {
                PendingOp::Insert { item_id, item } => {
                    snapshot.items.push(overlay_item(item_id, &self.owner, item));
                }
                PendingOp::Update { item_id, patch } => {
                    if let Some(existing) =
                        snapshot.items.iter_mut().find(|item| &item.id == item_id)
                    {
                        patch.apply_to(existing);
                    }
                }
                PendingOp::Delete { item_id } => {
                    snapshot.items.retain(|item| &item.id != item_id);
                }
            }
        }
        snapshot
    }

    /// Replays the overlay through the schedule repository, stopping at
    /// the first failure.
    ///
    /// Applied ops leave the overlay; the failed op and the rest stay for
    /// retry. Preview-local insert ids are rewritten to the persisted ids
    /// as inserts land.
    pub async fn commit(&mut self, repository: &dyn ScheduleRepositoryTrait) -> CommitReport {
        let mut applied = 0;
        let mut id_map: HashMap<String, String> = HashMap::new();

        while let Some(op) = self.ops.first().cloned() {
            match self.apply_op(repository, &op, &mut id_map).await {
                Ok(()) => {
                    self.ops.remove(0);
                    applied += 1;
                }
                Err(err) => {
                    debug!("preview commit stopped at op {}: {}", applied, err);
                    return CommitReport {
                        applied,
                        failed: Some(FailedOp {
                            index: applied,
                            message: err.to_string(),
                        }),
                        remaining: self.ops.clone(),
                    };
                }
            }
        }

        CommitReport {
            applied,
            failed: None,
            remaining: Vec::new(),
        }
    }

    async fn apply_op(
        &self,
        repository: &dyn ScheduleRepositoryTrait,
        op: &PendingOp,
        id_map: &mut HashMap<String, String>,
    ) -> Result<()> {
        match op {
            PendingOp::Insert { item_id, item } => {
                let created = repository.create(&self.owner, item.clone()).await?;
                id_map.insert(item_id.clone(), created.id);
                Ok(())
            }
            PendingOp::Update { item_id, patch } => {
                let target = resolve_id(id_map, item_id);
                repository
                    .update(&self.owner, target, patch.clone())
                    .await
                    .map_err(into_commit_error)?;
                Ok(())
            }
            PendingOp::Delete { item_id } => {
                let target = resolve_id(id_map, item_id);
                repository
                    .delete(&self.owner, target)
                    .await
                    .map_err(into_commit_error)?;
                Ok(())
            }
        }
    }
}

/// A commit-time miss means the snapshot the overlay was built on no
/// longer matches the store.
fn into_commit_error(err: Error) -> Error {
    match err {
        Error::NotFound(message) => {
            Error::PreviewConflict(format!("overlay target vanished: {message}"))
        }
        other => other,
    }
}

fn resolve_id<'a>(id_map: &'a HashMap<String, String>, item_id: &'a str) -> &'a str {
    id_map.get(item_id).map(String::as_str).unwrap_or(item_id)
}

/// Builds the overlay row for a staged insert. The timestamp is a
/// placeholder; overlay rows are never persisted.
fn overlay_item(item_id: &str, owner: &str, item: &NewScheduledItem) -> ScheduledItem {
    ScheduledItem {
        id: item_id.to_string(),
        owner: owner.to_string(),
        child_id: item.child_id.clone(),
        entry: item.entry.clone(),
        start_date: item.start_date,
        end_date: item.end_date,
        price: item.price,
        status: item.status,
        is_sample: item.is_sample,
        created_at: NaiveDateTime::MIN,
        updated_at: NaiveDateTime::MIN,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::planning::property_tests::support::{item_for_week, snapshot_2026};
    use crate::planning::{total_cost, week_coverage};
    use crate::schedule::{ItemStatus, NewScheduledItem, ScheduleEntry};
    use async_trait::async_trait;
    use chrono::NaiveDate;
    use std::sync::Mutex;

    fn new_item(snapshot: &PlanningSnapshot, week: u32, price: i64) -> NewScheduledItem {
        let slot = &snapshot.season.weeks[(week - 1) as usize];
        NewScheduledItem {
            child_id: "child-1".to_string(),
            entry: ScheduleEntry::Camp {
                camp_id: format!("camp-w{week}"),
            },
            start_date: Some(slot.start),
            end_date: Some(slot.end),
            price: Some(price),
            status: ItemStatus::Planned,
            is_sample: false,
        }
    }

    #[test]
    fn materialize_applies_ops_in_order() {
        let mut base = snapshot_2026("owner-1", &["child-1"]);
        base.items.push(item_for_week(&base, "child-1", 1, Some(400)));

        let mut session = PreviewSession::new("owner-1", base.clone());
        let staged_id = session.stage_insert(new_item(&base, 2, 250)).unwrap();
        session
            .stage_update(
                &staged_id,
                ScheduledItemUpdate {
                    price: Some(300),
                    ..Default::default()
                },
            )
            .unwrap();
        session.stage_delete("item-child-1-w1");

        let materialized = session.materialize();
        assert_eq!(total_cost(&materialized, "child-1"), 300);
        assert_eq!(week_coverage(&materialized, "child-1").covered_weeks, vec![2]);
    }

    #[test]
    fn materialize_never_mutates_the_base_snapshot() {
        let mut base = snapshot_2026("owner-1", &["child-1"]);
        base.items.push(item_for_week(&base, "child-1", 1, Some(400)));
        let before = base.clone();

        let mut session = PreviewSession::new("owner-1", base);
        session.stage_delete("item-child-1-w1");
        let _ = session.materialize();
        let _ = session.materialize();

        assert_eq!(session.base, before);
    }

    #[test]
    fn materialize_is_deterministic() {
        let base = snapshot_2026("owner-1", &["child-1"]);
        let mut session = PreviewSession::new("owner-1", base.clone());
        session.stage_insert(new_item(&base, 3, 500)).unwrap();

        assert_eq!(session.materialize(), session.materialize());
    }

    #[test]
    fn discard_drops_the_overlay() {
        let base = snapshot_2026("owner-1", &["child-1"]);
        let mut session = PreviewSession::new("owner-1", base.clone());
        session.stage_insert(new_item(&base, 3, 500)).unwrap();
        session.discard();

        assert!(session.is_empty());
        assert_eq!(session.materialize(), base);
    }

    // --- Mock schedule repository for commit tests ---

    struct MockScheduleRepository {
        /// Item ids that exist in the "store".
        known_ids: Mutex<Vec<String>>,
        calls: Mutex<Vec<String>>,
        fail_after: usize,
    }

    impl MockScheduleRepository {
        fn new(known_ids: &[&str], fail_after: usize) -> Self {
            Self {
                known_ids: Mutex::new(known_ids.iter().map(|id| id.to_string()).collect()),
                calls: Mutex::new(Vec::new()),
                fail_after,
            }
        }

        fn record(&self, call: String) -> Result<()> {
            let mut calls = self.calls.lock().unwrap();
            if calls.len() >= self.fail_after {
                return Err(Error::Store(crate::errors::StoreError::Transport(
                    "connection reset".to_string(),
                )));
            }
            calls.push(call);
            Ok(())
        }
    }

    #[async_trait]
    impl ScheduleRepositoryTrait for MockScheduleRepository {
        async fn create(
            &self,
            owner: &str,
            new_item: NewScheduledItem,
        ) -> Result<ScheduledItem> {
            self.record(format!("create {}", new_item.child_id))?;
            let id = format!("stored-{}", self.known_ids.lock().unwrap().len() + 1);
            self.known_ids.lock().unwrap().push(id.clone());
            Ok(ScheduledItem {
                id,
                owner: owner.to_string(),
                child_id: new_item.child_id,
                entry: new_item.entry,
                start_date: new_item.start_date,
                end_date: new_item.end_date,
                price: new_item.price,
                status: new_item.status,
                is_sample: new_item.is_sample,
                created_at: NaiveDateTime::MIN,
                updated_at: NaiveDateTime::MIN,
            })
        }

        async fn update(
            &self,
            owner: &str,
            item_id: &str,
            _update: ScheduledItemUpdate,
        ) -> Result<ScheduledItem> {
            self.record(format!("update {item_id}"))?;
            if !self
                .known_ids
                .lock()
                .unwrap()
                .iter()
                .any(|id| id == item_id)
            {
                return Err(Error::NotFound(format!("item {item_id}")));
            }
            Ok(ScheduledItem {
                id: item_id.to_string(),
                owner: owner.to_string(),
                child_id: "child-1".to_string(),
                entry: ScheduleEntry::Camp {
                    camp_id: "camp-1".to_string(),
                },
                start_date: None,
                end_date: None,
                price: None,
                status: ItemStatus::Planned,
                is_sample: false,
                created_at: NaiveDateTime::MIN,
                updated_at: NaiveDateTime::MIN,
            })
        }

        async fn delete(&self, _owner: &str, item_id: &str) -> Result<usize> {
            self.record(format!("delete {item_id}"))?;
            let mut known = self.known_ids.lock().unwrap();
            if !known.iter().any(|id| id == item_id) {
                return Err(Error::NotFound(format!("item {item_id}")));
            }
            known.retain(|id| id != item_id);
            Ok(1)
        }

        async fn delete_for_child(&self, _owner: &str, _child_id: &str) -> Result<usize> {
            Ok(0)
        }

        fn get_by_id(&self, _item_id: &str) -> Result<Option<ScheduledItem>> {
            Ok(None)
        }

        fn list_for_owner(&self, _owner: &str) -> Result<Vec<ScheduledItem>> {
            Ok(Vec::new())
        }

        fn list_for_child(&self, _owner: &str, _child_id: &str) -> Result<Vec<ScheduledItem>> {
            Ok(Vec::new())
        }
    }

    #[tokio::test]
    async fn commit_replays_ops_in_order_and_rewrites_local_ids() {
        let base = snapshot_2026("owner-1", &["child-1"]);
        let repository = MockScheduleRepository::new(&[], usize::MAX);

        let mut session = PreviewSession::new("owner-1", base.clone());
        let staged_id = session.stage_insert(new_item(&base, 1, 400)).unwrap();
        session
            .stage_update(
                &staged_id,
                ScheduledItemUpdate {
                    price: Some(450),
                    ..Default::default()
                },
            )
            .unwrap();

        let report = session.commit(&repository).await;
        assert!(report.is_complete());
        assert_eq!(report.applied, 2);
        assert!(session.is_empty());

        let calls = repository.calls.lock().unwrap().clone();
        assert_eq!(calls, vec!["create child-1", "update stored-1"]);
    }

    #[tokio::test]
    async fn commit_stops_at_the_first_failure_and_keeps_the_tail() {
        let base = snapshot_2026("owner-1", &["child-1"]);
        let repository = MockScheduleRepository::new(&["existing-1"], 1);

        let mut session = PreviewSession::new("owner-1", base.clone());
        session.stage_delete("existing-1");
        session.stage_insert(new_item(&base, 2, 250)).unwrap();
        session.stage_delete("existing-1");

        let report = session.commit(&repository).await;
        assert_eq!(report.applied, 1);
        assert!(report.failed.is_some());
        assert_eq!(report.remaining.len(), 2);
        assert_eq!(session.ops().len(), 2);
    }

    #[tokio::test]
    async fn commit_time_miss_surfaces_as_preview_conflict() {
        let base = snapshot_2026("owner-1", &["child-1"]);
        let repository = MockScheduleRepository::new(&[], usize::MAX);

        let mut session = PreviewSession::new("owner-1", base);
        session.stage_delete("vanished-item");

        let report = session.commit(&repository).await;
        let failed = report.failed.unwrap();
        assert!(failed.message.contains("overlay target vanished"));
    }
}
