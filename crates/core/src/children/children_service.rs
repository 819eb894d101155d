use log::debug;
use std::sync::Arc;

use super::children_model::{Child, ChildUpdate, NewChild};
use super::children_traits::{ChildRepositoryTrait, ChildServiceTrait};
use crate::errors::Result;
use crate::interests::InterestRepositoryTrait;
use crate::schedule::ScheduleRepositoryTrait;

/// Service for managing children.
///
/// Deleting a child cascades to its scheduled items and interests before
/// the child row itself is removed.
pub struct ChildService {
    repository: Arc<dyn ChildRepositoryTrait>,
    schedule_repository: Arc<dyn ScheduleRepositoryTrait>,
    interest_repository: Arc<dyn InterestRepositoryTrait>,
}

impl ChildService {
    /// Creates a new ChildService instance.
    pub fn new(
        repository: Arc<dyn ChildRepositoryTrait>,
        schedule_repository: Arc<dyn ScheduleRepositoryTrait>,
        interest_repository: Arc<dyn InterestRepositoryTrait>,
    ) -> Self {
        Self {
            repository,
            schedule_repository,
            interest_repository,
        }
    }
}

#[async_trait::async_trait]
impl ChildServiceTrait for ChildService {
    async fn create_child(&self, owner: &str, new_child: NewChild) -> Result<Child> {
        let new_child = new_child.sanitized();
        new_child.validate()?;
        self.repository.create(owner, new_child).await
    }

    async fn update_child(
        &self,
        owner: &str,
        child_id: &str,
        update: ChildUpdate,
    ) -> Result<Child> {
        let update = update.sanitized();
        update.validate()?;
        self.repository.update(owner, child_id, update).await
    }

    async fn delete_child(&self, owner: &str, child_id: &str) -> Result<()> {
        let items = self
            .schedule_repository
            .delete_for_child(owner, child_id)
            .await?;
        let interests = self
            .interest_repository
            .delete_for_child(owner, child_id)
            .await?;
        self.repository.delete(owner, child_id).await?;
        debug!(
            "deleted child {} (cascade: {} items, {} interests)",
            child_id, items, interests
        );
        Ok(())
    }

    fn get_child(&self, child_id: &str) -> Result<Option<Child>> {
        self.repository.get_by_id(child_id)
    }

    fn list_children(&self, owner: &str) -> Result<Vec<Child>> {
        self.repository.list_for_owner(owner)
    }
}
