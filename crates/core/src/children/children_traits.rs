//! Child repository and service traits.
//!
//! These traits define the contract for child operations without any
//! storage-specific types. Every mutating call carries the authenticated
//! owner id.

use async_trait::async_trait;

use super::children_model::{Child, ChildUpdate, NewChild};
use crate::errors::Result;

/// Trait defining the contract for child repository operations.
#[async_trait]
pub trait ChildRepositoryTrait: Send + Sync {
    /// Creates a child owned by the authenticated caller.
    async fn create(&self, owner: &str, new_child: NewChild) -> Result<Child>;

    /// Updates a child. The store enforces row ownership.
    async fn update(&self, owner: &str, child_id: &str, update: ChildUpdate) -> Result<Child>;

    /// Deletes a child; fails with `NotOwner` when the row belongs to a
    /// different account. Returns the number of deleted records.
    async fn delete(&self, owner: &str, child_id: &str) -> Result<usize>;

    /// Retrieves a child by its ID.
    fn get_by_id(&self, child_id: &str) -> Result<Option<Child>>;

    /// Lists the caller's children.
    fn list_for_owner(&self, owner: &str) -> Result<Vec<Child>>;
}

/// Trait defining the contract for child service operations.
#[async_trait]
pub trait ChildServiceTrait: Send + Sync {
    async fn create_child(&self, owner: &str, new_child: NewChild) -> Result<Child>;

    async fn update_child(&self, owner: &str, child_id: &str, update: ChildUpdate)
        -> Result<Child>;

    /// Deletes a child and cascades to its scheduled items and interests.
    async fn delete_child(&self, owner: &str, child_id: &str) -> Result<()>;

    fn get_child(&self, child_id: &str) -> Result<Option<Child>>;

    fn list_children(&self, owner: &str) -> Result<Vec<Child>>;
}
