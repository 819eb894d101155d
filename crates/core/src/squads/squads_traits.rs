//! Squad repository and service traits.

use async_trait::async_trait;

use super::disclosure::DisclosedInterest;
use super::squads_model::{NewSquad, Squad, SquadMember, SquadMemberUpdate};
use crate::errors::Result;

/// Trait defining the contract for squad repository operations.
#[async_trait]
pub trait SquadRepositoryTrait: Send + Sync {
    /// Creates a squad with its founding member.
    async fn create(
        &self,
        owner: &str,
        name: String,
        invite_code: String,
        founding_member: SquadMember,
    ) -> Result<Squad>;

    /// Adds a member. Joining is authorized by invite code, not ownership.
    async fn add_member(&self, squad_id: &str, member: SquadMember) -> Result<Squad>;

    /// Updates the caller's own membership row.
    async fn update_member(
        &self,
        caller: &str,
        squad_id: &str,
        update: SquadMemberUpdate,
    ) -> Result<Squad>;

    /// Removes the caller from the squad.
    async fn remove_member(&self, caller: &str, squad_id: &str) -> Result<Squad>;

    /// Deletes a squad; fails with `NotOwner` unless the caller created it.
    async fn delete(&self, owner: &str, squad_id: &str) -> Result<usize>;

    /// Retrieves a squad by its ID.
    fn get_by_id(&self, squad_id: &str) -> Result<Option<Squad>>;

    /// Finds a squad by invite code.
    fn get_by_invite_code(&self, invite_code: &str) -> Result<Option<Squad>>;

    /// Lists squads the user belongs to.
    fn list_for_member(&self, user_id: &str) -> Result<Vec<Squad>>;

    /// Cross-user read of the squad's interest rows. Implementations MUST
    /// pass rows through the disclosure filter; the caller must be a
    /// member.
    fn squad_interests(&self, caller: &str, squad_id: &str) -> Result<Vec<DisclosedInterest>>;
}

/// Trait defining the contract for squad service operations.
#[async_trait]
pub trait SquadServiceTrait: Send + Sync {
    /// Creates a squad, minting an invite code, with the caller as the
    /// founding member.
    async fn create_squad(&self, owner: &str, new_squad: NewSquad) -> Result<Squad>;

    /// Joins a squad by invite code. Idempotent for existing members.
    async fn join_squad(&self, caller: &str, invite_code: &str, display_name: &str)
        -> Result<Squad>;

    /// Updates the caller's disclosure flags or display name.
    async fn update_membership(
        &self,
        caller: &str,
        squad_id: &str,
        update: SquadMemberUpdate,
    ) -> Result<Squad>;

    /// Removes the caller from the squad.
    async fn leave_squad(&self, caller: &str, squad_id: &str) -> Result<()>;

    /// Deletes a squad the caller created.
    async fn delete_squad(&self, owner: &str, squad_id: &str) -> Result<()>;

    fn get_squad(&self, squad_id: &str) -> Result<Option<Squad>>;

    fn list_squads(&self, user_id: &str) -> Result<Vec<Squad>>;

    /// The squad's interest rows, disclosure-filtered for the caller.
    fn squad_interests(&self, caller: &str, squad_id: &str) -> Result<Vec<DisclosedInterest>>;
}
