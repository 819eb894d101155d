use log::{debug, warn};
use rand::distributions::Alphanumeric;
use rand::Rng;
use std::sync::Arc;

use super::disclosure::DisclosedInterest;
use super::squads_model::{NewSquad, Squad, SquadMember, SquadMemberUpdate};
use super::squads_traits::{SquadRepositoryTrait, SquadServiceTrait};
use crate::constants::INVITE_CODE_LEN;
use crate::errors::{Error, Result};

/// Service for managing squads and squad membership.
pub struct SquadService {
    repository: Arc<dyn SquadRepositoryTrait>,
}

impl SquadService {
    /// Creates a new SquadService instance.
    pub fn new(repository: Arc<dyn SquadRepositoryTrait>) -> Self {
        Self { repository }
    }

    fn mint_invite_code() -> String {
        rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(INVITE_CODE_LEN)
            .map(char::from)
            .collect::<String>()
            .to_uppercase()
    }
}

#[async_trait::async_trait]
impl SquadServiceTrait for SquadService {
    async fn create_squad(&self, owner: &str, new_squad: NewSquad) -> Result<Squad> {
        let new_squad = new_squad.sanitized();
        new_squad.validate()?;

        let invite_code = Self::mint_invite_code();
        let founding_member = SquadMember::joining(owner, &new_squad.display_name);
        debug!("creating squad '{}' for {}", new_squad.name, owner);
        self.repository
            .create(owner, new_squad.name, invite_code, founding_member)
            .await
    }

    async fn join_squad(
        &self,
        caller: &str,
        invite_code: &str,
        display_name: &str,
    ) -> Result<Squad> {
        let squad = self
            .repository
            .get_by_invite_code(invite_code.trim())?
            .ok_or_else(|| Error::NotFound(format!("no squad for invite code '{invite_code}'")))?;

        if squad.is_member(caller) {
            return Ok(squad);
        }

        let member = SquadMember::joining(caller, display_name);
        if member.display_name.is_empty() {
            return Err(crate::errors::ValidationError::MissingField(
                "displayName".to_string(),
            )
            .into());
        }
        self.repository.add_member(&squad.id, member).await
    }

    async fn update_membership(
        &self,
        caller: &str,
        squad_id: &str,
        update: SquadMemberUpdate,
    ) -> Result<Squad> {
        let update = update.sanitized();
        update.validate()?;
        if update.is_empty() {
            warn!(
                "membership update for squad {} carries no recognized fields",
                squad_id
            );
        }
        self.repository.update_member(caller, squad_id, update).await
    }

    async fn leave_squad(&self, caller: &str, squad_id: &str) -> Result<()> {
        self.repository.remove_member(caller, squad_id).await?;
        Ok(())
    }

    async fn delete_squad(&self, owner: &str, squad_id: &str) -> Result<()> {
        self.repository.delete(owner, squad_id).await?;
        Ok(())
    }

    fn get_squad(&self, squad_id: &str) -> Result<Option<Squad>> {
        self.repository.get_by_id(squad_id)
    }

    fn list_squads(&self, user_id: &str) -> Result<Vec<Squad>> {
        self.repository.list_for_member(user_id)
    }

    fn squad_interests(&self, caller: &str, squad_id: &str) -> Result<Vec<DisclosedInterest>> {
        self.repository.squad_interests(caller, squad_id)
    }
}
