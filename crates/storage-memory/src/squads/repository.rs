use async_trait::async_trait;
use log::debug;
use std::sync::Arc;

use summerplan_core::errors::{Error, Result};
use summerplan_core::events::Topic;
use summerplan_core::interests::CampInterest;
use summerplan_core::squads::{
    disclose_squad_interests, DisclosedInterest, Squad, SquadMember, SquadMemberUpdate,
    SquadRepositoryTrait,
};

use crate::store::MemoryStore;

/// In-memory repository for squads.
///
/// This is the cross-user read boundary: `squad_interests` joins squad
/// membership against the interest collection and applies the disclosure
/// filter before any row leaves the store.
pub struct SquadRepository {
    store: Arc<MemoryStore>,
}

impl SquadRepository {
    pub fn new(store: Arc<MemoryStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl SquadRepositoryTrait for SquadRepository {
    async fn create(
        &self,
        owner: &str,
        name: String,
        invite_code: String,
        founding_member: SquadMember,
    ) -> Result<Squad> {
        let now = MemoryStore::now();
        let squad = Squad {
            id: MemoryStore::mint_id(),
            owner: owner.to_string(),
            name,
            invite_code,
            members: vec![founding_member],
            created_at: now,
            updated_at: now,
        };
        {
            let mut squads = self.store.squads.write().unwrap();
            squads.insert(squad.id.clone(), squad.clone());
        }
        self.store.publish(Topic::Squads);
        debug!("created squad {} for {}", squad.id, owner);
        Ok(squad)
    }

    async fn add_member(&self, squad_id: &str, member: SquadMember) -> Result<Squad> {
        let updated = {
            let mut squads = self.store.squads.write().unwrap();
            let squad = squads
                .get_mut(squad_id)
                .ok_or_else(|| Error::NotFound(format!("squad {squad_id}")))?;
            if !squad.is_member(&member.user_id) {
                squad.members.push(member);
                squad.updated_at = MemoryStore::now();
            }
            squad.clone()
        };
        self.store.publish(Topic::Squads);
        Ok(updated)
    }

    async fn update_member(
        &self,
        caller: &str,
        squad_id: &str,
        update: SquadMemberUpdate,
    ) -> Result<Squad> {
        update.validate()?;

        let updated = {
            let mut squads = self.store.squads.write().unwrap();
            let squad = squads
                .get_mut(squad_id)
                .ok_or_else(|| Error::NotFound(format!("squad {squad_id}")))?;
            let member = squad
                .members
                .iter_mut()
                .find(|member| member.user_id == caller)
                .ok_or_else(|| Error::NotOwner(squad_id.to_string()))?;
            update.apply_to(member);
            squad.updated_at = MemoryStore::now();
            squad.clone()
        };
        self.store.publish(Topic::Squads);
        Ok(updated)
    }

    async fn remove_member(&self, caller: &str, squad_id: &str) -> Result<Squad> {
        let updated = {
            let mut squads = self.store.squads.write().unwrap();
            let squad = squads
                .get_mut(squad_id)
                .ok_or_else(|| Error::NotFound(format!("squad {squad_id}")))?;
            if !squad.is_member(caller) {
                return Err(Error::NotOwner(squad_id.to_string()));
            }
            squad.members.retain(|member| member.user_id != caller);
            squad.updated_at = MemoryStore::now();
            squad.clone()
        };
        self.store.publish(Topic::Squads);
        Ok(updated)
    }

    async fn delete(&self, owner: &str, squad_id: &str) -> Result<usize> {
        {
            let mut squads = self.store.squads.write().unwrap();
            let squad = squads
                .get(squad_id)
                .ok_or_else(|| Error::NotFound(format!("squad {squad_id}")))?;
            if squad.owner != owner {
                return Err(Error::NotOwner(squad_id.to_string()));
            }
            squads.remove(squad_id);
        }
        self.store.publish(Topic::Squads);
        Ok(1)
    }

    fn get_by_id(&self, squad_id: &str) -> Result<Option<Squad>> {
        Ok(self.store.squads.read().unwrap().get(squad_id).cloned())
    }

    fn get_by_invite_code(&self, invite_code: &str) -> Result<Option<Squad>> {
        Ok(self
            .store
            .squads
            .read()
            .unwrap()
            .values()
            .find(|squad| squad.invite_code == invite_code)
            .cloned())
    }

    fn list_for_member(&self, user_id: &str) -> Result<Vec<Squad>> {
        let mut squads: Vec<Squad> = self
            .store
            .squads
            .read()
            .unwrap()
            .values()
            .filter(|squad| squad.is_member(user_id))
            .cloned()
            .collect();
        squads.sort_by(|a, b| a.created_at.cmp(&b.created_at).then_with(|| a.id.cmp(&b.id)));
        Ok(squads)
    }

    fn squad_interests(&self, caller: &str, squad_id: &str) -> Result<Vec<DisclosedInterest>> {
        let squad = self
            .get_by_id(squad_id)?
            .ok_or_else(|| Error::NotFound(format!("squad {squad_id}")))?;
        if !squad.is_member(caller) {
            return Err(Error::NotOwner(squad_id.to_string()));
        }

        let member_rows: Vec<CampInterest> = {
            let interests = self.store.interests.read().unwrap();
            interests
                .values()
                .filter(|interest| squad.is_member(&interest.owner))
                .cloned()
                .collect()
        };

        let mut rows = disclose_squad_interests(&squad, &member_rows, caller);
        rows.sort_by(|a, b| a.camp_id.cmp(&b.camp_id).then_with(|| a.week.cmp(&b.week)));
        Ok(rows)
    }
}
