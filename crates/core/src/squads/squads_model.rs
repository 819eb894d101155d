use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::constants::MAX_NAME_LEN;
use crate::errors::{Result, ValidationError};
use crate::utils::sanitize::sanitize_text;

/// A small group of accounts who may see each other's camp interests,
/// subject to per-member disclosure flags.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Squad {
    pub id: String,
    /// Account that created the squad.
    pub owner: String,
    pub name: String,
    pub invite_code: String,
    pub members: Vec<SquadMember>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl Squad {
    /// The membership row for a user, if any.
    pub fn member(&self, user_id: &str) -> Option<&SquadMember> {
        self.members.iter().find(|m| m.user_id == user_id)
    }

    pub fn is_member(&self, user_id: &str) -> bool {
        self.member(user_id).is_some()
    }
}

/// One account's membership in a squad.
///
/// Both disclosure flags default to off: nothing is shared or revealed
/// until the member opts in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SquadMember {
    pub user_id: String,
    pub display_name: String,
    /// When false the disclosure filter hides this member's identity.
    pub reveal_identity: bool,
    /// When false this member's interests are invisible to the squad.
    pub share_schedule: bool,
}

impl SquadMember {
    /// A fresh membership with disclosure defaults off.
    pub fn joining(user_id: &str, display_name: &str) -> Self {
        Self {
            user_id: user_id.to_string(),
            display_name: sanitize_text(display_name),
            reveal_identity: false,
            share_schedule: false,
        }
    }
}

/// Input model for creating a squad.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewSquad {
    pub name: String,
    /// Display name the creator joins under.
    pub display_name: String,
}

impl NewSquad {
    /// Validates the new squad data.
    pub fn validate(&self) -> Result<()> {
        validate_short_text("name", &self.name)?;
        validate_short_text("displayName", &self.display_name)?;
        Ok(())
    }

    /// Returns a copy with all free-text fields sanitized.
    pub fn sanitized(mut self) -> Self {
        self.name = sanitize_text(&self.name);
        self.display_name = sanitize_text(&self.display_name);
        self
    }
}

/// Update allow-list for the caller's own membership row.
///
/// Membership authority (user id, squad id) is not representable here, so
/// the update path cannot move or impersonate members.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SquadMemberUpdate {
    pub display_name: Option<String>,
    pub reveal_identity: Option<bool>,
    pub share_schedule: Option<bool>,
}

impl SquadMemberUpdate {
    /// Validates the update data.
    pub fn validate(&self) -> Result<()> {
        if let Some(name) = &self.display_name {
            validate_short_text("displayName", name)?;
        }
        Ok(())
    }

    /// Returns a copy with all free-text fields sanitized.
    pub fn sanitized(mut self) -> Self {
        self.display_name = self.display_name.map(|name| sanitize_text(&name));
        self
    }

    /// True when no recognized field is set.
    pub fn is_empty(&self) -> bool {
        self.display_name.is_none()
            && self.reveal_identity.is_none()
            && self.share_schedule.is_none()
    }

    /// Applies the set fields onto an existing membership row.
    pub fn apply_to(&self, member: &mut SquadMember) {
        if let Some(name) = &self.display_name {
            member.display_name = name.clone();
        }
        if let Some(reveal) = self.reveal_identity {
            member.reveal_identity = reveal;
        }
        if let Some(share) = self.share_schedule {
            member.share_schedule = share;
        }
    }
}

fn validate_short_text(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ValidationError::MissingField(field.to_string()).into());
    }
    if value.chars().count() > MAX_NAME_LEN {
        return Err(ValidationError::OutOfRange(
            field.to_string(),
            format!("longer than {MAX_NAME_LEN} characters"),
        )
        .into());
    }
    Ok(())
}
