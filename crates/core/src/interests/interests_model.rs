use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::errors::{Result, ValidationError};

/// Key uniquely identifying an interest row.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterestKey {
    pub owner: String,
    pub child_id: String,
    pub camp_id: String,
    pub week: u32,
}

/// A non-binding declaration that a child may attend a camp in a week.
///
/// Rows are unique by `(owner, child, camp, week)` and written via upsert;
/// there is no explicit delete path besides the child cascade.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CampInterest {
    /// Account that owns this row. Stamped by the store adapter.
    pub owner: String,
    pub child_id: String,
    pub camp_id: String,
    /// Season-relative week number.
    pub week: u32,
    pub looking_for_friends: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl CampInterest {
    pub fn key(&self) -> InterestKey {
        InterestKey {
            owner: self.owner.clone(),
            child_id: self.child_id.clone(),
            camp_id: self.camp_id.clone(),
            week: self.week,
        }
    }
}

/// Upsert payload for an interest row.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterestUpsert {
    pub child_id: String,
    pub camp_id: String,
    pub week: u32,
    #[serde(default)]
    pub looking_for_friends: bool,
}

impl InterestUpsert {
    /// Validates the upsert data.
    pub fn validate(&self) -> Result<()> {
        if self.child_id.trim().is_empty() {
            return Err(ValidationError::MissingField("childId".to_string()).into());
        }
        if self.camp_id.trim().is_empty() {
            return Err(ValidationError::MissingField("campId".to_string()).into());
        }
        if self.week == 0 {
            return Err(
                ValidationError::OutOfRange("week".to_string(), "must be >= 1".to_string()).into(),
            );
        }
        Ok(())
    }
}
