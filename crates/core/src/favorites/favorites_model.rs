use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::errors::{Result, ValidationError};

/// A camp bookmarked by an account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Favorite {
    pub id: String,
    /// Account that owns this row. Stamped by the store adapter.
    pub owner: String,
    pub camp_id: String,
    pub created_at: NaiveDateTime,
}

/// Input model for creating a favorite.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewFavorite {
    pub camp_id: String,
}

impl NewFavorite {
    /// Validates the new favorite data.
    pub fn validate(&self) -> Result<()> {
        if self.camp_id.trim().is_empty() {
            return Err(ValidationError::MissingField("campId".to_string()).into());
        }
        Ok(())
    }
}
