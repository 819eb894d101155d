use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::calendar::default_school_dates;
use crate::errors::{Result, ValidationError};
use crate::utils::time_utils::{self, MinuteOfDay};

/// Per-account planning configuration: school dates, the family work
/// window, and the season budget. Configured once per account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountProfile {
    pub owner: String,
    pub school_end: Option<NaiveDate>,
    pub school_start: Option<NaiveDate>,
    /// Work window bounds as clock text, e.g. "8:00" and "17:30".
    pub work_start: Option<String>,
    pub work_end: Option<String>,
    /// Season budget in integer dollars.
    pub budget: Option<i64>,
    pub updated_at: NaiveDateTime,
}

impl AccountProfile {
    /// An unconfigured profile for a fresh account.
    pub fn empty(owner: &str, now: NaiveDateTime) -> Self {
        Self {
            owner: owner.to_string(),
            school_end: None,
            school_start: None,
            work_start: None,
            work_end: None,
            budget: None,
            updated_at: now,
        }
    }

    /// The configured work window in minutes since midnight, when both
    /// bounds parse and are ordered.
    pub fn work_window(&self) -> Option<(MinuteOfDay, MinuteOfDay)> {
        let start = time_utils::parse_time(self.work_start.as_deref()?)?;
        let end = time_utils::parse_time(self.work_end.as_deref()?)?;
        if start >= end {
            return None;
        }
        Some((start, end))
    }
}

/// School dates for an account, falling back to the configured defaults
/// when the profile is missing or unconfigured.
pub fn school_dates_or_default(profile: Option<&AccountProfile>) -> Result<(NaiveDate, NaiveDate)> {
    let (default_end, default_start) = default_school_dates()?;
    let end = profile.and_then(|p| p.school_end).unwrap_or(default_end);
    let start = profile
        .and_then(|p| p.school_start)
        .unwrap_or(default_start);
    Ok((end, start))
}

/// Update allow-list for the account profile.
///
/// The profile carries authority-bearing configuration, so the update
/// record is exhaustive: a field not listed here cannot be written.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    pub school_end: Option<NaiveDate>,
    pub school_start: Option<NaiveDate>,
    pub work_start: Option<String>,
    pub work_end: Option<String>,
    pub budget: Option<i64>,
}

impl ProfileUpdate {
    /// Validates the update data.
    pub fn validate(&self) -> Result<()> {
        if let (Some(end), Some(start)) = (self.school_end, self.school_start) {
            if end >= start {
                return Err(ValidationError::InvalidInput(format!(
                    "school end {end} must precede school start {start}"
                ))
                .into());
            }
        }
        if let Some(budget) = self.budget {
            if budget < 0 {
                return Err(ValidationError::OutOfRange(
                    "budget".to_string(),
                    format!("{budget} < 0"),
                )
                .into());
            }
        }
        for (field, value) in [
            ("workStart", self.work_start.as_deref()),
            ("workEnd", self.work_end.as_deref()),
        ] {
            if let Some(text) = value {
                if time_utils::parse_time(text).is_none() {
                    return Err(ValidationError::InvalidInput(format!(
                        "unparseable {field} '{text}'"
                    ))
                    .into());
                }
            }
        }
        Ok(())
    }

    /// True when no recognized field is set.
    pub fn is_empty(&self) -> bool {
        self.school_end.is_none()
            && self.school_start.is_none()
            && self.work_start.is_none()
            && self.work_end.is_none()
            && self.budget.is_none()
    }

    /// Applies the set fields onto an existing profile row.
    pub fn apply_to(&self, profile: &mut AccountProfile) {
        if let Some(end) = self.school_end {
            profile.school_end = Some(end);
        }
        if let Some(start) = self.school_start {
            profile.school_start = Some(start);
        }
        if let Some(work_start) = &self.work_start {
            profile.work_start = Some(work_start.clone());
        }
        if let Some(work_end) = &self.work_end {
            profile.work_end = Some(work_end.clone());
        }
        if let Some(budget) = self.budget {
            profile.budget = Some(budget);
        }
    }
}
