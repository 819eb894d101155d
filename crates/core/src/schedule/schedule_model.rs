use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::errors::{Result, ValidationError};

/// What a scheduled item assigns the child to: a camp or a non-camp block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case", rename_all_fields = "camelCase")]
pub enum ScheduleEntry {
    /// Attendance at a camp, referenced by id.
    Camp { camp_id: String },
    /// A non-camp block such as a family vacation.
    Block { block_type: BlockType },
}

/// Non-camp block categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BlockType {
    Vacation,
    FamilyTime,
    Travel,
    Other,
}

/// Scheduled item lifecycle status. Driven by the user; the core only
/// excludes cancelled items from derivations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemStatus {
    #[default]
    Planned,
    Registered,
    Confirmed,
    Waitlisted,
    Cancelled,
}

impl ItemStatus {
    /// Cancelled items drop out of coverage, cost, and conflict detection.
    pub fn is_active(&self) -> bool {
        !matches!(self, ItemStatus::Cancelled)
    }
}

/// A concrete assignment of a child to a camp or block for a date range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduledItem {
    pub id: String,
    /// Account that owns this row. Stamped by the store adapter.
    pub owner: String,
    pub child_id: String,
    #[serde(flatten)]
    pub entry: ScheduleEntry,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    /// Integer dollars.
    pub price: Option<i64>,
    pub status: ItemStatus,
    pub is_sample: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl ScheduledItem {
    /// The camp this item references, when it is a camp entry.
    pub fn camp_id(&self) -> Option<&str> {
        match &self.entry {
            ScheduleEntry::Camp { camp_id } => Some(camp_id),
            ScheduleEntry::Block { .. } => None,
        }
    }

    /// Both dates, when present and ordered. Items without a usable span
    /// are skipped by coverage and conflict derivations.
    pub fn date_span(&self) -> Option<(NaiveDate, NaiveDate)> {
        match (self.start_date, self.end_date) {
            (Some(start), Some(end)) if start <= end => Some((start, end)),
            _ => None,
        }
    }
}

/// Input model for creating a scheduled item.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewScheduledItem {
    pub child_id: String,
    #[serde(flatten)]
    pub entry: ScheduleEntry,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub price: Option<i64>,
    #[serde(default)]
    pub status: ItemStatus,
    #[serde(default)]
    pub is_sample: bool,
}

impl NewScheduledItem {
    /// Validates the new scheduled item data.
    pub fn validate(&self) -> Result<()> {
        if self.child_id.trim().is_empty() {
            return Err(ValidationError::MissingField("childId".to_string()).into());
        }
        if let ScheduleEntry::Camp { camp_id } = &self.entry {
            if camp_id.trim().is_empty() {
                return Err(ValidationError::MissingField("campId".to_string()).into());
            }
        }
        validate_price(self.price)?;
        validate_span(self.start_date, self.end_date)?;
        Ok(())
    }
}

/// Update allow-list for a scheduled item. `None` fields are unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduledItemUpdate {
    pub entry: Option<ScheduleEntry>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub price: Option<i64>,
    pub status: Option<ItemStatus>,
}

impl ScheduledItemUpdate {
    /// Validates the update data.
    pub fn validate(&self) -> Result<()> {
        if let Some(ScheduleEntry::Camp { camp_id }) = &self.entry {
            if camp_id.trim().is_empty() {
                return Err(ValidationError::MissingField("campId".to_string()).into());
            }
        }
        validate_price(self.price)?;
        if let (Some(start), Some(end)) = (self.start_date, self.end_date) {
            validate_span(Some(start), Some(end))?;
        }
        Ok(())
    }

    /// True when no recognized field is set.
    pub fn is_empty(&self) -> bool {
        self.entry.is_none()
            && self.start_date.is_none()
            && self.end_date.is_none()
            && self.price.is_none()
            && self.status.is_none()
    }

    /// Applies the set fields onto an existing item row.
    pub fn apply_to(&self, item: &mut ScheduledItem) {
        if let Some(entry) = &self.entry {
            item.entry = entry.clone();
        }
        if let Some(start) = self.start_date {
            item.start_date = Some(start);
        }
        if let Some(end) = self.end_date {
            item.end_date = Some(end);
        }
        if let Some(price) = self.price {
            item.price = Some(price);
        }
        if let Some(status) = self.status {
            item.status = status;
        }
    }
}

fn validate_price(price: Option<i64>) -> Result<()> {
    if let Some(price) = price {
        if price < 0 {
            return Err(
                ValidationError::OutOfRange("price".to_string(), format!("{price} < 0")).into(),
            );
        }
    }
    Ok(())
}

fn validate_span(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Result<()> {
    if let (Some(start), Some(end)) = (start, end) {
        if start > end {
            return Err(ValidationError::InvalidInput(format!(
                "start date {start} is after end date {end}"
            ))
            .into());
        }
    }
    Ok(())
}
