use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::constants::PLACEHOLDER_CAMP_NAME;

/// A camp listing referenced by scheduled items and interests.
///
/// Camps are managed outside the planning core and are read-only here.
/// Registration and hours fields arrive as free text and are parsed by the
/// derivation engine, never at ingestion time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Camp {
    pub id: String,
    pub name: String,
    pub category: Option<String>,
    pub min_age: Option<u8>,
    pub max_age: Option<u8>,
    /// Price range in integer dollars.
    pub min_price: Option<i64>,
    pub max_price: Option<i64>,
    /// Free-text daily hours, e.g. "9am-3pm".
    pub hours: Option<String>,
    pub drop_off: Option<String>,
    pub pick_up: Option<String>,
    /// Free-text extended-care window, e.g. "7:30am-6pm".
    pub extended_care: Option<String>,
    pub food_included: bool,
    pub transport_provided: bool,
    pub sibling_discount: bool,
    /// Structured registration opening date, when known.
    pub registration_opens: Option<NaiveDate>,
    /// Free-text registration status, e.g. "Open now" or "Waitlist only".
    pub reg_status: Option<String>,
    /// Free-text registration date, e.g. "March 15".
    pub reg_date: Option<String>,
    pub address: Option<String>,
}

impl Camp {
    /// Placeholder substituted for a dangling camp reference.
    ///
    /// Scheduled items and interests keep working when their camp row has
    /// been deleted upstream.
    pub fn placeholder(id: &str) -> Self {
        Camp {
            id: id.to_string(),
            name: PLACEHOLDER_CAMP_NAME.to_string(),
            ..Default::default()
        }
    }
}

/// Query filter for the camp collection.
///
/// Mirrors the filter surface of the backing store: equality, range, and
/// substring predicates.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CampFilter {
    pub category: Option<String>,
    /// Keep camps whose age range admits this age.
    pub age: Option<u8>,
    /// Keep camps whose minimum price is at or below this amount.
    pub max_price: Option<i64>,
    /// Case-insensitive substring match on the camp name.
    pub name_contains: Option<String>,
}

impl CampFilter {
    /// True when the camp passes every set predicate.
    pub fn matches(&self, camp: &Camp) -> bool {
        if let Some(category) = &self.category {
            if camp.category.as_deref() != Some(category.as_str()) {
                return false;
            }
        }
        if let Some(age) = self.age {
            if let Some(min_age) = camp.min_age {
                if age < min_age {
                    return false;
                }
            }
            if let Some(max_age) = camp.max_age {
                if age > max_age {
                    return false;
                }
            }
        }
        if let Some(max_price) = self.max_price {
            if let Some(min_price) = camp.min_price {
                if min_price > max_price {
                    return false;
                }
            }
        }
        if let Some(needle) = &self.name_contains {
            if !camp
                .name
                .to_lowercase()
                .contains(&needle.to_lowercase())
            {
                return false;
            }
        }
        true
    }
}
