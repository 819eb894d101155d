use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single Monday-Friday planning slot within a season.
///
/// Week slots are derived from the account's school dates and never
/// persisted; the first or last slot of a season may be truncated when the
/// season boundary falls mid-week.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeekSlot {
    /// Season-relative week number, starting at 1.
    pub week: u32,
    /// Monday of the slot.
    pub start: NaiveDate,
    /// Friday of the slot, possibly truncated at the season boundary.
    pub end: NaiveDate,
    /// Human-readable range, e.g. "Jun 8 - Jun 12".
    pub label: String,
}

impl WeekSlot {
    /// True when the given date falls inside the slot (inclusive).
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    /// True when `[start, end]` intersects the slot on at least one day.
    pub fn intersects(&self, start: NaiveDate, end: NaiveDate) -> bool {
        start <= self.end && end >= self.start
    }
}

/// Leftover weekdays outside the slot grid at either end of the season.
///
/// Not counted as a week slot; consumers surface these as uncovered days
/// between school and the first or last full week.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeasonGap {
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub weekday_count: u32,
}

/// The canonical summer season: ordered week slots plus boundary gaps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Season {
    pub school_end: NaiveDate,
    pub school_start: NaiveDate,
    pub weeks: Vec<WeekSlot>,
    pub pre_gap: Option<SeasonGap>,
    pub post_gap: Option<SeasonGap>,
}

impl Season {
    pub fn total_weeks(&self) -> u32 {
        self.weeks.len() as u32
    }

    /// The slot containing the given date, if any.
    pub fn slot_for(&self, date: NaiveDate) -> Option<&WeekSlot> {
        self.weeks.iter().find(|slot| slot.contains(date))
    }
}
