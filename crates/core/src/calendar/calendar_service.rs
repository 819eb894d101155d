//! Season generation from school dates.

use chrono::{Datelike, Duration, NaiveDate, Weekday};

use super::calendar_model::{Season, SeasonGap, WeekSlot};
use crate::constants::{DEFAULT_SCHOOL_END, DEFAULT_SCHOOL_START};
use crate::errors::{Error, Result};
use crate::utils::date_utils;

/// Builds the ordered list of week slots between two school years.
///
/// The season begins on the first Monday strictly after `school_end` and
/// ends on the last weekday strictly before `school_start`. The final slot
/// is truncated at the season boundary and dropped if nothing remains.
/// Pure and deterministic.
pub fn build_season(school_end: NaiveDate, school_start: NaiveDate) -> Result<Season> {
    if school_end >= school_start {
        return Err(Error::InvalidDateRange(format!(
            "school end {} must precede school start {}",
            school_end, school_start
        )));
    }

    let mut first_monday = school_end + Duration::days(1);
    while first_monday.weekday() != Weekday::Mon {
        first_monday += Duration::days(1);
    }

    let mut season_end = school_start - Duration::days(1);
    while matches!(season_end.weekday(), Weekday::Sat | Weekday::Sun) {
        season_end -= Duration::days(1);
    }

    let mut weeks = Vec::new();
    let mut monday = first_monday;
    let mut week = 1u32;
    while monday <= season_end {
        let friday = monday + Duration::days(4);
        let end = friday.min(season_end);
        weeks.push(WeekSlot {
            week,
            start: monday,
            end,
            label: range_label(monday, end),
        });
        week += 1;
        monday += Duration::days(7);
    }

    // With no slots at all the pre-season gap already covers the whole
    // leftover band.
    let pre_gap = boundary_gap(school_end + Duration::days(1), first_monday - Duration::days(1));
    let post_gap = weeks
        .last()
        .and_then(|last| boundary_gap(last.end + Duration::days(1), school_start - Duration::days(1)));

    Ok(Season {
        school_end,
        school_start,
        weeks,
        pre_gap,
        post_gap,
    })
}

/// Builds a season from ISO date strings, e.g. profile or config values.
pub fn season_from_strings(school_end: &str, school_start: &str) -> Result<Season> {
    let end = date_utils::parse_iso_date(school_end)
        .ok_or_else(|| Error::InvalidDateRange(format!("unparseable school end '{school_end}'")))?;
    let start = date_utils::parse_iso_date(school_start).ok_or_else(|| {
        Error::InvalidDateRange(format!("unparseable school start '{school_start}'"))
    })?;
    build_season(end, start)
}

/// The configured fallback school dates.
pub fn default_school_dates() -> Result<(NaiveDate, NaiveDate)> {
    let end = date_utils::parse_iso_date(DEFAULT_SCHOOL_END)
        .ok_or_else(|| Error::InvalidDateRange("bad DEFAULT_SCHOOL_END".to_string()))?;
    let start = date_utils::parse_iso_date(DEFAULT_SCHOOL_START)
        .ok_or_else(|| Error::InvalidDateRange("bad DEFAULT_SCHOOL_START".to_string()))?;
    Ok((end, start))
}

fn range_label(start: NaiveDate, end: NaiveDate) -> String {
    format!("{} - {}", start.format("%b %-d"), end.format("%b %-d"))
}

/// A boundary gap exists only when the leftover range contains a weekday.
fn boundary_gap(start: NaiveDate, end: NaiveDate) -> Option<SeasonGap> {
    if start > end {
        return None;
    }
    let mut weekday_count = 0u32;
    let mut day = start;
    while day <= end {
        if !matches!(day.weekday(), Weekday::Sat | Weekday::Sun) {
            weekday_count += 1;
        }
        day += Duration::days(1);
    }
    if weekday_count == 0 {
        return None;
    }
    Some(SeasonGap {
        start,
        end,
        weekday_count,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn generates_the_2026_season() {
        let season = build_season(date(2026, 6, 5), date(2026, 8, 19)).unwrap();

        assert_eq!(season.weeks.len(), 11);
        assert_eq!(season.weeks[0].week, 1);
        assert_eq!(season.weeks[0].start, date(2026, 6, 8));
        assert_eq!(season.weeks[0].end, date(2026, 6, 12));

        // School starts Wednesday, so the last slot is Monday-Tuesday.
        let last = season.weeks.last().unwrap();
        assert_eq!(last.week, 11);
        assert_eq!(last.start, date(2026, 8, 17));
        assert_eq!(last.end, date(2026, 8, 18));
    }

    #[test]
    fn is_deterministic() {
        let a = build_season(date(2026, 6, 5), date(2026, 8, 19)).unwrap();
        let b = build_season(date(2026, 6, 5), date(2026, 8, 19)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn weeks_are_strictly_ordered_and_monday_starting() {
        let season = build_season(date(2026, 6, 1), date(2026, 9, 1)).unwrap();
        for (idx, slot) in season.weeks.iter().enumerate() {
            assert_eq!(slot.week, idx as u32 + 1);
            assert_eq!(slot.start.weekday(), Weekday::Mon);
            let span = slot.end.signed_duration_since(slot.start).num_days();
            assert!((0..=4).contains(&span));
            if idx > 0 {
                assert!(slot.start > season.weeks[idx - 1].end);
            }
        }
    }

    #[test]
    fn rejects_invalid_ranges() {
        assert!(matches!(
            build_season(date(2026, 8, 19), date(2026, 6, 5)),
            Err(Error::InvalidDateRange(_))
        ));
        assert!(matches!(
            season_from_strings("06/05/2026", "2026-08-19"),
            Err(Error::InvalidDateRange(_))
        ));
    }

    #[test]
    fn pre_season_gap_covers_leftover_weekdays() {
        // School ends Wednesday June 3; Thursday and Friday precede the
        // first Monday.
        let season = build_season(date(2026, 6, 3), date(2026, 8, 19)).unwrap();
        let gap = season.pre_gap.unwrap();
        assert_eq!(gap.start, date(2026, 6, 4));
        assert_eq!(gap.end, date(2026, 6, 7));
        assert_eq!(gap.weekday_count, 2);
    }

    #[test]
    fn weekend_only_leftover_is_not_a_gap() {
        // School ends Friday June 5; only Sat/Sun precede the first Monday.
        let season = build_season(date(2026, 6, 5), date(2026, 8, 19)).unwrap();
        assert!(season.pre_gap.is_none());
        // Last slot ends Tuesday Aug 18, school starts Wednesday Aug 19.
        assert!(season.post_gap.is_none());
    }

    #[test]
    fn slot_lookup_by_date() {
        let season = build_season(date(2026, 6, 5), date(2026, 8, 19)).unwrap();
        assert_eq!(season.slot_for(date(2026, 6, 10)).unwrap().week, 1);
        assert_eq!(season.slot_for(date(2026, 6, 13)), None); // Saturday
        assert_eq!(season.slot_for(date(2026, 9, 1)), None);
    }
}
