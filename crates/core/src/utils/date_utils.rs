//! Free-text date parsing for registration fields.
//!
//! Camp listings carry registration dates as prose ("Opens March 15th").
//! The extractors here are total functions; ambiguous text such as
//! "spring 2026" yields `None` and the derivation reports `unknown`.

use chrono::{Datelike, NaiveDate};
use regex::Regex;

const MONTH_DAY_PATTERN: &str = r"(?i)\b(jan(?:uary)?|feb(?:ruary)?|mar(?:ch)?|apr(?:il)?|may|jun(?:e)?|jul(?:y)?|aug(?:ust)?|sep(?:t(?:ember)?)?|oct(?:ober)?|nov(?:ember)?|dec(?:ember)?)\.?\s+(\d{1,2})(?:st|nd|rd|th)?\b";

/// Extracts the first month-day pair from free text like "Opens March 15".
pub fn parse_month_day(text: &str) -> Option<(u32, u32)> {
    let re = Regex::new(MONTH_DAY_PATTERN).ok()?;
    let caps = re.captures(text)?;
    let month = month_number(caps.get(1)?.as_str())?;
    let day: u32 = caps.get(2)?.as_str().parse().ok()?;
    if day == 0 || day > 31 {
        return None;
    }
    Some((month, day))
}

fn month_number(name: &str) -> Option<u32> {
    let lower = name.to_ascii_lowercase();
    let month = match lower.get(..3)? {
        "jan" => 1,
        "feb" => 2,
        "mar" => 3,
        "apr" => 4,
        "may" => 5,
        "jun" => 6,
        "jul" => 7,
        "aug" => 8,
        "sep" => 9,
        "oct" => 10,
        "nov" => 11,
        "dec" => 12,
        _ => return None,
    };
    Some(month)
}

/// Resolves a month-day pair against the reference date's year.
///
/// Returns `None` for impossible dates (e.g. Feb 30).
pub fn resolve_month_day(month: u32, day: u32, reference: NaiveDate) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(reference.year(), month, day)
}

/// Parses a strict ISO `YYYY-MM-DD` date.
pub fn parse_iso_date(text: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(text.trim(), "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_month_day_variants() {
        assert_eq!(parse_month_day("March 15"), Some((3, 15)));
        assert_eq!(parse_month_day("Opens Mar 15th"), Some((3, 15)));
        assert_eq!(parse_month_day("registration: jan 2"), Some((1, 2)));
        assert_eq!(parse_month_day("Sept. 30 at noon"), Some((9, 30)));
    }

    #[test]
    fn takes_the_first_pair() {
        assert_eq!(parse_month_day("May 1 or June 15"), Some((5, 1)));
    }

    #[test]
    fn ambiguous_text_yields_none() {
        assert_eq!(parse_month_day("spring 2026"), None);
        assert_eq!(parse_month_day("TBD"), None);
        assert_eq!(parse_month_day("March"), None);
        assert_eq!(parse_month_day("March 45"), None);
    }

    #[test]
    fn resolves_against_reference_year() {
        let reference = NaiveDate::from_ymd_opt(2026, 7, 1).unwrap();
        assert_eq!(
            resolve_month_day(3, 15, reference),
            NaiveDate::from_ymd_opt(2026, 3, 15)
        );
        assert_eq!(resolve_month_day(2, 30, reference), None);
    }

    #[test]
    fn parses_iso_dates() {
        assert_eq!(
            parse_iso_date("2026-06-05"),
            NaiveDate::from_ymd_opt(2026, 6, 5)
        );
        assert_eq!(parse_iso_date("06/05/2026"), None);
    }
}
