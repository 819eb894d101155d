//! Time-of-day parsing for camp hours and work windows.
//!
//! Camp hours arrive as free text in several variants: `9am`, `7:30am-6pm`,
//! `15:00`, `8 to 5`. The parsers here are total functions returning
//! `Option` so derivations can fail open on unrecognized input.

use regex::Regex;

/// Minutes since midnight.
pub type MinuteOfDay = u16;

const TIME_PATTERN: &str = r"(?i)^\s*(\d{1,2})(?::(\d{2}))?\s*(am|pm)?\s*$";

/// Parses a single clock time into minutes since midnight.
///
/// Accepts `H`, `H:MM`, `Ham`, `H:MMpm` and 24-hour `HH:MM`.
pub fn parse_time(text: &str) -> Option<MinuteOfDay> {
    let re = Regex::new(TIME_PATTERN).ok()?;
    let caps = re.captures(text)?;

    let hour: u32 = caps.get(1)?.as_str().parse().ok()?;
    let minute: u32 = match caps.get(2) {
        Some(m) => m.as_str().parse().ok()?,
        None => 0,
    };
    if minute > 59 {
        return None;
    }

    let meridiem = caps.get(3).map(|m| m.as_str().to_ascii_lowercase());
    let hour = match meridiem.as_deref() {
        Some("am") => {
            if hour == 0 || hour > 12 {
                return None;
            }
            if hour == 12 {
                0
            } else {
                hour
            }
        }
        Some("pm") => {
            if hour == 0 || hour > 12 {
                return None;
            }
            if hour == 12 {
                12
            } else {
                hour + 12
            }
        }
        _ => {
            if hour > 23 {
                return None;
            }
            hour
        }
    };

    Some((hour * 60 + minute) as MinuteOfDay)
}

/// Parses a time range like `9am-3pm`, `7:30am - 6pm` or `8:00-17:30`.
///
/// In a meridiem-less range an end earlier than the start is assumed to be
/// PM and shifted by twelve hours, so `9-3` reads as 09:00 to 15:00.
pub fn parse_time_range(text: &str) -> Option<(MinuteOfDay, MinuteOfDay)> {
    let (left, right) = split_range(text)?;
    let start = parse_time(left)?;
    let mut end = parse_time(right)?;
    if end <= start && !has_meridiem(right) && end < 12 * 60 {
        end += 12 * 60;
    }
    if end <= start {
        return None;
    }
    Some((start, end))
}

fn split_range(text: &str) -> Option<(&str, &str)> {
    for sep in ["-", "\u{2013}", " to "] {
        if let Some(idx) = text.find(sep) {
            return Some((&text[..idx], &text[idx + sep.len()..]));
        }
    }
    None
}

fn has_meridiem(text: &str) -> bool {
    let lower = text.to_ascii_lowercase();
    lower.contains("am") || lower.contains("pm")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_twelve_hour_times() {
        assert_eq!(parse_time("9am"), Some(9 * 60));
        assert_eq!(parse_time("7:30am"), Some(7 * 60 + 30));
        assert_eq!(parse_time("12pm"), Some(12 * 60));
        assert_eq!(parse_time("12am"), Some(0));
        assert_eq!(parse_time(" 6 PM "), Some(18 * 60));
    }

    #[test]
    fn parses_twenty_four_hour_times() {
        assert_eq!(parse_time("15:00"), Some(15 * 60));
        assert_eq!(parse_time("8:00"), Some(8 * 60));
        assert_eq!(parse_time("17:30"), Some(17 * 60 + 30));
        assert_eq!(parse_time("0:05"), Some(5));
    }

    #[test]
    fn rejects_unparseable_times() {
        assert_eq!(parse_time("25:00"), None);
        assert_eq!(parse_time("13pm"), None);
        assert_eq!(parse_time("9:75"), None);
        assert_eq!(parse_time("morning"), None);
        assert_eq!(parse_time(""), None);
    }

    #[test]
    fn parses_ranges() {
        assert_eq!(parse_time_range("9am-3pm"), Some((9 * 60, 15 * 60)));
        assert_eq!(
            parse_time_range("7:30am - 6pm"),
            Some((7 * 60 + 30, 18 * 60))
        );
        assert_eq!(parse_time_range("8:00-17:30"), Some((8 * 60, 17 * 60 + 30)));
        assert_eq!(parse_time_range("8 to 5"), Some((8 * 60, 17 * 60)));
    }

    #[test]
    fn meridiem_less_end_before_start_reads_as_pm() {
        assert_eq!(parse_time_range("9-3"), Some((9 * 60, 15 * 60)));
    }

    #[test]
    fn rejects_inverted_ranges() {
        assert_eq!(parse_time_range("3pm-9am"), None);
        assert_eq!(parse_time_range("all day"), None);
    }
}
