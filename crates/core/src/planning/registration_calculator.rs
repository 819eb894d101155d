//! Registration readiness derivation.
//!
//! A camp's registration fields arrive in three shapes, tried in order: a
//! structured opening date, a free-text status, and a free-text date.
//! Anything unparseable ends as `unknown`.

use chrono::{Datelike, NaiveDate};

use super::planning_model::{RegistrationKind, RegistrationStatus, Severity};
use crate::camps::Camp;
use crate::constants::{REG_CRITICAL_WINDOW_DAYS, REG_ROLLOVER_GRACE_DAYS};
use crate::utils::date_utils;

/// Derives the registration status tag for a camp as of `today`.
pub fn registration_status(camp: &Camp, today: NaiveDate) -> RegistrationStatus {
    if let Some(opens) = camp.registration_opens {
        return status_from_open_date(opens, today);
    }
    if let Some(text) = camp.reg_status.as_deref() {
        if let Some(status) = status_from_text(text) {
            return status;
        }
    }
    if let Some(text) = camp.reg_date.as_deref() {
        if let Some(status) = status_from_free_date(text, today) {
            return status;
        }
    }
    RegistrationStatus::unknown()
}

fn status_from_open_date(opens: NaiveDate, today: NaiveDate) -> RegistrationStatus {
    let days_until = opens.signed_duration_since(today).num_days();
    if days_until > 0 {
        let severity = if days_until <= REG_CRITICAL_WINDOW_DAYS {
            Severity::Critical
        } else {
            Severity::Info
        };
        RegistrationStatus {
            kind: RegistrationKind::Upcoming,
            days_until: Some(days_until),
            label: format!("Opens {} (in {} days)", opens.format("%b %-d"), days_until),
            severity,
        }
    } else {
        RegistrationStatus {
            kind: RegistrationKind::Open,
            days_until: None,
            label: "Registration open".to_string(),
            severity: Severity::Info,
        }
    }
}

/// Substring rules over the free-text status field, in precedence order.
fn status_from_text(text: &str) -> Option<RegistrationStatus> {
    let lower = text.to_lowercase();
    let (kind, label) = if ["open", "now", "rolling"]
        .iter()
        .any(|needle| lower.contains(needle))
    {
        (RegistrationKind::Open, "Registration open")
    } else if lower.contains("waitlist") {
        (RegistrationKind::Waitlist, "Waitlist")
    } else if lower.contains("closed") || lower.contains("full") {
        (RegistrationKind::Closed, "Registration closed")
    } else {
        return None;
    };
    Some(RegistrationStatus {
        kind,
        days_until: None,
        label: label.to_string(),
        severity: Severity::Info,
    })
}

/// Month-day text like "March 15", resolved against the current year.
///
/// A date past by no more than the grace window reads as recently opened;
/// further past, the next year's cycle is assumed.
fn status_from_free_date(text: &str, today: NaiveDate) -> Option<RegistrationStatus> {
    let (month, day) = date_utils::parse_month_day(text)?;
    let this_year = date_utils::resolve_month_day(month, day, today)?;
    let days_past = today.signed_duration_since(this_year).num_days();
    if days_past > REG_ROLLOVER_GRACE_DAYS {
        let next_year = NaiveDate::from_ymd_opt(today.year() + 1, month, day)?;
        return Some(status_from_open_date(next_year, today));
    }
    Some(status_from_open_date(this_year, today))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn camp_with_reg_date(text: &str) -> Camp {
        Camp {
            id: "camp-1".to_string(),
            name: "Robotics".to_string(),
            reg_date: Some(text.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn upcoming_within_a_week_is_critical() {
        let camp = camp_with_reg_date("March 15");
        let status = registration_status(&camp, date(2026, 3, 10));
        assert_eq!(status.kind, RegistrationKind::Upcoming);
        assert_eq!(status.days_until, Some(5));
        assert_eq!(status.severity, Severity::Critical);
    }

    #[test]
    fn recently_past_date_reads_as_open() {
        let camp = camp_with_reg_date("March 15");
        let status = registration_status(&camp, date(2026, 3, 20));
        assert_eq!(status.kind, RegistrationKind::Open);
    }

    #[test]
    fn long_past_date_rolls_to_next_year() {
        let camp = camp_with_reg_date("March 15");
        let status = registration_status(&camp, date(2026, 11, 2));
        assert_eq!(status.kind, RegistrationKind::Upcoming);
        assert_eq!(status.severity, Severity::Info);
        assert_eq!(
            status.days_until,
            Some(
                date(2027, 3, 15)
                    .signed_duration_since(date(2026, 11, 2))
                    .num_days()
            )
        );
    }

    #[test]
    fn structured_date_takes_precedence() {
        let mut camp = camp_with_reg_date("March 15");
        camp.registration_opens = Some(date(2026, 4, 1));
        camp.reg_status = Some("closed".to_string());

        let status = registration_status(&camp, date(2026, 3, 30));
        assert_eq!(status.kind, RegistrationKind::Upcoming);
        assert_eq!(status.days_until, Some(2));
    }

    #[test]
    fn free_text_status_maps_by_substring() {
        let mut camp = Camp::default();

        camp.reg_status = Some("Rolling admissions".to_string());
        assert_eq!(
            registration_status(&camp, date(2026, 3, 1)).kind,
            RegistrationKind::Open
        );

        camp.reg_status = Some("Waitlist only".to_string());
        assert_eq!(
            registration_status(&camp, date(2026, 3, 1)).kind,
            RegistrationKind::Waitlist
        );

        camp.reg_status = Some("Session FULL".to_string());
        assert_eq!(
            registration_status(&camp, date(2026, 3, 1)).kind,
            RegistrationKind::Closed
        );
    }

    #[test]
    fn unparseable_input_yields_unknown() {
        let camp = camp_with_reg_date("spring 2026");
        assert_eq!(
            registration_status(&camp, date(2026, 3, 1)).kind,
            RegistrationKind::Unknown
        );
        assert_eq!(
            registration_status(&Camp::default(), date(2026, 3, 1)).kind,
            RegistrationKind::Unknown
        );
    }

    #[test]
    fn unmatched_status_text_falls_through_to_reg_date() {
        let mut camp = camp_with_reg_date("June 1");
        camp.reg_status = Some("see website".to_string());
        let status = registration_status(&camp, date(2026, 5, 25));
        assert_eq!(status.kind, RegistrationKind::Upcoming);
        assert_eq!(status.days_until, Some(7));
        assert_eq!(status.severity, Severity::Critical);
    }
}
