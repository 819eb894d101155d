//! Work-hour compatibility between camp hours and the family work window.

use super::planning_model::WorkHourFit;
use crate::camps::Camp;
use crate::utils::time_utils::{self, MinuteOfDay};

/// Derives work-hour fit for one camp against a work window in minutes
/// since midnight.
///
/// `covers` is true when camp hours envelop the work window; if they do
/// not but the extended-care window does, it is still true with
/// `needs_extended_care` set. Unparseable time fields fail open with
/// `covers = None` so consumers can show "unknown" rather than exclude
/// the camp.
pub fn work_hour_fit(camp: &Camp, work_window: Option<(MinuteOfDay, MinuteOfDay)>) -> WorkHourFit {
    let hours = camp_hours(camp);
    let drop_off = camp
        .drop_off
        .as_deref()
        .and_then(time_utils::parse_time)
        .or(hours.map(|(start, _)| start));
    let pick_up = camp
        .pick_up
        .as_deref()
        .and_then(time_utils::parse_time)
        .or(hours.map(|(_, end)| end));

    let (work_start, work_end) = match work_window {
        Some(window) => window,
        None => {
            return WorkHourFit {
                covers: None,
                needs_extended_care: false,
                effective_drop_off: drop_off,
                effective_pick_up: pick_up,
            }
        }
    };

    let (drop_off_min, pick_up_min) = match (drop_off, pick_up) {
        (Some(drop_off_min), Some(pick_up_min)) => (drop_off_min, pick_up_min),
        _ => {
            return WorkHourFit {
                covers: None,
                needs_extended_care: false,
                effective_drop_off: drop_off,
                effective_pick_up: pick_up,
            }
        }
    };

    if drop_off_min <= work_start && pick_up_min >= work_end {
        return WorkHourFit {
            covers: Some(true),
            needs_extended_care: false,
            effective_drop_off: drop_off,
            effective_pick_up: pick_up,
        };
    }

    if let Some((care_start, care_end)) = camp
        .extended_care
        .as_deref()
        .and_then(time_utils::parse_time_range)
    {
        if care_start <= work_start && care_end >= work_end {
            return WorkHourFit {
                covers: Some(true),
                needs_extended_care: true,
                effective_drop_off: Some(care_start),
                effective_pick_up: Some(care_end),
            };
        }
    }

    WorkHourFit {
        covers: Some(false),
        needs_extended_care: false,
        effective_drop_off: drop_off,
        effective_pick_up: pick_up,
    }
}

fn camp_hours(camp: &Camp) -> Option<(MinuteOfDay, MinuteOfDay)> {
    camp.hours.as_deref().and_then(time_utils::parse_time_range)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn camp(hours: &str, extended_care: Option<&str>) -> Camp {
        Camp {
            id: "camp-1".to_string(),
            name: "Robotics".to_string(),
            hours: Some(hours.to_string()),
            extended_care: extended_care.map(str::to_string),
            ..Default::default()
        }
    }

    const WORK: Option<(MinuteOfDay, MinuteOfDay)> = Some((8 * 60, 17 * 60 + 30));

    #[test]
    fn extended_care_rescues_short_camp_hours() {
        let camp = camp("9am-3pm", Some("7:30am-6pm"));
        let fit = work_hour_fit(&camp, WORK);
        assert_eq!(fit.covers, Some(true));
        assert!(fit.needs_extended_care);
        assert_eq!(fit.effective_drop_off, Some(7 * 60 + 30));
        assert_eq!(fit.effective_pick_up, Some(18 * 60));
    }

    #[test]
    fn enveloping_hours_cover_without_extended_care() {
        let camp = camp("7:30am-6pm", None);
        let fit = work_hour_fit(&camp, WORK);
        assert_eq!(fit.covers, Some(true));
        assert!(!fit.needs_extended_care);
    }

    #[test]
    fn short_hours_without_extended_care_do_not_cover() {
        let camp = camp("9am-3pm", None);
        let fit = work_hour_fit(&camp, WORK);
        assert_eq!(fit.covers, Some(false));
        assert!(!fit.needs_extended_care);
    }

    #[test]
    fn insufficient_extended_care_does_not_cover() {
        let camp = camp("9am-3pm", Some("8:30am-5pm"));
        let fit = work_hour_fit(&camp, WORK);
        assert_eq!(fit.covers, Some(false));
    }

    #[test]
    fn unparseable_hours_fail_open() {
        let camp = camp("all day", None);
        let fit = work_hour_fit(&camp, WORK);
        assert_eq!(fit.covers, None);
        assert_eq!(fit.effective_drop_off, None);
    }

    #[test]
    fn missing_work_window_fails_open() {
        let camp = camp("9am-3pm", None);
        let fit = work_hour_fit(&camp, None);
        assert_eq!(fit.covers, None);
        assert_eq!(fit.effective_drop_off, Some(9 * 60));
        assert_eq!(fit.effective_pick_up, Some(15 * 60));
    }

    #[test]
    fn explicit_drop_off_and_pick_up_override_hours() {
        let mut camp = camp("9am-3pm", None);
        camp.drop_off = Some("7:45am".to_string());
        camp.pick_up = Some("5:45pm".to_string());
        let fit = work_hour_fit(&camp, WORK);
        assert_eq!(fit.covers, Some(true));
        assert_eq!(fit.effective_drop_off, Some(7 * 60 + 45));
        assert_eq!(fit.effective_pick_up, Some(17 * 60 + 45));
    }
}
