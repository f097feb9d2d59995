use chrono::Datelike;
use tracing::debug;

use crate::models::destination::weekday_name;
use crate::models::itinerary::EnrichedDay;
use crate::models::warning::{warning_id, Warning, WarningSeverity, WarningType};

/// Warns about visits that land on a weekday the destination is closed.
/// Days without a calendar date and items without closure data are skipped.
pub fn check_day_closures(day: &EnrichedDay) -> Vec<Warning> {
    let Some(date) = day.date else {
        return Vec::new();
    };
    let weekday = date.weekday();

    day.items
        .iter()
        .filter(|item| item.closure_days.contains(&weekday))
        .map(|item| Warning {
            id: warning_id(WarningType::Closure, None, day.day_number, &[item.id()]),
            warning_type: WarningType::Closure,
            severity: WarningSeverity::Medium,
            message: format!(
                "\"{}\" is usually closed on {}s ({} is Day {})",
                item.title(),
                weekday_name(weekday),
                date.format("%Y-%m-%d"),
                day.day_number
            ),
            suggestion: Some("Check opening hours or move this visit to another day".to_string()),
            day: Some(day.day_number),
            item_ids: vec![item.id().to_string()],
        })
        .collect()
}

pub fn check_closures(days: &[EnrichedDay]) -> Vec<Warning> {
    if days.iter().all(|day| day.date.is_none()) {
        debug!(
            target: "app::schedule::closures",
            "trip has no start date, skipping closure checks"
        );
        return Vec::new();
    }
    days.iter().flat_map(check_day_closures).collect()
}
