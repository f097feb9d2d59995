use tracing::debug;

use crate::models::destination::EnrichedItem;
use crate::models::itinerary::EnrichedDay;
use crate::models::warning::{warning_id, Warning, WarningSeverity, WarningType};
use crate::services::schedule_utils::{self, Interval};

struct ScheduledItem<'a> {
    item: &'a EnrichedItem,
    interval: Interval,
}

/// Interval for an enriched item, or `None` if it has no usable time.
pub fn item_interval(item: &EnrichedItem, default_duration_minutes: i64) -> Option<Interval> {
    schedule_utils::interval_for(
        item.item.time.as_deref(),
        item.duration_minutes,
        default_duration_minutes,
    )
}

/// One warning per overlapping pair within the day. Chains are not merged.
pub fn detect_day_conflicts(day: &EnrichedDay, default_duration_minutes: i64) -> Vec<Warning> {
    let mut scheduled: Vec<ScheduledItem<'_>> = day
        .items
        .iter()
        .filter_map(|item| {
            item_interval(item, default_duration_minutes)
                .map(|interval| ScheduledItem { item, interval })
        })
        .collect();
    // Stable sort keeps the day order for equal start times.
    scheduled.sort_by_key(|entry| entry.interval.start);

    let mut warnings = Vec::new();
    for (index, earlier) in scheduled.iter().enumerate() {
        for later in &scheduled[index + 1..] {
            if !earlier.interval.overlaps_later(&later.interval) {
                // Sorted by start, so no later item can overlap `earlier` either.
                break;
            }
            warnings.push(conflict_warning(day.day_number, earlier, later));
        }
    }

    if !warnings.is_empty() {
        debug!(
            target: "app::schedule::conflicts",
            day = day.day_number,
            scheduled = scheduled.len(),
            conflicts = warnings.len(),
            "detected overlapping items"
        );
    }

    warnings
}

pub fn detect_conflicts(days: &[EnrichedDay], default_duration_minutes: i64) -> Vec<Warning> {
    days.iter()
        .flat_map(|day| detect_day_conflicts(day, default_duration_minutes))
        .collect()
}

fn conflict_warning(day_number: u32, earlier: &ScheduledItem<'_>, later: &ScheduledItem<'_>) -> Warning {
    let message = format!(
        "\"{}\" ({}-{}) overlaps with \"{}\" ({}-{}) on Day {}",
        earlier.item.title(),
        schedule_utils::format_minutes(earlier.interval.start),
        schedule_utils::format_minutes(earlier.interval.end),
        later.item.title(),
        schedule_utils::format_minutes(later.interval.start),
        schedule_utils::format_minutes(later.interval.end),
        day_number
    );

    Warning {
        id: warning_id(
            WarningType::Conflict,
            None,
            day_number,
            &[earlier.item.id(), later.item.id()],
        ),
        warning_type: WarningType::Conflict,
        severity: WarningSeverity::High,
        message,
        suggestion: Some("Adjust the time of one of these activities".to_string()),
        day: Some(day_number),
        item_ids: vec![earlier.item.id().to_string(), later.item.id().to_string()],
    }
}
