use crate::models::itinerary::TripDay;
use crate::models::warning::{warning_id, Warning, WarningSeverity, WarningType};

/// Flags days with nothing planned and days holding more than
/// `packed_threshold` items. Unscheduled items count too.
pub fn check_day_density<T>(day: &TripDay<T>, packed_threshold: usize) -> Option<Warning> {
    let count = day.items.len();
    let day_number = day.day_number;

    if count == 0 {
        return Some(Warning {
            id: warning_id(WarningType::Timing, Some("empty"), day_number, &[]),
            warning_type: WarningType::Timing,
            severity: WarningSeverity::Low,
            message: format!("Day {day_number} has no activities planned"),
            suggestion: Some("Add some places to visit or activities for this day".to_string()),
            day: Some(day_number),
            item_ids: Vec::new(),
        });
    }

    if count > packed_threshold {
        return Some(Warning {
            id: warning_id(WarningType::Timing, Some("packed"), day_number, &[]),
            warning_type: WarningType::Timing,
            severity: WarningSeverity::Medium,
            message: format!("Day {day_number} looks very packed ({count} stops)"),
            suggestion: Some("Consider spreading activities across multiple days".to_string()),
            day: Some(day_number),
            item_ids: Vec::new(),
        });
    }

    None
}

pub fn check_density<T>(days: &[TripDay<T>], packed_threshold: usize) -> Vec<Warning> {
    days.iter()
        .filter_map(|day| check_day_density(day, packed_threshold))
        .collect()
}
