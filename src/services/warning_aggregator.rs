use std::collections::HashSet;

use tracing::debug;

use crate::models::warning::Warning;

/// Result of merging detector output before the caller applies dismissals.
#[derive(Debug, Clone, PartialEq)]
pub struct AggregatedWarnings {
    pub warnings: Vec<Warning>,
    /// Distinct warnings found before the cap was applied.
    pub total_detected: usize,
}

impl AggregatedWarnings {
    pub fn truncated(&self) -> bool {
        self.total_detected > self.warnings.len()
    }
}

/// Conflicts, then closures, then timing. Within each group the detector's
/// order is kept. Duplicate ids keep their first occurrence.
pub fn aggregate_warnings(
    conflicts: Vec<Warning>,
    closures: Vec<Warning>,
    timing: Vec<Warning>,
    max_warnings: usize,
) -> AggregatedWarnings {
    let mut seen = HashSet::new();
    let distinct: Vec<Warning> = conflicts
        .into_iter()
        .chain(closures)
        .chain(timing)
        .filter(|warning| seen.insert(warning.id.clone()))
        .collect();

    let total_detected = distinct.len();
    let warnings: Vec<Warning> = distinct.into_iter().take(max_warnings).collect();

    debug!(
        target: "app::schedule::aggregator",
        total_detected,
        returned = warnings.len(),
        "aggregated schedule warnings"
    );

    AggregatedWarnings {
        warnings,
        total_detected,
    }
}

/// Drops warnings the caller has dismissed. Ids are stable across runs, so
/// a dismissed warning stays hidden as long as its inputs are unchanged.
pub fn filter_dismissed(warnings: Vec<Warning>, dismissed: &HashSet<String>) -> Vec<Warning> {
    warnings
        .into_iter()
        .filter(|warning| !dismissed.contains(&warning.id))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::warning::{WarningSeverity, WarningType};

    fn warning(id: &str, warning_type: WarningType) -> Warning {
        Warning {
            id: id.to_string(),
            warning_type,
            severity: WarningSeverity::Low,
            message: id.to_string(),
            suggestion: None,
            day: None,
            item_ids: Vec::new(),
        }
    }

    fn ids(warnings: &[Warning]) -> Vec<&str> {
        warnings.iter().map(|w| w.id.as_str()).collect()
    }

    #[test]
    fn keeps_precedence_order() {
        let result = aggregate_warnings(
            vec![warning("c1", WarningType::Conflict)],
            vec![warning("x1", WarningType::Closure)],
            vec![warning("t1", WarningType::Timing), warning("t2", WarningType::Timing)],
            10,
        );
        assert_eq!(ids(&result.warnings), vec!["c1", "x1", "t1", "t2"]);
        assert!(!result.truncated());
    }

    #[test]
    fn deduplicates_by_id_keeping_first() {
        let mut duplicate = warning("c1", WarningType::Conflict);
        duplicate.message = "second".to_string();
        let result = aggregate_warnings(
            vec![warning("c1", WarningType::Conflict), duplicate],
            Vec::new(),
            Vec::new(),
            10,
        );
        assert_eq!(result.warnings.len(), 1);
        assert_eq!(result.warnings[0].message, "c1");
        assert_eq!(result.total_detected, 1);
    }

    #[test]
    fn caps_after_ordering() {
        let conflicts = (0..12)
            .map(|i| warning(&format!("c{i}"), WarningType::Conflict))
            .collect();
        let result = aggregate_warnings(conflicts, Vec::new(), vec![warning("t", WarningType::Timing)], 10);
        assert_eq!(result.warnings.len(), 10);
        assert_eq!(result.total_detected, 13);
        assert!(result.truncated());
        assert!(result
            .warnings
            .iter()
            .all(|w| w.warning_type == WarningType::Conflict));
    }

    #[test]
    fn dismissal_filters_by_id() {
        let warnings = vec![warning("a", WarningType::Conflict), warning("b", WarningType::Timing)];
        let dismissed: HashSet<String> = ["a".to_string()].into_iter().collect();
        assert_eq!(ids(&filter_dismissed(warnings, &dismissed)), vec!["b"]);
    }
}
