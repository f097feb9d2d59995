use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::debug;

use crate::error::{AppError, AppResult};
use crate::models::destination::DestinationMeta;
use crate::models::itinerary::{DaySummary, EnrichedDay, ItineraryItem, TripRecord};
use crate::models::settings::EngineSettings;
use crate::models::warning::Warning;
use crate::services::closure_checker;
use crate::services::conflict_detector;
use crate::services::density_heuristic;
use crate::services::enrichment_service::{self, DestinationLookup};
use crate::services::itinerary_assembler;
use crate::services::warning_aggregator::{self, AggregatedWarnings};

/// Everything the engine needs for one trip, as handed over by the
/// persistence layer in a single JSON document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct TripSnapshot {
    #[serde(default)]
    pub trip: TripRecord,
    pub items: Vec<ItineraryItem>,
    #[serde(default)]
    pub destinations: HashMap<String, DestinationMeta>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleReport {
    pub days: Vec<DaySummary>,
    pub warnings: Vec<Warning>,
    pub total_detected: usize,
    pub truncated: bool,
}

/// Stateless pipeline: assemble, enrich, detect, aggregate. Every call
/// depends only on its arguments.
#[derive(Debug, Clone, Default)]
pub struct ScheduleEngine {
    settings: EngineSettings,
}

impl ScheduleEngine {
    pub fn new(settings: EngineSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &EngineSettings {
        &self.settings
    }

    pub fn analyze<L>(&self, trip: &TripRecord, items: &[ItineraryItem], destinations: &L) -> Vec<Warning>
    where
        L: DestinationLookup + ?Sized,
    {
        let days = self.enriched_days(trip, items, destinations);
        self.run_detectors(&days).warnings
    }

    pub fn report<L>(&self, trip: &TripRecord, items: &[ItineraryItem], destinations: &L) -> ScheduleReport
    where
        L: DestinationLookup + ?Sized,
    {
        let days = self.enriched_days(trip, items, destinations);
        let aggregated = self.run_detectors(&days);
        let truncated = aggregated.truncated();

        let summaries = days
            .iter()
            .map(|day| DaySummary {
                day_number: day.day_number,
                date: day.date,
                item_count: day.items.len(),
                scheduled_count: day
                    .items
                    .iter()
                    .filter(|item| {
                        conflict_detector::item_interval(item, self.settings.default_duration_minutes)
                            .is_some()
                    })
                    .count(),
            })
            .collect();

        ScheduleReport {
            days: summaries,
            warnings: aggregated.warnings,
            total_detected: aggregated.total_detected,
            truncated,
        }
    }

    /// Structural boundary for callers holding a serialized snapshot. A
    /// document that is not a well-formed snapshot is rejected outright.
    pub fn analyze_snapshot_json(&self, raw: &str) -> AppResult<Vec<Warning>> {
        let snapshot: TripSnapshot = serde_json::from_str(raw).map_err(|err| {
            AppError::validation_with_details(
                "malformed trip snapshot",
                json!({
                    "line": err.line(),
                    "column": err.column(),
                    "error": err.to_string(),
                }),
            )
        })?;
        Ok(self.analyze(&snapshot.trip, &snapshot.items, &snapshot.destinations))
    }

    pub fn enriched_days<L>(&self, trip: &TripRecord, items: &[ItineraryItem], destinations: &L) -> Vec<EnrichedDay>
    where
        L: DestinationLookup + ?Sized,
    {
        let days = itinerary_assembler::assemble_itinerary(items, trip);
        enrichment_service::enrich_days(&days, destinations)
    }

    fn run_detectors(&self, days: &[EnrichedDay]) -> AggregatedWarnings {
        let conflicts = conflict_detector::detect_conflicts(days, self.settings.default_duration_minutes);
        let closures = closure_checker::check_closures(days);
        let timing = density_heuristic::check_density(days, self.settings.packed_day_threshold);

        debug!(
            target: "app::schedule::engine",
            days = days.len(),
            conflicts = conflicts.len(),
            closures = closures.len(),
            timing = timing.len(),
            "schedule detectors finished"
        );

        warning_aggregator::aggregate_warnings(conflicts, closures, timing, self.settings.max_warnings)
    }
}

/// Runs the pipeline with default settings.
pub fn analyze_trip<L>(trip: &TripRecord, items: &[ItineraryItem], destinations: &L) -> Vec<Warning>
where
    L: DestinationLookup + ?Sized,
{
    ScheduleEngine::default().analyze(trip, items, destinations)
}
