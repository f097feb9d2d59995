use std::collections::{BTreeMap, HashSet};

use chrono::Weekday;
use trip_schedule_lib::services::schedule_engine::ScheduleEngine;
use trip_schedule_lib::{
    filter_dismissed, DestinationMeta, EngineSettings, ItineraryItem, TripRecord, WarningType,
};

fn catalogue() -> BTreeMap<String, DestinationMeta> {
    let mut map = BTreeMap::new();
    map.insert(
        "uffizi".to_string(),
        DestinationMeta {
            category: Some("museum".to_string()),
            rating: Some(4.8),
            closure_days: Some(vec![Weekday::Mon]),
            address: Some("Piazzale degli Uffizi".to_string()),
            website: None,
            image: None,
        },
    );
    map.insert(
        "duomo".to_string(),
        DestinationMeta {
            category: Some("church".to_string()),
            closure_days: Some(vec![Weekday::Sun]),
            ..Default::default()
        },
    );
    map.insert("ponte-vecchio".to_string(), DestinationMeta::default());
    map
}

/// Four-day Florence trip starting on Sunday 2025-06-01.
fn florence_trip() -> (TripRecord, Vec<ItineraryItem>) {
    let trip = TripRecord::new(Some("2025-06-01"), Some("2025-06-04T18:00:00+02:00"));
    let items = vec![
        ItineraryItem::new("d1-train", 1, 0, "Train from Rome")
            .with_time("08:10")
            .with_notes(r#"{"type":"train","from":"Roma Termini","to":"Firenze SMN","duration":95}"#),
        ItineraryItem::new("d1-duomo", 1, 1, "Duomo")
            .with_time("09:30")
            .with_destination("duomo"),
        ItineraryItem::new("d1-hotel", 1, 2, "Check in")
            .with_time("15:00")
            .with_notes(r#"{"type":"hotel","checkIn":"2025-06-01","checkOut":"2025-06-04"}"#),
        ItineraryItem::new("d2-uffizi", 2, 0, "Uffizi Gallery")
            .with_time("10:00")
            .with_destination("uffizi")
            .with_notes(r#"{"type":"place","duration":180}"#),
        ItineraryItem::new("d2-bridge", 2, 1, "Ponte Vecchio")
            .with_time("12:30")
            .with_destination("ponte-vecchio"),
        ItineraryItem::new("d2-lunch", 2, 2, "Lunch")
            .with_time("12:30")
            .with_notes("book a table near the river"),
    ];
    (trip, items)
}

#[test]
fn multi_day_trip_produces_expected_warnings() {
    let (trip, items) = florence_trip();
    let engine = ScheduleEngine::default();
    let warnings = engine.analyze(&trip, &items, &catalogue());

    let ids: Vec<&str> = warnings.iter().map(|w| w.id.as_str()).collect();
    assert_eq!(
        ids,
        vec![
            // Train 08:10-09:45 overlaps the Duomo at 09:30.
            "conflict-day1-d1%2Dtrain-d1%2Dduomo",
            // Uffizi 10:00-13:00 overlaps both 12:30 items, which also share a start.
            "conflict-day2-d2%2Duffizi-d2%2Dbridge",
            "conflict-day2-d2%2Duffizi-d2%2Dlunch",
            "conflict-day2-d2%2Dbridge-d2%2Dlunch",
            // Sunday Duomo, Monday Uffizi.
            "closure-day1-d1%2Dduomo",
            "closure-day2-d2%2Duffizi",
            "timing-empty-day3",
            "timing-empty-day4",
        ]
    );
}

#[test]
fn repeated_runs_are_identical() {
    let (trip, items) = florence_trip();
    let engine = ScheduleEngine::default();
    let first = engine.analyze(&trip, &items, &catalogue());
    let second = engine.analyze(&trip, &items, &catalogue());
    assert_eq!(first, second);
}

#[test]
fn dismissed_warnings_stay_dismissed_across_recomputation() {
    let (trip, items) = florence_trip();
    let engine = ScheduleEngine::default();
    let initial = engine.analyze(&trip, &items, &catalogue());

    let dismissed: HashSet<String> = initial
        .iter()
        .filter(|w| w.warning_type != WarningType::Timing)
        .map(|w| w.id.clone())
        .collect();

    let recomputed = filter_dismissed(engine.analyze(&trip, &items, &catalogue()), &dismissed);
    assert!(recomputed.iter().all(|w| !dismissed.contains(&w.id)));
    assert_eq!(recomputed.len(), 2);
}

#[test]
fn editing_one_day_keeps_other_ids_stable() {
    let (trip, mut items) = florence_trip();
    let engine = ScheduleEngine::default();
    let before = engine.analyze(&trip, &items, &catalogue());

    items.push(ItineraryItem::new("d3-hike", 3, 0, "Fiesole hike"));
    let after = engine.analyze(&trip, &items, &catalogue());

    let after_ids: HashSet<&str> = after.iter().map(|w| w.id.as_str()).collect();
    for warning in before.iter().filter(|w| w.id != "timing-empty-day3") {
        assert!(after_ids.contains(warning.id.as_str()), "missing {}", warning.id);
    }
    assert!(!after_ids.contains("timing-empty-day3"));
}

#[test]
fn report_summarises_days() {
    let (trip, items) = florence_trip();
    let engine = ScheduleEngine::new(EngineSettings {
        max_warnings: 5,
        ..EngineSettings::default()
    });
    let report = engine.report(&trip, &items, &catalogue());

    assert_eq!(report.days.len(), 4);
    assert_eq!(report.days[0].item_count, 3);
    assert_eq!(report.days[2].item_count, 0);
    assert_eq!(report.warnings.len(), 5);
    assert_eq!(report.total_detected, 8);
    assert!(report.truncated);

    let json = serde_json::to_value(&report).expect("serialize report");
    assert_eq!(json["days"][1]["date"], "2025-06-02");
    assert_eq!(json["warnings"][0]["type"], "conflict");
}
