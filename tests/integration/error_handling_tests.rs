use std::collections::HashMap;

use trip_schedule_lib::error::ErrorCode;
use trip_schedule_lib::services::enrichment_service::enrich_item;
use trip_schedule_lib::{
    analyze_trip, DestinationMeta, ItineraryItem, NoDestinations, ParsedNotes, ScheduleEngine,
    TripRecord, WarningType,
};

#[test]
fn malformed_notes_never_break_the_pipeline() {
    let notes = [
        "{not json",
        "",
        "null",
        "[1,2,3]",
        r#"{"type":"flight","duration":"long"}"#,
        "plain free text",
    ];

    for raw in notes {
        let parsed = ParsedNotes::parse(raw);
        assert_eq!(parsed.raw_text(), Some(raw), "notes {raw:?}");

        let item = ItineraryItem::new("1", 1, 0, "Item")
            .with_time("10:00")
            .with_notes(raw);
        let warnings = analyze_trip(&TripRecord::default(), &[item], &NoDestinations);
        assert!(warnings.is_empty(), "notes {raw:?} produced {warnings:?}");
    }
}

#[test]
fn invalid_dates_degrade_to_single_day_floor() {
    let trip = TripRecord::new(Some("31/12/2025"), Some(""));
    let warnings = analyze_trip(&trip, &[], &NoDestinations);

    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].id, "timing-empty-day1");
}

#[test]
fn missing_destination_metadata_only_disables_closures() {
    let destinations: HashMap<String, DestinationMeta> = HashMap::new();
    let items = vec![
        ItineraryItem::new("a", 1, 0, "Unknown museum")
            .with_time("10:00")
            .with_destination("nowhere"),
        ItineraryItem::new("b", 1, 1, "Coffee")
            .with_time("10:30")
            .with_destination("   "),
    ];
    let trip = TripRecord::new(Some("2025-06-02"), None);
    let warnings = analyze_trip(&trip, &items, &destinations);

    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].warning_type, WarningType::Conflict);

    let enriched = enrich_item(&items[0], &destinations);
    assert!(!enriched.destination_resolved);
}

#[test]
fn unparsable_times_make_items_unscheduled() {
    let items = vec![
        ItineraryItem::new("a", 1, 0, "Breakfast").with_time("9am"),
        ItineraryItem::new("b", 1, 1, "Walk").with_time("09:00"),
        ItineraryItem::new("c", 1, 2, "Nap").with_time("24:30"),
    ];
    let warnings = analyze_trip(&TripRecord::default(), &items, &NoDestinations);
    assert!(warnings.is_empty());
}

#[test]
fn structurally_invalid_snapshots_are_rejected() {
    let engine = ScheduleEngine::default();
    let cases = [
        r#"{ "items": {} }"#,
        r#"{ "trip": {} }"#,
        r#"{ "items": [ { "id": "a", "title": "No day" } ] }"#,
        "not json at all",
    ];

    for raw in cases {
        let err = engine
            .analyze_snapshot_json(raw)
            .expect_err("snapshot should be rejected");
        assert_eq!(err.code(), ErrorCode::Validation, "input {raw}");
    }
}

#[test]
fn minimal_snapshot_is_accepted() {
    let warnings = ScheduleEngine::default()
        .analyze_snapshot_json(r#"{ "items": [] }"#)
        .expect("empty itinerary is valid");
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].id, "timing-empty-day1");
}
