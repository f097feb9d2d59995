use std::collections::BTreeMap;

use chrono::NaiveDate;
use tracing::{debug, warn};

use crate::models::itinerary::{ItineraryItem, TripDay, TripRecord};
use crate::utils::date_span;

/// Longest trip the assembler materialises. Item days and date spans past it
/// are clamped so one bad record cannot allocate an unbounded day list.
pub const MAX_TRIP_DAYS: u32 = 366;

/// Clamps stored day numbers into `1..=MAX_TRIP_DAYS`.
pub fn normalized_day(day: i64) -> u32 {
    u32::try_from(day.clamp(1, i64::from(MAX_TRIP_DAYS))).unwrap_or(MAX_TRIP_DAYS)
}

/// `max(max item day, inclusive date span, 1)`, capped at [`MAX_TRIP_DAYS`].
pub fn total_days(items: &[ItineraryItem], start: Option<NaiveDate>, end: Option<NaiveDate>) -> u32 {
    let max_item_day = items
        .iter()
        .map(|item| normalized_day(item.day))
        .max()
        .unwrap_or(0);
    let span = date_span::inclusive_day_span(start, end);
    max_item_day.max(span).clamp(1, MAX_TRIP_DAYS)
}

/// Buckets items by day, ordered by `order_index`, with an entry for every
/// day from 1 to the trip length.
pub fn assemble_itinerary(items: &[ItineraryItem], trip: &TripRecord) -> Vec<TripDay> {
    let start = date_span::parse_optional_date(trip.start_date.as_deref());
    let end = date_span::parse_optional_date(trip.end_date.as_deref());
    let day_count = total_days(items, start, end);

    let mut buckets: BTreeMap<u32, Vec<ItineraryItem>> = BTreeMap::new();
    for item in items {
        if item.day < 1 {
            debug!(
                target: "app::schedule::assembler",
                item_id = %item.id,
                day = item.day,
                "item day below 1, placing on day 1"
            );
        } else if item.day > i64::from(MAX_TRIP_DAYS) {
            warn!(
                target: "app::schedule::assembler",
                item_id = %item.id,
                day = item.day,
                max_days = MAX_TRIP_DAYS,
                "item day past trip limit, placing on last day"
            );
        }
        buckets
            .entry(normalized_day(item.day))
            .or_default()
            .push(item.clone());
    }

    let days: Vec<TripDay> = (1..=day_count)
        .map(|day_number| {
            let mut day_items = buckets.remove(&day_number).unwrap_or_default();
            // Stable: duplicate order indices keep their input order.
            day_items.sort_by_key(|item| item.order_index);
            TripDay {
                day_number,
                date: date_span::date_for_day(start, day_number),
                items: day_items,
            }
        })
        .collect();

    debug!(
        target: "app::schedule::assembler",
        total_days = day_count,
        item_count = items.len(),
        has_start_date = start.is_some(),
        "assembled itinerary"
    );

    days
}
