use std::collections::{BTreeMap, HashMap};

use tracing::debug;

use crate::models::destination::{DestinationMeta, EnrichedItem};
use crate::models::itinerary::{EnrichedDay, ItineraryItem, TripDay};
use crate::models::notes::ParsedNotes;

/// Resolves a destination reference to catalogue metadata. Data must already
/// be in memory; `None` means the reference is unknown.
pub trait DestinationLookup {
    fn lookup(&self, reference: &str) -> Option<DestinationMeta>;
}

impl DestinationLookup for HashMap<String, DestinationMeta> {
    fn lookup(&self, reference: &str) -> Option<DestinationMeta> {
        self.get(reference).cloned()
    }
}

impl DestinationLookup for BTreeMap<String, DestinationMeta> {
    fn lookup(&self, reference: &str) -> Option<DestinationMeta> {
        self.get(reference).cloned()
    }
}

/// Lookup that never resolves anything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDestinations;

impl DestinationLookup for NoDestinations {
    fn lookup(&self, _reference: &str) -> Option<DestinationMeta> {
        None
    }
}

pub fn enrich_item<L>(item: &ItineraryItem, destinations: &L) -> EnrichedItem
where
    L: DestinationLookup + ?Sized,
{
    let parsed_notes = item.notes.as_deref().map(ParsedNotes::parse);
    let destination = item
        .destination_ref
        .as_deref()
        .map(str::trim)
        .filter(|reference| !reference.is_empty())
        .and_then(|reference| destinations.lookup(reference));

    let destination_resolved = destination.is_some();
    let meta = destination.unwrap_or_default();

    // Only catalogue records drive closure checks; notes stay informational.
    let closure_days = meta.closure_days.unwrap_or_default();
    let category = meta.category.or_else(|| {
        parsed_notes
            .as_ref()
            .and_then(|notes| notes.category().map(str::to_string))
    });
    let duration_minutes = parsed_notes.as_ref().and_then(ParsedNotes::duration_minutes);

    EnrichedItem {
        item: item.clone(),
        parsed_notes,
        destination_resolved,
        category,
        rating: meta.rating,
        closure_days,
        address: meta.address,
        website: meta.website,
        duration_minutes,
    }
}

pub fn enrich_days<L>(days: &[TripDay], destinations: &L) -> Vec<EnrichedDay>
where
    L: DestinationLookup + ?Sized,
{
    let enriched: Vec<EnrichedDay> = days
        .iter()
        .map(|day| TripDay {
            day_number: day.day_number,
            date: day.date,
            items: day
                .items
                .iter()
                .map(|item| enrich_item(item, destinations))
                .collect(),
        })
        .collect();

    let resolved = enriched
        .iter()
        .flat_map(|day| day.items.iter())
        .filter(|item| item.destination_resolved)
        .count();
    debug!(
        target: "app::schedule::enrichment",
        days = enriched.len(),
        resolved_destinations = resolved,
        "enriched itinerary items"
    );

    enriched
}
