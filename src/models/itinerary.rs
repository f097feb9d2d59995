use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::destination::EnrichedItem;

/// Trip boundaries as stored by the persistence layer. Values are kept as
/// strings and parsed leniently; anything unparsable counts as absent.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct TripRecord {
    #[serde(default, alias = "start_date")]
    pub start_date: Option<String>,
    #[serde(default, alias = "end_date")]
    pub end_date: Option<String>,
}

impl TripRecord {
    pub fn new(start_date: Option<&str>, end_date: Option<&str>) -> Self {
        Self {
            start_date: start_date.map(str::to_string),
            end_date: end_date.map(str::to_string),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ItineraryItem {
    pub id: String,
    pub day: i64,
    #[serde(default, alias = "order_index")]
    pub order_index: i64,
    #[serde(default)]
    pub time: Option<String>,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, alias = "destination_ref", alias = "destination_id")]
    pub destination_ref: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl ItineraryItem {
    pub fn new(id: impl Into<String>, day: i64, order_index: i64, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            day,
            order_index,
            time: None,
            title: title.into(),
            description: None,
            destination_ref: None,
            notes: None,
        }
    }

    pub fn with_time(mut self, time: impl Into<String>) -> Self {
        self.time = Some(time.into());
        self
    }

    pub fn with_destination(mut self, reference: impl Into<String>) -> Self {
        self.destination_ref = Some(reference.into());
        self
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }
}

/// One materialised day of a trip. Generic over the item representation so
/// the assembler can bucket raw items and the engine can reuse the shape for
/// enriched ones.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TripDay<T = ItineraryItem> {
    pub day_number: u32,
    pub date: Option<NaiveDate>,
    pub items: Vec<T>,
}

impl<T> TripDay<T> {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

pub type EnrichedDay = TripDay<EnrichedItem>;

/// Per-day counts handed to the presentation layer next to the warnings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DaySummary {
    pub day_number: u32,
    pub date: Option<NaiveDate>,
    pub item_count: usize,
    pub scheduled_count: usize,
}
