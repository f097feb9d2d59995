use chrono::Weekday;
use serde::{Deserialize, Serialize};

use crate::models::destination::{deserialize_closure_days, serialize_closure_days};

/// Typed view of an item's `notes` sidecar. Anything that does not decode into
/// one of the known shapes ends up as [`ParsedNotes::Raw`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ParsedNotes {
    Flight(TransitNotes),
    Train(TransitNotes),
    Hotel(HotelNotes),
    Activity(VisitNotes),
    Place(VisitNotes),
    Raw { raw: String },
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct TransitNotes {
    #[serde(default)]
    pub from: Option<String>,
    #[serde(default)]
    pub to: Option<String>,
    #[serde(default)]
    pub departure_time: Option<String>,
    #[serde(default)]
    pub arrival_time: Option<String>,
    #[serde(default, alias = "airline", alias = "operator")]
    pub carrier: Option<String>,
    #[serde(default, alias = "flightNumber", alias = "trainNumber")]
    pub reference: Option<String>,
    #[serde(default, alias = "durationMinutes")]
    pub duration: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct HotelNotes {
    #[serde(default, alias = "check_in")]
    pub check_in: Option<String>,
    #[serde(default, alias = "check_out")]
    pub check_out: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub confirmation: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct VisitNotes {
    #[serde(default, alias = "durationMinutes")]
    pub duration: Option<i64>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(
        default,
        alias = "closure_days",
        deserialize_with = "deserialize_closure_days",
        serialize_with = "serialize_closure_days"
    )]
    pub closure_days: Option<Vec<Weekday>>,
    #[serde(default)]
    pub raw: Option<String>,
}

impl ParsedNotes {
    /// Never fails: undecodable input is preserved verbatim.
    pub fn parse(notes: &str) -> ParsedNotes {
        match serde_json::from_str::<ParsedNotes>(notes) {
            Ok(parsed) => parsed,
            Err(error) => {
                tracing::debug!(
                    target: "app::schedule::notes",
                    error = %error,
                    "notes did not decode, keeping raw text"
                );
                ParsedNotes::Raw {
                    raw: notes.to_string(),
                }
            }
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            ParsedNotes::Flight(_) => "flight",
            ParsedNotes::Train(_) => "train",
            ParsedNotes::Hotel(_) => "hotel",
            ParsedNotes::Activity(_) => "activity",
            ParsedNotes::Place(_) => "place",
            ParsedNotes::Raw { .. } => "raw",
        }
    }

    pub fn is_raw(&self) -> bool {
        matches!(self, ParsedNotes::Raw { .. })
    }

    pub fn duration_minutes(&self) -> Option<i64> {
        match self {
            ParsedNotes::Flight(transit) | ParsedNotes::Train(transit) => transit.duration,
            ParsedNotes::Activity(visit) | ParsedNotes::Place(visit) => visit.duration,
            ParsedNotes::Hotel(_) | ParsedNotes::Raw { .. } => None,
        }
    }

    pub fn category(&self) -> Option<&str> {
        match self {
            ParsedNotes::Activity(visit) | ParsedNotes::Place(visit) => visit.category.as_deref(),
            _ => None,
        }
    }

    pub fn closure_days(&self) -> &[Weekday] {
        match self {
            ParsedNotes::Activity(visit) | ParsedNotes::Place(visit) => {
                visit.closure_days.as_deref().unwrap_or(&[])
            }
            _ => &[],
        }
    }

    pub fn raw_text(&self) -> Option<&str> {
        match self {
            ParsedNotes::Raw { raw } => Some(raw),
            ParsedNotes::Activity(visit) | ParsedNotes::Place(visit) => visit.raw.as_deref(),
            _ => None,
        }
    }
}
