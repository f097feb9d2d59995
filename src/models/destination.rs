use std::str::FromStr;

use chrono::Weekday;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value as JsonValue;

use crate::models::itinerary::ItineraryItem;
use crate::models::notes::ParsedNotes;

/// Reference data for a destination, as returned by the catalogue lookup.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct DestinationMeta {
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(
        default,
        alias = "closure_days",
        deserialize_with = "deserialize_closure_days",
        serialize_with = "serialize_closure_days"
    )]
    pub closure_days: Option<Vec<Weekday>>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
}

impl DestinationMeta {
    pub fn closed_on(days: &[Weekday]) -> Self {
        Self {
            closure_days: Some(days.to_vec()),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EnrichedItem {
    #[serde(flatten)]
    pub item: ItineraryItem,
    pub parsed_notes: Option<ParsedNotes>,
    pub destination_resolved: bool,
    pub category: Option<String>,
    pub rating: Option<f64>,
    #[serde(serialize_with = "serialize_weekdays")]
    pub closure_days: Vec<Weekday>,
    pub address: Option<String>,
    pub website: Option<String>,
    pub duration_minutes: Option<i64>,
}

impl EnrichedItem {
    pub fn id(&self) -> &str {
        &self.item.id
    }

    pub fn title(&self) -> &str {
        &self.item.title
    }
}

/// Accepts English names (full or three-letter, any case) and numeric
/// indices where 0 and 7 are Sunday.
pub fn parse_weekday_value(value: &JsonValue) -> Option<Weekday> {
    match value {
        JsonValue::String(raw) => {
            let trimmed = raw.trim();
            if let Ok(index) = trimmed.parse::<i64>() {
                return weekday_from_index(index);
            }
            Weekday::from_str(trimmed).ok()
        }
        JsonValue::Number(number) => number.as_i64().and_then(weekday_from_index),
        _ => None,
    }
}

fn weekday_from_index(index: i64) -> Option<Weekday> {
    match index {
        0 | 7 => Some(Weekday::Sun),
        1 => Some(Weekday::Mon),
        2 => Some(Weekday::Tue),
        3 => Some(Weekday::Wed),
        4 => Some(Weekday::Thu),
        5 => Some(Weekday::Fri),
        6 => Some(Weekday::Sat),
        _ => None,
    }
}

pub fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Unrecognised entries are dropped one by one rather than failing the
/// whole record.
pub fn deserialize_closure_days<'de, D>(deserializer: D) -> Result<Option<Vec<Weekday>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<JsonValue>::deserialize(deserializer)?;
    let days = match raw {
        Some(JsonValue::Array(values)) => values.iter().filter_map(parse_weekday_value).collect(),
        Some(JsonValue::Null) | None => return Ok(None),
        Some(single) => parse_weekday_value(&single).into_iter().collect(),
    };
    Ok(Some(days))
}

pub fn serialize_closure_days<S>(days: &Option<Vec<Weekday>>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match days {
        Some(days) => serialize_weekdays(days, serializer),
        None => serializer.serialize_none(),
    }
}

pub fn serialize_weekdays<S>(days: &[Weekday], serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_seq(days.iter().map(|day| weekday_name(*day)))
}
