use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum WarningType {
    Conflict,
    Closure,
    Timing,
}

impl WarningType {
    pub fn as_str(self) -> &'static str {
        match self {
            WarningType::Conflict => "conflict",
            WarningType::Closure => "closure",
            WarningType::Timing => "timing",
        }
    }

    /// Position in the aggregated output; lower comes first.
    pub fn precedence(self) -> u8 {
        match self {
            WarningType::Conflict => 0,
            WarningType::Closure => 1,
            WarningType::Timing => 2,
        }
    }
}

impl std::fmt::Display for WarningType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum WarningSeverity {
    Low,
    Medium,
    High,
}

impl std::fmt::Display for WarningSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WarningSeverity::Low => write!(f, "low"),
            WarningSeverity::Medium => write!(f, "medium"),
            WarningSeverity::High => write!(f, "high"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Warning {
    pub id: String,
    #[serde(rename = "type")]
    pub warning_type: WarningType,
    pub severity: WarningSeverity,
    pub message: String,
    #[serde(default)]
    pub suggestion: Option<String>,
    #[serde(default)]
    pub day: Option<u32>,
    #[serde(default)]
    pub item_ids: Vec<String>,
}

impl Warning {
    pub fn involves_item(&self, item_id: &str) -> bool {
        self.item_ids.iter().any(|id| id == item_id)
    }
}

/// Identity of a warning. Built only from the day, the items involved and the
/// warning kind, so the same itinerary always yields the same id. Item ids are
/// escaped so that `-` only ever appears as a separator.
pub fn warning_id(warning_type: WarningType, qualifier: Option<&str>, day: u32, item_ids: &[&str]) -> String {
    let mut id = String::from(warning_type.as_str());
    if let Some(qualifier) = qualifier {
        id.push('-');
        id.push_str(qualifier);
    }
    id.push_str(&format!("-day{day}"));
    for item_id in item_ids {
        id.push('-');
        push_escaped(&mut id, item_id);
    }
    id
}

fn push_escaped(out: &mut String, item_id: &str) {
    for ch in item_id.chars() {
        match ch {
            '%' => out.push_str("%25"),
            '-' => out.push_str("%2D"),
            other => out.push(other),
        }
    }
}
