use serde::{Deserialize, Serialize};

pub const DEFAULT_DURATION_MINUTES: i64 = 60;
pub const DEFAULT_PACKED_DAY_THRESHOLD: usize = 6;
pub const DEFAULT_MAX_WARNINGS: usize = 10;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct EngineSettings {
    /// Used when an item's notes carry no usable duration.
    pub default_duration_minutes: i64,
    /// A day with more items than this is reported as packed.
    pub packed_day_threshold: usize,
    pub max_warnings: usize,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            default_duration_minutes: DEFAULT_DURATION_MINUTES,
            packed_day_threshold: DEFAULT_PACKED_DAY_THRESHOLD,
            max_warnings: DEFAULT_MAX_WARNINGS,
        }
    }
}
