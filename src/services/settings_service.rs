use std::path::Path;

use serde_json::json;
use tracing::info;

use crate::error::{AppError, AppResult};
use crate::models::settings::EngineSettings;
use crate::services::schedule_utils::MAX_DURATION_MINUTES;

/// Loads and validates [`EngineSettings`]. Missing keys take their defaults.
pub struct SettingsService;

impl SettingsService {
    pub fn from_yaml_str(raw: &str) -> AppResult<EngineSettings> {
        // An empty document deserializes to unit, not a map.
        if raw.trim().is_empty() {
            return Ok(EngineSettings::default());
        }
        let settings: EngineSettings = serde_yaml::from_str(raw)?;
        Self::validate(&settings)?;
        Ok(settings)
    }

    pub fn from_json_str(raw: &str) -> AppResult<EngineSettings> {
        let settings: EngineSettings = serde_json::from_str(raw)?;
        Self::validate(&settings)?;
        Ok(settings)
    }

    /// Format is chosen by extension: `.yaml`, `.yml` or `.json`.
    pub fn load(path: &Path) -> AppResult<EngineSettings> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);
        let raw = std::fs::read_to_string(path)?;

        let settings = match extension.as_deref() {
            Some("yaml") | Some("yml") => Self::from_yaml_str(&raw)?,
            Some("json") => Self::from_json_str(&raw)?,
            _ => {
                return Err(AppError::config(format!(
                    "unsupported settings file: {}",
                    path.display()
                )))
            }
        };

        info!(
            target: "app::schedule::settings",
            path = %path.display(),
            default_duration_minutes = settings.default_duration_minutes,
            packed_day_threshold = settings.packed_day_threshold,
            max_warnings = settings.max_warnings,
            "loaded engine settings"
        );
        Ok(settings)
    }

    pub fn validate(settings: &EngineSettings) -> AppResult<()> {
        if !(1..=MAX_DURATION_MINUTES).contains(&settings.default_duration_minutes) {
            return Err(AppError::validation_with_details(
                "default duration must be between 1 and 1440 minutes",
                json!({ "defaultDurationMinutes": settings.default_duration_minutes }),
            ));
        }
        if settings.packed_day_threshold == 0 {
            return Err(AppError::validation(
                "packed day threshold must be at least 1",
            ));
        }
        if settings.max_warnings == 0 {
            return Err(AppError::validation("max warnings must be at least 1"));
        }
        Ok(())
    }
}
