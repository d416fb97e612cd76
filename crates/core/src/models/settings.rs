use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use super::range::{end_of_day, hhmm, start_of_day, TimeRangePreset};
use crate::errors::CoreError;

/// Dashboard configuration.
///
/// Every field has a default, so a partial JSON document is enough.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Preset active when the dashboard first renders
    pub default_preset: TimeRangePreset,

    /// Time of day applied to a freshly picked custom `from` date ("HH:MM")
    #[serde(with = "hhmm")]
    pub default_from_time: NaiveTime,

    /// Time of day applied to a freshly picked custom `to` date ("HH:MM")
    #[serde(with = "hhmm")]
    pub default_to_time: NaiveTime,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_preset: TimeRangePreset::Last30Days,
            default_from_time: start_of_day(),
            default_to_time: end_of_day(),
        }
    }
}

impl Settings {
    /// Parse and validate settings from JSON.
    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String, CoreError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| CoreError::Serialization(format!("Failed to serialize settings: {e}")))
    }

    /// Reject settings that could never produce a usable selection.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.default_preset == TimeRangePreset::Unrecognized {
            return Err(CoreError::InvalidSettings(
                "default_preset must be one of today, last7days, last30days, lastyear, custom"
                    .to_string(),
            ));
        }
        if self.default_from_time > self.default_to_time {
            return Err(CoreError::InvalidSettings(format!(
                "default_from_time ({}) must not be after default_to_time ({})",
                self.default_from_time.format("%H:%M"),
                self.default_to_time.format("%H:%M"),
            )));
        }
        Ok(())
    }
}
