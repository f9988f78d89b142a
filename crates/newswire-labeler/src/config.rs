//! Configuration for the labeler

use serde::{Deserialize, Serialize};

/// Configuration for label alignment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LabelerConfig {
    /// Calendar days between a record's publication date and the date whose
    /// price-change label it receives
    pub window_days: u32,

    /// Format of the export's publication-date field, in chrono strftime
    /// syntax (Factiva prints e.g. `01 January 2022`)
    pub date_format: String,

    /// Roll target dates falling on a weekend forward to the next Monday
    ///
    /// Set false to reproduce the no-op behavior of the exporter this was
    /// reverse-engineered from.
    #[serde(default = "default_adjust_weekends")]
    pub adjust_weekends: bool,
}

fn default_adjust_weekends() -> bool {
    true
}

impl Default for LabelerConfig {
    fn default() -> Self {
        Self {
            window_days: 30,
            date_format: "%d %B %Y".to_string(),
            adjust_weekends: true,
        }
    }
}

impl LabelerConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.window_days == 0 {
            return Err("window_days must be greater than 0".to_string());
        }
        if self.date_format.is_empty() {
            return Err("date_format must not be empty".to_string());
        }
        Ok(())
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}
