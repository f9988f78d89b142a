//! Configuration for the parser

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Field codes recognized by the Factiva export format
const FACTIVA_KEYS: &[&str] = &[
    "BY", "WC", "PD", "ET", "SN", "SC", "LA", "LP", "CO", "IN", "NS", "RE", "IPD", "IPC", "PUB",
    "AN",
];

/// Configuration for the parser
///
/// The marker token and the recognized-key set are export-format parameters,
/// not constants; the defaults match the Factiva export.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParserConfig {
    /// Marker token opening each record; also the synthetic key under which
    /// headline text preceding the first recognized code is accumulated
    pub headline_marker: String,

    /// Field codes recognized as the start of a new field
    pub recognized_keys: BTreeSet<String>,

    /// Commit the still-pending field after a chunk's last line
    ///
    /// The exporter this format was reverse-engineered from drops the final
    /// field of every record; set false to reproduce that.
    #[serde(default = "default_flush_trailing")]
    pub flush_trailing_field: bool,
}

fn default_flush_trailing() -> bool {
    true
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            headline_marker: "HD".to_string(),
            recognized_keys: FACTIVA_KEYS.iter().map(|k| k.to_string()).collect(),
            flush_trailing_field: true,
        }
    }
}

impl ParserConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.headline_marker.is_empty() {
            return Err("headline_marker must not be empty".to_string());
        }
        if self.recognized_keys.is_empty() {
            return Err("recognized_keys must not be empty".to_string());
        }
        if self.recognized_keys.contains(&self.headline_marker) {
            return Err(format!(
                "headline_marker '{}' must not appear in recognized_keys",
                self.headline_marker
            ));
        }
        if self.recognized_keys.iter().any(|k| k.is_empty()) {
            return Err("recognized_keys must not contain empty codes".to_string());
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
