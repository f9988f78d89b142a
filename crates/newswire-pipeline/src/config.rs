//! Configuration for the pipeline

use newswire_labeler::LabelerConfig;
use newswire_parser::ParserConfig;
use serde::{Deserialize, Serialize};

/// Configuration for the batch pipeline
///
/// Composes the parser and labeler configurations with the encoding
/// settings used when examples are prepared for a model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Parser configuration (marker token, recognized keys)
    #[serde(default)]
    pub parser: ParserConfig,

    /// Labeler configuration (window, date format)
    #[serde(default)]
    pub labeler: LabelerConfig,

    /// Maximum encoded sequence length in tokens
    pub max_seq_length: usize,

    /// Drop examples whose encoded length exceeds `max_seq_length` instead
    /// of truncating them
    #[serde(default)]
    pub skip_overlength: bool,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            parser: ParserConfig::default(),
            labeler: LabelerConfig::default(),
            max_seq_length: 2000,
            skip_overlength: false,
        }
    }
}

impl PipelineConfig {
    /// Validate the configuration and all its sections
    pub fn validate(&self) -> Result<(), String> {
        self.parser.validate()?;
        self.labeler.validate()?;
        if self.max_seq_length == 0 {
            return Err("max_seq_length must be greater than 0".to_string());
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = PipelineConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.max_seq_length, 2000);
        assert!(!config.skip_overlength);
    }

    #[test]
    fn test_invalid_section_fails_validation() {
        let mut config = PipelineConfig::default();
        config.labeler.window_days = 0;
        assert!(config.validate().is_err());

        let mut config = PipelineConfig::default();
        config.max_seq_length = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_toml_round_trip() {
        let config = PipelineConfig::default();
        let parsed = PipelineConfig::from_toml(&config.to_toml().unwrap()).unwrap();

        assert_eq!(config.max_seq_length, parsed.max_seq_length);
        assert_eq!(config.labeler.window_days, parsed.labeler.window_days);
        assert_eq!(config.parser.headline_marker, parsed.parser.headline_marker);
    }

    #[test]
    fn test_sections_default_when_absent() {
        let parsed = PipelineConfig::from_toml("max_seq_length = 512\n").unwrap();
        assert_eq!(parsed.max_seq_length, 512);
        assert_eq!(parsed.labeler.window_days, 30);
        assert_eq!(parsed.parser.headline_marker, "HD");
    }
}
