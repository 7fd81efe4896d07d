//! # Configuration Module
//!
//! Handles loading and validating configuration from TOML files.

use serde::de::Error;
use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::error::Result;

/// Main configuration structure
#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub time: TimeConfig,

    #[serde(default)]
    pub payload: PayloadConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

/// Local-time derivation settings
#[derive(Debug, Deserialize, Clone)]
pub struct TimeConfig {
    /// UTC offset applied to the transmitted time, in hours
    #[serde(default = "default_utc_offset_hours")]
    pub utc_offset_hours: i32,

    /// Label printed next to the local time
    #[serde(default = "default_zone_label")]
    pub zone_label: String,
}

/// Payload interpretation settings
#[derive(Debug, Deserialize, Clone)]
pub struct PayloadConfig {
    /// ASCII header marking a RockBLOCK payload
    #[serde(default = "default_expected_header")]
    pub expected_header: String,
}

/// Output settings for the prompt loop
#[derive(Debug, Deserialize, Clone)]
pub struct OutputConfig {
    /// Either "text" (reference rendering) or "json" (one record per line)
    #[serde(default = "default_output_format")]
    pub format: String,
}

// Default value functions
fn default_utc_offset_hours() -> i32 {
    -7 // Arizona, no DST
}
fn default_zone_label() -> String {
    "ARIZONA".to_string()
}
fn default_expected_header() -> String {
    "RB".to_string()
}
fn default_output_format() -> String {
    "text".to_string()
}

impl Default for TimeConfig {
    fn default() -> Self {
        TimeConfig {
            utc_offset_hours: default_utc_offset_hours(),
            zone_label: default_zone_label(),
        }
    }
}

impl Default for PayloadConfig {
    fn default() -> Self {
        PayloadConfig {
            expected_header: default_expected_header(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        OutputConfig {
            format: default_output_format(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - File cannot be read
    /// - TOML parsing fails
    /// - Validation fails
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values
    fn validate(&self) -> Result<()> {
        if self.time.utc_offset_hours < -12 || self.time.utc_offset_hours > 14 {
            return Err(crate::error::DecoderError::Config(
                toml::de::Error::custom("utc_offset_hours must be between -12 and 14"),
            ));
        }

        if self.time.zone_label.is_empty() {
            return Err(crate::error::DecoderError::Config(
                toml::de::Error::custom("zone_label cannot be empty"),
            ));
        }

        if self.payload.expected_header.len() != 2
            || !self.payload.expected_header.is_ascii()
        {
            return Err(crate::error::DecoderError::Config(
                toml::de::Error::custom("expected_header must be exactly 2 ASCII characters"),
            ));
        }

        if self.output.format != "text" && self.output.format != "json" {
            return Err(crate::error::DecoderError::Config(
                toml::de::Error::custom("output format must be \"text\" or \"json\""),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.time.utc_offset_hours, -7);
        assert_eq!(config.time.zone_label, "ARIZONA");
        assert_eq!(config.payload.expected_header, "RB");
        assert_eq!(config.output.format, "text");
    }

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.time.utc_offset_hours, -7);
        assert_eq!(config.output.format, "text");
    }

    #[test]
    fn test_partial_toml_overrides() {
        let config: Config = toml::from_str(
            r#"
            [time]
            utc_offset_hours = -5

            [output]
            format = "json"
            "#,
        )
        .unwrap();
        assert_eq!(config.time.utc_offset_hours, -5);
        assert_eq!(config.time.zone_label, "ARIZONA");
        assert_eq!(config.output.format, "json");
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[time]\nutc_offset_hours = 0\nzone_label = \"UTC\"").unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.time.utc_offset_hours, 0);
        assert_eq!(config.time.zone_label, "UTC");
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let result = Config::load("/definitely/not/here.toml");
        assert!(matches!(
            result,
            Err(crate::error::DecoderError::Io(_))
        ));
    }

    #[test]
    fn test_validate_rejects_bad_offset() {
        let config: Config = toml::from_str("[time]\nutc_offset_hours = -20").unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_bad_header() {
        let config: Config = toml::from_str("[payload]\nexpected_header = \"ROCK\"").unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_unknown_format() {
        let config: Config = toml::from_str("[output]\nformat = \"xml\"").unwrap();
        assert!(config.validate().is_err());
    }
}
