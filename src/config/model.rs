//! Configuration data model.
//!
//! All structs derive `Serialize`/`Deserialize` for TOML persistence.
//! Every field has a sensible default so the application works out of the box.

use crate::session::{Picture, MAX_FACTOR, MIN_FACTOR};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{field} must be between 1 and 12, got {value}")]
    FactorOutOfRange { field: &'static str, value: u8 },
    #[error("ui.max_scrollback must be at least 1")]
    ZeroScrollback,
}

/// Root application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub practice: PracticeConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            practice: PracticeConfig::default(),
            ui: UiConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl AppConfig {
    /// Reject out-of-range factors before they can reach the session.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("practice.default_rows", self.practice.default_rows),
            ("practice.default_cols", self.practice.default_cols),
        ] {
            if !(MIN_FACTOR..=MAX_FACTOR).contains(&value) {
                return Err(ConfigError::FactorOutOfRange { field, value });
            }
        }
        if self.ui.max_scrollback == 0 {
            return Err(ConfigError::ZeroScrollback);
        }
        Ok(())
    }
}

/// Starting values for the problem selectors.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PracticeConfig {
    #[serde(default = "default_rows")]
    pub default_rows: u8,
    #[serde(default = "default_cols")]
    pub default_cols: u8,
    #[serde(default)]
    pub default_picture: Picture,
}

impl Default for PracticeConfig {
    fn default() -> Self {
        Self {
            default_rows: default_rows(),
            default_cols: default_cols(),
            default_picture: Picture::default(),
        }
    }
}

fn default_rows() -> u8 {
    3
}

fn default_cols() -> u8 {
    4
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_timestamp_format")]
    pub timestamp_format: String,
    #[serde(default = "default_max_scrollback")]
    pub max_scrollback: usize,
    #[serde(default = "default_bell_on_success")]
    pub bell_on_success: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            timestamp_format: default_timestamp_format(),
            max_scrollback: default_max_scrollback(),
            bell_on_success: default_bell_on_success(),
        }
    }
}

fn default_timestamp_format() -> String {
    "%H:%M:%S".to_string()
}

fn default_max_scrollback() -> usize {
    200
}

fn default_bell_on_success() -> bool {
    true
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default = "default_log_dir")]
    pub log_dir: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            log_dir: default_log_dir(),
        }
    }
}

fn default_log_dir() -> String {
    "~/.local/state/gugudan".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.practice.default_rows, 3);
        assert_eq!(config.practice.default_cols, 4);
        assert_eq!(config.practice.default_picture, Picture::Apple);
    }

    #[test]
    fn test_empty_toml_fills_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert!(config.validate().is_ok());
        assert!(config.ui.bell_on_success);
        assert!(!config.logging.enabled);
    }

    #[test]
    fn test_out_of_range_factor_rejected() {
        let config: AppConfig = toml::from_str("[practice]\ndefault_rows = 13\n").unwrap();
        assert!(config.validate().is_err());

        let config: AppConfig = toml::from_str("[practice]\ndefault_cols = 0\n").unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_picture_name_parses() {
        let config: AppConfig =
            toml::from_str("[practice]\ndefault_picture = \"butterfly\"\n").unwrap();
        assert_eq!(config.practice.default_picture, Picture::Butterfly);
    }
}
