//! Configuration loaded from an optional TOML file.

use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Config file read when none is given on the command line.
pub const DEFAULT_CONFIG_PATH: &str = "strictly_boxes.toml";

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[setters(prefix = "with_")]
#[serde(default)]
pub struct Config {
    /// Logging options.
    log: LogConfig,
    /// Terminal display options.
    display: DisplayConfig,
}

/// Logging options.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[setters(prefix = "with_", into)]
#[serde(default)]
pub struct LogConfig {
    /// Filter directive used when `RUST_LOG` is unset.
    filter: String,
    /// File receiving logs while the terminal UI owns the screen.
    file: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
            file: "strictly_boxes.log".to_string(),
        }
    }
}

/// Terminal display options.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[setters(prefix = "with_")]
#[serde(default)]
pub struct DisplayConfig {
    /// Show 1-9 in empty cells.
    show_cell_numbers: bool,
    /// Show the celebration banner after a win.
    celebrate: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            show_cell_numbers: true,
            celebrate: true,
        }
    }
}

impl Config {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(?config, "Config loaded successfully");
        Ok(config)
    }

    /// Loads configuration, falling back to defaults when an optional file is absent.
    ///
    /// A `required` file that does not exist is an error.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load(path: impl AsRef<Path>, required: bool) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !required && !path.exists() {
            debug!("No config file, using defaults");
            return Ok(Self::default());
        }
        Self::from_file(path)
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.log().filter(), "info");
        assert_eq!(config.log().file(), "strictly_boxes.log");
        assert!(*config.display().show_cell_numbers());
        assert!(*config.display().celebrate());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: Config = toml::from_str("[display]\ncelebrate = false\n").unwrap();
        assert!(!*config.display().celebrate());
        assert!(*config.display().show_cell_numbers());
        assert_eq!(config.log(), &LogConfig::default());
    }

    #[test]
    fn test_setters() {
        let config = Config::default()
            .with_display(DisplayConfig::default().with_show_cell_numbers(false))
            .with_log(LogConfig::default().with_filter("debug"));
        assert!(!*config.display().show_cell_numbers());
        assert_eq!(config.log().filter(), "debug");
    }
}
