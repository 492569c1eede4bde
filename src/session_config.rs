//! Session configuration for the console front end.

use crate::games::tictactoe::SortOrder;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// How empty squares are drawn.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BoardStyle {
    /// Empty squares show their cell number (1-9).
    #[default]
    Numbered,
    /// Empty squares are left blank.
    Blank,
}

/// Configuration for one console session.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Initial order of the move list.
    #[serde(default)]
    sort_order: SortOrder,

    /// Log filter used when `RUST_LOG` is not set.
    #[serde(default = "default_log_level")]
    log_level: String,

    /// Annotate move-list entries with the mark and square played.
    #[serde(default = "default_show_hints")]
    show_hints: bool,

    /// Rendering of empty squares.
    #[serde(default)]
    board_style: BoardStyle,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_show_hints() -> bool {
    true
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            sort_order: SortOrder::default(),
            log_level: default_log_level(),
            show_hints: default_show_hints(),
            board_style: BoardStyle::default(),
        }
    }
}

impl SessionConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(sort_order = ?config.sort_order, board_style = ?config.board_style, "Config loaded successfully");
        Ok(config)
    }

    /// Loads from `path` when given, otherwise returns the defaults.
    #[instrument]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                debug!("No config file given, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Overrides the initial move-list order.
    #[must_use]
    pub fn with_sort_order(mut self, sort_order: SortOrder) -> Self {
        self.sort_order = sort_order;
        self
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
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config: SessionConfig = toml::from_str("").unwrap();
        assert_eq!(config, SessionConfig::default());
        assert_eq!(config.log_level(), "info");
        assert!(*config.show_hints());
    }

    #[test]
    fn test_partial_toml() {
        let config: SessionConfig =
            toml::from_str("sort_order = \"descending\"\nboard_style = \"blank\"\n").unwrap();
        assert_eq!(*config.sort_order(), SortOrder::Descending);
        assert_eq!(*config.board_style(), BoardStyle::Blank);
        assert_eq!(config.log_level(), "info");
    }

    #[test]
    fn test_load_without_path() {
        assert_eq!(SessionConfig::load(None).unwrap(), SessionConfig::default());
    }

    #[test]
    fn test_with_sort_order_overrides() {
        let config = SessionConfig::default().with_sort_order(SortOrder::Descending);
        assert_eq!(*config.sort_order(), SortOrder::Descending);
    }
}
