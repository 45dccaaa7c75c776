//! Game configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use noughts_engine::Player;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Settings for a terminal session.
///
/// Every field is optional in the file; command-line flags override
/// whatever the file says.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct AppConfig {
    /// Mark played by the automated opponent.
    #[serde(default = "default_automated")]
    automated: Player,

    /// Fixed seed for reproducible games.
    #[serde(default)]
    seed: Option<u64>,

    /// Show square indices on empty squares.
    #[serde(default = "default_show_indices")]
    show_indices: bool,
}

fn default_automated() -> Player {
    Player::O
}

fn default_show_indices() -> bool {
    true
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            automated: default_automated(),
            seed: None,
            show_indices: default_show_indices(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            ConfigError::new(format!("Failed to read config file: {}", e))
        })?;

        let config = Self::from_toml(&content)?;
        info!(automated = %config.automated, seed = ?config.seed, "Config loaded");
        Ok(config)
    }

    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| {
            ConfigError::new(format!("Failed to parse config: {}", e))
        })
    }

    /// Applies command-line overrides.
    pub fn with_overrides(mut self, automated: Option<Player>, seed: Option<u64>) -> Self {
        if let Some(automated) = automated {
            self.automated = automated;
        }
        if seed.is_some() {
            self.seed = seed;
        }
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
    fn test_empty_file_uses_defaults() {
        assert_eq!(AppConfig::from_toml("").unwrap(), AppConfig::default());
    }

    #[test]
    fn test_overrides_win() {
        let config = AppConfig::from_toml("automated = \"X\"\nseed = 3\n")
            .unwrap()
            .with_overrides(Some(Player::O), None);
        assert_eq!(*config.automated(), Player::O);
        assert_eq!(*config.seed(), Some(3));
    }

    #[test]
    fn test_bad_mark_rejected() {
        let err = AppConfig::from_toml("automated = \"Z\"").unwrap_err();
        assert!(err.message.contains("Failed to parse config"));
    }
}
