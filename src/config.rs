//! Game configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tictactoe_core::{EngineConfig, Player, Scoring};
use tracing::{debug, info, instrument};

/// Which side the human plays, who opens, and how the computer scores.
///
/// ```toml
/// human = "O"
/// first = "X"
/// scoring = "depth"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct AppConfig {
    /// Mark played by the human.
    #[serde(default = "default_human")]
    human: Player,

    /// Mark that moves first.
    #[serde(default = "default_first")]
    first: Player,

    /// Minimax scoring rule.
    #[serde(default)]
    scoring: Scoring,
}

fn default_human() -> Player {
    Player::X
}

fn default_first() -> Player {
    Player::X
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            human: default_human(),
            first: default_first(),
            scoring: Scoring::default(),
        }
    }
}

impl AppConfig {
    /// Creates a configuration from explicit values.
    pub fn new(human: Player, first: Player, scoring: Scoring) -> Self {
        Self {
            human,
            first,
            scoring,
        }
    }

    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(
            human = %config.human,
            first = %config.first,
            scoring = %config.scoring,
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Loads the file if it exists, otherwise falls back to defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Replaces any value given on the command line.
    pub fn with_overrides(
        mut self,
        human: Option<Player>,
        first: Option<Player>,
        scoring: Option<Scoring>,
    ) -> Self {
        if let Some(human) = human {
            self.human = human;
        }
        if let Some(first) = first {
            self.first = first;
        }
        if let Some(scoring) = scoring {
            self.scoring = scoring;
        }
        self
    }

    /// Engine settings for a new game.
    pub fn engine_config(&self) -> EngineConfig {
        EngineConfig {
            human: self.human,
            first: self.first,
            scoring: self.scoring,
        }
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
    fn test_defaults_match_engine_defaults() {
        assert_eq!(AppConfig::default().engine_config(), EngineConfig::default());
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: AppConfig = toml::from_str("human = \"O\"").unwrap();
        assert_eq!(*config.human(), Player::O);
        assert_eq!(*config.first(), Player::X);
        assert_eq!(*config.scoring(), Scoring::Outcome);
    }

    #[test]
    fn test_scoring_names() {
        let config: AppConfig = toml::from_str("scoring = \"depth\"").unwrap();
        assert_eq!(*config.scoring(), Scoring::DepthBiased);
        assert!(toml::from_str::<AppConfig>("scoring = \"fast\"").is_err());
    }

    #[test]
    fn test_overrides_replace_only_given_values() {
        let config = AppConfig::default().with_overrides(None, Some(Player::O), None);
        assert_eq!(*config.human(), Player::X);
        assert_eq!(*config.first(), Player::O);
    }

    #[test]
    fn test_error_records_location() {
        let err = ConfigError::new("bad".to_string());
        assert!(err.file.ends_with("config.rs"));
        assert!(err.to_string().starts_with("Config error: bad at "));
    }
}
