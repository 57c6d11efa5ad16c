// Configuration module for reading Game.toml
// Holds every tunable game and search parameter; the engine takes these values as-is.

use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Errors raised while loading or validating configuration
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Main configuration structure containing all tunable parameters
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Config {
    pub board: BoardConfig,
    pub rules: RulesConfig,
    pub search: SearchConfig,
    pub pacing: PacingConfig,
    pub debug: DebugConfig,
}

/// Board shape and how many ladders/snakes to place
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct BoardConfig {
    /// Rows and columns (the board is square)
    pub size: i32,
    pub ladders: u32,
    pub snakes: u32,
}

/// Turn rules
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct RulesConfig {
    pub turn_limit: i32,
    /// Diagonal moves unlock once every this many player turns
    pub diagonal_period: i32,
}

/// Search parameters
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct SearchConfig {
    pub max_depth: i32,
}

/// Delay before each automated move
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct PacingConfig {
    pub turn_delay_ms: u64,
}

/// Debug configuration
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct DebugConfig {
    pub enabled: bool,
    pub log_file_path: String,
}

impl Config {
    /// Loads configuration from a TOML file
    ///
    /// # Arguments
    /// * `path` - Path to the Game.toml configuration file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from TOML text
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(contents)?)
    }

    /// Loads default configuration from Game.toml in the project root
    pub fn load_default() -> Result<Self, ConfigError> {
        Self::from_file("Game.toml")
    }

    /// Creates a configuration with hardcoded default values as fallback
    /// This should match the constants defined in Game.toml
    pub fn default_hardcoded() -> Self {
        Config {
            board: BoardConfig {
                size: 7,
                ladders: 2,
                snakes: 3,
            },
            rules: RulesConfig {
                turn_limit: 12,
                diagonal_period: 3,
            },
            search: SearchConfig { max_depth: 10 },
            pacing: PacingConfig { turn_delay_ms: 1000 },
            debug: DebugConfig {
                enabled: false,
                log_file_path: "game_debug.jsonl".to_string(),
            },
        }
    }

    /// Loads configuration from Game.toml, falling back to hardcoded defaults on error
    pub fn load_or_default() -> Self {
        match Self::load_default() {
            Ok(config) => config,
            Err(e) => {
                log::warn!("Using hardcoded defaults: {}", e);
                Self::default_hardcoded()
            }
        }
    }

    /// Enforces the minimum values a playable game needs
    pub fn validate(&self) -> Result<(), ConfigError> {
        fn at_least(field: &'static str, value: i64, min: i64) -> Result<(), ConfigError> {
            if value < min {
                return Err(ConfigError::Invalid {
                    field,
                    reason: format!("must be at least {}, got {}", min, value),
                });
            }
            Ok(())
        }

        at_least("board.size", self.board.size as i64, 3)?;
        at_least("board.snakes", self.board.snakes as i64, 1)?;
        at_least("rules.turn_limit", self.rules.turn_limit as i64, 3)?;
        at_least("rules.diagonal_period", self.rules.diagonal_period as i64, 1)?;
        at_least("search.max_depth", self.search.max_depth as i64, 1)?;
        Ok(())
    }
}
