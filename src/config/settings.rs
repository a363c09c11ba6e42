use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use thiserror::Error;

use crate::graph::state::DEFAULT_AUTHOR;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Failed to serialize config: {0}")]
    SerializeError(#[from] toml::ser::Error),

    #[error("Config directory not found")]
    DirectoryNotFound,

    #[error("Invalid config value: {0}")]
    InvalidValue(String),
}

/// Which way the graph panel grows.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Vertical,
    Horizontal,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Config {
    pub ui: UIConfig,
    pub behavior: BehaviorConfig,
    pub commit: CommitConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct UIConfig {
    pub orientation: Orientation,
    pub max_console_lines: usize,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct BehaviorConfig {
    pub log_commands: bool,
    pub show_help_on_start: bool,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct CommitConfig {
    /// Author recorded on every commit in the sandbox graph.
    pub author: String,
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf, ConfigError> {
        let home = std::env::var("HOME").map_err(|_| ConfigError::DirectoryNotFound)?;
        Ok(PathBuf::from(home).join(".config").join("gitsketch"))
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::config_path()?;

        if !path.exists() {
            return Err(ConfigError::ReadError(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "Config file not found",
            )));
        }

        let contents = fs::read_to_string(&path)?;
        let config: Config = toml::from_str(&contents)?;

        config.validate()?;

        Ok(config)
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<(), ConfigError> {
        self.validate()?;

        let dir = Self::config_dir()?;
        fs::create_dir_all(&dir)?;

        let path = Self::config_path()?;
        let contents = toml::to_string_pretty(self)?;

        fs::write(&path, contents)?;

        Ok(())
    }

    /// Create default configuration
    pub fn default_config() -> Self {
        Config {
            ui: UIConfig {
                orientation: Orientation::Vertical,
                max_console_lines: 500,
            },
            behavior: BehaviorConfig {
                log_commands: true,
                show_help_on_start: true,
            },
            commit: CommitConfig {
                author: DEFAULT_AUTHOR.to_string(),
            },
        }
    }

    /// Validate configuration values
    fn validate(&self) -> Result<(), ConfigError> {
        if self.ui.max_console_lines == 0 {
            return Err(ConfigError::InvalidValue(
                "max_console_lines must be greater than 0".to_string(),
            ));
        }

        if self.commit.author.trim().is_empty() {
            return Err(ConfigError::InvalidValue(
                "commit author must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::default_config()
    }
}
