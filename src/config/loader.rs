use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::config::types::Config;
use crate::storage::validate_key;

/// Why `config.toml` could not be turned into a usable [`Config`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/boop/config.toml` on Unix/macOS, or equivalent on
    /// other platforms via `dirs::config_dir()`. Falls back to the current
    /// directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("boop").join("config.toml")
    }

    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Loads configuration from `path`. A missing file is not an error: the
    /// app runs on defaults until the user writes one.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Rejects inverted reward bounds and session keys that cannot name a
    /// storage slot.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rewards.min_points > self.rewards.max_points {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "rewards.min_points ({}) exceeds rewards.max_points ({})",
                    self.rewards.min_points, self.rewards.max_points
                ),
            });
        }

        validate_key(&self.storage.session_key).map_err(|e| ConfigError::ValidationError {
            message: format!("storage.session_key: {}", e),
        })?;

        Ok(())
    }
}
