use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::points::{MAX_SHARE_POINTS, MIN_SHARE_POINTS};
use crate::session::SESSION_STORAGE_KEY;

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub network: NetworkConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub rewards: RewardsConfig,
}

/// Simulated backend round trip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkConfig {
    /// Delay applied to every async store action (default: 1000).
    #[serde(default = "default_latency_ms")]
    pub latency_ms: u64,
}

impl NetworkConfig {
    pub fn latency(&self) -> Duration {
        Duration::from_millis(self.latency_ms)
    }
}

/// Where the session snapshot lives.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Directory holding storage slots (default: platform data dir + `boop`).
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    /// Slot name for the session snapshot.
    #[serde(default = "default_session_key")]
    pub session_key: String,
}

/// Reward amount bounds for a share, both inclusive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RewardsConfig {
    #[serde(default = "default_min_points")]
    pub min_points: u32,
    #[serde(default = "default_max_points")]
    pub max_points: u32,
}

fn default_latency_ms() -> u64 {
    1000
}

fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("boop")
}

fn default_session_key() -> String {
    SESSION_STORAGE_KEY.to_string()
}

fn default_min_points() -> u32 {
    MIN_SHARE_POINTS
}

fn default_max_points() -> u32 {
    MAX_SHARE_POINTS
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            latency_ms: default_latency_ms(),
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            session_key: default_session_key(),
        }
    }
}

impl Default for RewardsConfig {
    fn default() -> Self {
        Self {
            min_points: default_min_points(),
            max_points: default_max_points(),
        }
    }
}
