//! Restaurant configuration, read from TOML.
//!
//! Every section and field is optional:
//!
//! ```toml
//! [storage]
//! data_dir = "data"
//!
//! [files]
//! menu = "menu.txt"
//! events = "events.txt"
//!
//! [staff]
//! servers = ["server1", "server2", "server3"]
//! cooks = ["cook1", "cook2", "cook3"]
//!
//! [actors]
//! channel_capacity = 32
//! ```

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;
use tokio::fs;

/// Errors that can occur while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Configuration error: {0}")]
    Parse(String),
    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        ConfigError::Parse(err.message().to_string())
    }
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct RestaurantConfig {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub files: FilesConfig,
    #[serde(default)]
    pub staff: StaffConfig,
    #[serde(default)]
    pub actors: ActorsConfig,
}

/// Where the inventory tables live.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct StorageConfig {
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct FilesConfig {
    #[serde(default = "default_menu")]
    pub menu: PathBuf,
    #[serde(default = "default_events")]
    pub events: PathBuf,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct StaffConfig {
    #[serde(default = "default_servers")]
    pub servers: Vec<String>,
    #[serde(default = "default_cooks")]
    pub cooks: Vec<String>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ActorsConfig {
    /// Capacity of each ledger actor's request channel.
    #[serde(default = "default_channel_capacity")]
    pub channel_capacity: usize,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
        }
    }
}

impl Default for FilesConfig {
    fn default() -> Self {
        Self {
            menu: default_menu(),
            events: default_events(),
        }
    }
}

impl Default for StaffConfig {
    fn default() -> Self {
        Self {
            servers: default_servers(),
            cooks: default_cooks(),
        }
    }
}

impl Default for ActorsConfig {
    fn default() -> Self {
        Self {
            channel_capacity: default_channel_capacity(),
        }
    }
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("data")
}

fn default_menu() -> PathBuf {
    PathBuf::from("menu.txt")
}

fn default_events() -> PathBuf {
    PathBuf::from("events.txt")
}

fn default_servers() -> Vec<String> {
    (1..=3).map(|n| format!("server{n}")).collect()
}

fn default_cooks() -> Vec<String> {
    (1..=3).map(|n| format!("cook{n}")).collect()
}

fn default_channel_capacity() -> usize {
    32
}

impl RestaurantConfig {
    /// Reads a TOML file. A missing file yields the defaults.
    pub async fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        match fs::read_to_string(path).await {
            Ok(text) => text.parse(),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::info!(path = %path.display(), "No config file, using defaults");
                Ok(Self::default())
            }
            Err(e) => Err(e.into()),
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.actors.channel_capacity == 0 {
            return Err(ConfigError::Validation(
                "actors.channel_capacity must be at least 1".into(),
            ));
        }
        if let Some(id) = self
            .staff
            .servers
            .iter()
            .find(|id| self.staff.cooks.contains(id))
        {
            return Err(ConfigError::Validation(format!(
                "`{id}` is listed as both server and cook"
            )));
        }
        Ok(())
    }
}

impl FromStr for RestaurantConfig {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let config: RestaurantConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }
}
