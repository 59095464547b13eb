//! Configuration for the trip store

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Trip store configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Path of the JSON file holding the persisted trip list
    pub data_file: PathBuf,

    /// Write the file after every mutation, the same save-on-change
    /// behavior the web app has; disable for batch imports
    pub autosave: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from("./data/trips.json"),
            autosave: true,
        }
    }
}

impl Config {
    /// Load from file
    pub fn from_file(path: impl AsRef<std::path::Path>) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| crate::Error::Config(format!("Failed to parse config: {}", e)))?;
        Ok(config)
    }

    /// Load from environment variables
    pub fn from_env() -> crate::Result<Self> {
        let mut config = Config::default();

        if let Ok(path) = std::env::var("SPLITEASY_DATA_FILE") {
            config.data_file = PathBuf::from(path);
        }

        if let Ok(autosave) = std::env::var("SPLITEASY_AUTOSAVE") {
            config.autosave = autosave != "0" && !autosave.eq_ignore_ascii_case("false");
        }

        Ok(config)
    }
}
