//! Configuration management for tasker.
//!
//! The only configurable module is the task store: connection string,
//! database name and collection name. Values are resolved in layers, later
//! layers winning:
//!
//! 1. built-in defaults (`mongodb://localhost:27017`, `tasker`, `task`)
//! 2. the `store` section of `config.json` in the per-user data directory
//! 3. `TASKER_URI`, `TASKER_DATABASE` and `TASKER_COLLECTION` environment
//!    variables (a `.env` file is loaded into the environment at startup)
//! 4. the global `--uri`, `--database` and `--collection` flags
//!
//! ## Usage Examples
//!
//! ```rust,no_run
//! use tasker::libs::config::Config;
//!
//! let config = Config::read()?;
//! let store = config.store_config(|key| std::env::var(key).ok());
//! println!("{} / {}", store.database, store.collection);
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use crate::libs::messages::Message;
use anyhow::{Context, Result};
use dialoguer::{theme::ColorfulTheme, Input};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::path::{Path, PathBuf};

/// Configuration file name inside the data directory.
pub const CONFIG_FILE_NAME: &str = "config.json";

pub const DEFAULT_URI: &str = "mongodb://localhost:27017";
pub const DEFAULT_DATABASE: &str = "tasker";
pub const DEFAULT_COLLECTION: &str = "task";

pub const ENV_URI: &str = "TASKER_URI";
pub const ENV_DATABASE: &str = "TASKER_DATABASE";
pub const ENV_COLLECTION: &str = "TASKER_COLLECTION";

/// Where the task collection lives.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct StoreConfig {
    /// MongoDB connection string.
    pub uri: String,
    pub database: String,
    pub collection: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        StoreConfig {
            uri: DEFAULT_URI.to_string(),
            database: DEFAULT_DATABASE.to_string(),
            collection: DEFAULT_COLLECTION.to_string(),
        }
    }
}

impl StoreConfig {
    /// Overlays non-empty values returned by `lookup` for the `TASKER_*` variables.
    pub fn with_env(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        if let Some(uri) = non_empty(ENV_URI) {
            self.uri = uri;
        }
        if let Some(database) = non_empty(ENV_DATABASE) {
            self.database = database;
        }
        if let Some(collection) = non_empty(ENV_COLLECTION) {
            self.collection = collection;
        }
        self
    }
}

/// Contents of `config.json`.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub store: Option<StoreConfig>,
}

impl Config {
    /// Location of the configuration file in the data directory.
    ///
    /// The directory itself may not exist yet; only [`Config::save`] creates it.
    pub fn path() -> PathBuf {
        DataStorage::new().path_of(CONFIG_FILE_NAME)
    }

    /// Reads the configuration file, or returns the default when there is none.
    pub fn read() -> Result<Config> {
        Self::read_from(&Self::path())
    }

    pub fn read_from(path: &Path) -> Result<Config> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(path).with_context(|| Message::ConfigReadError(path.display().to_string()))?;
        let config: Config =
            serde_json::from_str(&config_str).with_context(|| Message::ConfigReadError(path.display().to_string()))?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&DataStorage::new().get_path(CONFIG_FILE_NAME)?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        let config_file = File::create(path).with_context(|| Message::ConfigSaveError(path.display().to_string()))?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Removes the configuration file. Returns `false` when there was none.
    pub fn delete() -> Result<bool> {
        Self::delete_at(&Self::path())
    }

    pub fn delete_at(path: &Path) -> Result<bool> {
        if !path.exists() {
            return Ok(false);
        }
        fs::remove_file(path)?;
        Ok(true)
    }

    /// Store settings from this file, with environment overrides applied.
    pub fn store_config(&self, lookup: impl Fn(&str) -> Option<String>) -> StoreConfig {
        self.store.clone().unwrap_or_default().with_env(lookup)
    }

    /// Interactive setup wizard, pre-filled with `current`.
    pub fn init(current: StoreConfig) -> Result<Config> {
        let store = StoreConfig {
            uri: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptStoreUri.to_string())
                .default(current.uri)
                .interact_text()?,
            database: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptDatabase.to_string())
                .default(current.database)
                .interact_text()?,
            collection: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptCollection.to_string())
                .default(current.collection)
                .interact_text()?,
        };

        Ok(Config { store: Some(store) })
    }
}
