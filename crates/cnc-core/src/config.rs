//! Store configuration
//!
//! An optional `config.toml` in the data directory tunes where the payload
//! is kept and whether demo records are installed:
//!
//! ```toml
//! [storage]
//! key = "cncTools"
//!
//! [seed]
//! enabled = true
//! ```

use cnc_fs::{NormalizedPath, io};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::persistence::{DEFAULT_STORAGE_KEY, FileAdapter};
use crate::store::StoreOptions;

/// Name of the configuration file inside the data directory
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Directory name used under the platform data directory
pub const APP_DIR_NAME: &str = "cnc-tools";

/// Storage section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageConfig {
    /// File stem of the payload inside the data directory
    #[serde(default = "default_key")]
    pub key: String,
}

fn default_key() -> String {
    DEFAULT_STORAGE_KEY.to_string()
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self { key: default_key() }
    }
}

/// Demo data section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
}

fn default_true() -> bool {
    true
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

/// Full configuration file
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StoreConfig {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub seed: SeedConfig,
}

impl StoreConfig {
    /// Load `config.toml` from `data_dir`, falling back to defaults when the
    /// file does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] if the file cannot be parsed or names
    /// an unusable storage key.
    pub fn load(data_dir: &NormalizedPath) -> Result<Self> {
        let path = data_dir.join(CONFIG_FILE_NAME);
        if !path.is_file() {
            tracing::debug!(path = %path, "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = io::read_text(&path)?;
        let config: Self = toml::from_str(&content).map_err(|e| Error::InvalidConfig {
            path: path.to_native(),
            message: e.to_string(),
        })?;
        config.validate(&path)?;
        Ok(config)
    }

    fn validate(&self, path: &NormalizedPath) -> Result<()> {
        let key = &self.storage.key;
        let invalid = key.trim().is_empty()
            || key.contains(|c: char| c == '/' || c == '\\')
            || key.starts_with('.');
        if invalid {
            return Err(Error::InvalidConfig {
                path: path.to_native(),
                message: format!("storage key '{key}' is not a plain file name"),
            });
        }
        Ok(())
    }

    pub fn store_options(&self) -> StoreOptions {
        StoreOptions {
            seed_demo_data: self.seed.enabled,
        }
    }

    /// File adapter for the configured key inside `data_dir`.
    pub fn file_adapter(&self, data_dir: &NormalizedPath) -> FileAdapter {
        FileAdapter::new(data_dir, &self.storage.key)
    }
}

/// Default data directory: `<platform data dir>/cnc-tools`, or the current
/// directory when the platform has none.
pub fn default_data_dir() -> NormalizedPath {
    dirs::data_dir()
        .map(|dir| NormalizedPath::new(dir.join(APP_DIR_NAME)))
        .unwrap_or_else(|| NormalizedPath::new("."))
}
