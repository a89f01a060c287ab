//! Inventory configuration

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use stockroom_inventory::{DEFAULT_SAFE_STOCK, DEFAULT_UNIT};

use crate::error::CoreError;
use crate::Result;

/// Overrides the platform data directory when set.
const DATA_DIR_ENV: &str = "STOCKROOM_DATA_DIR";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Path to the database file
    pub database_path: PathBuf,
    /// Categories created the first time a store is opened
    pub default_categories: Vec<String>,
    /// Unit prefilled on the new-item form
    pub default_unit: String,
    /// Safety threshold prefilled on the new-item form
    pub default_safe_stock: i64,
    /// Reject items filed under a category that is not registered
    pub enforce_known_categories: bool,
}

impl Config {
    pub fn new(data_dir: PathBuf) -> Self {
        Self {
            database_path: data_dir.join("inventory.db"),
            default_categories: vec![
                "Consumables".to_string(),
                "Glassware".to_string(),
                "Chemicals".to_string(),
                "Equipment".to_string(),
            ],
            default_unit: DEFAULT_UNIT.to_string(),
            default_safe_stock: DEFAULT_SAFE_STOCK,
            enforce_known_categories: true,
        }
    }

    pub fn data_dir() -> PathBuf {
        if let Some(dir) = std::env::var_os(DATA_DIR_ENV).filter(|v| !v.is_empty()) {
            return PathBuf::from(dir);
        }

        dirs::data_local_dir()
            .map(|d| d.join("Stockroom"))
            .unwrap_or_else(|| PathBuf::from(".stockroom"))
    }

    /// Read a JSON config file. A missing file yields the defaults; fields
    /// absent from the file keep their default values.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }

        let raw = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&raw)
            .map_err(|e| CoreError::Config(format!("{}: {}", path.display(), e)))?;
        config.validate()?;

        tracing::info!(path = %path.display(), "Loaded config");

        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.default_unit.trim().is_empty() {
            return Err(CoreError::Config("default_unit cannot be empty".to_string()));
        }
        if self.default_safe_stock < 0 {
            return Err(CoreError::Config(format!(
                "default_safe_stock cannot be negative: {}",
                self.default_safe_stock
            )));
        }
        if let Some(blank) = self.default_categories.iter().find(|c| c.trim().is_empty()) {
            return Err(CoreError::Config(format!(
                "default_categories contains a blank name: {:?}",
                blank
            )));
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(Self::data_dir())
    }
}

mod dirs {
    use std::path::PathBuf;

    pub fn data_local_dir() -> Option<PathBuf> {
        #[cfg(target_os = "windows")]
        {
            std::env::var("LOCALAPPDATA").ok().map(PathBuf::from)
        }
        #[cfg(target_os = "macos")]
        {
            std::env::var("HOME")
                .ok()
                .map(|h| PathBuf::from(h).join("Library/Application Support"))
        }
        #[cfg(target_os = "linux")]
        {
            std::env::var("XDG_DATA_HOME")
                .ok()
                .map(PathBuf::from)
                .or_else(|| {
                    std::env::var("HOME")
                        .ok()
                        .map(|h| PathBuf::from(h).join(".local/share"))
                })
        }
        #[cfg(not(any(target_os = "windows", target_os = "macos", target_os = "linux")))]
        {
            None
        }
    }
}
