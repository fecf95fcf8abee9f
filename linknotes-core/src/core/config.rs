//! Configuration for a Linknotes store.
//!
//! Stored as a JSON file at an OS-appropriate location. Missing or corrupt
//! files fall back to defaults so a broken config never blocks startup.

use crate::{Result, UNORGANIZED_COLLECTION};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Persisted store settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LinknotesConfig {
    /// SQLite file holding links and the operation log.
    pub database_path: PathBuf,
    /// Collection assigned to links created without one.
    pub default_collection: String,
    /// Upper bound on how long a gateway call waits for a locked database.
    pub busy_timeout_ms: u64,
    /// Number of operations retained in the log; values below 1 are raised to 1.
    pub operation_log_keep_last: usize,
}

impl Default for LinknotesConfig {
    fn default() -> Self {
        Self {
            database_path: default_data_directory().join("links.db"),
            default_collection: UNORGANIZED_COLLECTION.to_string(),
            busy_timeout_ms: 5_000,
            operation_log_keep_last: 1_000,
        }
    }
}

impl LinknotesConfig {
    #[must_use]
    pub fn busy_timeout(&self) -> Duration {
        Duration::from_millis(self.busy_timeout_ms)
    }
}

/// Returns the path to the config JSON file.
///
/// - macOS / Linux: `~/.config/linknotes/config.json`
/// - Windows: `%APPDATA%/Linknotes/config.json`
pub fn config_file_path() -> PathBuf {
    #[cfg(target_os = "windows")]
    {
        let base = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        base.join("Linknotes").join("config.json")
    }
    #[cfg(not(target_os = "windows"))]
    {
        let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        home.join(".config").join("linknotes").join("config.json")
    }
}

/// Returns the default data directory, e.g. `~/.local/share/linknotes`.
pub fn default_data_directory() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".local")
                .join("share")
        })
        .join("linknotes")
}

/// Loads config from `path`; returns defaults if the file is missing or corrupt.
pub fn load_config<P: AsRef<Path>>(path: P) -> LinknotesConfig {
    let path = path.as_ref();
    match fs::read_to_string(path) {
        Ok(content) => serde_json::from_str(&content).unwrap_or_else(|e| {
            log::warn!("ignoring corrupt config at {}: {e}", path.display());
            LinknotesConfig::default()
        }),
        Err(_) => LinknotesConfig::default(),
    }
}

/// Saves config to `path`, creating parent directories as needed.
///
/// # Errors
///
/// Returns [`crate::LinknotesError::Io`] if the directory or file cannot be
/// written, or [`crate::LinknotesError::Json`] if serialisation fails.
pub fn save_config<P: AsRef<Path>>(path: P, config: &LinknotesConfig) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(config)?;
    fs::write(path, json)?;
    Ok(())
}
