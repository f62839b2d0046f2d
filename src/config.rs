//! Filesystem layout for the application's data. Everything lives in one
//! directory under the user's home so the database and its log travel
//! together.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::BaseDirs;
use thiserror::Error;

/// Folder name used beneath the user's home directory for application data.
const DATA_DIR_NAME: &str = ".rental-tracker";
/// SQLite file name stored inside the application data directory.
const DB_FILE_NAME: &str = "rentals.db";
/// Log file written next to the database.
const LOG_FILE_NAME: &str = "rental-tracker.log";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not locate home directory")]
    HomeDirUnavailable,
}

/// Resolved paths used by the composition root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub data_dir: PathBuf,
    pub db_path: PathBuf,
    pub log_path: PathBuf,
}

impl AppConfig {
    /// Resolve `~/.rental-tracker/` for the current user.
    pub fn from_home() -> Result<Self, ConfigError> {
        let base_dirs = BaseDirs::new().ok_or(ConfigError::HomeDirUnavailable)?;
        Ok(Self::in_dir(base_dirs.home_dir().join(DATA_DIR_NAME)))
    }

    /// Lay the data files out under an arbitrary directory.
    pub fn in_dir(data_dir: impl Into<PathBuf>) -> Self {
        let data_dir = data_dir.into();
        Self {
            db_path: data_dir.join(DB_FILE_NAME),
            log_path: data_dir.join(LOG_FILE_NAME),
            data_dir,
        }
    }

    /// Create the data directory if it does not exist yet.
    pub fn ensure_data_dir(&self) -> Result<&Path> {
        fs::create_dir_all(&self.data_dir).context("failed to create data directory")?;
        Ok(self.data_dir.as_path())
    }
}
