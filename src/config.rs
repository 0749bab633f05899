use std::path::PathBuf;

use anyhow::{Context, Result};

const APP_NAME: &str = "smart-bus-tracker";
const STORE_FILE: &str = "preferences.db";

/// Environment variable overriding the data directory.
pub const DATA_DIR_ENV: &str = "SBT_DATA_DIR";

/// Where the tracker keeps its preference store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub data_dir: PathBuf,
}

impl Config {
    /// Resolve the data directory: explicit path, then `SBT_DATA_DIR`, then
    /// the platform data directory.
    pub fn resolve(data_dir: Option<PathBuf>) -> Result<Self> {
        if let Some(data_dir) = data_dir {
            return Ok(Self { data_dir });
        }

        if let Some(dir) = std::env::var_os(DATA_DIR_ENV).filter(|v| !v.is_empty()) {
            return Ok(Self {
                data_dir: PathBuf::from(dir),
            });
        }

        let dirs = directories::ProjectDirs::from("", "", APP_NAME)
            .context("Could not determine data directory")?;
        Ok(Self {
            data_dir: dirs.data_dir().to_path_buf(),
        })
    }

    pub fn store_path(&self) -> PathBuf {
        self.data_dir.join(STORE_FILE)
    }
}
