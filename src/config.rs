//! Persisted dashboard settings stored as TOML in the app directory.
//!
//! Config keys: `base_url`, `preview_rows`, `request_timeout_secs`, `cache_enabled`.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::app_dirs;

/// Filename of the settings file inside the app directory.
pub const CONFIG_FILE_NAME: &str = "config.toml";

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";
pub const MIN_PREVIEW_ROWS: u32 = 5;
pub const MAX_PREVIEW_ROWS: u32 = 100;
pub const PREVIEW_ROWS_STEP: u32 = 5;
pub const DEFAULT_PREVIEW_ROWS: u32 = 20;
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 120;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardSettings {
    /// Base URL of the analysis server, without the `/analyze` path.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Number of prediction rows shown and echoed as raw JSON.
    #[serde(default = "default_preview_rows")]
    pub preview_rows: u32,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
    /// Reuse payloads per base URL for the rest of the session.
    #[serde(default = "default_true")]
    pub cache_enabled: bool,
}

impl Default for DashboardSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            preview_rows: default_preview_rows(),
            request_timeout_secs: default_request_timeout_secs(),
            cache_enabled: true,
        }
    }
}

impl DashboardSettings {
    /// Clamp values to the ranges the UI can express.
    pub fn normalized(mut self) -> Self {
        self.preview_rows = clamp_preview_rows(self.preview_rows);
        self.request_timeout_secs = self.request_timeout_secs.max(1);
        self
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

/// Clamp to 5..=100 and snap down to the slider step.
pub fn clamp_preview_rows(rows: u32) -> u32 {
    let clamped = rows.clamp(MIN_PREVIEW_ROWS, MAX_PREVIEW_ROWS);
    clamped - clamped % PREVIEW_ROWS_STEP
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_preview_rows() -> u32 {
    DEFAULT_PREVIEW_ROWS
}

fn default_request_timeout_secs() -> u64 {
    DEFAULT_REQUEST_TIMEOUT_SECS
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("No suitable config directory found: {0}")]
    AppDir(#[from] app_dirs::AppDirError),
    #[error("Unable to create config directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Invalid config at {path}: {source}")]
    ParseToml {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("Failed to serialize config to TOML at {path}: {source}")]
    SerializeToml {
        path: PathBuf,
        source: toml::ser::Error,
    },
}

/// Resolve the configuration file path, ensuring the app directory exists.
pub fn config_path() -> Result<PathBuf, ConfigError> {
    Ok(app_dirs::app_root_dir()?.join(CONFIG_FILE_NAME))
}

/// Load settings from the app directory, returning defaults if the file is missing.
pub fn load_or_default() -> Result<DashboardSettings, ConfigError> {
    load_from_path(&config_path()?)
}

/// Persist settings to the app directory, overwriting previous contents.
pub fn save(settings: &DashboardSettings) -> Result<(), ConfigError> {
    save_to_path(settings, &config_path()?)
}

pub fn load_from_path(path: &Path) -> Result<DashboardSettings, ConfigError> {
    if !path.exists() {
        return Ok(DashboardSettings::default());
    }
    let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str::<DashboardSettings>(&text)
        .map(DashboardSettings::normalized)
        .map_err(|source| ConfigError::ParseToml {
            path: path.to_path_buf(),
            source,
        })
}

pub fn save_to_path(settings: &DashboardSettings, path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|source| ConfigError::CreateDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    let text = toml::to_string_pretty(settings).map_err(|source| ConfigError::SerializeToml {
        path: path.to_path_buf(),
        source,
    })?;
    std::fs::write(path, text).map_err(|source| ConfigError::Write {
        path: path.to_path_buf(),
        source,
    })
}
