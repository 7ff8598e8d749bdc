//! User settings.
//!
//! Loaded once at startup from `<config_dir>/stickyboard/settings.json`.
//! Every field has a default, so a partial file only overrides what it names.

use crate::constants::{
    APP_DIR_NAME, DEFAULT_LOG_FILTER, DEFAULT_STORAGE_KEY, DEFAULT_TRASH_MARGIN,
    DEFAULT_TRASH_SIZE, SETTINGS_FILE_NAME,
};
use crate::geometry::Rect;
use crate::types::Size;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors from reading the settings file
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid settings: {0}")]
    Json(#[from] serde_json::Error),
}

/// Trash target placement.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrashSettings {
    /// Side length of the square drop zone
    pub size: f32,
    /// Distance from the bottom-right corner of the board
    pub margin: f32,
}

impl Default for TrashSettings {
    fn default() -> Self {
        Self {
            size: DEFAULT_TRASH_SIZE,
            margin: DEFAULT_TRASH_MARGIN,
        }
    }
}

impl TrashSettings {
    /// Trash rectangle for a board of the given size, anchored bottom-right.
    pub fn rect_in(&self, board: Size) -> Rect {
        let left = (board.width - self.margin - self.size).max(0.0);
        let top = (board.height - self.margin - self.size).max(0.0);
        Rect::new(left, top, left + self.size, top + self.size)
    }
}

/// Application settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Key the note collection is stored under
    pub storage_key: String,
    /// Directory for the note file; platform data dir when absent
    pub data_dir: Option<PathBuf>,
    /// Trash target placement
    pub trash: TrashSettings,
    /// Default tracing filter, overridden by `RUST_LOG`
    pub log_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            data_dir: None,
            trash: TrashSettings::default(),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl Settings {
    /// Load from the default location.
    ///
    /// Runs before logging is installed, so failures are returned for the
    /// caller to report once a subscriber exists.
    pub fn try_load() -> Result<Self, SettingsError> {
        match default_settings_path() {
            Some(path) => Self::load_or_default(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load from `path`, or defaults if no file exists there.
    pub fn load_or_default(path: &Path) -> Result<Self, SettingsError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::load_from(path)
    }

    /// Load from an explicit path.
    pub fn load_from(path: &Path) -> Result<Self, SettingsError> {
        let raw = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Write to an explicit path, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<(), SettingsError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }
}

/// `<config_dir>/stickyboard/settings.json`, if the platform has a config dir.
pub fn default_settings_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join(APP_DIR_NAME).join(SETTINGS_FILE_NAME))
}
