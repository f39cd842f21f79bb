//! Application settings and configuration types.
//!
//! Settings are persisted to `~/.config/reimburse/settings.json` (or XDG equivalent)
//! and loaded at application startup.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::ReimbursementSetStatus;
use crate::ui::components::BadgeSize;

/// Errors that can occur while loading or saving settings.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("No config directory available on this platform")]
    NoConfigDir,

    #[error("Settings I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid settings file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Result type for settings operations.
pub type Result<T> = std::result::Result<T, SettingsError>;

/// Top-level application settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Visual appearance settings.
    pub appearance: AppearanceSettings,
    /// Status button behavior and wording.
    pub status_button: StatusButtonSettings,
}

impl Settings {
    /// Default location of the settings file.
    pub fn default_path() -> Result<PathBuf> {
        directories::ProjectDirs::from("com", "reimburse", "reimburse")
            .map(|dirs| dirs.config_dir().join("settings.json"))
            .ok_or(SettingsError::NoConfigDir)
    }

    /// Load settings from a JSON file.
    ///
    /// A missing file yields the defaults. Sections or fields absent from the
    /// file fall back to their defaults as well.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "No settings file, using defaults");
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(SettingsError::Io {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };

        serde_json::from_str(&contents).map_err(|source| SettingsError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Write settings as pretty JSON, creating parent directories.
    pub fn save_to(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let io_err = |source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        };

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(io_err)?;
        }

        let json = serde_json::to_string_pretty(self).map_err(|source| SettingsError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        fs::write(path, json).map_err(io_err)
    }

    /// Load from the default location, falling back to defaults on any error.
    pub fn load_or_default() -> Self {
        let loaded = Self::default_path().and_then(Self::load_from);
        match loaded {
            Ok(settings) => settings,
            Err(e) => {
                tracing::warn!("Failed to load settings, using defaults: {}", e);
                Self::default()
            }
        }
    }
}

/// Visual appearance configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppearanceSettings {
    /// Color theme.
    pub theme: Theme,
}

impl Default for AppearanceSettings {
    fn default() -> Self {
        Self {
            theme: Theme::System,
        }
    }
}

/// Color theme selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Dark color scheme.
    Dark,
    /// Light color scheme.
    Light,
    /// Follow system preference.
    System,
}

/// Status button configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatusButtonSettings {
    /// What a tap on the button does.
    pub tap_behavior: TapBehavior,
    /// Size used for compact badges in lists.
    pub badge_size: BadgeSize,
    /// Display text for each status.
    pub labels: StatusLabels,
}

/// What tapping a status button asks the user for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TapBehavior {
    /// Propose the single next status and ask for confirmation.
    #[default]
    ConfirmNext,
    /// Let the user pick any status.
    PickAny,
}

/// Localizable display text for each status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatusLabels {
    pub unsubmitted: String,
    pub submitted: String,
    pub reimbursed: String,
}

impl Default for StatusLabels {
    fn default() -> Self {
        Self {
            unsubmitted: "草稿".to_string(),
            submitted: "已提交".to_string(),
            reimbursed: "已报销".to_string(),
        }
    }
}

impl StatusLabels {
    /// Wording that describes unsubmitted sets as pending reimbursement.
    pub fn pending() -> Self {
        Self {
            unsubmitted: "待报销".to_string(),
            ..Self::default()
        }
    }

    /// English wording.
    pub fn english() -> Self {
        Self {
            unsubmitted: "Draft".to_string(),
            submitted: "Submitted".to_string(),
            reimbursed: "Reimbursed".to_string(),
        }
    }

    /// Text for a status.
    pub fn label(&self, status: ReimbursementSetStatus) -> &str {
        match status {
            ReimbursementSetStatus::Unsubmitted => &self.unsubmitted,
            ReimbursementSetStatus::Submitted => &self.submitted,
            ReimbursementSetStatus::Reimbursed => &self.reimbursed,
        }
    }
}
