use std::fs;
use std::path::{Path, PathBuf};

use crate::model::settings::AppSettings;

/// Error type for reading the settings file
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("could not read {path}: {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not parse {path}: {source}")]
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Get the settings file path: $XDG_CONFIG_HOME/task-glance/settings.toml
/// or ~/.config/task-glance/settings.toml
pub fn settings_path() -> PathBuf {
    let config_dir = std::env::var("XDG_CONFIG_HOME")
        .ok()
        .filter(|dir| !dir.is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| dirs_home().join(".config"));
    config_dir.join("task-glance").join("settings.toml")
}

/// Get the user's home directory
fn dirs_home() -> PathBuf {
    std::env::var("HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("/"))
}

/// Read settings from the default location
pub fn read_settings() -> Result<AppSettings, SettingsError> {
    read_settings_from(&settings_path())
}

/// Read settings from a specific path.
/// A missing file yields the defaults; a malformed one is an error.
pub fn read_settings_from(path: &Path) -> Result<AppSettings, SettingsError> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no settings file, using defaults");
        return Ok(AppSettings::default());
    }

    let text = fs::read_to_string(path).map_err(|source| SettingsError::ReadError {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&text).map_err(|source| SettingsError::ParseError {
        path: path.to_path_buf(),
        source,
    })
}
