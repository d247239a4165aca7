use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use chrono::{DateTime, FixedOffset};

use crate::ops::task_store::{StoreError, TaskStore};
use crate::parse::{ConfigError, ExportError, parse_config, parse_export};

/// Path that stands for standard input
pub const STDIN_PATH: &str = "-";

/// Error type for one refresh cycle
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("could not read {path}: {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("export and config dump cannot both come from stdin")]
    StdinTwice,
    #[error("bad config dump {path}: {source}")]
    ConfigError {
        path: PathBuf,
        source: ConfigError,
    },
    #[error("bad export {path}: {source}")]
    ExportError {
        path: PathBuf,
        source: ExportError,
    },
    #[error(transparent)]
    StoreError(#[from] StoreError),
}

fn is_stdin(path: &Path) -> bool {
    path.as_os_str() == STDIN_PATH
}

/// Read a whole file, or all of stdin for `-`
pub fn read_input(path: &Path) -> Result<String, LoadError> {
    let read = if is_stdin(path) {
        let mut text = String::new();
        std::io::stdin().read_to_string(&mut text).map(|_| text)
    } else {
        fs::read_to_string(path)
    };
    read.map_err(|source| LoadError::ReadError {
        path: path.to_path_buf(),
        source,
    })
}

/// One refresh: read the export and the config dump, parse both and build
/// a classified store against `now`.
pub fn load_refresh(
    export_path: &Path,
    show_path: &Path,
    now: DateTime<FixedOffset>,
) -> Result<TaskStore, LoadError> {
    if is_stdin(export_path) && is_stdin(show_path) {
        return Err(LoadError::StdinTwice);
    }

    let show_text = read_input(show_path)?;
    let config = parse_config(&show_text).map_err(|source| LoadError::ConfigError {
        path: show_path.to_path_buf(),
        source,
    })?;

    let export_text = read_input(export_path)?;
    let tasks = parse_export(&export_text).map_err(|source| LoadError::ExportError {
        path: export_path.to_path_buf(),
        source,
    })?;

    let store = TaskStore::new(tasks, config, now)?;
    tracing::debug!(tasks = store.len(), "refresh loaded");
    Ok(store)
}
