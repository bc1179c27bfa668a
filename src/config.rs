use crate::error::{ClipmemoError, Result};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Key the snippet list is stored under.
pub const STORAGE_KEY: &str = "clipmemo_snippets";
pub const LOG_FILENAME: &str = "clipmemo.log";
pub const HOME_ENV: &str = "CLIPMEMO_HOME";
pub const DATA_DIR_NAME: &str = ".clipmemo";

/// Get the clipmemo data directory
///
/// `CLIPMEMO_HOME` wins over `$HOME/.clipmemo`; with neither set the
/// directory is created relative to the working directory.
pub fn get_config_dir() -> PathBuf {
    if let Ok(dir) = env::var(HOME_ENV) {
        if !dir.trim().is_empty() {
            return PathBuf::from(dir);
        }
    }

    env::var("HOME")
        .map(|home| PathBuf::from(home).join(DATA_DIR_NAME))
        .unwrap_or_else(|_| PathBuf::from(DATA_DIR_NAME))
}

/// Resolve the data directory, preferring an explicit override
pub fn resolve_config_dir(override_dir: Option<&Path>) -> PathBuf {
    match override_dir {
        Some(dir) => dir.to_path_buf(),
        None => get_config_dir(),
    }
}

/// Ensure the data directory exists
pub fn ensure_config_dir(dir: &Path) -> Result<PathBuf> {
    if dir.exists() && !dir.is_dir() {
        return Err(ClipmemoError::InvalidConfig(format!(
            "{} exists and is not a directory",
            dir.display()
        )));
    }
    if !dir.exists() {
        fs::create_dir_all(dir)?;
    }
    Ok(dir.to_path_buf())
}

/// Get the path to the file backing `key`
pub fn get_storage_file_path(dir: &Path, key: &str) -> PathBuf {
    dir.join(format!("{}.json", key))
}

/// Get the path to the snippet database
pub fn get_db_file_path(dir: &Path) -> PathBuf {
    get_storage_file_path(dir, STORAGE_KEY)
}

/// Get the path to the log file
pub fn get_log_file_path(dir: &Path) -> PathBuf {
    dir.join(LOG_FILENAME)
}
