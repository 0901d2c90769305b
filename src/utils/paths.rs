//! Cross-Platform Path Utilities
//!
//! Functions for resolving the application data directory (~/.easy-prompt/
//! by default) and the files kept in it.

use std::path::{Path, PathBuf};

use crate::utils::error::{AppError, AppResult};

/// Environment variable overriding the data directory
pub const DATA_DIR_ENV: &str = "EASY_PROMPT_HOME";

/// Get the user's home directory
pub fn home_dir() -> AppResult<PathBuf> {
    dirs::home_dir().ok_or_else(|| AppError::config("Could not determine home directory"))
}

/// Get the Easy Prompt directory (~/.easy-prompt/)
pub fn easy_prompt_dir() -> AppResult<PathBuf> {
    Ok(home_dir()?.join(".easy-prompt"))
}

/// Get the config file path inside a data directory
pub fn config_path(data_dir: &Path) -> PathBuf {
    data_dir.join("config.json")
}

/// Get the form store file path inside a data directory
pub fn store_path(data_dir: &Path) -> PathBuf {
    data_dir.join("store.json")
}

/// Get the user catalog path inside a data directory
pub fn catalog_path(data_dir: &Path) -> PathBuf {
    data_dir.join("catalog.json")
}

/// Ensure a directory exists, creating it if necessary
pub fn ensure_dir(path: &Path) -> AppResult<()> {
    if !path.exists() {
        std::fs::create_dir_all(path)?;
    }
    Ok(())
}

/// Resolve the data directory (explicit override, else ~/.easy-prompt/),
/// creating it if it doesn't exist
pub fn ensure_data_dir(override_dir: Option<&Path>) -> AppResult<PathBuf> {
    let path = match override_dir {
        Some(dir) => dir.to_path_buf(),
        None => easy_prompt_dir()?,
    };
    ensure_dir(&path)?;
    Ok(path)
}
