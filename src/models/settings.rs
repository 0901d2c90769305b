//! Settings Models
//!
//! Application configuration and settings data structures.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Minimum quiet period before a form snapshot is written
pub const MIN_PERSIST_DEBOUNCE_MS: u64 = 50;

/// Application configuration stored in config.json
///
/// Keys missing from the file fall back to their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Quiet period after the last form edit before the snapshot is written
    pub persist_debounce_ms: u64,
    /// How long the "copied" indicator stays up after a copy
    pub copy_feedback_ms: u64,
    /// Default log filter when RUST_LOG is unset
    pub log_level: String,
    /// Extra templates/personas loaded at startup, in addition to the built-ins
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalog_path: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            persist_debounce_ms: 500,
            copy_feedback_ms: 2000,
            log_level: "info".to_string(),
            catalog_path: None,
        }
    }
}

/// Settings update request (partial update)
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SettingsUpdate {
    pub persist_debounce_ms: Option<u64>,
    pub copy_feedback_ms: Option<u64>,
    pub log_level: Option<String>,
    pub catalog_path: Option<PathBuf>,
}

impl AppConfig {
    /// Apply a partial update to the configuration
    pub fn apply_update(&mut self, update: SettingsUpdate) {
        if let Some(ms) = update.persist_debounce_ms {
            self.persist_debounce_ms = ms;
        }
        if let Some(ms) = update.copy_feedback_ms {
            self.copy_feedback_ms = ms;
        }
        if let Some(level) = update.log_level {
            self.log_level = level;
        }
        if let Some(path) = update.catalog_path {
            self.catalog_path = Some(path);
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.persist_debounce_ms < MIN_PERSIST_DEBOUNCE_MS {
            return Err(format!(
                "persist_debounce_ms must be at least {} ms",
                MIN_PERSIST_DEBOUNCE_MS
            ));
        }

        if self.copy_feedback_ms == 0 {
            return Err("copy_feedback_ms must be greater than 0".to_string());
        }

        if !["trace", "debug", "info", "warn", "error"].contains(&self.log_level.as_str()) {
            return Err(format!(
                "Invalid log level: {}. Must be one of trace, debug, info, warn, error",
                self.log_level
            ));
        }

        Ok(())
    }
}
