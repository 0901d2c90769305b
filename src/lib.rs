//! Easy Prompt - Rust Library
//!
//! Structured prompt builder: a form of named sections is turned into a
//! tagged prompt document with a live, user-editable preview.
//! It includes:
//! - Command handlers for a frontend (or the bundled CLI)
//! - Business logic services (form state, catalogs, persistence, clipboard)
//! - Storage layer (key-value form store, JSON config)
//! - Data models and utilities
//!
//! The pure document model lives in the `easy-prompt-core` crate.

pub mod cli;
pub mod commands;
pub mod models;
pub mod services;
pub mod state;
pub mod storage;
pub mod utils;

// Re-export commonly used items from commands
pub use commands::{
    // Form commands
    get_form, set_field, toggle_section, add_example, update_example, remove_example,
    clear_all, load_template, load_persona, flush,
    // Preview commands
    get_preview, edit_preview, get_stats, copy_preview, get_copy_status,
    // Catalog commands
    list_templates, list_personas, list_fields,
    // Settings commands
    get_settings, update_settings, reset_settings,
    // Health commands
    get_health,
};
// Re-export models (avoiding settings module conflict)
pub use models::response::*;
pub use models::settings::{AppConfig, SettingsUpdate};
pub use state::AppState;
pub use utils::error::{AppError, AppResult};
