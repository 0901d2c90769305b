//! Core Error Types
//!
//! Defines the foundational error type used across the Easy Prompt workspace.
//! It is dependency-free (only thiserror + std) to keep the core crate
//! lightweight.
//!
//! The application crate extends it with variants for storage, clipboard
//! and configuration that require heavier dependencies.

use thiserror::Error;

/// Core error type for the Easy Prompt workspace.
///
/// Nothing in the serializer or the preview rules can fail; the only fallible
/// core operations parse section and field names coming from outside.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Parse errors
    #[error("Parse error: {0}")]
    Parse(String),
}

/// Result type alias for core errors
pub type CoreResult<T> = Result<T, CoreError>;

impl CoreError {
    /// Create a parse error
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }
}

/// Convert CoreError to a string
impl From<CoreError> for String {
    fn from(err: CoreError) -> String {
        err.to_string()
    }
}
