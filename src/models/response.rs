//! Response Types
//!
//! Standard response types for all frontend-facing commands.

use serde::{Deserialize, Serialize};

use easy_prompt_core::{FieldInfo, PromptRecord, PromptStats};

use crate::services::clipboard::CopyStatus;

/// Generic command response for all commands
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommandResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
}

impl<T> CommandResponse<T> {
    /// Create a successful response with data
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    /// Create an error response with message
    pub fn err(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }
}

impl<T> From<Result<T, crate::utils::error::AppError>> for CommandResponse<T> {
    fn from(result: Result<T, crate::utils::error::AppError>) -> Self {
        match result {
            Ok(data) => Self::ok(data),
            Err(e) => Self::err(e.to_string()),
        }
    }
}

/// Form snapshot returned after every form command
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormView {
    pub record: PromptRecord,
    pub active_template_id: Option<String>,
    pub active_persona_id: Option<String>,
}

/// Result of adding an example
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExampleAdded {
    pub id: String,
    pub form: FormView,
}

/// Form field metadata plus its state in the current record
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldView {
    #[serde(flatten)]
    pub info: FieldInfo,
    pub tag: &'static str,
    /// False for `task`, which has no on/off switch
    pub toggleable: bool,
    pub enabled: bool,
    pub filled: bool,
}

/// Preview snapshot with its counters
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreviewView {
    pub text: String,
    pub is_edited: bool,
    pub is_empty: bool,
    /// Empty-state hint, present only when the preview is blank
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
    pub stats: PromptStats,
    pub copy_status: CopyStatus,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub service: String,
    pub store: bool,
    pub config: bool,
    pub pending_write: bool,
}

impl Default for HealthResponse {
    fn default() -> Self {
        Self {
            status: "healthy".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            service: "easy-prompt".to_string(),
            store: false,
            config: false,
            pending_write: false,
        }
    }
}
