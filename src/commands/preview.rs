//! Preview Commands
//!
//! Commands for reading, editing and copying the generated prompt.

use easy_prompt_core::PromptStats;

use crate::models::response::{CommandResponse, PreviewView};
use crate::services::clipboard::CopyStatus;
use crate::state::AppState;

/// Get the preview text, its edit flag and counters
pub async fn get_preview(state: &AppState) -> CommandResponse<PreviewView> {
    CommandResponse::ok(state.preview_view().await)
}

/// Replace the preview text with a user edit
pub async fn edit_preview(state: &AppState, value: String) -> CommandResponse<PreviewView> {
    CommandResponse::ok(state.edit_preview(value).await)
}

/// Get the counters for the preview text
pub async fn get_stats(state: &AppState) -> CommandResponse<PromptStats> {
    CommandResponse::ok(state.stats().await)
}

/// Copy the preview text to the clipboard
pub async fn copy_preview(state: &AppState) -> CommandResponse<CopyStatus> {
    state.copy_preview().await.into()
}

/// Get the copy indicator state
pub async fn get_copy_status(state: &AppState) -> CommandResponse<CopyStatus> {
    CommandResponse::ok(state.copy_status())
}
