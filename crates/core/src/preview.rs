//! Preview Regime
//!
//! The preview normally mirrors the serializer output. Once the user types
//! something different into it, the preview detaches and keeps the user's
//! text until either the user types it back to the generated output or the
//! form is cleared.

use serde::{Deserialize, Serialize};

/// Shown in place of an empty preview.
pub const EMPTY_PREVIEW_HINT: &str = "Fill in the sections on the left to generate your structured prompt...\n\
Minimum required: Task\n\
Recommended: Task + Constraints + Format";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreviewState {
    text: String,
    is_edited: bool,
}

impl PreviewState {
    /// A preview in sync with `generated`.
    pub fn new(generated: impl Into<String>) -> Self {
        Self {
            text: generated.into(),
            is_edited: false,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_edited(&self) -> bool {
        self.is_edited
    }

    /// Blank previews show the empty-state hint and cannot be copied.
    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty()
    }

    /// Follow a new serializer output. Ignored while the preview is edited.
    ///
    /// Returns whether the visible text changed.
    pub fn sync(&mut self, generated: &str) -> bool {
        if self.is_edited || self.text == generated {
            return false;
        }
        self.text = generated.to_string();
        true
    }

    /// Apply a user edit. Typing the generated output back re-attaches.
    pub fn edit(&mut self, value: impl Into<String>, generated: &str) {
        self.text = value.into();
        self.is_edited = self.text != generated;
    }

    /// Drop any edit and re-attach to `generated`.
    pub fn reset(&mut self, generated: &str) {
        self.is_edited = false;
        self.text = generated.to_string();
    }
}
