//! Prompt Session
//!
//! Pairs the form state with the preview so that one reducer owns both.
//! Clearing the form resets the preview in the same transition, which is how
//! the form and the preview stay in step without signalling each other.

use easy_prompt_core::{serialize, PreviewState, PromptRecord, PromptStats};

use super::state::{FormAction, FormChange, FormState};

#[derive(Debug, Clone, Default)]
pub struct PromptSession {
    form: FormState,
    /// Serializer output for the current record
    generated: String,
    preview: PreviewState,
}

impl PromptSession {
    /// Start a session from a restored (or default) record.
    pub fn new(record: PromptRecord) -> Self {
        let generated = serialize(&record);
        Self {
            form: FormState::new(record),
            preview: PreviewState::new(generated.clone()),
            generated,
        }
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn record(&self) -> &PromptRecord {
        self.form.record()
    }

    pub fn generated(&self) -> &str {
        &self.generated
    }

    pub fn preview(&self) -> &PreviewState {
        &self.preview
    }

    /// Apply a form action, re-serialize, and refresh the preview.
    pub fn dispatch(&mut self, action: FormAction) -> FormChange {
        let clears = matches!(action, FormAction::ClearAll);
        let change = self.form.apply(action);
        if change.record_changed {
            self.generated = serialize(self.form.record());
        }
        if clears {
            self.preview.reset(&self.generated);
        } else {
            self.preview.sync(&self.generated);
        }
        change
    }

    /// Apply a direct edit of the preview text.
    pub fn edit_preview(&mut self, value: impl Into<String>) {
        self.preview.edit(value, &self.generated);
    }

    /// Counters for the text currently shown in the preview.
    pub fn stats(&self) -> PromptStats {
        PromptStats::compute(self.preview.text(), self.form.record())
    }
}
