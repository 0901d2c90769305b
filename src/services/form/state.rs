//! Form State Reducer
//!
//! Holds the prompt record and the template/persona selection markers, and
//! applies form actions to them. All mutation of the record goes through
//! [`FormState::apply`].

use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use easy_prompt_core::{
    Example, ExampleField, Persona, PromptRecord, ScalarField, Section, Template,
};

/// A single user interaction with the form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FormAction {
    SetField { field: ScalarField, value: String },
    ToggleSection { section: Section },
    AddExample,
    UpdateExample { id: String, field: ExampleField, value: String },
    RemoveExample { id: String },
    ClearAll,
    LoadTemplate { template: Template },
    LoadPersona { persona: Persona },
}

impl FormAction {
    /// Short name used in logs.
    pub fn kind(&self) -> &'static str {
        match self {
            FormAction::SetField { .. } => "set_field",
            FormAction::ToggleSection { .. } => "toggle_section",
            FormAction::AddExample => "add_example",
            FormAction::UpdateExample { .. } => "update_example",
            FormAction::RemoveExample { .. } => "remove_example",
            FormAction::ClearAll => "clear_all",
            FormAction::LoadTemplate { .. } => "load_template",
            FormAction::LoadPersona { .. } => "load_persona",
        }
    }
}

/// What an applied action did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormChange {
    /// Whether the record differs from before the action
    pub record_changed: bool,
    /// Id of the example created by `AddExample`
    pub new_example_id: Option<String>,
}

impl FormChange {
    fn changed(record_changed: bool) -> Self {
        Self {
            record_changed,
            new_example_id: None,
        }
    }
}

fn new_example_id() -> String {
    Uuid::new_v4().to_string()
}

/// The form record plus which preset (if any) is currently highlighted.
///
/// At most one of `active_template_id` / `active_persona_id` is set.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormState {
    record: PromptRecord,
    active_template_id: Option<String>,
    active_persona_id: Option<String>,
}

impl FormState {
    /// Start from a restored (or default) record with no preset selected.
    pub fn new(record: PromptRecord) -> Self {
        Self {
            record,
            active_template_id: None,
            active_persona_id: None,
        }
    }

    pub fn record(&self) -> &PromptRecord {
        &self.record
    }

    pub fn active_template_id(&self) -> Option<&str> {
        self.active_template_id.as_deref()
    }

    pub fn active_persona_id(&self) -> Option<&str> {
        self.active_persona_id.as_deref()
    }

    /// Apply one action. Unknown example ids and attempts to switch `task`
    /// are no-ops.
    pub fn apply(&mut self, action: FormAction) -> FormChange {
        let kind = action.kind();
        let change = match action {
            FormAction::SetField { field, value } => {
                let changed = self.record.field(field) != value;
                self.record.set_field(field, value);
                FormChange::changed(changed)
            }
            FormAction::ToggleSection { section } => {
                FormChange::changed(self.record.enabled_sections.toggle(section))
            }
            FormAction::AddExample => {
                let id = new_example_id();
                self.record.examples.push(Example::empty(id.clone()));
                FormChange {
                    record_changed: true,
                    new_example_id: Some(id),
                }
            }
            FormAction::UpdateExample { id, field, value } => match self.record.example_mut(&id) {
                Some(example) => {
                    example.set(field, value);
                    FormChange::changed(true)
                }
                None => FormChange::changed(false),
            },
            FormAction::RemoveExample { id } => {
                let before = self.record.examples.len();
                self.record.examples.retain(|ex| ex.id != id);
                FormChange::changed(self.record.examples.len() != before)
            }
            FormAction::ClearAll => {
                self.record = PromptRecord::default();
                self.active_template_id = None;
                self.active_persona_id = None;
                FormChange::changed(true)
            }
            FormAction::LoadTemplate { template } => {
                let mut record = PromptRecord::from_template(&template.data);
                // Preset examples get fresh ids so no id is shared between loads.
                for example in &mut record.examples {
                    example.id = new_example_id();
                }
                self.record = record;
                self.active_template_id = Some(template.id);
                self.active_persona_id = None;
                FormChange::changed(true)
            }
            FormAction::LoadPersona { persona } => {
                self.record.role = persona.role;
                self.record.enabled_sections.set(Section::Role, true);
                self.active_persona_id = Some(persona.id);
                self.active_template_id = None;
                FormChange::changed(true)
            }
        };
        debug!(action = kind, changed = change.record_changed, "form action applied");
        change
    }
}
