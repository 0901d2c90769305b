//! Form Field Metadata
//!
//! Labels, guidance text and importance of each form field, in form order.
//! Form order puts the task first; document order is [`Section::ORDER`].

use serde::Serialize;

use crate::record::{PromptRecord, Section};

/// How strongly a field is encouraged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldStatus {
    Required,
    Recommended,
    Optional,
}

impl FieldStatus {
    pub fn label(&self) -> &'static str {
        match self {
            FieldStatus::Required => "REQUIRED",
            FieldStatus::Recommended => "RECOMMENDED",
            FieldStatus::Optional => "OPTIONAL",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldInfo {
    pub section: Section,
    pub label: &'static str,
    pub status: FieldStatus,
    pub description: &'static str,
    pub placeholder: &'static str,
}

const FORM_FIELDS: [FieldInfo; 8] = [
    FieldInfo {
        section: Section::Task,
        label: "Task",
        status: FieldStatus::Required,
        description: "ONE clear, specific goal. What exactly should the model do?",
        placeholder: "e.g., Review this code for security vulnerabilities and suggest fixes.",
    },
    FieldInfo {
        section: Section::Role,
        label: "Role / Persona",
        status: FieldStatus::Optional,
        description: "Who should the model be? Define expertise, perspective, and tone.",
        placeholder: "e.g., You are a senior Python developer with 10 years of experience...",
    },
    FieldInfo {
        section: Section::Context,
        label: "Context",
        status: FieldStatus::Optional,
        description: "Background information, documents, situation details, or domain knowledge.",
        placeholder: "e.g., I'm building a SaaS application for small businesses...",
    },
    FieldInfo {
        section: Section::Constraints,
        label: "Constraints",
        status: FieldStatus::Recommended,
        description: "Boundaries, limitations, preferences. Say what to do instead of what NOT to do.",
        placeholder: "e.g., Use only standard library. Keep functions under 20 lines.",
    },
    FieldInfo {
        section: Section::Format,
        label: "Output Format",
        status: FieldStatus::Recommended,
        description: "Desired structure, length, or style of the response.",
        placeholder: "e.g., Return a numbered list of issues with severity and suggested fix.",
    },
    FieldInfo {
        section: Section::Examples,
        label: "Examples",
        status: FieldStatus::Optional,
        description: "Show example inputs and expected outputs.",
        placeholder: "",
    },
    FieldInfo {
        section: Section::SuccessCriteria,
        label: "Success Criteria",
        status: FieldStatus::Optional,
        description: "How will you verify the output is correct?",
        placeholder: "e.g., Every issue references line numbers. Code fixes are syntactically valid.",
    },
    FieldInfo {
        section: Section::Input,
        label: "Input",
        status: FieldStatus::Optional,
        description: "What data should be processed?",
        placeholder: "Paste the code, text, or data to process...",
    },
];

/// All form fields in form order.
pub fn form_fields() -> &'static [FieldInfo] {
    &FORM_FIELDS
}

pub fn field_info(section: Section) -> &'static FieldInfo {
    FORM_FIELDS
        .iter()
        .find(|info| info.section == section)
        .unwrap_or(&FORM_FIELDS[0])
}

/// Whether the user has written anything into a field.
///
/// Unlike the serializer this ignores the section switches: a disabled but
/// filled field still counts as filled.
pub fn is_filled(record: &PromptRecord, section: Section) -> bool {
    match section.scalar_field() {
        Some(field) => !record.field(field).trim().is_empty(),
        None => record.examples.iter().any(|ex| ex.has_content()),
    }
}
