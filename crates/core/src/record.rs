//! Prompt Record Model
//!
//! The structured form data a user fills in, plus the section/field
//! identifiers used to address it. JSON field names follow the camelCase
//! layout of the persisted form snapshot (`successCriteria`,
//! `enabledSections`), and every key is optional on input so older or
//! partial snapshots still load.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

// ============================================================================
// Section
// ============================================================================

/// A named block of the generated document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Section {
    Role,
    Context,
    Task,
    Constraints,
    Format,
    SuccessCriteria,
    Examples,
    Input,
}

impl Section {
    /// Output order of the tagged document. Independent of form layout.
    pub const ORDER: [Section; 8] = [
        Section::Role,
        Section::Context,
        Section::Task,
        Section::Constraints,
        Section::Format,
        Section::SuccessCriteria,
        Section::Examples,
        Section::Input,
    ];

    /// Tag name used in the generated document.
    pub fn tag(&self) -> &'static str {
        match self {
            Section::Role => "role",
            Section::Context => "context",
            Section::Task => "task",
            Section::Constraints => "constraints",
            Section::Format => "format",
            Section::SuccessCriteria => "success_criteria",
            Section::Examples => "examples",
            Section::Input => "input",
        }
    }

    /// Key used in the persisted record and by the command layer.
    pub fn key(&self) -> &'static str {
        match self {
            Section::SuccessCriteria => "successCriteria",
            other => other.tag(),
        }
    }

    /// `task` is always on when filled; every other section has a switch.
    pub fn is_toggleable(&self) -> bool {
        !matches!(self, Section::Task)
    }

    /// The scalar field backing this section (`None` for examples).
    pub fn scalar_field(&self) -> Option<ScalarField> {
        match self {
            Section::Role => Some(ScalarField::Role),
            Section::Context => Some(ScalarField::Context),
            Section::Task => Some(ScalarField::Task),
            Section::Constraints => Some(ScalarField::Constraints),
            Section::Format => Some(ScalarField::Format),
            Section::SuccessCriteria => Some(ScalarField::SuccessCriteria),
            Section::Examples => None,
            Section::Input => Some(ScalarField::Input),
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl FromStr for Section {
    type Err = CoreError;

    /// Accepts the record key, the tag name, or either in any case.
    fn from_str(s: &str) -> CoreResult<Self> {
        let wanted = s.trim();
        Section::ORDER
            .iter()
            .copied()
            .find(|section| {
                section.key().eq_ignore_ascii_case(wanted)
                    || section.tag().eq_ignore_ascii_case(wanted)
            })
            .ok_or_else(|| CoreError::parse(format!("Unknown section: {}", wanted)))
    }
}

// ============================================================================
// ScalarField
// ============================================================================

/// One of the free-text fields of a [`PromptRecord`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ScalarField {
    Task,
    Role,
    Context,
    Constraints,
    Format,
    SuccessCriteria,
    Input,
}

impl ScalarField {
    pub const ALL: [ScalarField; 7] = [
        ScalarField::Task,
        ScalarField::Role,
        ScalarField::Context,
        ScalarField::Constraints,
        ScalarField::Format,
        ScalarField::SuccessCriteria,
        ScalarField::Input,
    ];

    pub fn section(&self) -> Section {
        match self {
            ScalarField::Task => Section::Task,
            ScalarField::Role => Section::Role,
            ScalarField::Context => Section::Context,
            ScalarField::Constraints => Section::Constraints,
            ScalarField::Format => Section::Format,
            ScalarField::SuccessCriteria => Section::SuccessCriteria,
            ScalarField::Input => Section::Input,
        }
    }

    pub fn key(&self) -> &'static str {
        self.section().key()
    }
}

impl FromStr for ScalarField {
    type Err = CoreError;

    fn from_str(s: &str) -> CoreResult<Self> {
        let section: Section = s.parse()?;
        section
            .scalar_field()
            .ok_or_else(|| CoreError::parse(format!("Not a text field: {}", s.trim())))
    }
}

// ============================================================================
// Examples
// ============================================================================

/// Which half of an example an update targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExampleField {
    Input,
    Output,
}

impl FromStr for ExampleField {
    type Err = CoreError;

    fn from_str(s: &str) -> CoreResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "input" => Ok(ExampleField::Input),
            "output" => Ok(ExampleField::Output),
            other => Err(CoreError::parse(format!(
                "Unknown example field: {}. Expected 'input' or 'output'",
                other
            ))),
        }
    }
}

/// An input/output demonstration pair.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Example {
    /// Unique for the lifetime of the record; never reused
    pub id: String,
    #[serde(default)]
    pub input: String,
    #[serde(default)]
    pub output: String,
}

impl Example {
    /// An example with no content, as created by "add example".
    pub fn empty(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            input: String::new(),
            output: String::new(),
        }
    }

    /// Whether either half has non-whitespace content.
    pub fn has_content(&self) -> bool {
        !self.input.trim().is_empty() || !self.output.trim().is_empty()
    }

    pub fn set(&mut self, field: ExampleField, value: String) {
        match field {
            ExampleField::Input => self.input = value,
            ExampleField::Output => self.output = value,
        }
    }
}

// ============================================================================
// EnabledSections
// ============================================================================

/// Per-section inclusion switches. All sections start enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EnabledSections {
    pub constraints: bool,
    pub format: bool,
    pub context: bool,
    pub role: bool,
    pub examples: bool,
    pub success_criteria: bool,
    pub input: bool,
}

impl Default for EnabledSections {
    fn default() -> Self {
        Self {
            constraints: true,
            format: true,
            context: true,
            role: true,
            examples: true,
            success_criteria: true,
            input: true,
        }
    }
}

impl EnabledSections {
    /// Whether a section is switched on. `task` has no switch and is always on.
    pub fn is_enabled(&self, section: Section) -> bool {
        match section {
            Section::Task => true,
            Section::Role => self.role,
            Section::Context => self.context,
            Section::Constraints => self.constraints,
            Section::Format => self.format,
            Section::SuccessCriteria => self.success_criteria,
            Section::Examples => self.examples,
            Section::Input => self.input,
        }
    }

    fn flag_mut(&mut self, section: Section) -> Option<&mut bool> {
        match section {
            Section::Task => None,
            Section::Role => Some(&mut self.role),
            Section::Context => Some(&mut self.context),
            Section::Constraints => Some(&mut self.constraints),
            Section::Format => Some(&mut self.format),
            Section::SuccessCriteria => Some(&mut self.success_criteria),
            Section::Examples => Some(&mut self.examples),
            Section::Input => Some(&mut self.input),
        }
    }

    /// Set a switch. Returns `false` for `task`, which cannot be switched.
    pub fn set(&mut self, section: Section, enabled: bool) -> bool {
        match self.flag_mut(section) {
            Some(flag) => {
                *flag = enabled;
                true
            }
            None => false,
        }
    }

    /// Flip a switch. Returns `false` for `task`, which cannot be switched.
    pub fn toggle(&mut self, section: Section) -> bool {
        match self.flag_mut(section) {
            Some(flag) => {
                *flag = !*flag;
                true
            }
            None => false,
        }
    }

    /// Overlay the keys present in `patch`; absent keys keep their value.
    pub fn merge(&mut self, patch: &EnabledSectionsPatch) {
        let pairs = [
            (Section::Constraints, patch.constraints),
            (Section::Format, patch.format),
            (Section::Context, patch.context),
            (Section::Role, patch.role),
            (Section::Examples, patch.examples),
            (Section::SuccessCriteria, patch.success_criteria),
            (Section::Input, patch.input),
        ];
        for (section, value) in pairs {
            if let Some(value) = value {
                self.set(section, value);
            }
        }
    }
}

/// Partial set of section switches, as carried by a template.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EnabledSectionsPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub constraints: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub examples: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub success_criteria: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input: Option<bool>,
}

// ============================================================================
// PromptRecord
// ============================================================================

/// The structured input to the serializer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PromptRecord {
    pub task: String,
    pub constraints: String,
    pub format: String,
    pub context: String,
    pub role: String,
    pub examples: Vec<Example>,
    pub success_criteria: String,
    pub input: String,
    pub enabled_sections: EnabledSections,
}

impl PromptRecord {
    pub fn field(&self, field: ScalarField) -> &str {
        match field {
            ScalarField::Task => &self.task,
            ScalarField::Role => &self.role,
            ScalarField::Context => &self.context,
            ScalarField::Constraints => &self.constraints,
            ScalarField::Format => &self.format,
            ScalarField::SuccessCriteria => &self.success_criteria,
            ScalarField::Input => &self.input,
        }
    }

    pub fn set_field(&mut self, field: ScalarField, value: String) {
        let slot = match field {
            ScalarField::Task => &mut self.task,
            ScalarField::Role => &mut self.role,
            ScalarField::Context => &mut self.context,
            ScalarField::Constraints => &mut self.constraints,
            ScalarField::Format => &mut self.format,
            ScalarField::SuccessCriteria => &mut self.success_criteria,
            ScalarField::Input => &mut self.input,
        };
        *slot = value;
    }

    pub fn example_mut(&mut self, id: &str) -> Option<&mut Example> {
        self.examples.iter_mut().find(|ex| ex.id == id)
    }

    /// Build a record from defaults overlaid with a template's partial data.
    ///
    /// Scalar fields and the example list are taken from the template when
    /// present; section switches are merged key by key.
    pub fn from_template(data: &TemplateData) -> Self {
        let mut record = PromptRecord::default();
        for field in ScalarField::ALL {
            if let Some(value) = data.field(field) {
                record.set_field(field, value.to_string());
            }
        }
        if let Some(examples) = &data.examples {
            record.examples = examples.clone();
        }
        if let Some(patch) = &data.enabled_sections {
            record.enabled_sections.merge(patch);
        }
        record
    }
}

/// Partial record carried by a template. Absent keys keep their default.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TemplateData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub constraints: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub examples: Option<Vec<Example>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub success_criteria: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled_sections: Option<EnabledSectionsPatch>,
}

impl TemplateData {
    pub fn field(&self, field: ScalarField) -> Option<&str> {
        let value = match field {
            ScalarField::Task => &self.task,
            ScalarField::Role => &self.role,
            ScalarField::Context => &self.context,
            ScalarField::Constraints => &self.constraints,
            ScalarField::Format => &self.format,
            ScalarField::SuccessCriteria => &self.success_criteria,
            ScalarField::Input => &self.input,
        };
        value.as_deref()
    }
}
