//! Catalog Entry Types
//!
//! Read-only presets offered next to the form. A template replaces the whole
//! record; a persona only replaces the role text.

use serde::{Deserialize, Serialize};

use crate::record::TemplateData;

/// A named, pre-built partial record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Template {
    pub id: String,
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub data: TemplateData,
}

/// A named role text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Persona {
    pub id: String,
    pub name: String,
    pub description: String,
    pub role: String,
}
