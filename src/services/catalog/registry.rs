//! Catalog Registry
//!
//! Holds the templates and personas offered by the application: the built-in
//! sets, optionally extended at startup from a user `catalog.json`. The
//! registry is read-only once constructed.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use easy_prompt_core::{Persona, Template};

use crate::utils::error::{AppError, AppResult};

use super::personas::builtin_personas;
use super::templates::builtin_templates;

/// On-disk shape of a user catalog file. Both lists are optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogFile {
    pub templates: Vec<Template>,
    pub personas: Vec<Persona>,
}

#[derive(Debug, Clone)]
pub struct CatalogRegistry {
    templates: Vec<Template>,
    personas: Vec<Persona>,
}

impl Default for CatalogRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

impl CatalogRegistry {
    /// Registry containing only the built-in entries.
    pub fn builtin() -> Self {
        Self {
            templates: builtin_templates(),
            personas: builtin_personas(),
        }
    }

    /// Built-ins plus the entries of `extension`, if given and present.
    ///
    /// A missing file is not an error. A malformed file or one that reuses an
    /// existing id is rejected.
    pub fn load(extension: Option<&Path>) -> AppResult<Self> {
        let mut registry = Self::builtin();
        if let Some(path) = extension {
            if path.exists() {
                let content = fs::read_to_string(path)?;
                let file: CatalogFile = serde_json::from_str(&content).map_err(|e| {
                    AppError::validation(format!("Invalid catalog {}: {}", path.display(), e))
                })?;
                registry.extend(file)?;
                info!(
                    path = %path.display(),
                    templates = registry.templates.len(),
                    personas = registry.personas.len(),
                    "loaded user catalog"
                );
            } else {
                debug!(path = %path.display(), "no user catalog");
            }
        }
        Ok(registry)
    }

    /// Append entries, rejecting the whole batch on any duplicate id.
    pub fn extend(&mut self, file: CatalogFile) -> AppResult<()> {
        check_unique(
            "template",
            self.templates.iter().chain(&file.templates).map(|t| t.id.as_str()),
        )?;
        check_unique(
            "persona",
            self.personas.iter().chain(&file.personas).map(|p| p.id.as_str()),
        )?;
        self.templates.extend(file.templates);
        self.personas.extend(file.personas);
        Ok(())
    }

    pub fn templates(&self) -> &[Template] {
        &self.templates
    }

    pub fn personas(&self) -> &[Persona] {
        &self.personas
    }

    pub fn template(&self, id: &str) -> AppResult<&Template> {
        self.templates
            .iter()
            .find(|t| t.id == id)
            .ok_or_else(|| AppError::not_found(format!("Template: {}", id)))
    }

    pub fn persona(&self, id: &str) -> AppResult<&Persona> {
        self.personas
            .iter()
            .find(|p| p.id == id)
            .ok_or_else(|| AppError::not_found(format!("Persona: {}", id)))
    }
}

fn check_unique<'a>(kind: &str, ids: impl Iterator<Item = &'a str>) -> AppResult<()> {
    let mut seen = HashSet::new();
    for id in ids {
        if id.trim().is_empty() {
            return Err(AppError::validation(format!("Empty {} id", kind)));
        }
        if !seen.insert(id) {
            return Err(AppError::validation(format!("Duplicate {} id: {}", kind, id)));
        }
    }
    Ok(())
}
