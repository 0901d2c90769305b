//! Catalog Commands
//!
//! Read-only listings of templates, personas and form fields.

use easy_prompt_core::{form_fields, is_filled, Persona, Template};

use crate::models::response::{CommandResponse, FieldView};
use crate::state::AppState;

/// List all templates
pub async fn list_templates(state: &AppState) -> CommandResponse<Vec<Template>> {
    CommandResponse::ok(state.catalog().templates().to_vec())
}

/// List all personas
pub async fn list_personas(state: &AppState) -> CommandResponse<Vec<Persona>> {
    CommandResponse::ok(state.catalog().personas().to_vec())
}

/// List form fields in display order with their state in the current record
pub async fn list_fields(state: &AppState) -> CommandResponse<Vec<FieldView>> {
    let record = state.form_view().await.record;
    let fields = form_fields()
        .iter()
        .map(|info| FieldView {
            info: *info,
            tag: info.section.tag(),
            toggleable: info.section.is_toggleable(),
            enabled: record.enabled_sections.is_enabled(info.section),
            filled: is_filled(&record, info.section),
        })
        .collect();
    CommandResponse::ok(fields)
}
