//! Form Commands
//!
//! Commands that edit the prompt record. Field and section names are the
//! record keys (`task`, `successCriteria`, ...) or tag names, in any case.

use easy_prompt_core::{ExampleField, ScalarField, Section};

use crate::models::response::{CommandResponse, ExampleAdded, FormView};
use crate::services::form::FormAction;
use crate::state::AppState;

/// Get the current form record and preset selection
pub async fn get_form(state: &AppState) -> CommandResponse<FormView> {
    CommandResponse::ok(state.form_view().await)
}

/// Replace the text of one field
pub async fn set_field(state: &AppState, field: &str, value: String) -> CommandResponse<FormView> {
    let field: ScalarField = match field.parse() {
        Ok(field) => field,
        Err(e) => return CommandResponse::err(e.to_string()),
    };
    state.dispatch(FormAction::SetField { field, value }).await;
    CommandResponse::ok(state.form_view().await)
}

/// Flip a section's enable switch
pub async fn toggle_section(state: &AppState, section: &str) -> CommandResponse<FormView> {
    let section: Section = match section.parse() {
        Ok(section) => section,
        Err(e) => return CommandResponse::err(e.to_string()),
    };
    state.dispatch(FormAction::ToggleSection { section }).await;
    CommandResponse::ok(state.form_view().await)
}

/// Append an empty example
pub async fn add_example(state: &AppState) -> CommandResponse<ExampleAdded> {
    let change = state.dispatch(FormAction::AddExample).await;
    match change.new_example_id {
        Some(id) => CommandResponse::ok(ExampleAdded {
            id,
            form: state.form_view().await,
        }),
        None => CommandResponse::err("Example was not created"),
    }
}

/// Set the input or output of an example. Unknown ids are ignored.
pub async fn update_example(
    state: &AppState,
    id: String,
    field: &str,
    value: String,
) -> CommandResponse<FormView> {
    let field: ExampleField = match field.parse() {
        Ok(field) => field,
        Err(e) => return CommandResponse::err(e.to_string()),
    };
    state
        .dispatch(FormAction::UpdateExample { id, field, value })
        .await;
    CommandResponse::ok(state.form_view().await)
}

/// Remove an example. Unknown ids are ignored.
pub async fn remove_example(state: &AppState, id: String) -> CommandResponse<FormView> {
    state.dispatch(FormAction::RemoveExample { id }).await;
    CommandResponse::ok(state.form_view().await)
}

/// Reset the form and the preview
pub async fn clear_all(state: &AppState) -> CommandResponse<FormView> {
    state.dispatch(FormAction::ClearAll).await;
    CommandResponse::ok(state.form_view().await)
}

/// Replace the form with a catalog template
pub async fn load_template(state: &AppState, id: &str) -> CommandResponse<FormView> {
    match state.load_template(id).await {
        Ok(_) => CommandResponse::ok(state.form_view().await),
        Err(e) => CommandResponse::err(e.to_string()),
    }
}

/// Replace the role with a catalog persona
pub async fn load_persona(state: &AppState, id: &str) -> CommandResponse<FormView> {
    match state.load_persona(id).await {
        Ok(_) => CommandResponse::ok(state.form_view().await),
        Err(e) => CommandResponse::err(e.to_string()),
    }
}

/// Write the form to the store immediately
pub async fn flush(state: &AppState) -> CommandResponse<()> {
    state.flush().await.into()
}
