//! Command Layer Integration Tests
//!
//! Commands return `CommandResponse` values; failures travel in the
//! response. Also drives the interactive session end to end.

use std::io::Cursor;

use easy_prompt::cli::run_session;
use easy_prompt::services::clipboard::CopyStatus;
use easy_prompt::services::persistence::FORM_STORE_KEY;
use easy_prompt::storage::KeyValueStore;
use easy_prompt::{
    add_example, clear_all, copy_preview, edit_preview, get_form, get_health, get_preview,
    get_settings, get_stats, list_fields, list_personas, list_templates, load_persona,
    load_template, remove_example, reset_settings, set_field, toggle_section, update_example,
    update_settings, AppConfig, SettingsUpdate,
};

use super::support::harness;

#[tokio::test]
async fn test_set_field_accepts_keys_and_tags() {
    let h = harness();
    let response = set_field(&h.state, "successCriteria", "All tests pass".to_string()).await;
    assert!(response.success);
    let response = set_field(&h.state, "success_criteria", "Green build".to_string()).await;
    assert!(response.success);
    assert_eq!(
        response.data.unwrap().record.success_criteria,
        "Green build"
    );
}

#[tokio::test]
async fn test_invalid_names_are_reported_in_response() {
    let h = harness();
    let response = set_field(&h.state, "examples", "x".to_string()).await;
    assert!(!response.success);
    assert!(response.error.is_some());

    let response = toggle_section(&h.state, "footer").await;
    assert!(!response.success);

    let response = load_persona(&h.state, "nobody").await;
    assert_eq!(response.error.as_deref(), Some("Not found: Persona: nobody"));

    let response = load_template(&h.state, "nothing").await;
    assert!(!response.success);
    assert!(get_form(&h.state).await.data.unwrap().active_template_id.is_none());
}

#[tokio::test]
async fn test_example_commands() {
    let h = harness();
    let added = add_example(&h.state).await.data.unwrap();
    assert_eq!(added.form.record.examples.len(), 1);

    let form = update_example(&h.state, added.id.clone(), "input", "hello".to_string())
        .await
        .data
        .unwrap();
    assert_eq!(form.record.examples[0].input, "hello");

    let response = update_example(&h.state, added.id.clone(), "answer", "x".to_string()).await;
    assert!(!response.success);

    let form = remove_example(&h.state, added.id).await.data.unwrap();
    assert!(form.record.examples.is_empty());
}

#[tokio::test]
async fn test_preview_commands() {
    let h = harness();
    let empty = get_preview(&h.state).await.data.unwrap();
    assert!(empty.is_empty);
    assert!(!copy_preview(&h.state).await.success);

    set_field(&h.state, "task", "Explain recursion.".to_string()).await;
    let stats = get_stats(&h.state).await.data.unwrap();
    assert_eq!(stats.sections, 1);

    let edited = edit_preview(&h.state, "Explain it simply.".to_string())
        .await
        .data
        .unwrap();
    assert!(edited.is_edited);
    assert_eq!(copy_preview(&h.state).await.data, Some(CopyStatus::Copied));

    let cleared = clear_all(&h.state).await.data.unwrap();
    assert!(cleared.record.task.is_empty());
    assert!(!get_preview(&h.state).await.data.unwrap().is_edited);
}

#[tokio::test]
async fn test_list_commands() {
    let h = harness();
    assert!(list_templates(&h.state).await.data.unwrap().len() >= 4);
    assert!(list_personas(&h.state).await.data.unwrap().len() >= 2);

    set_field(&h.state, "task", "Do".to_string()).await;
    toggle_section(&h.state, "format").await;
    let fields = list_fields(&h.state).await.data.unwrap();
    assert_eq!(fields.len(), 8);
    let task = fields.iter().find(|f| f.tag == "task").unwrap();
    assert!(task.filled && task.enabled);
    assert!(!task.toggleable);
    let format = fields.iter().find(|f| f.tag == "format").unwrap();
    assert!(!format.enabled && !format.filled);
    assert!(fields.iter().filter(|f| f.tag != "task").all(|f| f.toggleable));

    let json = serde_json::to_value(&fields[0]).unwrap();
    assert_eq!(json["label"], "Task");
    assert_eq!(json["status"], "required");
    assert_eq!(json["toggleable"], false);
}

#[tokio::test]
async fn test_settings_and_health() {
    let h = harness();
    assert_eq!(get_settings(&h.state).await.data.unwrap().persist_debounce_ms, 500);

    let rejected = update_settings(
        &h.state,
        SettingsUpdate {
            persist_debounce_ms: Some(1),
            ..Default::default()
        },
    )
    .await;
    assert!(!rejected.success);
    assert_eq!(get_settings(&h.state).await.data.unwrap().persist_debounce_ms, 500);

    let health = get_health(&h.state).await.data.unwrap();
    assert_eq!(health.status, "healthy");
    assert!(health.store && health.config);
}

#[tokio::test]
async fn test_reset_settings_restores_defaults() {
    let h = harness();
    let updated = update_settings(
        &h.state,
        SettingsUpdate {
            copy_feedback_ms: Some(750),
            ..Default::default()
        },
    )
    .await;
    assert_eq!(updated.data.unwrap().copy_feedback_ms, 750);

    let reset = reset_settings(&h.state).await;
    assert!(reset.success);
    assert_eq!(reset.data.unwrap(), AppConfig::default());
    assert_eq!(get_settings(&h.state).await.data.unwrap().copy_feedback_ms, 2000);
}

#[tokio::test]
async fn test_session_script_edits_and_persists() {
    let h = harness();
    let script = "\
set task Review the diff\\nFocus on errors
persona software-engineer
add-example
example 1 input fn main() {}
example 1 output Looks fine
toggle role
bogus
show
stats
quit
set task never reached
";
    let mut out = Vec::new();
    run_session(&h.state, Cursor::new(script), &mut out).await.unwrap();
    let out = String::from_utf8(out).unwrap();

    assert!(out.contains("loaded persona software-engineer"));
    assert!(out.contains("role off"));
    assert!(out.contains("error: Validation error: unknown command 'bogus'"));
    assert!(out.contains("<task>\nReview the diff\nFocus on errors\n</task>"));
    assert!(out.contains("Input: fn main() {}\nOutput: Looks fine"));
    assert!(!out.contains("<role>"));
    assert!(out.contains("sections: 2"));

    // Session end flushes the form
    let raw = h.store.get(FORM_STORE_KEY).unwrap().unwrap();
    assert!(raw.contains("Review the diff"));
    assert!(!raw.contains("never reached"));
}
