//! Catalog Integration Tests
//!
//! Built-in catalogs and user catalog extension through the data directory.

use std::fs;

use easy_prompt::services::catalog::{builtin_personas, builtin_templates};
use easy_prompt::storage::ConfigService;
use easy_prompt::{AppError, AppState};

#[test]
fn test_builtin_persona_role_texts() {
    let personas = builtin_personas();
    let engineer = personas.iter().find(|p| p.id == "software-engineer").unwrap();
    assert_eq!(
        engineer.description,
        "Senior full-stack developer with expertise in clean code and system design"
    );
    assert!(engineer
        .role
        .ends_with("long-term technical debt when making recommendations."));

    let devops = personas.iter().find(|p| p.id == "devops-engineer").unwrap();
    assert!(devops.role.contains("cloud platforms (AWS, Azure, GCP)"));
}

#[test]
fn test_builtin_templates_include_presets() {
    let ids: Vec<String> = builtin_templates().into_iter().map(|t| t.id).collect();
    for expected in ["code-review", "summarization", "bug-fix", "data-extraction"] {
        assert!(ids.iter().any(|id| id == expected), "missing {}", expected);
    }
}

#[tokio::test]
async fn test_user_catalog_is_loaded_from_data_dir() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("catalog.json"),
        r#"{
            "personas": [{"id": "pirate", "name": "Pirate", "description": "Arr", "role": "You are a pirate."}],
            "templates": [{"id": "haiku", "name": "Haiku", "description": "Poem",
                           "data": {"task": "Write a haiku about {topic}."}}]
        }"#,
    )
    .unwrap();

    let state = AppState::open(dir.path(), ConfigService::new(dir.path()).unwrap()).unwrap();
    assert!(state.catalog().persona("pirate").is_ok());

    state.load_template("haiku").await.unwrap();
    let form = state.form_view().await;
    assert_eq!(form.record.task, "Write a haiku about {topic}.");
    assert_eq!(form.active_template_id.as_deref(), Some("haiku"));
}

#[test]
fn test_user_catalog_with_duplicate_id_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("catalog.json"),
        r#"{"templates": [{"id": "bug-fix", "name": "Mine", "description": ""}]}"#,
    )
    .unwrap();

    match AppState::open(dir.path(), ConfigService::new(dir.path()).unwrap()) {
        Err(AppError::Validation(message)) => assert!(message.contains("bug-fix")),
        Err(other) => panic!("unexpected error: {}", other),
        Ok(_) => panic!("duplicate id accepted"),
    }
}
