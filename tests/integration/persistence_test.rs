//! Persistence Integration Tests
//!
//! Snapshot restore at startup, debounced writes and explicit flush, against
//! both the in-memory and the on-disk store.

use std::sync::Arc;
use std::time::Duration;

use easy_prompt::services::catalog::CatalogRegistry;
use easy_prompt::services::clipboard::ClipboardWriter;
use easy_prompt::services::form::FormAction;
use easy_prompt::services::persistence::FORM_STORE_KEY;
use easy_prompt::services::SessionEvent;
use easy_prompt::storage::{ConfigService, JsonFileStore, KeyValueStore, MemoryStore};
use easy_prompt::AppState;
use easy_prompt_core::{PromptRecord, ScalarField};

use super::support::{harness, harness_with_store, RecordingClipboard};

fn set_task(value: &str) -> FormAction {
    FormAction::SetField {
        field: ScalarField::Task,
        value: value.to_string(),
    }
}

fn stored_record(store: &dyn KeyValueStore) -> Option<PromptRecord> {
    store
        .get(FORM_STORE_KEY)
        .unwrap()
        .map(|raw| serde_json::from_str(&raw).unwrap())
}

#[tokio::test(start_paused = true)]
async fn test_burst_of_edits_is_written_once_with_final_state() {
    let h = harness();
    for value in ["S", "Su", "Sum", "Summarize"] {
        h.state.dispatch(set_task(value)).await;
        tokio::time::sleep(Duration::from_millis(100)).await;
    }
    assert_eq!(h.store.write_count(), 0);

    tokio::time::sleep(Duration::from_millis(500)).await;
    assert_eq!(h.store.write_count(), 1);
    assert_eq!(stored_record(h.store.as_ref()).unwrap().task, "Summarize");
    assert!(!h.state.has_pending_write());
}

#[tokio::test(start_paused = true)]
async fn test_no_op_action_does_not_schedule_write() {
    let h = harness();
    h.state
        .dispatch(FormAction::RemoveExample {
            id: "missing".to_string(),
        })
        .await;
    assert!(!h.state.has_pending_write());
    tokio::time::sleep(Duration::from_secs(1)).await;
    assert_eq!(h.store.write_count(), 0);
}

#[tokio::test(start_paused = true)]
async fn test_flush_writes_immediately_and_cancels_timer() {
    let h = harness();
    let mut rx = h.state.subscribe();
    h.state.dispatch(set_task("Now")).await;
    h.state.flush().await.unwrap();
    assert_eq!(h.store.write_count(), 1);

    tokio::time::sleep(Duration::from_secs(1)).await;
    assert_eq!(h.store.write_count(), 1);

    let mut persisted = 0;
    while let Ok(event) = rx.try_recv() {
        if event == SessionEvent::Persisted {
            persisted += 1;
        }
    }
    assert_eq!(persisted, 1);
}

#[tokio::test]
async fn test_state_restores_snapshot_at_startup() {
    let record = PromptRecord {
        task: "Restored".to_string(),
        format: "Bullets".to_string(),
        ..Default::default()
    };
    let store = MemoryStore::with_entry(FORM_STORE_KEY, &serde_json::to_string(&record).unwrap());
    let h = harness_with_store(store);

    assert_eq!(h.state.form_view().await.record, record);
    let preview = h.state.preview_view().await;
    assert!(preview.text.starts_with("<task>\nRestored\n</task>"));
    assert!(!preview.is_edited);
}

#[tokio::test]
async fn test_malformed_snapshot_falls_back_to_defaults() {
    let store = MemoryStore::with_entry(FORM_STORE_KEY, "{\"task\": 42");
    let h = harness_with_store(store);
    assert_eq!(h.state.form_view().await.record, PromptRecord::default());
    assert!(h.state.preview_view().await.is_empty);
}

#[tokio::test]
async fn test_file_store_survives_restart() {
    let dir = tempfile::tempdir().unwrap();
    let store_file = dir.path().join("store.json");

    {
        let state = AppState::new(
            ConfigService::new(dir.path()).unwrap(),
            Arc::new(JsonFileStore::open(&store_file)),
            CatalogRegistry::builtin(),
            Arc::new(RecordingClipboard::default()) as Arc<dyn ClipboardWriter>,
        );
        state.load_persona("software-engineer").await.unwrap();
        state.dispatch(set_task("Plan the refactor")).await;
        state.flush().await.unwrap();
    }

    let raw = std::fs::read_to_string(&store_file).unwrap();
    let file: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert!(file["updated_at"].is_string());
    assert!(file["entries"][FORM_STORE_KEY].is_string());

    let state = AppState::new(
        ConfigService::new(dir.path()).unwrap(),
        Arc::new(JsonFileStore::open(&store_file)),
        CatalogRegistry::builtin(),
        Arc::new(RecordingClipboard::default()) as Arc<dyn ClipboardWriter>,
    );
    let form = state.form_view().await;
    assert_eq!(form.record.task, "Plan the refactor");
    assert!(form.record.role.starts_with("You are a senior software engineer"));
    // Selection markers are not persisted
    assert!(form.active_persona_id.is_none());
}

#[tokio::test]
async fn test_open_uses_data_dir() {
    let dir = tempfile::tempdir().unwrap();
    {
        let state = AppState::open(dir.path(), ConfigService::new(dir.path()).unwrap()).unwrap();
        state.dispatch(set_task("On disk")).await;
        state.flush().await.unwrap();
    }
    assert!(dir.path().join("config.json").exists());
    assert!(dir.path().join("store.json").exists());

    let state = AppState::open(dir.path(), ConfigService::new(dir.path()).unwrap()).unwrap();
    assert_eq!(state.form_view().await.record.task, "On disk");
}
