//! Preview Integration Tests
//!
//! The edit regime of the preview and the copy indicator.

use std::time::Duration;

use easy_prompt::services::clipboard::CopyStatus;
use easy_prompt::services::form::FormAction;
use easy_prompt::services::SessionEvent;
use easy_prompt_core::ScalarField;

use super::support::harness;

fn set_task(value: &str) -> FormAction {
    FormAction::SetField {
        field: ScalarField::Task,
        value: value.to_string(),
    }
}

#[tokio::test]
async fn test_preview_tracks_form_until_edited() {
    let h = harness();
    h.state.dispatch(set_task("First")).await;
    assert_eq!(h.state.preview_view().await.text, "<task>\nFirst\n</task>");

    let view = h.state.edit_preview("Custom prompt".to_string()).await;
    assert!(view.is_edited);

    h.state.dispatch(set_task("Second")).await;
    let view = h.state.preview_view().await;
    assert_eq!(view.text, "Custom prompt");
    assert!(view.is_edited);
    assert_eq!(view.stats.characters, "Custom prompt".len());
}

#[tokio::test]
async fn test_editing_back_to_generated_reattaches() {
    let h = harness();
    h.state.dispatch(set_task("Go")).await;
    h.state.edit_preview("something else".to_string()).await;
    let view = h
        .state
        .edit_preview("<task>\nGo\n</task>".to_string())
        .await;
    assert!(!view.is_edited);

    h.state.dispatch(set_task("Stop")).await;
    assert_eq!(h.state.preview_view().await.text, "<task>\nStop\n</task>");
}

#[tokio::test]
async fn test_edit_emits_event() {
    let h = harness();
    let mut rx = h.state.subscribe();
    h.state.edit_preview("hand written".to_string()).await;
    assert_eq!(
        rx.recv().await.unwrap(),
        SessionEvent::PreviewEdited { is_edited: true }
    );
}

#[tokio::test(start_paused = true)]
async fn test_copy_writes_preview_and_reverts_indicator() {
    let h = harness();
    h.state.dispatch(set_task("Copy me")).await;

    let status = h.state.copy_preview().await.unwrap();
    assert_eq!(status, CopyStatus::Copied);
    assert_eq!(
        h.clipboard.written.lock().unwrap().as_slice(),
        ["<task>\nCopy me\n</task>".to_string()]
    );
    assert_eq!(h.state.preview_view().await.copy_status, CopyStatus::Copied);

    tokio::time::sleep(Duration::from_millis(2100)).await;
    assert_eq!(h.state.copy_status(), CopyStatus::Idle);
}

#[tokio::test]
async fn test_copy_uses_edited_text() {
    let h = harness();
    h.state.dispatch(set_task("Generated")).await;
    h.state.edit_preview("Edited by hand".to_string()).await;
    h.state.copy_preview().await.unwrap();
    assert_eq!(
        h.clipboard.written.lock().unwrap().last().map(String::as_str),
        Some("Edited by hand")
    );
}

#[tokio::test]
async fn test_whitespace_preview_counts_as_empty() {
    let h = harness();
    let view = h.state.edit_preview("   \n".to_string()).await;
    assert!(view.is_empty);
    let hint = view.hint.unwrap();
    assert!(hint.contains("Minimum required: Task"));
    assert!(hint.contains("Recommended: Task + Constraints + Format"));
    assert!(h.state.copy_preview().await.is_err());
    assert!(h.clipboard.written.lock().unwrap().is_empty());
}
