//! Shared fixtures for integration tests

use std::sync::{Arc, Mutex};

use tempfile::TempDir;

use easy_prompt::services::catalog::CatalogRegistry;
use easy_prompt::services::clipboard::ClipboardWriter;
use easy_prompt::storage::{ConfigService, KeyValueStore, MemoryStore};
use easy_prompt::{AppError, AppResult, AppState};

/// Clipboard that remembers what was written
#[derive(Default)]
pub struct RecordingClipboard {
    pub written: Mutex<Vec<String>>,
}

impl ClipboardWriter for RecordingClipboard {
    fn write_text(&self, text: &str) -> AppResult<()> {
        self.written.lock().unwrap().push(text.to_string());
        Ok(())
    }
}

/// Clipboard that always fails
pub struct FailingClipboard;

impl ClipboardWriter for FailingClipboard {
    fn write_text(&self, _text: &str) -> AppResult<()> {
        Err(AppError::clipboard("clipboard unavailable"))
    }
}

pub struct Harness {
    pub _dir: TempDir,
    pub store: Arc<MemoryStore>,
    pub clipboard: Arc<RecordingClipboard>,
    pub state: AppState,
}

/// State over an in-memory store with built-in catalogs
pub fn harness() -> Harness {
    harness_with_store(MemoryStore::new())
}

pub fn harness_with_store(store: MemoryStore) -> Harness {
    let dir = tempfile::tempdir().unwrap();
    let config = ConfigService::new(dir.path()).unwrap();
    let store = Arc::new(store);
    let clipboard = Arc::new(RecordingClipboard::default());
    let state = AppState::new(
        config,
        Arc::clone(&store) as Arc<dyn KeyValueStore>,
        CatalogRegistry::builtin(),
        Arc::clone(&clipboard) as Arc<dyn ClipboardWriter>,
    );
    Harness {
        _dir: dir,
        store,
        clipboard,
        state,
    }
}
