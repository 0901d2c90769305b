//! Application State
//!
//! Owns every service and is the only path through which the prompt session
//! is mutated. Commands take `&AppState`.

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{broadcast, RwLock};
use tracing::{debug, info};

use easy_prompt_core::{section_count, PromptStats, EMPTY_PREVIEW_HINT};

use crate::models::response::{FormView, PreviewView};
use crate::models::settings::{AppConfig, SettingsUpdate};
use crate::services::catalog::CatalogRegistry;
use crate::services::clipboard::{
    copy_with_feedback, ClipboardWriter, CopyIndicator, CopyStatus, SystemClipboard,
};
use crate::services::events::{self, EventSender, SessionEvent};
use crate::services::form::{FormAction, FormChange, PromptSession};
use crate::services::persistence::{load_record, DebouncedPersister};
use crate::storage::{ConfigService, JsonFileStore, KeyValueStore};
use crate::utils::error::{AppError, AppResult};
use crate::utils::paths::{catalog_path, store_path};

/// Application state shared by all commands
pub struct AppState {
    /// Form record, selection markers and preview
    session: Arc<RwLock<PromptSession>>,
    /// Templates and personas, fixed after startup
    catalog: Arc<CatalogRegistry>,
    /// Backing store for form snapshots
    store: Arc<dyn KeyValueStore>,
    persister: DebouncedPersister,
    clipboard: Arc<dyn ClipboardWriter>,
    copy_indicator: CopyIndicator,
    /// Configuration service for app settings
    config: RwLock<ConfigService>,
    events: EventSender,
}

impl AppState {
    /// Assemble the state from already-opened services, restoring the form
    /// from the store's snapshot (or defaults).
    pub fn new(
        config: ConfigService,
        store: Arc<dyn KeyValueStore>,
        catalog: CatalogRegistry,
        clipboard: Arc<dyn ClipboardWriter>,
    ) -> Self {
        let settings = config.get_config_clone();
        let events = events::channel();
        let session = Arc::new(RwLock::new(PromptSession::new(load_record(store.as_ref()))));
        let persister = DebouncedPersister::new(
            Arc::clone(&store),
            Arc::clone(&session),
            events.clone(),
            Duration::from_millis(settings.persist_debounce_ms),
        );
        let copy_indicator = CopyIndicator::new(
            Duration::from_millis(settings.copy_feedback_ms),
            events.clone(),
        );

        Self {
            session,
            catalog: Arc::new(catalog),
            store,
            persister,
            clipboard,
            copy_indicator,
            config: RwLock::new(config),
            events,
        }
    }

    /// Open the on-disk services under an already-created `data_dir` and the
    /// system clipboard. `config` is the service the caller loaded from that
    /// directory, so logging and the state share one set of settings.
    pub fn open(data_dir: &Path, config: ConfigService) -> AppResult<Self> {
        let extension = config
            .get_config()
            .catalog_path
            .clone()
            .unwrap_or_else(|| catalog_path(data_dir));
        let catalog = CatalogRegistry::load(Some(extension.as_path()))?;
        let store: Arc<dyn KeyValueStore> = Arc::new(JsonFileStore::open(store_path(data_dir)));
        info!(data_dir = %data_dir.display(), "opened application state");
        Ok(Self::new(
            config,
            store,
            catalog,
            Arc::new(SystemClipboard::new()),
        ))
    }

    // ========================================================================
    // Form
    // ========================================================================

    /// Apply a form action. Schedules a snapshot write when the record
    /// changed and notifies listeners.
    pub async fn dispatch(&self, action: FormAction) -> FormChange {
        let kind = action.kind();
        let clears = matches!(action, FormAction::ClearAll);
        let (change, event) = {
            let mut session = self.session.write().await;
            let change = session.dispatch(action);
            let event = if clears {
                Some(SessionEvent::Cleared)
            } else if change.record_changed {
                Some(SessionEvent::RecordChanged {
                    sections: section_count(session.record()),
                    preview_edited: session.preview().is_edited(),
                })
            } else {
                None
            };
            (change, event)
        };

        if change.record_changed {
            self.persister.schedule();
        }
        if let Some(event) = event {
            let _ = self.events.send(event);
        }
        debug!(action = kind, changed = change.record_changed, "dispatched form action");
        change
    }

    /// Load a catalog template by id.
    pub async fn load_template(&self, id: &str) -> AppResult<FormChange> {
        let template = self.catalog.template(id)?.clone();
        Ok(self.dispatch(FormAction::LoadTemplate { template }).await)
    }

    /// Load a catalog persona by id.
    pub async fn load_persona(&self, id: &str) -> AppResult<FormChange> {
        let persona = self.catalog.persona(id)?.clone();
        Ok(self.dispatch(FormAction::LoadPersona { persona }).await)
    }

    pub async fn form_view(&self) -> FormView {
        let session = self.session.read().await;
        let form = session.form();
        FormView {
            record: form.record().clone(),
            active_template_id: form.active_template_id().map(str::to_string),
            active_persona_id: form.active_persona_id().map(str::to_string),
        }
    }

    // ========================================================================
    // Preview
    // ========================================================================

    pub async fn preview_view(&self) -> PreviewView {
        let session = self.session.read().await;
        let preview = session.preview();
        PreviewView {
            text: preview.text().to_string(),
            is_edited: preview.is_edited(),
            is_empty: preview.is_empty(),
            hint: preview.is_empty().then(|| EMPTY_PREVIEW_HINT.to_string()),
            stats: session.stats(),
            copy_status: self.copy_indicator.status(),
        }
    }

    /// Replace the preview text with a user edit.
    pub async fn edit_preview(&self, value: String) -> PreviewView {
        let is_edited = {
            let mut session = self.session.write().await;
            session.edit_preview(value);
            session.preview().is_edited()
        };
        let _ = self.events.send(SessionEvent::PreviewEdited { is_edited });
        debug!(is_edited, "preview edited");
        self.preview_view().await
    }

    pub async fn stats(&self) -> PromptStats {
        self.session.read().await.stats()
    }

    /// Copy the preview text. Refused when the preview is blank; clipboard
    /// failures are reported through the returned status.
    pub async fn copy_preview(&self) -> AppResult<CopyStatus> {
        let text = {
            let session = self.session.read().await;
            if session.preview().is_empty() {
                return Err(AppError::validation("Nothing to copy: the preview is empty"));
            }
            session.preview().text().to_string()
        };
        Ok(copy_with_feedback(
            self.clipboard.as_ref(),
            &self.copy_indicator,
            &text,
        ))
    }

    pub fn copy_status(&self) -> CopyStatus {
        self.copy_indicator.status()
    }

    // ========================================================================
    // Persistence & events
    // ========================================================================

    /// Write the current record now, cancelling any pending write.
    pub async fn flush(&self) -> AppResult<()> {
        self.persister.flush().await
    }

    pub fn has_pending_write(&self) -> bool {
        self.persister.has_pending()
    }

    /// Listen for session events.
    pub fn subscribe(&self) -> broadcast::Receiver<SessionEvent> {
        self.events.subscribe()
    }

    pub fn catalog(&self) -> &CatalogRegistry {
        &self.catalog
    }

    // ========================================================================
    // Configuration & health
    // ========================================================================

    /// Get the current configuration
    pub async fn get_config(&self) -> AppConfig {
        self.config.read().await.get_config_clone()
    }

    /// Update the configuration; timing changes apply to the next write/copy
    pub async fn update_config(&self, update: SettingsUpdate) -> AppResult<AppConfig> {
        let config = self.config.write().await.update_config(update)?;
        self.apply_timings(&config);
        info!(
            persist_debounce_ms = config.persist_debounce_ms,
            copy_feedback_ms = config.copy_feedback_ms,
            "settings updated"
        );
        Ok(config)
    }

    /// Restore default settings on disk and in the running services
    pub async fn reset_config(&self) -> AppResult<AppConfig> {
        let config = {
            let mut service = self.config.write().await;
            service.reset()?;
            service.get_config_clone()
        };
        self.apply_timings(&config);
        info!("settings reset to defaults");
        Ok(config)
    }

    fn apply_timings(&self, config: &AppConfig) {
        self.persister
            .set_delay(Duration::from_millis(config.persist_debounce_ms));
        self.copy_indicator
            .set_feedback(Duration::from_millis(config.copy_feedback_ms));
    }

    /// Check if the form store is healthy
    pub fn is_store_healthy(&self) -> bool {
        self.store.is_healthy()
    }

    /// Check if config is healthy
    pub fn is_config_healthy(&self) -> bool {
        self.config
            .try_read()
            .map(|config| config.is_healthy())
            .unwrap_or(false)
    }
}
