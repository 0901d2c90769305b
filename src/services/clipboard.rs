//! Clipboard
//!
//! Copying the preview text to the system clipboard, plus the transient
//! indicator shown after a copy. The indicator switches to `Copied` (or
//! `Failed`) and falls back to `Idle` once the feedback period elapses; a
//! newer copy restarts the period.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::services::events::{EventSender, SessionEvent};
use crate::utils::error::{AppError, AppResult};

/// Write-only access to a clipboard.
pub trait ClipboardWriter: Send + Sync {
    fn write_text(&self, text: &str) -> AppResult<()>;
}

/// The operating system clipboard.
///
/// The handle is opened on first use and kept for the life of the process;
/// on X11/Wayland the owning process serves the contents.
#[derive(Default)]
pub struct SystemClipboard {
    handle: Mutex<Option<arboard::Clipboard>>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ClipboardWriter for SystemClipboard {
    fn write_text(&self, text: &str) -> AppResult<()> {
        let mut guard = self
            .handle
            .lock()
            .map_err(|_| AppError::internal("clipboard lock poisoned"))?;
        if guard.is_none() {
            let clipboard = arboard::Clipboard::new()
                .map_err(|e| AppError::clipboard(format!("Failed to open clipboard: {}", e)))?;
            *guard = Some(clipboard);
        }
        match guard.as_mut() {
            Some(clipboard) => clipboard
                .set_text(text.to_string())
                .map_err(|e| AppError::clipboard(format!("Failed to write clipboard: {}", e))),
            None => Err(AppError::clipboard("Clipboard unavailable")),
        }
    }
}

/// State of the copy button.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CopyStatus {
    #[default]
    Idle,
    Copied,
    Failed,
}

#[derive(Debug, Default)]
struct IndicatorState {
    status: CopyStatus,
    /// Bumped on every report so stale revert timers do nothing
    generation: u64,
}

/// Transient copy feedback.
#[derive(Debug, Clone)]
pub struct CopyIndicator {
    state: Arc<Mutex<IndicatorState>>,
    feedback_ms: Arc<AtomicU64>,
    events: EventSender,
}

impl CopyIndicator {
    pub fn new(feedback: Duration, events: EventSender) -> Self {
        Self {
            state: Arc::new(Mutex::new(IndicatorState::default())),
            feedback_ms: Arc::new(AtomicU64::new(feedback.as_millis() as u64)),
            events,
        }
    }

    pub fn feedback(&self) -> Duration {
        Duration::from_millis(self.feedback_ms.load(Ordering::SeqCst))
    }

    /// Change how long feedback stays up. Applies to later copies.
    pub fn set_feedback(&self, feedback: Duration) {
        self.feedback_ms
            .store(feedback.as_millis() as u64, Ordering::SeqCst);
    }

    pub fn status(&self) -> CopyStatus {
        self.state
            .lock()
            .map(|state| state.status)
            .unwrap_or_default()
    }

    /// Show the outcome of a copy and schedule the revert to `Idle`.
    /// Must be called inside a Tokio runtime.
    pub fn report(&self, status: CopyStatus) {
        let generation = match self.state.lock() {
            Ok(mut state) => {
                state.status = status;
                state.generation += 1;
                state.generation
            }
            Err(_) => return,
        };
        let _ = self.events.send(SessionEvent::CopyStatusChanged { status });

        let state = Arc::clone(&self.state);
        let events = self.events.clone();
        let feedback = self.feedback();
        tokio::spawn(async move {
            tokio::time::sleep(feedback).await;
            let reverted = match state.lock() {
                Ok(mut state) if state.generation == generation => {
                    state.status = CopyStatus::Idle;
                    true
                }
                _ => false,
            };
            if reverted {
                let _ = events.send(SessionEvent::CopyStatusChanged {
                    status: CopyStatus::Idle,
                });
            }
        });
    }
}

/// Copy `text` and update the indicator. Failures are logged and shown as
/// `Failed`; they are never returned to the caller and never retried.
pub fn copy_with_feedback(
    clipboard: &dyn ClipboardWriter,
    indicator: &CopyIndicator,
    text: &str,
) -> CopyStatus {
    let status = match clipboard.write_text(text) {
        Ok(()) => {
            debug!(chars = text.chars().count(), "copied preview to clipboard");
            CopyStatus::Copied
        }
        Err(e) => {
            warn!(error = %e, "clipboard write failed");
            CopyStatus::Failed
        }
    };
    indicator.report(status);
    status
}
