//! Debounced Persistence
//!
//! Coalesces bursts of form edits into a single store write. Every call to
//! [`DebouncedPersister::schedule`] aborts the pending timer and starts a new
//! one; when a timer survives its quiet period it reads the record as it is
//! *at that moment* and writes it.
//!
//! Store writes are synchronous file I/O and run on the blocking pool.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::sync::{Mutex as AsyncMutex, RwLock};
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::services::events::{EventSender, SessionEvent};
use crate::services::form::PromptSession;
use crate::storage::KeyValueStore;
use crate::utils::error::{AppError, AppResult};

use super::snapshot::save_record;

/// Read the current record and write it on the blocking pool.
///
/// `write_lock` is held from the read until the blocking write returns, even
/// if the calling task is aborted, so snapshots land in the order they were
/// read.
async fn write_current(
    store: Arc<dyn KeyValueStore>,
    session: &RwLock<PromptSession>,
    write_lock: &Arc<AsyncMutex<()>>,
) -> AppResult<()> {
    let guard = Arc::clone(write_lock).lock_owned().await;
    let record = session.read().await.record().clone();
    tokio::task::spawn_blocking(move || {
        let _guard = guard;
        save_record(store.as_ref(), &record)
    })
    .await
    .map_err(|e| AppError::internal(format!("snapshot write task failed: {}", e)))?
}

pub struct DebouncedPersister {
    store: Arc<dyn KeyValueStore>,
    session: Arc<RwLock<PromptSession>>,
    events: EventSender,
    delay_ms: AtomicU64,
    pending: Mutex<Option<JoinHandle<()>>>,
    write_lock: Arc<AsyncMutex<()>>,
}

impl DebouncedPersister {
    pub fn new(
        store: Arc<dyn KeyValueStore>,
        session: Arc<RwLock<PromptSession>>,
        events: EventSender,
        delay: Duration,
    ) -> Self {
        Self {
            store,
            session,
            events,
            delay_ms: AtomicU64::new(delay.as_millis() as u64),
            pending: Mutex::new(None),
            write_lock: Arc::new(AsyncMutex::new(())),
        }
    }

    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms.load(Ordering::SeqCst))
    }

    /// Change the quiet period. Applies to writes scheduled afterwards.
    pub fn set_delay(&self, delay: Duration) {
        self.delay_ms.store(delay.as_millis() as u64, Ordering::SeqCst);
    }

    /// (Re)start the quiet-period timer. Must be called inside a Tokio runtime.
    pub fn schedule(&self) {
        let Ok(mut pending) = self.pending.lock() else {
            warn!("persister lock poisoned, skipping schedule");
            return;
        };
        if let Some(handle) = pending.take() {
            handle.abort();
        }

        let delay = self.delay();
        let store = Arc::clone(&self.store);
        let session = Arc::clone(&self.session);
        let events = self.events.clone();
        let write_lock = Arc::clone(&self.write_lock);
        *pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            match write_current(store, &session, &write_lock).await {
                Ok(()) => {
                    debug!(delay_ms = delay.as_millis() as u64, "form snapshot persisted");
                    let _ = events.send(SessionEvent::Persisted);
                }
                Err(e) => warn!(error = %e, "failed to persist form snapshot"),
            }
        }));
    }

    /// Whether a scheduled write has not fired yet.
    pub fn has_pending(&self) -> bool {
        self.pending
            .lock()
            .map(|pending| pending.as_ref().is_some_and(|h| !h.is_finished()))
            .unwrap_or(false)
    }

    /// Cancel any pending timer without writing.
    pub fn cancel(&self) {
        if let Ok(mut pending) = self.pending.lock() {
            if let Some(handle) = pending.take() {
                handle.abort();
            }
        }
    }

    /// Cancel the pending timer and write the current record now.
    pub async fn flush(&self) -> AppResult<()> {
        {
            let mut pending = self
                .pending
                .lock()
                .map_err(|_| AppError::internal("persister lock poisoned"))?;
            if let Some(handle) = pending.take() {
                handle.abort();
            }
        }
        write_current(Arc::clone(&self.store), &self.session, &self.write_lock).await?;
        debug!("form snapshot flushed");
        let _ = self.events.send(SessionEvent::Persisted);
        Ok(())
    }
}

impl Drop for DebouncedPersister {
    fn drop(&mut self) {
        self.cancel();
    }
}

impl std::fmt::Debug for DebouncedPersister {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DebouncedPersister")
            .field("delay", &self.delay())
            .field("pending", &self.has_pending())
            .finish()
    }
}
