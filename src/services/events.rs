//! Session Events
//!
//! Notifications published after state transitions so that independent
//! listeners (a preview pane, a status line, a persistence monitor) can react
//! without holding references to each other.

use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

use super::clipboard::CopyStatus;

/// Capacity of the event channel; slow listeners skip ahead when lagging.
pub const EVENT_CHANNEL_CAPACITY: usize = 64;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SessionEvent {
    /// The record changed; the preview was refreshed unless edited
    RecordChanged { sections: usize, preview_edited: bool },
    /// The user edited the preview directly
    PreviewEdited { is_edited: bool },
    /// The form and preview were reset together
    Cleared,
    /// The copy indicator changed state
    CopyStatusChanged { status: CopyStatus },
    /// A form snapshot reached the store
    Persisted,
}

pub type EventSender = broadcast::Sender<SessionEvent>;

pub fn channel() -> EventSender {
    let (tx, _rx) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
    tx
}
