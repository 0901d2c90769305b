//! Services
//!
//! Business logic services for the application.
//! Services handle the core functionality and are called by commands.

pub mod catalog;
pub mod clipboard;
pub mod events;
pub mod form;
pub mod persistence;

pub use catalog::{CatalogFile, CatalogRegistry};
pub use clipboard::{ClipboardWriter, CopyIndicator, CopyStatus, SystemClipboard};
pub use events::{EventSender, SessionEvent};
pub use form::{FormAction, FormChange, FormState, PromptSession};
pub use persistence::DebouncedPersister;
