//! Persistence Module
//!
//! Form snapshots in the key-value store, written through a debounce timer.

pub mod debouncer;
pub mod snapshot;

pub use debouncer::DebouncedPersister;
pub use snapshot::{load_record, save_record, FORM_STORE_KEY};
