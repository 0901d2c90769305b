//! Form Snapshots
//!
//! Reading and writing the prompt record under its fixed store key.

use tracing::{debug, warn};

use easy_prompt_core::PromptRecord;

use crate::storage::KeyValueStore;
use crate::utils::error::AppResult;

/// Store key holding the serialized form record
pub const FORM_STORE_KEY: &str = "prompt-generator-form";

/// Restore the record from the store.
///
/// A missing, unreadable or malformed snapshot yields the default record;
/// the problem is logged and never surfaced.
pub fn load_record(store: &dyn KeyValueStore) -> PromptRecord {
    let raw = match store.get(FORM_STORE_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => {
            debug!("no stored form snapshot, starting empty");
            return PromptRecord::default();
        }
        Err(e) => {
            warn!(error = %e, "failed to read form snapshot, starting empty");
            return PromptRecord::default();
        }
    };

    match serde_json::from_str::<PromptRecord>(&raw) {
        Ok(record) => {
            debug!(examples = record.examples.len(), "restored form snapshot");
            record
        }
        Err(e) => {
            warn!(error = %e, "stored form snapshot is malformed, starting empty");
            PromptRecord::default()
        }
    }
}

/// Write the record to the store.
pub fn save_record(store: &dyn KeyValueStore, record: &PromptRecord) -> AppResult<()> {
    let json = serde_json::to_string(record)?;
    store.set(FORM_STORE_KEY, &json)
}
