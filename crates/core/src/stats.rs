//! Preview Statistics
//!
//! Counters shown under the preview. Text-based counters are computed from
//! whatever the preview currently shows (generated or hand-edited); the
//! section count is recomputed from the record with the serializer's own
//! inclusion predicate rather than parsed back out of the text.

use serde::{Deserialize, Serialize};

use crate::record::{PromptRecord, Section};
use crate::serializer::is_included;

/// Rough characters-per-token ratio used for the token estimate.
const CHARS_PER_TOKEN: usize = 4;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptStats {
    pub characters: usize,
    pub words: usize,
    pub token_estimate: usize,
    pub sections: usize,
}

impl PromptStats {
    /// Compute stats for a preview text and its backing record.
    pub fn compute(text: &str, record: &PromptRecord) -> Self {
        let characters = character_count(text);
        Self {
            characters,
            words: word_count(text),
            token_estimate: token_estimate(characters),
            sections: section_count(record),
        }
    }
}

/// Length in UTF-16 code units, so astral characters such as emoji count as two.
pub fn character_count(text: &str) -> usize {
    text.encode_utf16().count()
}

/// Whitespace-delimited tokens of the trimmed text; zero for blank text.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// `ceil(characters / 4)`.
pub fn token_estimate(characters: usize) -> usize {
    characters.div_ceil(CHARS_PER_TOKEN)
}

/// Number of sections the serializer would emit for this record.
pub fn section_count(record: &PromptRecord) -> usize {
    Section::ORDER
        .iter()
        .filter(|section| is_included(record, **section))
        .count()
}
