//! Easy Prompt Core
//!
//! The pure part of Easy Prompt: the prompt record model, the tagged-document
//! serializer, preview statistics and the preview edit regime. This crate has
//! no dependencies on application-level code (storage, clipboard, CLI).
//!
//! ## Module Organization
//!
//! - `error` - Core error types (`CoreError`, `CoreResult`)
//! - `record` - `PromptRecord`, examples, section switches, template data
//! - `serializer` - Record → tagged document
//! - `stats` - Character/word/token/section counters
//! - `preview` - Generated vs. hand-edited preview state
//! - `fields` - Form field labels, guidance and status
//! - `catalog` - Template and persona entry types

pub mod catalog;
pub mod error;
pub mod fields;
pub mod preview;
pub mod record;
pub mod serializer;
pub mod stats;

// ── Error Types ────────────────────────────────────────────────────────
pub use error::{CoreError, CoreResult};

// ── Record Model ───────────────────────────────────────────────────────
pub use record::{
    EnabledSections, EnabledSectionsPatch, Example, ExampleField, PromptRecord, ScalarField,
    Section, TemplateData,
};

// ── Serializer & Stats ─────────────────────────────────────────────────
pub use serializer::{escape_xml, is_included, serialize};
pub use stats::{section_count, PromptStats};

// ── Preview & Form Metadata ────────────────────────────────────────────
pub use fields::{field_info, form_fields, is_filled, FieldInfo, FieldStatus};
pub use preview::{PreviewState, EMPTY_PREVIEW_HINT};

// ── Catalog Entries ────────────────────────────────────────────────────
pub use catalog::{Persona, Template};
