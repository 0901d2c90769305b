//! Prompt Serializer
//!
//! Turns a [`PromptRecord`] into the tagged prompt document. The function is
//! pure: the same record always produces the same text, and no input can
//! make it fail.
//!
//! Document shape:
//!
//! ```text
//! <role>
//! ...
//! </role>
//!
//! <task>
//! ...
//! </task>
//! ```
//!
//! Blocks appear in [`Section::ORDER`] and are separated by one blank line.

use crate::record::{Example, PromptRecord, Section};

/// Separator between top-level blocks and between examples.
const BLOCK_SEPARATOR: &str = "\n\n";

/// Escape the three markup-significant characters.
///
/// `&` is replaced first so the entities produced for `<` and `>` are not
/// escaped a second time.
pub fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn wrap_tag(tag: &str, content: &str) -> String {
    format!("<{tag}>\n{content}\n</{tag}>")
}

fn render_example(example: &Example) -> String {
    // Example text is escaped but not trimmed.
    wrap_tag(
        "example",
        &format!(
            "Input: {}\nOutput: {}",
            escape_xml(&example.input),
            escape_xml(&example.output)
        ),
    )
}

/// Whether `section` contributes a block for this record.
///
/// This is the single inclusion predicate shared by the serializer and the
/// section counter in [`crate::stats`].
pub fn is_included(record: &PromptRecord, section: Section) -> bool {
    if !record.enabled_sections.is_enabled(section) {
        return false;
    }
    match section.scalar_field() {
        Some(field) => !record.field(field).trim().is_empty(),
        None => record.examples.iter().any(Example::has_content),
    }
}

/// Render one section's block, or `None` when it is excluded.
pub fn render_section(record: &PromptRecord, section: Section) -> Option<String> {
    if !is_included(record, section) {
        return None;
    }
    let block = match section.scalar_field() {
        Some(field) => wrap_tag(section.tag(), &escape_xml(record.field(field).trim())),
        None => {
            let examples = record
                .examples
                .iter()
                .filter(|ex| ex.has_content())
                .map(render_example)
                .collect::<Vec<_>>()
                .join(BLOCK_SEPARATOR);
            wrap_tag(section.tag(), &examples)
        }
    };
    Some(block)
}

/// Serialize the record into the tagged prompt document.
///
/// Returns an empty string when no section qualifies.
pub fn serialize(record: &PromptRecord) -> String {
    Section::ORDER
        .iter()
        .filter_map(|section| render_section(record, *section))
        .collect::<Vec<_>>()
        .join(BLOCK_SEPARATOR)
}
