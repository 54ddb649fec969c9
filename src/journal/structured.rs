//! Structured form: a pretty-printed JSON snapshot of the latest entry.

use crate::model::JournalEntry;

/// Renders one entry as indented JSON.
pub fn format(entry: &JournalEntry) -> serde_json::Result<String> {
    serde_json::to_string_pretty(entry)
}

/// Reads back a file written in the structured form.
pub fn parse(contents: &str) -> serde_json::Result<JournalEntry> {
    serde_json::from_str(contents)
}
