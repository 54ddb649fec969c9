//! Markdown form: a human-readable block, appended as a running log.

use std::fmt::Write;

use crate::model::JournalEntry;

/// Renders one entry as a markdown block ending in a newline.
pub fn format(entry: &JournalEntry) -> String {
    let mut out = format!("## Daily Review {}\n", entry.date);
    for (prompt, answer) in entry.answers.iter() {
        // Writing to a String cannot fail.
        let _ = write!(out, "\n**{}:** {answer}\n", prompt.label);
    }
    out
}

/// Separator to put between `existing` file content and a new block so the
/// two are split by exactly one blank line.
pub(super) fn separator(existing: &[u8]) -> &'static str {
    match existing.last() {
        None => "",
        Some(b'\n') => "\n",
        Some(_) => "\n\n",
    }
}
