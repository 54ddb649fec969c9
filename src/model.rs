//! Core data model: prompts, answers, and journal entries.

mod answers;
mod entry;
mod prompt;

pub use answers::AnswerRecord;
pub use entry::JournalEntry;
pub use prompt::{PROMPTS, Prompt, PromptId};
