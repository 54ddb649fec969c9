//! Daily review: a fixed five-question interview saved to a dated journal.
//!
//! [`session`] runs the interview over any line-oriented channel and yields
//! an [`AnswerRecord`]. [`journal`] writes that record to today's file,
//! appending for markdown and replacing for structured output.

pub mod config;
pub mod journal;
pub mod model;
pub mod session;

pub use model::{AnswerRecord, JournalEntry, PROMPTS, Prompt, PromptId};
