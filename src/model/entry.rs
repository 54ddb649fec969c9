//! Journal entry: an answer record stamped with when it was captured.

use jiff::{Timestamp, Zoned, civil::Date};
use serde::{Deserialize, Serialize};

use super::answers::AnswerRecord;

/// A record as it is written to the journal.
///
/// Serialized field order is `date`, `timestamp`, then the answers in
/// prompt order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalEntry {
    /// Calendar day on the local clock; names the journal file.
    pub date: Date,
    /// Exact capture instant.
    pub timestamp: Timestamp,
    #[serde(flatten)]
    pub answers: AnswerRecord,
}

impl JournalEntry {
    /// Stamps a record with a single clock reading.
    pub fn capture(answers: AnswerRecord, now: &Zoned) -> Self {
        Self {
            date: now.date(),
            timestamp: now.timestamp(),
            answers,
        }
    }
}
