//! Prompts: the fixed interview, in order.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifies one prompt, and the answer field it fills.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PromptId {
    Outputs,
    Learning,
    Decision,
    Tomorrow,
    Pulse,
}

impl PromptId {
    /// The short identifier used as the structured field name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Outputs => "outputs",
            Self::Learning => "learning",
            Self::Decision => "decision",
            Self::Tomorrow => "tomorrow",
            Self::Pulse => "pulse",
        }
    }
}

impl fmt::Display for PromptId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One reflection question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Prompt {
    pub id: PromptId,
    /// Bolded label in the markdown form.
    pub label: &'static str,
    /// What the user sees.
    pub text: &'static str,
}

/// The interview. Order is significant: answers are collected, stored,
/// and serialized in exactly this sequence.
pub const PROMPTS: [Prompt; 5] = [
    Prompt {
        id: PromptId::Outputs,
        label: "Outputs",
        text: "1. What shipped today? (files, changes, links)",
    },
    Prompt {
        id: PromptId::Learning,
        label: "Learning",
        text: "2. One learning? (1 sentence)",
    },
    Prompt {
        id: PromptId::Decision,
        label: "Decision",
        text: "3. One decision? (what + why)",
    },
    Prompt {
        id: PromptId::Tomorrow,
        label: "Tomorrow",
        text: "4. Tomorrow priority? (1 sentence)",
    },
    Prompt {
        id: PromptId::Pulse,
        label: "Pulse",
        text: "5. Pulse check? (🟢 good / 🟡 okay / 🔴 blocked)",
    },
];
