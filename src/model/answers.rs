//! Answer record: one trimmed response per prompt.

use serde::{Deserialize, Serialize};

use super::prompt::{PROMPTS, Prompt, PromptId};

/// The complete set of answers from one session.
///
/// Fields are declared in prompt order so serializers that follow
/// declaration order (serde derive does) keep the interview order.
/// There is no way to build a partial record: either all five answers
/// exist or there is no record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerRecord {
    outputs: String,
    learning: String,
    decision: String,
    tomorrow: String,
    pulse: String,
}

impl AnswerRecord {
    /// Builds a record from all five answers, trimming each.
    pub fn new(
        outputs: &str,
        learning: &str,
        decision: &str,
        tomorrow: &str,
        pulse: &str,
    ) -> Self {
        Self {
            outputs: outputs.trim().to_string(),
            learning: learning.trim().to_string(),
            decision: decision.trim().to_string(),
            tomorrow: tomorrow.trim().to_string(),
            pulse: pulse.trim().to_string(),
        }
    }

    /// Builds a record from answers given in [`PROMPTS`] order.
    pub(crate) fn from_ordered(answers: [String; 5]) -> Self {
        let [outputs, learning, decision, tomorrow, pulse] = answers;
        Self::new(&outputs, &learning, &decision, &tomorrow, &pulse)
    }

    /// The answer to the given prompt.
    pub fn get(&self, id: PromptId) -> &str {
        match id {
            PromptId::Outputs => &self.outputs,
            PromptId::Learning => &self.learning,
            PromptId::Decision => &self.decision,
            PromptId::Tomorrow => &self.tomorrow,
            PromptId::Pulse => &self.pulse,
        }
    }

    /// Each prompt paired with its answer, in interview order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static Prompt, &str)> {
        PROMPTS.iter().map(|p| (p, self.get(p.id)))
    }
}
