//! Session controller: asks each prompt in turn and collects the answers.
//!
//! The interview is strictly linear. Each prompt is written to the output,
//! one line is read back, and the trimmed line becomes that prompt's answer.
//! There is no skipping or going back. If input ends early the session fails
//! and every answer received so far is dropped.

use std::io::{self, BufRead, Write};

use tracing::debug;

use crate::model::{AnswerRecord, PROMPTS, Prompt};

/// Printed once before the first prompt.
pub const BANNER: &str = "📝 Daily Review (5 minutes)";

/// Printed once after the last answer.
pub const COMPLETE: &str = "📝 Daily Review Complete!";

/// Input cue shown on the line after each prompt.
const CUE: &str = "> ";

/// Errors that end a session without a record.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("input ended after {answered} of {total} prompts", total = PROMPTS.len())]
    InputTerminated { answered: usize },

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// An interview in progress.
///
/// A `Session` always has at least one prompt left to ask. Answering the
/// last one consumes it and yields the finished [`AnswerRecord`].
#[derive(Debug, Default)]
pub struct Session {
    answers: [String; 5],
    next: usize,
}

/// Result of answering the current prompt.
#[derive(Debug)]
pub enum Progress {
    /// More prompts remain.
    Asking(Session),
    /// All prompts answered.
    Complete(AnswerRecord),
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// The prompt awaiting an answer.
    pub fn current(&self) -> &'static Prompt {
        &PROMPTS[self.next]
    }

    /// How many prompts have been answered so far.
    pub fn answered(&self) -> usize {
        self.next
    }

    /// Records a raw input line as the answer to the current prompt.
    pub fn answer(mut self, line: &str) -> Progress {
        self.answers[self.next] = line.trim().to_string();
        self.next += 1;
        if self.next == PROMPTS.len() {
            Progress::Complete(AnswerRecord::from_ordered(self.answers))
        } else {
            Progress::Asking(self)
        }
    }
}

/// Runs a full interview over a line-oriented channel.
///
/// Blocks on `input` for each answer with no timeout.
pub fn run_session<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> Result<AnswerRecord, SessionError> {
    writeln!(output, "{BANNER}\n")?;

    let mut session = Session::new();
    loop {
        let prompt = session.current();
        write!(output, "{}\n{CUE}", prompt.text)?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            let answered = session.answered();
            debug!(answered, "input closed before the interview finished");
            return Err(SessionError::InputTerminated { answered });
        }
        debug!(prompt = %prompt.id, "answer received");

        match session.answer(&line) {
            Progress::Asking(next) => session = next,
            Progress::Complete(record) => {
                writeln!(output, "\n{COMPLETE}")?;
                output.flush()?;
                return Ok(record);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;
    use crate::model::PromptId;

    fn run(input: &str) -> (Result<AnswerRecord, SessionError>, String) {
        let mut input = Cursor::new(input.as_bytes());
        let mut output = Vec::new();
        let result = run_session(&mut input, &mut output);
        (result, String::from_utf8(output).unwrap())
    }

    #[test]
    fn collects_five_trimmed_answers() {
        let (result, _) = run("  shipped X \nY matters\n\tchose Z because W\nship Q\n🟢\n");
        let record = result.unwrap();

        assert_eq!(record.get(PromptId::Outputs), "shipped X");
        assert_eq!(record.get(PromptId::Learning), "Y matters");
        assert_eq!(record.get(PromptId::Decision), "chose Z because W");
        assert_eq!(record.get(PromptId::Tomorrow), "ship Q");
        assert_eq!(record.get(PromptId::Pulse), "🟢");
    }

    #[test]
    fn accepts_empty_answers() {
        let (result, _) = run("\n   \n\n\n\n");
        let record = result.unwrap();
        assert!(record.iter().all(|(_, answer)| answer.is_empty()));
    }

    #[test]
    fn last_line_without_newline_still_counts() {
        let (result, _) = run("a\nb\nc\nd\ne");
        assert_eq!(result.unwrap().get(PromptId::Pulse), "e");
    }

    #[test]
    fn writes_prompts_in_order_then_completion_notice() {
        let (result, output) = run("a\nb\nc\nd\ne\n");
        result.unwrap();

        assert!(output.starts_with(BANNER));
        let mut cursor = 0;
        for prompt in &PROMPTS {
            let at = output[cursor..]
                .find(prompt.text)
                .unwrap_or_else(|| panic!("missing or out of order: {}", prompt.text));
            cursor += at + prompt.text.len();
        }
        assert!(output[cursor..].contains(COMPLETE));
        assert_eq!(output.matches(CUE).count(), PROMPTS.len());
    }

    #[test]
    fn early_end_of_input_fails_with_answered_count() {
        let (result, output) = run("a\nb\n");
        let err = result.unwrap_err();

        assert!(matches!(err, SessionError::InputTerminated { answered: 2 }));
        assert!(!output.contains(COMPLETE));
    }

    #[test]
    fn empty_input_fails_before_any_answer() {
        let (result, _) = run("");
        assert!(matches!(
            result.unwrap_err(),
            SessionError::InputTerminated { answered: 0 }
        ));
    }

    #[test]
    fn extra_lines_are_left_unread() {
        let mut input = Cursor::new("a\nb\nc\nd\ne\nleftover\n".as_bytes());
        let mut output = Vec::new();
        run_session(&mut input, &mut output).unwrap();

        let mut rest = String::new();
        input.read_line(&mut rest).unwrap();
        assert_eq!(rest, "leftover\n");
    }

    #[test]
    fn state_machine_advances_one_prompt_per_answer() {
        let mut session = Session::new();
        for (i, prompt) in PROMPTS.iter().enumerate().take(PROMPTS.len() - 1) {
            assert_eq!(session.current().id, prompt.id);
            assert_eq!(session.answered(), i);
            session = match session.answer("x") {
                Progress::Asking(s) => s,
                Progress::Complete(_) => panic!("completed early at prompt {i}"),
            };
        }
        assert_eq!(session.current().id, PromptId::Pulse);
        assert!(matches!(session.answer("x"), Progress::Complete(_)));
    }
}
