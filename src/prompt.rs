//! Interactive confirmation before installing
//!
//! Reads a single line from an injectable source so tests can feed answers.

use crate::error::IoError;
use crate::output::TextFormatter;
use log::debug;
use std::io::{BufRead, Write};

/// Answers accepted as "yes", compared case-insensitively
pub const AFFIRMATIVE_ANSWERS: [&str; 3] = ["yes", "y", "true"];

/// Check whether an answer confirms the update
pub fn is_affirmative(answer: &str) -> bool {
    let answer = answer.trim().to_lowercase();
    AFFIRMATIVE_ANSWERS.contains(&answer.as_str())
}

/// Yes/no gate in front of the installer
pub struct Confirmation<R> {
    input: R,
}

impl<R: BufRead> Confirmation<R> {
    /// Create a gate reading answers from `input`
    pub fn new(input: R) -> Self {
        Self { input }
    }

    /// Ask once. End of input counts as "no".
    pub fn ask(&mut self, formatter: &TextFormatter, writer: &mut dyn Write) -> Result<bool, IoError> {
        formatter.format_question(writer)?;

        let mut answer = String::new();
        let read = self
            .input
            .read_line(&mut answer)
            .map_err(|source| IoError::Prompt { source })?;

        if read == 0 {
            writeln!(writer)?;
            debug!("Answer: <end of input>");
            return Ok(false);
        }

        debug!("Answer: {}", answer.trim());
        Ok(is_affirmative(&answer))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn ask(input: &str) -> bool {
        let mut gate = Confirmation::new(Cursor::new(input.as_bytes().to_vec()));
        let mut out = Vec::new();
        gate.ask(&TextFormatter::with_color(false), &mut out).unwrap()
    }

    #[test]
    fn test_affirmative_answers() {
        assert!(ask("yes\n"));
        assert!(ask("y\n"));
        assert!(ask("true\n"));
        assert!(ask("YES\n"));
        assert!(ask("  Y  \r\n"));
        assert!(ask("True"));
    }

    #[test]
    fn test_negative_answers() {
        assert!(!ask("no\n"));
        assert!(!ask("n\n"));
        assert!(!ask("\n"));
        assert!(!ask("yess\n"));
        assert!(!ask("ok\n"));
    }

    #[test]
    fn test_end_of_input_is_abort() {
        assert!(!ask(""));
    }

    #[test]
    fn test_only_first_line_is_read() {
        let mut gate = Confirmation::new(Cursor::new(b"no\nyes\n".to_vec()));
        let mut out = Vec::new();
        assert!(!gate.ask(&TextFormatter::with_color(false), &mut out).unwrap());
    }

    #[test]
    fn test_question_is_written() {
        let mut gate = Confirmation::new(Cursor::new(b"y\n".to_vec()));
        let mut out = Vec::new();
        gate.ask(&TextFormatter::with_color(false), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Do you want to update?"));
        assert!(text.contains("Your Answer: "));
    }

    #[test]
    fn test_is_affirmative() {
        assert!(is_affirmative("Yes"));
        assert!(!is_affirmative(""));
    }
}
