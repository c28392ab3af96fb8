//! Operator input: one keep/reject answer per word.

use anyhow::{Context, Result};
use std::io::{BufRead, Write};

use crate::sink::Decision;

/// Terminal prompt shown before reading the operator's answer.
pub const PROMPT: &str = "y(es) or n(o): ";

/// Source of keep/reject verdicts, one per word shown.
pub trait Operator {
    fn decide(&mut self, word: &str) -> Result<Decision>;
}

/// Closures work as operators, which keeps tests free of fixture types.
impl<F> Operator for F
where
    F: FnMut(&str) -> Result<Decision>,
{
    fn decide(&mut self, word: &str) -> Result<Decision> {
        self(word)
    }
}

/// Maps a raw response line to a decision: a response starting with `y`
/// keeps the word, anything else (including an empty line) rejects it.
pub fn decision_from_response(response: &str) -> Decision {
    if response.starts_with('y') {
        Decision::Kept
    } else {
        Decision::Rejected
    }
}

/// Blocking console operator: prompts on stdout, reads one line from stdin.
/// A closed stdin counts as rejection rather than an error, so an aborted
/// pipe drains the remaining words instead of crashing the session.
#[derive(Debug, Default)]
pub struct ConsoleOperator;

impl Operator for ConsoleOperator {
    fn decide(&mut self, _word: &str) -> Result<Decision> {
        let mut stdout = std::io::stdout();
        write!(stdout, "{PROMPT}").context("failed to write prompt")?;
        stdout.flush().context("failed to flush prompt")?;

        let mut response = String::new();
        std::io::stdin()
            .lock()
            .read_line(&mut response)
            .context("failed to read operator response")?;
        Ok(decision_from_response(&response))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn yes_keeps() {
        assert_eq!(decision_from_response("y\n"), Decision::Kept);
        assert_eq!(decision_from_response("yes\n"), Decision::Kept);
    }

    #[test]
    fn anything_else_rejects() {
        assert_eq!(decision_from_response("n\n"), Decision::Rejected);
        assert_eq!(decision_from_response("no\n"), Decision::Rejected);
        assert_eq!(decision_from_response("Y\n"), Decision::Rejected);
        assert_eq!(decision_from_response("maybe\n"), Decision::Rejected);
    }

    #[test]
    fn empty_response_rejects() {
        assert_eq!(decision_from_response(""), Decision::Rejected);
        assert_eq!(decision_from_response("\n"), Decision::Rejected);
    }

    #[test]
    fn closures_are_operators() {
        let mut op = |word: &str| -> Result<Decision> {
            Ok(if word == "owl" {
                Decision::Kept
            } else {
                Decision::Rejected
            })
        };
        assert_eq!(op.decide("owl").unwrap(), Decision::Kept);
        assert_eq!(op.decide("wren").unwrap(), Decision::Rejected);
    }
}
