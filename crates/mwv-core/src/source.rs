//! Word list input: one candidate word per line, read lazily.

use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Lazy line-at-a-time reader over a word list.
///
/// `next_word` strips the trailing newline and hands empty lines back
/// unchanged; deciding that an empty line ends the list is the triage loop's
/// job, so that lines after it are never read.
pub struct WordSource<R> {
    reader: R,
}

impl WordSource<BufReader<File>> {
    /// Open a word-list file (UTF-8, newline-terminated).
    pub fn open(path: &Path) -> Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("failed to open word list: {}", path.display()))?;
        Ok(WordSource {
            reader: BufReader::new(file),
        })
    }
}

impl<R: BufRead> WordSource<R> {
    pub fn new(reader: R) -> Self {
        WordSource { reader }
    }

    /// Read the next word. Returns `Ok(None)` when the input is exhausted.
    /// A trailing `\n` (and `\r` before it) is stripped; nothing else is
    /// normalized.
    pub fn next_word(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        let n = self
            .reader
            .read_line(&mut line)
            .context("failed to read from word list")?;
        if n == 0 {
            return Ok(None);
        }
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(Some(line))
    }
}
