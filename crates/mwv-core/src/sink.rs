//! Decision recording: append-only keep/reject output files.

use anyhow::{Context, Result};
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Operator verdict for a single word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Kept,
    Rejected,
}

/// The two output files. Both are created (truncated) up front so a run
/// always starts from a clean partition; each record is flushed immediately
/// so nothing is lost if the operator kills the tool mid-session.
pub struct DecisionLog {
    keep: File,
    reject: File,
}

impl DecisionLog {
    /// Create/truncate both output files.
    pub fn create(keep_path: &Path, reject_path: &Path) -> Result<Self> {
        let keep = File::create(keep_path)
            .with_context(|| format!("failed to create keep file: {}", keep_path.display()))?;
        let reject = File::create(reject_path)
            .with_context(|| format!("failed to create reject file: {}", reject_path.display()))?;
        Ok(DecisionLog { keep, reject })
    }

    /// Append `<word>\n` to exactly one of the two files.
    pub fn record(&mut self, word: &str, decision: Decision) -> Result<()> {
        let file = match decision {
            Decision::Kept => &mut self.keep,
            Decision::Rejected => &mut self.reject,
        };
        writeln!(file, "{word}").context("failed to record decision")?;
        file.flush().context("failed to flush decision")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn records_land_in_the_right_file_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let keep_path = dir.path().join("keep.txt");
        let reject_path = dir.path().join("reject.txt");

        let mut log = DecisionLog::create(&keep_path, &reject_path).unwrap();
        log.record("owl", Decision::Kept).unwrap();
        log.record("wren", Decision::Rejected).unwrap();
        log.record("jay", Decision::Kept).unwrap();

        assert_eq!(fs::read_to_string(&keep_path).unwrap(), "owl\njay\n");
        assert_eq!(fs::read_to_string(&reject_path).unwrap(), "wren\n");
    }

    #[test]
    fn create_truncates_previous_run() {
        let dir = tempfile::tempdir().unwrap();
        let keep_path = dir.path().join("keep.txt");
        let reject_path = dir.path().join("reject.txt");
        fs::write(&keep_path, "stale\n").unwrap();
        fs::write(&reject_path, "stale\n").unwrap();

        let _log = DecisionLog::create(&keep_path, &reject_path).unwrap();
        assert_eq!(fs::read_to_string(&keep_path).unwrap(), "");
        assert_eq!(fs::read_to_string(&reject_path).unwrap(), "");
    }
}
