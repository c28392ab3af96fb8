//! The word-triage loop: show each word's dictionary entry, record a verdict.
//!
//! Two modes of the same loop: interactive (operator decides per word, the
//! decision log records it) and paced (fixed delay per word, nothing
//! recorded). Both stop at the first empty line even if more lines follow.

use anyhow::Result;
use std::io::BufRead;
use std::time::Duration;
use url::Url;

use crate::lookup;
use crate::operator::Operator;
use crate::sink::{Decision, DecisionLog};
use crate::source::WordSource;
use crate::window::WindowControl;

/// Counts for the end-of-run summary line.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TriageSummary {
    /// Words shown to the operator (or paced past).
    pub visited: usize,
    pub kept: usize,
    pub rejected: usize,
}

/// Navigate the window to `word`'s entry and retitle it.
fn show_word(window: &mut impl WindowControl, base: &Url, word: &str) -> Result<Url> {
    let url = lookup::entry_url(base, word)?;
    window.load_url(url.as_str())?;
    window.set_title(word)?;
    Ok(url)
}

/// Interactive triage: one prompt and one decision record per word.
///
/// Progress lines (word, constructed URL, URL the window reports) go to
/// stdout so the operator can follow along in the terminal next to the
/// browser window.
pub fn run_interactive<R: BufRead>(
    words: &mut WordSource<R>,
    window: &mut impl WindowControl,
    operator: &mut impl Operator,
    log: &mut DecisionLog,
    base: &Url,
) -> Result<TriageSummary> {
    let mut summary = TriageSummary::default();
    while let Some(word) = words.next_word()? {
        if word.is_empty() {
            break;
        }
        println!("{word}");
        let url = show_word(window, base, &word)?;
        println!("{url}");
        println!("{}", window.current_url()?);

        let decision = operator.decide(&word)?;
        log.record(&word, decision)?;
        summary.visited += 1;
        match decision {
            Decision::Kept => summary.kept += 1,
            Decision::Rejected => summary.rejected += 1,
        }
        tracing::debug!(%word, ?decision, "triaged");
    }
    Ok(summary)
}

/// Paced triage: each load is preceded by `delay`; no prompt, no recording.
pub fn run_paced<R: BufRead>(
    words: &mut WordSource<R>,
    window: &mut impl WindowControl,
    delay: Duration,
    base: &Url,
) -> Result<TriageSummary> {
    run_paced_with(words, window, delay, base, std::thread::sleep)
}

/// Paced triage with an injectable pause, so tests can observe the pacing
/// instead of sleeping through it.
pub fn run_paced_with<R: BufRead>(
    words: &mut WordSource<R>,
    window: &mut impl WindowControl,
    delay: Duration,
    base: &Url,
    mut pause: impl FnMut(Duration),
) -> Result<TriageSummary> {
    let mut summary = TriageSummary::default();
    while let Some(word) = words.next_word()? {
        if word.is_empty() {
            break;
        }
        pause(delay);
        show_word(window, base, &word)?;
        summary.visited += 1;
        tracing::debug!(%word, "paced past");
    }
    Ok(summary)
}
