//! `mwv run` – triage the word list, interactively or paced.

use anyhow::{ensure, Context, Result};
use mwv_core::config::MwvConfig;
use mwv_core::operator::ConsoleOperator;
use mwv_core::sink::DecisionLog;
use mwv_core::source::WordSource;
use mwv_core::triage;
use mwv_core::window::SystemBrowser;
use std::path::Path;
use std::time::Duration;
use url::Url;

pub fn run_triage(
    cfg: &MwvConfig,
    words_override: Option<&Path>,
    keep_override: Option<&Path>,
    reject_override: Option<&Path>,
    paced: bool,
    delay_secs: Option<f64>,
) -> Result<()> {
    let base = Url::parse(&cfg.lookup_base_url)
        .with_context(|| format!("invalid lookup_base_url: {}", cfg.lookup_base_url))?;
    let words_path = words_override.unwrap_or(&cfg.words_file);
    let mut words = WordSource::open(words_path)?;
    let mut window = SystemBrowser::new();

    if paced {
        let secs = delay_secs.unwrap_or(cfg.pace_delay_secs);
        ensure!(secs >= 0.0, "delay must be non-negative, got {secs}");
        let delay = Duration::from_secs_f64(secs);
        tracing::info!(words = %words_path.display(), secs, "starting paced run");
        let summary = triage::run_paced(&mut words, &mut window, delay, &base)?;
        println!("Paced through {} word(s).", summary.visited);
    } else {
        let keep_path = keep_override.unwrap_or(&cfg.keep_file);
        let reject_path = reject_override.unwrap_or(&cfg.reject_file);
        let mut log = DecisionLog::create(keep_path, reject_path)?;
        let mut operator = ConsoleOperator;
        tracing::info!(words = %words_path.display(), "starting interactive run");
        let summary =
            triage::run_interactive(&mut words, &mut window, &mut operator, &mut log, &base)?;
        println!(
            "Reviewed {} word(s): {} kept, {} rejected.",
            summary.visited, summary.kept, summary.rejected
        );
    }

    Ok(())
}
