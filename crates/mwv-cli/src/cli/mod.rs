//! CLI for the MWV word-verification tool.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use mwv_core::config;
use std::path::PathBuf;

use commands::{run_config, run_triage};

/// Top-level CLI for the MWV word-verification tool.
#[derive(Debug, Parser)]
#[command(name = "mwv")]
#[command(about = "MWV: triage candidate words against their Wiktionary entries", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Review the word list: show each entry, record keep/reject decisions.
    Run {
        /// Word list to read (default from config: words.txt).
        #[arg(long, value_name = "FILE")]
        words: Option<PathBuf>,

        /// File receiving kept words (default from config: keep.txt).
        #[arg(long, value_name = "FILE")]
        keep: Option<PathBuf>,

        /// File receiving rejected words (default from config: reject.txt).
        #[arg(long, value_name = "FILE")]
        reject: Option<PathBuf>,

        /// Pace through the list with a fixed delay instead of prompting;
        /// nothing is recorded in this mode.
        #[arg(long)]
        paced: bool,

        /// Seconds between words in paced mode (default from config).
        #[arg(long, value_name = "SECS")]
        delay_secs: Option<f64>,
    },

    /// Show the effective configuration and where it is stored.
    Config,
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Run {
                words,
                keep,
                reject,
                paced,
                delay_secs,
            } => run_triage(
                &cfg,
                words.as_deref(),
                keep.as_deref(),
                reject.as_deref(),
                paced,
                delay_secs,
            )?,
            CliCommand::Config => run_config(&cfg)?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
