//! CLI parse tests.

use super::{Cli, CliCommand};
use clap::Parser;
use std::path::PathBuf;

fn parse(args: &[&str]) -> CliCommand {
    let cli = Cli::try_parse_from(args).unwrap();
    cli.command
}

#[test]
fn run_defaults_to_interactive_with_config_paths() {
    let cmd = parse(&["mwv", "run"]);
    match cmd {
        CliCommand::Run {
            words,
            keep,
            reject,
            paced,
            delay_secs,
        } => {
            assert!(words.is_none());
            assert!(keep.is_none());
            assert!(reject.is_none());
            assert!(!paced);
            assert!(delay_secs.is_none());
        }
        other => panic!("expected Run, got {other:?}"),
    }
}

#[test]
fn run_accepts_path_overrides() {
    let cmd = parse(&[
        "mwv", "run", "--words", "w.txt", "--keep", "k.txt", "--reject", "r.txt",
    ]);
    match cmd {
        CliCommand::Run {
            words,
            keep,
            reject,
            ..
        } => {
            assert_eq!(words, Some(PathBuf::from("w.txt")));
            assert_eq!(keep, Some(PathBuf::from("k.txt")));
            assert_eq!(reject, Some(PathBuf::from("r.txt")));
        }
        other => panic!("expected Run, got {other:?}"),
    }
}

#[test]
fn run_paced_with_delay() {
    let cmd = parse(&["mwv", "run", "--paced", "--delay-secs", "0.5"]);
    match cmd {
        CliCommand::Run {
            paced, delay_secs, ..
        } => {
            assert!(paced);
            assert_eq!(delay_secs, Some(0.5));
        }
        other => panic!("expected Run, got {other:?}"),
    }
}

#[test]
fn config_subcommand_parses() {
    assert!(matches!(parse(&["mwv", "config"]), CliCommand::Config));
}

#[test]
fn unknown_subcommand_is_an_error() {
    assert!(Cli::try_parse_from(["mwv", "frobnicate"]).is_err());
}
