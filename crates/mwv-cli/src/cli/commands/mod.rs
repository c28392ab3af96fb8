//! CLI command handlers, one file per subcommand.

mod config;
mod run;

pub use config::run_config;
pub use run::run_triage;
