//! `mwv config` – show the effective configuration.

use anyhow::Result;
use mwv_core::config::{self, MwvConfig};

pub fn run_config(cfg: &MwvConfig) -> Result<()> {
    let path = config::config_path()?;
    println!("config file:     {}", path.display());
    println!("words_file:      {}", cfg.words_file.display());
    println!("keep_file:       {}", cfg.keep_file.display());
    println!("reject_file:     {}", cfg.reject_file.display());
    println!("lookup_base_url: {}", cfg.lookup_base_url);
    println!("pace_delay_secs: {}", cfg.pace_delay_secs);
    Ok(())
}
