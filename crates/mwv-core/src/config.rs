use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Global configuration loaded from `~/.config/mwv/config.toml`.
///
/// Defaults reproduce the tool's historical fixed constants, so a fresh
/// install with no config file behaves exactly like the original script.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MwvConfig {
    /// Input word list, one candidate word per line.
    pub words_file: PathBuf,
    /// Output file for accepted words.
    pub keep_file: PathBuf,
    /// Output file for rejected words.
    pub reject_file: PathBuf,
    /// Dictionary base URL; the word is appended to form the lookup URL.
    pub lookup_base_url: String,
    /// Seconds to pause per word in paced mode.
    #[serde(default = "default_pace_delay_secs")]
    pub pace_delay_secs: f64,
}

fn default_pace_delay_secs() -> f64 {
    2.0
}

impl Default for MwvConfig {
    fn default() -> Self {
        Self {
            words_file: PathBuf::from("words.txt"),
            keep_file: PathBuf::from("keep.txt"),
            reject_file: PathBuf::from("reject.txt"),
            lookup_base_url: "https://en.wiktionary.org/wiki/".to_string(),
            pace_delay_secs: default_pace_delay_secs(),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("mwv")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<MwvConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = MwvConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: MwvConfig = toml::from_str(&data)?;
    Ok(cfg)
}
