use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Default worker count when neither config nor `--workers` say otherwise.
pub const DEFAULT_WORKERS: usize = 10;

/// Global configuration loaded from `~/.config/bdl/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BdlConfig {
    /// Number of concurrent download workers.
    #[serde(default = "default_workers")]
    pub workers: usize,
    /// Root directory downloads are mirrored under. Defaults to the current
    /// working directory when unset.
    #[serde(default)]
    pub output_dir: Option<PathBuf>,
}

fn default_workers() -> usize {
    DEFAULT_WORKERS
}

impl Default for BdlConfig {
    fn default() -> Self {
        Self {
            workers: DEFAULT_WORKERS,
            output_dir: None,
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("bdl")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<BdlConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = BdlConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: BdlConfig = toml::from_str(&data)?;
    Ok(cfg)
}
