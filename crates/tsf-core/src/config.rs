use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Default archive host.
pub const DEFAULT_HOST: &str = "ftp.3gpp.org";

/// Global configuration loaded from `~/.config/tsf/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TsfConfig {
    /// FTP host serving the spec archive.
    pub host: String,
    /// Connect timeout in seconds.
    pub connect_timeout_secs: u64,
    /// Whole-transfer timeout in seconds (covers a listing or a download).
    pub transfer_timeout_secs: u64,
    /// Optional default download directory (None = current directory).
    #[serde(default)]
    pub download_dir: Option<PathBuf>,
}

impl Default for TsfConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            connect_timeout_secs: 15,
            transfer_timeout_secs: 600,
            download_dir: None,
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("tsf")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<TsfConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = TsfConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: TsfConfig = toml::from_str(&data)?;
    Ok(cfg)
}
