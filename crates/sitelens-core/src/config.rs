use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// HTTP transport settings (optional `[http]` section in config.toml).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Seconds to wait for the TCP/TLS connection.
    pub connect_timeout_secs: u64,
    /// Seconds allowed for the whole manifest request.
    pub timeout_secs: u64,
    /// Maximum number of redirects followed.
    pub max_redirections: u32,
    /// Optional `User-Agent` header; curl's default when missing.
    #[serde(default)]
    pub user_agent: Option<String>,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            connect_timeout_secs: 15,
            timeout_secs: 30,
            max_redirections: 10,
            user_agent: None,
        }
    }
}

/// Global configuration loaded from `~/.config/sitelens/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SitelensConfig {
    /// Site analyzed when no URL is given on the command line.
    pub default_url: String,
    /// Image shown on cards whose item has no files.
    pub placeholder_image: String,
    /// Transport settings; built-in defaults when the section is missing.
    #[serde(default)]
    pub http: HttpConfig,
}

impl Default for SitelensConfig {
    fn default() -> Self {
        Self {
            default_url: "https://haxtheweb.org".to_string(),
            placeholder_image: "https://via.placeholder.com/150".to_string(),
            http: HttpConfig::default(),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("sitelens")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<SitelensConfig> {
    load_or_init_at(&config_path()?)
}

/// Like [`load_or_init`] but for an explicit path.
pub fn load_or_init_at(path: &Path) -> Result<SitelensConfig> {
    if !path.exists() {
        let default_cfg = SitelensConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(path)?;
    let cfg: SitelensConfig = toml::from_str(&data)?;
    Ok(cfg)
}
