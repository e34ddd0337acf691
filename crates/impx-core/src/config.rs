use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Settings for the curl transport used for `http://` and `https://` addresses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransportConfig {
    /// Seconds allowed for establishing the connection.
    pub connect_timeout_secs: u64,
    /// Whole-transfer limit in seconds (None = no limit; disk images can be large).
    pub timeout_secs: Option<u64>,
    /// Maximum number of redirects followed per request.
    pub max_redirections: u32,
    /// Number of received chunks buffered between the transfer thread and the reader.
    pub buffer_chunks: usize,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            connect_timeout_secs: 15,
            timeout_secs: None,
            max_redirections: 10,
            buffer_chunks: 16,
        }
    }
}

/// How entries are located relative to the primary location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArchiveMode {
    /// Tape archive for `.ova` primaries, sibling files for everything else.
    #[default]
    Auto,
    /// Primary is a tar archive; entries are matched by base-name glob.
    Tape,
    /// Primary is a descriptor; entries are files next to it.
    Flat,
}

/// Global configuration loaded from `~/.config/impx/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImpxConfig {
    /// Default access mode when the command line does not force one.
    #[serde(default)]
    pub mode: ArchiveMode,
    /// Whether remote addresses may be opened at all. When false, remote opens fail as unsupported.
    #[serde(default = "default_remote")]
    pub remote: bool,
    #[serde(default)]
    pub transport: TransportConfig,
}

fn default_remote() -> bool {
    true
}

impl Default for ImpxConfig {
    fn default() -> Self {
        Self {
            mode: ArchiveMode::Auto,
            remote: true,
            transport: TransportConfig::default(),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("impx")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<ImpxConfig> {
    let path = config_path()?;
    load_or_init_at(&path)
}

/// Like `load_or_init` but for an explicit path.
pub fn load_or_init_at(path: &Path) -> Result<ImpxConfig> {
    if !path.exists() {
        let default_cfg = ImpxConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml).with_context(|| format!("write {}", path.display()))?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: ImpxConfig =
        toml::from_str(&data).with_context(|| format!("parse {}", path.display()))?;
    Ok(cfg)
}
