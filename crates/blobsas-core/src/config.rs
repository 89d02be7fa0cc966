use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// How the CLI prints parsed URLs and tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Global configuration loaded from `~/.config/blobsas/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlobsasConfig {
    /// Output format used when a command is not given `--json`.
    #[serde(default)]
    pub output: OutputFormat,
    /// Replace `sig` with a placeholder in human-readable output.
    #[serde(default = "default_redact_signature")]
    pub redact_signature: bool,
}

fn default_redact_signature() -> bool {
    true
}

impl Default for BlobsasConfig {
    fn default() -> Self {
        Self {
            output: OutputFormat::Text,
            redact_signature: default_redact_signature(),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("blobsas")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<BlobsasConfig> {
    load_or_init_at(&config_path()?)
}

/// Same as [`load_or_init`] for an explicit path.
pub fn load_or_init_at(path: &Path) -> Result<BlobsasConfig> {
    if !path.exists() {
        let default_cfg = BlobsasConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml).with_context(|| format!("write {}", path.display()))?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }
    load_from_path(path)
}

pub fn load_from_path(path: &Path) -> Result<BlobsasConfig> {
    let data = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: BlobsasConfig =
        toml::from_str(&data).with_context(|| format!("parse {}", path.display()))?;
    Ok(cfg)
}
