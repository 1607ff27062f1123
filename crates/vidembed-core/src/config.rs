use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::resolver::DEFAULT_VIDEO_EXTENSIONS;

/// How the CLI prints a resolved directive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable summary.
    #[default]
    Text,
    /// The directive serialized as JSON.
    Json,
    /// An HTML fragment for the element.
    Html,
}

/// Global configuration loaded from `~/.config/vidembed/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VidembedConfig {
    /// Path extensions treated as directly playable video files.
    #[serde(default = "default_extensions")]
    pub direct_video_extensions: Vec<String>,
    /// Output format used when `--format` is not given.
    #[serde(default)]
    pub default_format: OutputFormat,
}

fn default_extensions() -> Vec<String> {
    DEFAULT_VIDEO_EXTENSIONS.iter().map(|e| e.to_string()).collect()
}

impl Default for VidembedConfig {
    fn default() -> Self {
        Self {
            direct_video_extensions: default_extensions(),
            default_format: OutputFormat::default(),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("vidembed")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<VidembedConfig> {
    load_or_init_at(&config_path()?)
}

/// Like [`load_or_init`] but at an explicit path.
pub fn load_or_init_at(path: &Path) -> Result<VidembedConfig> {
    if !path.exists() {
        let default_cfg = VidembedConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml).with_context(|| format!("write {}", path.display()))?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: VidembedConfig =
        toml::from_str(&data).with_context(|| format!("parse {}", path.display()))?;
    Ok(cfg)
}
