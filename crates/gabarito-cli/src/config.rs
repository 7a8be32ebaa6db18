//! Optional `gabarito.toml` configuration.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Top-level gabarito configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GabaritoConfig {
    /// Directory report files are written to.
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
    /// Default output format for `grade`.
    #[serde(default = "default_format")]
    pub default_format: String,
    /// Rows kept in the standings table.
    #[serde(default = "default_standings_limit")]
    pub standings_limit: usize,
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("./gabarito-results")
}

fn default_format() -> String {
    "text".to_string()
}

fn default_standings_limit() -> usize {
    10
}

impl Default for GabaritoConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            default_format: default_format(),
            standings_limit: default_standings_limit(),
        }
    }
}

/// Load configuration from an explicit path, from `gabarito.toml` in the
/// working directory, or fall back to defaults.
pub fn load_config_from(path: Option<&Path>) -> Result<GabaritoConfig> {
    let path = match path {
        Some(p) => p.to_path_buf(),
        None => {
            let default = PathBuf::from("gabarito.toml");
            if !default.exists() {
                return Ok(GabaritoConfig::default());
            }
            default
        }
    };

    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("failed to read config: {}", path.display()))?;
    let config: GabaritoConfig = toml::from_str(&content)
        .with_context(|| format!("failed to parse config: {}", path.display()))?;
    Ok(config)
}
