use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::debug;

/// Config file read when `--config` is not given, if it exists.
pub const DEFAULT_CONFIG_PATH: &str = "jalaali.toml";

/// Top-level configuration.
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct JalaaliConfig {
    /// Output settings.
    #[serde(default)]
    pub output: OutputToml,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputToml {
    #[serde(default = "default_format")]
    pub format: String,
    #[serde(default = "default_separator")]
    pub separator: String,
    #[serde(default = "default_true")]
    pub zero_pad: bool,
    #[serde(default = "default_true")]
    pub pretty: bool,
}

impl Default for OutputToml {
    fn default() -> Self {
        Self {
            format: default_format(),
            separator: default_separator(),
            zero_pad: true,
            pretty: true,
        }
    }
}

fn default_format() -> String {
    "text".to_string()
}
fn default_separator() -> String {
    "-".to_string()
}
fn default_true() -> bool {
    true
}

/// Loads the configuration file.
///
/// An explicit `path` must exist. Without one, [`DEFAULT_CONFIG_PATH`] is
/// read if present and defaults are used otherwise.
pub fn load(path: Option<&Path>) -> Result<JalaaliConfig> {
    let path = match path {
        Some(p) => p,
        None => {
            let default = Path::new(DEFAULT_CONFIG_PATH);
            if !default.exists() {
                debug!("no config file, using defaults");
                return Ok(JalaaliConfig::default());
            }
            default
        }
    };
    debug!(path = %path.display(), "reading config");
    let toml_str = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config file: {}", path.display()))?;
    parse(&toml_str)
}

/// Parses configuration from a TOML string.
pub fn parse(toml_str: &str) -> Result<JalaaliConfig> {
    toml::from_str(toml_str).context("failed to parse TOML config")
}
