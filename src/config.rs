use std::fs;

use anyhow::{Context, Result};
use camino::Utf8Path;
use serde::Deserialize;

/// Layout configuration loaded from `~/.mkws/config.toml` by default. Both
/// keys are optional; missing keys fall back to the built-in defaults.
#[derive(Debug, Default, Deserialize)]
pub struct LayoutConfig {
    pub root: Option<String>,
    pub subpaths: Option<Vec<String>>,
}

/// Load a configuration file from disk and deserialize it.
pub fn load_from_path(path: &Utf8Path) -> Result<LayoutConfig> {
    let raw = fs::read_to_string(path).with_context(|| format!("reading config {}", path))?;
    toml::from_str(&raw).with_context(|| format!("parsing config {}", path))
}
