use std::path::{Path, PathBuf};

use anyhow::{Result, anyhow, bail};
use camino::Utf8PathBuf;
use tracing::debug;

use crate::cli::Cli;
use crate::config::{self, LayoutConfig};
use crate::layout::{self, Layout};
use crate::provision;

const CONFIG_DIRNAME: &str = ".mkws";
const CONFIG_FILENAME: &str = "config.toml";

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum ConfigPathSource {
    Explicit,
    Discovered,
    HomeDefault,
}

impl ConfigPathSource {
    fn as_str(&self) -> &'static str {
        match self {
            ConfigPathSource::Explicit => "explicit",
            ConfigPathSource::Discovered => "discovered",
            ConfigPathSource::HomeDefault => "home-default",
        }
    }
}

#[derive(Clone, Debug)]
struct ResolvedConfigPath {
    path: Utf8PathBuf,
    source: ConfigPathSource,
}

pub fn run(cli: Cli) -> Result<()> {
    let resolved = resolve_config_path(cli.file.as_deref())?;

    let config = if resolved.path.exists() {
        debug!(
            "loading config from {} ({})",
            resolved.path,
            resolved.source.as_str()
        );
        config::load_from_path(&resolved.path)?
    } else if resolved.source == ConfigPathSource::Explicit {
        bail!("config file not found at {}", resolved.path);
    } else {
        LayoutConfig::default()
    };

    let layout = build_layout(cli.root, config)?;
    let processed = provision::ensure_directories(&layout)?;

    println!("Created/verified directories:");
    for path in &processed {
        println!("{}", path);
    }
    Ok(())
}

/// Effective root: `--root` flag, then config `root`, then the built-in
/// default. Subpaths come from config or the built-in list.
fn build_layout(root_flag: Option<PathBuf>, config: LayoutConfig) -> Result<Layout> {
    let root = match root_flag {
        Some(path) => Utf8PathBuf::from_path_buf(path)
            .map_err(|_| anyhow!("--root path must be valid UTF-8"))?,
        None => match config.root {
            Some(root) => Utf8PathBuf::from(root),
            None => layout::default_root()?,
        },
    };
    let subpaths = config.subpaths.unwrap_or_else(layout::default_subpaths);
    Layout::new(root, subpaths)
}

fn resolve_config_path(file: Option<&Path>) -> Result<ResolvedConfigPath> {
    if let Some(path) = file {
        let path = Utf8PathBuf::from_path_buf(path.to_path_buf())
            .map_err(|_| anyhow!("config path must be valid UTF-8"))?;
        return Ok(ResolvedConfigPath {
            path,
            source: ConfigPathSource::Explicit,
        });
    }

    if let Ok(cwd) = std::env::current_dir() {
        if let Ok(mut dir) = Utf8PathBuf::from_path_buf(cwd) {
            loop {
                let candidate = dir.join(CONFIG_DIRNAME).join(CONFIG_FILENAME);
                if candidate.exists() {
                    return Ok(ResolvedConfigPath {
                        path: candidate,
                        source: ConfigPathSource::Discovered,
                    });
                }

                let Some(parent) = dir.parent() else {
                    break;
                };
                dir = parent.to_path_buf();
            }
        }
    }

    let home = dirs::home_dir().ok_or_else(|| anyhow!("unable to determine home directory"))?;
    let mut path = home;
    path.push(CONFIG_DIRNAME);
    path.push(CONFIG_FILENAME);
    let path =
        Utf8PathBuf::from_path_buf(path).map_err(|_| anyhow!("config path must be valid UTF-8"))?;
    Ok(ResolvedConfigPath {
        path,
        source: ConfigPathSource::HomeDefault,
    })
}
