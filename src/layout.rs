use anyhow::{Result, anyhow, bail};
use camino::{Utf8Path, Utf8PathBuf};

/// Directories provisioned under the workspace root, in report order. The
/// empty entry is the root itself; intermediates (`src`, `tests`, `.github`)
/// are created implicitly.
pub const DEFAULT_SUBDIRS: &[&str] = &[
    "",
    "prompts",
    "specs",
    "openapi",
    "db",
    "migrations",
    "scripts",
    "src/routes",
    "src/payments/adapters",
    "src/infra/memory",
    "tests/payments/unit",
    "tests/payments/integration",
    ".github/workflows",
    "docs",
];

const DEFAULT_ROOT_DIRNAME: &str = "SpecCoding";

/// Workspace layout: an absolute root plus the ordered relative subpaths to
/// ensure beneath it.
#[derive(Clone, Debug)]
pub struct Layout {
    root: Utf8PathBuf,
    subpaths: Vec<String>,
}

impl Layout {
    pub fn new(root: Utf8PathBuf, subpaths: Vec<String>) -> Result<Self> {
        if !root.is_absolute() {
            bail!("workspace root must be an absolute path, got `{}`", root);
        }
        for sub in &subpaths {
            // An absolute entry would make `join` discard the root entirely.
            if Utf8Path::new(sub).is_absolute() {
                bail!("subpath entries must be relative, got `{}`", sub);
            }
        }
        Ok(Self { root, subpaths })
    }

    pub fn root(&self) -> &Utf8Path {
        &self.root
    }

    pub fn subpaths(&self) -> &[String] {
        &self.subpaths
    }

    /// Resolve a subpath against the root. The empty string denotes the root
    /// itself, without a trailing-separator artifact.
    pub fn target(&self, subpath: &str) -> Utf8PathBuf {
        if subpath.is_empty() {
            self.root.clone()
        } else {
            self.root.join(subpath)
        }
    }
}

/// Default workspace root: `SpecCoding` under the user's home directory.
pub fn default_root() -> Result<Utf8PathBuf> {
    let home = dirs::home_dir().ok_or_else(|| anyhow!("unable to determine home directory"))?;
    let root = Utf8PathBuf::from_path_buf(home)
        .map_err(|_| anyhow!("home directory is not valid UTF-8"))?;
    Ok(root.join(DEFAULT_ROOT_DIRNAME))
}

pub fn default_subpaths() -> Vec<String> {
    DEFAULT_SUBDIRS.iter().map(|s| (*s).to_owned()).collect()
}
