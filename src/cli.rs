use std::path::PathBuf;

use clap::Parser;

/// Top-level CLI definition. Running with no arguments provisions the
/// default workspace layout.
#[derive(Parser, Debug)]
#[command(name = "mkws", version, about = "Provision a standard workspace directory layout")]
pub struct Cli {
    /// Override the workspace root directory.
    #[arg(long = "root")]
    pub root: Option<PathBuf>,

    /// Read layout configuration from an explicit file instead of discovering one.
    #[arg(short = 'f', long = "file")]
    pub file: Option<PathBuf>,
}

/// Helper entry point so `main` can stay minimal.
pub fn parse() -> Cli {
    Cli::parse()
}
