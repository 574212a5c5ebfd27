//! CLI argument parsing for offline refreshes.
use clap::Parser;
use std::path::PathBuf;

use group_refresh::config::DEFAULT_CONFIG_FILE;

/// Refresh a grouped dependency update pull request against precomputed
/// candidate updates. Decisions are logged, never applied.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    #[arg(long)]
    /// Path to the job payload (JSON).
    pub job: PathBuf,

    #[arg(long)]
    /// Path to the resolved candidate updates (JSON array).
    pub candidates: PathBuf,

    #[arg(long)]
    /// Head commit of the target branch.
    pub base_commit_sha: String,

    #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
    /// Path to the refresh configuration (TOML). Missing files use defaults.
    pub config: PathBuf,

    #[arg(long, default_value_t = false)]
    /// Enable debug logging.
    pub debug: bool,
}
