//! CLI argument parsing module for update-modules

use crate::error::ConfigError;
use crate::package_manager::PackageManager;
use crate::registry::{JSDELIVR_NPM_URL, NPM_REGISTRY_URL};
use clap::{ArgAction, Parser};
use std::path::PathBuf;
use std::time::Duration;
use tokio::sync::Semaphore;

/// Default number of registry lookups in flight
pub const DEFAULT_CONCURRENCY: usize = 10;

/// Default per-request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Parse the concurrency limit, from 1 to the semaphore's permit ceiling
fn parse_concurrency(s: &str) -> Result<usize, String> {
    let value: usize = s
        .trim()
        .parse()
        .map_err(|_| format!("invalid number: {}", s))?;
    if value == 0 || value > Semaphore::MAX_PERMITS {
        return Err(ConfigError::InvalidConcurrency { value }.to_string());
    }
    Ok(value)
}

/// Parse the request timeout in seconds, which must be at least 1
fn parse_timeout(s: &str) -> Result<u64, String> {
    let value: u64 = s
        .trim()
        .parse()
        .map_err(|_| format!("invalid number: {}", s))?;
    if value == 0 {
        return Err(ConfigError::InvalidTimeout { value }.to_string());
    }
    Ok(value)
}

/// Check package.json dependencies against the npm registry
#[derive(Parser, Debug, Clone)]
#[command(
    name = "update-modules",
    version,
    about = "Check package.json dependencies against the npm registry and install updates"
)]
pub struct CliArgs {
    /// Project directory or package.json path (default: current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Print every internal decision
    #[arg(long)]
    pub debug: bool,

    /// Maximum number of registry lookups in flight
    #[arg(short = 'c', long, default_value_t = DEFAULT_CONCURRENCY, value_parser = parse_concurrency)]
    pub concurrency: usize,

    /// Per-request timeout in seconds
    #[arg(long, value_name = "SECS", default_value_t = DEFAULT_TIMEOUT_SECS, value_parser = parse_timeout)]
    pub timeout: u64,

    /// Ignore a package in addition to the manifest's list (can be specified multiple times)
    #[arg(long, action = ArgAction::Append)]
    pub ignore: Vec<String>,

    /// Package manager used for installing (npm, yarn, pnpm, bun; default: detect)
    #[arg(long)]
    pub package_manager: Option<PackageManager>,

    /// Install without asking for confirmation
    #[arg(short = 'y', long)]
    pub yes: bool,

    /// Disable progress bars
    #[arg(long)]
    pub no_progress: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Primary registry base URL
    #[arg(long, default_value = NPM_REGISTRY_URL)]
    pub registry: String,

    /// Fallback CDN base URL
    #[arg(long, default_value = JSDELIVR_NPM_URL)]
    pub fallback_registry: String,
}

impl CliArgs {
    /// Request timeout as a Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }
}
