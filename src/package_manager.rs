//! Package manager integration for installing updated dependencies
//!
//! This module provides:
//! - Detection of the project's package manager from its lockfile
//! - A single install command pinning every outdated package
//! - A runner trait so tests can replace the child process

use crate::error::ConfigError;
use log::debug;
use std::fmt;
use std::path::Path;
use std::process::{Command, Output};
use std::str::FromStr;

/// Supported Node.js package managers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PackageManager {
    #[default]
    Npm,
    Yarn,
    Pnpm,
    Bun,
}

impl PackageManager {
    /// Executable name
    pub fn binary(&self) -> &'static str {
        match self {
            PackageManager::Npm => "npm",
            PackageManager::Yarn => "yarn",
            PackageManager::Pnpm => "pnpm",
            PackageManager::Bun => "bun",
        }
    }

    /// Subcommand that adds packages at explicit versions
    fn install_subcommand(&self) -> &'static str {
        match self {
            PackageManager::Npm => "install",
            PackageManager::Yarn | PackageManager::Pnpm | PackageManager::Bun => "add",
        }
    }

    /// Detect the package manager to use from lockfiles, defaulting to npm
    pub fn detect(working_dir: &Path) -> Self {
        // Check for lockfiles in order of preference
        if working_dir.join("pnpm-lock.yaml").exists() {
            return PackageManager::Pnpm;
        }
        if working_dir.join("yarn.lock").exists() {
            return PackageManager::Yarn;
        }
        if working_dir.join("bun.lockb").exists() || working_dir.join("bun.lock").exists() {
            return PackageManager::Bun;
        }
        PackageManager::Npm
    }

    /// Full argument vector: binary, subcommand, then `name@version` tokens
    pub fn install_command(&self, packages: &[String]) -> Vec<String> {
        let mut command = vec![
            self.binary().to_string(),
            self.install_subcommand().to_string(),
        ];
        command.extend(packages.iter().cloned());
        command
    }
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.binary())
    }
}

impl FromStr for PackageManager {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "npm" => Ok(PackageManager::Npm),
            "yarn" => Ok(PackageManager::Yarn),
            "pnpm" => Ok(PackageManager::Pnpm),
            "bun" => Ok(PackageManager::Bun),
            _ => Err(ConfigError::InvalidPackageManager {
                value: s.to_string(),
            }),
        }
    }
}

/// Result of a package manager installation
#[derive(Debug, Clone)]
pub struct InstallResult {
    /// The command that was executed
    pub command: String,
    /// Whether the command succeeded
    pub success: bool,
    /// Standard output from the command
    pub stdout: String,
    /// Standard error from the command
    pub stderr: String,
}

impl InstallResult {
    /// Create a successful install result
    pub fn success(command: String, stdout: String, stderr: String) -> Self {
        Self {
            command,
            success: true,
            stdout,
            stderr,
        }
    }

    /// Create a failed install result
    pub fn failure(command: String, stdout: String, stderr: String) -> Self {
        Self {
            command,
            success: false,
            stdout,
            stderr,
        }
    }
}

/// Trait for running package manager install commands
pub trait PackageManagerRunner: Send + Sync {
    /// Install `packages` (`name@version` tokens) in the specified directory
    fn run_install(
        &self,
        package_manager: PackageManager,
        packages: &[String],
        working_dir: &Path,
    ) -> InstallResult;
}

/// Default package manager runner that executes real commands
#[derive(Debug, Default)]
pub struct SystemPackageManager;

impl SystemPackageManager {
    /// Create a new system package manager
    pub fn new() -> Self {
        Self
    }

    /// Run a command and capture output
    fn run_command(&self, command: &[String], working_dir: &Path) -> std::io::Result<Output> {
        let Some((program, args)) = command.split_first() else {
            return Err(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                "Empty command",
            ));
        };

        Command::new(program)
            .args(args)
            .current_dir(working_dir)
            .output()
    }
}

impl PackageManagerRunner for SystemPackageManager {
    fn run_install(
        &self,
        package_manager: PackageManager,
        packages: &[String],
        working_dir: &Path,
    ) -> InstallResult {
        let command_parts = package_manager.install_command(packages);
        let command_str = command_parts.join(" ");

        debug!("Spawning `{}` in {}", command_str, working_dir.display());

        match self.run_command(&command_parts, working_dir) {
            Ok(output) => {
                let stdout = String::from_utf8_lossy(&output.stdout).to_string();
                let stderr = String::from_utf8_lossy(&output.stderr).to_string();
                debug!("`{}` exited with {}", package_manager, output.status);

                if output.status.success() {
                    InstallResult::success(command_str, stdout, stderr)
                } else {
                    InstallResult::failure(command_str, stdout, stderr)
                }
            }
            Err(e) => InstallResult::failure(
                command_str,
                String::new(),
                format!("Failed to execute command: {}", e),
            ),
        }
    }
}
