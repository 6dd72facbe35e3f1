//! Manifest loading
//!
//! This module provides functionality to:
//! - Locate package.json from a directory or file path
//! - Read runtime and development dependencies in declaration order
//! - Read the tool's ignore list

mod ignore;
mod package_json;

pub use ignore::IgnoreSet;
pub use package_json::{normalize_version, PackageJsonParser, ParsedPackageJson, TOOL_SECTION};

use crate::domain::Dependency;
use crate::error::ManifestError;
use std::path::{Path, PathBuf};

/// File name looked up when a directory is given
pub const MANIFEST_FILENAME: &str = "package.json";

/// A loaded project manifest
#[derive(Debug, Clone)]
pub struct Manifest {
    /// Path of the manifest file
    pub path: PathBuf,
    /// Runtime dependencies first, then development ones
    pub dependencies: Vec<Dependency>,
    /// Names excluded from checking
    pub ignore: IgnoreSet,
}

impl Manifest {
    /// Load the manifest at `path`, which may be a project directory or the file itself
    pub fn load(path: &Path) -> Result<Self, ManifestError> {
        let path = resolve_manifest_path(path);
        if !path.is_file() {
            return Err(ManifestError::not_found(path));
        }

        let content =
            std::fs::read_to_string(&path).map_err(|e| ManifestError::read_error(&path, e))?;
        let parsed = PackageJsonParser::new(&path).parse(&content)?;

        Ok(Self {
            path,
            dependencies: parsed.dependencies,
            ignore: parsed.ignore,
        })
    }

    /// Directory the manifest lives in; install commands run here
    pub fn project_dir(&self) -> &Path {
        self.path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."))
    }

    /// Number of runtime dependencies
    pub fn runtime_count(&self) -> usize {
        self.dependencies.iter().filter(|d| !d.is_dev).count()
    }

    /// Number of development dependencies
    pub fn dev_count(&self) -> usize {
        self.dependencies.iter().filter(|d| d.is_dev).count()
    }
}

/// Map a user-supplied path to the manifest file
pub fn resolve_manifest_path(path: &Path) -> PathBuf {
    if path.is_dir() {
        path.join(MANIFEST_FILENAME)
    } else {
        path.to_path_buf()
    }
}
