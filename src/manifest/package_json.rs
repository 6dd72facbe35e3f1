//! package.json parser
//!
//! Handles:
//! - dependencies
//! - devDependencies
//! - the `update-modules.ignore` list

use super::IgnoreSet;
use crate::domain::Dependency;
use crate::error::ManifestError;
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};

/// Top-level key holding this tool's settings
pub const TOOL_SECTION: &str = "update-modules";

/// Dependencies and ignore list read from package.json
#[derive(Debug, Clone, Default)]
pub struct ParsedPackageJson {
    /// Runtime dependencies first, then development ones
    pub dependencies: Vec<Dependency>,
    /// Names listed under the tool section
    pub ignore: IgnoreSet,
}

/// Parser for package.json files
pub struct PackageJsonParser {
    path: PathBuf,
}

impl PackageJsonParser {
    /// Create a parser; `path` is only used in error messages
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Parse the manifest content
    pub fn parse(&self, content: &str) -> Result<ParsedPackageJson, ManifestError> {
        let json: Value = serde_json::from_str(content)
            .map_err(|e| ManifestError::malformed(&self.path, e.to_string()))?;

        let Some(root) = json.as_object() else {
            return Err(ManifestError::malformed(
                &self.path,
                "top-level value is not an object",
            ));
        };

        let mut dependencies = Vec::new();

        if let Some(deps) = root.get("dependencies").and_then(|v| v.as_object()) {
            parse_dependency_object(deps, false, &mut dependencies);
        }

        if let Some(deps) = root.get("devDependencies").and_then(|v| v.as_object()) {
            parse_dependency_object(deps, true, &mut dependencies);
        }

        Ok(ParsedPackageJson {
            dependencies,
            ignore: parse_ignore(root),
        })
    }
}

/// Strip a single leading caret; every other operator is kept verbatim
pub fn normalize_version(spec: &str) -> &str {
    spec.strip_prefix('^').unwrap_or(spec)
}

fn parse_dependency_object(deps: &Map<String, Value>, is_dev: bool, output: &mut Vec<Dependency>) {
    for (name, version_value) in deps {
        let Some(version_str) = version_value.as_str() else {
            continue;
        };

        // A name declared in both sections keeps its last declaration
        if let Some(pos) = output.iter().position(|d| d.name == *name) {
            output.remove(pos);
        }

        output.push(Dependency::new(
            name.clone(),
            normalize_version(version_str),
            is_dev,
        ));
    }
}

fn parse_ignore(root: &Map<String, Value>) -> IgnoreSet {
    root.get(TOOL_SECTION)
        .and_then(|section| section.get("ignore"))
        .and_then(|v| v.as_array())
        .map(|names| names.iter().filter_map(|n| n.as_str()).collect())
        .unwrap_or_default()
}
