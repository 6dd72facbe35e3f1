//! Dependency information structures

use std::fmt;

/// A dependency declared in package.json
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dependency {
    /// Package name
    pub name: String,
    /// Declared version with a single leading caret removed
    pub declared_version: String,
    /// Whether this is a development dependency
    pub is_dev: bool,
}

impl Dependency {
    /// Creates a new dependency
    pub fn new(name: impl Into<String>, declared_version: impl Into<String>, is_dev: bool) -> Self {
        Self {
            name: name.into(),
            declared_version: declared_version.into(),
            is_dev,
        }
    }

    /// Creates a new runtime dependency
    pub fn production(name: impl Into<String>, declared_version: impl Into<String>) -> Self {
        Self::new(name, declared_version, false)
    }

    /// Creates a new development dependency
    pub fn development(name: impl Into<String>, declared_version: impl Into<String>) -> Self {
        Self::new(name, declared_version, true)
    }

    /// Attach the registry lookup result
    pub fn resolve(self, latest_version: Option<String>) -> ResolvedDependency {
        ResolvedDependency {
            dependency: self,
            latest_version,
        }
    }
}

impl fmt::Display for Dependency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let dev_marker = if self.is_dev { " (dev)" } else { "" };
        write!(f, "{}@{}{}", self.name, self.declared_version, dev_marker)
    }
}

/// A dependency together with the latest version the registry reported
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedDependency {
    /// The declared dependency
    pub dependency: Dependency,
    /// Latest published version, None when every endpoint failed
    pub latest_version: Option<String>,
}

impl ResolvedDependency {
    /// Package name
    pub fn name(&self) -> &str {
        &self.dependency.name
    }

    /// Declared version
    pub fn declared_version(&self) -> &str {
        &self.dependency.declared_version
    }

    /// Latest version, if it could be resolved
    pub fn latest_version(&self) -> Option<&str> {
        self.latest_version.as_deref()
    }

    /// True when no endpoint produced a version
    pub fn is_unresolved(&self) -> bool {
        self.latest_version.is_none()
    }

    /// True when the latest version differs textually from the declared one
    pub fn is_outdated(&self) -> bool {
        matches!(&self.latest_version, Some(latest) if *latest != self.dependency.declared_version)
    }

    /// Install token in `name@version` form, None when unresolved
    pub fn install_spec(&self) -> Option<String> {
        self.latest_version
            .as_ref()
            .map(|latest| format!("{}@{}", self.dependency.name, latest))
    }
}
