//! Outcome of comparing declared versions against the registry

use super::{Dependency, ResolvedDependency};

/// Classification of every checked dependency, in manifest order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckReport {
    /// Dependencies whose latest version differs from the declared one
    pub outdated: Vec<ResolvedDependency>,
    /// Dependencies no endpoint could resolve
    pub unresolved: Vec<Dependency>,
    /// Number of dependencies already at the latest version
    pub up_to_date: usize,
    /// Number of dependencies skipped through the ignore set
    pub ignored: usize,
}

impl CheckReport {
    /// Create an empty report
    pub fn new() -> Self {
        Self::default()
    }

    /// True when at least one dependency could not be resolved
    pub fn has_unresolved(&self) -> bool {
        !self.unresolved.is_empty()
    }

    /// True when there is something to install
    pub fn has_updates(&self) -> bool {
        !self.outdated.is_empty()
    }

    /// Names of unresolved dependencies
    pub fn unresolved_names(&self) -> Vec<String> {
        self.unresolved.iter().map(|d| d.name.clone()).collect()
    }

    /// `name@latest` tokens for every outdated dependency, in report order
    pub fn install_specs(&self) -> Vec<String> {
        self.outdated
            .iter()
            .filter_map(ResolvedDependency::install_spec)
            .collect()
    }

    /// Total number of dependencies accounted for
    pub fn total(&self) -> usize {
        self.outdated.len() + self.unresolved.len() + self.up_to_date + self.ignored
    }
}
