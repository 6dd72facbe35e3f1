//! Core domain models for update-modules
//!
//! This module contains the fundamental types used throughout the application:
//! - Dependency records read from package.json
//! - Resolved dependencies carrying the registry's latest version
//! - The check report produced by comparing the two

mod dependency;
mod report;

pub use dependency::{Dependency, ResolvedDependency};
pub use report::CheckReport;
