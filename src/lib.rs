//! update-modules - npm dependency update checker library
//!
//! This library provides the core functionality for checking the
//! dependencies declared in a package.json:
//! - Reading runtime and development dependencies plus an ignore list
//! - Resolving latest versions from the npm registry with a CDN fallback
//! - Rendering the outdated ones and installing them after confirmation

pub mod cli;
pub mod domain;
pub mod error;
pub mod manifest;
pub mod orchestrator;
pub mod output;
pub mod package_manager;
pub mod progress;
pub mod prompt;
pub mod registry;
pub mod update;
