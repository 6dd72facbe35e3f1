//! Output formatting for check results
//!
//! This module provides:
//! - The tool title prefixed to status lines
//! - Text output: aligned update table and status messages

mod text;

pub use text::TextFormatter;

/// Prefix for every status line
pub const TITLE: &str = "▲ update-modules: ";

/// Configuration for output formatting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputConfig {
    /// Whether to use colors
    pub color: bool,
}

impl OutputConfig {
    /// Create configuration from CLI arguments
    pub fn from_cli(no_color: bool) -> Self {
        Self { color: !no_color }
    }

    /// Build the formatter for this configuration
    pub fn formatter(&self) -> TextFormatter {
        TextFormatter::with_color(self.color)
    }
}
