//! Progress display for the check and install phases
//!
//! Provides visual feedback using indicatif. Bars draw to stdout so they
//! interleave with the report.

use crate::output::TITLE;
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::time::Duration;

/// Message shown while registry lookups run
pub const CHECK_MESSAGE: &str = "Modules Control:";

/// Message shown while the install command runs
pub const INSTALL_MESSAGE: &str = "Modules Install:";

/// Progress reporter for the workflow
pub struct Progress {
    /// Whether progress display is enabled
    enabled: bool,
    /// Current progress bar
    bar: Option<ProgressBar>,
}

impl Progress {
    /// Create a new progress reporter
    pub fn new(enabled: bool) -> Self {
        Self { enabled, bar: None }
    }

    /// Start a progress bar for a known number of items
    pub fn start(&mut self, total: u64, message: &str) {
        if !self.enabled {
            return;
        }

        let bar = ProgressBar::with_draw_target(Some(total), ProgressDrawTarget::stdout());
        match ProgressStyle::default_bar()
            .template("{prefix:.cyan}{msg:.yellow} {bar:30.yellow} {pos} / {len}")
        {
            Ok(style) => bar.set_style(style.progress_chars("+-")),
            Err(e) => log::debug!("progress template rejected: {}", e),
        }
        bar.set_prefix(TITLE);
        bar.set_message(message.to_string());
        bar.enable_steady_tick(Duration::from_millis(100));
        self.bar = Some(bar);
    }

    /// Increment progress by one
    pub fn inc(&self) {
        if let Some(ref bar) = self.bar {
            bar.inc(1);
        }
    }

    /// Finish the current bar, leaving it on screen
    pub fn finish(&mut self) {
        if let Some(ref bar) = self.bar {
            bar.finish();
        }
        self.bar = None;
    }
}
