//! Text output formatter for human-readable display
//!
//! This module provides:
//! - The aligned "Module / Version / Latest" table
//! - Status lines (checking, no updates, unresolved advisory, install result)

use crate::domain::ResolvedDependency;
use crate::output::TITLE;
use colored::{Color, Colorize};
use std::io::Write;

/// Width added to the name and version columns to size the rule
const RULE_PADDING: usize = 20;

/// Text formatter for human-readable output
#[derive(Debug, Clone, Copy)]
pub struct TextFormatter {
    /// Whether to use colors
    color: bool,
}

impl TextFormatter {
    /// Create a new text formatter with color option
    pub fn with_color(color: bool) -> Self {
        Self { color }
    }

    fn paint(&self, text: &str, color: Color) -> String {
        if self.color {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    /// Tool title in cyan
    pub fn title(&self) -> String {
        self.paint(TITLE, Color::Cyan)
    }

    /// Write a status line prefixed with the title
    fn status(&self, text: &str, color: Color, writer: &mut dyn Write) -> std::io::Result<()> {
        writeln!(writer, "{}{}", self.title(), self.paint(text, color))
    }

    /// Announce the check phase
    pub fn format_checking(
        &self,
        runtime: usize,
        dev: usize,
        writer: &mut dyn Write,
    ) -> std::io::Result<()> {
        self.status(
            &format!(
                "Checking the updates of \"{}\" normal and \"{}\" developer modules.",
                runtime, dev
            ),
            Color::Yellow,
            writer,
        )
    }

    /// Nothing to update
    pub fn format_no_updates(&self, writer: &mut dyn Write) -> std::io::Result<()> {
        self.status("No updates available.", Color::Green, writer)
    }

    /// Advisory listing dependencies whose latest version is unknown
    pub fn format_unresolved(&self, names: &[String], writer: &mut dyn Write) -> std::io::Result<()> {
        let quoted: Vec<String> = names.iter().map(|n| format!("\"{}\"", n)).collect();
        self.status(
            &format!(
                "Please remove {} modules. Because the latest version could not be found.",
                quoted.join(", ")
            ),
            Color::Red,
            writer,
        )
    }

    /// Render the update table
    pub fn format_table(
        &self,
        outdated: &[ResolvedDependency],
        writer: &mut dyn Write,
    ) -> std::io::Result<()> {
        if outdated.is_empty() {
            return self.format_no_updates(writer);
        }

        let name_len = max_len(outdated.iter().map(|r| r.name()));
        let version_len = max_len(outdated.iter().map(|r| r.declared_version()));
        let rule = "─".repeat(name_len + version_len + RULE_PADDING);

        writeln!(writer)?;
        writeln!(writer, "{}", self.paint(&rule, Color::Cyan))?;
        let header = format!(
            "▲  {:<name_len$}    {:<version_len$}    Latest",
            "Module", "Version"
        );
        writeln!(writer, "{}", self.paint(&header, Color::Cyan))?;
        writeln!(writer, "{}", self.paint(&rule, Color::Cyan))?;

        for entry in outdated {
            let row = format!(
                "▲  {:<name_len$}  :  {:<version_len$}  →  {}",
                entry.name(),
                entry.declared_version(),
                entry.latest_version().unwrap_or_default()
            );
            writeln!(writer, "{}", self.paint(&row, Color::Yellow))?;
        }

        writeln!(writer, "{}", self.paint(&rule, Color::Cyan))
    }

    /// Show the install command about to run
    pub fn format_install_command(
        &self,
        command: &str,
        writer: &mut dyn Write,
    ) -> std::io::Result<()> {
        self.status(&format!("cmd : {}", command), Color::White, writer)
    }

    /// The install command succeeded
    pub fn format_install_completed(&self, writer: &mut dyn Write) -> std::io::Result<()> {
        self.status("Update completed.", Color::Green, writer)
    }

    /// The install command failed
    pub fn format_install_failed(&self, writer: &mut dyn Write) -> std::io::Result<()> {
        self.status(
            "An error occurred while updating the modules.",
            Color::Red,
            writer,
        )
    }

    /// Confirmation question, two lines ending in the answer prompt
    pub fn format_question(&self, writer: &mut dyn Write) -> std::io::Result<()> {
        writeln!(
            writer,
            "{}{}",
            self.title(),
            self.paint("Do you want to update? (yes / no) ", Color::Yellow)
        )?;
        write!(
            writer,
            "{}{}",
            self.title(),
            self.paint("Your Answer: ", Color::Yellow)
        )?;
        writer.flush()
    }
}

fn max_len<'a>(values: impl Iterator<Item = &'a str>) -> usize {
    values.map(|v| v.chars().count()).max().unwrap_or(0)
}
