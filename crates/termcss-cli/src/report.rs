//! Status report printed after a run.

use std::path::{Path, PathBuf};

use console::style;
use serde::Serialize;
use termcss::{FamilyStats, Stylesheet};

/// What happened to the stylesheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Status {
    /// Written to the output path
    Written,
    /// Printed to stdout
    Printed,
    /// `--check`: the stored file matches
    UpToDate,
    /// `--check`: the stored file differs
    Stale,
    /// `--check`: there is no stored file
    Missing,
}

impl Status {
    /// Whether the process should exit successfully.
    pub fn is_success(self) -> bool {
        !matches!(self, Status::Stale | Status::Missing)
    }
}

/// Summary of one generation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub path: PathBuf,
    pub status: Status,
    pub bytes: usize,
    pub rules: usize,
    pub families: Vec<FamilyStats>,
}

impl Report {
    pub fn new(path: &Path, sheet: &Stylesheet, bytes: usize, status: Status) -> Self {
        Self {
            path: path.to_path_buf(),
            status,
            bytes,
            rules: sheet.rule_count(),
            families: sheet.stats(),
        }
    }

    /// One status line, styled for the terminal when colors are enabled.
    pub fn to_text(&self) -> String {
        let path = self.path.display();
        match self.status {
            Status::Written => format!(
                "{} {} written successfully ({} rules, {} bytes).",
                style("✓").green().bold(),
                path,
                self.rules,
                self.bytes
            ),
            Status::Printed => format!(
                "{} stylesheet printed ({} rules, {} bytes).",
                style("✓").green().bold(),
                self.rules,
                self.bytes
            ),
            Status::UpToDate => format!("{} {} is up to date.", style("✓").green().bold(), path),
            Status::Stale => format!(
                "{} {} is out of date; run termcss to regenerate it.",
                style("✗").red().bold(),
                path
            ),
            Status::Missing => format!(
                "{} {} does not exist; run termcss to generate it.",
                style("✗").red().bold(),
                path
            ),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Failure line for errors that abort a run.
pub fn error_text(err: &anyhow::Error) -> String {
    format!("{} {:#}", style("✗").red().bold(), err)
}
