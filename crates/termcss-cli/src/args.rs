//! Command line arguments.

use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum};

/// File written when no `--output` is given.
pub const DEFAULT_OUTPUT: &str = "layout.css";

/// How the status report is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Format {
    /// One styled status line
    #[default]
    Text,
    /// The full report as JSON
    Json,
}

/// Generate the termcss utility stylesheet.
///
/// With no arguments, writes `layout.css` in the current directory.
#[derive(Debug, Clone, Parser)]
#[command(name = "termcss", version, about)]
pub struct Args {
    /// Path of the generated stylesheet
    #[arg(short, long, value_name = "PATH", default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Print the stylesheet to stdout instead of writing it
    #[arg(long, conflicts_with = "check")]
    pub stdout: bool,

    /// Exit non-zero if the file at --output differs from a fresh generation
    #[arg(long)]
    pub check: bool,

    /// Status report format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    pub format: Format,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// Default log filter for the verbosity count. `RUST_LOG` overrides it.
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    }
}
