//! Command line front end for `termcss`.
//!
//! Generates the built-in stylesheet and hands it to a [`Storage`]. The
//! binary in `main.rs` wires this to the real filesystem; tests pass an
//! in-memory store.

pub mod args;
pub mod report;
pub mod sink;

use std::io::Write;

use anyhow::{bail, Context, Result};
use termcss::{Stylesheet, Tokens};
use tracing::{debug, info};

pub use args::{Args, Format, DEFAULT_OUTPUT};
pub use report::{Report, Status};
pub use sink::{FileStorage, Storage};

/// Generates the stylesheet and delivers it according to `args`.
///
/// - `--stdout` writes the CSS to `out` and leaves storage untouched
/// - `--check` compares against the stored file and writes nothing
/// - otherwise the CSS replaces the file at `args.output`
///
/// A stale `--check` is not an error; the returned [`Report`] says so.
pub fn run<S: Storage, W: Write>(args: &Args, storage: &S, out: &mut W) -> Result<Report> {
    let tokens = Tokens::builtin();
    if let Err(err) = tokens.validate() {
        bail!("built-in tokens are inconsistent: {}", err);
    }

    let sheet = Stylesheet::generate(&tokens);
    let css = sheet.render();
    debug!(rules = sheet.rule_count(), bytes = css.len(), "generated stylesheet");

    let status = if args.stdout {
        out.write_all(css.as_bytes())
            .context("failed to write stylesheet to stdout")?;
        Status::Printed
    } else if args.check {
        let existing = storage
            .read(&args.output)
            .with_context(|| format!("failed to read {}", args.output.display()))?;
        match existing {
            Some(bytes) if bytes == css.as_bytes() => Status::UpToDate,
            Some(_) => Status::Stale,
            None => Status::Missing,
        }
    } else {
        storage
            .write(&args.output, css.as_bytes())
            .with_context(|| format!("failed to write {}", args.output.display()))?;
        info!(path = %args.output.display(), bytes = css.len(), "wrote stylesheet");
        Status::Written
    };

    Ok(Report::new(&args.output, &sheet, css.len(), status))
}
