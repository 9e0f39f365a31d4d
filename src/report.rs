//! Rendering of the user-visible report lines.

use std::io::{self, Write};
use std::path::Path;

use crate::checker::{self, Outcome};
use crate::error::Result;

/// Printed instead of a report when no path was given.
pub const MISSING_PATH_MESSAGE: &str = "Please provide an image path";

/// Turn a check result into the lines shown to the user.
///
/// A successful check yields the optional conversion note followed by the
/// verdict line. A failed check yields a single `Error: ...` line.
#[must_use]
pub fn render(result: &Result<Outcome>) -> Vec<String> {
    match result {
        Ok(outcome) => outcome
            .conversion_note()
            .into_iter()
            .chain(std::iter::once(outcome.verdict().to_string()))
            .collect(),
        Err(e) => vec![format!("Error: {e}")],
    }
}

/// Check the image at `path` and write the report lines to `out`.
///
/// Check failures are part of the report, not of the return value.
///
/// # Errors
///
/// Returns an error only if writing to `out` fails.
pub fn write_report<W: Write>(out: &mut W, path: &Path) -> io::Result<()> {
    let result = checker::check(path);
    if let Err(e) = &result {
        log::debug!("check of {} failed: {e:?}", path.display());
    }
    for line in render(&result) {
        writeln!(out, "{line}")?;
    }
    out.flush()
}
