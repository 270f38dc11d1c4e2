//! Check command implementation.
//!
//! Reads the input file as UTF-8, runs the balance scanner over it, and
//! prints the report. All diagnostics for one invocation are printed
//! together; there is no streaming output.

use std::path::PathBuf;
use std::time::Instant;

use brc_scan::check_source;
use brc_util::Diagnostic;
use tracing::debug;

use crate::error::Result;

/// Arguments for the check command.
#[derive(Debug, Clone)]
pub struct CheckArgs {
    /// File to scan.
    pub file: PathBuf,
    /// Enable verbose output.
    pub verbose: bool,
    /// Cap on the number of report lines printed (never caps collection).
    pub max_errors: Option<usize>,
}

/// Result of a check: every diagnostic the scan collected, in report order.
#[derive(Debug)]
pub struct CheckReport {
    /// Collected diagnostics; empty means the file is balanced.
    pub diagnostics: Vec<Diagnostic>,
}

impl CheckReport {
    /// Returns true when no defects were found.
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

/// Run the check command.
///
/// Reading the file is the only fallible step; once the text is in memory
/// the scan itself cannot fail.
pub fn run_check(args: CheckArgs) -> Result<CheckReport> {
    debug!(file = %args.file.display(), "reading source");
    let source = std::fs::read_to_string(&args.file)?;

    let started = Instant::now();
    let diagnostics = check_source(&source);
    debug!(
        elapsed = ?started.elapsed(),
        defects = diagnostics.len(),
        "scan finished"
    );

    if args.verbose {
        for diag in &diagnostics {
            debug!(code = ?diag.code, span = %diag.span, "defect");
        }
    }

    print_report(&diagnostics, args.max_errors);
    Ok(CheckReport { diagnostics })
}

/// Prints the report: a confirmation when clean, otherwise a header
/// followed by one line per diagnostic in discovery order.
fn print_report(diagnostics: &[Diagnostic], max_errors: Option<usize>) {
    if diagnostics.is_empty() {
        println!("No errors found.");
        return;
    }

    println!("Errors found:");
    let shown = max_errors
        .unwrap_or(diagnostics.len())
        .min(diagnostics.len());
    for diag in &diagnostics[..shown] {
        println!("{}", diag.message);
    }
    if shown < diagnostics.len() {
        println!("... and {} more", diagnostics.len() - shown);
    }
}
