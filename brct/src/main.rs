//! Brct CLI - A command-line delimiter balance checker.
//!
//! This is the main entry point for the brct CLI application.
//! It uses clap for argument parsing, reads the given source file,
//! and reports unbalanced parentheses, braces, and brackets.

mod commands;
mod config;
mod error;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::check::{run_check, CheckArgs};
use config::Config;
use error::{BrctError, Result};

/// Brct - checks delimiter balance in source files
///
/// Brct scans a source file for `()`, `{}`, and `[]` pairs, skipping
/// delimiters inside comments and string literals, and reports every
/// unbalanced occurrence with its line and column.
#[derive(Parser, Debug)]
#[command(name = "brct")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Checks delimiter balance in source files", long_about = None)]
struct Cli {
    /// Source file to check
    file: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, env = "BRCT_VERBOSE")]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, env = "BRCT_CONFIG")]
    config: Option<PathBuf>,

    /// Disable color output
    #[arg(long, env = "BRCT_NO_COLOR")]
    no_color: bool,
}

/// Main entry point for the brct CLI.
///
/// Exits with status 0 when the file is balanced (or no file was given)
/// and status 1 when defects were found or a fatal error occurred.
fn main() -> ExitCode {
    match run() {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Parses arguments, loads configuration, initializes logging, and runs
/// the check. Returns `Ok(true)` when no defects were found.
fn run() -> Result<bool> {
    let cli = Cli::parse();

    let config = load_config(cli.config.as_deref())?;

    init_logging(cli.verbose || config.verbose, cli.no_color || !config.color)?;

    let Some(file) = cli.file else {
        Cli::command()
            .print_help()
            .map_err(|e| BrctError::Config(format!("Failed to print help: {}", e)))?;
        return Ok(true);
    };

    let report = run_check(CheckArgs {
        file,
        verbose: cli.verbose || config.verbose,
        max_errors: config.max_errors,
    })?;
    Ok(report.is_clean())
}

/// Initialize the logging system.
///
/// # Arguments
/// * `verbose` - Whether to enable verbose logging
/// * `no_color` - Whether to disable colored output
fn init_logging(verbose: bool, no_color: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    let subscriber = fmt::layer()
        .with_ansi(!no_color)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .map_err(|e| BrctError::Config(format!("Failed to initialize logging: {}", e)))?;

    Ok(())
}

/// Load configuration from file or use defaults.
fn load_config(config_path: Option<&std::path::Path>) -> Result<Config> {
    match config_path {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    }
}
