//! CLI module for the tlang front end
//!
//! This module provides the command-line interface: read a source file, scan and parse it, and print the token table,
//! the diagnostics and the final status.
//!
//! ## Commands
//!
//! - `<file>` - Scan and parse (default action)
//! - `parse <file>` - Same as the default action
//! - `lex <file>` - Scan only: tokens and lexical diagnostics
//!
//! ## Modules
//!
//! - `commands` - Command implementations
//! - `report` - Text and JSON rendering
//!
//! ## Design
//!
//! The CLI uses clap for argument parsing with derive macros.
//! Command functions return `CliResult<T>` instead of calling `process::exit`.
//! Only the top-level `run()` function handles errors and exits.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod commands;
pub mod report;

use std::fmt;
use std::path::PathBuf;
use std::process;

use clap::{Args, Parser, Subcommand, ValueEnum};
use tlang_syntax::config::DEFAULT_MAX_IDENTIFIER_LEN;
use tlang_syntax::{AnalysisConfig, RecoveryPolicy};

use crate::version::TLANG_VERSION;

// ============================================================================
// CLI Error handling
// ============================================================================

/// Exit code for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);
    pub const FAILURE: ExitCode = ExitCode(1);
    /// `--strict` run whose source has diagnostics.
    pub const DIAGNOSTICS: ExitCode = ExitCode(2);
}

/// Error type for CLI operations.
///
/// Contains a user-facing message and an exit code. The CLI entry point
/// catches these errors, prints the message, and exits with the code.
#[derive(Debug)]
pub struct CliError {
    /// User-facing error message (already formatted for display)
    pub message: String,
    /// Exit code to return to the shell
    pub exit_code: ExitCode,
}

impl CliError {
    /// Create a new CLI error with a message and exit code.
    pub fn new(message: impl Into<String>, exit_code: ExitCode) -> Self {
        Self {
            message: message.into(),
            exit_code,
        }
    }

    /// Create a failure error (exit code 1).
    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(message, ExitCode::FAILURE)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

// ============================================================================
// Clap CLI definition
// ============================================================================

/// Scanner and error-recovering parser for the tlang teaching language
#[derive(Parser, Debug)]
#[command(name = "tlang")]
#[command(version = TLANG_VERSION)]
#[command(about = "Scanner and error-recovering parser for the tlang teaching language", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// File to analyze (default action when no subcommand given)
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    #[command(flatten)]
    pub options: ReportOptions,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Scan only: print tokens and lexical diagnostics
    Lex {
        /// Source file to scan
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Scan and parse (same as the default action)
    Parse {
        /// Source file to analyze
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },
}

/// Output format for reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Token table, rendered diagnostics and status line
    Text,
    /// One JSON document
    Json,
}

/// Synchronization policy for syntax errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RecoveryArg {
    /// FOLLOW set of the failing rule only
    Local,
    /// Union of FOLLOW sets of every rule still being parsed
    Enclosing,
}

impl From<RecoveryArg> for RecoveryPolicy {
    fn from(arg: RecoveryArg) -> Self {
        match arg {
            RecoveryArg::Local => RecoveryPolicy::Local,
            RecoveryArg::Enclosing => RecoveryPolicy::Enclosing,
        }
    }
}

/// Flags shared by every command.
#[derive(Args, Debug, Clone)]
pub struct ReportOptions {
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    pub format: OutputFormat,

    /// Error recovery policy
    #[arg(long, value_enum, default_value_t = RecoveryArg::Local, global = true)]
    pub recovery: RecoveryArg,

    /// Longest identifier accepted by the scanner
    #[arg(long = "max-ident-len", value_name = "N", default_value_t = DEFAULT_MAX_IDENTIFIER_LEN, global = true)]
    pub max_ident_len: usize,

    /// Omit the token table
    #[arg(long = "no-tokens", global = true)]
    pub no_tokens: bool,

    /// Print the syntax tree when the program is accepted
    #[arg(long, global = true)]
    pub tree: bool,

    /// Exit with status 2 when the source has diagnostics
    #[arg(long, global = true)]
    pub strict: bool,
}

impl ReportOptions {
    /// Analysis settings selected by the flags.
    pub fn analysis_config(&self) -> AnalysisConfig {
        AnalysisConfig::new()
            .with_max_identifier_len(self.max_ident_len)
            .with_recovery(self.recovery.into())
    }
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            recovery: RecoveryArg::Local,
            max_ident_len: DEFAULT_MAX_IDENTIFIER_LEN,
            no_tokens: false,
            tree: false,
            strict: false,
        }
    }
}

// ============================================================================
// CLI entry point
// ============================================================================

/// Main CLI entry point.
///
/// This is the only place where `process::exit` is called. All command
/// implementations return `CliResult` and errors are handled here.
pub fn run() {
    let cli = Cli::parse();

    match execute(cli) {
        Ok(exit_code) => {
            if exit_code != ExitCode::SUCCESS {
                process::exit(exit_code.0);
            }
        }
        Err(e) => {
            if !e.message.is_empty() {
                eprintln!("{}", e.message);
            }
            process::exit(e.exit_code.0);
        }
    }
}

/// Execute the CLI command and return result.
pub fn execute(cli: Cli) -> CliResult<ExitCode> {
    let options = cli.options;
    match cli.command {
        Some(Command::Lex { file }) => commands::lex_file(&file, &options),
        Some(Command::Parse { file }) => commands::analyze_file(&file, &options),
        None => match cli.file {
            Some(file) => commands::analyze_file(&file, &options),
            None => Err(CliError::failure("Error: no input file given (see `tlang --help`)")),
        },
    }
}

// ============================================================================
// Tests
// ============================================================================
