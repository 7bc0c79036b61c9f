//! CLI command implementations
//!
//! All command functions return `CliResult<ExitCode>` instead of calling
//! `process::exit`. Error handling and exits happen in the top-level `run()`.

use std::fs;
use std::path::Path;

use miette::GraphicalReportHandler;
use tlang_syntax::{ParseStatus, analyze, scanner};

use super::report;
use super::{CliError, CliResult, ExitCode, OutputFormat, ReportOptions};

/// Largest source file the CLI will read.
pub const MAX_SOURCE_SIZE: u64 = 16 * 1024 * 1024;

/// Read a source file, with a size check.
///
/// Returns an error if:
/// - The file cannot be read (I/O error)
/// - The file exceeds `MAX_SOURCE_SIZE` (16 MiB)
/// - The file is not valid UTF-8
pub fn read_source(path: &Path) -> CliResult<String> {
    let metadata = fs::metadata(path)
        .map_err(|e| CliError::failure(format!("Cannot access file '{}': {}", path.display(), e)))?;

    if metadata.len() > MAX_SOURCE_SIZE {
        return Err(CliError::failure(format!(
            "Source file '{}' is too large ({} bytes, max {} bytes)",
            path.display(),
            metadata.len(),
            MAX_SOURCE_SIZE
        )));
    }

    fs::read_to_string(path).map_err(|e| CliError::failure(format!("Error reading file '{}': {}", path.display(), e)))
}

/// Exit code for a finished run.
fn exit_code_for(has_diagnostics: bool, options: &ReportOptions) -> ExitCode {
    if options.strict && has_diagnostics {
        ExitCode::DIAGNOSTICS
    } else {
        ExitCode::SUCCESS
    }
}

/// Scan a file and print its tokens and lexical diagnostics.
#[tracing::instrument(skip_all, fields(path = %path.display()))]
pub fn lex_file(path: &Path, options: &ReportOptions) -> CliResult<ExitCode> {
    let source = read_source(path)?;
    let config = options.analysis_config();
    let (tokens, diagnostics) = scanner::scan_with_config(&source, &config).into_parts();
    let name = path.display().to_string();

    match options.format {
        OutputFormat::Text => {
            let handler = GraphicalReportHandler::new();
            println!(
                "{}",
                report::lex_text_report(&handler, &name, &source, &tokens, &diagnostics, options)
            );
        }
        OutputFormat::Json => {
            println!("{}", report::lex_json_report(&name, &tokens, &diagnostics, options));
        }
    }

    Ok(exit_code_for(!diagnostics.is_empty(), options))
}

/// Scan and parse a file, then print the report.
///
/// An aborted parse (input ran out before the program was complete) exits with status 1 after the report is
/// printed.
#[tracing::instrument(skip_all, fields(path = %path.display()))]
pub fn analyze_file(path: &Path, options: &ReportOptions) -> CliResult<ExitCode> {
    let source = read_source(path)?;
    let analysis = analyze(&source, &options.analysis_config());
    let name = path.display().to_string();

    match options.format {
        OutputFormat::Text => {
            let handler = GraphicalReportHandler::new();
            println!("{}", report::text_report(&handler, &name, &source, &analysis, options));
        }
        OutputFormat::Json => {
            println!("{}", report::json_report(&name, &analysis, options));
        }
    }

    tracing::info!(status = analysis.status.as_str(), diagnostics = analysis.diagnostic_count(), "analysis finished");

    if analysis.status == ParseStatus::Aborted {
        return Ok(ExitCode::FAILURE);
    }
    Ok(exit_code_for(analysis.has_diagnostics(), options))
}
