//! Report rendering for the CLI.
//!
//! Everything here is a pure function from analysis results to a `String` or a `serde_json::Value`, so the output
//! format can be tested without running the binary.

use miette::{GraphicalReportHandler, NamedSource, Report};
use serde_json::{Value, json};
use tlang_syntax::{Analysis, Diagnostic, Token};

use super::ReportOptions;

/// Token table with one row per token: line, class, lexeme.
pub fn token_table(tokens: &[Token]) -> String {
    let mut lines = vec![format!("{:>4}  {:<12}  {}", "LINE", "CLASS", "LEXEME")];
    for token in tokens {
        let row = format!("{:>4}  {:<12}  {}", token.line, token.kind.class().as_str(), token.lexeme);
        lines.push(row.trim_end().to_string());
    }
    lines.join("\n")
}

/// Render one diagnostic with source context.
///
/// Falls back to the single-line form if the graphical handler fails.
pub fn render_diagnostic(handler: &GraphicalReportHandler, path: &str, source: &str, diagnostic: &Diagnostic) -> String {
    let report = Report::new(diagnostic.clone()).with_source_code(NamedSource::new(path, source.to_string()));
    let mut out = String::new();
    match handler.render_report(&mut out, &*report) {
        Ok(()) => out.trim_end().to_string(),
        Err(_) => diagnostic.to_plain(),
    }
}

fn render_diagnostics<'a>(
    handler: &GraphicalReportHandler,
    path: &str,
    source: &str,
    diagnostics: impl Iterator<Item = &'a Diagnostic>,
) -> Vec<String> {
    diagnostics
        .map(|d| render_diagnostic(handler, path, source, d))
        .collect()
}

fn count_label(n: usize) -> String {
    if n == 1 {
        "1 diagnostic".to_string()
    } else {
        format!("{n} diagnostics")
    }
}

/// Final status line, e.g. `status: accepted with errors (2 diagnostics)`.
pub fn status_line(analysis: &Analysis) -> String {
    format!("status: {} ({})", analysis.status, count_label(analysis.diagnostic_count()))
}

/// Full text report for a scan-and-parse run.
pub fn text_report(
    handler: &GraphicalReportHandler,
    path: &str,
    source: &str,
    analysis: &Analysis,
    options: &ReportOptions,
) -> String {
    let mut sections = Vec::new();
    if !options.no_tokens {
        sections.push(token_table(&analysis.tokens));
    }
    sections.extend(render_diagnostics(handler, path, source, analysis.diagnostics()));
    if options.tree {
        if let Some(program) = &analysis.program {
            sections.push(format!("{program:#?}"));
        }
    }
    sections.push(status_line(analysis));
    sections.join("\n\n")
}

/// Text report for a scan-only run.
pub fn lex_text_report(
    handler: &GraphicalReportHandler,
    path: &str,
    source: &str,
    tokens: &[Token],
    diagnostics: &[Diagnostic],
    options: &ReportOptions,
) -> String {
    let mut sections = Vec::new();
    if !options.no_tokens {
        sections.push(token_table(tokens));
    }
    sections.extend(render_diagnostics(handler, path, source, diagnostics.iter()));
    sections.push(format!("scanned {} tokens ({})", tokens.len(), count_label(diagnostics.len())));
    sections.join("\n\n")
}

fn tokens_json(tokens: &[Token]) -> Value {
    tokens
        .iter()
        .map(|t| {
            json!({
                "kind": t.kind.class().as_str(),
                "lexeme": t.lexeme,
                "line": t.line,
            })
        })
        .collect()
}

fn diagnostics_json<'a>(diagnostics: impl Iterator<Item = &'a Diagnostic>) -> Value {
    diagnostics
        .map(|d| {
            json!({
                "kind": d.kind.code(),
                "line": d.line,
                "expected": d.expected,
                "found": d.found,
                "message": d.message,
            })
        })
        .collect()
}

/// JSON document for a scan-and-parse run.
pub fn json_report(path: &str, analysis: &Analysis, options: &ReportOptions) -> Value {
    let mut doc = json!({
        "file": path,
        "status": analysis.status.as_str(),
        "diagnostics": diagnostics_json(analysis.diagnostics()),
    });
    if !options.no_tokens {
        doc["tokens"] = tokens_json(&analysis.tokens);
    }
    doc
}

/// JSON document for a scan-only run.
pub fn lex_json_report(path: &str, tokens: &[Token], diagnostics: &[Diagnostic], options: &ReportOptions) -> Value {
    let mut doc = json!({
        "file": path,
        "status": "scanned",
        "diagnostics": diagnostics_json(diagnostics.iter()),
    });
    if !options.no_tokens {
        doc["tokens"] = tokens_json(tokens);
    }
    doc
}
