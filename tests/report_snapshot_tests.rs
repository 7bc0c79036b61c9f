//! Snapshot tests for CLI reports
//!
//! These tests render fixtures through the report functions and compare
//! the output against inline snapshots, so format changes are reviewed and intentional.
//!
//! Review changes: `cargo insta review`

use std::fs;
use std::path::Path;

use tlang::cli::ReportOptions;
use tlang::cli::report::{json_report, token_table};
use tlang::{AnalysisConfig, analyze};

/// Load a fixture from tests/fixtures
fn load_fixture(rel: &str) -> String {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures").join(rel);
    fs::read_to_string(&path).unwrap_or_else(|_| panic!("Failed to read fixture: {}", path.display()))
}

fn plain_listing(rel: &str) -> String {
    let analysis = analyze(&load_fixture(rel), &AnalysisConfig::default());
    let mut lines: Vec<String> = analysis.diagnostics().map(|d| d.to_plain()).collect();
    lines.push(format!("status: {}", analysis.status));
    lines.join("\n")
}

#[test]
fn test_minimal_token_table() {
    let analysis = analyze(&load_fixture("valid/minimal.tl"), &AnalysisConfig::default());
    insta::assert_snapshot!(token_table(&analysis.tokens), @r"
    LINE  CLASS         LEXEME
       1  KEYWORD       Program
       1  KEYWORD       Var
       1  IDENTIFIER    x
       1  DELIMITER     ;
       1  KEYWORD       Start
       1  KEYWORD       Print
       1  DELIMITER     (
       1  IDENTIFIER    x
       1  DELIMITER     )
       1  DELIMITER     ;
       1  KEYWORD       End
       1  IDENTIFIER    end
       2  END_OF_INPUT
    ");
}

#[test]
fn test_missing_semicolon_listing() {
    insta::assert_snapshot!(plain_listing("invalid/missing_semicolon.tl"), @r"
    line 1: syntax error: expected ';', found 'Start' (in variable declarations)
    line 1: syntax error: expected a statement, found 'End' (in statement)
    status: accepted with errors
    ");
}

#[test]
fn test_long_identifier_listing() {
    insta::assert_snapshot!(plain_listing("invalid/long_identifier.tl"), @r"
    line 2: lexical error: identifier 'counter' is longer than 5 characters
    line 4: lexical error: identifier 'counter' is longer than 5 characters
    line 2: syntax error: expected an identifier, found 'counter' (in variable declarations)
    line 4: syntax error: expected an identifier or a number, found 'counter' (in operand)
    status: accepted with errors
    ");
}

#[test]
fn test_truncated_json_report() {
    let analysis = analyze(&load_fixture("invalid/truncated.tl"), &AnalysisConfig::default());
    let options = ReportOptions {
        no_tokens: true,
        ..ReportOptions::default()
    };
    let doc = json_report("truncated.tl", &analysis, &options);
    let rendered = serde_json::to_string_pretty(&doc).unwrap();
    insta::assert_snapshot!(rendered, @r#"
    {
      "diagnostics": [
        {
          "expected": "'Start'",
          "found": "",
          "kind": "tlang::eof",
          "line": 2,
          "message": "unexpected end of input, expected 'Start'"
        }
      ],
      "file": "truncated.tl",
      "status": "aborted"
    }
    "#);
}
