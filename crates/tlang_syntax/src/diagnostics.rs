//! Diagnostics produced by the scanner and the parser.
//!
//! Every problem found during analysis becomes one [`Diagnostic`] value. Nothing is thrown: diagnostics are
//! accumulated in arrival order and handed back to the caller, who decides how to render them. The type implements
//! [`miette::Diagnostic`] so the CLI can print it with source context.

use std::fmt;

use miette::{LabeledSpan, Severity};
use thiserror::Error;

use crate::ast::Span;

/// Why the scanner rejected a lexeme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LexErrorKind {
    /// A character outside every token class.
    InvalidCharacter,
    /// An identifier candidate longer than the configured limit.
    IdentifierTooLong,
    /// A word that does not begin with a letter (e.g. `_tmp`).
    InvalidIdentifier,
}

impl LexErrorKind {
    pub fn as_str(self) -> &'static str {
        match self {
            LexErrorKind::InvalidCharacter => "invalid character",
            LexErrorKind::IdentifierTooLong => "identifier too long",
            LexErrorKind::InvalidIdentifier => "invalid identifier",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticKind {
    Lexical(LexErrorKind),
    Syntax,
    UnexpectedEndOfInput,
}

impl DiagnosticKind {
    /// Stable diagnostic code, used by miette and by the JSON output.
    pub fn code(self) -> &'static str {
        match self {
            DiagnosticKind::Lexical(LexErrorKind::InvalidCharacter) => "tlang::lex::invalid_character",
            DiagnosticKind::Lexical(LexErrorKind::IdentifierTooLong) => "tlang::lex::identifier_too_long",
            DiagnosticKind::Lexical(LexErrorKind::InvalidIdentifier) => "tlang::lex::invalid_identifier",
            DiagnosticKind::Syntax => "tlang::syntax",
            DiagnosticKind::UnexpectedEndOfInput => "tlang::eof",
        }
    }

    pub fn is_lexical(self) -> bool {
        matches!(self, DiagnosticKind::Lexical(_))
    }
}

impl fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagnosticKind::Lexical(_) => write!(f, "lexical error"),
            DiagnosticKind::Syntax => write!(f, "syntax error"),
            DiagnosticKind::UnexpectedEndOfInput => write!(f, "unexpected end of input"),
        }
    }
}

/// One lexical or syntax problem, located by line and byte span.
///
/// ## Notes
/// - `expected` describes what the grammar (or the scanner) wanted; `found` is the offending lexeme, empty for the
///   end-of-input token.
/// - `context` names the innermost grammar rule that was being parsed, if any.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub line: usize,
    pub message: String,
    pub expected: String,
    pub found: String,
    pub span: Span,
    pub context: Option<&'static str>,
}

impl Diagnostic {
    /// A lexeme the scanner could not classify.
    pub fn lexical(kind: LexErrorKind, lexeme: &str, line: usize, span: Span, max_identifier_len: usize) -> Self {
        let (message, expected) = match kind {
            LexErrorKind::InvalidCharacter => (
                format!("invalid character '{lexeme}'"),
                "a letter, digit, operator or delimiter".to_string(),
            ),
            LexErrorKind::IdentifierTooLong => (
                format!("identifier '{lexeme}' is longer than {max_identifier_len} characters"),
                format!("an identifier of at most {max_identifier_len} characters"),
            ),
            LexErrorKind::InvalidIdentifier => (
                format!("identifier '{lexeme}' must begin with a letter"),
                "an identifier beginning with a letter".to_string(),
            ),
        };
        Self {
            kind: DiagnosticKind::Lexical(kind),
            line,
            message,
            expected,
            found: lexeme.to_string(),
            span,
            context: None,
        }
    }

    /// A terminal mismatch: the grammar wanted `expected` but the stream held `found`.
    pub fn syntax(
        expected: impl Into<String>,
        found: &str,
        line: usize,
        span: Span,
        context: Option<&'static str>,
    ) -> Self {
        let expected = expected.into();
        Self {
            kind: DiagnosticKind::Syntax,
            line,
            message: format!("expected {expected}, found '{found}'"),
            expected,
            found: found.to_string(),
            span,
            context,
        }
    }

    /// Input ran out while `expected` was still required.
    pub fn unexpected_end(expected: impl Into<String>, line: usize, span: Span, context: Option<&'static str>) -> Self {
        let expected = expected.into();
        Self {
            kind: DiagnosticKind::UnexpectedEndOfInput,
            line,
            message: format!("unexpected end of input, expected {expected}"),
            expected,
            found: String::new(),
            span,
            context,
        }
    }

    /// Human-readable description of the offending lexeme.
    pub fn found_display(&self) -> String {
        if self.kind == DiagnosticKind::UnexpectedEndOfInput {
            "end of input".to_string()
        } else {
            format!("'{}'", self.found)
        }
    }

    /// Single-line rendering: `line 3: syntax error: expected ';', found 'Start'`.
    pub fn to_plain(&self) -> String {
        match self.context {
            Some(rule) => format!("line {}: {}: {} (in {})", self.line, self.kind, self.message, rule),
            None => format!("line {}: {}: {}", self.line, self.kind, self.message),
        }
    }
}

impl miette::Diagnostic for Diagnostic {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new(self.kind.code()))
    }

    fn severity(&self) -> Option<Severity> {
        Some(Severity::Error)
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        self.context
            .map(|rule| Box::new(format!("while parsing {rule}")) as Box<dyn fmt::Display + 'a>)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let label = match self.kind {
            DiagnosticKind::UnexpectedEndOfInput => format!("expected {} here", self.expected),
            _ => format!("found {}", self.found_display()),
        };
        Some(Box::new(std::iter::once(LabeledSpan::new_with_span(
            Some(label),
            (self.span.start, self.span.len()),
        ))))
    }
}
