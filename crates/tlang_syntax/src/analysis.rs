//! Scan-then-parse driver.
//!
//! [`analyze`] runs both front-end stages over one source text and bundles everything a caller needs to report on
//! it. Each call owns its own token stream and diagnostic lists, so independent analyses can run on separate threads.

use crate::ast::Program;
use crate::config::AnalysisConfig;
use crate::diagnostics::Diagnostic;
use crate::parser::{self, ParseStatus};
use crate::scanner::{self, Token};
use crate::token_stream::TokenStream;

/// Result of analyzing one source text.
#[derive(Debug, Clone, PartialEq)]
pub struct Analysis {
    pub tokens: Vec<Token>,
    /// Diagnostics from the scanner.
    pub lexical: Vec<Diagnostic>,
    /// Diagnostics from the parser.
    pub syntax: Vec<Diagnostic>,
    /// Present only when both lists are empty.
    pub program: Option<Program>,
    pub status: ParseStatus,
}

impl Analysis {
    /// All diagnostics: lexical first, then syntax, each in arrival order.
    pub fn diagnostics(&self) -> impl Iterator<Item = &Diagnostic> {
        self.lexical.iter().chain(self.syntax.iter())
    }

    pub fn diagnostic_count(&self) -> usize {
        self.lexical.len() + self.syntax.len()
    }

    pub fn has_diagnostics(&self) -> bool {
        self.diagnostic_count() > 0
    }
}

/// Scan and parse `source`.
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn analyze(source: &str, config: &AnalysisConfig) -> Analysis {
    let (tokens, lexical) = scanner::scan_with_config(source, config).into_parts();

    let mut stream = TokenStream::new(tokens);
    let outcome = parser::parse(&mut stream, config);

    let status = ParseStatus::from_parts(outcome.completed, lexical.len() + outcome.diagnostics.len());
    let program = if lexical.is_empty() { outcome.program } else { None };

    Analysis {
        tokens: stream.into_tokens(),
        lexical,
        syntax: outcome.diagnostics,
        program,
        status,
    }
}
