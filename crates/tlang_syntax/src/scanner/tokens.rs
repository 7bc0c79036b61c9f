//! Token types for the tlang scanner.
//!
//! The scanner uses **registry-backed IDs** for language vocabulary:
//! - `Keyword(KeywordId)` for the nine reserved words
//! - `Operator(OperatorId)` for `=`, `<`, `>`, `==`, `+`, `-`
//! - `Delimiter(DelimiterId)` for `( ) { } ;`
//!
//! ## Notes
//! - ID-bearing tokens avoid stringly-typed checks in the parser.
//! - Every token keeps its exact lexeme and the line it starts on; the lexeme of the end-of-input token is empty.
//! - Use `crate::token_helpers` for ergonomic token matching at call sites.

use std::fmt;

use crate::ast::Span;
use crate::diagnostics::LexErrorKind;
use tlang_core::lang::delimiters::DelimiterId;
use tlang_core::lang::keywords::{self, KeywordId};
use tlang_core::lang::operators::OperatorId;

// ============================================================================
// TOKEN TYPES
// ============================================================================

/// Kind of token produced by the scanner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    // ========== Keyword / operator / delimiter (ID-based) ==========
    Keyword(KeywordId),
    Operator(OperatorId),
    Delimiter(DelimiterId),

    // ========== Identifiers and Literals ==========
    Identifier,
    Number,

    // ========== Special ==========
    Error(LexErrorKind),
    EndOfInput,
}

/// The seven coarse token classes shown in token tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenClass {
    Keyword,
    Identifier,
    Number,
    Operator,
    Delimiter,
    Error,
    EndOfInput,
}

impl TokenClass {
    pub fn as_str(self) -> &'static str {
        match self {
            TokenClass::Keyword => "KEYWORD",
            TokenClass::Identifier => "IDENTIFIER",
            TokenClass::Number => "NUMBER",
            TokenClass::Operator => "OPERATOR",
            TokenClass::Delimiter => "DELIMITER",
            TokenClass::Error => "ERROR",
            TokenClass::EndOfInput => "END_OF_INPUT",
        }
    }
}

impl fmt::Display for TokenClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TokenKind {
    /// Project the kind onto its coarse class.
    pub fn class(&self) -> TokenClass {
        match self {
            TokenKind::Keyword(_) => TokenClass::Keyword,
            TokenKind::Operator(_) => TokenClass::Operator,
            TokenKind::Delimiter(_) => TokenClass::Delimiter,
            TokenKind::Identifier => TokenClass::Identifier,
            TokenKind::Number => TokenClass::Number,
            TokenKind::Error(_) => TokenClass::Error,
            TokenKind::EndOfInput => TokenClass::EndOfInput,
        }
    }
}

/// A token with its kind, exact lexeme, starting line and source span.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
    pub line: usize,
    pub span: Span,
}

impl Token {
    /// Construct a new token.
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, line: usize, span: Span) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            line,
            span,
        }
    }

    /// Construct the end-of-input token at byte offset `at`.
    pub fn end_of_input(line: usize, at: usize) -> Self {
        Self::new(TokenKind::EndOfInput, String::new(), line, Span::new(at, at))
    }
}

/// Resolve a word spelling to a keyword id, if reserved.
pub fn keyword_id(word: &str) -> Option<KeywordId> {
    keywords::from_str(word)
}
