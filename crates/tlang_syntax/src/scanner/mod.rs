//! Scanner for the tlang teaching language
//!
//! A single left-to-right pass over the source, driven by a small finite-state machine:
//!
//! - Keywords (`Program`, `Var`, `Start`, `End`, `Print`, `Read`, `If`, `Iteration`, `Put`) and identifiers
//! - Numbers (maximal digit runs)
//! - Operators with maximal munch (`==` is never split into two `=`)
//! - Single-character delimiters
//!
//! Lexical problems never stop the scan: the offending lexeme becomes an `Error` token plus a diagnostic, and the
//! scanner carries on after it.
//!
//! ## Module Structure
//!
//! - `tokens` - Token types (TokenKind, TokenClass, Token)

pub mod tokens;

pub use tokens::{Token, TokenClass, TokenKind, keyword_id};

use crate::ast::Span;
use crate::config::AnalysisConfig;
use crate::diagnostics::{Diagnostic, LexErrorKind};
use tlang_core::lang::{delimiters, operators};

// ============================================================================
// SCANNER STATE
// ----------------------------------------------------------------------------
// State diagram:
//
// [Start] --letter or '_'-------> [InWord]      --non-alphanumeric--> [Start]
// [Start] --digit---------------> [InNumber]    --non-digit---------> [Start]
// [Start] --operator char-------> [InOperator]  --longest match-----> [Start]
// [Start] --delimiter / invalid char (token emitted at once)-------> [Start]
// [Start] --end of input-------------------------------------------> [Done]
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    Start,
    InWord,
    InNumber,
    InOperator,
    Done,
}

/// Tokens plus the lexical diagnostics found while producing them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanOutput {
    /// Always terminated by exactly one `EndOfInput` token.
    pub tokens: Vec<Token>,
    pub diagnostics: Vec<Diagnostic>,
}

impl ScanOutput {
    pub fn into_parts(self) -> (Vec<Token>, Vec<Diagnostic>) {
        (self.tokens, self.diagnostics)
    }
}

/// Scanner for tlang source code.
///
/// The scanner owns a character cursor, the current line number and the start of the lexeme being accumulated.
/// It is consumed by [`Scanner::tokenize`].
pub struct Scanner<'a> {
    source: &'a str,
    chars: std::iter::Peekable<std::str::CharIndices<'a>>,
    current_pos: usize,
    line: usize,
    state: ScanState,
    /// Byte offset where the lexeme being accumulated starts.
    lexeme_start: usize,
    max_identifier_len: usize,
    tokens: Vec<Token>,
    diagnostics: Vec<Diagnostic>,
}

impl<'a> Scanner<'a> {
    /// Create a new scanner for the given source code.
    pub fn new(source: &'a str, config: &AnalysisConfig) -> Self {
        Self {
            source,
            chars: source.char_indices().peekable(),
            current_pos: 0,
            line: 1,
            state: ScanState::Start,
            lexeme_start: 0,
            max_identifier_len: config.max_identifier_len,
            tokens: Vec::new(),
            diagnostics: Vec::new(),
        }
    }

    /// Tokenize the entire source.
    ///
    /// The token vector always ends with an `EndOfInput` token carrying the final line number.
    pub fn tokenize(mut self) -> ScanOutput {
        while self.state != ScanState::Done {
            self.state = match self.state {
                ScanState::Start => self.scan_start(),
                ScanState::InWord => self.scan_word(),
                ScanState::InNumber => self.scan_number(),
                ScanState::InOperator => self.scan_operator(),
                ScanState::Done => ScanState::Done,
            };
        }

        self.tokens.push(Token::end_of_input(self.line, self.current_pos));

        ScanOutput {
            tokens: self.tokens,
            diagnostics: self.diagnostics,
        }
    }

    // ========================================================================
    // Core character handling
    // ========================================================================

    fn peek(&mut self) -> Option<char> {
        self.chars.peek().map(|(_, c)| *c)
    }

    fn advance(&mut self) -> Option<char> {
        if let Some((pos, c)) = self.chars.next() {
            self.current_pos = pos + c.len_utf8();
            Some(c)
        } else {
            None
        }
    }

    fn lexeme(&self) -> &'a str {
        &self.source[self.lexeme_start..self.current_pos]
    }

    fn lexeme_span(&self) -> Span {
        Span::new(self.lexeme_start, self.current_pos)
    }

    fn add_token(&mut self, kind: TokenKind) {
        let token = Token::new(kind, self.lexeme(), self.line, self.lexeme_span());
        tracing::trace!(class = %token.kind.class(), lexeme = %token.lexeme, line = token.line, "token");
        self.tokens.push(token);
    }

    /// Emit an `Error` token for the current lexeme and record the matching diagnostic.
    fn add_error(&mut self, kind: LexErrorKind) {
        let diagnostic = Diagnostic::lexical(
            kind,
            self.lexeme(),
            self.line,
            self.lexeme_span(),
            self.max_identifier_len,
        );
        tracing::debug!(line = self.line, lexeme = %self.lexeme(), reason = kind.as_str(), "lexical error");
        self.diagnostics.push(diagnostic);
        self.add_token(TokenKind::Error(kind));
    }

    // ========================================================================
    // States
    // ========================================================================

    fn scan_start(&mut self) -> ScanState {
        // Whitespace resets to Start; only '\n' moves to the next line.
        while let Some(c) = self.peek() {
            if !c.is_ascii_whitespace() {
                break;
            }
            self.advance();
            if c == '\n' {
                self.line += 1;
            }
        }

        self.lexeme_start = self.current_pos;
        let Some(c) = self.advance() else {
            return ScanState::Done;
        };

        if is_word_start(c) {
            ScanState::InWord
        } else if c.is_ascii_digit() {
            ScanState::InNumber
        } else if operators::is_operator_char(c) {
            ScanState::InOperator
        } else if let Some(id) = delimiters::from_char(c) {
            self.add_token(TokenKind::Delimiter(id));
            ScanState::Start
        } else {
            self.add_error(LexErrorKind::InvalidCharacter);
            ScanState::Start
        }
    }

    fn scan_word(&mut self) -> ScanState {
        while let Some(c) = self.peek() {
            if is_word_continue(c) {
                self.advance();
            } else {
                break;
            }
        }

        let word = self.lexeme();
        if word.starts_with('_') {
            self.add_error(LexErrorKind::InvalidIdentifier);
        } else if let Some(id) = keyword_id(word) {
            self.add_token(TokenKind::Keyword(id));
        } else if word.len() > self.max_identifier_len {
            // Never truncate: the whole candidate is rejected.
            self.add_error(LexErrorKind::IdentifierTooLong);
        } else {
            self.add_token(TokenKind::Identifier);
        }
        ScanState::Start
    }

    fn scan_number(&mut self) -> ScanState {
        while let Some(c) = self.peek() {
            if c.is_ascii_digit() {
                self.advance();
            } else {
                break;
            }
        }
        self.add_token(TokenKind::Number);
        ScanState::Start
    }

    /// Maximal munch: extend while lexeme + next char is still an operator spelling.
    fn scan_operator(&mut self) -> ScanState {
        while let Some(c) = self.peek() {
            let candidate = &self.source[self.lexeme_start..self.current_pos + c.len_utf8()];
            if operators::from_str(candidate).is_some() {
                self.advance();
            } else {
                break;
            }
        }

        match operators::from_str(self.lexeme()) {
            Some(id) => self.add_token(TokenKind::Operator(id)),
            None => self.add_error(LexErrorKind::InvalidCharacter),
        }
        ScanState::Start
    }
}

// ============================================================================
// Helper functions
// ============================================================================

/// Check if a character opens a word (ASCII-only).
fn is_word_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

/// Check if a character continues a word (ASCII-only).
fn is_word_continue(c: char) -> bool {
    c.is_ascii_alphanumeric()
}

/// Scan a source string with the given configuration.
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn scan_with_config(source: &str, config: &AnalysisConfig) -> ScanOutput {
    let output = Scanner::new(source, config).tokenize();
    tracing::debug!(
        tokens = output.tokens.len(),
        errors = output.diagnostics.len(),
        "scan finished"
    );
    output
}

/// Convenience function to scan a source string with the default configuration.
///
/// This is a shorthand for `Scanner::new(source, &AnalysisConfig::default()).tokenize()`.
pub fn scan(source: &str) -> ScanOutput {
    scan_with_config(source, &AnalysisConfig::default())
}

// ============================================================================
// TESTS
// ============================================================================
