//! Syntax front end for the tlang teaching language: scanner, token stream, parser, diagnostics.
//!
//! The pipeline is strictly one-directional:
//!
//! ```text
//! source text → scanner → TokenStream → parser → (status, diagnostics, optional tree)
//! ```
//!
//! ## Notes
//! - This crate is "syntax-only": no symbol table, no semantic checks, no code generation.
//! - Nothing here aborts on bad input. Lexical and syntax errors are collected as [`diagnostics::Diagnostic`]
//!   values; the parser recovers with FOLLOW-set (panic-mode) synchronization and keeps going.
//! - Vocabulary identity (keywords/operators/delimiters) comes from `tlang_core::lang` registries.
//!
//! ## Examples
//! ```rust
//! use tlang_syntax::{analyze, AnalysisConfig, ParseStatus};
//!
//! let analysis = analyze("Program Var x ; Start Print ( x ) ; End end", &AnalysisConfig::default());
//! assert_eq!(analysis.status, ParseStatus::Accepted);
//! assert!(analysis.diagnostics().next().is_none());
//! ```

pub mod analysis;
pub mod ast;
pub mod config;
pub mod diagnostics;
pub mod parser;
pub mod scanner;
pub mod token_helpers;
pub mod token_stream;

pub use analysis::{Analysis, analyze};
pub use config::{AnalysisConfig, RecoveryPolicy};
pub use diagnostics::{Diagnostic, DiagnosticKind, LexErrorKind};
pub use parser::{ParseOutcome, ParseStatus};
pub use scanner::{ScanOutput, Token, TokenClass, TokenKind};
pub use token_stream::TokenStream;
