#![forbid(unsafe_code)]
//! tlang: scanner and error-recovering parser for a small imperative teaching language
//!
//! This crate provides the command-line front end and re-exports the library crates:
//! - [`lang`]: canonical vocabulary registries (keywords, operators, delimiters)
//! - [`syntax`]: scanner, token stream, parser, diagnostics and syntax tree
//!
//! ## Panic Policy
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli` module enforces
//!   `#![deny(clippy::unwrap_used)]`.
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.
//! - **True invariants**: If a panic represents a bug (logic error), use `.expect("INVARIANT: reason")` with a clear
//!   explanation.

pub mod cli;
pub mod version;

pub use tlang_core::lang;
pub use tlang_syntax as syntax;

pub use tlang_syntax::{
    Analysis, AnalysisConfig, Diagnostic, DiagnosticKind, ParseStatus, RecoveryPolicy, Token, TokenKind, analyze,
};
