//! Canonical language vocabulary for the tlang front end.
//!
//! This crate is intentionally tiny and dependency-free. It answers one question for the scanner, the parser and
//! any tooling built on top of them: *which spellings belong to the language, and what are they called?*
//!
//! ## Notes
//!
//! - No IO, no global state, no syntax-tree types.
//! - The vocabulary is closed: nine keywords, six operators, five delimiters.
//!
//! ## Examples
//! ```rust
//! use tlang_core::lang::keywords::{self, KeywordId};
//!
//! assert_eq!(keywords::from_str("Iteration"), Some(KeywordId::Iteration));
//! assert_eq!(keywords::from_str("end"), None);
//! ```

pub mod lang;
