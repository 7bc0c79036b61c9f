//! Parser for the tlang teaching language
//!
//! A recursive-descent parser with one procedure per grammar non-terminal. Syntax errors never abort the parse: each
//! mismatch records one diagnostic and then skips tokens until a synchronization token (a FOLLOW-set member) is
//! reached, so a single mistake does not hide the rest of the program.
//!
//! ## Examples
//!
//! ```rust
//! use tlang_syntax::{AnalysisConfig, TokenStream, parser, scanner};
//!
//! let config = AnalysisConfig::default();
//! let scanned = scanner::scan("Program Var x ; Start Print ( x ) ; End end");
//! let mut stream = TokenStream::new(scanned.tokens);
//! let outcome = parser::parse(&mut stream, &config);
//! assert!(outcome.completed);
//! assert!(outcome.diagnostics.is_empty());
//! assert_eq!(outcome.program.map(|p| p.vars.len()), Some(1));
//! ```

use std::fmt;

use crate::ast::*;
use crate::config::{AnalysisConfig, RecoveryPolicy};
use crate::diagnostics::Diagnostic;
use crate::scanner::{Token, TokenKind};
use crate::token_stream::TokenStream;
use tlang_core::lang::delimiters::{self, DelimiterId};
use tlang_core::lang::keywords::{self, KeywordId};
use tlang_core::lang::operators::{self, OperatorId};

// NOTE: one module, several `include!`d chunks. Every grammar procedure sees the private
// helpers of every other chunk.

include!("parser/core.rs");
include!("parser/helpers.rs");
include!("parser/recovery.rs");
include!("parser/stmts.rs");
include!("parser/expr.rs");
include!("parser/api.rs");
include!("parser/tests.rs");
