//! tlang vocabulary registries.
//!
//! Callers work with **stable IDs** (`KeywordId`, `OperatorId`, `DelimiterId`) and look up spellings and metadata
//! via const registry tables, instead of comparing raw strings all over the front end.
//!
//! ## Notes
//! - Registries are **pure**: no AST types, no IO, no side effects.
//! - The scanner and parser enforce syntax; registries only provide spellings and metadata shared by diagnostics,
//!   token tables and tests.
//!
//! ## Examples
//! ```rust
//! use tlang_core::lang::operators::{self, OperatorId};
//!
//! assert_eq!(operators::from_str("=="), Some(OperatorId::EqEq));
//! assert_eq!(operators::as_str(OperatorId::Lt), "<");
//! ```

pub mod delimiters;
pub mod keywords;
pub mod operators;
pub mod registry;
