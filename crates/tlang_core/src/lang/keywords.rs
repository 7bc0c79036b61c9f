//! Define the reserved keyword vocabulary for tlang.
//!
//! This module is the single source of truth for reserved words: a stable identifier ([`KeywordId`]) plus a const
//! metadata table ([`KEYWORDS`]) with canonical spellings, categories and descriptions.
//!
//! ## Notes
//! - Lookup via [`from_str`] is **case-sensitive**: `Start` is a keyword, `start` is an identifier.
//! - The lowercase `end` that closes a program is deliberately *not* reserved. It is scanned as an identifier and
//!   matched by spelling in the parser (see [`PROGRAM_TERMINATOR`]).
//!
//! ## Examples
//! ```rust
//! use tlang_core::lang::keywords::{self, KeywordId};
//!
//! assert_eq!(keywords::from_str("Put"), Some(KeywordId::Put));
//! assert_eq!(keywords::as_str(KeywordId::Put), "Put");
//! assert_eq!(keywords::from_str("put"), None);
//! ```

use super::registry::LangItemInfo;

/// Spelling of the terminal that closes a program (`Program … End end`).
pub const PROGRAM_TERMINATOR: &str = "end";

/// Stable identifier for every reserved keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordId {
    // Program structure
    Program,
    Var,
    Start,
    End,

    // Statements
    Print,
    Read,
    If,
    Iteration,
    Put,
}

/// High-level grouping for documentation and token tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordCategory {
    /// Keywords that frame the program: header, declarations, blocks.
    Structure,
    /// Keywords that introduce a statement.
    Statement,
}

/// Metadata for a keyword.
#[derive(Debug, Clone, Copy)]
pub struct KeywordInfo {
    pub item: LangItemInfo<KeywordId>,
    pub category: KeywordCategory,
}

impl KeywordInfo {
    pub const fn id(&self) -> KeywordId {
        self.item.id
    }

    pub const fn canonical(&self) -> &'static str {
        self.item.canonical
    }
}

/// Registry of all reserved keywords.
pub const KEYWORDS: &[KeywordInfo] = &[
    info(
        KeywordId::Program,
        "Program",
        KeywordCategory::Structure,
        "Opens a program; must be the first token.",
    ),
    info(
        KeywordId::Var,
        "Var",
        KeywordCategory::Structure,
        "Declares one variable: `Var x ;`.",
    ),
    info(
        KeywordId::Start,
        "Start",
        KeywordCategory::Structure,
        "Opens a block of statements.",
    ),
    info(KeywordId::End, "End", KeywordCategory::Structure, "Closes a block."),
    info(
        KeywordId::Print,
        "Print",
        KeywordCategory::Statement,
        "Writes the value of an expression: `Print ( x + 1 ) ;`.",
    ),
    info(
        KeywordId::Read,
        "Read",
        KeywordCategory::Statement,
        "Reads a value into a variable: `Read ( x ) ;`.",
    ),
    info(
        KeywordId::If,
        "If",
        KeywordCategory::Statement,
        "Runs one statement when a comparison holds.",
    ),
    info(
        KeywordId::Iteration,
        "Iteration",
        KeywordCategory::Statement,
        "Repeats one statement while a comparison holds.",
    ),
    info(
        KeywordId::Put,
        "Put",
        KeywordCategory::Statement,
        "Assigns an expression to a variable: `Put x = 1 ;`.",
    ),
];

/// Canonical spelling.
pub fn as_str(id: KeywordId) -> &'static str {
    info_for(id).canonical()
}

/// Keyword category.
pub fn category(id: KeywordId) -> KeywordCategory {
    info_for(id).category
}

/// Full metadata.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: KeywordId) -> &'static KeywordInfo {
    KEYWORDS.iter().find(|k| k.id() == id).expect("INVARIANT: every KeywordId has a registry entry")
}

/// Lookup by spelling.
///
/// ## Returns
/// - `Some(KeywordId)` if `s` is exactly one of the reserved spellings.
/// - `None` otherwise (including case variants such as `start`).
pub fn from_str(s: &str) -> Option<KeywordId> {
    KEYWORDS.iter().find(|k| k.canonical() == s).map(|k| k.id())
}

/// Return `true` if the keyword introduces a statement (i.e. it is in FIRST(Statement), together with `Start`).
pub fn starts_statement(id: KeywordId) -> bool {
    matches!(id, KeywordId::Start) || category(id) == KeywordCategory::Statement
}

// --- helpers -----------------------------------------------------------------

const fn info(
    id: KeywordId,
    canonical: &'static str,
    category: KeywordCategory,
    description: &'static str,
) -> KeywordInfo {
    KeywordInfo {
        item: LangItemInfo::new(id, canonical, description),
        category,
    }
}
