//! Delimiter vocabulary.
//!
//! Delimiters are always exactly one character, so the scanner emits them straight from its start state without
//! entering a sub-state.
//!
//! ## Examples
//! ```rust
//! use tlang_core::lang::delimiters::{self, DelimiterId};
//!
//! assert_eq!(delimiters::from_char(';'), Some(DelimiterId::Semicolon));
//! assert_eq!(delimiters::as_str(DelimiterId::LBrace), "{");
//! ```

use super::registry::LangItemInfo;

/// Stable identifier for delimiter tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DelimiterId {
    LParen,
    RParen,
    LBrace,
    RBrace,
    Semicolon,
}

/// Metadata for a delimiter token.
pub type DelimiterInfo = LangItemInfo<DelimiterId>;

/// Registry of all delimiters.
pub const DELIMITERS: &[DelimiterInfo] = &[
    LangItemInfo::new(DelimiterId::LParen, "(", "Opens a condition or argument."),
    LangItemInfo::new(DelimiterId::RParen, ")", "Closes a condition or argument."),
    LangItemInfo::new(DelimiterId::LBrace, "{", "Opens the body of `If` / `Iteration`."),
    LangItemInfo::new(DelimiterId::RBrace, "}", "Closes the body of `If` / `Iteration`."),
    LangItemInfo::new(DelimiterId::Semicolon, ";", "Terminates a declaration or simple statement."),
];

/// Return the canonical spelling for a delimiter.
pub fn as_str(id: DelimiterId) -> &'static str {
    info_for(id).canonical
}

/// Return the full metadata entry for a delimiter.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: DelimiterId) -> &'static DelimiterInfo {
    DELIMITERS
        .iter()
        .find(|d| d.id == id)
        .expect("INVARIANT: every DelimiterId has a registry entry")
}

/// Resolve a delimiter spelling to its identifier.
pub fn from_str(s: &str) -> Option<DelimiterId> {
    DELIMITERS.iter().find(|d| d.canonical == s).map(|d| d.id)
}

/// Resolve a single character to a delimiter, if it is one.
pub fn from_char(c: char) -> Option<DelimiterId> {
    let mut buf = [0u8; 4];
    from_str(c.encode_utf8(&mut buf))
}
