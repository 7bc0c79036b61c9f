//! Shareable metadata for `tlang_core::lang` registries.
//!
//! The keyword, operator and delimiter registries all describe the same shape of item: a stable id, a canonical
//! spelling and a one-line description. The small types here are reused by all three.
//!
//! ## Notes
//! - These types are `Copy` so registries can live in `const` tables.
//! - Metadata is meant for tooling, token tables and diagnostics; syntax rules live in the scanner/parser.

/// Shared metadata shape for registry items.
///
/// Registries that need extra per-item data (e.g. a keyword's category) wrap this struct in their own info type.
///
/// ## Examples
/// ```rust
/// use tlang_core::lang::delimiters::{self, DelimiterId};
///
/// let info = delimiters::info_for(DelimiterId::Semicolon);
/// assert_eq!(info.id, DelimiterId::Semicolon);
/// assert_eq!(info.canonical, ";");
/// assert!(!info.description.is_empty());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct LangItemInfo<Id> {
    pub id: Id,
    pub canonical: &'static str,
    pub description: &'static str,
}

impl<Id: Copy> LangItemInfo<Id> {
    /// Build a registry entry.
    pub const fn new(id: Id, canonical: &'static str, description: &'static str) -> Self {
        Self {
            id,
            canonical,
            description,
        }
    }
}
