//! Operator vocabulary.
//!
//! This module defines the closed operator set: assignment `=`, the relational operators `<`, `>`, `==` and the
//! additive operators `+`, `-`.
//!
//! ## Notes
//! - Lookup via [`from_str`] is exact; there are no aliases.
//! - [`OPERATOR_ALPHABET`] is the set of characters that may start or continue an operator. The scanner uses it to
//!   enter its operator state, and [`from_str`] to decide how far maximal munch may extend.
//!
//! ## Examples
//! ```rust
//! use tlang_core::lang::operators::{self, OperatorCategory, OperatorId};
//!
//! assert_eq!(operators::from_str("="), Some(OperatorId::Assign));
//! assert_eq!(operators::from_str("=="), Some(OperatorId::EqEq));
//! assert_eq!(operators::from_str("<="), None);
//! assert_eq!(operators::category(OperatorId::Gt), OperatorCategory::Relational);
//! ```

use super::registry::LangItemInfo;

/// Characters that can appear in an operator spelling.
pub const OPERATOR_ALPHABET: &[char] = &['+', '-', '=', '<', '>'];

/// Stable identifier for every operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperatorId {
    // Assignment
    Assign,

    // Relational
    Lt,
    Gt,
    EqEq,

    // Additive
    Plus,
    Minus,
}

/// Syntactic role of an operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperatorCategory {
    /// `=` in `Put x = …`.
    Assignment,
    /// The `Op` rule: `<`, `>`, `==`.
    Relational,
    /// The `ExprTail` rule: `+`, `-`.
    Additive,
}

/// Metadata for an operator.
#[derive(Debug, Clone, Copy)]
pub struct OperatorInfo {
    pub item: LangItemInfo<OperatorId>,
    pub category: OperatorCategory,
}

impl OperatorInfo {
    pub const fn id(&self) -> OperatorId {
        self.item.id
    }

    pub const fn canonical(&self) -> &'static str {
        self.item.canonical
    }
}

/// Registry of all operators.
pub const OPERATORS: &[OperatorInfo] = &[
    info(OperatorId::Assign, "=", OperatorCategory::Assignment, "Assignment."),
    info(OperatorId::Lt, "<", OperatorCategory::Relational, "Less than."),
    info(OperatorId::Gt, ">", OperatorCategory::Relational, "Greater than."),
    info(OperatorId::EqEq, "==", OperatorCategory::Relational, "Equality."),
    info(OperatorId::Plus, "+", OperatorCategory::Additive, "Addition."),
    info(OperatorId::Minus, "-", OperatorCategory::Additive, "Subtraction."),
];

/// Canonical spelling.
pub fn as_str(id: OperatorId) -> &'static str {
    info_for(id).canonical()
}

/// Operator category.
pub fn category(id: OperatorId) -> OperatorCategory {
    info_for(id).category
}

/// Full metadata.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: OperatorId) -> &'static OperatorInfo {
    OPERATORS.iter().find(|o| o.id() == id).expect("INVARIANT: every OperatorId has a registry entry")
}

/// Lookup by exact spelling.
pub fn from_str(s: &str) -> Option<OperatorId> {
    OPERATORS.iter().find(|o| o.canonical() == s).map(|o| o.id())
}

/// Return `true` if `c` belongs to [`OPERATOR_ALPHABET`].
pub fn is_operator_char(c: char) -> bool {
    OPERATOR_ALPHABET.contains(&c)
}

const fn info(
    id: OperatorId,
    canonical: &'static str,
    category: OperatorCategory,
    description: &'static str,
) -> OperatorInfo {
    OperatorInfo {
        item: LangItemInfo::new(id, canonical, description),
        category,
    }
}
