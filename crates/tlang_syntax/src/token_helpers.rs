//! Small helper APIs for working with `Token` / `TokenKind`.
//!
//! These helpers exist to reduce repetitive `matches!(...)` at call sites and to make it easy
//! to work with ID-based tokens.

use crate::scanner::{Token, TokenKind};
use tlang_core::lang::delimiters::DelimiterId;
use tlang_core::lang::keywords::{self, KeywordId};
use tlang_core::lang::operators::OperatorId;

impl TokenKind {
    /// Return the keyword id, if this is a keyword token.
    pub fn keyword_id(&self) -> Option<KeywordId> {
        match self {
            TokenKind::Keyword(id) => Some(*id),
            _ => None,
        }
    }

    /// Return `true` if this is the given keyword.
    pub fn is_keyword(&self, id: KeywordId) -> bool {
        matches!(self, TokenKind::Keyword(k) if *k == id)
    }

    /// Return the operator id, if this is an operator token.
    pub fn operator_id(&self) -> Option<OperatorId> {
        match self {
            TokenKind::Operator(id) => Some(*id),
            _ => None,
        }
    }

    /// Return `true` if this is the given operator.
    pub fn is_operator(&self, id: OperatorId) -> bool {
        matches!(self, TokenKind::Operator(o) if *o == id)
    }

    /// Return the delimiter id, if this is a delimiter token.
    pub fn delimiter_id(&self) -> Option<DelimiterId> {
        match self {
            TokenKind::Delimiter(id) => Some(*id),
            _ => None,
        }
    }

    /// Return `true` if this is the given delimiter.
    pub fn is_delimiter(&self, id: DelimiterId) -> bool {
        matches!(self, TokenKind::Delimiter(d) if *d == id)
    }

    pub fn is_end_of_input(&self) -> bool {
        matches!(self, TokenKind::EndOfInput)
    }

    pub fn is_error(&self) -> bool {
        matches!(self, TokenKind::Error(_))
    }
}

impl Token {
    /// Convenience wrapper for `self.kind.keyword_id()`.
    pub fn keyword_id(&self) -> Option<KeywordId> {
        self.kind.keyword_id()
    }

    /// Convenience wrapper for `self.kind.operator_id()`.
    pub fn operator_id(&self) -> Option<OperatorId> {
        self.kind.operator_id()
    }

    /// Convenience wrapper for `self.kind.delimiter_id()`.
    pub fn delimiter_id(&self) -> Option<DelimiterId> {
        self.kind.delimiter_id()
    }

    /// Return `true` for the lowercase identifier that closes a program.
    ///
    /// The terminator is not reserved: the scanner classifies it as an identifier and only its position in the
    /// grammar gives it meaning.
    pub fn is_program_terminator(&self) -> bool {
        self.kind == TokenKind::Identifier && self.lexeme == keywords::PROGRAM_TERMINATOR
    }
}

#[cfg(test)]
mod tests {
    use crate::ast::Span;
    use crate::scanner::{Token, TokenKind};
    use tlang_core::lang::delimiters::DelimiterId;
    use tlang_core::lang::keywords::KeywordId;
    use tlang_core::lang::operators::OperatorId;

    #[test]
    fn test_id_accessors() {
        let kw = TokenKind::Keyword(KeywordId::Put);
        assert_eq!(kw.keyword_id(), Some(KeywordId::Put));
        assert!(kw.is_keyword(KeywordId::Put));
        assert!(!kw.is_keyword(KeywordId::Print));
        assert_eq!(kw.operator_id(), None);

        let op = TokenKind::Operator(OperatorId::EqEq);
        assert!(op.is_operator(OperatorId::EqEq));
        assert!(!op.is_operator(OperatorId::Assign));

        let delim = TokenKind::Delimiter(DelimiterId::Semicolon);
        assert_eq!(delim.delimiter_id(), Some(DelimiterId::Semicolon));
        assert!(!delim.is_end_of_input());
        assert!(TokenKind::EndOfInput.is_end_of_input());
    }

    #[test]
    fn test_program_terminator() {
        let end = Token::new(TokenKind::Identifier, "end", 3, Span::new(0, 3));
        assert!(end.is_program_terminator());

        let other = Token::new(TokenKind::Identifier, "endx", 3, Span::new(0, 4));
        assert!(!other.is_program_terminator());

        let kw = Token::new(TokenKind::Keyword(KeywordId::End), "End", 3, Span::new(0, 3));
        assert!(!kw.is_program_terminator());
    }
}
