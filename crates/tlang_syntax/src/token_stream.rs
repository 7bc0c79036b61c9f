//! Cursor over a scanned token sequence.
//!
//! The stream is the only way the parser observes tokens. Once the cursor reaches the end-of-input token it stays
//! there: `advance` keeps returning it and never moves past it.

use crate::scanner::{Token, TokenKind};

/// A forward-only cursor over tokens.
#[derive(Debug, Clone)]
pub struct TokenStream {
    tokens: Vec<Token>,
    cursor: usize,
}

impl TokenStream {
    /// Wrap a token sequence.
    ///
    /// A sequence that does not end with `EndOfInput` (hand-built in tests, say) gets one appended after its last
    /// token, so the stream always has a sentinel to stop on.
    pub fn new(mut tokens: Vec<Token>) -> Self {
        if !tokens.last().is_some_and(|t| t.kind.is_end_of_input()) {
            let (line, at) = tokens.last().map(|t| (t.line, t.span.end)).unwrap_or((1, 0));
            tokens.push(Token::end_of_input(line, at));
        }
        Self { tokens, cursor: 0 }
    }

    /// Return the current token without consuming it.
    pub fn peek(&self) -> &Token {
        &self.tokens[self.cursor]
    }

    /// Consume the current token and return it.
    ///
    /// At the end of input this returns the end-of-input token without moving.
    pub fn advance(&mut self) -> &Token {
        let current = self.cursor;
        if self.tokens[current].kind != TokenKind::EndOfInput {
            self.cursor += 1;
        }
        &self.tokens[current]
    }

    /// Return `true` once the cursor sits on the end-of-input token.
    pub fn at_end(&self) -> bool {
        self.peek().kind.is_end_of_input()
    }

    /// Index of the current token.
    pub fn position(&self) -> usize {
        self.cursor
    }

    /// Tokens not yet consumed, including the end-of-input token.
    pub fn remaining(&self) -> &[Token] {
        &self.tokens[self.cursor..]
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn into_tokens(self) -> Vec<Token> {
        self.tokens
    }
}

impl From<Vec<Token>> for TokenStream {
    fn from(tokens: Vec<Token>) -> Self {
        Self::new(tokens)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scanner::scan;

    #[test]
    fn test_peek_does_not_consume() {
        let stream = TokenStream::new(scan("Program x").tokens);
        assert_eq!(stream.peek().lexeme, "Program");
        assert_eq!(stream.peek().lexeme, "Program");
        assert_eq!(stream.position(), 0);
    }

    #[test]
    fn test_advance_walks_tokens() {
        let mut stream = TokenStream::new(scan("Program x").tokens);
        assert_eq!(stream.advance().lexeme, "Program");
        assert_eq!(stream.advance().lexeme, "x");
        assert!(stream.at_end());
        assert_eq!(stream.remaining().len(), 1);
    }

    #[test]
    fn test_advance_sticks_at_end_of_input() {
        let mut stream = TokenStream::new(scan("").tokens);
        for _ in 0..3 {
            assert_eq!(stream.advance().kind, TokenKind::EndOfInput);
        }
        assert_eq!(stream.position(), 0);
    }

    #[test]
    fn test_missing_sentinel_is_appended() {
        let mut tokens = scan("x y").tokens;
        tokens.pop();
        let stream = TokenStream::new(tokens);
        assert_eq!(stream.tokens().len(), 3);
        let last = stream.tokens().last().map(|t| t.kind);
        assert_eq!(last, Some(TokenKind::EndOfInput));

        let empty = TokenStream::new(Vec::new());
        assert!(empty.at_end());
    }
}
