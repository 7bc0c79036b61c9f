/// Token-stream helpers and mismatch reporting.
///
/// This chunk contains the low-level primitives used throughout parsing:
/// - Lookahead (`check`, `at_statement_start`)
/// - Consuming tokens (`bump`, `expect`)
/// - Reporting a mismatch (`fail`)
/// - The per-non-terminal wrapper (`nonterminal`) that keeps the pending stack in sync
impl<'s> Parser<'s> {
    // ========================================================================
    // Lookahead
    // ========================================================================

    /// Return `true` if the current token matches `terminal`.
    fn check(&self, terminal: Terminal) -> bool {
        terminal.matches(self.stream.peek())
    }

    /// Return `true` if the current token can begin a statement.
    fn at_statement_start(&self) -> bool {
        self.stream.peek().keyword_id().is_some_and(keywords::starts_statement)
    }

    /// Return `true` if the current token may follow `nt`, which is how nullable rules pick epsilon.
    fn at_follow_of(&self, nt: NonTerminal) -> bool {
        nt.follows(self.stream.peek())
    }

    // ========================================================================
    // Consuming
    // ========================================================================

    /// Consume the current token unconditionally.
    fn bump(&mut self) -> Token {
        let token = self.stream.advance().clone();
        tracing::trace!(line = token.line, "match({})", token.lexeme);
        self.last_span = token.span;
        token
    }

    /// Consume the current token if it matches `terminal`, otherwise report a mismatch and recover.
    fn expect(&mut self, terminal: Terminal) -> Step<Token> {
        if self.check(terminal) {
            Ok(self.bump())
        } else {
            Err(self.fail(terminal.to_string()))
        }
    }

    /// Span from `start` up to the last consumed token.
    fn span_from(&self, start: Span) -> Span {
        start.merge(self.last_span)
    }

    // ========================================================================
    // Errors
    // ========================================================================

    /// Record one diagnostic for the current token and start recovery.
    ///
    /// A mismatch on the end-of-input token is an unexpected end of input: it is recorded as such and halts the
    /// parse without attempting recovery.
    fn fail(&mut self, expected: String) -> Halt {
        let context = self.pending.last().map(|nt| nt.describe());
        let token = self.stream.peek();

        if token.kind.is_end_of_input() {
            let diagnostic = Diagnostic::unexpected_end(expected, token.line, token.span, context);
            tracing::debug!(line = diagnostic.line, expected = %diagnostic.expected, "unexpected end of input");
            self.diagnostics.push(diagnostic);
            return Halt::Exhausted;
        }

        let diagnostic = Diagnostic::syntax(expected, &token.lexeme, token.line, token.span, context);
        self.diagnostics.push(diagnostic);
        self.synchronize()
    }

    // ========================================================================
    // Non-terminal bookkeeping
    // ========================================================================

    /// Run the procedure for `nt` with `nt` pushed on the pending stack.
    ///
    /// A recovery that stopped on a token in FOLLOW(`nt`) ends here as a partial match (`Ok(None)`); any other halt
    /// propagates to the caller.
    fn nonterminal<T>(&mut self, nt: NonTerminal, parse: impl FnOnce(&mut Self) -> Step<Option<T>>) -> Step<Option<T>> {
        self.pending.push(nt);
        let result = parse(self);
        self.pending.pop();

        match result {
            Err(Halt::Recovered) if self.at_follow_of(nt) => {
                tracing::trace!(rule = nt.describe(), "resumed after recovery");
                Ok(None)
            }
            other => other,
        }
    }
}

/// Join alternatives as `a, b or c`.
fn one_of(items: &[String]) -> String {
    match items {
        [] => String::new(),
        [only] => only.clone(),
        [init @ .., last] => format!("{} or {}", init.join(", "), last),
    }
}
