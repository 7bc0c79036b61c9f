/// Panic-mode error recovery.
///
/// Every non-terminal has a fixed synchronization set: its FOLLOW set, computed once from the grammar. After a
/// mismatch the parser discards tokens until it reaches a member of the active synchronization set, or the end of
/// input. Recovery never consumes the synchronization token itself.
///
/// ## Notes
/// - [`RecoveryPolicy::Local`] synchronizes on FOLLOW of the innermost pending non-terminal only.
/// - [`RecoveryPolicy::Enclosing`] synchronizes on the union of FOLLOW over every pending non-terminal; the
///   innermost non-terminal whose FOLLOW contains the stop token resumes.

const STATEMENT_KEYWORDS: [Terminal; 6] = [
    Terminal::Keyword(KeywordId::Start),
    Terminal::Keyword(KeywordId::If),
    Terminal::Keyword(KeywordId::Read),
    Terminal::Keyword(KeywordId::Print),
    Terminal::Keyword(KeywordId::Put),
    Terminal::Keyword(KeywordId::Iteration),
];

const FOLLOW_PROGRAM: &[Terminal] = &[Terminal::EndOfInput];

const FOLLOW_VARS: &[Terminal] = &[Terminal::Keyword(KeywordId::Start)];

const FOLLOW_BLOCK: &[Terminal] = &[
    Terminal::ProgramEnd,
    STATEMENT_KEYWORDS[0],
    STATEMENT_KEYWORDS[1],
    STATEMENT_KEYWORDS[2],
    STATEMENT_KEYWORDS[3],
    STATEMENT_KEYWORDS[4],
    STATEMENT_KEYWORDS[5],
    Terminal::Keyword(KeywordId::End),
    Terminal::Delimiter(DelimiterId::RBrace),
];

const FOLLOW_STATEMENTS: &[Terminal] = &[Terminal::Keyword(KeywordId::End)];

/// Shared by `Statement` and each statement form.
const FOLLOW_STATEMENT: &[Terminal] = &[
    STATEMENT_KEYWORDS[0],
    STATEMENT_KEYWORDS[1],
    STATEMENT_KEYWORDS[2],
    STATEMENT_KEYWORDS[3],
    STATEMENT_KEYWORDS[4],
    STATEMENT_KEYWORDS[5],
    Terminal::Keyword(KeywordId::End),
    Terminal::Delimiter(DelimiterId::RBrace),
];

const FOLLOW_OP: &[Terminal] = &[Terminal::Identifier, Terminal::Number];

/// Shared by `Expr` and `ExprTail`.
const FOLLOW_EXPR: &[Terminal] = &[
    Terminal::Operator(OperatorId::Lt),
    Terminal::Operator(OperatorId::Gt),
    Terminal::Operator(OperatorId::EqEq),
    Terminal::Delimiter(DelimiterId::RParen),
    Terminal::Delimiter(DelimiterId::Semicolon),
];

const FOLLOW_R: &[Terminal] = &[
    Terminal::Operator(OperatorId::Plus),
    Terminal::Operator(OperatorId::Minus),
    Terminal::Operator(OperatorId::Lt),
    Terminal::Operator(OperatorId::Gt),
    Terminal::Operator(OperatorId::EqEq),
    Terminal::Delimiter(DelimiterId::RParen),
    Terminal::Delimiter(DelimiterId::Semicolon),
];

impl NonTerminal {
    /// The FOLLOW set of this non-terminal.
    pub fn follow(self) -> &'static [Terminal] {
        match self {
            NonTerminal::Program => FOLLOW_PROGRAM,
            NonTerminal::Vars => FOLLOW_VARS,
            NonTerminal::Block => FOLLOW_BLOCK,
            NonTerminal::Statements => FOLLOW_STATEMENTS,
            NonTerminal::Statement
            | NonTerminal::If
            | NonTerminal::Iteration
            | NonTerminal::Read
            | NonTerminal::Print
            | NonTerminal::Put => FOLLOW_STATEMENT,
            NonTerminal::Op => FOLLOW_OP,
            NonTerminal::Expr | NonTerminal::ExprTail => FOLLOW_EXPR,
            NonTerminal::R => FOLLOW_R,
        }
    }

    /// Return `true` if `token` is in FOLLOW of this non-terminal.
    pub fn follows(self, token: &Token) -> bool {
        self.follow().iter().any(|t| t.matches(token))
    }
}

impl<'s> Parser<'s> {
    /// Return `true` if `token` belongs to the synchronization set active under the current policy.
    fn in_sync_set(&self, token: &Token) -> bool {
        match self.recovery {
            RecoveryPolicy::Local => self.pending.last().is_some_and(|nt| nt.follows(token)),
            RecoveryPolicy::Enclosing => self.pending.iter().any(|nt| nt.follows(token)),
        }
    }

    /// Skip tokens until a synchronization token or the end of input.
    ///
    /// Bounded by the number of remaining tokens. Running into the end of input only counts as a synchronization
    /// point when `Program` itself is the innermost pending non-terminal; anywhere deeper the input was cut short, so
    /// an unexpected end of input is recorded and the parse halts.
    fn synchronize(&mut self) -> Halt {
        let from = self.stream.position();
        loop {
            let token = self.stream.peek();
            if token.kind.is_end_of_input() && self.pending.last() != Some(&NonTerminal::Program) {
                tracing::debug!(skipped = self.stream.position() - from, "recovery reached end of input");
                self.record_truncation();
                return Halt::Exhausted;
            }
            if self.in_sync_set(token) {
                tracing::debug!(
                    skipped = self.stream.position() - from,
                    resume_at = %token.lexeme,
                    line = token.line,
                    policy = self.recovery.as_str(),
                    "recovered"
                );
                return Halt::Recovered;
            }
            if token.kind.is_end_of_input() {
                return Halt::Exhausted;
            }
            self.stream.advance();
        }
    }

    /// Record that input ended while the innermost pending non-terminal was still waiting for its FOLLOW set.
    fn record_truncation(&mut self) {
        let Some(nt) = self.pending.last().copied() else {
            return;
        };
        let expected: Vec<String> = nt.follow().iter().map(Terminal::to_string).collect();
        let token = self.stream.peek();
        let diagnostic = Diagnostic::unexpected_end(one_of(&expected), token.line, token.span, Some(nt.describe()));
        self.diagnostics.push(diagnostic);
    }
}
