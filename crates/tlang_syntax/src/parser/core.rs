/// Parser core types and entrypoint.
///
/// This chunk defines the [`Parser`] type, the grammar vocabulary it works with ([`Terminal`], [`NonTerminal`]) and
/// the control-flow encoding shared by every procedure ([`Halt`], [`Step`]).
///
/// ## Notes
/// - `include!`'d into `crate::parser`.

/// Why a grammar procedure stopped before finishing its production.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Halt {
    /// A mismatch was reported and the stream now sits on a synchronization token. The innermost pending
    /// non-terminal whose FOLLOW set contains that token resumes from there.
    Recovered,
    /// Input ran out. Nothing up the call chain attempts another match.
    Exhausted,
}

/// Result of a grammar procedure.
///
/// `Ok(Some(node))` is a structurally valid match, `Ok(None)` a partial match after recovery.
type Step<T> = Result<T, Halt>;

/// A grammar terminal, i.e. something a single token can match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Terminal {
    Keyword(KeywordId),
    /// The lowercase identifier that closes a program.
    ProgramEnd,
    Identifier,
    Number,
    Operator(OperatorId),
    Delimiter(DelimiterId),
    EndOfInput,
}

impl Terminal {
    /// Return `true` if `token` is an instance of this terminal.
    pub fn matches(self, token: &Token) -> bool {
        match self {
            Terminal::Keyword(id) => token.kind.is_keyword(id),
            Terminal::ProgramEnd => token.is_program_terminator(),
            Terminal::Identifier => token.kind == TokenKind::Identifier,
            Terminal::Number => token.kind == TokenKind::Number,
            Terminal::Operator(id) => token.kind.is_operator(id),
            Terminal::Delimiter(id) => token.kind.is_delimiter(id),
            Terminal::EndOfInput => token.kind.is_end_of_input(),
        }
    }
}

impl fmt::Display for Terminal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Terminal::Keyword(id) => write!(f, "'{}'", keywords::as_str(*id)),
            Terminal::ProgramEnd => write!(f, "'{}'", keywords::PROGRAM_TERMINATOR),
            Terminal::Identifier => f.write_str("an identifier"),
            Terminal::Number => f.write_str("a number"),
            Terminal::Operator(id) => write!(f, "'{}'", operators::as_str(*id)),
            Terminal::Delimiter(id) => write!(f, "'{}'", delimiters::as_str(*id)),
            Terminal::EndOfInput => f.write_str("end of input"),
        }
    }
}

/// Grammar non-terminals, one per parser procedure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NonTerminal {
    Program,
    Vars,
    Block,
    Statements,
    Statement,
    If,
    Iteration,
    Read,
    Print,
    Put,
    Op,
    Expr,
    ExprTail,
    R,
}

impl NonTerminal {
    pub const ALL: [NonTerminal; 14] = [
        NonTerminal::Program,
        NonTerminal::Vars,
        NonTerminal::Block,
        NonTerminal::Statements,
        NonTerminal::Statement,
        NonTerminal::If,
        NonTerminal::Iteration,
        NonTerminal::Read,
        NonTerminal::Print,
        NonTerminal::Put,
        NonTerminal::Op,
        NonTerminal::Expr,
        NonTerminal::ExprTail,
        NonTerminal::R,
    ];

    /// Human-readable rule name used as diagnostic context.
    pub fn describe(self) -> &'static str {
        match self {
            NonTerminal::Program => "program",
            NonTerminal::Vars => "variable declarations",
            NonTerminal::Block => "block",
            NonTerminal::Statements => "statement list",
            NonTerminal::Statement => "statement",
            NonTerminal::If => "If statement",
            NonTerminal::Iteration => "Iteration statement",
            NonTerminal::Read => "Read statement",
            NonTerminal::Print => "Print statement",
            NonTerminal::Put => "Put statement",
            NonTerminal::Op => "relational operator",
            NonTerminal::Expr => "expression",
            NonTerminal::ExprTail => "expression tail",
            NonTerminal::R => "operand",
        }
    }
}

/// Parser state.
///
/// ## Notes
/// - The parser owns the cursor of one token stream for the duration of a parse session.
/// - `pending` mirrors the call stack of grammar procedures; it is empty before and after a parse.
pub struct Parser<'s> {
    stream: &'s mut TokenStream,
    recovery: RecoveryPolicy,
    pending: Vec<NonTerminal>,
    diagnostics: Vec<Diagnostic>,
    /// Span of the most recently consumed token.
    last_span: Span,
}

impl<'s> Parser<'s> {
    /// Create a new parser over `stream`.
    pub fn new(stream: &'s mut TokenStream, config: &AnalysisConfig) -> Self {
        Self {
            stream,
            recovery: config.recovery,
            pending: Vec::new(),
            diagnostics: Vec::new(),
            last_span: Span::default(),
        }
    }

    /// Parse a whole program.
    ///
    /// The parse is `completed` unless input ran out before `Program` could finish. A syntax tree is only returned
    /// when no diagnostic was recorded.
    pub fn parse(mut self) -> ParseOutcome {
        let program = self.program();
        debug_assert!(self.pending.is_empty(), "pending non-terminals left after parse");

        let (program, completed) = match program {
            Ok(program) => {
                self.expect_end_of_input();
                (program, true)
            }
            Err(halt) => {
                // Every recovered stop token is in FOLLOW of some pending non-terminal, which resumes before `Program`
                // returns.
                debug_assert_eq!(halt, Halt::Exhausted, "recovery escaped the program rule");
                (None, false)
            }
        };

        let program = if self.diagnostics.is_empty() { program } else { None };
        ParseOutcome {
            program,
            diagnostics: self.diagnostics,
            completed,
        }
    }

    /// Report tokens left over after the closing terminator.
    fn expect_end_of_input(&mut self) {
        let token = self.stream.peek();
        if token.kind.is_end_of_input() {
            return;
        }
        let diagnostic = Diagnostic::syntax(Terminal::EndOfInput.to_string(), &token.lexeme, token.line, token.span, None);
        tracing::debug!(line = token.line, found = %token.lexeme, "tokens after program terminator");
        self.diagnostics.push(diagnostic);
    }
}
