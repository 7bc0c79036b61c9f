/// Final status of a parse session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseStatus {
    /// Reached the end of the program with no diagnostics.
    Accepted,
    /// Reached the end of the program, but diagnostics were recorded on the way.
    AcceptedWithErrors,
    /// Input ran out before the program could be completed.
    Aborted,
}

impl ParseStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            ParseStatus::Accepted => "accepted",
            ParseStatus::AcceptedWithErrors => "accepted with errors",
            ParseStatus::Aborted => "aborted",
        }
    }

    /// Combine completion with the total number of diagnostics (lexical and syntax).
    pub fn from_parts(completed: bool, diagnostic_count: usize) -> Self {
        match (completed, diagnostic_count) {
            (false, _) => ParseStatus::Aborted,
            (true, 0) => ParseStatus::Accepted,
            (true, _) => ParseStatus::AcceptedWithErrors,
        }
    }
}

impl fmt::Display for ParseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What a parse session produced.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseOutcome {
    /// Present only when the parse recorded no diagnostic.
    pub program: Option<Program>,
    /// Syntax and unexpected-end-of-input diagnostics, in arrival order.
    pub diagnostics: Vec<Diagnostic>,
    /// `false` when input was exhausted before `Program` finished.
    pub completed: bool,
}

impl ParseOutcome {
    /// Status based on this parse's own diagnostics.
    pub fn status(&self) -> ParseStatus {
        ParseStatus::from_parts(self.completed, self.diagnostics.len())
    }
}

/// Parse a token stream into a [`Program`].
///
/// This is the main public entrypoint for parsing. The stream cursor is left where the parse stopped.
///
/// ## Parameters
/// - `stream`: Tokens produced by `tlang_syntax::scanner`.
/// - `config`: Only `config.recovery` is consulted.
#[tracing::instrument(skip_all, fields(token_count = stream.tokens().len(), recovery = config.recovery.as_str()))]
pub fn parse(stream: &mut TokenStream, config: &AnalysisConfig) -> ParseOutcome {
    let outcome = Parser::new(stream, config).parse();
    tracing::debug!(
        completed = outcome.completed,
        errors = outcome.diagnostics.len(),
        "parse finished"
    );
    outcome
}
