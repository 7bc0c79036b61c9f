/// Program structure and statement parsing.
///
/// This chunk parses everything above the expression level:
/// - `Program := "Program" Vars Block "end"`
/// - `Vars := ("Var" IDENTIFIER ";")*`
/// - `Block := "Start" Statements "End"`
/// - `Statements := Statement Statement*`
/// - the six statement forms
impl<'s> Parser<'s> {
    fn program(&mut self) -> Step<Option<Program>> {
        self.nonterminal(NonTerminal::Program, |p| {
            p.expect(Terminal::Keyword(KeywordId::Program))?;
            let vars = p.vars()?;
            let body = p.block()?;
            p.expect(Terminal::ProgramEnd)?;
            Ok(vars.zip(body).map(|(vars, body)| Program { vars, body }))
        })
    }

    /// Zero or more `Var IDENTIFIER ;` triples; epsilon once the lookahead is `Start`.
    fn vars(&mut self) -> Step<Option<Vec<Spanned<Ident>>>> {
        self.nonterminal(NonTerminal::Vars, |p| {
            let mut vars = Vec::new();
            while p.check(Terminal::Keyword(KeywordId::Var)) {
                p.bump();
                let name = p.expect(Terminal::Identifier)?;
                p.expect(Terminal::Delimiter(DelimiterId::Semicolon))?;
                vars.push(Spanned::new(name.lexeme, name.span));
            }

            if p.stream.at_end() || p.at_follow_of(NonTerminal::Vars) {
                Ok(Some(vars))
            } else {
                let expected = one_of(&[
                    Terminal::Keyword(KeywordId::Var).to_string(),
                    Terminal::Keyword(KeywordId::Start).to_string(),
                ]);
                Err(p.fail(expected))
            }
        })
    }

    fn block(&mut self) -> Step<Option<Block>> {
        self.nonterminal(NonTerminal::Block, |p| {
            p.expect(Terminal::Keyword(KeywordId::Start))?;
            let statements = p.statements()?;
            p.expect(Terminal::Keyword(KeywordId::End))?;
            Ok(statements.map(|statements| Block { statements }))
        })
    }

    /// At least one statement, then more while the lookahead can start one.
    fn statements(&mut self) -> Step<Option<Vec<Spanned<Statement>>>> {
        self.nonterminal(NonTerminal::Statements, |p| {
            let mut statements = Vec::new();
            let mut valid = true;
            loop {
                match p.statement()? {
                    Some(statement) => statements.push(statement),
                    None => valid = false,
                }
                if !p.at_statement_start() {
                    break;
                }
            }
            Ok(valid.then_some(statements))
        })
    }

    fn statement(&mut self) -> Step<Option<Spanned<Statement>>> {
        self.nonterminal(NonTerminal::Statement, |p| {
            let start = p.stream.peek().span;
            let statement = match p.stream.peek().keyword_id() {
                Some(KeywordId::Start) => p.block()?.map(Statement::Block),
                Some(KeywordId::If) => p.guarded(NonTerminal::If, KeywordId::If)?.map(Statement::If),
                Some(KeywordId::Iteration) => p
                    .guarded(NonTerminal::Iteration, KeywordId::Iteration)?
                    .map(Statement::Iteration),
                Some(KeywordId::Read) => p.read_statement()?,
                Some(KeywordId::Print) => p.print_statement()?,
                Some(KeywordId::Put) => p.put_statement()?,
                _ => return Err(p.fail("a statement".to_string())),
            };
            Ok(statement.map(|s| Spanned::new(s, p.span_from(start))))
        })
    }

    /// `If` and `Iteration` share one shape: `kw ( Expr Op Expr ) { Statement }`.
    fn guarded(&mut self, nt: NonTerminal, keyword: KeywordId) -> Step<Option<Guarded>> {
        self.nonterminal(nt, |p| {
            p.expect(Terminal::Keyword(keyword))?;
            p.expect(Terminal::Delimiter(DelimiterId::LParen))?;
            let condition = p.condition()?;
            p.expect(Terminal::Delimiter(DelimiterId::RParen))?;
            p.expect(Terminal::Delimiter(DelimiterId::LBrace))?;
            let body = p.statement()?;
            p.expect(Terminal::Delimiter(DelimiterId::RBrace))?;
            Ok(condition.zip(body).map(|(condition, body)| Guarded {
                condition,
                body: Box::new(body),
            }))
        })
    }

    fn read_statement(&mut self) -> Step<Option<Statement>> {
        self.nonterminal(NonTerminal::Read, |p| {
            p.expect(Terminal::Keyword(KeywordId::Read))?;
            p.expect(Terminal::Delimiter(DelimiterId::LParen))?;
            let name = p.expect(Terminal::Identifier)?;
            p.expect(Terminal::Delimiter(DelimiterId::RParen))?;
            p.expect(Terminal::Delimiter(DelimiterId::Semicolon))?;
            Ok(Some(Statement::Read(Spanned::new(name.lexeme, name.span))))
        })
    }

    fn print_statement(&mut self) -> Step<Option<Statement>> {
        self.nonterminal(NonTerminal::Print, |p| {
            p.expect(Terminal::Keyword(KeywordId::Print))?;
            p.expect(Terminal::Delimiter(DelimiterId::LParen))?;
            let value = p.expr()?;
            p.expect(Terminal::Delimiter(DelimiterId::RParen))?;
            p.expect(Terminal::Delimiter(DelimiterId::Semicolon))?;
            Ok(value.map(Statement::Print))
        })
    }

    fn put_statement(&mut self) -> Step<Option<Statement>> {
        self.nonterminal(NonTerminal::Put, |p| {
            p.expect(Terminal::Keyword(KeywordId::Put))?;
            let target = p.expect(Terminal::Identifier)?;
            p.expect(Terminal::Operator(OperatorId::Assign))?;
            let value = p.expr()?;
            p.expect(Terminal::Delimiter(DelimiterId::Semicolon))?;
            Ok(value.map(|value| Statement::Put {
                target: Spanned::new(target.lexeme, target.span),
                value,
            }))
        })
    }
}
