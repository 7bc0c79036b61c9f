/// Expression parsing.
///
/// Grammar:
/// - `Expr := R ExprTail`
/// - `ExprTail := ("+" | "-") R ExprTail | ε`
/// - `R := IDENTIFIER | NUMBER`
/// - `Op := "<" | ">" | "=="`
///
/// `ExprTail` is right-recursive in the grammar but the tree is built left-associative: `a - b + c` is
/// `(a - b) + c`. The tail is therefore parsed as a loop that folds into the running left operand.
impl<'s> Parser<'s> {
    /// `Expr Op Expr`, the condition of `If` and `Iteration`.
    fn condition(&mut self) -> Step<Option<Condition>> {
        let lhs = self.expr()?;
        let op = self.rel_op()?;
        let rhs = self.expr()?;
        Ok(match (lhs, op, rhs) {
            (Some(lhs), Some(op), Some(rhs)) => Some(Condition { lhs, op, rhs }),
            _ => None,
        })
    }

    fn rel_op(&mut self) -> Step<Option<RelOp>> {
        self.nonterminal(NonTerminal::Op, |p| {
            match p.stream.peek().operator_id().and_then(RelOp::from_operator) {
                Some(op) => {
                    p.bump();
                    Ok(Some(op))
                }
                None => {
                    let expected: Vec<String> = [OperatorId::Lt, OperatorId::Gt, OperatorId::EqEq]
                        .into_iter()
                        .map(|id| Terminal::Operator(id).to_string())
                        .collect();
                    Err(p.fail(one_of(&expected)))
                }
            }
        })
    }

    fn expr(&mut self) -> Step<Option<Expr>> {
        self.nonterminal(NonTerminal::Expr, |p| {
            let first = p.operand()?.map(Expr::Value);
            p.expr_tail(first)
        })
    }

    fn expr_tail(&mut self, lhs: Option<Expr>) -> Step<Option<Expr>> {
        self.nonterminal(NonTerminal::ExprTail, |p| {
            let mut acc = lhs;
            while let Some(op) = p.stream.peek().operator_id().and_then(AddOp::from_operator) {
                p.bump();
                let rhs = p.operand()?;
                acc = acc.zip(rhs).map(|(lhs, rhs)| Expr::BinaryOp {
                    op,
                    lhs: Box::new(lhs),
                    rhs: Box::new(Expr::Value(rhs)),
                });
            }

            if p.stream.at_end() || p.at_follow_of(NonTerminal::ExprTail) {
                Ok(acc)
            } else {
                let expected = one_of(&[
                    Terminal::Operator(OperatorId::Plus).to_string(),
                    Terminal::Operator(OperatorId::Minus).to_string(),
                    "end of expression".to_string(),
                ]);
                Err(p.fail(expected))
            }
        })
    }

    /// The `R` rule.
    fn operand(&mut self) -> Step<Option<Spanned<Value>>> {
        self.nonterminal(NonTerminal::R, |p| match p.stream.peek().kind {
            TokenKind::Identifier => {
                let token = p.bump();
                Ok(Some(Spanned::new(Value::Ident(token.lexeme), token.span)))
            }
            TokenKind::Number => {
                let token = p.bump();
                Ok(Some(Spanned::new(Value::Number(token.lexeme), token.span)))
            }
            _ => {
                let expected = one_of(&[Terminal::Identifier.to_string(), Terminal::Number.to_string()]);
                Err(p.fail(expected))
            }
        })
    }
}
