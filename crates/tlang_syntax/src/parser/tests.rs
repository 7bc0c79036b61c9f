#[cfg(test)]
/// Parser unit tests.
///
/// These tests focus on the accepted language and on how panic-mode recovery bounds the cascade of diagnostics after
/// a mistake.
mod tests {
    use super::*;
    use crate::diagnostics::DiagnosticKind;
    use crate::scanner::scan_with_config;

    fn parse_with(source: &str, config: &AnalysisConfig) -> ParseOutcome {
        let scanned = scan_with_config(source, config);
        let mut stream = TokenStream::new(scanned.tokens);
        parse(&mut stream, config)
    }

    fn parse_str(source: &str) -> ParseOutcome {
        parse_with(source, &AnalysisConfig::default())
    }

    fn messages(outcome: &ParseOutcome) -> Vec<&str> {
        outcome.diagnostics.iter().map(|d| d.message.as_str()).collect()
    }

    fn only_statement(program: &Program) -> &Statement {
        assert_eq!(program.body.statements.len(), 1);
        &program.body.statements[0].node
    }

    #[test]
    fn test_minimal_program_accepted() {
        let outcome = parse_str("Program Var x ; Start Print ( x ) ; End end");
        assert!(outcome.completed);
        assert!(outcome.diagnostics.is_empty(), "{:?}", messages(&outcome));
        assert_eq!(outcome.status(), ParseStatus::Accepted);

        let program = outcome.program.expect("accepted program has a tree");
        assert_eq!(program.vars.len(), 1);
        assert_eq!(program.vars[0].node, "x");
        match only_statement(&program) {
            Statement::Print(expr) => assert_eq!(expr.to_string(), "x"),
            other => panic!("Expected Print, got {other:?}"),
        }
    }

    #[test]
    fn test_program_without_vars() {
        let outcome = parse_str("Program Start Read ( y ) ; End end");
        assert_eq!(outcome.status(), ParseStatus::Accepted);
        let program = outcome.program.expect("tree");
        assert!(program.vars.is_empty());
        assert!(matches!(only_statement(&program), Statement::Read(name) if name.node == "y"));
    }

    #[test]
    fn test_every_statement_form() {
        let source = "Program\n\
                      Var a ;\n\
                      Var b ;\n\
                      Start\n\
                      Read ( a ) ;\n\
                      Put b = a + 1 ;\n\
                      If ( a < b ) { Print ( a ) ; }\n\
                      Iteration ( b > 0 ) { Start Put b = b - 1 ; Print ( b ) ; End }\n\
                      Start Print ( 7 ) ; End\n\
                      End\n\
                      end";
        let outcome = parse_str(source);
        assert!(outcome.diagnostics.is_empty(), "{:?}", messages(&outcome));

        let program = outcome.program.expect("tree");
        let kinds: Vec<&str> = program
            .body
            .statements
            .iter()
            .map(|s| match &s.node {
                Statement::Block(_) => "block",
                Statement::If(_) => "if",
                Statement::Iteration(_) => "iteration",
                Statement::Read(_) => "read",
                Statement::Print(_) => "print",
                Statement::Put { .. } => "put",
            })
            .collect();
        assert_eq!(kinds, vec!["read", "put", "if", "iteration", "block"]);

        match &program.body.statements[3].node {
            Statement::Iteration(guarded) => {
                assert_eq!(guarded.condition.to_string(), "b > 0");
                match &guarded.body.node {
                    Statement::Block(block) => assert_eq!(block.statements.len(), 2),
                    other => panic!("Expected block body, got {other:?}"),
                }
            }
            other => panic!("Expected Iteration, got {other:?}"),
        }
    }

    #[test]
    fn test_additive_chain_is_left_associative() {
        let outcome = parse_str("Program Start Print ( a + 1 - b ) ; End end");
        let program = outcome.program.expect("tree");
        match only_statement(&program) {
            Statement::Print(expr) => assert_eq!(expr.to_string(), "((a + 1) - b)"),
            other => panic!("Expected Print, got {other:?}"),
        }
    }

    #[test]
    fn test_equality_condition() {
        let outcome = parse_str("Program Start If ( x == 10 ) { Read ( x ) ; } End end");
        let program = outcome.program.expect("tree");
        match only_statement(&program) {
            Statement::If(guarded) => assert_eq!(guarded.condition.op, RelOp::Eq),
            other => panic!("Expected If, got {other:?}"),
        }
    }

    #[test]
    fn test_statement_spans_cover_source() {
        let source = "Program Start Put x = 1 ; End end";
        let outcome = parse_str(source);
        let program = outcome.program.expect("tree");
        let span = program.body.statements[0].span;
        assert_eq!(&source[span.start..span.end], "Put x = 1 ;");
    }

    #[test]
    fn test_missing_semicolon_in_vars_recovers_at_start() {
        let outcome = parse_str("Program Var x Start End end");
        assert!(outcome.completed);
        assert!(outcome.program.is_none());

        let semicolon: Vec<_> = outcome.diagnostics.iter().filter(|d| d.message.contains("';'")).collect();
        assert_eq!(semicolon.len(), 1, "{:?}", messages(&outcome));

        let first = &outcome.diagnostics[0];
        assert_eq!(first.kind, DiagnosticKind::Syntax);
        assert_eq!(first.expected, "';'");
        assert_eq!(first.found, "Start");
        assert_eq!(first.line, 1);
        assert_eq!(first.context, Some("variable declarations"));

        // The empty block is reported separately, after recovery resumed at `Start`.
        assert_eq!(outcome.diagnostics.len(), 2);
        assert_eq!(outcome.diagnostics[1].expected, "a statement");
        assert_eq!(outcome.diagnostics[1].found, "End");
        assert_eq!(outcome.status(), ParseStatus::AcceptedWithErrors);
    }

    #[test]
    fn test_unexpected_end_of_input() {
        let outcome = parse_str("Program Var x ;");
        assert!(!outcome.completed);
        assert_eq!(outcome.status(), ParseStatus::Aborted);
        assert_eq!(outcome.diagnostics.len(), 1);
        let d = &outcome.diagnostics[0];
        assert_eq!(d.kind, DiagnosticKind::UnexpectedEndOfInput);
        assert_eq!(d.expected, "'Start'");
        assert_eq!(d.message, "unexpected end of input, expected 'Start'");
    }

    #[test]
    fn test_missing_program_terminator() {
        let outcome = parse_str("Program Start Read ( x ) ; End");
        assert_eq!(outcome.status(), ParseStatus::Aborted);
        assert_eq!(outcome.diagnostics.len(), 1);
        assert_eq!(outcome.diagnostics[0].kind, DiagnosticKind::UnexpectedEndOfInput);
        assert_eq!(outcome.diagnostics[0].expected, "'end'");
    }

    #[test]
    fn test_empty_input_is_unexpected_end() {
        let outcome = parse_str("");
        assert_eq!(outcome.status(), ParseStatus::Aborted);
        assert_eq!(outcome.diagnostics[0].expected, "'Program'");
    }

    #[test]
    fn test_tokens_after_terminator() {
        let outcome = parse_str("Program Start Read ( x ) ; End end x ;");
        assert!(outcome.completed);
        assert_eq!(messages(&outcome), vec!["expected end of input, found 'x'"]);
        assert_eq!(outcome.diagnostics[0].context, None);
        assert!(outcome.program.is_none());
    }

    #[test]
    fn test_bad_operand_recovers_inside_expression() {
        let outcome = parse_str("Program Start Put x = ; Print ( y ) ; End end");
        assert!(outcome.completed);
        assert_eq!(messages(&outcome), vec!["expected an identifier or a number, found ';'"]);
        assert_eq!(outcome.diagnostics[0].context, Some("operand"));
    }

    #[test]
    fn test_assignment_in_condition_is_rejected_by_expression_tail() {
        // `=` is not in FOLLOW(ExprTail), so the mistake surfaces before `Op` is attempted.
        let outcome = parse_str("Program Start If ( x = 1 ) { Print ( x ) ; } End end");
        assert!(outcome.completed);
        assert_eq!(outcome.diagnostics[0].message, "expected '+', '-' or end of expression, found '='");
        assert_eq!(outcome.diagnostics[1].message, "expected '<', '>' or '==', found ')'");
    }

    #[test]
    fn test_missing_relational_operator() {
        let outcome = parse_str("Program Start Iteration ( x ; 1 ) { Print ( x ) ; } End end");
        assert_eq!(outcome.diagnostics[0].message, "expected '<', '>' or '==', found ';'");
        assert_eq!(outcome.diagnostics[0].context, Some("relational operator"));
    }

    #[test]
    fn test_unexpected_token_in_expression_tail() {
        let outcome = parse_str("Program Start Print ( x y ) ; End end");
        assert_eq!(
            messages(&outcome),
            vec!["expected '+', '-' or end of expression, found 'y'"]
        );
        assert_eq!(outcome.status(), ParseStatus::AcceptedWithErrors);
    }

    #[test]
    fn test_unexpected_token_before_block() {
        let outcome = parse_str("Program x Start Print ( 1 ) ; End end");
        assert_eq!(messages(&outcome), vec!["expected 'Var' or 'Start', found 'x'"]);
        assert!(outcome.completed);
    }

    #[test]
    fn test_recovery_that_never_synchronizes_aborts() {
        // No `Start` follows, so recovery inside the declarations runs off the end of input.
        let outcome = parse_str("Program Var x Print ( x ) ;");
        assert!(!outcome.completed);
        assert_eq!(outcome.status(), ParseStatus::Aborted);
        let kinds: Vec<_> = outcome.diagnostics.iter().map(|d| d.kind).collect();
        assert_eq!(kinds, vec![DiagnosticKind::Syntax, DiagnosticKind::UnexpectedEndOfInput]);

        let eoi = &outcome.diagnostics[1];
        assert_eq!(eoi.message, "unexpected end of input, expected 'Start'");
        assert_eq!(eoi.context, Some("variable declarations"));
        assert_eq!(eoi.found, "");
    }

    #[test]
    fn test_truncated_input_aborts_under_both_policies() {
        for source in ["Program Var x Print ( x ) ;", "Program Start Print ( x @"] {
            for policy in [RecoveryPolicy::Local, RecoveryPolicy::Enclosing] {
                let outcome = parse_with(source, &AnalysisConfig::new().with_recovery(policy));
                assert!(!outcome.completed, "{source} under {policy:?}");
                assert_eq!(outcome.status(), ParseStatus::Aborted, "{source} under {policy:?}");
                assert!(outcome.program.is_none());

                let last = outcome.diagnostics.last().expect("diagnostics recorded");
                assert_eq!(last.kind, DiagnosticKind::UnexpectedEndOfInput, "{:?}", messages(&outcome));
                assert_eq!(outcome.diagnostics[0].kind, DiagnosticKind::Syntax);
            }
        }
    }

    #[test]
    fn test_truncation_inside_expression_names_follow_set() {
        let outcome = parse_str("Program Start Print ( x @");
        assert_eq!(
            messages(&outcome),
            vec![
                "expected '+', '-' or end of expression, found '@'",
                "unexpected end of input, expected '<', '>', '==', ')' or ';'",
            ]
        );
        assert_eq!(outcome.diagnostics[1].context, Some("expression tail"));
    }

    #[test]
    fn test_program_level_recovery_still_completes() {
        // `Program` itself synchronizes on end of input, so this is a completed parse with errors.
        let outcome = parse_with(
            "Var x ; Start Print ( x ) ; End end",
            &AnalysisConfig::new().with_recovery(RecoveryPolicy::Enclosing),
        );
        assert!(outcome.completed);
        assert_eq!(outcome.status(), ParseStatus::AcceptedWithErrors);
        assert_eq!(messages(&outcome), vec!["expected 'Program', found 'Var'"]);
    }

    #[test]
    fn test_missing_program_keyword_skips_to_end() {
        let outcome = parse_str("Var x ; Start Print ( x ) ; End end");
        assert!(outcome.completed);
        assert_eq!(messages(&outcome), vec!["expected 'Program', found 'Var'"]);
    }

    #[test]
    fn test_error_token_is_reported_as_mismatch() {
        let outcome = parse_str("Program Var x@ ; Start Print ( x ) ; End end");
        assert!(outcome.completed);
        assert_eq!(messages(&outcome), vec!["expected ';', found '@'"]);
    }

    #[test]
    fn test_diagnostic_lines_follow_source() {
        let outcome = parse_str("Program\nStart\nPrint ( x ) \nEnd\nend");
        assert_eq!(outcome.diagnostics.len(), 1);
        assert_eq!(outcome.diagnostics[0].line, 4);
        assert_eq!(outcome.diagnostics[0].found, "End");
        assert_eq!(outcome.diagnostics[0].context, Some("Print statement"));
    }

    #[test]
    fn test_enclosing_policy_resynchronizes_earlier() {
        let source = "Program Start If ( x < 1 { Print ( x ) ; } End end";

        let local = parse_with(source, &AnalysisConfig::default());
        let enclosing = parse_with(source, &AnalysisConfig::new().with_recovery(RecoveryPolicy::Enclosing));

        assert!(local.completed);
        assert!(enclosing.completed);
        assert_eq!(local.diagnostics[0], enclosing.diagnostics[0]);
        assert_eq!(local.diagnostics.len(), 4, "{:?}", messages(&local));
        assert_eq!(enclosing.diagnostics.len(), 3, "{:?}", messages(&enclosing));
        assert_eq!(enclosing.diagnostics[1].expected, "'End'");
        assert_eq!(enclosing.diagnostics[1].found, "}");
    }

    #[test]
    fn test_parse_is_deterministic() {
        let source = "Program Var x Start If ( ; Print ( x ) ; End end";
        assert_eq!(parse_str(source), parse_str(source));
    }

    #[test]
    fn test_follow_sets() {
        for nt in NonTerminal::ALL {
            assert!(!nt.follow().is_empty(), "{nt:?} has an empty FOLLOW set");
        }
        assert_eq!(NonTerminal::Program.follow(), &[Terminal::EndOfInput]);
        assert_eq!(NonTerminal::Vars.follow(), &[Terminal::Keyword(KeywordId::Start)]);
        assert!(NonTerminal::Block.follow().contains(&Terminal::ProgramEnd));
        assert!(!NonTerminal::Statement.follow().contains(&Terminal::ProgramEnd));
        assert_eq!(NonTerminal::If.follow(), NonTerminal::Statement.follow());
        assert_eq!(NonTerminal::Expr.follow(), NonTerminal::ExprTail.follow());
        assert!(NonTerminal::R.follow().contains(&Terminal::Operator(OperatorId::Plus)));
        assert!(!NonTerminal::Expr.follow().contains(&Terminal::Operator(OperatorId::Plus)));
    }

    #[test]
    fn test_one_of() {
        assert_eq!(one_of(&["'a'".to_string()]), "'a'");
        assert_eq!(one_of(&["'a'".to_string(), "'b'".to_string()]), "'a' or 'b'");
        assert_eq!(
            one_of(&["'a'".to_string(), "'b'".to_string(), "'c'".to_string()]),
            "'a', 'b' or 'c'"
        );
    }

    #[test]
    fn test_status_labels() {
        assert_eq!(ParseStatus::from_parts(true, 0), ParseStatus::Accepted);
        assert_eq!(ParseStatus::from_parts(true, 2), ParseStatus::AcceptedWithErrors);
        assert_eq!(ParseStatus::from_parts(false, 0), ParseStatus::Aborted);
        assert_eq!(ParseStatus::AcceptedWithErrors.to_string(), "accepted with errors");
    }
}
