#[cfg(test)]
mod verify {
    use esquery::language::*;
    use esquery::parse;

    fn field<'i>(name: &'i str, value: AstNode<'i>) -> AstNode<'i> {
        AstNode::FieldCondition {
            name,
            value: Box::new(value),
        }
    }

    fn term(raw: &str) -> AstNode<'_> {
        AstNode::Terminal(raw)
    }

    fn mark(op: Mark, value: AstNode<'_>) -> AstNode<'_> {
        AstNode::Marking {
            op,
            value: Box::new(value),
        }
    }

    #[test]
    fn explicit_operator() {
        assert_eq!(
            parse("a:1 AND b:2").unwrap(),
            AstNode::Sequence(vec![
                field("a", term("1")),
                AstNode::BoolOperator(Operator::And),
                field("b", term("2")),
            ])
        );
    }

    #[test]
    fn implicit_operator() {
        assert_eq!(
            parse("a:1 b:2").unwrap(),
            AstNode::Sequence(vec![
                field("a", term("1")),
                AstNode::BoolOperator(Operator::ImplicitOr),
                field("b", term("2")),
            ])
        );
    }

    #[test]
    fn simple_negation() {
        assert_eq!(parse("-a:1").unwrap(), mark(Mark::Minus, field("a", term("1"))));
        assert_eq!(parse("+a:1").unwrap(), mark(Mark::Plus, field("a", term("1"))));
        assert_eq!(parse("NOT a:1").unwrap(), mark(Mark::Not, field("a", term("1"))));
    }

    #[test]
    fn range_bounds_are_raw_text() {
        assert_eq!(
            parse("x:[1 TO 5]").unwrap(),
            field(
                "x",
                AstNode::RangeCondition {
                    opening: Opening::Inclusive,
                    from: "1",
                    to: "5",
                    closing: Closing::Inclusive,
                }
            )
        );
        assert_eq!(
            parse("date:{* TO now-1d}").unwrap(),
            field(
                "date",
                AstNode::RangeCondition {
                    opening: Opening::Exclusive,
                    from: "*",
                    to: "now-1d",
                    closing: Closing::Exclusive,
                }
            )
        );
    }

    #[test]
    fn order_survives_the_split_list() {
        let query = parse("(a OR b) AND NOT c:/x.*/ +d:>=3 e:\"f g\"").unwrap();

        assert_eq!(
            query,
            AstNode::Sequence(vec![
                AstNode::Parented(Box::new(AstNode::Sequence(vec![
                    term("a"),
                    AstNode::BoolOperator(Operator::Or),
                    term("b"),
                ]))),
                AstNode::BoolOperator(Operator::And),
                mark(Mark::Not, field("c", AstNode::RegexCondition("x.*"))),
                AstNode::BoolOperator(Operator::ImplicitOr),
                mark(
                    Mark::Plus,
                    field(
                        "d",
                        AstNode::SimpleRangeCondition {
                            operand: Comparison::GreaterEqual,
                            value: Box::new(term("3")),
                        }
                    )
                ),
                AstNode::BoolOperator(Operator::ImplicitOr),
                field("e", term("\"f g\"")),
            ])
        );
    }

    #[test]
    fn trailing_keyword_is_a_term() {
        assert_eq!(
            parse("a AND").unwrap(),
            AstNode::Sequence(vec![
                term("a"),
                AstNode::BoolOperator(Operator::ImplicitOr),
                term("AND"),
            ])
        );
    }

    #[test]
    fn names_are_verbatim() {
        assert_eq!(
            parse("first\\ name:\"Jo\"").unwrap(),
            field("first\\ name", term("\"Jo\""))
        );
        assert_eq!(parse("名前:値").unwrap(), field("名前", term("値")));
    }

    #[test]
    fn whitespace_is_not_retained() {
        let spaced = parse("  ( a   OR\n\tb )  ").unwrap();
        let tight = parse("(a OR b)").unwrap();

        assert_eq!(spaced, tight);
    }
}
