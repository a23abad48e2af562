#[cfg(test)]
mod verify {
    use esquery::formatting::{Identity, Style};
    use esquery::highlighting::Grammar;
    use esquery::language::QueryError;
    use esquery::rendering::Html;
    use esquery::{format, highlight, prettify, DEFAULT_WIDTH};

    fn both(query: &str, width: usize) -> (String, String) {
        (
            format(query, width, Style::Compact).unwrap(),
            format(query, width, Style::Indented).unwrap(),
        )
    }

    #[test]
    fn short_queries_stay_on_one_line() {
        assert_eq!(format("a:1 AND b:2", DEFAULT_WIDTH, Style::Compact).unwrap(), "a:1 AND b:2");
        assert_eq!(format("a:1 b:2", DEFAULT_WIDTH, Style::Compact).unwrap(), "a:1 b:2");
        assert_eq!(format("-a:1", DEFAULT_WIDTH, Style::Compact).unwrap(), "-a:1");
        assert_eq!(format("x:[1 TO 5]", DEFAULT_WIDTH, Style::Compact).unwrap(), "x:[1 TO 5]");
    }

    #[test]
    fn whitespace_is_normalized() {
        let (compact, indented) = both("  a:1    AND\n\n  b:2 ", DEFAULT_WIDTH);
        assert_eq!(compact, "a:1 AND b:2");
        assert_eq!(indented, "a:1 AND b:2");

        let (compact, _) = both("( a OR b )   -c:[ 1 TO 5 ]", DEFAULT_WIDTH);
        assert_eq!(compact, "(a OR b) -c:[1 TO 5]");
    }

    #[test]
    fn narrow_range() {
        let (compact, indented) = both("x:[1 TO 5]", 5);

        assert_eq!(compact, "x:[\n   1 TO 5\n   ]");
        assert_eq!(indented, "x:[\n  1 TO 5\n  ]");
    }

    #[test]
    fn sequences_break_every_operator() {
        let (compact, indented) = both("aaaa AND bbbb OR cccc dddd", 10);

        assert_eq!(compact, "aaaa\nAND\nbbbb\nOR\ncccc\ndddd");
        assert_eq!(indented, compact);
    }

    #[test]
    fn parentheses_follow_style() {
        let (compact, indented) = both("x:(aaaa OR bbbb)", 10);

        assert_eq!(compact, "x:(\n   aaaa\n   OR\n   bbbb\n   )");
        assert_eq!(indented, "x:(\n  aaaa\n  OR\n  bbbb\n  )");
    }

    #[test]
    fn inner_groups_stay_flat_when_they_fit() {
        let (compact, _) = both("status:open AND (owner:alice OR owner:bob)", 30);

        assert_eq!(compact, "status:open\nAND\n(owner:alice OR owner:bob)");
    }

    #[test]
    fn negation_keeps_its_space() {
        let (compact, indented) = both("NOT averylongfieldname:value", 10);

        assert_eq!(compact, "NOT\n averylongfieldname:value");
        assert_eq!(indented, "NOT\n  averylongfieldname:value");

        let (compact, _) = both("NOT    a:1", DEFAULT_WIDTH);
        assert_eq!(compact, "NOT a:1");
    }

    #[test]
    fn markers_stay_glued() {
        let (compact, indented) = both("-averylongfieldname:value", 5);

        assert_eq!(compact, "-averylongfieldname:value");
        assert_eq!(indented, "-averylongfieldname:value");
        assert_eq!(format("+a:(b)", 3, Style::Compact).unwrap(), "+a:(\n    b\n    )");
    }

    #[test]
    fn no_blank_lines_between_operators() {
        let query = "(aaaa OR bbbb) AND (cccc OR dddd)";

        for width in 1..query.len() {
            let compact = format(query, width, Style::Compact).unwrap();
            assert!(!compact.contains("\n\n"), "blank line at width {}: {:?}", width, compact);
            assert!(!compact.contains(" \n"), "trailing space at width {}: {:?}", width, compact);
        }
    }

    #[test]
    fn malformed_query_is_an_error() {
        let result = format("a:(b AND", DEFAULT_WIDTH, Style::Compact);

        match result {
            Err(QueryError::GrammarMismatch(mismatch)) => assert_eq!(mismatch.offset, 8),
            other => panic!("Expected a grammar mismatch, got {:?}", other),
        }
    }

    #[test]
    fn prettify_highlights_formatted_text() {
        let result = prettify(
            "a:1   AND b:2",
            DEFAULT_WIDTH,
            Style::Compact,
            &Grammar::default(),
            &Html,
        )
        .unwrap();

        assert_eq!(
            result,
            concat!(
                "a:",
                "<span class=\"token number\">1</span>",
                " ",
                "<span class=\"token operator\">AND</span>",
                " b:",
                "<span class=\"token number\">2</span>"
            )
        );

        let plain = prettify("a:1   AND b:2", DEFAULT_WIDTH, Style::Compact, &Grammar::default(), &Identity).unwrap();
        assert_eq!(plain, "a:1 AND b:2");
    }

    #[test]
    fn highlight_with_keywords() {
        let grammar = Grammar::default()
            .with_keywords(&["status"])
            .unwrap();

        assert_eq!(
            highlight("status:open", &grammar, &Html),
            "<span class=\"token keyword\">status</span>:open"
        );
        assert_eq!(highlight("status:open", &Grammar::default(), &Html), "status:open");
    }
}
