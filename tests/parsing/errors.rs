#[cfg(test)]
mod syntax {
    use esquery::language::{Expected, GrammarMismatch, QueryError};
    use esquery::parse;

    /// Helper function to check that parsing fails, handing back the
    /// mismatch for further inspection
    fn expect_mismatch(content: &str) -> GrammarMismatch {
        match parse(content) {
            Ok(query) => panic!(
                "Expected parsing to fail, but it succeeded for input '{}': {:?}",
                content, query
            ),
            Err(QueryError::GrammarMismatch(mismatch)) => mismatch,
            Err(other) => panic!("Expected a grammar mismatch but got: {:?}", other),
        }
    }

    #[test]
    fn unclosed_parenthesis_fails_at_end() {
        let content = "a:(b AND";
        let mismatch = expect_mismatch(content);

        assert_eq!(mismatch.offset, content.len());
        assert!(mismatch
            .expected
            .contains(&Expected::Literal(")")));
        assert!(mismatch
            .expected_text()
            .contains("\")\""));
    }

    #[test]
    fn stray_closing_parenthesis() {
        let mismatch = expect_mismatch("a:1 )");

        assert_eq!(mismatch.offset, 4);
        assert!(mismatch
            .expected
            .contains(&Expected::Described("end of input")));
    }

    #[test]
    fn range_needs_space_after_to() {
        let mismatch = expect_mismatch("x:[1 TO]");

        assert_eq!(mismatch.offset, 7);
        assert_eq!(mismatch.expected, vec![Expected::Described("whitespace")]);
    }

    #[test]
    fn empty_query() {
        let mismatch = expect_mismatch("");
        assert_eq!(mismatch.offset, 0);

        let mismatch = expect_mismatch("   ");
        assert_eq!(mismatch.offset, 3);
    }

    #[test]
    fn messages_locate_the_failure() {
        let mismatch = expect_mismatch("a:1\nAND b:(2");

        assert!(mismatch
            .short_message
            .starts_with("Line 2, col 9: expected "));
        assert!(mismatch
            .message
            .contains("> 2 | AND b:(2"));
    }

    #[test]
    fn error_displays_short_message() {
        let error = parse("a:(b AND").unwrap_err();

        assert_eq!(error.offset(), 8);
        assert!(error
            .to_string()
            .starts_with("Line 1, col 9: expected "));
    }
}
