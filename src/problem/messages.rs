use esquery::language::QueryError;

/// Generate problem and detail messages for query errors
pub fn generate_error_message(error: &QueryError) -> (String, String) {
    match error {
        QueryError::GrammarMismatch(mismatch) => (
            format!("Expected {}", mismatch.expected_text()),
            r#"
The query does not follow Elasticsearch query string syntax at this point.
Check for unbalanced parentheses, brackets or quotes, and for operators
with nothing after them.
            "#
            .trim_ascii()
            .to_string(),
        ),
        QueryError::UnhandledNodeKind { rule, .. } => (
            "Illegal parser state".to_string(),
            format!(
                "Internal error: no transformation for {:?}. This should not have happened! Sorry.",
                rule
            ),
        ),
    }
}
