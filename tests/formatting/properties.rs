//! Property-based tests for query formatting
//!
//! Queries are generated from a small recursive grammar of field
//! conditions, ranges, regexes, phrases, negation markers, parentheses
//! and operators. Field names and values are lower case so they never
//! collide with the upper case operator keywords.

use esquery::formatting::Style;
use esquery::format;
use proptest::prelude::*;

fn word_strategy() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9]{0,7}"
}

fn condition_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        word_strategy(),
        (word_strategy(), word_strategy()).prop_map(|(f, v)| format!("{}:{}", f, v)),
        (word_strategy(), word_strategy(), word_strategy())
            .prop_map(|(f, a, b)| format!("{}:[{} TO {}}}", f, a, b)),
        (word_strategy(), word_strategy()).prop_map(|(f, v)| format!("{}:>={}", f, v)),
        (word_strategy(), word_strategy()).prop_map(|(f, v)| format!("{}:/{}.*/", f, v)),
        (word_strategy(), word_strategy(), word_strategy())
            .prop_map(|(f, a, b)| format!("{}:\"{} {}\"", f, a, b)),
    ]
}

fn separator_strategy() -> impl Strategy<Value = &'static str> {
    prop_oneof![
        Just(" "),
        Just("   "),
        Just("\n"),
        Just(" AND "),
        Just(" OR "),
        Just(" NOT "),
        Just("\tAND\n  "),
    ]
}

fn marker_strategy() -> impl Strategy<Value = &'static str> {
    prop_oneof![Just("-"), Just("+"), Just("NOT "), Just("NOT\n")]
}

fn query_strategy() -> impl Strategy<Value = String> {
    condition_strategy().prop_recursive(4, 32, 4, |inner| {
        prop_oneof![
            (
                inner.clone(),
                prop::collection::vec((separator_strategy(), inner.clone()), 1..4)
            )
                .prop_map(|(first, rest)| {
                    let mut query = first;
                    for (separator, condition) in rest {
                        query.push_str(separator);
                        query.push_str(&condition);
                    }
                    query
                }),
            inner
                .clone()
                .prop_map(|query| format!("( {} )", query)),
            (word_strategy(), inner.clone()).prop_map(|(f, query)| format!("{}:({})", f, query)),
            (marker_strategy(), inner).prop_map(|(marker, query)| format!("{}{}", marker, query)),
        ]
    })
}

fn style_strategy() -> impl Strategy<Value = Style> {
    prop_oneof![Just(Style::Compact), Just(Style::Indented)]
}

fn without_whitespace(text: &str) -> String {
    text.chars()
        .filter(|c| !c.is_whitespace())
        .collect()
}

#[cfg(test)]
mod proptest_tests {
    use super::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        #[test]
        fn generated_queries_parse(query in query_strategy()) {
            let result = esquery::parse(&query);
            prop_assert!(result.is_ok(), "Failed to parse: {:?}", query);
        }

        #[test]
        fn formatting_is_idempotent(
            query in query_strategy(),
            width in 1usize..120,
            style in style_strategy()
        ) {
            let once = format(&query, width, style).unwrap();
            let twice = format(&once, width, style).unwrap();
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn formatting_is_deterministic(
            query in query_strategy(),
            width in 1usize..120,
            style in style_strategy()
        ) {
            let first = format(&query, width, style).unwrap();
            let second = format(&query, width, style).unwrap();
            prop_assert_eq!(first, second);
        }

        #[test]
        fn source_order_is_preserved(
            query in query_strategy(),
            width in 1usize..120,
            style in style_strategy()
        ) {
            let formatted = format(&query, width, style).unwrap();
            prop_assert_eq!(without_whitespace(&formatted), without_whitespace(&query));
        }

        #[test]
        fn fitting_queries_are_not_broken(
            query in query_strategy(),
            width in 1usize..120,
            style in style_strategy()
        ) {
            let flat = format(&query, usize::MAX / 2, style).unwrap();
            prop_assume!(!flat.contains('\n'));

            if flat.len() <= width {
                let formatted = format(&query, width, style).unwrap();
                prop_assert_eq!(formatted, flat);
            }
        }

        #[test]
        fn negation_spacing(field in word_strategy(), value in word_strategy(), width in 1usize..40) {
            let query = format!("NOT {}:{}", field, value);
            let formatted = format(&query, width, Style::Compact).unwrap();
            prop_assert!(formatted.starts_with("NOT ") || formatted.starts_with("NOT\n"));

            let query = format!("-{}:{}", field, value);
            let formatted = format(&query, width, Style::Compact).unwrap();
            prop_assert_eq!(formatted, query);
        }
    }
}
