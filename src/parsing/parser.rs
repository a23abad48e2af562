//! Grammar for Elasticsearch query strings, producing a parse tree with
//! source offsets.
//!
//! This is an ordered-choice, backtracking recursive descent parser. Each
//! `read_*()` method corresponds to one production and returns `None` when
//! it doesn't match; alternatives are run through `attempt()` so that a
//! failed branch leaves the position untouched. Every terminal that fails
//! to match records what it wanted at that offset, and the expectations at
//! the rightmost such offset become the GrammarMismatch.

use tracing::debug;

use crate::language::{Expected, GrammarMismatch};
use crate::parsing::tree::{ParseNode, Rule};

const KEYWORDS: [&str; 3] = ["AND", "OR", "NOT"];

/// Run the query grammar over the given text.
pub fn parse_tree(content: &str) -> Result<ParseNode<'_>, GrammarMismatch> {
    let mut input = Parser::new(content);

    match input.read_query() {
        Some(tree) => Ok(tree),
        None => {
            debug!(
                offset = input.rightmost,
                expected = input
                    .expected
                    .len(),
                "Grammar mismatch"
            );
            Err(GrammarMismatch::new(
                content,
                input.rightmost,
                input.expected,
            ))
        }
    }
}

fn is_term_char(c: char) -> bool {
    !c.is_whitespace() && !matches!(c, '(' | ')' | '[' | ']' | '{' | '}' | ':' | '"')
}

fn is_term_start(c: char) -> bool {
    is_term_char(c) && c != '/'
}

#[derive(Debug)]
struct Parser<'i> {
    original: &'i str,
    offset: usize,
    rightmost: usize,
    expected: Vec<Expected>,
}

impl<'i> Parser<'i> {
    fn new(content: &'i str) -> Parser<'i> {
        Parser {
            original: content,
            offset: 0,
            rightmost: 0,
            expected: Vec::new(),
        }
    }

    fn rest(&self) -> &'i str {
        &self.original[self.offset..]
    }

    fn peek(&self) -> Option<char> {
        self.rest()
            .chars()
            .next()
    }

    fn is_finished(&self) -> bool {
        self.offset
            >= self
                .original
                .len()
    }

    fn advance(&mut self, width: usize) {
        self.offset += width;
    }

    /// Note that the given thing would have been acceptable at the current
    /// position.
    fn expect(&mut self, what: Expected) {
        if self.offset > self.rightmost {
            self.rightmost = self.offset;
            self.expected
                .clear();
        }
        if self.offset == self.rightmost && !self
            .expected
            .contains(&what)
        {
            self.expected
                .push(what);
        }
    }

    /// Run a production, restoring the position if it fails.
    fn attempt<A, F>(&mut self, function: F) -> Option<A>
    where
        F: FnOnce(&mut Parser<'i>) -> Option<A>,
    {
        let saved = self.offset;
        let result = function(self);
        if result.is_none() {
            self.offset = saved;
        }
        result
    }

    fn node(&self, rule: Rule, start: usize, children: Vec<ParseNode<'i>>) -> ParseNode<'i> {
        ParseNode {
            rule,
            offset: start,
            source: &self.original[start..self.offset],
            children,
        }
    }

    /// Iterations span from their first to their last match; an empty one
    /// sits at the given position.
    fn iteration(&self, position: usize, children: Vec<ParseNode<'i>>) -> ParseNode<'i> {
        let start = children
            .first()
            .map(|child| child.offset)
            .unwrap_or(position);
        let end = children
            .last()
            .map(|child| child.end())
            .unwrap_or(position);

        ParseNode {
            rule: Rule::Iteration,
            offset: start,
            source: &self.original[start..end],
            children,
        }
    }

    // lexical pieces

    fn take_literal(&mut self, literal: &'static str) -> Option<ParseNode<'i>> {
        if self
            .rest()
            .starts_with(literal)
        {
            let start = self.offset;
            self.advance(literal.len());
            Some(self.node(Rule::Terminal, start, vec![]))
        } else {
            self.expect(Expected::Literal(literal));
            None
        }
    }

    fn take_one_of(&mut self, literals: &[&'static str]) -> Option<ParseNode<'i>> {
        for literal in literals {
            if let Some(node) = self.take_literal(literal) {
                return Some(node);
            }
        }
        None
    }

    /// A keyword must not run on into a longer term, so `ANDROID` is not
    /// the operator `AND`.
    fn take_keyword(&mut self, keyword: &'static str) -> Option<ParseNode<'i>> {
        let rest = self.rest();
        let boundary = rest
            .strip_prefix(keyword)
            .map(|after| {
                after
                    .chars()
                    .next()
                    .map_or(true, |c| !is_term_char(c))
            })
            .unwrap_or(false);

        if boundary {
            self.take_literal(keyword)
        } else {
            self.expect(Expected::Literal(keyword));
            None
        }
    }

    /// Zero or more whitespace characters.
    fn take_spaces(&mut self) -> ParseNode<'i> {
        let start = self.offset;
        let width = self
            .rest()
            .find(|c: char| !c.is_whitespace())
            .unwrap_or(
                self.rest()
                    .len(),
            );
        self.advance(width);
        self.node(Rule::Spaces, start, vec![])
    }

    /// One or more whitespace characters.
    fn take_whitespace(&mut self) -> Option<ParseNode<'i>> {
        match self.peek() {
            Some(c) if c.is_whitespace() => Some(self.take_spaces()),
            _ => {
                self.expect(Expected::Described("whitespace"));
                None
            }
        }
    }

    fn take_term_chars(&mut self) {
        while let Some(c) = self.peek() {
            if c == '\\' {
                self.advance(1);
                if let Some(escaped) = self.peek() {
                    self.advance(escaped.len_utf8());
                }
            } else if is_term_char(c) {
                self.advance(c.len_utf8());
            } else {
                break;
            }
        }
    }

    fn take_term(&mut self) -> Option<ParseNode<'i>> {
        match self.peek() {
            Some(c) if is_term_start(c) => {
                let start = self.offset;
                self.take_term_chars();
                Some(self.node(Rule::Terminal, start, vec![]))
            }
            _ => {
                self.expect(Expected::Described("a term"));
                None
            }
        }
    }

    /// A double quoted phrase, including any proximity or boost suffix such
    /// as `"quick fox"~2`.
    fn take_phrase(&mut self) -> Option<ParseNode<'i>> {
        let start = self.offset;
        self.take_literal("\"")?;

        loop {
            match self.peek() {
                None => {
                    self.expect(Expected::Literal("\""));
                    return None;
                }
                Some('"') => {
                    self.advance(1);
                    break;
                }
                Some('\\') => {
                    self.advance(1);
                    if let Some(escaped) = self.peek() {
                        self.advance(escaped.len_utf8());
                    }
                }
                Some(c) => self.advance(c.len_utf8()),
            }
        }

        self.take_term_chars();
        Some(self.node(Rule::Terminal, start, vec![]))
    }

    fn take_word(&mut self) -> Option<ParseNode<'i>> {
        if let Some(phrase) = self.attempt(Parser::take_phrase) {
            return Some(phrase);
        }
        self.attempt(Parser::take_term)
    }

    // productions

    fn read_query(&mut self) -> Option<ParseNode<'i>> {
        let start = self.offset;
        let leading = self.take_spaces();
        let list = self.read_list()?;
        let trailing = self.take_spaces();

        if !self.is_finished() {
            self.expect(Expected::Described("end of input"));
            return None;
        }

        Some(self.node(Rule::Query, start, vec![leading, list, trailing]))
    }

    /// A non-empty list of conditions with separators between them. The
    /// separators and the conditions following the first one are collected
    /// into two separate iterations; putting them back in source order is
    /// the flattener's job.
    fn read_list(&mut self) -> Option<ParseNode<'i>> {
        let start = self.offset;
        let first = self.read_condition()?;
        let position = self.offset;

        let mut separators = Vec::new();
        let mut rest = Vec::new();

        loop {
            let pair = match self.attempt(|p| Some((p.read_spaced_operator()?, p.read_condition()?))) {
                Some(pair) => Some(pair),
                None => self.attempt(|p| Some((p.read_or_space()?, p.read_condition()?))),
            };

            match pair {
                Some((separator, condition)) => {
                    separators.push(separator);
                    rest.push(condition);
                }
                None => break,
            }
        }

        let separators = self.iteration(position, separators);
        let rest = self.iteration(position, rest);

        Some(self.node(Rule::List, start, vec![first, separators, rest]))
    }

    fn read_spaced_operator(&mut self) -> Option<ParseNode<'i>> {
        let start = self.offset;
        let before = self.take_spaces();
        let operator = self.read_bool_operator()?;
        let after = self.take_spaces();

        Some(self.node(Rule::Spaced, start, vec![before, operator, after]))
    }

    fn read_bool_operator(&mut self) -> Option<ParseNode<'i>> {
        let start = self.offset;
        for keyword in KEYWORDS {
            if self
                .take_keyword(keyword)
                .is_some()
            {
                return Some(self.node(Rule::BoolOperator, start, vec![]));
            }
        }
        None
    }

    fn read_or_space(&mut self) -> Option<ParseNode<'i>> {
        let start = self.offset;
        self.take_whitespace()?;
        Some(self.node(Rule::OrSpace, start, vec![]))
    }

    fn read_condition(&mut self) -> Option<ParseNode<'i>> {
        let alternatives: [fn(&mut Parser<'i>) -> Option<ParseNode<'i>>; 6] = [
            Parser::read_parented,
            Parser::read_long_negation,
            Parser::read_simple_negation,
            Parser::read_simple_must,
            Parser::read_field_condition,
            Parser::read_detached_condition,
        ];

        for alternative in alternatives {
            if let Some(node) = self.attempt(alternative) {
                return Some(node);
            }
        }
        None
    }

    fn read_parented(&mut self) -> Option<ParseNode<'i>> {
        let start = self.offset;
        let open = self.take_literal("(")?;
        let before = self.take_spaces();
        let list = self.read_list()?;
        let after = self.take_spaces();
        let close = self.take_literal(")")?;

        Some(self.node(Rule::Parented, start, vec![open, before, list, after, close]))
    }

    fn read_long_negation(&mut self) -> Option<ParseNode<'i>> {
        let start = self.offset;
        let keyword = self.take_keyword("NOT")?;
        let spaces = self.take_whitespace()?;
        let condition = self.read_condition()?;

        Some(self.node(Rule::LongNegation, start, vec![keyword, spaces, condition]))
    }

    fn read_simple_negation(&mut self) -> Option<ParseNode<'i>> {
        let start = self.offset;
        let minus = self.take_literal("-")?;
        let condition = self.read_condition()?;

        Some(self.node(Rule::SimpleNegation, start, vec![minus, condition]))
    }

    fn read_simple_must(&mut self) -> Option<ParseNode<'i>> {
        let start = self.offset;
        let plus = self.take_literal("+")?;
        let condition = self.read_condition()?;

        Some(self.node(Rule::SimpleMust, start, vec![plus, condition]))
    }

    fn read_field_condition(&mut self) -> Option<ParseNode<'i>> {
        let start = self.offset;
        let name = self.take_term()?;
        let colon = self.take_literal(":")?;
        let value = self.read_value()?;

        Some(self.node(Rule::FieldCondition, start, vec![name, colon, value]))
    }

    fn read_value(&mut self) -> Option<ParseNode<'i>> {
        let alternatives: [fn(&mut Parser<'i>) -> Option<ParseNode<'i>>; 5] = [
            Parser::read_range_condition,
            Parser::read_simple_range_condition,
            Parser::read_regex_condition,
            Parser::read_parented,
            Parser::take_word,
        ];

        for alternative in alternatives {
            if let Some(node) = self.attempt(alternative) {
                return Some(node);
            }
        }
        None
    }

    fn read_range_condition(&mut self) -> Option<ParseNode<'i>> {
        let start = self.offset;
        let opening = self.take_one_of(&["[", "{"])?;
        let before = self.take_spaces();
        let from = self.take_word()?;

        let joiner = self.offset;
        self.take_whitespace()?;
        self.take_literal("TO")?;
        self.take_whitespace()?;
        let joiner = self.node(Rule::Terminal, joiner, vec![]);

        let to = self.take_word()?;
        let after = self.take_spaces();
        let closing = self.take_one_of(&["]", "}"])?;

        Some(self.node(
            Rule::RangeCondition,
            start,
            vec![opening, before, from, joiner, to, after, closing],
        ))
    }

    fn read_simple_range_condition(&mut self) -> Option<ParseNode<'i>> {
        let start = self.offset;
        let operand = self.take_one_of(&[">=", "<=", ">", "<"])?;
        let value = self.take_word()?;

        Some(self.node(Rule::SimpleRangeCondition, start, vec![operand, value]))
    }

    fn read_regex_condition(&mut self) -> Option<ParseNode<'i>> {
        let start = self.offset;
        let open = self.take_literal("/")?;

        let body = self.offset;
        loop {
            match self.peek() {
                None => {
                    self.expect(Expected::Literal("/"));
                    return None;
                }
                Some('/') => break,
                Some('\\') => {
                    self.advance(1);
                    if let Some(escaped) = self.peek() {
                        self.advance(escaped.len_utf8());
                    }
                }
                Some(c) => self.advance(c.len_utf8()),
            }
        }
        let expression = self.node(Rule::Terminal, body, vec![]);
        let close = self.take_literal("/")?;

        Some(self.node(Rule::RegexCondition, start, vec![open, expression, close]))
    }

    fn read_detached_condition(&mut self) -> Option<ParseNode<'i>> {
        let start = self.offset;
        let word = self.take_word()?;

        Some(self.node(Rule::DetachedCondition, start, vec![word]))
    }
}
