//! Parse tree produced by the query grammar

/// The grammar production a parse node was matched by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    Query,
    List,
    Iteration,
    Spaces,
    Spaced,
    OrSpace,
    BoolOperator,
    Parented,
    LongNegation,
    SimpleNegation,
    SimpleMust,
    FieldCondition,
    RangeCondition,
    SimpleRangeCondition,
    RegexCondition,
    DetachedCondition,
    Terminal,
}

/// A node of the parse tree. `offset` is the absolute byte position of
/// the match within the original query and `source` the matched text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseNode<'i> {
    pub rule: Rule,
    pub offset: usize,
    pub source: &'i str,
    pub children: Vec<ParseNode<'i>>,
}

impl<'i> ParseNode<'i> {
    pub fn leaf(rule: Rule, offset: usize, source: &'i str) -> ParseNode<'i> {
        ParseNode {
            rule,
            offset,
            source,
            children: Vec::new(),
        }
    }

    pub fn child(&self, index: usize) -> Option<&ParseNode<'i>> {
        self.children
            .get(index)
    }

    pub fn end(&self) -> usize {
        self.offset + self.source.len()
    }
}
