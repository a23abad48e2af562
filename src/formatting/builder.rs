//! Conversion of the query AST into a layout document

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use super::document::*;
use crate::language::{AstNode, Mark, Operator};

/// How broken groups are indented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Style {
    /// Continuation lines align one column past the opening delimiter, the
    /// way Lisp code is laid out.
    #[default]
    Compact,
    /// Continuation lines are indented by a fixed two columns.
    Indented,
}

impl Style {
    pub fn name(&self) -> &'static str {
        match self {
            Style::Compact => "lisp",
            Style::Indented => "simple",
        }
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown formatting style '{0}'")]
pub struct UnknownStyle(pub String);

impl FromStr for Style {
    type Err = UnknownStyle;

    fn from_str(name: &str) -> Result<Style, UnknownStyle> {
        match name {
            "lisp" | "compact" => Ok(Style::Compact),
            "simple" | "indented" => Ok(Style::Indented),
            _ => Err(UnknownStyle(name.to_string())),
        }
    }
}

/// Build the layout document for a query.
pub fn build<'i>(query: &AstNode<'i>, style: Style) -> Doc<'i> {
    let builder = Builder { style };
    builder.build(query)
}

struct Builder {
    style: Style,
}

impl Builder {
    fn wrap<'i>(&self, doc: Doc<'i>) -> Doc<'i> {
        match self.style {
            Style::Compact => group(hang(1, doc)),
            Style::Indented => group(nest(2, doc)),
        }
    }

    fn build<'i>(&self, node: &AstNode<'i>) -> Doc<'i> {
        match node {
            AstNode::BoolOperator(Operator::ImplicitOr) => concat(vec![]),
            AstNode::BoolOperator(operator) => concat(vec![soft_break(), text(operator.text())]),
            AstNode::Parented(inner) => self.wrap(enclose(
                "(",
                ")",
                concat(vec![empty_break(), self.build(inner), empty_break()]),
            )),
            AstNode::Marking { op: Mark::Not, value } => {
                self.wrap(concat(vec![text(Mark::Not.text()), soft_break(), self.build(value)]))
            }
            AstNode::Marking { op, value } => self.wrap(concat(vec![text(op.text()), self.build(value)])),
            AstNode::FieldCondition { name, value } => {
                concat(vec![text(*name), text(":"), self.build(value)])
            }
            AstNode::RangeCondition {
                opening,
                from,
                to,
                closing,
            } => self.wrap(concat(vec![
                text(opening.text()),
                empty_break(),
                text(*from),
                text(" TO "),
                text(*to),
                empty_break(),
                text(closing.text()),
            ])),
            AstNode::SimpleRangeCondition { operand, value } => {
                concat(vec![text(operand.text()), self.build(value)])
            }
            AstNode::RegexCondition(expression) => enclose("/", "/", text(*expression)),
            AstNode::Terminal(raw) => text(*raw),
            AstNode::Sequence(items) => self.build_sequence(items),
        }
    }

    /// All items of a sequence break together. Suppressed operators leave
    /// no trace, and operators already carrying their own leading break
    /// don't get a second one.
    fn build_sequence<'i>(&self, items: &[AstNode<'i>]) -> Doc<'i> {
        let mut parts = Vec::with_capacity(items.len() * 2);

        for item in items {
            let doc = self.build(item);
            if doc.is_empty() {
                continue;
            }
            if !parts.is_empty() && !doc.starts_with_break() {
                parts.push(soft_break());
            }
            parts.push(doc);
        }

        group(concat(parts))
    }
}
