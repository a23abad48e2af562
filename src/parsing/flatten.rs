//! Conversion of the grammar's parse tree into the query AST

use tracing::trace;

use crate::language::{AstNode, Closing, Comparison, Mark, Opening, Operator, QueryError};
use crate::parsing::tree::{ParseNode, Rule};

/// Transform a parse node, and everything beneath it, into an AST node.
pub fn flatten<'i>(node: &ParseNode<'i>) -> Result<AstNode<'i>, QueryError> {
    trace!(rule = ?node.rule, offset = node.offset);

    match node.rule {
        Rule::Query => flatten(child(node, 1)?),
        Rule::List => flatten_list(node),
        Rule::Spaced => flatten(child(node, 1)?),
        Rule::BoolOperator => {
            let operator = Operator::from_text(node.source).ok_or_else(|| unhandled(node))?;
            Ok(AstNode::BoolOperator(operator))
        }
        Rule::OrSpace => Ok(AstNode::BoolOperator(Operator::ImplicitOr)),
        Rule::Parented => {
            let inner = flatten(child(node, 2)?)?;
            Ok(AstNode::Parented(Box::new(inner)))
        }
        Rule::LongNegation => marking(Mark::Not, child(node, 2)?),
        Rule::SimpleNegation => marking(Mark::Minus, child(node, 1)?),
        Rule::SimpleMust => marking(Mark::Plus, child(node, 1)?),
        Rule::FieldCondition => {
            let name = child(node, 0)?.source;
            let value = flatten(child(node, 2)?)?;
            Ok(AstNode::FieldCondition {
                name,
                value: Box::new(value),
            })
        }
        Rule::RangeCondition => {
            let opening = child(node, 0)?;
            let closing = child(node, 6)?;
            Ok(AstNode::RangeCondition {
                opening: Opening::from_text(opening.source).ok_or_else(|| unhandled(opening))?,
                from: child(node, 2)?.source,
                to: child(node, 4)?.source,
                closing: Closing::from_text(closing.source).ok_or_else(|| unhandled(closing))?,
            })
        }
        Rule::SimpleRangeCondition => {
            let operand = child(node, 0)?;
            let value = flatten(child(node, 1)?)?;
            Ok(AstNode::SimpleRangeCondition {
                operand: Comparison::from_text(operand.source).ok_or_else(|| unhandled(operand))?,
                value: Box::new(value),
            })
        }
        Rule::RegexCondition => Ok(AstNode::RegexCondition(child(node, 1)?.source)),
        Rule::DetachedCondition => Ok(AstNode::Terminal(node.source)),
        Rule::Terminal => Ok(AstNode::Terminal(node.source)),
        Rule::Iteration | Rule::Spaces => Err(unhandled(node)),
    }
}

/// The grammar hands us a list as its first condition, then the separators
/// and the remaining conditions as two independent iterations. Gather every
/// contribution with its offset and put them back in source order.
fn flatten_list<'i>(node: &ParseNode<'i>) -> Result<AstNode<'i>, QueryError> {
    let mut contributions: Vec<&ParseNode<'i>> = Vec::new();

    for part in &node.children {
        match part.rule {
            Rule::Iteration => contributions.extend(
                part.children
                    .iter(),
            ),
            _ => contributions.push(part),
        }
    }

    // stable, so equal offsets keep their encounter order
    contributions.sort_by_key(|contribution| contribution.offset);

    let mut items = contributions
        .into_iter()
        .map(flatten)
        .collect::<Result<Vec<_>, _>>()?;

    match items.len() {
        0 => Err(unhandled(node)),
        1 => Ok(items.remove(0)),
        _ => Ok(AstNode::Sequence(items)),
    }
}

fn marking<'i>(op: Mark, value: &ParseNode<'i>) -> Result<AstNode<'i>, QueryError> {
    let value = flatten(value)?;
    Ok(AstNode::Marking {
        op,
        value: Box::new(value),
    })
}

fn child<'n, 'i>(node: &'n ParseNode<'i>, index: usize) -> Result<&'n ParseNode<'i>, QueryError> {
    node.child(index)
        .ok_or_else(|| unhandled(node))
}

fn unhandled(node: &ParseNode) -> QueryError {
    QueryError::UnhandledNodeKind {
        rule: node.rule,
        offset: node.offset,
    }
}
