//! Types representing the Abstract Syntax Tree of a query

/// A node of the flattened query tree. All captured text borrows from the
/// original query string.
#[derive(Eq, Debug, PartialEq, Clone)]
pub enum AstNode<'i> {
    BoolOperator(Operator),
    Parented(Box<AstNode<'i>>),
    Marking {
        op: Mark,
        value: Box<AstNode<'i>>,
    },
    FieldCondition {
        name: &'i str,
        value: Box<AstNode<'i>>,
    },
    RangeCondition {
        opening: Opening,
        from: &'i str,
        to: &'i str,
        closing: Closing,
    },
    SimpleRangeCondition {
        operand: Comparison,
        value: Box<AstNode<'i>>,
    },
    RegexCondition(&'i str),
    Terminal(&'i str),
    Sequence(Vec<AstNode<'i>>),
}

/// Boolean combinators between adjacent conditions. `ImplicitOr` records
/// two conditions separated by nothing but whitespace.
#[derive(Eq, Debug, PartialEq, Clone, Copy)]
pub enum Operator {
    And,
    Or,
    Not,
    ImplicitOr,
}

impl Operator {
    pub fn from_text(text: &str) -> Option<Operator> {
        match text {
            "AND" => Some(Operator::And),
            "OR" => Some(Operator::Or),
            "NOT" => Some(Operator::Not),
            _ => None,
        }
    }

    pub fn text(&self) -> &'static str {
        match self {
            Operator::And => "AND",
            Operator::Or => "OR",
            Operator::Not => "NOT",
            Operator::ImplicitOr => "",
        }
    }
}

/// Negation or must/should annotation on a condition. `Not` is the spelled
/// out keyword and needs whitespace before the condition; the other two are
/// glued to it.
#[derive(Eq, Debug, PartialEq, Clone, Copy)]
pub enum Mark {
    Not,
    Plus,
    Minus,
}

impl Mark {
    pub fn text(&self) -> &'static str {
        match self {
            Mark::Not => "NOT",
            Mark::Plus => "+",
            Mark::Minus => "-",
        }
    }
}

#[derive(Eq, Debug, PartialEq, Clone, Copy)]
pub enum Opening {
    Inclusive,
    Exclusive,
}

impl Opening {
    pub fn from_text(text: &str) -> Option<Opening> {
        match text {
            "[" => Some(Opening::Inclusive),
            "{" => Some(Opening::Exclusive),
            _ => None,
        }
    }

    pub fn text(&self) -> &'static str {
        match self {
            Opening::Inclusive => "[",
            Opening::Exclusive => "{",
        }
    }
}

#[derive(Eq, Debug, PartialEq, Clone, Copy)]
pub enum Closing {
    Inclusive,
    Exclusive,
}

impl Closing {
    pub fn from_text(text: &str) -> Option<Closing> {
        match text {
            "]" => Some(Closing::Inclusive),
            "}" => Some(Closing::Exclusive),
            _ => None,
        }
    }

    pub fn text(&self) -> &'static str {
        match self {
            Closing::Inclusive => "]",
            Closing::Exclusive => "}",
        }
    }
}

/// Operand of an open-ended range such as `>=10`.
#[derive(Eq, Debug, PartialEq, Clone, Copy)]
pub enum Comparison {
    Greater,
    GreaterEqual,
    Less,
    LessEqual,
}

impl Comparison {
    pub fn from_text(text: &str) -> Option<Comparison> {
        match text {
            ">" => Some(Comparison::Greater),
            ">=" => Some(Comparison::GreaterEqual),
            "<" => Some(Comparison::Less),
            "<=" => Some(Comparison::LessEqual),
            _ => None,
        }
    }

    pub fn text(&self) -> &'static str {
        match self {
            Comparison::Greater => ">",
            Comparison::GreaterEqual => ">=",
            Comparison::Less => "<",
            Comparison::LessEqual => "<=",
        }
    }
}
