//! Layout documents: an intermediate representation between the query AST
//! and formatted text. A document describes where lines may break; the
//! printer decides, group by group, whether they do.

use unicode_width::UnicodeWidthStr;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Doc<'i> {
    /// Literal text, either a fixed token or a slice of the query
    Text(&'i str),

    Concat(Vec<Doc<'i>>),

    /// A space when flat, a line break when broken
    SoftBreak,

    /// Nothing when flat, a line break when broken. Used just inside
    /// delimiters so that `(a OR b)` and `[1 TO 5]` keep their tight form.
    EmptyBreak,

    /// Always a line break
    HardBreak,

    /// The unit of the flat versus broken decision
    Group(Box<Doc<'i>>),

    /// Broken lines inside are indented by a further fixed amount
    Nest(usize, Box<Doc<'i>>),

    /// Broken lines inside line up with the column where this started, plus
    /// the given amount
    Hang(usize, Box<Doc<'i>>),

    Enclose(&'static str, &'static str, Box<Doc<'i>>),
}

impl<'i> Doc<'i> {
    /// Whether this document produces no output in any mode.
    pub fn is_empty(&self) -> bool {
        match self {
            Doc::Text(text) => text.is_empty(),
            Doc::Concat(docs) => docs
                .iter()
                .all(Doc::is_empty),
            Doc::SoftBreak | Doc::EmptyBreak | Doc::HardBreak => false,
            Doc::Group(inner) | Doc::Nest(_, inner) | Doc::Hang(_, inner) => inner.is_empty(),
            Doc::Enclose(open, close, inner) => {
                open.is_empty() && close.is_empty() && inner.is_empty()
            }
        }
    }

    /// Whether the first thing this document emits is a break.
    pub fn starts_with_break(&self) -> bool {
        match self {
            Doc::Text(_) => false,
            Doc::Concat(docs) => docs
                .iter()
                .find(|doc| !doc.is_empty())
                .map_or(false, Doc::starts_with_break),
            Doc::SoftBreak | Doc::EmptyBreak | Doc::HardBreak => true,
            Doc::Group(inner) | Doc::Nest(_, inner) | Doc::Hang(_, inner) => {
                inner.starts_with_break()
            }
            Doc::Enclose(open, _, inner) => open.is_empty() && inner.starts_with_break(),
        }
    }

    /// Whether rendering forces a line break regardless of mode. Text that
    /// itself spans lines (a phrase with an embedded newline) counts.
    pub fn contains_hard_break(&self) -> bool {
        match self {
            Doc::Text(text) => text.contains('\n'),
            Doc::Concat(docs) => docs
                .iter()
                .any(Doc::contains_hard_break),
            Doc::SoftBreak | Doc::EmptyBreak => false,
            Doc::HardBreak => true,
            Doc::Group(inner) | Doc::Nest(_, inner) | Doc::Hang(_, inner) => {
                inner.contains_hard_break()
            }
            Doc::Enclose(_, _, inner) => inner.contains_hard_break(),
        }
    }

    /// Display width of this document rendered entirely flat.
    pub fn flat_width(&self) -> usize {
        match self {
            Doc::Text(text) => text.width(),
            Doc::Concat(docs) => docs
                .iter()
                .map(Doc::flat_width)
                .sum(),
            Doc::SoftBreak => 1,
            Doc::EmptyBreak | Doc::HardBreak => 0,
            Doc::Group(inner) | Doc::Nest(_, inner) | Doc::Hang(_, inner) => inner.flat_width(),
            Doc::Enclose(open, close, inner) => open.width() + inner.flat_width() + close.width(),
        }
    }
}

pub fn text(text: &str) -> Doc<'_> {
    Doc::Text(text)
}

pub fn concat(docs: Vec<Doc<'_>>) -> Doc<'_> {
    Doc::Concat(docs)
}

pub fn soft_break<'i>() -> Doc<'i> {
    Doc::SoftBreak
}

pub fn empty_break<'i>() -> Doc<'i> {
    Doc::EmptyBreak
}

pub fn hard_break<'i>() -> Doc<'i> {
    Doc::HardBreak
}

pub fn group(doc: Doc<'_>) -> Doc<'_> {
    Doc::Group(Box::new(doc))
}

pub fn nest(indent: usize, doc: Doc<'_>) -> Doc<'_> {
    Doc::Nest(indent, Box::new(doc))
}

pub fn hang(indent: usize, doc: Doc<'_>) -> Doc<'_> {
    Doc::Hang(indent, Box::new(doc))
}

pub fn enclose<'i>(open: &'static str, close: &'static str, doc: Doc<'i>) -> Doc<'i> {
    Doc::Enclose(open, close, Box::new(doc))
}
