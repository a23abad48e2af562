//! Token classes for colourizing queries

/// Types of content that can be rendered with different styles. These
/// follow the token names used by Prism themes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Syntax {
    Neutral, // default
    String,
    Variable,
    Boolean,
    Number,
    Operator,
    Punctuation,
    Keyword,
}

impl Syntax {
    /// The Prism token name for this class.
    pub fn name(&self) -> &'static str {
        match self {
            Syntax::Neutral => "neutral",
            Syntax::String => "string",
            Syntax::Variable => "variable",
            Syntax::Boolean => "boolean",
            Syntax::Number => "number",
            Syntax::Operator => "operator",
            Syntax::Punctuation => "punctuation",
            Syntax::Keyword => "keyword",
        }
    }
}

/// Trait for different rendering backends (the no-op no-markup one, ANSI
/// escapes for terminal colouring, HTML spans for web pages)
pub trait Render {
    /// Apply styling to content with the specified syntax type
    fn style(&self, syntax: Syntax, content: &str) -> String;
}

/// Returns content unchanged, with no markup applied
pub struct Identity;

impl Render for Identity {
    fn style(&self, _syntax: Syntax, content: &str) -> String {
        content.to_string()
    }
}
