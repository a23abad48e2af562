//! Canonical layout and syntax highlighting for Elasticsearch query strings.
//!
//! Query text is parsed into an AST, the AST is turned into a layout
//! document, and the document is rendered within a maximum line width.
//! The rendered text can then be highlighted for a terminal or a web page.
//!
//! ```
//! use esquery::formatting::Style;
//!
//! let formatted = esquery::format("a:1   AND b:2", 100, Style::Compact).unwrap();
//! assert_eq!(formatted, "a:1 AND b:2");
//! ```

use tracing::debug;

pub mod formatting;
pub mod highlighting;
pub mod language;
pub mod parsing;
mod regex;
pub mod rendering;

use formatting::{Render, Style};
use highlighting::Grammar;
use language::{AstNode, QueryError};

/// Line width used when the caller has no preference.
pub const DEFAULT_WIDTH: usize = 100;

/// Parse query text into its flattened AST.
pub fn parse(text: &str) -> Result<AstNode<'_>, QueryError> {
    parsing::parse(text)
}

/// Parse, lay out, and render a query within the given width.
pub fn format(text: &str, width: usize, style: Style) -> Result<String, QueryError> {
    let query = parse(text)?;
    let document = formatting::build(&query, style);

    debug!(width, %style, "Rendering");
    Ok(formatting::render(&document, width))
}

/// Highlight query text as it stands, without reformatting it.
pub fn highlight(text: &str, grammar: &Grammar, renderer: &impl Render) -> String {
    rendering::highlight(text, grammar, renderer)
}

/// Format a query, then highlight the result.
pub fn prettify(
    text: &str,
    width: usize,
    style: Style,
    grammar: &Grammar,
    renderer: &impl Render,
) -> Result<String, QueryError> {
    let formatted = format(text, width, style)?;
    Ok(highlight(&formatted, grammar, renderer))
}
