//! Renderers for colourizing queries

use crate::formatting::*;
use crate::highlighting::Grammar;

mod html;
mod terminal;

pub use html::Html;
pub use terminal::Terminal;

/// We do the highlighting in two passes. First the grammar splits the text
/// into a Vec of "fragments" (Syntax tag, &str pairs). Then second we apply
/// the specified renderer to each pair to result in an
/// embellished/highlighted/marked-up String.
pub fn highlight(text: &str, grammar: &Grammar, renderer: &impl Render) -> String {
    // Pass 1: classify text into tagged fragments
    let fragments = grammar.classify(text);

    // Pass 2: render tagged fragments to final output
    render_to_string(renderer, fragments)
}

/// Pass 2: apply markup to fragments via style() and combine.
fn render_to_string(renderer: &impl Render, fragments: Vec<(Syntax, &str)>) -> String {
    let mut output = String::new();

    for (syntax, content) in fragments {
        let rendered = renderer.style(syntax, content);
        output.push_str(&rendered);
    }

    output
}
