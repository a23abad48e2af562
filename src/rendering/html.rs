//! HTML markup for highlighted queries, using the token class names that
//! Prism themes style.

use std::borrow::Cow;

use crate::formatting::*;

/// Wrap each classified fragment in `<span class="token KIND">`.
pub struct Html;

impl Render for Html {
    fn style(&self, syntax: Syntax, content: &str) -> String {
        let content = escape_html(content);
        match syntax {
            Syntax::Neutral => content.into_owned(),
            _ => markup(syntax.name(), &content),
        }
    }
}

fn escape_html(content: &str) -> Cow<'_, str> {
    if !content.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(content);
    }

    let mut result = String::with_capacity(content.len() + 8);
    for c in content.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#39;"),
            _ => result.push(c),
        }
    }
    Cow::Owned(result)
}

fn markup(kind: &str, content: &Cow<str>) -> String {
    let mut result = String::with_capacity(20 + kind.len() + 2 + content.len() + 7);
    result.push_str("<span class=\"token ");
    result.push_str(kind);
    result.push_str("\">");
    result.push_str(content);
    result.push_str("</span>");
    result
}
