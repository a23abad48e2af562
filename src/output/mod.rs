//! HTML output for the esquery CLI application

use esquery::formatting::{Render, Syntax};
use esquery::language::QueryError;
use esquery::rendering::Html;
use serde::Serialize;
use tinytemplate::TinyTemplate;
use tracing::debug;

use crate::problem::split_at_failure;

static TEMPLATE: &str = r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>{title}</title>
<style>
{stylesheet | unescaped}
</style>
</head>
<body>
<pre class="language-esquery"><code class="language-esquery">{markup | unescaped}</code></pre>
</body>
</html>
"#;

// Colours follow the terminal renderer.
static STYLESHEET: &str = r#"pre.language-esquery { font-family: Inconsolata, monospace; }
.token.string { color: #4e9a06; font-weight: bold; }
.token.variable { color: #729fcf; font-weight: bold; }
.token.boolean { color: #c4a000; font-weight: bold; }
.token.number { color: #ad7fa8; font-weight: bold; }
.token.operator { color: #cc0000; font-weight: bold; }
.token.punctuation { color: #999999; }
.token.keyword { color: #75507b; font-weight: bold; }"#;

#[derive(Serialize)]
struct Context<'a> {
    title: &'a str,
    stylesheet: &'a str,
    markup: &'a str,
}

/// Wrap highlighted markup in a self-contained HTML page.
pub fn html_page(title: &str, markup: &str) -> Result<String, tinytemplate::error::Error> {
    let mut tt = TinyTemplate::new();
    tt.add_template("page", TEMPLATE)?;

    let context = Context {
        title,
        stylesheet: STYLESHEET,
        markup,
    };

    let rendered = tt.render("page", &context)?;
    debug!(bytes = rendered.len(), "Rendered page");
    Ok(rendered)
}

/// The query with the failing character underlined, followed by a
/// paragraph carrying the short error message. Without a CSS class the
/// markup is styled inline in red.
pub fn error_markup(source: &str, error: &QueryError, class: Option<&str>) -> String {
    let (before, culprit, after) = split_at_failure(source, error.offset());

    let (underline, paragraph) = match class {
        Some(class) => {
            let styling = format!("class=\"{}\"", escape(class));
            (styling.clone(), styling)
        }
        None => (
            "style=\"text-decoration-color: red;color: red;\"".to_string(),
            "style=\"color:red\"".to_string(),
        ),
    };

    format!(
        "{}<u {}>{}</u>{}<p {}>{}</p>",
        escape(before),
        underline,
        escape(culprit),
        escape(after),
        paragraph,
        escape(&error.to_string())
    )
}

fn escape(text: &str) -> String {
    Html.style(Syntax::Neutral, text)
}
