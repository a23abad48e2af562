//! parser for Elasticsearch query strings

use std::io::Read;
use std::path::Path;
use tracing::debug;

use crate::language::{AstNode, LoadingError, QueryError};

mod flatten;
mod parser;
mod tree;

pub use flatten::flatten;
pub use parser::parse_tree;
pub use tree::{ParseNode, Rule};

/// Read a file and return an owned String. We pass that ownership back to the
/// main function so that the AstNode created by parse() below can borrow
/// from it. A filename of "-" reads standard input.
pub fn load(filename: &Path) -> Result<String, LoadingError<'_>> {
    let result = if filename.to_str() == Some("-") {
        let mut content = String::new();
        std::io::stdin()
            .read_to_string(&mut content)
            .map(|_| content)
    } else {
        std::fs::read_to_string(filename)
    };

    match result {
        Ok(content) => Ok(content),
        Err(error) => {
            debug!(?error);
            match error.kind() {
                std::io::ErrorKind::NotFound => Err(LoadingError {
                    problem: "File not found".to_string(),
                    details: String::new(),
                    filename,
                }),
                _ => Err(LoadingError {
                    problem: "Failed reading".to_string(),
                    details: error
                        .kind()
                        .to_string(),
                    filename,
                }),
            }
        }
    }
}

/// Parse query text into its AST, or return the grammar mismatch describing
/// where and why it failed.
pub fn parse(content: &str) -> Result<AstNode<'_>, QueryError> {
    let tree = parse_tree(content).map_err(QueryError::GrammarMismatch)?;
    let query = flatten(&tree)?;

    match &query {
        AstNode::Sequence(items) => {
            debug!(
                "Found {} item{}",
                items.len(),
                if items.len() == 1 { "" } else { "s" }
            );
        }
        _ => {
            debug!("Found single condition");
        }
    }

    Ok(query)
}
