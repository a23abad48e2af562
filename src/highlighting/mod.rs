//! Lexical classification of query text for syntax highlighting

mod grammar;

pub use grammar::Grammar;
