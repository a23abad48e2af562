//! Layout of query ASTs into width-constrained text

mod builder;
pub mod document;
mod printer;
mod syntax;

pub use builder::{build, Style, UnknownStyle};
pub use document::Doc;
pub use printer::render;
pub use syntax::{Identity, Render, Syntax};
