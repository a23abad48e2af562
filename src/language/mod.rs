// Types representing parsed Elasticsearch queries

mod error;
mod types;

// Re-export all public symbols
pub use error::*;
pub use types::*;
