/// Typed errors for the symbol table and the selection dispatcher.
///
/// Both kinds are one-shot: a broken data file does not fix itself on retry,
/// and a missing key means an item was built from a different table.
use std::path::PathBuf;
use thiserror::Error;

/// The symbol resource could not be turned into a table.
#[derive(Debug, Error)]
pub enum LoadError {
    /// A symbol file on disk could not be read.
    #[error("Failed to read symbol file '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The resource is not valid JSON.
    #[error("Failed to parse symbol data: {0}")]
    Parse(#[from] serde_json::Error),

    /// The top-level JSON value is not an object keyed by symbol.
    #[error("Symbol data must be a JSON object keyed by symbol")]
    NotAnObject,

    /// A symbol entry is not a JSON object.
    #[error("Symbol '{key}' must be a JSON object")]
    InvalidEntry { key: String },

    /// A recognised field holds something other than a string.
    #[error("Field '{field}' of symbol '{key}' must be a string")]
    InvalidField { key: String, field: String },
}

/// A selection refers to data that is not in the loaded table.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LookupError {
    #[error("Symbol '{key}' is not in the symbol table")]
    UnknownSymbol { key: String },
}
