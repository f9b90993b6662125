//! Error types shared across the crate.

use std::path::PathBuf;

use thiserror::Error;

use super::file_id::FileId;
use super::span::{TextRange, TextSize};

/// Result alias using the crate [`Error`].
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// A syntax error with location and message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxError {
    pub message: String,
    pub range: TextRange,
}

impl SyntaxError {
    pub fn new(message: impl Into<String>, range: TextRange) -> Self {
        Self {
            message: message.into(),
            range,
        }
    }

    pub fn at(message: impl Into<String>, offset: TextSize) -> Self {
        Self::new(message, TextRange::empty(offset))
    }
}

/// Errors produced by project, symbol table and query operations.
#[derive(Debug, Error)]
pub enum Error {
    /// A path or `` `include `` reference did not resolve to an existing file.
    #[error("file not found: {reference}")]
    NotFound { reference: String },

    /// The file was read but contains syntax errors.
    #[error("failed to parse {}: {} syntax error(s)", path.display(), diagnostics.len())]
    ParseFailed {
        path: PathBuf,
        diagnostics: Vec<SyntaxError>,
    },

    /// A URI that is not a `file://` URI.
    #[error("invalid URI: {0}")]
    InvalidUri(String),

    /// A query referenced a document with no open buffer.
    #[error("no buffer tracked for {0}")]
    BufferNotTracked(String),

    /// A queried name matches no declaration.
    #[error("symbol not found: {0}")]
    SymbolNotFound(String),

    /// A symbol id that does not name a live node of the table.
    #[error("unknown symbol id {0}")]
    UnknownSymbol(String),

    /// A scope already holds a child with the same name.
    #[error("duplicate declaration of `{name}` in {scope}")]
    DuplicateDeclaration { name: String, scope: String },

    /// A FileId that the project never issued.
    #[error("unknown file id {0}")]
    UnknownFile(FileId),

    /// IO error while reading a source file.
    #[error("IO error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Create a not-found error.
    pub fn not_found(reference: impl Into<String>) -> Self {
        Self::NotFound {
            reference: reference.into(),
        }
    }

    /// Create an IO error for a path.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create a duplicate declaration error.
    pub fn duplicate(name: impl Into<String>, scope: impl Into<String>) -> Self {
        Self::DuplicateDeclaration {
            name: name.into(),
            scope: scope.into(),
        }
    }
}
