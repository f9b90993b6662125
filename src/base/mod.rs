//! Foundation types for the svindex toolchain.
//!
//! This module provides fundamental types used throughout the crate:
//! - [`FileId`] - Arena index of a tracked source file
//! - [`TextRange`], [`TextSize`] - Source positions (byte offsets)
//! - [`LineCol`], [`LineIndex`] - Line/column conversion
//! - [`Position`], [`Span`] - Line/column ranges for query results
//! - [`Error`], [`Result`] - The crate error type
//! - [`SyntaxError`] - A single parse diagnostic
//! - URI and path helpers, domain constants (file extensions)
//!
//! This module has NO dependencies on other svindex modules.

pub mod constants;
mod error;
mod file_id;
pub mod paths;
mod position;
mod span;
pub mod uri;

pub use error::{Error, Result, SyntaxError};
pub use file_id::FileId;
pub use position::{Position, Span};
pub use span::{LineCol, LineIndex, TextRange, TextSize};
pub use uri::{path_to_uri, uri_to_path};

// Re-export text-size types for convenience
pub use text_size;
