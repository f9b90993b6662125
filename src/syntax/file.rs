//! Syntax file wrapper for parsed SystemVerilog files.
//!
//! A [`SyntaxFile`] owns one parse result together with the text it was
//! parsed from and the line index over that text. Nodes handed out by
//! [`SyntaxFile::root`] keep the green tree alive on their own, but the
//! positions they carry are only meaningful against this file's text.

use std::sync::Arc;

use crate::base::{LineCol, LineIndex, Span};
use crate::parser::{Parse, SyntaxError, SyntaxNode, SyntaxToken, TextRange, parse};

/// A parsed syntax file.
#[derive(Debug, Clone)]
pub struct SyntaxFile {
    /// The underlying rowan parse result
    parse: Parse,
    text: Arc<str>,
    line_index: LineIndex,
}

impl PartialEq for SyntaxFile {
    fn eq(&self, other: &Self) -> bool {
        self.text == other.text
    }
}

impl Eq for SyntaxFile {}

impl SyntaxFile {
    /// Parse `source` into a new syntax file
    pub fn new(source: &str) -> Self {
        let text: Arc<str> = Arc::from(source);
        Self {
            parse: parse(&text),
            line_index: LineIndex::new(&text),
            text,
        }
    }

    /// Get the underlying parse result
    pub fn parse(&self) -> &Parse {
        &self.parse
    }

    /// Get the root node of the tree
    pub fn root(&self) -> SyntaxNode {
        self.parse.syntax()
    }

    /// Check if parsing had errors
    pub fn has_errors(&self) -> bool {
        !self.parse.errors.is_empty()
    }

    /// Get parse errors
    pub fn errors(&self) -> &[SyntaxError] {
        &self.parse.errors
    }

    /// Get the source text of the file
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn line_index(&self) -> &LineIndex {
        &self.line_index
    }

    /// Convert a byte range of this file to line/column positions
    pub fn span(&self, range: TextRange) -> Span {
        self.line_index.span(range)
    }

    /// The token under a zero-based line/column position
    pub fn token_at(&self, position: LineCol) -> Option<SyntaxToken> {
        let offset = self.line_index.offset(position)?;
        super::tree::token_at_offset(&self.root(), offset)
    }

    /// Check that `range` lies inside this file's text
    pub fn contains_range(&self, range: TextRange) -> bool {
        usize::from(range.end()) <= self.text.len()
    }
}
