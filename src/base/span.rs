//! Byte offsets and line/column conversion.

pub use text_size::{TextRange, TextSize};

use super::position::{Position, Span};

/// A 0-indexed line and UTF-8 byte column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LineCol {
    pub line: u32,
    pub col: u32,
}

impl LineCol {
    pub fn new(line: u32, col: u32) -> Self {
        Self { line, col }
    }
}

impl From<LineCol> for Position {
    fn from(lc: LineCol) -> Self {
        Position::new(lc.line, lc.col)
    }
}

/// Maps byte offsets of a text to line/column pairs and back.
///
/// Lines are terminated by `\n`; a preceding `\r` stays part of the line
/// contents, so columns on CRLF files still count bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineIndex {
    /// Offset of the first byte of each line. Always starts with 0.
    line_starts: Vec<TextSize>,
    len: TextSize,
}

impl LineIndex {
    pub fn new(text: &str) -> Self {
        let mut line_starts = vec![TextSize::new(0)];
        line_starts.extend(
            text.bytes()
                .enumerate()
                .filter(|(_, b)| *b == b'\n')
                .map(|(i, _)| TextSize::new(i as u32 + 1)),
        );
        Self {
            line_starts,
            len: TextSize::of(text),
        }
    }

    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Convert a byte offset into a line/column pair.
    ///
    /// Offsets past the end of the text are clamped to the end.
    pub fn line_col(&self, offset: TextSize) -> LineCol {
        let offset = offset.min(self.len);
        let line = self
            .line_starts
            .partition_point(|start| *start <= offset)
            .saturating_sub(1);
        let col = offset - self.line_starts[line];
        LineCol::new(line as u32, col.into())
    }

    /// Convert a line/column pair into a byte offset.
    ///
    /// Returns `None` if the line does not exist or the column lies past the
    /// end of the line (the terminating newline excluded).
    pub fn offset(&self, line_col: LineCol) -> Option<TextSize> {
        let line = line_col.line as usize;
        let start = *self.line_starts.get(line)?;
        let end = match self.line_starts.get(line + 1) {
            Some(next) => *next - TextSize::new(1),
            None => self.len,
        };
        let width = u32::from(end - start);
        (line_col.col <= width).then(|| start + TextSize::new(line_col.col))
    }

    /// Convert a byte range into a line/column span.
    pub fn span(&self, range: TextRange) -> Span {
        Span::new(
            self.line_col(range.start()).into(),
            self.line_col(range.end()).into(),
        )
    }
}
