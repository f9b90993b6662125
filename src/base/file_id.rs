//! File identifiers.

use std::fmt;

/// Index of a source file tracked by a [`Project`](crate::project::Project).
///
/// Ids are dense and stable for the lifetime of the project that issued
/// them; a project reset invalidates every id it handed out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FileId(u32);

impl FileId {
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    /// Position of the file in its project's arena.
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl From<usize> for FileId {
    fn from(index: usize) -> Self {
        Self(index as u32)
    }
}

impl fmt::Display for FileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "file#{}", self.0)
    }
}
