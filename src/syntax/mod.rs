//! Syntax tree access: the parsed file wrapper, soft-failure slot
//! accessors, structural patterns and pre-order search.
//!
//! Everything that reads a tree goes through [`tree`] so that an absent or
//! unexpected child is always a `None`, never a panic.

pub mod declarations;
pub mod file;
pub mod matcher;
pub mod search;
pub mod tree;

pub use file::SyntaxFile;
pub use matcher::{Captures, Pattern};
pub use search::{ContextMatch, Match, search, search_iter, search_with_context};
pub use tree::{slot, subtree, subtree_as_node, subtree_as_token};

// Re-export Position and Span from base for backwards compatibility
pub use crate::base::{Position, Span};
