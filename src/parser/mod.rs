//! Rowan-based parser for SystemVerilog
//!
//! This module provides a lossless parser using:
//! - **logos** for fast lexing
//! - **rowan** for the CST (Concrete Syntax Tree)
//!
//! ## Architecture
//!
//! ```text
//! Source Text
//!     ↓
//! Lexer (logos) → Tokens with SyntaxKind
//!     ↓
//! Parser → GreenNode tree (immutable, cheap to clone)
//!     ↓
//! SyntaxNode (rowan) → CST with parent pointers
//!     ↓
//! Pattern matching → declarations → symbol table
//! ```
//!
//! The grammar covers declarations in full (modules, interfaces, packages,
//! classes, subroutines, parameters, typedefs, data, nets, ports, instances)
//! and keeps everything else as opaque items. Optional elements that are
//! missing are recorded as zero-width `ABSENT` nodes, so a construct always
//! has the same number of slots.

#[allow(clippy::module_inception)]
mod parser;

mod grammar;
mod lexer;
mod syntax_kind;

pub use crate::base::SyntaxError;
pub use lexer::{Lexer, Token, tokenize};
pub use parser::{Parse, parse};
pub use syntax_kind::{
    SvLanguage, SyntaxElement, SyntaxKind, SyntaxNode, SyntaxNodeChildren, SyntaxToken,
};

/// Re-export rowan types for convenience
pub use rowan::{GreenNode, TextRange, TextSize};
