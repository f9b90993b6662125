//! # svindex
//!
//! Concrete-syntax-tree matching and a project-wide symbol table for
//! SystemVerilog tooling.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! ide       → go-to-definition, open buffers, AnalysisHost
//!   ↓
//! hir       → Symbol table and the per-file symbol table builder
//!   ↓
//! project   → Source files, include-path resolution, lazy parsing
//!   ↓
//! syntax    → SyntaxFile, slot accessors, pattern matcher, tree search
//!   ↓
//! parser    → Logos lexer, recursive-descent parser, syntax kinds
//!   ↓
//! base      → Primitives (FileId, LineIndex, Error, URIs)
//! ```

// ============================================================================
// MODULES (dependency order: base → parser → syntax → project → hir → ide)
// ============================================================================

/// Foundation types: FileId, LineIndex, errors, URI conversion
pub mod base;

/// Parser: Logos lexer, recursive-descent parser, syntax kinds
pub mod parser;

/// Syntax: parsed files, slot accessors, matcher and search engine
pub mod syntax;

/// Project management: source files, include paths, discovery
pub mod project;

/// Symbol table and symbol table builder
pub mod hir;

/// IDE features: definition lookup, buffer tracking
pub mod ide;

// Re-export foundation types
pub use base::{Error, FileId, LineCol, LineIndex, Position, Result, Span, TextRange, TextSize};
