//! Symbol table and the per-file symbol table builder.
//!
//! ## Key Types
//!
//! - [`SymbolTable`]: hierarchical namespace of every indexed declaration
//! - [`DeclarationPatterns`]: the declaration battery run over each file
//! - [`index_file`]: replace one file's contributions to the table
//! - [`Diagnostic`]: non-fatal problems found while indexing
//!
//! ## Flow
//!
//! ```text
//! Project::parse(file)          ← tree of one translation unit
//!     │
//!     ▼
//! search_with_context(battery)  ← declaration hits in document order
//!     │
//!     ▼
//! index_file                    ← insert under the enclosing scope,
//!     │                           expanding `include directives
//!     ▼
//! SymbolTable                   ← queried by name for definitions
//! ```

mod builder;
mod diagnostics;
mod patterns;
mod symbol_table;

pub use builder::index_file;
pub use diagnostics::{Diagnostic, DiagnosticCollector, RelatedInfo, Severity, codes};
pub use patterns::{DeclarationKind, DeclarationPattern, DeclarationPatterns};
pub use symbol_table::{
    PackageImport, Symbol, SymbolId, SymbolInfo, SymbolKind, SymbolMetadata, SymbolTable,
};
