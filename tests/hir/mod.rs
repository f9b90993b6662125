//! Symbol table tests
//!
//! Tests for:
//! - Building the table from several files
//! - Replacing one file's contributions
//! - Diagnostics reported while indexing

pub mod tests_symbol_table;
