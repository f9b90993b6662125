//! IDE feature tests
//!
//! Tests for:
//! - Go to definition, within and across files
//! - Buffer edits and re-indexing
//! - Batch indexing of a project

pub mod tests_analysis;
pub mod tests_goto;
