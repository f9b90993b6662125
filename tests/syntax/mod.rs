//! Syntax layer tests
//!
//! Tests for:
//! - Pattern matching over absent slots
//! - Capture rollback on failed alternatives
//! - Search order

pub mod tests_matcher;
