//! Diagnostics: non-fatal problems found while indexing.
//!
//! Indexing never aborts on a bad declaration or a broken include; it records
//! a [`Diagnostic`] and carries on with the rest of the file.

use std::sync::Arc;

use crate::base::{FileId, Span};

// ============================================================================
// DIAGNOSTIC TYPES
// ============================================================================

/// Severity level of a diagnostic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Severity {
    /// Part of the file could not be indexed
    Error,
    /// Indexed, but a declaration was ignored
    Warning,
}

/// A diagnostic message with location.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    /// The file containing this diagnostic.
    pub file: FileId,
    /// Start line (0-indexed).
    pub start_line: u32,
    /// Start column (0-indexed).
    pub start_col: u32,
    /// End line (0-indexed).
    pub end_line: u32,
    /// End column (0-indexed).
    pub end_col: u32,
    /// Severity level.
    pub severity: Severity,
    /// Error/warning code (e.g., "E0002").
    pub code: Option<Arc<str>>,
    /// The diagnostic message.
    pub message: Arc<str>,
    /// Optional related information.
    pub related: Vec<RelatedInfo>,
}

/// Related information for a diagnostic.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RelatedInfo {
    /// The file containing this info.
    pub file: FileId,
    /// Line number.
    pub line: u32,
    /// Column number.
    pub col: u32,
    /// The message.
    pub message: Arc<str>,
}

impl Diagnostic {
    /// Create a new error diagnostic.
    pub fn error(file: FileId, line: u32, col: u32, message: impl Into<Arc<str>>) -> Self {
        Self::new(Severity::Error, file, line, col, message)
    }


    fn new(
        severity: Severity,
        file: FileId,
        line: u32,
        col: u32,
        message: impl Into<Arc<str>>,
    ) -> Self {
        Self {
            file,
            start_line: line,
            start_col: col,
            end_line: line,
            end_col: col,
            severity,
            code: None,
            message: message.into(),
            related: Vec::new(),
        }
    }

    /// Error covering a whole line/column span
    pub fn error_at(file: FileId, span: Span, message: impl Into<Arc<str>>) -> Self {
        Self::error(file, span.start.line, span.start.column, message)
            .with_span(span.end.line, span.end.column)
    }

    /// Warning covering a whole line/column span
    pub fn warning_at(file: FileId, span: Span, message: impl Into<Arc<str>>) -> Self {
        Self::new(Severity::Warning, file, span.start.line, span.start.column, message)
            .with_span(span.end.line, span.end.column)
    }

    /// Set the span (range) for this diagnostic.
    pub fn with_span(mut self, end_line: u32, end_col: u32) -> Self {
        self.end_line = end_line;
        self.end_col = end_col;
        self
    }

    /// Set the error code.
    pub fn with_code(mut self, code: impl Into<Arc<str>>) -> Self {
        self.code = Some(code.into());
        self
    }

    /// Add related information.
    pub fn with_related(mut self, info: RelatedInfo) -> Self {
        self.related.push(info);
        self
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

// ============================================================================
// DIAGNOSTIC CODES
// ============================================================================

/// Diagnostic codes reported by the indexer.
///
/// ## Error Code Ranges
///
/// - **E0001-E0009**: Declarations (duplicates, syntax)
/// - **E0010-E0019**: Include expansion
pub mod codes {
    /// The file could not be parsed.
    pub const SYNTAX_ERROR: &str = "E0001";
    /// The file could not be read.
    pub const UNREADABLE_FILE: &str = "E0002";
    /// A scope already declares the name.
    pub const DUPLICATE_DEFINITION: &str = "E0004";

    /// An `` `include `` names no file on the include path.
    pub const INCLUDE_NOT_FOUND: &str = "E0010";
    /// An included file has syntax errors.
    pub const INCLUDE_PARSE_FAILED: &str = "E0011";
    /// A file includes itself, directly or not.
    pub const CIRCULAR_INCLUDE: &str = "E0012";
    /// Includes nest deeper than the expansion limit.
    pub const INCLUDE_TOO_DEEP: &str = "E0013";
}

// ============================================================================
// DIAGNOSTIC COLLECTOR
// ============================================================================

/// Collects diagnostics during indexing.
#[derive(Clone, Debug, Default)]
pub struct DiagnosticCollector {
    diagnostics: Vec<Diagnostic>,
}

impl DiagnosticCollector {
    /// Create a new empty collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a diagnostic.
    pub fn add(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    /// Add a duplicate definition warning pointing back at the kept one.
    pub fn duplicate_definition(
        &mut self,
        file: FileId,
        span: Span,
        name: &str,
        scope: &str,
        previous: Option<(FileId, Span)>,
    ) {
        let mut diag = Diagnostic::warning_at(
            file,
            span,
            format!("duplicate definition: '{}' is already defined in {}", name, scope),
        )
        .with_code(codes::DUPLICATE_DEFINITION);
        if let Some((previous_file, previous_span)) = previous {
            diag = diag.with_related(RelatedInfo {
                file: previous_file,
                line: previous_span.start.line,
                col: previous_span.start.column,
                message: Arc::from(format!("previous definition of '{}'", name)),
            });
        }
        self.add(diag);
    }

    /// Add an error for an include that did not resolve.
    pub fn include_not_found(&mut self, file: FileId, span: Span, path: &str) {
        self.add(
            Diagnostic::error_at(file, span, format!("cannot find included file '{}'", path))
                .with_code(codes::INCLUDE_NOT_FOUND),
        );
    }

    /// Add an error for an included file with syntax errors.
    pub fn include_parse_failed(&mut self, file: FileId, span: Span, path: &str, errors: usize) {
        self.add(
            Diagnostic::error_at(
                file,
                span,
                format!("included file '{}' has {} syntax error(s)", path, errors),
            )
            .with_code(codes::INCLUDE_PARSE_FAILED),
        );
    }

    /// Add an error for an include cycle.
    pub fn circular_include(&mut self, file: FileId, span: Span, path: &str) {
        self.add(
            Diagnostic::error_at(file, span, format!("circular include of '{}'", path))
                .with_code(codes::CIRCULAR_INCLUDE),
        );
    }

    /// Add an error for includes nested too deeply.
    pub fn include_too_deep(&mut self, file: FileId, span: Span, path: &str, limit: usize) {
        self.add(
            Diagnostic::error_at(
                file,
                span,
                format!("include of '{}' exceeds the nesting limit of {}", path, limit),
            )
            .with_code(codes::INCLUDE_TOO_DEEP),
        );
    }

    /// Get all collected diagnostics.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Take all diagnostics, consuming the collector.
    pub fn finish(self) -> Vec<Diagnostic> {
        self.diagnostics
    }

    /// Count errors.
    pub fn error_count(&self) -> usize {
        self.diagnostics.iter().filter(|d| d.is_error()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::base::Position;

    fn span(line: u32, start: u32, end: u32) -> Span {
        Span::new(Position::new(line, start), Position::new(line, end))
    }

    #[test]
    fn test_duplicate_has_related_info() {
        let mut collector = DiagnosticCollector::new();
        collector.duplicate_definition(
            FileId::new(1),
            span(3, 7, 8),
            "m",
            "$root",
            Some((FileId::new(0), span(0, 7, 8))),
        );
        let diag = &collector.diagnostics()[0];
        assert_eq!(diag.code.as_deref(), Some(codes::DUPLICATE_DEFINITION));
        assert_eq!((diag.start_line, diag.start_col, diag.end_col), (3, 7, 8));
        assert_eq!(diag.related[0].file, FileId::new(0));
        assert_eq!(diag.severity, Severity::Warning);
        assert_eq!(collector.error_count(), 0);
    }

    #[test]
    fn test_include_problems_are_errors() {
        let mut collector = DiagnosticCollector::new();
        collector.include_not_found(FileId::new(0), span(1, 2, 20), "defs.svh");
        collector.circular_include(FileId::new(0), span(2, 2, 20), "a.svh");
        assert_eq!(collector.error_count(), 2);
        assert!(collector.diagnostics().iter().all(Diagnostic::is_error));
    }
}
