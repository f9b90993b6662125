//! Go-to-definition implementation.

use std::path::PathBuf;

use smol_str::SmolStr;
use tracing::trace;

use crate::base::{Error, FileId, LineCol, Span, path_to_uri};
use crate::hir::{SymbolKind, SymbolTable};
use crate::project::Project;
use crate::syntax::SyntaxFile;

/// A definition site.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Location {
    /// `file://` URI of the file holding the definition.
    pub uri: String,
    /// Canonical path of that file.
    pub path: PathBuf,
    /// The file in the project.
    pub file: FileId,
    /// Line/column range of the defining identifier (0-indexed).
    pub span: Span,
    /// The symbol kind.
    pub kind: SymbolKind,
    /// The symbol name.
    pub name: SmolStr,
}

/// Find the definition of the identifier under the cursor.
///
/// # Arguments
/// * `table` - The merged symbol table to search
/// * `project` - The project owning the files the table points into
/// * `buffer` - The parsed text the cursor is in
/// * `position` - Cursor line and byte column (0-indexed)
///
/// # Returns
/// The first node named like the identifier in depth-first table order, or
/// `None` if the cursor is not on an identifier, nothing has that name, or
/// the defining file is no longer parsed.
pub fn find_definition(
    table: &SymbolTable,
    project: &Project,
    buffer: &SyntaxFile,
    position: LineCol,
) -> Option<Location> {
    let token = buffer.token_at(position)?;
    if !token.kind().is_identifier() {
        trace!(kind = ?token.kind(), "cursor is not on an identifier");
        return None;
    }
    let name = token.text();

    let Some(id) = table.find_first_by_name(name) else {
        trace!("{}", Error::SymbolNotFound(name.to_string()));
        return None;
    };
    let symbol = table.get(id)?;
    let info = symbol.info();
    let (file, range) = (info.file_origin?, info.range?);

    let source = project.file(file)?;
    let Some(syntax) = source.syntax() else {
        trace!(name, file = %file, "defining file has no tree");
        return None;
    };
    if !syntax.contains_range(range) {
        return None;
    }

    Some(Location {
        uri: path_to_uri(source.path()),
        path: source.path().to_path_buf(),
        file,
        span: syntax.span(range),
        kind: symbol.kind(),
        name: SmolStr::from(name),
    })
}
