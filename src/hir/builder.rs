//! Per-file symbol table builder.
//!
//! [`index_file`] replaces everything one file contributed to the table:
//! it removes the file's previous symbols, runs the declaration battery over
//! the file's tree and inserts one node per declaration under the scope the
//! declaration is nested in. `` `include `` directives are expanded in place,
//! so declarations of an included file land in the including scope.

use rustc_hash::FxHashMap;
use smol_str::SmolStr;
use tracing::{debug, trace, warn};

use super::diagnostics::{Diagnostic, DiagnosticCollector, codes};
use super::patterns::{DeclarationKind, DeclarationPatterns};
use super::symbol_table::{PackageImport, SymbolId, SymbolInfo, SymbolKind, SymbolMetadata, SymbolTable};
use crate::base::constants::MAX_INCLUDE_DEPTH;
use crate::base::{Error, FileId, LineIndex, Span, TextRange};
use crate::parser::{SyntaxKind, SyntaxNode, SyntaxToken};
use crate::project::Project;
use crate::syntax::declarations as decl;
use crate::syntax::{ContextMatch, SyntaxFile, search_with_context};

/// Syntax kinds that open a new scope in the table
const SCOPE_KINDS: &[SyntaxKind] = &[
    SyntaxKind::MODULE_DECLARATION,
    SyntaxKind::INTERFACE_DECLARATION,
    SyntaxKind::PACKAGE_DECLARATION,
    SyntaxKind::CLASS_DECLARATION,
    SyntaxKind::FUNCTION_DECLARATION,
    SyntaxKind::TASK_DECLARATION,
];

/// Index one file into `table`, replacing whatever it contributed before.
///
/// The file is parsed on demand. A file that does not parse contributes
/// nothing; its syntax errors come back as diagnostics. Problems with single
/// declarations or includes are reported the same way and never stop the
/// rest of the file from being indexed.
pub fn index_file(
    file: FileId,
    table: &mut SymbolTable,
    project: &mut Project,
    patterns: &DeclarationPatterns,
) -> Vec<Diagnostic> {
    let removed = table.remove_contributions(file);
    project.clear_includes(file);
    if removed > 0 {
        trace!(file = %file, removed, "removed previous contributions");
    }

    let mut collector = DiagnosticCollector::new();
    if let Err(err) = project.parse(file) {
        report_unparsable(file, project, err, &mut collector);
        return collector.finish();
    }
    let Some(syntax) = project.file(file).and_then(|f| f.syntax()).cloned() else {
        return collector.finish();
    };

    let before = table.len();
    let mut builder = Builder {
        table,
        project,
        patterns,
        contributor: file,
        include_stack: vec![file],
        collector,
    };
    let root_scope = builder.table.root();
    builder.index_tree(file, &syntax, root_scope);
    let Builder {
        table, collector, ..
    } = builder;

    debug!(
        file = %file,
        symbols = table.len().saturating_sub(before),
        diagnostics = collector.diagnostics().len(),
        errors = collector.error_count(),
        "indexed file"
    );
    collector.finish()
}

fn report_unparsable(
    file: FileId,
    project: &Project,
    err: Error,
    collector: &mut DiagnosticCollector,
) {
    match err {
        Error::ParseFailed { path, diagnostics } => {
            debug!(path = %path.display(), errors = diagnostics.len(), "not indexing unparsable file");
            let index = project
                .file(file)
                .and_then(|f| f.contents())
                .map(LineIndex::new);
            for error in diagnostics {
                let span = index
                    .as_ref()
                    .map(|index| index.span(error.range))
                    .unwrap_or_else(|| Span::from_coords(0, 0, 0, 0));
                collector.add(
                    Diagnostic::error_at(file, span, error.message).with_code(codes::SYNTAX_ERROR),
                );
            }
        }
        other => {
            warn!(file = %file, "cannot index file: {}", other);
            collector.add(
                Diagnostic::error(file, 0, 0, other.to_string()).with_code(codes::UNREADABLE_FILE),
            );
        }
    }
}

struct Builder<'a> {
    table: &'a mut SymbolTable,
    project: &'a mut Project,
    patterns: &'a DeclarationPatterns,
    contributor: FileId,
    /// Files whose trees are being walked, outermost first
    include_stack: Vec<FileId>,
    collector: DiagnosticCollector,
}

/// A battery hit, positioned for document-order merging
struct Hit {
    kind: DeclarationKind,
    found: ContextMatch,
}

impl Hit {
    fn node(&self) -> Option<SyntaxNode> {
        self.found.element.as_node().cloned()
    }

    fn order_key(&self) -> (u32, usize) {
        (u32::from(self.found.element.text_range().start()), self.found.depth())
    }
}

impl Builder<'_> {
    /// Index the declarations of one tree. `origin` is the file the tree was
    /// parsed from and `base_scope` receives declarations that are not nested
    /// in any scope of the tree.
    fn index_tree(&mut self, origin: FileId, syntax: &SyntaxFile, base_scope: SymbolId) {
        let root = syntax.root();
        let mut hits: Vec<Hit> = Vec::new();
        for entry in self.patterns.iter() {
            hits.extend(
                search_with_context(&root, &entry.pattern)
                    .into_iter()
                    .filter(|found| entry.accepts(found))
                    .map(|found| Hit {
                        kind: entry.kind,
                        found,
                    }),
            );
        }
        // stable: equal keys keep battery order
        hits.sort_by_key(Hit::order_key);

        let mut scopes: FxHashMap<SyntaxNode, SymbolId> = FxHashMap::default();
        for hit in hits {
            let Some(node) = hit.node() else {
                continue;
            };
            let Some(scope) = enclosing_scope(&node, &scopes, base_scope) else {
                trace!(kind = ?hit.kind, "skipping declaration in an unindexed scope");
                continue;
            };

            match hit.kind {
                DeclarationKind::Include => self.expand_include(origin, syntax, &node, scope),
                DeclarationKind::Import => self.record_import(&node, scope),
                kind => {
                    let Some(name) = hit.found.captures.token("name") else {
                        continue;
                    };
                    if let Some(id) = self.declare(origin, syntax, kind, &node, &name, scope) {
                        if SCOPE_KINDS.contains(&node.kind()) {
                            scopes.insert(node, id);
                        }
                    }
                }
            }
        }
    }

    /// Insert one declaration. Returns the node the declaration maps to,
    /// or `None` if it was rejected.
    fn declare(
        &mut self,
        origin: FileId,
        syntax: &SyntaxFile,
        kind: DeclarationKind,
        node: &SyntaxNode,
        name: &SyntaxToken,
        scope: SymbolId,
    ) -> Option<SymbolId> {
        let symbol_kind = kind.symbol_kind()?;
        let key = SmolStr::from(name.text());
        let info = SymbolInfo::new(origin, name.text_range(), self.contributor)
            .with_metadata(metadata(kind, node));

        if let Some(existing) = self.table.child(scope, &key) {
            return self.redeclare(origin, syntax, existing, symbol_kind, info, &key, scope);
        }

        match self.table.insert(scope, key.clone(), symbol_kind, info) {
            Ok(id) => Some(id),
            Err(err) => {
                warn!(name = %key, "failed to insert symbol: {}", err);
                None
            }
        }
    }

    /// A scope already holds `name`: upgrade a forward declaration, merge a
    /// port with its net or variable declaration, or report a duplicate.
    #[allow(clippy::too_many_arguments)]
    fn redeclare(
        &mut self,
        origin: FileId,
        syntax: &SyntaxFile,
        existing: SymbolId,
        kind: SymbolKind,
        info: SymbolInfo,
        name: &str,
        scope: SymbolId,
    ) -> Option<SymbolId> {
        let previous = self.table.get(existing)?;
        let previous_kind = previous.kind();
        let previous_info = previous.info().clone();

        if previous_info.metadata.is_forward && !info.metadata.is_forward {
            trace!(name, "completing forward declaration");
            if let Err(err) = self.table.upgrade(existing, kind, info) {
                warn!(name, "failed to upgrade forward declaration: {}", err);
                return None;
            }
            return Some(existing);
        }
        if info.metadata.is_forward {
            // forward typedef after the definition
            return None;
        }
        if previous_kind == SymbolKind::Port
            && matches!(kind, SymbolKind::Net | SymbolKind::Variable)
            && previous_info.contributor == info.contributor
        {
            // `input a; wire a;`
            return None;
        }

        let span = span_of(syntax, info.range);
        let previous_location = match (previous_info.file_origin, previous_info.range) {
            (Some(file), Some(range)) => self
                .project
                .file(file)
                .and_then(|f| f.syntax())
                .map(|s| (file, s.span(range))),
            _ => None,
        };
        let scope_name = self.table.qualified_name(scope);
        debug!(name, scope = %scope_name, "duplicate declaration");
        self.collector
            .duplicate_definition(origin, span, name, &scope_name, previous_location);
        None
    }

    fn record_import(&mut self, node: &SyntaxNode, scope: SymbolId) {
        let Some((package, item)) = decl::import_item(node) else {
            return;
        };
        let import = PackageImport {
            package: package.text().into(),
            item: item.map(|t| SmolStr::from(t.text())),
            contributor: self.contributor,
        };
        if let Err(err) = self.table.add_import(scope, import) {
            warn!("failed to record import: {}", err);
        }
    }

    fn expand_include(
        &mut self,
        origin: FileId,
        syntax: &SyntaxFile,
        directive: &SyntaxNode,
        scope: SymbolId,
    ) {
        let Some(path) = decl::include_path(directive) else {
            return;
        };
        let span = syntax.span(directive.text_range());

        if self.include_stack.len() > MAX_INCLUDE_DEPTH {
            warn!(path, "include nesting limit reached");
            self.collector
                .include_too_deep(origin, span, &path, MAX_INCLUDE_DEPTH);
            return;
        }
        let included = match self.project.open_reference(&path) {
            Ok(id) => id,
            Err(err) => {
                debug!(path, "unresolved include: {}", err);
                self.collector.include_not_found(origin, span, &path);
                return;
            }
        };
        // recorded even when the header fails below, so fixing it re-indexes the includer
        self.project.record_include(self.contributor, included);
        if self.include_stack.contains(&included) {
            warn!(path, "include cycle");
            self.collector.circular_include(origin, span, &path);
            return;
        }
        match self.project.parse(included) {
            Ok(()) => {}
            Err(Error::ParseFailed { diagnostics, .. }) => {
                self.collector
                    .include_parse_failed(origin, span, &path, diagnostics.len());
                return;
            }
            Err(err) => {
                debug!(path, "unreadable include: {}", err);
                self.collector.include_not_found(origin, span, &path);
                return;
            }
        }
        let Some(included_syntax) = self.project.file(included).and_then(|f| f.syntax()).cloned()
        else {
            return;
        };

        trace!(path, file = %included, "expanding include");
        self.include_stack.push(included);
        self.index_tree(included, &included_syntax, scope);
        self.include_stack.pop();
    }
}

fn span_of(syntax: &SyntaxFile, range: Option<TextRange>) -> Span {
    range
        .map(|range| syntax.span(range))
        .unwrap_or_else(|| Span::from_coords(0, 0, 0, 0))
}

/// The table scope a declaration belongs to: the node of its nearest
/// enclosing scope construct, or `base_scope` when it has none. `None` if
/// the enclosing construct itself was not indexed.
fn enclosing_scope(
    node: &SyntaxNode,
    scopes: &FxHashMap<SyntaxNode, SymbolId>,
    base_scope: SymbolId,
) -> Option<SymbolId> {
    match node
        .ancestors()
        .skip(1)
        .find(|ancestor| SCOPE_KINDS.contains(&ancestor.kind()))
    {
        Some(ancestor) => scopes.get(&ancestor).copied(),
        None => Some(base_scope),
    }
}

fn metadata(kind: DeclarationKind, node: &SyntaxNode) -> SymbolMetadata {
    let mut metadata = SymbolMetadata::default();
    let text = |s: String| SmolStr::from(s);
    match kind {
        DeclarationKind::Class => {
            metadata.base_class = decl::class_base(node).map(text);
        }
        DeclarationKind::Function => {
            metadata.declared_type = decl::function_return_type(node).map(text);
        }
        DeclarationKind::Parameter => {
            if let Some(declaration) = node.parent().and_then(|list| list.parent()) {
                metadata.declared_type = decl::param_type(&declaration).map(text);
                metadata.is_localparam = decl::is_localparam(&declaration);
            }
        }
        DeclarationKind::TypeAlias => {
            metadata.declared_type = decl::typedef_type(node).map(text);
            metadata.is_forward = decl::is_forward_typedef(node);
        }
        DeclarationKind::Variable | DeclarationKind::Net | DeclarationKind::Genvar => {
            metadata.declared_type = node
                .parent()
                .and_then(|list| decl::declarator_list_type(&list))
                .map(text);
        }
        DeclarationKind::ModulePort => {
            if let Some(list) = node.parent() {
                metadata.declared_type = decl::declarator_list_type(&list).map(text);
                metadata.direction = list
                    .parent()
                    .and_then(|declaration| decl::port_direction(&declaration))
                    .map(|t| SmolStr::from(t.text()));
            }
        }
        DeclarationKind::Port => {
            metadata.declared_type = decl::port_type(node).map(text);
            metadata.direction = decl::port_direction(node).map(|t| SmolStr::from(t.text()));
        }
        DeclarationKind::Instance => {
            metadata.instance_of = decl::instance_type(node).map(|t| SmolStr::from(t.text()));
        }
        DeclarationKind::Module
        | DeclarationKind::Interface
        | DeclarationKind::Package
        | DeclarationKind::Task
        | DeclarationKind::EnumConstant
        | DeclarationKind::Import
        | DeclarationKind::Include => {}
    }
    metadata
}
