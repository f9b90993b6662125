//! The project-wide symbol table.
//!
//! One hierarchical namespace: the anonymous root holds top-level
//! declarations (modules, interfaces, packages, classes, ...), and every
//! scope holds its members keyed by name in declaration order. Nodes live in
//! an arena and are addressed by [`SymbolId`]. Freed slots are reused; a
//! slot's generation changes on every reuse, so ids of removed nodes never
//! resolve again.

use std::fmt::{self, Write as _};

use indexmap::IndexMap;
use rustc_hash::FxHashMap;
use smol_str::SmolStr;

use crate::base::{Error, FileId, Result, TextRange};

/// Slot and generation of a node in a [`SymbolTable`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SymbolId {
    index: u32,
    generation: u32,
}

impl SymbolId {
    pub fn index(self) -> usize {
        self.index as usize
    }
}

impl fmt::Display for SymbolId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}.{}", self.index, self.generation)
    }
}

// ============================================================================
// SYMBOL KINDS
// ============================================================================

/// What a symbol table node declares.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SymbolKind {
    Root,
    Module,
    Interface,
    Package,
    Class,
    Function,
    Task,
    Parameter,
    TypeAlias,
    EnumConstant,
    Variable,
    Net,
    Port,
    Instance,
    Genvar,
}

impl SymbolKind {
    /// Kinds whose members are nested below them
    pub fn is_scope(self) -> bool {
        matches!(
            self,
            Self::Root
                | Self::Module
                | Self::Interface
                | Self::Package
                | Self::Class
                | Self::Function
                | Self::Task
        )
    }

    /// Get a display name for this kind.
    pub fn display(&self) -> &'static str {
        match self {
            Self::Root => "root",
            Self::Module => "module",
            Self::Interface => "interface",
            Self::Package => "package",
            Self::Class => "class",
            Self::Function => "function",
            Self::Task => "task",
            Self::Parameter => "parameter",
            Self::TypeAlias => "typedef",
            Self::EnumConstant => "enum constant",
            Self::Variable => "variable",
            Self::Net => "net",
            Self::Port => "port",
            Self::Instance => "instance",
            Self::Genvar => "genvar",
        }
    }
}

// ============================================================================
// SYMBOL PAYLOAD
// ============================================================================

/// Kind-specific details of a declaration. Fields that do not apply to a
/// kind stay empty.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SymbolMetadata {
    /// Declared type as written, whitespace-normalized (`logic[7:0]`)
    pub declared_type: Option<SmolStr>,
    /// Port direction keyword (`input`, `output`, `inout`, `ref`)
    pub direction: Option<SmolStr>,
    /// Declared with `localparam`
    pub is_localparam: bool,
    /// Class named in `extends`
    pub base_class: Option<SmolStr>,
    /// Module, interface or class an instance is of
    pub instance_of: Option<SmolStr>,
    /// Introduced by a forward typedef and not yet defined
    pub is_forward: bool,
}

/// Where a symbol was declared and who put it in the table.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SymbolInfo {
    /// File whose text holds the declaration. `None` only for the root.
    pub file_origin: Option<FileId>,
    /// Range of the defining identifier within `file_origin`
    pub range: Option<TextRange>,
    /// File whose indexing pass inserted the symbol. Differs from
    /// `file_origin` for declarations pulled in through `` `include ``.
    pub contributor: Option<FileId>,
    pub metadata: SymbolMetadata,
}

impl SymbolInfo {
    pub fn new(file_origin: FileId, range: TextRange, contributor: FileId) -> Self {
        Self {
            file_origin: Some(file_origin),
            range: Some(range),
            contributor: Some(contributor),
            metadata: SymbolMetadata::default(),
        }
    }

    pub fn with_metadata(mut self, metadata: SymbolMetadata) -> Self {
        self.metadata = metadata;
        self
    }
}

/// A package import recorded on the scope it appears in.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PackageImport {
    pub package: SmolStr,
    /// Imported item, `None` for a wildcard import
    pub item: Option<SmolStr>,
    pub contributor: FileId,
}

/// One node of the table.
#[derive(Clone, Debug)]
pub struct Symbol {
    name: Option<SmolStr>,
    kind: SymbolKind,
    parent: Option<SymbolId>,
    children: IndexMap<SmolStr, SymbolId>,
    info: SymbolInfo,
    imports: Vec<PackageImport>,
}

impl Symbol {
    /// Key of the node in its parent; `None` for the root
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn kind(&self) -> SymbolKind {
        self.kind
    }

    pub fn parent(&self) -> Option<SymbolId> {
        self.parent
    }

    pub fn info(&self) -> &SymbolInfo {
        &self.info
    }

    pub fn imports(&self) -> &[PackageImport] {
        &self.imports
    }

    /// Children in declaration order
    pub fn children(&self) -> impl Iterator<Item = (&str, SymbolId)> {
        self.children.iter().map(|(name, id)| (name.as_str(), *id))
    }

    pub fn child(&self, name: &str) -> Option<SymbolId> {
        self.children.get(name).copied()
    }
}

// ============================================================================
// SYMBOL TABLE
// ============================================================================

#[derive(Clone, Debug, Default)]
struct Slot {
    generation: u32,
    symbol: Option<Symbol>,
}

/// Arena of [`Symbol`]s rooted at an anonymous root node.
#[derive(Clone, Debug)]
pub struct SymbolTable {
    slots: Vec<Slot>,
    /// Slots whose node was removed, ready for reuse
    free: Vec<u32>,
    live: usize,
    /// Nodes each file inserted or upgraded. Entries may be stale.
    contributions: FxHashMap<FileId, Vec<SymbolId>>,
    /// Scopes each file recorded imports on. Entries may be stale.
    importers: FxHashMap<FileId, Vec<SymbolId>>,
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::new()
    }
}

impl SymbolTable {
    pub fn new() -> Self {
        let root = Symbol {
            name: None,
            kind: SymbolKind::Root,
            parent: None,
            children: IndexMap::new(),
            info: SymbolInfo::default(),
            imports: Vec::new(),
        };
        Self {
            slots: vec![Slot {
                generation: 0,
                symbol: Some(root),
            }],
            free: Vec::new(),
            live: 1,
            contributions: FxHashMap::default(),
            importers: FxHashMap::default(),
        }
    }

    pub fn root(&self) -> SymbolId {
        SymbolId {
            index: 0,
            generation: 0,
        }
    }

    /// Number of live nodes, the root included
    pub fn len(&self) -> usize {
        self.live
    }

    /// Whether the table holds nothing but the root
    pub fn is_empty(&self) -> bool {
        self.live == 1
    }

    /// Number of arena slots, live or free. Never exceeds the largest number
    /// of nodes the table held at once.
    pub fn allocated(&self) -> usize {
        self.slots.len()
    }

    pub fn get(&self, id: SymbolId) -> Option<&Symbol> {
        self.slots
            .get(id.index())
            .filter(|slot| slot.generation == id.generation)
            .and_then(|slot| slot.symbol.as_ref())
    }

    fn get_mut(&mut self, id: SymbolId) -> Option<&mut Symbol> {
        self.slots
            .get_mut(id.index())
            .filter(|slot| slot.generation == id.generation)
            .and_then(|slot| slot.symbol.as_mut())
    }

    fn alloc(&mut self, symbol: Symbol) -> SymbolId {
        self.live += 1;
        if let Some(index) = self.free.pop() {
            let slot = &mut self.slots[index as usize];
            slot.symbol = Some(symbol);
            return SymbolId {
                index,
                generation: slot.generation,
            };
        }
        let index = self.slots.len() as u32;
        self.slots.push(Slot {
            generation: 0,
            symbol: Some(symbol),
        });
        SymbolId {
            index,
            generation: 0,
        }
    }

    fn release(&mut self, id: SymbolId) -> Option<Symbol> {
        let slot = self
            .slots
            .get_mut(id.index())
            .filter(|slot| slot.generation == id.generation)?;
        let symbol = slot.symbol.take()?;
        slot.generation = slot.generation.wrapping_add(1);
        self.free.push(id.index);
        self.live -= 1;
        Some(symbol)
    }

    /// Look a child up by name
    pub fn child(&self, scope: SymbolId, name: &str) -> Option<SymbolId> {
        self.get(scope)?.child(name)
    }

    /// Follow a path of names from the root (`["p", "N"]` for `p::N`)
    pub fn lookup_path<'a>(&self, path: impl IntoIterator<Item = &'a str>) -> Option<SymbolId> {
        path.into_iter()
            .try_fold(self.root(), |scope, name| self.child(scope, name))
    }

    /// `::`-joined names from the root down to `id`
    pub fn qualified_name(&self, id: SymbolId) -> String {
        let mut names = Vec::new();
        let mut current = self.get(id);
        while let Some(symbol) = current {
            if let Some(name) = symbol.name() {
                names.push(name);
            }
            current = symbol.parent.and_then(|parent| self.get(parent));
        }
        names.reverse();
        if names.is_empty() {
            "$root".to_string()
        } else {
            names.join("::")
        }
    }

    /// Add a named child to `scope`.
    ///
    /// Fails with [`Error::DuplicateDeclaration`] if the scope already has a
    /// child with that name; the existing child is left untouched.
    pub fn insert(
        &mut self,
        scope: SymbolId,
        name: impl Into<SmolStr>,
        kind: SymbolKind,
        info: SymbolInfo,
    ) -> Result<SymbolId> {
        let name = name.into();
        let scope_node = self
            .get(scope)
            .ok_or_else(|| Error::UnknownSymbol(scope.to_string()))?;
        if scope_node.children.contains_key(&name) {
            return Err(Error::duplicate(name.as_str(), self.qualified_name(scope)));
        }
        let contributor = info.contributor;
        let id = self.alloc(Symbol {
            name: Some(name.clone()),
            kind,
            parent: Some(scope),
            children: IndexMap::new(),
            info,
            imports: Vec::new(),
        });
        if let Some(parent) = self.get_mut(scope) {
            parent.children.insert(name, id);
        }
        if let Some(file) = contributor {
            self.contributions.entry(file).or_default().push(id);
        }
        Ok(id)
    }

    /// Turn a forward declaration into the real one, keeping its id and
    /// whatever was already nested below it.
    pub fn upgrade(&mut self, id: SymbolId, kind: SymbolKind, info: SymbolInfo) -> Result<()> {
        let symbol = self
            .get_mut(id)
            .ok_or_else(|| Error::UnknownSymbol(id.to_string()))?;
        let previous = symbol.info.contributor;
        let contributor = info.contributor;
        symbol.kind = kind;
        symbol.info = info;
        if let Some(file) = contributor.filter(|file| Some(*file) != previous) {
            self.contributions.entry(file).or_default().push(id);
        }
        Ok(())
    }

    /// Record a package import on `scope`
    pub fn add_import(&mut self, scope: SymbolId, import: PackageImport) -> Result<()> {
        let file = import.contributor;
        let symbol = self
            .get_mut(scope)
            .ok_or_else(|| Error::UnknownSymbol(scope.to_string()))?;
        symbol.imports.push(import);
        self.importers.entry(file).or_default().push(scope);
        Ok(())
    }

    /// Remove every symbol and import contributed by `file`, together with
    /// everything nested below a removed symbol. Returns the number of
    /// removed nodes.
    pub fn remove_contributions(&mut self, file: FileId) -> usize {
        let mut removed = 0;
        for id in self.contributions.remove(&file).unwrap_or_default() {
            // gone with an ancestor, or taken over by another file
            let Some(symbol) = self.get(id) else {
                continue;
            };
            if symbol.info.contributor != Some(file) {
                continue;
            }
            if let (Some(parent), Some(name)) = (symbol.parent, symbol.name.clone()) {
                if let Some(parent) = self.get_mut(parent) {
                    parent.children.shift_remove(&name);
                }
            }
            removed += self.drop_subtree(id);
        }

        for scope in self.importers.remove(&file).unwrap_or_default() {
            if let Some(symbol) = self.get_mut(scope) {
                symbol.imports.retain(|import| import.contributor != file);
            }
        }
        removed
    }

    fn drop_subtree(&mut self, id: SymbolId) -> usize {
        let mut stack = vec![id];
        let mut removed = 0;
        while let Some(id) = stack.pop() {
            if let Some(symbol) = self.release(id) {
                stack.extend(symbol.children.values().copied());
                removed += 1;
            }
        }
        removed
    }

    /// Live nodes in arena order
    pub fn iter(&self) -> impl Iterator<Item = (SymbolId, &Symbol)> {
        self.slots.iter().enumerate().filter_map(|(index, slot)| {
            let id = SymbolId {
                index: index as u32,
                generation: slot.generation,
            };
            slot.symbol.as_ref().map(|symbol| (id, symbol))
        })
    }

    /// Live nodes depth-first from the root: a node, then its children in
    /// declaration order.
    pub fn iter_depth_first(&self) -> impl Iterator<Item = (SymbolId, &Symbol)> {
        let mut stack = vec![self.root()];
        std::iter::from_fn(move || {
            let id = stack.pop()?;
            let symbol = self.get(id)?;
            stack.extend(symbol.children.values().rev().copied());
            Some((id, symbol))
        })
    }

    /// First node named `name` in depth-first order.
    ///
    /// Names are not unique across scopes; when several match, the one
    /// reached first wins.
    pub fn find_first_by_name(&self, name: &str) -> Option<SymbolId> {
        self.iter_depth_first()
            .find(|(_, symbol)| symbol.name() == Some(name))
            .map(|(id, _)| id)
    }

    /// Human-readable dump of the whole table, one node per line
    pub fn print_definitions(&self) -> String {
        let mut out = String::new();
        self.print_node(self.root(), 0, &mut out);
        out
    }

    fn print_node(&self, id: SymbolId, depth: usize, out: &mut String) {
        let Some(symbol) = self.get(id) else {
            return;
        };
        let indent = "  ".repeat(depth);
        let _ = write!(out, "{indent}{}", symbol.kind.display());
        if let Some(name) = symbol.name() {
            let _ = write!(out, " {name}");
        }
        if let (Some(file), Some(range)) = (symbol.info.file_origin, symbol.info.range) {
            let _ = write!(out, " @{file}:{}..{}", u32::from(range.start()), u32::from(range.end()));
        }
        let metadata = &symbol.info.metadata;
        if let Some(ty) = &metadata.declared_type {
            let _ = write!(out, " : {ty}");
        }
        if metadata.is_forward {
            out.push_str(" (forward)");
        }
        out.push('\n');
        for import in &symbol.imports {
            let item = import.item.as_deref().unwrap_or("*");
            let _ = writeln!(out, "{indent}  import {}::{item}", import.package);
        }
        for &child in symbol.children.values() {
            self.print_node(child, depth + 1, out);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::base::TextSize;

    fn info(file: u32, start: u32) -> SymbolInfo {
        let range = TextRange::at(TextSize::new(start), TextSize::new(1));
        SymbolInfo::new(FileId::new(file), range, FileId::new(file))
    }

    #[test]
    fn test_insert_and_lookup_path() {
        let mut table = SymbolTable::new();
        let p = table.insert(table.root(), "p", SymbolKind::Package, info(0, 8)).unwrap();
        let n = table.insert(p, "N", SymbolKind::Parameter, info(0, 20)).unwrap();
        assert_eq!(table.lookup_path(["p", "N"]), Some(n));
        assert_eq!(table.qualified_name(n), "p::N");
        assert_eq!(table.get(n).unwrap().parent(), Some(p));
        assert_eq!(table.len(), 3);
    }

    #[test]
    fn test_duplicate_keeps_first() {
        let mut table = SymbolTable::new();
        let first = table.insert(table.root(), "m", SymbolKind::Module, info(0, 7)).unwrap();
        let err = table
            .insert(table.root(), "m", SymbolKind::Module, info(1, 7))
            .unwrap_err();
        assert!(matches!(err, Error::DuplicateDeclaration { ref name, .. } if name == "m"));
        let kept = table.get(first).unwrap();
        assert_eq!(kept.info().file_origin, Some(FileId::new(0)));
    }

    #[test]
    fn test_first_match_is_depth_first() {
        let mut table = SymbolTable::new();
        let a = table.insert(table.root(), "a", SymbolKind::Module, info(0, 0)).unwrap();
        let inner = table.insert(a, "x", SymbolKind::Variable, info(0, 5)).unwrap();
        let b = table.insert(table.root(), "b", SymbolKind::Module, info(1, 0)).unwrap();
        table.insert(b, "x", SymbolKind::Variable, info(1, 5)).unwrap();
        assert_eq!(table.find_first_by_name("x"), Some(inner));
        assert_eq!(table.find_first_by_name("b"), Some(b));
        assert_eq!(table.find_first_by_name("nope"), None);
    }

    #[test]
    fn test_remove_contributions_drops_subtrees_and_imports() {
        let mut table = SymbolTable::new();
        let m = table.insert(table.root(), "m", SymbolKind::Module, info(0, 0)).unwrap();
        table.insert(m, "w", SymbolKind::Net, info(0, 5)).unwrap();
        table
            .add_import(
                table.root(),
                PackageImport {
                    package: "p".into(),
                    item: None,
                    contributor: FileId::new(0),
                },
            )
            .unwrap();
        let other = table.insert(table.root(), "o", SymbolKind::Module, info(1, 0)).unwrap();

        assert_eq!(table.remove_contributions(FileId::new(0)), 2);
        assert!(table.get(m).is_none());
        assert_eq!(table.find_first_by_name("w"), None);
        assert!(table.get(table.root()).unwrap().imports().is_empty());
        assert_eq!(table.find_first_by_name("o"), Some(other));
        assert_eq!(table.len(), 2);

        // the freed slot is reused under a new generation
        let again = table.insert(table.root(), "m", SymbolKind::Module, info(0, 0)).unwrap();
        assert_ne!(again, m);
        assert!(table.get(m).is_none());
        assert_eq!(table.allocated(), 4);
    }

    #[test]
    fn test_reinsertion_does_not_grow_the_arena() {
        let mut table = SymbolTable::new();
        let file = FileId::new(0);
        for _ in 0..100 {
            table.remove_contributions(file);
            let m = table.insert(table.root(), "m", SymbolKind::Module, info(0, 7)).unwrap();
            table.insert(m, "a", SymbolKind::Net, info(0, 15)).unwrap();
            table.insert(m, "b", SymbolKind::Net, info(0, 25)).unwrap();
            table
                .add_import(
                    m,
                    PackageImport {
                        package: "p".into(),
                        item: None,
                        contributor: file,
                    },
                )
                .unwrap();
        }
        assert_eq!(table.len(), 4);
        assert_eq!(table.allocated(), 4);
        let m = table.lookup_path(["m"]).unwrap();
        assert_eq!(table.get(m).unwrap().imports().len(), 1);
    }

    #[test]
    fn test_upgrade_moves_ownership_to_new_contributor() {
        let mut table = SymbolTable::new();
        let mut forward = info(0, 14);
        forward.metadata.is_forward = true;
        let c = table.insert(table.root(), "c", SymbolKind::TypeAlias, forward).unwrap();
        table.upgrade(c, SymbolKind::Class, info(1, 6)).unwrap();

        // the forward declaring file no longer owns the class
        assert_eq!(table.remove_contributions(FileId::new(0)), 0);
        assert!(table.get(c).is_some());
        assert_eq!(table.remove_contributions(FileId::new(1)), 1);
        assert!(table.get(c).is_none());
    }

    #[test]
    fn test_unknown_scope_is_an_error() {
        let mut table = SymbolTable::new();
        let m = table.insert(table.root(), "m", SymbolKind::Module, info(0, 7)).unwrap();
        table.remove_contributions(FileId::new(0));
        assert!(matches!(
            table.insert(m, "x", SymbolKind::Net, info(0, 9)),
            Err(Error::UnknownSymbol(_))
        ));
    }

    #[test]
    fn test_upgrade_keeps_id() {
        let mut table = SymbolTable::new();
        let mut forward = info(0, 14);
        forward.metadata.is_forward = true;
        let c = table.insert(table.root(), "c", SymbolKind::TypeAlias, forward).unwrap();
        table.upgrade(c, SymbolKind::Class, info(0, 30)).unwrap();
        let symbol = table.get(c).unwrap();
        assert_eq!(symbol.kind(), SymbolKind::Class);
        assert!(!symbol.info().metadata.is_forward);
    }

    #[test]
    fn test_print_definitions() {
        let mut table = SymbolTable::new();
        let p = table.insert(table.root(), "p", SymbolKind::Package, info(0, 8)).unwrap();
        let meta = SymbolMetadata {
            declared_type: Some("int".into()),
            ..SymbolMetadata::default()
        };
        table
            .insert(p, "N", SymbolKind::Parameter, info(0, 24).with_metadata(meta))
            .unwrap();
        assert_eq!(
            table.print_definitions(),
            "root\n  package p @file#0:8..9\n    parameter N @file#0:24..25 : int\n"
        );
    }
}
