//! The battery of declaration patterns the indexer runs over every file.
//!
//! Each entry pairs a [`Pattern`] with the kind of declaration it finds and,
//! for patterns that match a node used by several constructs (a
//! `DECLARATOR` belongs to variables, nets, module ports, genvars and struct
//! members alike), the innermost enclosing node kinds a match must have.
//! Every pattern binds the declared identifier as `name`, except
//! [`DeclarationKind::Import`] (`package`) and [`DeclarationKind::Include`]
//! (`path`).

use crate::hir::SymbolKind;
use crate::parser::SyntaxKind::{self, *};
use crate::syntax::ContextMatch;
use crate::syntax::matcher::{Pattern, ident, token};

/// What a declaration pattern finds
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DeclarationKind {
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
    /// ANSI port or function/task port
    Port,
    /// Non-ANSI `input a, b;` in a module body
    ModulePort,
    Instance,
    Genvar,
    Import,
    Include,
}

impl DeclarationKind {
    /// Symbol kind the declaration adds; `None` for directives that add no
    /// node of their own
    pub fn symbol_kind(self) -> Option<SymbolKind> {
        Some(match self {
            Self::Module => SymbolKind::Module,
            Self::Interface => SymbolKind::Interface,
            Self::Package => SymbolKind::Package,
            Self::Class => SymbolKind::Class,
            Self::Function => SymbolKind::Function,
            Self::Task => SymbolKind::Task,
            Self::Parameter => SymbolKind::Parameter,
            Self::TypeAlias => SymbolKind::TypeAlias,
            Self::EnumConstant => SymbolKind::EnumConstant,
            Self::Variable => SymbolKind::Variable,
            Self::Net => SymbolKind::Net,
            Self::Port | Self::ModulePort => SymbolKind::Port,
            Self::Instance => SymbolKind::Instance,
            Self::Genvar => SymbolKind::Genvar,
            Self::Import | Self::Include => return None,
        })
    }
}

/// One entry of the battery
#[derive(Clone, Debug)]
pub struct DeclarationPattern {
    pub kind: DeclarationKind,
    pub pattern: Pattern,
    /// Innermost enclosing node kinds a match must have; empty for any
    pub context: &'static [SyntaxKind],
}

impl DeclarationPattern {
    fn new(kind: DeclarationKind, pattern: Pattern) -> Self {
        Self {
            kind,
            pattern,
            context: &[],
        }
    }

    fn within(mut self, context: &'static [SyntaxKind]) -> Self {
        self.context = context;
        self
    }

    /// Whether a search hit is in a context this entry accepts
    pub fn accepts(&self, found: &ContextMatch) -> bool {
        found.context_ends_with(self.context)
    }
}

/// The full battery. Build it once and share it across indexing passes.
#[derive(Clone, Debug)]
pub struct DeclarationPatterns {
    patterns: Vec<DeclarationPattern>,
}

impl Default for DeclarationPatterns {
    fn default() -> Self {
        Self::new()
    }
}

impl DeclarationPatterns {
    pub fn new() -> Self {
        use DeclarationKind as K;

        let name = || ident().bind("name");
        let declarator = || Pattern::node(DECLARATOR).slot(0, name());

        let patterns = vec![
            DeclarationPattern::new(
                K::Module,
                Pattern::node(MODULE_DECLARATION).slot(0, Pattern::node(MODULE_HEADER).slot(2, name())),
            ),
            DeclarationPattern::new(
                K::Interface,
                Pattern::node(INTERFACE_DECLARATION)
                    .slot(0, Pattern::node(INTERFACE_HEADER).slot(2, name())),
            ),
            DeclarationPattern::new(K::Package, Pattern::node(PACKAGE_DECLARATION).slot(2, name())),
            DeclarationPattern::new(
                K::Class,
                Pattern::node(CLASS_DECLARATION).slot(0, Pattern::node(CLASS_HEADER).slot(3, name())),
            ),
            DeclarationPattern::new(
                K::Function,
                Pattern::node(FUNCTION_DECLARATION)
                    .slot(0, Pattern::node(FUNCTION_HEADER).slot(4, name())),
            ),
            DeclarationPattern::new(
                K::Task,
                Pattern::node(TASK_DECLARATION).slot(0, Pattern::node(TASK_HEADER).slot(3, name())),
            ),
            DeclarationPattern::new(K::Parameter, Pattern::node(PARAM_ASSIGNMENT).slot(0, name()))
                .within(&[PARAM_DECLARATION, PARAM_ASSIGNMENT_LIST]),
            DeclarationPattern::new(K::TypeAlias, Pattern::node(TYPE_DECLARATION).slot(2, name())),
            DeclarationPattern::new(K::EnumConstant, Pattern::node(ENUM_NAME).slot(0, name())),
            DeclarationPattern::new(K::Variable, declarator())
                .within(&[DATA_DECLARATION, DECLARATOR_LIST]),
            DeclarationPattern::new(K::Net, declarator()).within(&[NET_DECLARATION, DECLARATOR_LIST]),
            DeclarationPattern::new(K::Port, Pattern::node(PORT_DECLARATION).slot(3, name())),
            DeclarationPattern::new(K::ModulePort, declarator())
                .within(&[MODULE_PORT_DECLARATION, DECLARATOR_LIST]),
            DeclarationPattern::new(K::Instance, Pattern::node(INSTANCE).slot(0, name())),
            DeclarationPattern::new(K::Genvar, declarator())
                .within(&[GENVAR_DECLARATION, DECLARATOR_LIST]),
            DeclarationPattern::new(
                K::Import,
                Pattern::node(IMPORT_ITEM).slot(0, ident().bind("package")),
            ),
            DeclarationPattern::new(
                K::Include,
                Pattern::node(INCLUDE_DIRECTIVE).slot(1, token(STRING).bind("path")),
            ),
        ];
        Self { patterns }
    }

    pub fn iter(&self) -> impl Iterator<Item = &DeclarationPattern> {
        self.patterns.iter()
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}
