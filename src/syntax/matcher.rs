//! Structural patterns over the CST.
//!
//! A [`Pattern`] describes a shape: a node of some kind whose slots match
//! sub-patterns, a token of some kind, "something anywhere below", and
//! alternatives or conjunctions of those. Any pattern can bind the element it
//! matched to a name. Patterns hold no state and can be shared across trees
//! and threads.
//!
//! ```
//! use svindex::parser::{SyntaxKind, parse};
//! use svindex::syntax::matcher::{Pattern, ident};
//!
//! let pattern = Pattern::node(SyntaxKind::MODULE_DECLARATION)
//!     .slot(0, Pattern::node(SyntaxKind::MODULE_HEADER).slot(2, ident().bind("name")));
//! let root = parse("module top; endmodule").syntax();
//! let module = root.first_child().unwrap();
//! let captures = pattern.matches(&module.into()).unwrap();
//! assert_eq!(captures.token("name").unwrap().text(), "top");
//! ```

use smol_str::SmolStr;

use super::tree;
use crate::parser::{SyntaxElement, SyntaxKind, SyntaxNode, SyntaxToken};

/// A structural pattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Pattern {
    /// Matches any element
    Any,
    /// A token of the given kind
    Token(SyntaxKind),
    /// A node of the given kind whose listed slots match
    Node {
        kind: SyntaxKind,
        slots: Vec<(usize, Pattern)>,
    },
    /// A node of any kind whose slot matches
    Slot(usize, Box<Pattern>),
    /// Some element strictly below the matched one, first in pre-order
    Descendant(Box<Pattern>),
    /// The first alternative that matches
    AnyOf(Vec<Pattern>),
    /// Every pattern matches the same element
    AllOf(Vec<Pattern>),
    /// Binds the matched element to a name
    Bind(SmolStr, Box<Pattern>),
}

impl Pattern {
    pub fn node(kind: SyntaxKind) -> Self {
        Pattern::Node {
            kind,
            slots: Vec::new(),
        }
    }

    /// Constrain slot `index` of a node pattern. On any other pattern this
    /// wraps it so both must hold.
    pub fn slot(self, index: usize, pattern: Pattern) -> Self {
        match self {
            Pattern::Node { kind, mut slots } => {
                slots.push((index, pattern));
                Pattern::Node { kind, slots }
            }
            Pattern::Bind(name, inner) => Pattern::Bind(name, Box::new(inner.slot(index, pattern))),
            other => Pattern::AllOf(vec![other, Pattern::Slot(index, Box::new(pattern))]),
        }
    }

    pub fn bind(self, name: impl Into<SmolStr>) -> Self {
        Pattern::Bind(name.into(), Box::new(self))
    }

    /// Match `element` against this pattern. Returns the captures on success.
    pub fn matches(&self, element: &SyntaxElement) -> Option<Captures> {
        let mut captures = Captures::default();
        self.match_into(element, &mut captures).then_some(captures)
    }

    /// Match and record bindings in `captures`. On failure, `captures` is
    /// left exactly as it was.
    pub(crate) fn match_into(&self, element: &SyntaxElement, captures: &mut Captures) -> bool {
        let checkpoint = captures.checkpoint();
        let matched = self.match_inner(element, captures);
        if !matched {
            captures.rollback(checkpoint);
        }
        matched
    }

    fn match_inner(&self, element: &SyntaxElement, captures: &mut Captures) -> bool {
        match self {
            Pattern::Any => true,
            Pattern::Token(kind) => element.as_token().is_some_and(|t| t.kind() == *kind),
            Pattern::Node { kind, slots } => {
                let Some(node) = element.as_node() else {
                    return false;
                };
                if node.kind() != *kind {
                    return false;
                }
                slots.iter().all(|(index, pattern)| {
                    tree::slot(node, *index).is_some_and(|child| pattern.match_into(&child, captures))
                })
            }
            Pattern::Slot(index, pattern) => element
                .as_node()
                .and_then(|node| tree::slot(node, *index))
                .is_some_and(|child| pattern.match_into(&child, captures)),
            Pattern::Descendant(pattern) => {
                let Some(node) = element.as_node() else {
                    return false;
                };
                node.descendants_with_tokens()
                    .skip(1)
                    .filter(|e| !e.kind().is_trivia() && e.kind() != SyntaxKind::ABSENT)
                    .any(|e| pattern.match_into(&e, captures))
            }
            Pattern::AnyOf(patterns) => patterns.iter().any(|p| p.match_into(element, captures)),
            Pattern::AllOf(patterns) => patterns.iter().all(|p| p.match_into(element, captures)),
            Pattern::Bind(name, pattern) => {
                if pattern.match_into(element, captures) {
                    captures.push(name.clone(), element.clone());
                    true
                } else {
                    false
                }
            }
        }
    }
}

/// Matches any element
pub fn any() -> Pattern {
    Pattern::Any
}

/// A token of `kind`
pub fn token(kind: SyntaxKind) -> Pattern {
    Pattern::Token(kind)
}

/// A plain or escaped identifier
pub fn ident() -> Pattern {
    any_of([token(SyntaxKind::IDENT), token(SyntaxKind::ESCAPED_IDENT)])
}

pub fn descendant(pattern: Pattern) -> Pattern {
    Pattern::Descendant(Box::new(pattern))
}

pub fn any_of(patterns: impl IntoIterator<Item = Pattern>) -> Pattern {
    Pattern::AnyOf(patterns.into_iter().collect())
}

pub fn all_of(patterns: impl IntoIterator<Item = Pattern>) -> Pattern {
    Pattern::AllOf(patterns.into_iter().collect())
}

/// Named elements bound during a successful match.
///
/// Names bound more than once resolve to the most recent binding.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Captures {
    bindings: Vec<(SmolStr, SyntaxElement)>,
}

impl Captures {
    pub fn get(&self, name: &str) -> Option<&SyntaxElement> {
        self.bindings
            .iter()
            .rev()
            .find(|(bound, _)| bound == name)
            .map(|(_, element)| element)
    }

    pub fn node(&self, name: &str) -> Option<SyntaxNode> {
        self.get(name)?.as_node().cloned()
    }

    pub fn token(&self, name: &str) -> Option<SyntaxToken> {
        self.get(name)?.as_token().cloned()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Bindings in the order they were made
    pub fn iter(&self) -> impl Iterator<Item = (&str, &SyntaxElement)> {
        self.bindings.iter().map(|(name, element)| (name.as_str(), element))
    }

    fn push(&mut self, name: SmolStr, element: SyntaxElement) {
        self.bindings.push((name, element));
    }

    fn checkpoint(&self) -> usize {
        self.bindings.len()
    }

    fn rollback(&mut self, checkpoint: usize) {
        self.bindings.truncate(checkpoint);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;

    fn module_node(src: &str) -> SyntaxElement {
        let root = parse(src).syntax();
        root.descendants()
            .find(|n| n.kind() == SyntaxKind::MODULE_DECLARATION)
            .unwrap()
            .into()
    }

    fn module_name() -> Pattern {
        Pattern::node(SyntaxKind::MODULE_DECLARATION)
            .slot(0, Pattern::node(SyntaxKind::MODULE_HEADER).slot(2, ident().bind("name")))
    }

    #[test]
    fn test_node_pattern_binds_name() {
        let captures = module_name().matches(&module_node("module top; endmodule")).unwrap();
        assert_eq!(captures.len(), 1);
        assert_eq!(captures.token("name").unwrap().text(), "top");
    }

    #[test]
    fn test_absent_slot_does_not_match() {
        // slot 1 is the lifetime, absent here
        let pattern = Pattern::node(SyntaxKind::MODULE_DECLARATION)
            .slot(0, Pattern::node(SyntaxKind::MODULE_HEADER).slot(1, any()));
        assert!(pattern.matches(&module_node("module top; endmodule")).is_none());

        let past_end = Pattern::node(SyntaxKind::MODULE_HEADER).slot(99, any());
        let root = parse("module top; endmodule").syntax();
        let header = root
            .descendants()
            .find(|n| n.kind() == SyntaxKind::MODULE_HEADER)
            .unwrap();
        assert!(past_end.matches(&header.into()).is_none());
    }

    #[test]
    fn test_failed_branch_leaves_no_bindings() {
        // The first alternative binds `name` before failing on the label slot.
        let pattern = any_of([
            Pattern::node(SyntaxKind::MODULE_DECLARATION)
                .slot(0, Pattern::node(SyntaxKind::MODULE_HEADER).slot(2, ident().bind("name")))
                .slot(3, any().bind("label")),
            Pattern::node(SyntaxKind::MODULE_DECLARATION).bind("module"),
        ]);
        let captures = pattern.matches(&module_node("module top; endmodule")).unwrap();
        assert!(!captures.contains("name"));
        assert!(!captures.contains("label"));
        assert!(captures.node("module").is_some());
        assert_eq!(captures.len(), 1);
    }

    #[test]
    fn test_descendant_and_all_of() {
        let element = module_node("module top;\n  wire a;\n  logic b;\nendmodule");
        let first_declarator = descendant(
            Pattern::node(SyntaxKind::DECLARATOR).slot(0, ident().bind("name")),
        );
        let captures = first_declarator.matches(&element).unwrap();
        assert_eq!(captures.token("name").unwrap().text(), "a");

        let both = all_of([
            module_name(),
            descendant(token(SyntaxKind::WIRE_KW).bind("net")),
        ]);
        let captures = both.matches(&element).unwrap();
        assert_eq!(captures.token("name").unwrap().text(), "top");
        assert!(captures.token("net").is_some());

        let neither = all_of([module_name(), descendant(token(SyntaxKind::CLASS_KW))]);
        assert!(neither.matches(&element).is_none());
    }

    #[test]
    fn test_slot_on_bound_pattern() {
        let pattern = Pattern::node(SyntaxKind::MODULE_HEADER)
            .bind("header")
            .slot(2, ident().bind("name"));
        let root = parse("module top; endmodule").syntax();
        let header = root
            .descendants()
            .find(|n| n.kind() == SyntaxKind::MODULE_HEADER)
            .unwrap();
        let captures = pattern.matches(&header.into()).unwrap();
        assert!(captures.node("header").is_some());
        assert_eq!(captures.token("name").unwrap().text(), "top");
    }
}
