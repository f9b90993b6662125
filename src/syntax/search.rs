//! Pre-order search of a tree for pattern matches.
//!
//! Every non-trivia element under the root (the root included, `ABSENT`
//! placeholders excluded) is tested against the pattern, parents before
//! children and children left to right. The order is deterministic, so
//! repeated searches over the same tree yield the same sequence.

use rowan::WalkEvent;

use super::matcher::{Captures, Pattern};
use crate::parser::{SyntaxElement, SyntaxKind, SyntaxNode};

/// One match of a search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match {
    pub element: SyntaxElement,
    pub captures: Captures,
}

/// A match together with the kinds of the nodes enclosing it, outermost
/// first. The matched element itself is not part of its context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContextMatch {
    pub element: SyntaxElement,
    pub captures: Captures,
    pub context: Vec<SyntaxKind>,
}

impl ContextMatch {
    /// Whether the innermost enclosing kinds are exactly `suffix`, in order
    pub fn context_ends_with(&self, suffix: &[SyntaxKind]) -> bool {
        self.context.ends_with(suffix)
    }

    /// Nesting depth of the matched element below the root
    pub fn depth(&self) -> usize {
        self.context.len()
    }
}

impl From<ContextMatch> for Match {
    fn from(m: ContextMatch) -> Self {
        Match {
            element: m.element,
            captures: m.captures,
        }
    }
}

/// All matches of `pattern` under `root`, in pre-order
pub fn search(root: &SyntaxNode, pattern: &Pattern) -> Vec<Match> {
    search_iter(root, pattern).collect()
}

/// Lazy version of [`search`]
pub fn search_iter<'p>(
    root: &SyntaxNode,
    pattern: &'p Pattern,
) -> impl Iterator<Item = Match> + use<'p> {
    walk(root, pattern).map(Match::from)
}

/// Like [`search`], with the enclosing node kinds of every match
pub fn search_with_context(root: &SyntaxNode, pattern: &Pattern) -> Vec<ContextMatch> {
    walk(root, pattern).collect()
}

fn walk<'p>(root: &SyntaxNode, pattern: &'p Pattern) -> impl Iterator<Item = ContextMatch> + use<'p> {
    SearchIter {
        walk: root.preorder_with_tokens(),
        pattern,
        stack: Vec::new(),
    }
}

struct SearchIter<'p, W> {
    walk: W,
    pattern: &'p Pattern,
    stack: Vec<SyntaxKind>,
}

impl<W> Iterator for SearchIter<'_, W>
where
    W: Iterator<Item = WalkEvent<SyntaxElement>>,
{
    type Item = ContextMatch;

    fn next(&mut self) -> Option<ContextMatch> {
        loop {
            match self.walk.next()? {
                WalkEvent::Enter(element) => {
                    let kind = element.kind();
                    let found = if kind.is_trivia() || kind == SyntaxKind::ABSENT {
                        None
                    } else {
                        self.pattern.matches(&element).map(|captures| ContextMatch {
                            element: element.clone(),
                            captures,
                            context: self.stack.clone(),
                        })
                    };
                    if element.as_node().is_some() {
                        self.stack.push(kind);
                    }
                    if found.is_some() {
                        return found;
                    }
                }
                WalkEvent::Leave(element) => {
                    if element.as_node().is_some() {
                        self.stack.pop();
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;
    use crate::syntax::matcher::{ident, token};

    const SRC: &str = "module a;\n  wire x;\nendmodule\nmodule b;\n  logic y, z;\nendmodule\n";

    fn declarator_names(root: &SyntaxNode) -> Vec<String> {
        let pattern = Pattern::node(SyntaxKind::DECLARATOR).slot(0, ident().bind("name"));
        search(root, &pattern)
            .into_iter()
            .map(|m| m.captures.token("name").unwrap().text().to_string())
            .collect()
    }

    #[test]
    fn test_preorder_left_to_right() {
        let root = parse(SRC).syntax();
        assert_eq!(declarator_names(&root), vec!["x", "y", "z"]);
        // deterministic
        assert_eq!(declarator_names(&root), declarator_names(&root));
    }

    #[test]
    fn test_tokens_are_searched() {
        let root = parse(SRC).syntax();
        let endmodules = search(&root, &token(SyntaxKind::ENDMODULE_KW));
        assert_eq!(endmodules.len(), 2);
    }

    #[test]
    fn test_root_is_a_candidate() {
        let root = parse(SRC).syntax();
        let matches = search(&root, &Pattern::node(SyntaxKind::SOURCE_FILE));
        assert_eq!(matches.len(), 1);
    }

    #[test]
    fn test_context_lists_ancestors() {
        let root = parse(SRC).syntax();
        let pattern = Pattern::node(SyntaxKind::DECLARATOR);
        let matches = search_with_context(&root, &pattern);
        assert_eq!(matches.len(), 3);
        assert_eq!(
            matches[0].context,
            vec![
                SyntaxKind::SOURCE_FILE,
                SyntaxKind::MODULE_DECLARATION,
                SyntaxKind::MODULE_ITEM_LIST,
                SyntaxKind::NET_DECLARATION,
                SyntaxKind::DECLARATOR_LIST,
            ]
        );
        assert!(matches[1].context_ends_with(&[
            SyntaxKind::DATA_DECLARATION,
            SyntaxKind::DECLARATOR_LIST
        ]));
    }

    #[test]
    fn test_lazy_search_stops_early() {
        let root = parse(SRC).syntax();
        let pattern = Pattern::node(SyntaxKind::DECLARATOR);
        let first = search_iter(&root, &pattern).next().unwrap();
        assert_eq!(first.element.text_range().start(), crate::parser::TextSize::from(17));
    }
}
