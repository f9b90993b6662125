//! Positional access to child slots with soft failure.
//!
//! A *slot* is a non-trivia child of a node. Optional grammar elements that
//! were not written occupy their slot with a zero-width `ABSENT` node, so a
//! slot index means the same thing for every variant of a construct. Every
//! accessor here returns `None` when the shape of the tree is not what the
//! caller expected; none of them panic.

use crate::parser::{SyntaxElement, SyntaxKind, SyntaxNode, SyntaxToken, TextSize};

/// Iterate the slots of `node`. Absent slots yield `None`.
pub fn slots(node: &SyntaxNode) -> impl Iterator<Item = Option<SyntaxElement>> + '_ {
    node.children_with_tokens()
        .filter(|element| !element.kind().is_trivia())
        .map(|element| (element.kind() != SyntaxKind::ABSENT).then_some(element))
}

/// Number of slots of `node`, absent ones included
pub fn slot_count(node: &SyntaxNode) -> usize {
    slots(node).count()
}

/// The element in slot `index`, or `None` if the slot is absent or past the end
pub fn slot(node: &SyntaxNode, index: usize) -> Option<SyntaxElement> {
    slots(node).nth(index).flatten()
}

/// The element in slot `index` of `node`, provided `node` has kind `parent_kind`.
pub fn subtree(node: &SyntaxNode, parent_kind: SyntaxKind, index: usize) -> Option<SyntaxElement> {
    if node.kind() != parent_kind {
        return None;
    }
    slot(node, index)
}

/// Like [`subtree`], but the slot must hold a node, of `expected_kind` if given.
pub fn subtree_as_node(
    node: &SyntaxNode,
    parent_kind: SyntaxKind,
    index: usize,
    expected_kind: Option<SyntaxKind>,
) -> Option<SyntaxNode> {
    let child = subtree(node, parent_kind, index)?.into_node()?;
    match expected_kind {
        Some(kind) if child.kind() != kind => None,
        _ => Some(child),
    }
}

/// Like [`subtree`], but the slot must hold a token.
pub fn subtree_as_token(
    node: &SyntaxNode,
    parent_kind: SyntaxKind,
    index: usize,
) -> Option<SyntaxToken> {
    subtree(node, parent_kind, index)?.into_token()
}

/// The identifier an element names.
///
/// A plain or escaped identifier token names itself. A qualified name
/// (`p::t`) or a type reference names its last component.
pub fn identifier(element: &SyntaxElement) -> Option<SyntaxToken> {
    match element {
        SyntaxElement::Token(token) => token.kind().is_identifier().then(|| token.clone()),
        SyntaxElement::Node(node) => match node.kind() {
            SyntaxKind::QUALIFIED_ID => node
                .children_with_tokens()
                .filter_map(|e| e.into_token())
                .filter(|t| t.kind().is_identifier())
                .last(),
            SyntaxKind::TYPE_REFERENCE => {
                identifier(&subtree_as_node(node, SyntaxKind::TYPE_REFERENCE, 0, None)?.into())
            }
            _ => None,
        },
    }
}

/// Source text of `node` with runs of whitespace and comments collapsed to
/// single spaces
pub fn normalized_text(node: &SyntaxNode) -> String {
    let mut out = String::new();
    for token in node
        .descendants_with_tokens()
        .filter_map(|e| e.into_token())
        .filter(|t| !t.kind().is_trivia())
    {
        if !out.is_empty() && needs_space(&out, token.text()) {
            out.push(' ');
        }
        out.push_str(token.text());
    }
    out
}

fn needs_space(before: &str, next: &str) -> bool {
    let word = |c: char| c.is_alphanumeric() || c == '_' || c == '$';
    before.ends_with(word) && next.starts_with(word)
}

/// The token at `offset`, preferring an identifier when the offset sits
/// between two tokens
pub fn token_at_offset(root: &SyntaxNode, offset: TextSize) -> Option<SyntaxToken> {
    if offset > root.text_range().end() {
        return None;
    }
    let mut candidates = root.token_at_offset(offset);
    let first = candidates.next()?;
    if first.kind().is_identifier() {
        return Some(first);
    }
    Some(candidates.next().unwrap_or(first))
}
