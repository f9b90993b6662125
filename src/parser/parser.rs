//! Recursive descent parser for SystemVerilog declarations
//!
//! Builds a rowan GreenNode tree from tokens.
//! Supports error recovery and produces a lossless CST. The grammar rules
//! live in [`super::grammar`]; this file holds the parser state and the
//! token-level helpers they share.

use super::lexer::{Lexer, Token};
use super::syntax_kind::SyntaxKind;
use crate::base::SyntaxError;
use rowan::{GreenNode, GreenNodeBuilder, TextRange, TextSize};

/// Parse result containing the green tree and any errors
#[derive(Debug, Clone)]
pub struct Parse {
    pub green: GreenNode,
    pub errors: Vec<SyntaxError>,
}

impl Parse {
    /// Get the root syntax node
    pub fn syntax(&self) -> super::SyntaxNode {
        super::SyntaxNode::new_root(self.green.clone())
    }

    /// Check if parsing succeeded without errors
    pub fn ok(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Parse SystemVerilog source text into a CST
pub fn parse(input: &str) -> Parse {
    let tokens: Vec<_> = Lexer::new(input).collect();
    let mut parser = Parser::new(&tokens);
    parser.parse_source_file();
    parser.finish()
}

/// The parser state
pub(super) struct Parser<'a> {
    tokens: &'a [Token<'a>],
    /// Index of the next raw token (trivia included)
    pos: usize,
    /// Raw indices of the non-trivia tokens
    significant: Vec<usize>,
    /// Kinds of the non-trivia tokens, parallel to `significant`
    kinds: Vec<SyntaxKind>,
    /// Number of non-trivia tokens consumed so far
    cursor: usize,
    builder: GreenNodeBuilder<'static>,
    errors: Vec<SyntaxError>,
}

impl<'a> Parser<'a> {
    fn new(tokens: &'a [Token<'a>]) -> Self {
        let significant: Vec<usize> = tokens
            .iter()
            .enumerate()
            .filter(|(_, t)| !t.kind.is_trivia())
            .map(|(i, _)| i)
            .collect();
        let kinds = significant.iter().map(|&i| tokens[i].kind).collect();
        Self {
            tokens,
            pos: 0,
            significant,
            kinds,
            cursor: 0,
            builder: GreenNodeBuilder::new(),
            errors: Vec::new(),
        }
    }

    fn finish(self) -> Parse {
        Parse {
            green: self.builder.finish(),
            errors: self.errors,
        }
    }

    /// SourceFile = Item*
    fn parse_source_file(&mut self) {
        // The root cannot go through `start_node`: trivia must land inside it.
        self.builder.start_node(SyntaxKind::SOURCE_FILE.into());

        while !self.at_eof() {
            let before = self.cursor;
            self.parse_item(super::grammar::ItemContext::CompilationUnit);
            // Safety: if we didn't make progress, force-skip a token
            if self.cursor == before && !self.at_eof() {
                self.error(format!("stuck on token: {:?}", self.current()));
                self.bump();
            }
        }
        self.skip_trivia();

        self.builder.finish_node();
    }

    // =========================================================================
    // Token inspection
    // =========================================================================

    /// Kind of the `n`th upcoming non-trivia token, `EOF` past the end
    pub(super) fn nth(&self, n: usize) -> SyntaxKind {
        self.kinds
            .get(self.cursor + n)
            .copied()
            .unwrap_or(SyntaxKind::EOF)
    }

    pub(super) fn nth_text(&self, n: usize) -> &str {
        self.significant
            .get(self.cursor + n)
            .map(|&i| self.tokens[i].text)
            .unwrap_or("")
    }

    pub(super) fn current(&self) -> SyntaxKind {
        self.nth(0)
    }

    pub(super) fn at(&self, kind: SyntaxKind) -> bool {
        self.current() == kind
    }

    pub(super) fn at_any(&self, kinds: &[SyntaxKind]) -> bool {
        kinds.contains(&self.current())
    }

    pub(super) fn at_eof(&self) -> bool {
        self.cursor >= self.kinds.len()
    }

    /// Check if the current token can name a declaration
    pub(super) fn at_name(&self) -> bool {
        self.current().is_identifier()
    }

    /// Kinds of all remaining non-trivia tokens, for multi-token lookahead
    pub(super) fn rest(&self) -> &[SyntaxKind] {
        &self.kinds[self.cursor.min(self.kinds.len())..]
    }

    /// Number of non-trivia tokens consumed so far
    pub(super) fn progress(&self) -> usize {
        self.cursor
    }

    // =========================================================================
    // Token consumption
    // =========================================================================

    /// Emit pending trivia, then the current token
    pub(super) fn bump(&mut self) {
        self.skip_trivia();
        if let Some(token) = self.tokens.get(self.pos) {
            if token.kind == SyntaxKind::ERROR {
                self.errors.push(SyntaxError::new(
                    format!("unexpected character `{}`", token.text),
                    TextRange::at(token.offset, TextSize::of(token.text)),
                ));
            }
            self.builder.token(token.kind.into(), token.text);
            self.pos += 1;
            self.cursor += 1;
        }
    }

    /// Bump `n` tokens
    pub(super) fn bump_n(&mut self, n: usize) {
        for _ in 0..n {
            self.bump();
        }
    }

    pub(super) fn eat(&mut self, kind: SyntaxKind) -> bool {
        if self.at(kind) {
            self.bump();
            true
        } else {
            false
        }
    }

    pub(super) fn expect(&mut self, kind: SyntaxKind) -> bool {
        if self.eat(kind) {
            true
        } else {
            self.error(format!("expected {:?}", kind));
            false
        }
    }

    /// Expect an identifier naming a declaration
    pub(super) fn expect_name(&mut self) -> bool {
        if self.at_name() {
            self.bump();
            true
        } else {
            self.error(format!("expected identifier, found {:?}", self.current()));
            false
        }
    }

    pub(super) fn skip_trivia(&mut self) {
        while self
            .tokens
            .get(self.pos)
            .is_some_and(|t| t.kind.is_trivia())
        {
            let token = &self.tokens[self.pos];
            self.builder.token(token.kind.into(), token.text);
            self.pos += 1;
        }
    }

    // =========================================================================
    // Error handling
    // =========================================================================

    pub(super) fn error(&mut self, message: impl Into<String>) {
        let range = match self.significant.get(self.cursor) {
            Some(&i) => {
                let t = &self.tokens[i];
                TextRange::at(t.offset, TextSize::of(t.text))
            }
            None => {
                let end = self
                    .tokens
                    .last()
                    .map(|t| t.offset + TextSize::of(t.text))
                    .unwrap_or_default();
                TextRange::empty(end)
            }
        };
        self.errors.push(SyntaxError::new(message, range));
    }

    pub(super) fn error_recover(&mut self, message: impl Into<String>, recovery: &[SyntaxKind]) {
        self.error(message);
        self.start_node(SyntaxKind::ERROR);
        // Always consume at least one token to make progress
        let mut consumed = false;
        while !self.at_eof() && !(consumed && self.at_any(recovery)) {
            self.bump();
            consumed = true;
        }
        self.finish_node();
    }

    // =========================================================================
    // Node building helpers
    // =========================================================================

    /// Start a node at the next significant token; pending trivia stays outside.
    pub(super) fn start_node(&mut self, kind: SyntaxKind) {
        self.skip_trivia();
        self.builder.start_node(kind.into());
    }

    pub(super) fn finish_node(&mut self) {
        self.builder.finish_node();
    }

    /// Emit a zero-width placeholder for an omitted optional element
    pub(super) fn absent(&mut self) {
        self.start_node(SyntaxKind::ABSENT);
        self.finish_node();
    }

    /// Bump the current token if it is one of `kinds`, otherwise emit `ABSENT`
    pub(super) fn bump_or_absent(&mut self, kinds: &[SyntaxKind]) {
        if self.at_any(kinds) {
            self.bump();
        } else {
            self.absent();
        }
    }
}

// =============================================================================
// Lookahead scans over significant token kinds
// =============================================================================

pub(super) fn is_name(kind: &SyntaxKind) -> bool {
    kind.is_identifier()
}

/// Length of a bracketed run `( ... )`, `[ ... ]` or `{ ... }` at the start of
/// `kinds`, or `None` if it is unterminated.
pub(super) fn balanced_len(kinds: &[SyntaxKind]) -> Option<usize> {
    use SyntaxKind::*;
    if !matches!(kinds.first(), Some(L_PAREN | L_BRACKET | L_BRACE)) {
        return None;
    }
    let mut depth = 0usize;
    for (i, kind) in kinds.iter().enumerate() {
        match kind {
            L_PAREN | L_BRACKET | L_BRACE => depth += 1,
            R_PAREN | R_BRACKET | R_BRACE => {
                depth = depth.checked_sub(1)?;
                if depth == 0 {
                    return Some(i + 1);
                }
            }
            SEMICOLON => return None,
            _ => {}
        }
    }
    None
}

/// `name (:: name)* (# (...) | # token)?`
pub(super) fn type_reference_len(kinds: &[SyntaxKind]) -> Option<usize> {
    use SyntaxKind::*;
    if !kinds.first().is_some_and(is_name) {
        return None;
    }
    let mut i = 1;
    while kinds.get(i) == Some(&COLON_COLON) && kinds.get(i + 1).is_some_and(is_name) {
        i += 2;
    }
    if kinds.get(i) == Some(&HASH) {
        match kinds.get(i + 1) {
            Some(L_PAREN) => i += 1 + balanced_len(&kinds[i + 1..])?,
            Some(_) => i += 2,
            None => return None,
        }
    }
    Some(i)
}

/// Total length of consecutive `[ ... ]` dimensions
pub(super) fn dimensions_len(kinds: &[SyntaxKind]) -> usize {
    let mut i = 0;
    while kinds.get(i) == Some(&SyntaxKind::L_BRACKET) {
        match balanced_len(&kinds[i..]) {
            Some(len) => i += len,
            None => break,
        }
    }
    i
}

/// If `kinds` starts with a user-defined type followed by a declared name,
/// return the index of the name.
///
/// Accepts `t x`, `p::t x`, `c #(8) x`, `t [3:0] x` and interface ports
/// `bus_if.mp x`.
pub(super) fn user_type_then_name(kinds: &[SyntaxKind]) -> Option<usize> {
    use SyntaxKind::*;
    let mut i = type_reference_len(kinds)?;
    if kinds.get(i) == Some(&DOT)
        && kinds.get(i + 1).is_some_and(is_name)
        && kinds.get(i + 2).is_some_and(is_name)
    {
        i += 2;
    }
    i += dimensions_len(&kinds[i..]);
    kinds.get(i).is_some_and(is_name).then_some(i)
}

#[cfg(test)]
mod tests {
    use super::*;
    use SyntaxKind::*;

    #[test]
    fn test_balanced_len() {
        assert_eq!(balanced_len(&[L_PAREN, IDENT, R_PAREN, SEMICOLON]), Some(3));
        assert_eq!(
            balanced_len(&[L_PAREN, L_BRACKET, R_BRACKET, R_PAREN]),
            Some(4)
        );
        assert_eq!(balanced_len(&[L_PAREN, IDENT, SEMICOLON]), None);
        assert_eq!(balanced_len(&[IDENT]), None);
    }

    #[test]
    fn test_user_type_then_name() {
        assert_eq!(user_type_then_name(&[IDENT, IDENT, SEMICOLON]), Some(1));
        assert_eq!(
            user_type_then_name(&[IDENT, COLON_COLON, IDENT, IDENT, EQ]),
            Some(3)
        );
        assert_eq!(
            user_type_then_name(&[IDENT, HASH, L_PAREN, INT_NUMBER, R_PAREN, IDENT]),
            Some(5)
        );
        assert_eq!(user_type_then_name(&[IDENT, DOT, IDENT, IDENT]), Some(3));
        assert_eq!(user_type_then_name(&[IDENT, EQ, INT_NUMBER]), None);
        assert_eq!(user_type_then_name(&[IDENT, L_PAREN]), None);
    }

    #[test]
    fn test_parse_empty_and_trivia_only() {
        assert!(parse("").ok());
        let parse = parse("// comment\n/* block */\n");
        assert!(parse.ok());
        assert_eq!(parse.syntax().to_string(), "// comment\n/* block */\n");
    }
}
