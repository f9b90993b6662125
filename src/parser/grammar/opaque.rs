//! Token runs the index never looks inside.
//!
//! Expressions, statements, assertions, constraints and similar constructs
//! are kept in the tree as flat nodes so the text stays lossless, but only
//! their extent is parsed.

use crate::parser::parser::Parser;
use crate::parser::syntax_kind::SyntaxKind;

impl Parser<'_> {
    /// Bump tokens until a depth-zero token in `stops`, an unmatched closing
    /// bracket, a `;` or a body terminator. Returns whether anything was
    /// consumed.
    pub(super) fn bump_balanced(&mut self, stops: &[SyntaxKind]) -> bool {
        use SyntaxKind::*;

        let mut depth = 0usize;
        let mut consumed = false;
        while !self.at_eof() {
            let kind = self.current();
            if kind == SEMICOLON || kind.is_end_of_body() {
                break;
            }
            if depth == 0 && stops.contains(&kind) {
                break;
            }
            match kind {
                L_PAREN | L_BRACKET | L_BRACE => depth += 1,
                R_PAREN | R_BRACKET | R_BRACE => {
                    if depth == 0 {
                        break;
                    }
                    depth -= 1;
                }
                _ => {}
            }
            self.bump();
            consumed = true;
        }
        consumed
    }

    /// Expression = tokens up to a depth-zero terminator
    pub(super) fn parse_expression(&mut self, stops: &[SyntaxKind]) {
        self.start_node(SyntaxKind::EXPRESSION);
        if !self.bump_balanced(stops) {
            self.error("expected expression");
        }
        self.finish_node();
    }

    /// MacroItem = MACRO_CALL ('(' ... ')')? ';'?
    pub(super) fn parse_macro_item(&mut self) {
        self.start_node(SyntaxKind::OPAQUE_ITEM);
        self.bump();
        if self.at(SyntaxKind::L_PAREN) {
            self.bump();
            self.bump_balanced(&[SyntaxKind::R_PAREN]);
            self.expect(SyntaxKind::R_PAREN);
        }
        self.eat(SyntaxKind::SEMICOLON);
        self.finish_node();
    }

    /// OpaqueItem = tokens up to a depth-zero `;` or a closing keyword that
    /// returns to depth zero, with `else` branches attached
    pub(super) fn parse_opaque_item(&mut self) {
        use SyntaxKind::*;

        self.start_node(OPAQUE_ITEM);
        let first = self.current();
        let mut depth = 0usize;
        let mut prev: Option<SyntaxKind> = None;

        loop {
            if self.at_eof() {
                self.error("unexpected end of file");
                break;
            }
            let kind = self.current();

            if depth == 0 && kind.is_end_of_body() {
                self.error("expected `;`");
                break;
            }

            if self.opens_block(kind, prev) {
                depth += 1;
                self.bump();
            } else if is_block_closer(kind) {
                if depth == 0 {
                    self.error(format!("unmatched {:?}", kind));
                    self.bump();
                    break;
                }
                depth -= 1;
                self.bump();
                if depth == 0 {
                    if !kind.is_punct() {
                        if self.at(COLON) && self.nth(1).is_identifier() {
                            self.bump_n(2);
                        }
                        if self.at(ELSE_KW) {
                            prev = Some(kind);
                            continue;
                        }
                        break;
                    }
                    if kind == R_BRACE && first == CONSTRAINT_KW {
                        break;
                    }
                }
            } else if kind == SEMICOLON && depth == 0 {
                self.bump();
                if self.at(ELSE_KW) {
                    prev = Some(kind);
                    continue;
                }
                break;
            } else {
                self.bump();
            }
            prev = Some(kind);
        }
        self.finish_node();
    }

    fn opens_block(&self, kind: SyntaxKind, prev: Option<SyntaxKind>) -> bool {
        use SyntaxKind::*;

        match kind {
            L_PAREN | L_BRACKET | L_BRACE => true,
            BEGIN_KW | CASE_KW | CASEX_KW | CASEZ_KW | RANDCASE_KW => true,
            FORK_KW => !matches!(prev, Some(DISABLE_KW | WAIT_KW)),
            COVERGROUP_KW | PROPERTY_KW | SEQUENCE_KW | SPECIFY_KW => prev.is_none(),
            // `default clocking cb;` names a block declared elsewhere
            CLOCKING_KW => {
                self.nth(1) == AT || (self.nth(1).is_identifier() && self.nth(2) == AT)
            }
            _ => false,
        }
    }
}

fn is_block_closer(kind: SyntaxKind) -> bool {
    use SyntaxKind::*;
    matches!(
        kind,
        R_PAREN
            | R_BRACKET
            | R_BRACE
            | END_KW
            | JOIN_KW
            | JOIN_ANY_KW
            | JOIN_NONE_KW
            | ENDCASE_KW
            | ENDGROUP_KW
            | ENDPROPERTY_KW
            | ENDSEQUENCE_KW
            | ENDCLOCKING_KW
            | ENDSPECIFY_KW
    )
}

#[cfg(test)]
mod tests {
    use crate::parser::{SyntaxKind, SyntaxNode, parse};

    fn opaque_items(src: &str) -> Vec<String> {
        let parse = parse(src);
        assert!(parse.ok(), "errors: {:?}", parse.errors);
        assert_eq!(parse.syntax().to_string(), src);
        parse
            .syntax()
            .descendants()
            .filter(|n: &SyntaxNode| n.kind() == SyntaxKind::OPAQUE_ITEM)
            .map(|n| n.text().to_string())
            .collect()
    }

    #[test]
    fn test_statements_and_blocks() {
        let items = opaque_items(
            "module m;\n  assign a = b;\n  always_ff @(posedge clk) begin\n    if (x) y <= 1;\n    else y <= 0;\n  end\n  initial begin : init\n    q = 0;\n  end\nendmodule",
        );
        assert_eq!(
            items,
            vec![
                "assign a = b;",
                "always_ff @(posedge clk) begin\n    if (x) y <= 1;\n    else y <= 0;\n  end",
                "initial begin : init\n    q = 0;\n  end",
            ]
        );
    }

    #[test]
    fn test_else_after_block_stays_attached() {
        let items = opaque_items(
            "module m;\n  always_comb if (a) begin x = 1; end else begin x = 0; end\nendmodule",
        );
        assert_eq!(items.len(), 1);
    }

    #[test]
    fn test_case_fork_and_constraint() {
        let items = opaque_items(
            "class c;\n  constraint k { x < 4; y > 1; }\n  task t();\n    case (s)\n      0: a = 1;\n      default: a = 0;\n    endcase\n    fork a(); b(); join_none\n    wait fork;\n  endtask\nendclass",
        );
        assert_eq!(items.len(), 4);
        assert_eq!(items[0], "constraint k { x < 4; y > 1; }");
        assert_eq!(items[3], "wait fork;");
    }

    #[test]
    fn test_covergroup_is_one_item() {
        let items = opaque_items(
            "class c;\n  covergroup cg @(posedge clk);\n    coverpoint x;\n  endgroup\n  default clocking cb;\nendclass",
        );
        assert_eq!(items.len(), 2);
    }

    #[test]
    fn test_missing_semicolon_before_endmodule() {
        let parse = parse("module m;\n  assign a = b\nendmodule");
        assert!(!parse.ok());
        assert_eq!(
            parse
                .syntax()
                .descendants()
                .filter(|n| n.kind() == SyntaxKind::MODULE_DECLARATION)
                .count(),
            1
        );
    }

    #[test]
    fn test_macro_item() {
        let items = opaque_items("module m;\n  `uvm_info(\"id\", \"msg\", UVM_LOW)\nendmodule");
        assert_eq!(items, vec!["`uvm_info(\"id\", \"msg\", UVM_LOW)"]);
    }
}
