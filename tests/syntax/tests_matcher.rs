//! Pattern matcher and tree search over parsed source.

use rstest::rstest;
use svindex::parser::{SyntaxKind, parse};
use svindex::syntax::matcher::{any, any_of, descendant, ident, token};
use svindex::syntax::{Pattern, search, search_with_context};

fn module_header() -> Pattern {
    Pattern::node(SyntaxKind::MODULE_HEADER)
}

#[rstest]
#[case("module m;\nendmodule\n", false)]
#[case("module automatic m;\nendmodule\n", true)]
#[case("module static m;\nendmodule\n", true)]
fn test_optional_slot_matches_only_when_present(#[case] source: &str, #[case] present: bool) {
    let root = parse(source).syntax();
    let pattern = module_header().slot(1, any().bind("lifetime"));
    let hits = search(&root, &pattern);
    assert_eq!(hits.len(), usize::from(present));
    // the name keeps its slot either way
    let names = search(&root, &module_header().slot(2, ident().bind("name")));
    assert_eq!(names.len(), 1);
    assert_eq!(names[0].captures.token("name").unwrap().text(), "m");
}

#[rstest]
#[case("module m;\nendmodule\n")]
#[case("module m (input a);\nendmodule\n")]
#[case("module m #(parameter P = 1);\nendmodule\n")]
fn test_absent_slots_never_panic(#[case] source: &str) {
    let root = parse(source).syntax();
    for index in 0..12 {
        let pattern = module_header().slot(index, any());
        // out-of-range and absent slots simply fail to match
        let _ = search(&root, &pattern);
    }
}

#[test]
fn test_failed_alternative_leaves_no_captures() {
    let root = parse("module automatic m;\nendmodule\n").syntax();
    let pattern = any_of([
        module_header()
            .slot(1, any().bind("lifetime"))
            .slot(2, token(SyntaxKind::STRING)),
        module_header().slot(2, ident().bind("name")),
    ]);
    let hits = search(&root, &pattern);
    assert_eq!(hits.len(), 1);
    let captures = &hits[0].captures;
    assert!(!captures.contains("lifetime"));
    assert_eq!(captures.len(), 1);
    assert_eq!(captures.token("name").unwrap().text(), "m");
}

#[test]
fn test_search_is_preorder_and_repeatable() {
    let source = "package p;\n  parameter int A = 1;\n  parameter int B = A;\nendpackage\nmodule m;\n  wire c;\nendmodule\n";
    let root = parse(source).syntax();
    let pattern = ident().bind("id");

    let names: Vec<String> = search(&root, &pattern)
        .iter()
        .map(|m| m.captures.token("id").unwrap().text().to_string())
        .collect();
    assert_eq!(names, ["p", "A", "B", "A", "m", "c"]);
    assert_eq!(search(&root, &pattern), search(&root, &pattern));
}

#[test]
fn test_context_filters_by_enclosing_kinds() {
    let source = "module m #(parameter int P = 1) ();\n  localparam int L = 2;\nendmodule\n";
    let root = parse(source).syntax();
    let pattern = Pattern::node(SyntaxKind::PARAM_ASSIGNMENT).slot(0, ident().bind("name"));
    let hits = search_with_context(&root, &pattern);
    assert_eq!(hits.len(), 2);
    for hit in &hits {
        assert!(hit.context_ends_with(&[
            SyntaxKind::PARAM_DECLARATION,
            SyntaxKind::PARAM_ASSIGNMENT_LIST
        ]));
        assert!(hit.depth() >= 3);
    }
    // the port parameter sits in the header, the local one in the body
    assert!(hits[0].context.contains(&SyntaxKind::PARAM_PORT_LIST));
    assert!(!hits[1].context.contains(&SyntaxKind::PARAM_PORT_LIST));
}

#[test]
fn test_descendant_finds_first_below() {
    let root = parse("module m;\n  wire a, b;\nendmodule\n").syntax();
    let pattern = Pattern::node(SyntaxKind::DECLARATOR_LIST).slot(0, descendant(ident()).bind("x"));
    let hits = search(&root, &pattern);
    // slot 0 is the first DECLARATOR; its first identifier is `a`
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].captures.node("x").unwrap().text().to_string(), "a");
}
