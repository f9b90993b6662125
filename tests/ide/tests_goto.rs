//! Go to definition tests through the AnalysisHost.

use rstest::rstest;
use svindex::Span;
use svindex::hir::SymbolKind;
use svindex::ide::SharedAnalysisHost;

use crate::helpers::symbol_assertions::*;
use crate::helpers::workspace::Workspace;

const PKG: &str = "package p;\n  parameter int N = 4;\n  localparam int W = 8;\nendpackage\n";
const TOP: &str = "module top;\n  import p::*;\n  logic [p::N-1:0] x;\nendmodule\n";
const WIDTH: &str =
    "module m;\n  localparam int WIDTH = 8;\n  logic [WIDTH-1:0] data;\nendmodule\n";

// =============================================================================
// GOTO DEFINITION - SINGLE FILE
// =============================================================================

#[test]
fn test_goto_parameter_in_same_file() {
    let ws = Workspace::new(&[("m.sv", WIDTH)]);
    let mut host = ws.host();
    let uri = ws.open(&mut host, "m.sv");

    let result = host.find_definition(&uri, 2, 9);
    assert_definition(&result, "m.sv", Span::from_coords(1, 17, 1, 22));
    assert_eq!(result[0].uri, uri);
    assert_eq!(result[0].kind, SymbolKind::Parameter);
    assert_eq!(result[0].name, "WIDTH");
}

#[test]
fn test_goto_on_declaration_itself() {
    let ws = Workspace::new(&[("m.sv", WIDTH)]);
    let mut host = ws.host();
    let uri = ws.open(&mut host, "m.sv");

    let result = host.find_definition(&uri, 1, 19);
    assert_definition(&result, "m.sv", Span::from_coords(1, 17, 1, 22));
}

#[rstest]
#[case(0, 0)] // `module` keyword
#[case(1, 0)] // indentation
#[case(2, 15)] // `1` literal
#[case(40, 0)] // past the end
#[case(1, u32::MAX)] // column overflows the line offset
fn test_goto_off_identifier_is_empty(#[case] line: u32, #[case] column: u32) {
    let ws = Workspace::new(&[("m.sv", WIDTH)]);
    let mut host = ws.host();
    let uri = ws.open(&mut host, "m.sv");
    assert_no_definition(&host.find_definition(&uri, line, column));
}

#[test]
fn test_goto_unresolved_name_is_empty() {
    let ws = Workspace::new(&[("m.sv", "module m;\n  assign y = missing;\nendmodule\n")]);
    let mut host = ws.host();
    let uri = ws.open(&mut host, "m.sv");
    assert_no_definition(&host.find_definition(&uri, 1, 14));
}

// =============================================================================
// GOTO DEFINITION - CROSS FILE
// =============================================================================

#[test]
fn test_goto_package_parameter_across_files() {
    let ws = Workspace::new(&[("pkg.sv", PKG), ("top.sv", TOP)]);
    let mut host = ws.built_host();
    let uri = ws.open(&mut host, "top.sv");

    let result = host.find_definition(&uri, 2, 12);
    assert_definition(&result, "pkg.sv", Span::from_coords(1, 16, 1, 17));
    assert_eq!(result[0].uri, ws.uri("pkg.sv"));
}

#[test]
fn test_goto_across_files_needs_the_other_file_indexed() {
    let ws = Workspace::new(&[("pkg.sv", PKG), ("top.sv", TOP)]);
    let mut host = ws.host();
    let uri = ws.open(&mut host, "top.sv");

    // only top.sv is indexed on demand
    assert_no_definition(&host.find_definition(&uri, 2, 12));

    host.build_project_symbol_table();
    assert_definition(
        &host.find_definition(&uri, 2, 12),
        "pkg.sv",
        Span::from_coords(1, 16, 1, 17),
    );
}

#[test]
fn test_goto_same_name_picks_first_in_table_order() {
    let ws = Workspace::new(&[
        ("a_pkg.sv", "package a;\n  parameter int N = 1;\nendpackage\n"),
        ("b_pkg.sv", "package b;\n  parameter int N = 2;\nendpackage\n"),
        ("top.sv", TOP),
    ]);
    let mut host = ws.built_host();
    let uri = ws.open(&mut host, "top.sv");

    for _ in 0..3 {
        assert_definition(
            &host.find_definition(&uri, 2, 12),
            "a_pkg.sv",
            Span::from_coords(1, 16, 1, 17),
        );
    }
}

#[test]
fn test_goto_into_included_header() {
    let ws = Workspace::new(&[
        ("inc/defs.svh", "localparam int DEPTH = 16;\n"),
        (
            "top.sv",
            "module top;\n  `include \"defs.svh\"\n  logic [DEPTH-1:0] q;\nendmodule\n",
        ),
    ]);
    let mut host = ws.built_host();
    let uri = ws.open(&mut host, "top.sv");

    let result = host.find_definition(&uri, 2, 9);
    assert_definition(&result, "defs.svh", Span::from_coords(0, 15, 0, 20));
    assert_eq!(result[0].uri, ws.uri("inc/defs.svh"));
}

#[test]
fn test_goto_forward_typedef_lands_on_class() {
    let src = "package p;\n  typedef class c;\n  class c;\n  endclass\nendpackage\n";
    let ws = Workspace::new(&[("p.sv", src)]);
    let mut host = ws.host();
    let uri = ws.open(&mut host, "p.sv");

    let result = host.find_definition(&uri, 1, 16);
    assert_definition(&result, "p.sv", Span::from_coords(2, 8, 2, 9));
    assert_eq!(result[0].kind, SymbolKind::Class);
}

#[test]
fn test_goto_from_another_thread() {
    let ws = Workspace::new(&[("m.sv", WIDTH)]);
    let mut host = ws.host();
    let uri = ws.open(&mut host, "m.sv");
    let shared = SharedAnalysisHost::new(host);

    let worker = shared.clone();
    let query = uri.clone();
    let result = std::thread::spawn(move || worker.find_definition(&query, 2, 9))
        .join()
        .unwrap();
    assert_definition(&result, "m.sv", Span::from_coords(1, 17, 1, 22));
    assert!(shared.lock().buffers().contains(&uri));
}

// =============================================================================
// URI CONVERSION
// =============================================================================

#[rstest]
#[case("/work/chip/rtl/top.sv")]
#[case("/tmp/a b/pkg.svh")]
#[case("/x.v")]
fn test_uri_round_trip(#[case] path: &str) {
    use std::path::Path;
    use svindex::base::{path_to_uri, uri_to_path};

    let uri = path_to_uri(Path::new(path));
    assert!(uri.starts_with("file:///"));
    assert_eq!(uri_to_path(&uri).unwrap(), Path::new(path));
    assert_eq!(path_to_uri(&uri_to_path(&uri).unwrap()), uri);
}
