//! AnalysisHost lifecycle tests: batch builds, buffer edits, failures.

use svindex::Span;
use svindex::hir::codes;

use crate::helpers::symbol_assertions::*;
use crate::helpers::workspace::Workspace;

const GOOD: &str = "module good;\n  localparam int K = 1;\n  wire [K:0] w;\nendmodule\n";
const BROKEN: &str = "module broken\n  localparam int K = 2;\n  wire [K:0] w;\nendmodule\n";

// =============================================================================
// BATCH BUILD
// =============================================================================

#[test]
fn test_batch_build_continues_past_broken_file() {
    let ws = Workspace::new(&[("broken.sv", BROKEN), ("good.sv", GOOD)]);
    let mut host = ws.host();
    let report = host.build_project_symbol_table();

    assert_eq!(report.len(), 2);
    assert_eq!(report.indexed_count(), 1);
    assert!(!report.is_ok());
    let failed: Vec<_> = report.failed().collect();
    assert_eq!(failed.len(), 1);
    assert!(failed[0].path.ends_with("broken.sv"));
    assert!(
        failed[0]
            .diagnostics
            .iter()
            .all(|d| d.code.as_deref() == Some(codes::SYNTAX_ERROR))
    );

    let table = host.symbol_table();
    assert!(table.lookup_path(["good", "K"]).is_some());
    assert!(table.lookup_path(["broken"]).is_none());
}

#[test]
fn test_broken_buffer_has_no_definitions_and_others_still_work() {
    let ws = Workspace::new(&[("broken.sv", BROKEN), ("good.sv", GOOD)]);
    let mut host = ws.built_host();

    let broken = ws.open(&mut host, "broken.sv");
    assert_no_definition(&host.find_definition(&broken, 2, 8));

    let good = ws.open(&mut host, "good.sv");
    assert_definition(
        &host.find_definition(&good, 2, 8),
        "good.sv",
        Span::from_coords(1, 17, 1, 18),
    );
}

#[test]
fn test_headers_are_not_indexed_on_their_own() {
    let ws = Workspace::new(&[
        ("inc/defs.svh", "localparam int DEPTH = 16;\n"),
        ("top.sv", "module top;\n  `include \"defs.svh\"\nendmodule\n"),
    ]);
    let mut host = ws.host();
    let report = host.build_project_symbol_table();
    assert_eq!(report.len(), 1);
    assert!(report.is_ok());
    assert!(host.symbol_table().lookup_path(["DEPTH"]).is_none());
    assert!(host.symbol_table().lookup_path(["top", "DEPTH"]).is_some());
}

#[test]
fn test_rebuild_is_idempotent() {
    let ws = Workspace::new(&[
        ("pkg.sv", "package p;\n  parameter int N = 4;\nendpackage\n"),
        ("top.sv", "module top;\n  wire a;\nendmodule\n"),
    ]);
    let mut host = ws.built_host();
    let before = host.symbol_table().print_definitions();
    let len = host.symbol_table().len();

    let report = host.build_project_symbol_table();
    assert!(report.is_ok());
    assert_eq!(host.symbol_table().print_definitions(), before);
    assert_eq!(host.symbol_table().len(), len);
}

// =============================================================================
// BUFFER EDITS
// =============================================================================

#[test]
fn test_did_change_reindexes_on_next_query() {
    let ws = Workspace::new(&[("good.sv", GOOD)]);
    let mut host = ws.built_host();
    let uri = ws.open(&mut host, "good.sv");
    assert_eq!(host.find_definition(&uri, 2, 8).len(), 1);

    let edited = "module good;\n  localparam int SIZE = 1;\n  wire [SIZE:0] w;\nendmodule\n";
    host.did_change(&uri, edited);
    let file = host.project().lookup(ws.path("good.sv")).unwrap();
    assert!(!host.is_indexed(file));

    assert_definition(
        &host.find_definition(&uri, 2, 8),
        "good.sv",
        Span::from_coords(1, 17, 1, 21),
    );
    assert!(host.symbol_table().find_first_by_name("K").is_none());
    assert_eq!(host.buffers().get(&uri).unwrap().version(), 1);
}

#[test]
fn test_broken_edit_removes_file_symbols() {
    let ws = Workspace::new(&[("good.sv", GOOD)]);
    let mut host = ws.built_host();
    let uri = ws.open(&mut host, "good.sv");

    host.did_change(&uri, "module good\n");
    assert_no_definition(&host.find_definition(&uri, 0, 7));
    assert!(host.symbol_table().lookup_path(["good"]).is_none());
    let buffer = host.buffers().get(&uri).unwrap();
    assert!(buffer.current().has_errors());
    assert_eq!(buffer.version(), 1);
}

#[test]
fn test_header_edit_refreshes_includer_symbols() {
    let ws = Workspace::new(&[
        ("inc/defs.svh", "localparam int DEPTH = 16;\n"),
        (
            "top.sv",
            "module top;\n  `include \"defs.svh\"\n  logic [DEPTH-1:0] q;\nendmodule\n",
        ),
    ]);
    let mut host = ws.built_host();
    let top = ws.open(&mut host, "top.sv");
    assert_definition(&host.find_definition(&top, 2, 9), "defs.svh", Span::from_coords(0, 15, 0, 20));

    let defs = ws.uri("inc/defs.svh");
    host.did_open(&defs, "// moved\n// moved again\n\nlocalparam int DEPTH = 16;\n");
    let top_file = host.project().lookup(ws.path("top.sv")).unwrap();
    assert!(host.is_indexed(top_file));
    assert_definition(&host.find_definition(&top, 2, 9), "defs.svh", Span::from_coords(3, 15, 3, 20));

    host.did_change(&defs, "localparam int WIDTH = 16;\n");
    assert_no_definition(&host.find_definition(&top, 2, 9));
    assert!(host.symbol_table().lookup_path(["top", "WIDTH"]).is_some());
}

#[test]
fn test_unsaved_buffer_is_used_for_unknown_file() {
    let ws = Workspace::new(&[]);
    let mut host = ws.host();
    let uri = ws.uri("scratch.sv");
    host.did_open(&uri, "module scratch;\n  genvar g;\nendmodule\n");

    let result = host.find_definition(&uri, 1, 9);
    assert_definition(&result, "scratch.sv", Span::from_coords(1, 9, 1, 10));

    host.did_close(&uri);
    assert!(!host.buffers().contains(&uri));
    assert_no_definition(&host.find_definition(&uri, 1, 9));
}

#[test]
fn test_set_project_starts_a_fresh_table() {
    let ws = Workspace::new(&[("good.sv", GOOD)]);
    let mut host = ws.built_host();
    assert!(!host.symbol_table().is_empty());

    let other = Workspace::new(&[]);
    host.set_project(other.path(""), Vec::<&str>::new(), None);
    assert!(host.symbol_table().is_empty());
    assert!(host.project().is_empty());
}
