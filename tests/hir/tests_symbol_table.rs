//! Multi-file symbol table construction.

use rstest::rstest;
use svindex::hir::{DeclarationPatterns, SymbolKind, SymbolTable, codes, index_file};
use svindex::project::{Project, ProjectConfig};

use crate::helpers::workspace::Workspace;

fn project(ws: &Workspace) -> Project {
    Project::new(ProjectConfig::new(ws.path("")).with_include_path("inc"))
}

#[test]
fn test_files_share_one_namespace() {
    let ws = Workspace::new(&[
        ("pkg.sv", "package p;\n  parameter int N = 4;\nendpackage\n"),
        ("top.sv", "module top;\n  import p::*;\n  sub u0 ();\nendmodule\n"),
    ]);
    let mut project = project(&ws);
    let mut table = SymbolTable::new();
    let patterns = DeclarationPatterns::new();

    let pkg = project.open("pkg.sv");
    let top = project.open("top.sv");
    assert!(index_file(pkg, &mut table, &mut project, &patterns).is_empty());
    assert!(index_file(top, &mut table, &mut project, &patterns).is_empty());

    let n = table.lookup_path(["p", "N"]).unwrap();
    assert_eq!(table.get(n).unwrap().info().file_origin, Some(pkg));
    assert_eq!(table.qualified_name(n), "p::N");

    let top_id = table.lookup_path(["top"]).unwrap();
    let imports = table.get(top_id).unwrap().imports();
    assert_eq!(imports.len(), 1);
    assert_eq!(imports[0].package, "p");

    let u0 = table.lookup_path(["top", "u0"]).unwrap();
    assert_eq!(table.get(u0).unwrap().kind(), SymbolKind::Instance);

    // dropping one file leaves the other untouched
    table.remove_contributions(top);
    assert!(table.lookup_path(["top"]).is_none());
    assert!(table.lookup_path(["p", "N"]).is_some());
}

#[test]
fn test_duplicate_across_files_keeps_first_indexed() {
    let ws = Workspace::new(&[
        ("a.sv", "module m;\n  wire a;\nendmodule\n"),
        ("b.sv", "module m;\n  wire b;\nendmodule\n"),
    ]);
    let mut project = project(&ws);
    let mut table = SymbolTable::new();
    let patterns = DeclarationPatterns::new();

    let a = project.open("a.sv");
    let b = project.open("b.sv");
    index_file(a, &mut table, &mut project, &patterns);
    let diagnostics = index_file(b, &mut table, &mut project, &patterns);

    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].code.as_deref(), Some(codes::DUPLICATE_DEFINITION));
    assert_eq!(diagnostics[0].file, b);
    assert_eq!(diagnostics[0].related.len(), 1);
    let m = table.lookup_path(["m"]).unwrap();
    assert_eq!(table.get(m).unwrap().info().file_origin, Some(a));
    assert!(table.find_first_by_name("b").is_none());
}

#[rstest]
#[case("module m;\n  logic [7:0] data;\nendmodule\n", &["m", "data"], SymbolKind::Variable)]
#[case("module m;\n  wire w;\nendmodule\n", &["m", "w"], SymbolKind::Net)]
#[case("interface bus_if;\n  logic req;\nendinterface\n", &["bus_if", "req"], SymbolKind::Variable)]
#[case("package p;\n  typedef logic [3:0] nibble_t;\nendpackage\n", &["p", "nibble_t"], SymbolKind::TypeAlias)]
#[case("module m;\n  task run;\n  endtask\nendmodule\n", &["m", "run"], SymbolKind::Task)]
#[case("module m #(parameter int W = 1) ();\nendmodule\n", &["m", "W"], SymbolKind::Parameter)]
fn test_declaration_kinds(
    #[case] source: &str,
    #[case] path: &[&str],
    #[case] expected: SymbolKind,
) {
    let ws = Workspace::new(&[("f.sv", source)]);
    let mut project = project(&ws);
    let mut table = SymbolTable::new();
    let file = project.open("f.sv");
    let diagnostics = index_file(file, &mut table, &mut project, &DeclarationPatterns::new());
    assert!(diagnostics.is_empty(), "{diagnostics:?}");

    let id = table
        .lookup_path(path.iter().copied())
        .unwrap_or_else(|| panic!("{path:?} missing from\n{}", table.print_definitions()));
    assert_eq!(table.get(id).unwrap().kind(), expected);
}

#[test]
fn test_unreadable_file_is_reported() {
    let ws = Workspace::new(&[]);
    let mut project = project(&ws);
    let mut table = SymbolTable::new();
    let file = project.open("gone.sv");
    let diagnostics = index_file(file, &mut table, &mut project, &DeclarationPatterns::new());
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].code.as_deref(), Some(codes::UNREADABLE_FILE));
    assert!(table.is_empty());
}
