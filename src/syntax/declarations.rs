//! Typed accessors for declaration nodes.
//!
//! Each accessor names one slot of one construct and returns `None` for any
//! other shape, so callers can chain them without checking kinds first.

use super::tree::{self, identifier, normalized_text, subtree_as_node, subtree_as_token};
use crate::parser::{SyntaxKind, SyntaxNode, SyntaxToken};

/// Name of a module, interface, package, class, function, task or typedef
pub fn declared_name(node: &SyntaxNode) -> Option<SyntaxToken> {
    use SyntaxKind::*;
    match node.kind() {
        MODULE_DECLARATION => header_name(node, MODULE_HEADER),
        INTERFACE_DECLARATION => header_name(node, INTERFACE_HEADER),
        PACKAGE_DECLARATION => name_token(node, PACKAGE_DECLARATION, 2),
        CLASS_DECLARATION => {
            let header = subtree_as_node(node, CLASS_DECLARATION, 0, Some(CLASS_HEADER))?;
            name_token(&header, CLASS_HEADER, 3)
        }
        FUNCTION_DECLARATION => {
            let header = subtree_as_node(node, FUNCTION_DECLARATION, 0, Some(FUNCTION_HEADER))?;
            name_token(&header, FUNCTION_HEADER, 4)
        }
        TASK_DECLARATION => {
            let header = subtree_as_node(node, TASK_DECLARATION, 0, Some(TASK_HEADER))?;
            name_token(&header, TASK_HEADER, 3)
        }
        TYPE_DECLARATION => name_token(node, TYPE_DECLARATION, 2),
        PARAM_ASSIGNMENT => name_token(node, PARAM_ASSIGNMENT, 0),
        ENUM_NAME => name_token(node, ENUM_NAME, 0),
        DECLARATOR => name_token(node, DECLARATOR, 0),
        PORT_DECLARATION => name_token(node, PORT_DECLARATION, 3),
        INSTANCE => name_token(node, INSTANCE, 0),
        _ => None,
    }
}

fn header_name(node: &SyntaxNode, header_kind: SyntaxKind) -> Option<SyntaxToken> {
    let header = subtree_as_node(node, node.kind(), 0, Some(header_kind))?;
    name_token(&header, header_kind, 2)
}

fn name_token(node: &SyntaxNode, parent_kind: SyntaxKind, index: usize) -> Option<SyntaxToken> {
    subtree_as_token(node, parent_kind, index).filter(|t| t.kind().is_identifier())
}

/// Closing label of a scope (`endmodule : name`)
pub fn end_label(node: &SyntaxNode) -> Option<SyntaxToken> {
    let label = tree::slot(node, tree::slot_count(node).checked_sub(1)?)?.into_node()?;
    name_token(&label, SyntaxKind::LABEL, 1)
}

/// Whether a parameter declaration uses `localparam`
pub fn is_localparam(param_declaration: &SyntaxNode) -> bool {
    subtree_as_token(param_declaration, SyntaxKind::PARAM_DECLARATION, 0)
        .is_some_and(|t| t.kind() == SyntaxKind::LOCALPARAM_KW)
}

/// Declared type of a parameter declaration; `type` for type parameters
pub fn param_type(param_declaration: &SyntaxNode) -> Option<String> {
    match tree::subtree(param_declaration, SyntaxKind::PARAM_DECLARATION, 1)? {
        rowan::NodeOrToken::Token(token) => Some(token.text().to_string()),
        rowan::NodeOrToken::Node(node) => data_type_text(&node),
    }
}

/// Text of an explicit `DATA_TYPE`; `None` for an implicit one
pub fn data_type_text(data_type: &SyntaxNode) -> Option<String> {
    if data_type.kind() != SyntaxKind::DATA_TYPE || tree::slots(data_type).all(|s| s.is_none()) {
        return None;
    }
    Some(normalized_text(data_type))
}

/// Declared type of the declaration owning a `DECLARATOR_LIST`
pub fn declarator_list_type(declarator_list: &SyntaxNode) -> Option<String> {
    use SyntaxKind::*;
    let owner = declarator_list.parent()?;
    let index = match owner.kind() {
        DATA_DECLARATION => 1,
        NET_DECLARATION => 1,
        MODULE_PORT_DECLARATION => 2,
        STRUCT_MEMBER => 1,
        _ => return None,
    };
    let data_type = subtree_as_node(&owner, owner.kind(), index, Some(DATA_TYPE))?;
    data_type_text(&data_type)
}

/// Type text of a typedef (`enum logic [1:0] {...}`, `class`, ...)
pub fn typedef_type(type_declaration: &SyntaxNode) -> Option<String> {
    let node = subtree_as_node(type_declaration, SyntaxKind::TYPE_DECLARATION, 1, None)?;
    match node.kind() {
        SyntaxKind::FORWARD_TYPE => Some(normalized_text(&node)),
        _ => data_type_text(&node),
    }
}

/// Whether a typedef is a forward declaration (`typedef class c;`)
pub fn is_forward_typedef(type_declaration: &SyntaxNode) -> bool {
    subtree_as_node(
        type_declaration,
        SyntaxKind::TYPE_DECLARATION,
        1,
        Some(SyntaxKind::FORWARD_TYPE),
    )
    .is_some()
}

/// Direction keyword of an ANSI port or a module port declaration
pub fn port_direction(node: &SyntaxNode) -> Option<SyntaxToken> {
    match node.kind() {
        SyntaxKind::PORT_DECLARATION | SyntaxKind::MODULE_PORT_DECLARATION => {
            subtree_as_token(node, node.kind(), 0).filter(|t| t.kind().is_direction())
        }
        _ => None,
    }
}

/// Declared type of an ANSI port
pub fn port_type(port_declaration: &SyntaxNode) -> Option<String> {
    let data_type = subtree_as_node(
        port_declaration,
        SyntaxKind::PORT_DECLARATION,
        2,
        Some(SyntaxKind::DATA_TYPE),
    )?;
    data_type_text(&data_type)
}

/// Base class of a class declaration
pub fn class_base(class_declaration: &SyntaxNode) -> Option<String> {
    use SyntaxKind::*;
    let header = subtree_as_node(class_declaration, CLASS_DECLARATION, 0, Some(CLASS_HEADER))?;
    let extends = subtree_as_node(&header, CLASS_HEADER, 5, Some(EXTENDS_CLAUSE))?;
    let type_ref = subtree_as_node(&extends, EXTENDS_CLAUSE, 1, Some(TYPE_REFERENCE))?;
    Some(normalized_text(&type_ref))
}

/// Module, interface or class being instantiated
pub fn instance_type(instance: &SyntaxNode) -> Option<SyntaxToken> {
    use SyntaxKind::*;
    let instantiation = instance.parent()?.parent()?;
    let type_ref = subtree_as_node(&instantiation, INSTANTIATION, 0, Some(TYPE_REFERENCE))?;
    identifier(&type_ref.into())
}

/// Return type of a function
pub fn function_return_type(function_declaration: &SyntaxNode) -> Option<String> {
    use SyntaxKind::*;
    let header = subtree_as_node(
        function_declaration,
        FUNCTION_DECLARATION,
        0,
        Some(FUNCTION_HEADER),
    )?;
    let data_type = subtree_as_node(&header, FUNCTION_HEADER, 3, Some(DATA_TYPE))?;
    data_type_text(&data_type)
}

/// Package and item of one `import p::x;` item. The item is `None` for `p::*`.
pub fn import_item(import_item: &SyntaxNode) -> Option<(SyntaxToken, Option<SyntaxToken>)> {
    let package = name_token(import_item, SyntaxKind::IMPORT_ITEM, 0)?;
    let item = name_token(import_item, SyntaxKind::IMPORT_ITEM, 2);
    Some((package, item))
}

/// File name of an `` `include "..." `` directive, quotes removed
pub fn include_path(include: &SyntaxNode) -> Option<String> {
    let literal = subtree_as_token(include, SyntaxKind::INCLUDE_DIRECTIVE, 1)?;
    let text = literal.text();
    let inner = text.strip_prefix('"')?.strip_suffix('"')?;
    (!inner.is_empty()).then(|| inner.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;

    fn nodes(src: &str, kind: SyntaxKind) -> Vec<SyntaxNode> {
        let parse = parse(src);
        assert!(parse.ok(), "{:?}", parse.errors);
        parse
            .syntax()
            .descendants()
            .filter(|n| n.kind() == kind)
            .collect()
    }

    fn name_of(node: &SyntaxNode) -> String {
        declared_name(node).unwrap().text().to_string()
    }

    #[test]
    fn test_scope_names() {
        let src = "package p;\n  virtual class c #(type T = int) extends base;\n    static function automatic int f();\n    endfunction\n    task t;\n    endtask\n  endclass : c\nendpackage\ninterface bus_if; endinterface\nmodule automatic m; endmodule";
        assert_eq!(name_of(&nodes(src, SyntaxKind::PACKAGE_DECLARATION)[0]), "p");
        let class = &nodes(src, SyntaxKind::CLASS_DECLARATION)[0];
        assert_eq!(name_of(class), "c");
        assert_eq!(class_base(class).as_deref(), Some("base"));
        assert_eq!(end_label(class).unwrap().text(), "c");
        let function = &nodes(src, SyntaxKind::FUNCTION_DECLARATION)[0];
        assert_eq!(name_of(function), "f");
        assert_eq!(function_return_type(function).as_deref(), Some("int"));
        assert_eq!(name_of(&nodes(src, SyntaxKind::TASK_DECLARATION)[0]), "t");
        assert_eq!(name_of(&nodes(src, SyntaxKind::INTERFACE_DECLARATION)[0]), "bus_if");
        assert_eq!(name_of(&nodes(src, SyntaxKind::MODULE_DECLARATION)[0]), "m");
    }

    #[test]
    fn test_constructor_and_out_of_class_method_have_no_simple_name() {
        let src = "class c;\n  function new(); endfunction\nendclass\nfunction void c::f(); endfunction";
        for function in nodes(src, SyntaxKind::FUNCTION_DECLARATION) {
            assert!(declared_name(&function).is_none());
        }
    }

    #[test]
    fn test_parameters() {
        let src = "module m #(parameter int W = 8, type T = logic) ();\n  localparam D = 2;\nendmodule";
        let decls = nodes(src, SyntaxKind::PARAM_DECLARATION);
        assert_eq!(decls.len(), 3);
        assert!(!is_localparam(&decls[0]));
        assert_eq!(param_type(&decls[0]).as_deref(), Some("int"));
        assert_eq!(param_type(&decls[1]).as_deref(), Some("type"));
        assert!(is_localparam(&decls[2]));
        assert_eq!(param_type(&decls[2]), None);
    }

    #[test]
    fn test_declarator_types() {
        let src = "module m(input logic [3:0] a, b);\n  wire w;\n  my_pkg::t v;\n  output reg [1:0] q;\nendmodule";
        let ports = nodes(src, SyntaxKind::PORT_DECLARATION);
        assert_eq!(port_direction(&ports[0]).unwrap().text(), "input");
        assert_eq!(port_type(&ports[0]).as_deref(), Some("logic[3:0]"));
        assert!(port_direction(&ports[1]).is_none());

        let lists = nodes(src, SyntaxKind::DECLARATOR_LIST);
        assert_eq!(declarator_list_type(&lists[0]), None);
        assert_eq!(declarator_list_type(&lists[1]).as_deref(), Some("my_pkg::t"));
        assert_eq!(declarator_list_type(&lists[2]).as_deref(), Some("reg[1:0]"));
    }

    #[test]
    fn test_typedefs_imports_includes_instances() {
        let src = "`include \"defs.svh\"\npackage p;\n  import q::*, r::x;\n  typedef class c;\n  typedef enum {A} e_t;\nendpackage\nmodule top;\n  sub u1 (), u2 ();\nendmodule";
        let typedefs = nodes(src, SyntaxKind::TYPE_DECLARATION);
        assert!(is_forward_typedef(&typedefs[0]));
        assert_eq!(typedef_type(&typedefs[0]).as_deref(), Some("class"));
        assert!(!is_forward_typedef(&typedefs[1]));
        assert_eq!(name_of(&typedefs[1]), "e_t");

        let imports = nodes(src, SyntaxKind::IMPORT_ITEM);
        let (package, item) = import_item(&imports[0]).unwrap();
        assert_eq!(package.text(), "q");
        assert!(item.is_none());
        let (_, item) = import_item(&imports[1]).unwrap();
        assert_eq!(item.unwrap().text(), "x");

        let include = &nodes(src, SyntaxKind::INCLUDE_DIRECTIVE)[0];
        assert_eq!(include_path(include).as_deref(), Some("defs.svh"));

        let instances = nodes(src, SyntaxKind::INSTANCE);
        assert_eq!(instances.len(), 2);
        assert_eq!(instance_type(&instances[1]).unwrap().text(), "sub");
    }

    #[test]
    fn test_wrong_kind_is_none() {
        let module = &nodes("module m; endmodule", SyntaxKind::MODULE_DECLARATION)[0];
        assert!(class_base(module).is_none());
        assert!(port_direction(module).is_none());
        assert!(!is_localparam(module));
        assert!(include_path(module).is_none());
        assert!(end_label(module).is_none());
    }
}
