//! Item dispatch and scope-forming declarations.

use super::ItemContext;
use crate::parser::parser::{Parser, type_reference_len};
use crate::parser::syntax_kind::SyntaxKind;

/// Tokens at which top-level error recovery resumes
const ITEM_RECOVERY: &[SyntaxKind] = &[
    SyntaxKind::MODULE_KW,
    SyntaxKind::MACROMODULE_KW,
    SyntaxKind::INTERFACE_KW,
    SyntaxKind::PACKAGE_KW,
    SyntaxKind::CLASS_KW,
    SyntaxKind::VIRTUAL_KW,
    SyntaxKind::TYPEDEF_KW,
    SyntaxKind::FUNCTION_KW,
    SyntaxKind::TASK_KW,
    SyntaxKind::IMPORT_KW,
    SyntaxKind::INCLUDE_KW,
    SyntaxKind::PARAMETER_KW,
    SyntaxKind::LOCALPARAM_KW,
];

impl Parser<'_> {
    /// Item = Include | Module | Interface | Package | Class | Function | Task
    ///      | Declaration | Instantiation | OpaqueItem
    pub(in crate::parser) fn parse_item(&mut self, ctx: ItemContext) {
        use SyntaxKind::*;

        match self.current() {
            INCLUDE_KW => self.parse_include(),
            MACRO_CALL => self.parse_macro_item(),
            MODULE_KW | MACROMODULE_KW => self.parse_module(),
            INTERFACE_KW if self.nth(1) == CLASS_KW => self.parse_class(),
            INTERFACE_KW => self.parse_interface(),
            PACKAGE_KW => self.parse_package(),
            CLASS_KW => self.parse_class(),
            VIRTUAL_KW if self.nth(1) == CLASS_KW => self.parse_class(),
            TYPEDEF_KW => self.parse_type_declaration(),
            PARAMETER_KW | LOCALPARAM_KW => self.parse_param_declaration(false),
            IMPORT_KW if self.nth(1) == STRING => self.parse_opaque_item(),
            IMPORT_KW => self.parse_package_import(),
            FUNCTION_KW => self.parse_function(),
            TASK_KW => self.parse_task(),
            GENVAR_KW => self.parse_genvar_declaration(),
            GENERATE_KW => self.parse_generate_region(),
            kind if kind.is_direction() => self.parse_module_port_declaration(),
            kind if kind.is_net_type() => self.parse_net_declaration(),
            kind if kind.is_qualifier() => self.parse_qualified_item(),
            kind if kind.is_builtin_type() && self.nth(1) != APOSTROPHE => {
                self.parse_data_declaration()
            }
            ENUM_KW | STRUCT_KW | UNION_KW => self.parse_data_declaration(),
            IDENT | ESCAPED_IDENT if ctx == ItemContext::Module && self.at_instantiation() => {
                self.parse_instantiation()
            }
            IDENT | ESCAPED_IDENT if self.at_user_type_declaration() => {
                self.parse_data_declaration()
            }
            _ if ctx == ItemContext::CompilationUnit => self.error_recover(
                format!("unexpected token: {:?}", self.current()),
                ITEM_RECOVERY,
            ),
            _ => self.parse_opaque_item(),
        }
    }

    /// Items until `end` (or any other body terminator) is reached
    fn parse_item_list(&mut self, kind: SyntaxKind, ctx: ItemContext) {
        self.start_node(kind);
        while !self.at_eof() && !self.current().is_end_of_body() {
            let before = self.progress();
            self.parse_item(ctx);
            if self.progress() == before {
                self.error(format!("stuck on token: {:?}", self.current()));
                self.bump();
            }
        }
        self.finish_node();
    }

    /// Number of leading qualifier keywords. A `virtual` that starts a
    /// virtual interface type is not a qualifier.
    pub(super) fn qualifier_count(&self) -> usize {
        let mut n = 0;
        loop {
            let kind = self.nth(n);
            if !kind.is_qualifier() {
                return n;
            }
            if kind == SyntaxKind::VIRTUAL_KW
                && (self.nth(n + 1) == SyntaxKind::INTERFACE_KW || self.nth(n + 1).is_identifier())
            {
                return n;
            }
            n += 1;
        }
    }

    /// Qualifiers = ('static' | 'local' | 'rand' | ...)*
    pub(super) fn parse_qualifiers(&mut self) {
        let n = self.qualifier_count();
        if n == 0 {
            self.absent();
            return;
        }
        self.start_node(SyntaxKind::QUALIFIERS);
        self.bump_n(n);
        self.finish_node();
    }

    /// Qualified function, task or data declaration
    fn parse_qualified_item(&mut self) {
        match self.nth(self.qualifier_count()) {
            SyntaxKind::FUNCTION_KW => self.parse_function(),
            SyntaxKind::TASK_KW => self.parse_task(),
            _ => self.parse_data_declaration(),
        }
    }

    /// Lifetime = 'static' | 'automatic'
    fn parse_lifetime(&mut self) {
        self.bump_or_absent(&[SyntaxKind::STATIC_KW, SyntaxKind::AUTOMATIC_KW]);
    }

    /// Label = ':' Name
    fn parse_label(&mut self) {
        if self.at(SyntaxKind::COLON) {
            self.start_node(SyntaxKind::LABEL);
            self.bump();
            self.expect_name();
            self.finish_node();
        } else {
            self.absent();
        }
    }

    /// Include = '`include' STRING
    fn parse_include(&mut self) {
        self.start_node(SyntaxKind::INCLUDE_DIRECTIVE);
        self.bump();
        self.expect(SyntaxKind::STRING);
        self.finish_node();
    }

    /// Module = ModuleHeader ModuleItem* 'endmodule' Label?
    fn parse_module(&mut self) {
        self.start_node(SyntaxKind::MODULE_DECLARATION);
        self.parse_module_header(SyntaxKind::MODULE_HEADER);
        self.parse_item_list(SyntaxKind::MODULE_ITEM_LIST, ItemContext::Module);
        self.expect(SyntaxKind::ENDMODULE_KW);
        self.parse_label();
        self.finish_node();
    }

    /// Interface = InterfaceHeader ModuleItem* 'endinterface' Label?
    fn parse_interface(&mut self) {
        self.start_node(SyntaxKind::INTERFACE_DECLARATION);
        self.parse_module_header(SyntaxKind::INTERFACE_HEADER);
        self.parse_item_list(SyntaxKind::MODULE_ITEM_LIST, ItemContext::Module);
        self.expect(SyntaxKind::ENDINTERFACE_KW);
        self.parse_label();
        self.finish_node();
    }

    /// Header = kw Lifetime? Name PackageImport* ParamPortList? PortList? ';'
    fn parse_module_header(&mut self, kind: SyntaxKind) {
        self.start_node(kind);
        self.bump();
        self.parse_lifetime();
        self.expect_name();

        if self.at(SyntaxKind::IMPORT_KW) {
            self.start_node(SyntaxKind::HEADER_IMPORTS);
            while self.at(SyntaxKind::IMPORT_KW) {
                self.parse_package_import();
            }
            self.finish_node();
        } else {
            self.absent();
        }

        if self.at(SyntaxKind::HASH) {
            self.parse_param_port_list();
        } else {
            self.absent();
        }

        if self.at(SyntaxKind::L_PAREN) {
            self.parse_port_list();
        } else {
            self.absent();
        }

        self.expect(SyntaxKind::SEMICOLON);
        self.finish_node();
    }

    /// Package = 'package' Lifetime? Name ';' PackageItem* 'endpackage' Label?
    fn parse_package(&mut self) {
        self.start_node(SyntaxKind::PACKAGE_DECLARATION);
        self.bump();
        self.parse_lifetime();
        self.expect_name();
        self.expect(SyntaxKind::SEMICOLON);
        self.parse_item_list(SyntaxKind::PACKAGE_ITEM_LIST, ItemContext::Package);
        self.expect(SyntaxKind::ENDPACKAGE_KW);
        self.parse_label();
        self.finish_node();
    }

    /// Class = ClassHeader ClassItem* 'endclass' Label?
    fn parse_class(&mut self) {
        self.start_node(SyntaxKind::CLASS_DECLARATION);
        self.parse_class_header();
        self.parse_item_list(SyntaxKind::CLASS_ITEM_LIST, ItemContext::Class);
        self.expect(SyntaxKind::ENDCLASS_KW);
        self.parse_label();
        self.finish_node();
    }

    /// ClassHeader = ('virtual' | 'interface')? 'class' Lifetime? Name
    ///               ParamPortList? Extends? Implements? ';'
    fn parse_class_header(&mut self) {
        use SyntaxKind::*;

        self.start_node(CLASS_HEADER);
        self.bump_or_absent(&[VIRTUAL_KW, INTERFACE_KW]);
        self.expect(CLASS_KW);
        self.parse_lifetime();
        self.expect_name();

        if self.at(HASH) {
            self.parse_param_port_list();
        } else {
            self.absent();
        }

        if self.at(EXTENDS_KW) {
            self.start_node(EXTENDS_CLAUSE);
            self.bump();
            self.parse_type_reference();
            if self.at(L_PAREN) {
                self.parse_parenthesized(ARGUMENTS);
            } else {
                self.absent();
            }
            self.finish_node();
        } else {
            self.absent();
        }

        if self.at(IMPLEMENTS_KW) {
            self.start_node(IMPLEMENTS_CLAUSE);
            self.bump();
            loop {
                self.parse_type_reference();
                if !self.eat(COMMA) {
                    break;
                }
            }
            self.finish_node();
        } else {
            self.absent();
        }

        self.expect(SEMICOLON);
        self.finish_node();
    }

    /// Function = FunctionHeader BlockItem* 'endfunction' Label?
    fn parse_function(&mut self) {
        use SyntaxKind::*;

        self.start_node(FUNCTION_DECLARATION);

        self.start_node(FUNCTION_HEADER);
        self.parse_qualifiers();
        self.expect(FUNCTION_KW);
        self.parse_lifetime();
        if !self.at(NEW_KW) && self.at_data_type() {
            self.parse_data_type();
        } else {
            self.absent();
        }
        self.parse_subroutine_name();
        if self.at(L_PAREN) {
            self.parse_tf_port_list();
        } else {
            self.absent();
        }
        self.expect(SEMICOLON);
        self.finish_node();

        self.parse_item_list(BLOCK_ITEM_LIST, ItemContext::Block);
        self.expect(ENDFUNCTION_KW);
        self.parse_label();
        self.finish_node();
    }

    /// Task = TaskHeader BlockItem* 'endtask' Label?
    fn parse_task(&mut self) {
        use SyntaxKind::*;

        self.start_node(TASK_DECLARATION);

        self.start_node(TASK_HEADER);
        self.parse_qualifiers();
        self.expect(TASK_KW);
        self.parse_lifetime();
        self.parse_subroutine_name();
        if self.at(L_PAREN) {
            self.parse_tf_port_list();
        } else {
            self.absent();
        }
        self.expect(SEMICOLON);
        self.finish_node();

        self.parse_item_list(BLOCK_ITEM_LIST, ItemContext::Block);
        self.expect(ENDTASK_KW);
        self.parse_label();
        self.finish_node();
    }

    /// SubroutineName = Name | 'new' | QualifiedId
    fn parse_subroutine_name(&mut self) {
        if self.at(SyntaxKind::NEW_KW) {
            self.bump();
        } else if self.at_name() && self.nth(1) == SyntaxKind::COLON_COLON {
            self.parse_qualified_id();
        } else {
            self.expect_name();
        }
    }

    /// GenerateRegion = 'generate' ModuleItem* 'endgenerate'
    fn parse_generate_region(&mut self) {
        self.start_node(SyntaxKind::GENERATE_REGION);
        self.bump();
        self.parse_item_list(SyntaxKind::MODULE_ITEM_LIST, ItemContext::Module);
        self.expect(SyntaxKind::ENDGENERATE_KW);
        self.finish_node();
    }

    /// PackageImport = 'import' ImportItem (',' ImportItem)* ';'
    fn parse_package_import(&mut self) {
        use SyntaxKind::*;

        self.start_node(PACKAGE_IMPORT);
        self.bump();
        loop {
            self.start_node(IMPORT_ITEM);
            self.expect_name();
            self.expect(COLON_COLON);
            if self.at_name() || (self.at(OPERATOR) && self.nth_text(0) == "*") {
                self.bump();
            } else {
                self.error("expected identifier or `*` in import");
            }
            self.finish_node();
            if !self.eat(COMMA) {
                break;
            }
        }
        self.expect(SEMICOLON);
        self.finish_node();
    }

    /// Check for `Type #(...)? name [dims] (` in a module body
    fn at_instantiation(&self) -> bool {
        let rest = self.rest();
        let Some(mut i) = type_reference_len(rest) else {
            return false;
        };
        if !rest.get(i).is_some_and(|k| k.is_identifier()) {
            return false;
        }
        i += 1;
        i += crate::parser::parser::dimensions_len(&rest[i..]);
        rest.get(i) == Some(&SyntaxKind::L_PAREN)
    }
}
