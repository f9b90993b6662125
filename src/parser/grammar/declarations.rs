//! Parameter, data, net, port, typedef and instance declarations.

use crate::parser::parser::{Parser, user_type_then_name};
use crate::parser::syntax_kind::SyntaxKind;

impl Parser<'_> {
    /// ParamPortList = '#' '(' (ParamDeclaration (',' ParamDeclaration)*)? ')'
    pub(super) fn parse_param_port_list(&mut self) {
        use SyntaxKind::*;

        self.start_node(PARAM_PORT_LIST);
        self.bump();
        self.expect(L_PAREN);
        while !self.at_eof() && !self.at(R_PAREN) {
            let before = self.progress();
            self.parse_param_declaration(true);
            if !self.eat(COMMA) || self.progress() == before {
                break;
            }
        }
        self.expect(R_PAREN);
        self.finish_node();
    }

    /// ParamDeclaration = ('parameter' | 'localparam')? (DataType | 'type')?
    ///                    ParamAssignment (',' ParamAssignment)* ';'?
    ///
    /// Inside a parameter port list there is no `;`, and a comma only
    /// continues the current declaration when a bare name follows it.
    pub(super) fn parse_param_declaration(&mut self, in_list: bool) {
        use SyntaxKind::*;

        self.start_node(PARAM_DECLARATION);
        self.bump_or_absent(&[PARAMETER_KW, LOCALPARAM_KW]);
        if self.at(TYPE_KW) {
            self.bump();
        } else if self.at_data_type() {
            self.parse_data_type();
        } else {
            self.absent();
        }

        let terminators: &[SyntaxKind] = if in_list {
            &[COMMA, R_PAREN]
        } else {
            &[COMMA, SEMICOLON]
        };
        self.start_node(PARAM_ASSIGNMENT_LIST);
        loop {
            self.start_node(PARAM_ASSIGNMENT);
            self.expect_name();
            self.parse_optional_unpacked_dimensions();
            self.parse_optional_initializer(terminators);
            self.finish_node();

            if !self.at(COMMA) {
                break;
            }
            if in_list
                && !(self.nth(1).is_identifier()
                    && matches!(self.nth(2), EQ | COMMA | R_PAREN | L_BRACKET))
            {
                break;
            }
            self.bump();
        }
        self.finish_node();

        if in_list {
            self.absent();
        } else {
            self.expect(SEMICOLON);
        }
        self.finish_node();
    }

    /// PortList = '(' (PortDeclaration | PortReference) (',' ...)* ')'
    ///
    /// The first entry decides between ANSI declarations and non-ANSI
    /// references.
    pub(super) fn parse_port_list(&mut self) {
        use SyntaxKind::*;

        self.start_node(PORT_LIST);
        self.bump();
        let mut ansi = None;
        while !self.at_eof() && !self.at(R_PAREN) {
            let before = self.progress();
            let is_reference = self.at_name() && matches!(self.nth(1), COMMA | R_PAREN);
            if *ansi.get_or_insert(!is_reference) {
                self.parse_port_declaration(&[COMMA, R_PAREN]);
            } else if is_reference {
                self.start_node(PORT_REFERENCE);
                self.bump();
                self.finish_node();
            } else {
                self.parse_expression(&[COMMA, R_PAREN]);
            }
            if !self.eat(COMMA) || self.progress() == before {
                break;
            }
        }
        self.expect(R_PAREN);
        self.finish_node();
    }

    /// TfPortList = '(' (PortDeclaration (',' PortDeclaration)*)? ')'
    pub(super) fn parse_tf_port_list(&mut self) {
        use SyntaxKind::*;

        self.start_node(TF_PORT_LIST);
        self.bump();
        while !self.at_eof() && !self.at(R_PAREN) {
            let before = self.progress();
            self.parse_port_declaration(&[COMMA, R_PAREN]);
            if !self.eat(COMMA) || self.progress() == before {
                break;
            }
        }
        self.expect(R_PAREN);
        self.finish_node();
    }

    /// PortDeclaration = Direction? NetType? DataType? Name UnpackedDims? Initializer?
    fn parse_port_declaration(&mut self, terminators: &[SyntaxKind]) {
        self.start_node(SyntaxKind::PORT_DECLARATION);
        if self.current().is_direction() {
            self.bump();
        } else {
            self.absent();
        }
        self.parse_optional_net_type();
        if self.at_data_type() {
            self.parse_data_type();
        } else {
            self.absent();
        }
        self.expect_name();
        self.parse_optional_unpacked_dimensions();
        self.parse_optional_initializer(terminators);
        self.finish_node();
    }

    /// ModulePortDeclaration = Direction NetType? DataType? Declarators ';'
    pub(super) fn parse_module_port_declaration(&mut self) {
        self.start_node(SyntaxKind::MODULE_PORT_DECLARATION);
        self.bump();
        self.parse_optional_net_type();
        if self.at_data_type() {
            self.parse_data_type();
        } else {
            self.absent();
        }
        self.parse_declarator_list();
        self.expect(SyntaxKind::SEMICOLON);
        self.finish_node();
    }

    fn parse_optional_net_type(&mut self) {
        if self.current().is_net_type() || self.at(SyntaxKind::VAR_KW) {
            self.bump();
        } else {
            self.absent();
        }
    }

    /// DataDeclaration = Qualifiers? DataType Declarators ';'
    pub(super) fn parse_data_declaration(&mut self) {
        self.start_node(SyntaxKind::DATA_DECLARATION);
        self.parse_qualifiers();
        self.parse_data_type();
        self.parse_declarator_list();
        self.expect(SyntaxKind::SEMICOLON);
        self.finish_node();
    }

    /// NetDeclaration = NetType DataType? Declarators ';'
    pub(super) fn parse_net_declaration(&mut self) {
        self.start_node(SyntaxKind::NET_DECLARATION);
        self.bump();
        if self.at_data_type() {
            self.parse_data_type();
        } else {
            self.absent();
        }
        self.parse_declarator_list();
        self.expect(SyntaxKind::SEMICOLON);
        self.finish_node();
    }

    /// TypeDeclaration = 'typedef' (DataType | ForwardType) Name UnpackedDims? ';'
    pub(super) fn parse_type_declaration(&mut self) {
        use SyntaxKind::*;

        self.start_node(TYPE_DECLARATION);
        self.bump();

        let forward_len = match (self.nth(0), self.nth(1), self.nth(2)) {
            (CLASS_KW, _, _) => 1,
            (INTERFACE_KW, CLASS_KW, _) => 2,
            (ENUM_KW | STRUCT_KW | UNION_KW, name, SEMICOLON) if name.is_identifier() => 1,
            _ => 0,
        };
        if forward_len > 0 {
            self.start_node(FORWARD_TYPE);
            self.bump_n(forward_len);
            self.finish_node();
        } else {
            self.parse_data_type();
        }

        self.expect_name();
        self.parse_optional_unpacked_dimensions();
        self.expect(SEMICOLON);
        self.finish_node();
    }

    /// GenvarDeclaration = 'genvar' Declarators ';'
    pub(super) fn parse_genvar_declaration(&mut self) {
        self.start_node(SyntaxKind::GENVAR_DECLARATION);
        self.bump();
        self.parse_declarator_list();
        self.expect(SyntaxKind::SEMICOLON);
        self.finish_node();
    }

    /// Instantiation = TypeReference Instance (',' Instance)* ';'
    /// Instance = Name UnpackedDims? '(' ... ')'
    pub(super) fn parse_instantiation(&mut self) {
        use SyntaxKind::*;

        self.start_node(INSTANTIATION);
        self.parse_type_reference();
        self.start_node(INSTANCE_LIST);
        loop {
            self.start_node(INSTANCE);
            self.expect_name();
            self.parse_optional_unpacked_dimensions();
            self.parse_parenthesized(PORT_CONNECTIONS);
            self.finish_node();
            if !self.eat(COMMA) {
                break;
            }
        }
        self.finish_node();
        self.expect(SEMICOLON);
        self.finish_node();
    }

    /// Declarators = Declarator (',' Declarator)*
    /// Declarator = Name UnpackedDims? Initializer?
    pub(super) fn parse_declarator_list(&mut self) {
        use SyntaxKind::*;

        self.start_node(DECLARATOR_LIST);
        loop {
            self.start_node(DECLARATOR);
            self.expect_name();
            self.parse_optional_unpacked_dimensions();
            self.parse_optional_initializer(&[COMMA, SEMICOLON]);
            self.finish_node();
            if !self.eat(COMMA) {
                break;
            }
        }
        self.finish_node();
    }

    /// Initializer = '=' Expression
    pub(super) fn parse_optional_initializer(&mut self, terminators: &[SyntaxKind]) {
        if self.at(SyntaxKind::EQ) {
            self.start_node(SyntaxKind::INITIALIZER);
            self.bump();
            self.parse_expression(terminators);
            self.finish_node();
        } else {
            self.absent();
        }
    }

    /// Check for `Type name` followed by something that ends a declarator
    pub(super) fn at_user_type_declaration(&self) -> bool {
        use SyntaxKind::*;
        let rest = self.rest();
        user_type_then_name(rest)
            .is_some_and(|i| matches!(rest.get(i + 1), Some(SEMICOLON | COMMA | EQ | L_BRACKET)))
    }

    /// Check whether a data type (explicit or implicit) starts here and is
    /// followed by a declared name
    pub(super) fn at_data_type(&self) -> bool {
        use SyntaxKind::*;
        let kind = self.current();
        kind.is_builtin_type()
            || matches!(
                kind,
                SIGNED_KW | UNSIGNED_KW | L_BRACKET | ENUM_KW | STRUCT_KW | UNION_KW | VIRTUAL_KW
            )
            || (kind.is_identifier() && user_type_then_name(self.rest()).is_some())
    }
}
