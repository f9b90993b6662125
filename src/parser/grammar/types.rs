//! Data types, type references and dimensions.

use crate::parser::parser::Parser;
use crate::parser::syntax_kind::SyntaxKind;

impl Parser<'_> {
    /// DataType = (Keyword | Enum | Struct | VirtualInterface | TypeReference)?
    ///            Signing? PackedDimensions?
    pub(super) fn parse_data_type(&mut self) {
        use SyntaxKind::*;

        self.start_node(DATA_TYPE);
        match self.current() {
            kind if kind.is_builtin_type() => self.bump(),
            ENUM_KW => self.parse_enum_type(),
            STRUCT_KW | UNION_KW => self.parse_struct_type(),
            VIRTUAL_KW => self.parse_virtual_interface_type(),
            IDENT | ESCAPED_IDENT => self.parse_type_reference(),
            _ => self.absent(),
        }
        self.bump_or_absent(&[SIGNED_KW, UNSIGNED_KW]);
        if self.at(L_BRACKET) {
            self.parse_dimensions(PACKED_DIMENSIONS);
        } else {
            self.absent();
        }
        self.finish_node();
    }

    /// TypeReference = QualifiedId ParamValueList? ModportSelect?
    pub(super) fn parse_type_reference(&mut self) {
        use SyntaxKind::*;

        self.start_node(TYPE_REFERENCE);
        self.parse_qualified_id();

        if self.at(HASH) {
            self.start_node(PARAM_VALUE_LIST);
            self.bump();
            if self.at(L_PAREN) {
                self.bump();
                self.bump_balanced(&[R_PAREN]);
                self.expect(R_PAREN);
            } else {
                self.bump();
            }
            self.finish_node();
        } else {
            self.absent();
        }

        if self.at(DOT) && self.nth(1).is_identifier() && self.nth(2).is_identifier() {
            self.start_node(MODPORT_SELECT);
            self.bump_n(2);
            self.finish_node();
        } else {
            self.absent();
        }
        self.finish_node();
    }

    /// QualifiedId = Name ('::' (Name | 'new'))*
    pub(super) fn parse_qualified_id(&mut self) {
        use SyntaxKind::*;

        self.start_node(QUALIFIED_ID);
        self.expect_name();
        while self.at(COLON_COLON) && (self.nth(1).is_identifier() || self.nth(1) == NEW_KW) {
            self.bump_n(2);
        }
        self.finish_node();
    }

    /// Enum = 'enum' DataType? '{' EnumName (',' EnumName)* '}'
    fn parse_enum_type(&mut self) {
        use SyntaxKind::*;

        self.start_node(ENUM_TYPE);
        self.bump();
        if self.at(L_BRACE) {
            self.absent();
        } else {
            self.parse_data_type();
        }
        self.expect(L_BRACE);

        self.start_node(ENUM_NAME_LIST);
        loop {
            self.start_node(ENUM_NAME);
            self.expect_name();
            if self.at(L_BRACKET) {
                self.parse_dimension();
            } else {
                self.absent();
            }
            self.parse_optional_initializer(&[COMMA, R_BRACE]);
            self.finish_node();
            if !self.eat(COMMA) {
                break;
            }
        }
        self.finish_node();

        self.expect(R_BRACE);
        self.finish_node();
    }

    /// Struct = ('struct' | 'union') 'packed'? Signing? '{' StructMember* '}'
    fn parse_struct_type(&mut self) {
        use SyntaxKind::*;

        self.start_node(STRUCT_TYPE);
        self.bump();
        self.bump_or_absent(&[PACKED_KW]);
        self.bump_or_absent(&[SIGNED_KW, UNSIGNED_KW]);
        self.expect(L_BRACE);

        self.start_node(STRUCT_MEMBER_LIST);
        while !self.at_eof() && !self.at(R_BRACE) && !self.current().is_end_of_body() {
            let before = self.progress();
            self.start_node(STRUCT_MEMBER);
            self.parse_qualifiers();
            self.parse_data_type();
            self.parse_declarator_list();
            self.expect(SEMICOLON);
            self.finish_node();
            if self.progress() == before {
                self.bump();
            }
        }
        self.finish_node();

        self.expect(R_BRACE);
        self.finish_node();
    }

    /// VirtualInterface = 'virtual' 'interface'? TypeReference
    fn parse_virtual_interface_type(&mut self) {
        self.start_node(SyntaxKind::VIRTUAL_INTERFACE_TYPE);
        self.bump();
        self.bump_or_absent(&[SyntaxKind::INTERFACE_KW]);
        self.parse_type_reference();
        self.finish_node();
    }

    /// Dimensions = Dimension+
    fn parse_dimensions(&mut self, kind: SyntaxKind) {
        self.start_node(kind);
        while self.at(SyntaxKind::L_BRACKET) {
            self.parse_dimension();
        }
        self.finish_node();
    }

    pub(super) fn parse_optional_unpacked_dimensions(&mut self) {
        if self.at(SyntaxKind::L_BRACKET) {
            self.parse_dimensions(SyntaxKind::UNPACKED_DIMENSIONS);
        } else {
            self.absent();
        }
    }

    /// Dimension = '[' tokens ']'
    fn parse_dimension(&mut self) {
        self.start_node(SyntaxKind::DIMENSION);
        self.bump();
        self.bump_balanced(&[SyntaxKind::R_BRACKET]);
        self.expect(SyntaxKind::R_BRACKET);
        self.finish_node();
    }

    /// `( tokens )` wrapped in a node of the given kind
    pub(super) fn parse_parenthesized(&mut self, kind: SyntaxKind) {
        self.start_node(kind);
        self.expect(SyntaxKind::L_PAREN);
        self.bump_balanced(&[SyntaxKind::R_PAREN]);
        self.expect(SyntaxKind::R_PAREN);
        self.finish_node();
    }
}
