//! Syntax kinds for the Rowan-based CST
//!
//! This enum defines all node and token kinds in the syntax tree for the
//! declaration subset of SystemVerilog.
//!
//! ## Child slots
//!
//! The *slots* of a node are its non-trivia children in order. Optional
//! grammar elements that are omitted in the source still occupy their slot
//! as a zero-width [`SyntaxKind::ABSENT`] node, so a given slot index means
//! the same thing in every variant of a construct. Node docs below list the
//! slot layout; `?` marks slots that may be `ABSENT`, `*` marks a run of
//! elements that only ever appears last.

/// All syntax kinds (tokens and nodes) of the SystemVerilog subset
///
/// Tokens are leaves (identifiers, keywords, punctuation).
/// Nodes are composite (modules, declarations, lists).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u16)]
#[allow(non_camel_case_types)]
pub enum SyntaxKind {
    // =========================================================================
    // TRIVIA (preserved but not semantically meaningful)
    // =========================================================================
    WHITESPACE = 0,
    LINE_COMMENT,
    BLOCK_COMMENT,
    /// Compiler directives other than `` `include `` (`` `define ``, `` `ifdef X ``, ...)
    DIRECTIVE,

    // =========================================================================
    // LITERALS AND NAMES
    // =========================================================================
    IDENT,          // foo
    ESCAPED_IDENT,  // \foo+bar
    SYSTEM_IDENT,   // $display
    MACRO_CALL,     // `FOO
    INT_NUMBER,     // 42
    REAL_NUMBER,    // 1.5e3
    BASED_NUMBER,   // 8'hFF
    UNBASED_NUMBER, // '1
    STRING,         // "text"

    // =========================================================================
    // PUNCTUATION
    // =========================================================================
    L_PAREN,    // (
    R_PAREN,    // )
    L_BRACKET,  // [
    R_BRACKET,  // ]
    L_BRACE,    // {
    R_BRACE,    // }
    SEMICOLON,  // ;
    COLON,      // :
    COLON_COLON, // ::
    COMMA,      // ,
    DOT,        // .
    EQ,         // =
    HASH,       // #
    AT,         // @
    APOSTROPHE, // '
    /// Any other operator (`+`, `<=`, `&&`, `->`, ...)
    OPERATOR,

    // =========================================================================
    // KEYWORDS
    // =========================================================================
    ALWAYS_KW,
    ALWAYS_COMB_KW,
    ALWAYS_FF_KW,
    ALWAYS_LATCH_KW,
    ASSERT_KW,
    ASSIGN_KW,
    ASSUME_KW,
    AUTOMATIC_KW,
    BEGIN_KW,
    BIT_KW,
    BREAK_KW,
    BYTE_KW,
    CASE_KW,
    CASEX_KW,
    CASEZ_KW,
    CHANDLE_KW,
    CLASS_KW,
    CLOCKING_KW,
    CONST_KW,
    CONSTRAINT_KW,
    CONTINUE_KW,
    COVER_KW,
    COVERGROUP_KW,
    DEASSIGN_KW,
    DEFAULT_KW,
    DISABLE_KW,
    DO_KW,
    ELSE_KW,
    END_KW,
    ENDCASE_KW,
    ENDCLASS_KW,
    ENDCLOCKING_KW,
    ENDFUNCTION_KW,
    ENDGENERATE_KW,
    ENDGROUP_KW,
    ENDINTERFACE_KW,
    ENDMODULE_KW,
    ENDPACKAGE_KW,
    ENDPROPERTY_KW,
    ENDSEQUENCE_KW,
    ENDSPECIFY_KW,
    ENDTASK_KW,
    ENUM_KW,
    EVENT_KW,
    EXPORT_KW,
    EXTENDS_KW,
    EXTERN_KW,
    FINAL_KW,
    FOR_KW,
    FORCE_KW,
    FOREACH_KW,
    FOREVER_KW,
    FORK_KW,
    FUNCTION_KW,
    GENERATE_KW,
    GENVAR_KW,
    IF_KW,
    IMPLEMENTS_KW,
    IMPORT_KW,
    INCLUDE_KW, // `include
    INITIAL_KW,
    INOUT_KW,
    INPUT_KW,
    INT_KW,
    INTEGER_KW,
    INTERFACE_KW,
    JOIN_KW,
    JOIN_ANY_KW,
    JOIN_NONE_KW,
    LOCAL_KW,
    LOCALPARAM_KW,
    LOGIC_KW,
    LONGINT_KW,
    MACROMODULE_KW,
    MODPORT_KW,
    MODULE_KW,
    NEW_KW,
    NULL_KW,
    OUTPUT_KW,
    PACKAGE_KW,
    PACKED_KW,
    PARAMETER_KW,
    PROPERTY_KW,
    PROTECTED_KW,
    PURE_KW,
    RAND_KW,
    RANDC_KW,
    RANDCASE_KW,
    REAL_KW,
    REALTIME_KW,
    REF_KW,
    REG_KW,
    RELEASE_KW,
    REPEAT_KW,
    RETURN_KW,
    SEQUENCE_KW,
    SHORTINT_KW,
    SHORTREAL_KW,
    SIGNED_KW,
    SPECIFY_KW,
    STATIC_KW,
    STRING_KW,
    STRUCT_KW,
    SUPER_KW,
    SUPPLY0_KW,
    SUPPLY1_KW,
    TASK_KW,
    THIS_KW,
    TIME_KW,
    TRI_KW,
    TRI0_KW,
    TRI1_KW,
    TRIAND_KW,
    TRIOR_KW,
    TRIREG_KW,
    TYPE_KW,
    TYPEDEF_KW,
    UNION_KW,
    UNSIGNED_KW,
    UWIRE_KW,
    VAR_KW,
    VIRTUAL_KW,
    VOID_KW,
    WAIT_KW,
    WAND_KW,
    WHILE_KW,
    WIRE_KW,
    WOR_KW,

    // =========================================================================
    // NODES
    // =========================================================================
    /// Root node: `item*`
    SOURCE_FILE,
    /// Zero-width placeholder for an omitted optional element.
    ABSENT,
    /// `[MODULE_HEADER, MODULE_ITEM_LIST, endmodule, LABEL?]`
    MODULE_DECLARATION,
    /// `[INTERFACE_HEADER, MODULE_ITEM_LIST, endinterface, LABEL?]`
    INTERFACE_DECLARATION,
    /// `[module|macromodule, LIFETIME?, name, HEADER_IMPORTS?, PARAM_PORT_LIST?, PORT_LIST?, ;]`
    MODULE_HEADER,
    /// `[interface, LIFETIME?, name, HEADER_IMPORTS?, PARAM_PORT_LIST?, PORT_LIST?, ;]`
    INTERFACE_HEADER,
    /// `item*`
    MODULE_ITEM_LIST,
    /// `[package, LIFETIME?, name, ;, PACKAGE_ITEM_LIST, endpackage, LABEL?]`
    PACKAGE_DECLARATION,
    /// `item*`
    PACKAGE_ITEM_LIST,
    /// `[CLASS_HEADER, CLASS_ITEM_LIST, endclass, LABEL?]`
    CLASS_DECLARATION,
    /// `[virtual|interface?, class, LIFETIME?, name, PARAM_PORT_LIST?, EXTENDS_CLAUSE?, IMPLEMENTS_CLAUSE?, ;]`
    CLASS_HEADER,
    /// `item*`
    CLASS_ITEM_LIST,
    /// `[extends, TYPE_REFERENCE, ARGUMENTS?]`
    EXTENDS_CLAUSE,
    /// `[implements, TYPE_REFERENCE*]`
    IMPLEMENTS_CLAUSE,
    /// `( ... )` after a base class
    ARGUMENTS,
    /// `[FUNCTION_HEADER, BLOCK_ITEM_LIST, endfunction, LABEL?]`
    FUNCTION_DECLARATION,
    /// `[QUALIFIERS?, function, LIFETIME?, DATA_TYPE?, name, TF_PORT_LIST?, ;]`
    ///
    /// `name` is an identifier token, `new`, or a `QUALIFIED_ID` for
    /// out-of-block method definitions.
    FUNCTION_HEADER,
    /// `[TASK_HEADER, BLOCK_ITEM_LIST, endtask, LABEL?]`
    TASK_DECLARATION,
    /// `[QUALIFIERS?, task, LIFETIME?, name, TF_PORT_LIST?, ;]`
    TASK_HEADER,
    /// `item*` of a function or task body
    BLOCK_ITEM_LIST,
    /// `( PORT_DECLARATION , ... )`
    TF_PORT_LIST,
    /// Run of qualifier keywords (`virtual`, `static`, `local`, `rand`, ...)
    QUALIFIERS,
    /// `[:, name]` after an end keyword
    LABEL,
    /// `# ( PARAM_DECLARATION , ... )`
    PARAM_PORT_LIST,
    /// `[parameter|localparam?, DATA_TYPE|type?, PARAM_ASSIGNMENT_LIST, ;?]`
    PARAM_DECLARATION,
    /// `PARAM_ASSIGNMENT , ...`
    PARAM_ASSIGNMENT_LIST,
    /// `[name, UNPACKED_DIMENSIONS?, INITIALIZER?]`
    PARAM_ASSIGNMENT,
    /// `[=, EXPRESSION]`
    INITIALIZER,
    /// `( PORT_DECLARATION|PORT_REFERENCE , ... )`
    PORT_LIST,
    /// `[DIRECTION?, NET_TYPE?, DATA_TYPE?, name, UNPACKED_DIMENSIONS?, INITIALIZER?]`
    ///
    /// ANSI module ports and function/task ports.
    PORT_DECLARATION,
    /// `[name]`, non-ANSI port list entry
    PORT_REFERENCE,
    /// `[DIRECTION, NET_TYPE?, DATA_TYPE?, DECLARATOR_LIST, ;]`
    MODULE_PORT_DECLARATION,
    /// `[base?, SIGNING?, PACKED_DIMENSIONS?]`
    ///
    /// `base` is a type keyword token or one of `TYPE_REFERENCE`,
    /// `VIRTUAL_INTERFACE_TYPE`, `ENUM_TYPE`, `STRUCT_TYPE`.
    DATA_TYPE,
    /// `DIMENSION*`
    PACKED_DIMENSIONS,
    /// `DIMENSION*`
    UNPACKED_DIMENSIONS,
    /// `[ ... ]`
    DIMENSION,
    /// `[QUALIFIED_ID, PARAM_VALUE_LIST?, MODPORT_SELECT?]`
    TYPE_REFERENCE,
    /// `name (:: name)*`
    QUALIFIED_ID,
    /// `# ( ... )` or `# number`
    PARAM_VALUE_LIST,
    /// `[., name]`
    MODPORT_SELECT,
    /// `[virtual, interface?, TYPE_REFERENCE]`
    VIRTUAL_INTERFACE_TYPE,
    /// `[enum, DATA_TYPE?, {, ENUM_NAME_LIST, }]`
    ENUM_TYPE,
    /// `ENUM_NAME , ...`
    ENUM_NAME_LIST,
    /// `[name, DIMENSION?, INITIALIZER?]`
    ENUM_NAME,
    /// `[struct|union, packed?, SIGNING?, {, STRUCT_MEMBER_LIST, }]`
    STRUCT_TYPE,
    /// `STRUCT_MEMBER*`
    STRUCT_MEMBER_LIST,
    /// `[QUALIFIERS?, DATA_TYPE, DECLARATOR_LIST, ;]`
    STRUCT_MEMBER,
    /// Keyword run of a forward typedef (`class`, `interface class`, `enum`, ...)
    FORWARD_TYPE,
    /// `[typedef, DATA_TYPE|FORWARD_TYPE, name, UNPACKED_DIMENSIONS?, ;]`
    TYPE_DECLARATION,
    /// `[QUALIFIERS?, DATA_TYPE, DECLARATOR_LIST, ;]`
    DATA_DECLARATION,
    /// `[net-kw, DATA_TYPE?, DECLARATOR_LIST, ;]`
    NET_DECLARATION,
    /// `DECLARATOR , ...`
    DECLARATOR_LIST,
    /// `[name, UNPACKED_DIMENSIONS?, INITIALIZER?]`
    DECLARATOR,
    /// `[import, IMPORT_ITEM (, IMPORT_ITEM)*, ;]`
    PACKAGE_IMPORT,
    /// `[package-name, ::, name|*]`
    IMPORT_ITEM,
    /// `PACKAGE_IMPORT*` inside a module header
    HEADER_IMPORTS,
    /// `[TYPE_REFERENCE, INSTANCE_LIST, ;]`
    INSTANTIATION,
    /// `INSTANCE , ...`
    INSTANCE_LIST,
    /// `[name, UNPACKED_DIMENSIONS?, PORT_CONNECTIONS]`
    INSTANCE,
    /// `( ... )`
    PORT_CONNECTIONS,
    /// `[genvar, DECLARATOR_LIST, ;]`
    GENVAR_DECLARATION,
    /// `[generate, MODULE_ITEM_LIST, endgenerate]`
    GENERATE_REGION,
    /// `` [`include, STRING] ``
    INCLUDE_DIRECTIVE,
    /// Balanced token run of an expression
    EXPRESSION,
    /// Balanced token run of a behavioral item or statement
    /// (`always`, `initial`, `assign`, `modport`, generate loops, ...)
    OPAQUE_ITEM,

    // Special
    ERROR,
    /// End of input marker used by the parser; never appears in a tree.
    EOF,

    #[doc(hidden)]
    __LAST,
}

impl SyntaxKind {
    /// Check if this is a trivia token (whitespace, comment or directive)
    pub fn is_trivia(self) -> bool {
        matches!(
            self,
            Self::WHITESPACE | Self::LINE_COMMENT | Self::BLOCK_COMMENT | Self::DIRECTIVE
        )
    }

    /// Check if this is a keyword
    pub fn is_keyword(self) -> bool {
        (self as u16) >= (Self::ALWAYS_KW as u16) && (self as u16) <= (Self::WOR_KW as u16)
    }

    /// Check if this is a punctuation token
    pub fn is_punct(self) -> bool {
        (self as u16) >= (Self::L_PAREN as u16) && (self as u16) <= (Self::OPERATOR as u16)
    }

    /// Check if this is a literal
    pub fn is_literal(self) -> bool {
        matches!(
            self,
            Self::INT_NUMBER
                | Self::REAL_NUMBER
                | Self::BASED_NUMBER
                | Self::UNBASED_NUMBER
                | Self::STRING
        )
    }

    /// Tokens that can name a declaration or be the target of a lookup.
    pub fn is_identifier(self) -> bool {
        matches!(self, Self::IDENT | Self::ESCAPED_IDENT)
    }

    /// Check if this kind is a grammar node (`ERROR` may be either)
    pub fn is_node(self) -> bool {
        (self as u16) >= (Self::SOURCE_FILE as u16) && (self as u16) <= (Self::OPAQUE_ITEM as u16)
    }

    /// Built-in data type keywords (`logic`, `int`, `string`, ...)
    pub fn is_builtin_type(self) -> bool {
        matches!(
            self,
            Self::LOGIC_KW
                | Self::BIT_KW
                | Self::REG_KW
                | Self::BYTE_KW
                | Self::SHORTINT_KW
                | Self::INT_KW
                | Self::LONGINT_KW
                | Self::INTEGER_KW
                | Self::TIME_KW
                | Self::REAL_KW
                | Self::SHORTREAL_KW
                | Self::REALTIME_KW
                | Self::STRING_KW
                | Self::CHANDLE_KW
                | Self::EVENT_KW
                | Self::VOID_KW
        )
    }

    /// Net type keywords (`wire`, `tri`, `supply0`, ...)
    pub fn is_net_type(self) -> bool {
        matches!(
            self,
            Self::WIRE_KW
                | Self::TRI_KW
                | Self::TRI0_KW
                | Self::TRI1_KW
                | Self::TRIAND_KW
                | Self::TRIOR_KW
                | Self::TRIREG_KW
                | Self::WAND_KW
                | Self::WOR_KW
                | Self::UWIRE_KW
                | Self::SUPPLY0_KW
                | Self::SUPPLY1_KW
        )
    }

    /// Port direction keywords
    pub fn is_direction(self) -> bool {
        matches!(
            self,
            Self::INPUT_KW | Self::OUTPUT_KW | Self::INOUT_KW | Self::REF_KW
        )
    }

    /// Keywords that may prefix a class property or method
    pub fn is_qualifier(self) -> bool {
        matches!(
            self,
            Self::VIRTUAL_KW
                | Self::STATIC_KW
                | Self::AUTOMATIC_KW
                | Self::LOCAL_KW
                | Self::PROTECTED_KW
                | Self::RAND_KW
                | Self::RANDC_KW
                | Self::CONST_KW
                | Self::VAR_KW
        )
    }

    /// Keywords that close a declaration body
    pub fn is_end_of_body(self) -> bool {
        matches!(
            self,
            Self::ENDMODULE_KW
                | Self::ENDINTERFACE_KW
                | Self::ENDPACKAGE_KW
                | Self::ENDCLASS_KW
                | Self::ENDFUNCTION_KW
                | Self::ENDTASK_KW
                | Self::ENDGENERATE_KW
        )
    }
}

impl From<SyntaxKind> for rowan::SyntaxKind {
    fn from(kind: SyntaxKind) -> Self {
        Self(kind as u16)
    }
}

impl From<rowan::SyntaxKind> for SyntaxKind {
    fn from(raw: rowan::SyntaxKind) -> Self {
        assert!(raw.0 < SyntaxKind::__LAST as u16);
        // Safety: SyntaxKind is repr(u16) with contiguous discriminants and the
        // bound is checked above
        unsafe { std::mem::transmute::<u16, SyntaxKind>(raw.0) }
    }
}

/// Language definition for Rowan
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SvLanguage {}

impl rowan::Language for SvLanguage {
    type Kind = SyntaxKind;

    fn kind_from_raw(raw: rowan::SyntaxKind) -> Self::Kind {
        raw.into()
    }

    fn kind_to_raw(kind: Self::Kind) -> rowan::SyntaxKind {
        kind.into()
    }
}

/// Type aliases for convenience
pub type SyntaxNode = rowan::SyntaxNode<SvLanguage>;
pub type SyntaxToken = rowan::SyntaxToken<SvLanguage>;
pub type SyntaxElement = rowan::SyntaxElement<SvLanguage>;
pub type SyntaxNodeChildren = rowan::SyntaxNodeChildren<SvLanguage>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_roundtrip() {
        for kind in [
            SyntaxKind::WHITESPACE,
            SyntaxKind::MODULE_KW,
            SyntaxKind::ABSENT,
            SyntaxKind::ERROR,
        ] {
            let raw: rowan::SyntaxKind = kind.into();
            assert_eq!(SyntaxKind::from(raw), kind);
        }
    }

    #[test]
    fn test_categories() {
        assert!(SyntaxKind::DIRECTIVE.is_trivia());
        assert!(SyntaxKind::ALWAYS_KW.is_keyword());
        assert!(SyntaxKind::WOR_KW.is_keyword());
        assert!(!SyntaxKind::IDENT.is_keyword());
        assert!(SyntaxKind::OPERATOR.is_punct());
        assert!(SyntaxKind::ESCAPED_IDENT.is_identifier());
        assert!(!SyntaxKind::SYSTEM_IDENT.is_identifier());
        assert!(SyntaxKind::SOURCE_FILE.is_node());
        assert!(!SyntaxKind::WOR_KW.is_node());
    }
}
