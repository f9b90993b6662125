//! Logos-based lexer for SystemVerilog
//!
//! Fast tokenization using the logos crate. Compiler directives other than
//! `` `include `` are folded into a single `DIRECTIVE` trivia token that
//! spans the directive's arguments (including `` `define `` continuation
//! lines), so preprocessor text never reaches the parser.

use super::syntax_kind::SyntaxKind;
use logos::Logos;
use rowan::TextSize;

/// A token with its kind, text, and position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: SyntaxKind,
    pub text: &'a str,
    pub offset: TextSize,
}

/// Lexer wrapping the logos-generated tokenizer
pub struct Lexer<'a> {
    inner: logos::Lexer<'a, LogosToken>,
    offset: u32,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            inner: LogosToken::lexer(input),
            offset: 0,
        }
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let logos_token = self.inner.next()?;

        let kind = match logos_token {
            Ok(LogosToken::Backtick) => {
                let name = self.inner.slice();
                match directive_extent(name, self.inner.remainder()) {
                    Directive::Include => SyntaxKind::INCLUDE_KW,
                    Directive::Trivia(extra) => {
                        self.inner.bump(extra);
                        SyntaxKind::DIRECTIVE
                    }
                    Directive::Macro => SyntaxKind::MACRO_CALL,
                }
            }
            Ok(t) => t.into(),
            Err(()) => SyntaxKind::ERROR,
        };

        let text = self.inner.slice();
        let offset = TextSize::new(self.offset);
        self.offset += text.len() as u32;

        Some(Token { kind, text, offset })
    }
}

/// Tokenize an entire string into a Vec
pub fn tokenize(input: &str) -> Vec<Token<'_>> {
    Lexer::new(input).collect()
}

enum Directive {
    Include,
    /// Directive trivia extending this many bytes past the directive name.
    Trivia(usize),
    Macro,
}

fn directive_extent(name: &str, rest: &str) -> Directive {
    match name {
        "`include" => Directive::Include,
        "`define" => Directive::Trivia(define_body_len(rest)),
        "`timescale" | "`default_nettype" | "`undef" | "`undefineall" | "`line" | "`pragma"
        | "`resetall" | "`celldefine" | "`endcelldefine" | "`unconnected_drive"
        | "`nounconnected_drive" | "`begin_keywords" | "`end_keywords" => {
            Directive::Trivia(rest.find('\n').unwrap_or(rest.len()))
        }
        "`ifdef" | "`ifndef" | "`elsif" => {
            let blank = rest.len() - rest.trim_start_matches([' ', '\t']).len();
            let ident = rest[blank..]
                .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_' || c == '$'))
                .unwrap_or(rest.len() - blank);
            Directive::Trivia(blank + ident)
        }
        "`else" | "`endif" => Directive::Trivia(0),
        _ => Directive::Macro,
    }
}

/// Length of a `` `define `` body, following backslash line continuations.
fn define_body_len(rest: &str) -> usize {
    let mut len = 0;
    loop {
        let line_end = match rest[len..].find('\n') {
            Some(i) => len + i,
            None => return rest.len(),
        };
        if rest[len..line_end].trim_end_matches('\r').ends_with('\\') {
            len = line_end + 1;
        } else {
            return line_end;
        }
    }
}

/// Logos token enum - maps to SyntaxKind
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
pub enum LogosToken {
    // =========================================================================
    // TRIVIA
    // =========================================================================
    #[regex(r"[ \t\r\n\f]+")]
    Whitespace,

    #[regex(r"//[^\n]*")]
    LineComment,

    #[regex(r"/\*([^*]|\*+[^*/])*\*+/")]
    BlockComment,

    /// `` `name `` - classified into include, directive or macro by the wrapper
    #[regex(r"`[a-zA-Z_][a-zA-Z0-9_$]*")]
    Backtick,

    // =========================================================================
    // LITERALS AND NAMES
    // =========================================================================
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_$]*")]
    Ident,

    #[regex(r"\\[^ \t\r\n]+")]
    EscapedIdent,

    #[regex(r"\$[a-zA-Z_][a-zA-Z0-9_$]*")]
    SystemIdent,

    #[regex(r"[0-9][0-9_]*")]
    Integer,

    #[regex(r"[0-9][0-9_]*\.[0-9][0-9_]*([eE][+-]?[0-9][0-9_]*)?")]
    #[regex(r"[0-9][0-9_]*[eE][+-]?[0-9][0-9_]*")]
    Real,

    #[regex(r"([0-9][0-9_]*[ \t]*)?'[sS]?[bBoOdDhH][ \t]*[0-9a-fA-FxXzZ?_]+")]
    Based,

    #[regex(r"'[01xXzZ]")]
    Unbased,

    #[regex(r#""([^"\\\n]|\\.)*""#)]
    String,

    // =========================================================================
    // PUNCTUATION
    // =========================================================================
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token(";")]
    Semicolon,
    #[token(":")]
    Colon,
    #[token("::")]
    ColonColon,
    #[token(",")]
    Comma,
    #[token(".")]
    Dot,
    #[token("=")]
    Eq,
    #[token("#")]
    Hash,
    #[token("@")]
    At,
    #[token("'")]
    Apostrophe,

    #[token("+")]
    #[token("-")]
    #[token("*")]
    #[token("/")]
    #[token("%")]
    #[token("&")]
    #[token("|")]
    #[token("^")]
    #[token("~")]
    #[token("!")]
    #[token("?")]
    #[token("<")]
    #[token(">")]
    #[token("$")]
    #[token("<=")]
    #[token(">=")]
    #[token("==")]
    #[token("!=")]
    #[token("===")]
    #[token("!==")]
    #[token("==?")]
    #[token("!=?")]
    #[token("&&")]
    #[token("&&&")]
    #[token("||")]
    #[token("**")]
    #[token("<<")]
    #[token(">>")]
    #[token("<<<")]
    #[token(">>>")]
    #[token("->")]
    #[token("->>")]
    #[token("<->")]
    #[token("=>")]
    #[token("|->")]
    #[token("|=>")]
    #[token("+=")]
    #[token("-=")]
    #[token("*=")]
    #[token("/=")]
    #[token("%=")]
    #[token("&=")]
    #[token("|=")]
    #[token("^=")]
    #[token("<<=")]
    #[token(">>=")]
    #[token("<<<=")]
    #[token(">>>=")]
    #[token("++")]
    #[token("--")]
    #[token("~&")]
    #[token("~|")]
    #[token("~^")]
    #[token("^~")]
    #[token(".*")]
    #[token("+:")]
    #[token("-:")]
    #[token("##")]
    #[token("@@")]
    Operator,

    // =========================================================================
    // KEYWORDS
    // =========================================================================
    #[token("always")]
    AlwaysKw,
    #[token("always_comb")]
    AlwaysCombKw,
    #[token("always_ff")]
    AlwaysFfKw,
    #[token("always_latch")]
    AlwaysLatchKw,
    #[token("assert")]
    AssertKw,
    #[token("assign")]
    AssignKw,
    #[token("assume")]
    AssumeKw,
    #[token("automatic")]
    AutomaticKw,
    #[token("begin")]
    BeginKw,
    #[token("bit")]
    BitKw,
    #[token("break")]
    BreakKw,
    #[token("byte")]
    ByteKw,
    #[token("case")]
    CaseKw,
    #[token("casex")]
    CasexKw,
    #[token("casez")]
    CasezKw,
    #[token("chandle")]
    ChandleKw,
    #[token("class")]
    ClassKw,
    #[token("clocking")]
    ClockingKw,
    #[token("const")]
    ConstKw,
    #[token("constraint")]
    ConstraintKw,
    #[token("continue")]
    ContinueKw,
    #[token("cover")]
    CoverKw,
    #[token("covergroup")]
    CovergroupKw,
    #[token("deassign")]
    DeassignKw,
    #[token("default")]
    DefaultKw,
    #[token("disable")]
    DisableKw,
    #[token("do")]
    DoKw,
    #[token("else")]
    ElseKw,
    #[token("end")]
    EndKw,
    #[token("endcase")]
    EndcaseKw,
    #[token("endclass")]
    EndclassKw,
    #[token("endclocking")]
    EndclockingKw,
    #[token("endfunction")]
    EndfunctionKw,
    #[token("endgenerate")]
    EndgenerateKw,
    #[token("endgroup")]
    EndgroupKw,
    #[token("endinterface")]
    EndinterfaceKw,
    #[token("endmodule")]
    EndmoduleKw,
    #[token("endpackage")]
    EndpackageKw,
    #[token("endproperty")]
    EndpropertyKw,
    #[token("endsequence")]
    EndsequenceKw,
    #[token("endspecify")]
    EndspecifyKw,
    #[token("endtask")]
    EndtaskKw,
    #[token("enum")]
    EnumKw,
    #[token("event")]
    EventKw,
    #[token("export")]
    ExportKw,
    #[token("extends")]
    ExtendsKw,
    #[token("extern")]
    ExternKw,
    #[token("final")]
    FinalKw,
    #[token("for")]
    ForKw,
    #[token("force")]
    ForceKw,
    #[token("foreach")]
    ForeachKw,
    #[token("forever")]
    ForeverKw,
    #[token("fork")]
    ForkKw,
    #[token("function")]
    FunctionKw,
    #[token("generate")]
    GenerateKw,
    #[token("genvar")]
    GenvarKw,
    #[token("if")]
    IfKw,
    #[token("implements")]
    ImplementsKw,
    #[token("import")]
    ImportKw,
    #[token("initial")]
    InitialKw,
    #[token("inout")]
    InoutKw,
    #[token("input")]
    InputKw,
    #[token("int")]
    IntKw,
    #[token("integer")]
    IntegerKw,
    #[token("interface")]
    InterfaceKw,
    #[token("join")]
    JoinKw,
    #[token("join_any")]
    JoinAnyKw,
    #[token("join_none")]
    JoinNoneKw,
    #[token("local")]
    LocalKw,
    #[token("localparam")]
    LocalparamKw,
    #[token("logic")]
    LogicKw,
    #[token("longint")]
    LongintKw,
    #[token("macromodule")]
    MacromoduleKw,
    #[token("modport")]
    ModportKw,
    #[token("module")]
    ModuleKw,
    #[token("new")]
    NewKw,
    #[token("null")]
    NullKw,
    #[token("output")]
    OutputKw,
    #[token("package")]
    PackageKw,
    #[token("packed")]
    PackedKw,
    #[token("parameter")]
    ParameterKw,
    #[token("property")]
    PropertyKw,
    #[token("protected")]
    ProtectedKw,
    #[token("pure")]
    PureKw,
    #[token("rand")]
    RandKw,
    #[token("randc")]
    RandcKw,
    #[token("randcase")]
    RandcaseKw,
    #[token("real")]
    RealKw,
    #[token("realtime")]
    RealtimeKw,
    #[token("ref")]
    RefKw,
    #[token("reg")]
    RegKw,
    #[token("release")]
    ReleaseKw,
    #[token("repeat")]
    RepeatKw,
    #[token("return")]
    ReturnKw,
    #[token("sequence")]
    SequenceKw,
    #[token("shortint")]
    ShortintKw,
    #[token("shortreal")]
    ShortrealKw,
    #[token("signed")]
    SignedKw,
    #[token("specify")]
    SpecifyKw,
    #[token("static")]
    StaticKw,
    #[token("string")]
    StringKw,
    #[token("struct")]
    StructKw,
    #[token("super")]
    SuperKw,
    #[token("supply0")]
    Supply0Kw,
    #[token("supply1")]
    Supply1Kw,
    #[token("task")]
    TaskKw,
    #[token("this")]
    ThisKw,
    #[token("time")]
    TimeKw,
    #[token("tri")]
    TriKw,
    #[token("tri0")]
    Tri0Kw,
    #[token("tri1")]
    Tri1Kw,
    #[token("triand")]
    TriandKw,
    #[token("trior")]
    TriorKw,
    #[token("trireg")]
    TriregKw,
    #[token("type")]
    TypeKw,
    #[token("typedef")]
    TypedefKw,
    #[token("union")]
    UnionKw,
    #[token("unsigned")]
    UnsignedKw,
    #[token("uwire")]
    UwireKw,
    #[token("var")]
    VarKw,
    #[token("virtual")]
    VirtualKw,
    #[token("void")]
    VoidKw,
    #[token("wait")]
    WaitKw,
    #[token("wand")]
    WandKw,
    #[token("while")]
    WhileKw,
    #[token("wire")]
    WireKw,
    #[token("wor")]
    WorKw,
}

impl From<LogosToken> for SyntaxKind {
    fn from(token: LogosToken) -> Self {
        match token {
            LogosToken::Whitespace => SyntaxKind::WHITESPACE,
            LogosToken::LineComment => SyntaxKind::LINE_COMMENT,
            LogosToken::BlockComment => SyntaxKind::BLOCK_COMMENT,
            LogosToken::Backtick => SyntaxKind::MACRO_CALL,
            LogosToken::Ident => SyntaxKind::IDENT,
            LogosToken::EscapedIdent => SyntaxKind::ESCAPED_IDENT,
            LogosToken::SystemIdent => SyntaxKind::SYSTEM_IDENT,
            LogosToken::Integer => SyntaxKind::INT_NUMBER,
            LogosToken::Real => SyntaxKind::REAL_NUMBER,
            LogosToken::Based => SyntaxKind::BASED_NUMBER,
            LogosToken::Unbased => SyntaxKind::UNBASED_NUMBER,
            LogosToken::String => SyntaxKind::STRING,

            LogosToken::LParen => SyntaxKind::L_PAREN,
            LogosToken::RParen => SyntaxKind::R_PAREN,
            LogosToken::LBracket => SyntaxKind::L_BRACKET,
            LogosToken::RBracket => SyntaxKind::R_BRACKET,
            LogosToken::LBrace => SyntaxKind::L_BRACE,
            LogosToken::RBrace => SyntaxKind::R_BRACE,
            LogosToken::Semicolon => SyntaxKind::SEMICOLON,
            LogosToken::Colon => SyntaxKind::COLON,
            LogosToken::ColonColon => SyntaxKind::COLON_COLON,
            LogosToken::Comma => SyntaxKind::COMMA,
            LogosToken::Dot => SyntaxKind::DOT,
            LogosToken::Eq => SyntaxKind::EQ,
            LogosToken::Hash => SyntaxKind::HASH,
            LogosToken::At => SyntaxKind::AT,
            LogosToken::Apostrophe => SyntaxKind::APOSTROPHE,
            LogosToken::Operator => SyntaxKind::OPERATOR,

            LogosToken::AlwaysKw => SyntaxKind::ALWAYS_KW,
            LogosToken::AlwaysCombKw => SyntaxKind::ALWAYS_COMB_KW,
            LogosToken::AlwaysFfKw => SyntaxKind::ALWAYS_FF_KW,
            LogosToken::AlwaysLatchKw => SyntaxKind::ALWAYS_LATCH_KW,
            LogosToken::AssertKw => SyntaxKind::ASSERT_KW,
            LogosToken::AssignKw => SyntaxKind::ASSIGN_KW,
            LogosToken::AssumeKw => SyntaxKind::ASSUME_KW,
            LogosToken::AutomaticKw => SyntaxKind::AUTOMATIC_KW,
            LogosToken::BeginKw => SyntaxKind::BEGIN_KW,
            LogosToken::BitKw => SyntaxKind::BIT_KW,
            LogosToken::BreakKw => SyntaxKind::BREAK_KW,
            LogosToken::ByteKw => SyntaxKind::BYTE_KW,
            LogosToken::CaseKw => SyntaxKind::CASE_KW,
            LogosToken::CasexKw => SyntaxKind::CASEX_KW,
            LogosToken::CasezKw => SyntaxKind::CASEZ_KW,
            LogosToken::ChandleKw => SyntaxKind::CHANDLE_KW,
            LogosToken::ClassKw => SyntaxKind::CLASS_KW,
            LogosToken::ClockingKw => SyntaxKind::CLOCKING_KW,
            LogosToken::ConstKw => SyntaxKind::CONST_KW,
            LogosToken::ConstraintKw => SyntaxKind::CONSTRAINT_KW,
            LogosToken::ContinueKw => SyntaxKind::CONTINUE_KW,
            LogosToken::CoverKw => SyntaxKind::COVER_KW,
            LogosToken::CovergroupKw => SyntaxKind::COVERGROUP_KW,
            LogosToken::DeassignKw => SyntaxKind::DEASSIGN_KW,
            LogosToken::DefaultKw => SyntaxKind::DEFAULT_KW,
            LogosToken::DisableKw => SyntaxKind::DISABLE_KW,
            LogosToken::DoKw => SyntaxKind::DO_KW,
            LogosToken::ElseKw => SyntaxKind::ELSE_KW,
            LogosToken::EndKw => SyntaxKind::END_KW,
            LogosToken::EndcaseKw => SyntaxKind::ENDCASE_KW,
            LogosToken::EndclassKw => SyntaxKind::ENDCLASS_KW,
            LogosToken::EndclockingKw => SyntaxKind::ENDCLOCKING_KW,
            LogosToken::EndfunctionKw => SyntaxKind::ENDFUNCTION_KW,
            LogosToken::EndgenerateKw => SyntaxKind::ENDGENERATE_KW,
            LogosToken::EndgroupKw => SyntaxKind::ENDGROUP_KW,
            LogosToken::EndinterfaceKw => SyntaxKind::ENDINTERFACE_KW,
            LogosToken::EndmoduleKw => SyntaxKind::ENDMODULE_KW,
            LogosToken::EndpackageKw => SyntaxKind::ENDPACKAGE_KW,
            LogosToken::EndpropertyKw => SyntaxKind::ENDPROPERTY_KW,
            LogosToken::EndsequenceKw => SyntaxKind::ENDSEQUENCE_KW,
            LogosToken::EndspecifyKw => SyntaxKind::ENDSPECIFY_KW,
            LogosToken::EndtaskKw => SyntaxKind::ENDTASK_KW,
            LogosToken::EnumKw => SyntaxKind::ENUM_KW,
            LogosToken::EventKw => SyntaxKind::EVENT_KW,
            LogosToken::ExportKw => SyntaxKind::EXPORT_KW,
            LogosToken::ExtendsKw => SyntaxKind::EXTENDS_KW,
            LogosToken::ExternKw => SyntaxKind::EXTERN_KW,
            LogosToken::FinalKw => SyntaxKind::FINAL_KW,
            LogosToken::ForKw => SyntaxKind::FOR_KW,
            LogosToken::ForceKw => SyntaxKind::FORCE_KW,
            LogosToken::ForeachKw => SyntaxKind::FOREACH_KW,
            LogosToken::ForeverKw => SyntaxKind::FOREVER_KW,
            LogosToken::ForkKw => SyntaxKind::FORK_KW,
            LogosToken::FunctionKw => SyntaxKind::FUNCTION_KW,
            LogosToken::GenerateKw => SyntaxKind::GENERATE_KW,
            LogosToken::GenvarKw => SyntaxKind::GENVAR_KW,
            LogosToken::IfKw => SyntaxKind::IF_KW,
            LogosToken::ImplementsKw => SyntaxKind::IMPLEMENTS_KW,
            LogosToken::ImportKw => SyntaxKind::IMPORT_KW,
            LogosToken::InitialKw => SyntaxKind::INITIAL_KW,
            LogosToken::InoutKw => SyntaxKind::INOUT_KW,
            LogosToken::InputKw => SyntaxKind::INPUT_KW,
            LogosToken::IntKw => SyntaxKind::INT_KW,
            LogosToken::IntegerKw => SyntaxKind::INTEGER_KW,
            LogosToken::InterfaceKw => SyntaxKind::INTERFACE_KW,
            LogosToken::JoinKw => SyntaxKind::JOIN_KW,
            LogosToken::JoinAnyKw => SyntaxKind::JOIN_ANY_KW,
            LogosToken::JoinNoneKw => SyntaxKind::JOIN_NONE_KW,
            LogosToken::LocalKw => SyntaxKind::LOCAL_KW,
            LogosToken::LocalparamKw => SyntaxKind::LOCALPARAM_KW,
            LogosToken::LogicKw => SyntaxKind::LOGIC_KW,
            LogosToken::LongintKw => SyntaxKind::LONGINT_KW,
            LogosToken::MacromoduleKw => SyntaxKind::MACROMODULE_KW,
            LogosToken::ModportKw => SyntaxKind::MODPORT_KW,
            LogosToken::ModuleKw => SyntaxKind::MODULE_KW,
            LogosToken::NewKw => SyntaxKind::NEW_KW,
            LogosToken::NullKw => SyntaxKind::NULL_KW,
            LogosToken::OutputKw => SyntaxKind::OUTPUT_KW,
            LogosToken::PackageKw => SyntaxKind::PACKAGE_KW,
            LogosToken::PackedKw => SyntaxKind::PACKED_KW,
            LogosToken::ParameterKw => SyntaxKind::PARAMETER_KW,
            LogosToken::PropertyKw => SyntaxKind::PROPERTY_KW,
            LogosToken::ProtectedKw => SyntaxKind::PROTECTED_KW,
            LogosToken::PureKw => SyntaxKind::PURE_KW,
            LogosToken::RandKw => SyntaxKind::RAND_KW,
            LogosToken::RandcKw => SyntaxKind::RANDC_KW,
            LogosToken::RandcaseKw => SyntaxKind::RANDCASE_KW,
            LogosToken::RealKw => SyntaxKind::REAL_KW,
            LogosToken::RealtimeKw => SyntaxKind::REALTIME_KW,
            LogosToken::RefKw => SyntaxKind::REF_KW,
            LogosToken::RegKw => SyntaxKind::REG_KW,
            LogosToken::ReleaseKw => SyntaxKind::RELEASE_KW,
            LogosToken::RepeatKw => SyntaxKind::REPEAT_KW,
            LogosToken::ReturnKw => SyntaxKind::RETURN_KW,
            LogosToken::SequenceKw => SyntaxKind::SEQUENCE_KW,
            LogosToken::ShortintKw => SyntaxKind::SHORTINT_KW,
            LogosToken::ShortrealKw => SyntaxKind::SHORTREAL_KW,
            LogosToken::SignedKw => SyntaxKind::SIGNED_KW,
            LogosToken::SpecifyKw => SyntaxKind::SPECIFY_KW,
            LogosToken::StaticKw => SyntaxKind::STATIC_KW,
            LogosToken::StringKw => SyntaxKind::STRING_KW,
            LogosToken::StructKw => SyntaxKind::STRUCT_KW,
            LogosToken::SuperKw => SyntaxKind::SUPER_KW,
            LogosToken::Supply0Kw => SyntaxKind::SUPPLY0_KW,
            LogosToken::Supply1Kw => SyntaxKind::SUPPLY1_KW,
            LogosToken::TaskKw => SyntaxKind::TASK_KW,
            LogosToken::ThisKw => SyntaxKind::THIS_KW,
            LogosToken::TimeKw => SyntaxKind::TIME_KW,
            LogosToken::TriKw => SyntaxKind::TRI_KW,
            LogosToken::Tri0Kw => SyntaxKind::TRI0_KW,
            LogosToken::Tri1Kw => SyntaxKind::TRI1_KW,
            LogosToken::TriandKw => SyntaxKind::TRIAND_KW,
            LogosToken::TriorKw => SyntaxKind::TRIOR_KW,
            LogosToken::TriregKw => SyntaxKind::TRIREG_KW,
            LogosToken::TypeKw => SyntaxKind::TYPE_KW,
            LogosToken::TypedefKw => SyntaxKind::TYPEDEF_KW,
            LogosToken::UnionKw => SyntaxKind::UNION_KW,
            LogosToken::UnsignedKw => SyntaxKind::UNSIGNED_KW,
            LogosToken::UwireKw => SyntaxKind::UWIRE_KW,
            LogosToken::VarKw => SyntaxKind::VAR_KW,
            LogosToken::VirtualKw => SyntaxKind::VIRTUAL_KW,
            LogosToken::VoidKw => SyntaxKind::VOID_KW,
            LogosToken::WaitKw => SyntaxKind::WAIT_KW,
            LogosToken::WandKw => SyntaxKind::WAND_KW,
            LogosToken::WhileKw => SyntaxKind::WHILE_KW,
            LogosToken::WireKw => SyntaxKind::WIRE_KW,
            LogosToken::WorKw => SyntaxKind::WOR_KW,
        }
    }
}
