//! Token model: the closed kind enumeration and the token value.

use std::fmt;

use crate::reader::Pos;

/// Token kinds of the R lexical grammar.
///
/// End of input and errors are kinds of their own, so `next_token` never
/// fails out-of-band. `Display` renders the conventional screaming-case
/// names (keywords and operators without their group prefix).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Lexical error; the payload holds whatever text had accumulated.
    Error,
    /// End of the input stream.
    EndOfInput,
    /// Physical end of line (lexically significant in R).
    EndOfLine,
    /// `#...` to end of line.
    Comment,
    /// `#line ...` directive, a comment-shaped source-position remapping.
    LineDirective,

    /// `"..."` or `'...'` character constant.
    ConstCharacter,
    /// Integer constant: `3L`, `0x42afL`.
    ConstInteger,
    /// Real constant: `1`, `0.1`, `1e-7`, `0x123p456`.
    ConstReal,
    /// Complex constant: `2i`, `4.1i`, `1e-2i`.
    ConstComplex,
    /// `NaN`.
    ConstNan,
    /// `Inf`.
    ConstInf,
    /// `TRUE`.
    ConstTrue,
    /// `FALSE`.
    ConstFalse,
    /// `NULL`.
    ConstNull,

    /// `NA_character_`.
    NaCharacter,
    /// `NA_integer_`.
    NaInteger,
    /// `NA_real_`.
    NaReal,
    /// `NA_complex_`.
    NaComplex,
    /// `NA`.
    NaLogical,

    KeywordIf,
    KeywordElse,
    KeywordFor,
    KeywordIn,
    KeywordRepeat,
    KeywordWhile,
    KeywordNext,
    KeywordBreak,
    KeywordFunction,

    /// Bare or backtick-quoted symbol name.
    Symbol,

    /// `%...%` user-defined infix operator.
    Infix,

    OpRightAssign,      // ->
    OpRightAssign2,     // ->>
    OpLeftAssign,       // <-
    OpLeftAssign2,      // <<-
    OpEqualAssign,      // =
    OpColonAssign,      // :=

    OpLeftSquare,       // [
    OpLeftSquare2,      // [[
    OpRightSquare,      // ]
    OpLeftRound,        // (
    OpRightRound,       // )
    OpLeftCurly,        // {
    OpRightCurly,       // }
    OpColon,            // :
    OpNamespace,        // ::
    OpNamespaceInternal, // :::
    OpDollar,           // $
    OpAt,               // @

    OpAdd,              // +
    OpSub,              // -
    OpMul,              // *
    OpMul2,             // ** same as ^
    OpDiv,              // /
    OpPow,              // ^

    OpGt,               // >
    OpGe,               // >=
    OpLt,               // <
    OpLe,               // <=
    OpEq,               // ==
    OpNot,              // !
    OpNe,               // !=
    OpAnd,              // &
    OpAnd2,             // &&
    OpOr,               // |
    OpOr2,              // ||

    OpTilde,            // ~
    OpQuestion,         // ?
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Error => "ERROR",
            Self::EndOfInput => "END_OF_INPUT",
            Self::EndOfLine => "END_OF_LINE",
            Self::Comment => "COMMENT",
            Self::LineDirective => "LINE_DIRECTIVE",

            Self::ConstCharacter => "CONST_CHARACTER",
            Self::ConstInteger => "CONST_INTEGER",
            Self::ConstReal => "CONST_REAL",
            Self::ConstComplex => "CONST_COMPLEX",
            Self::ConstNan => "CONST_NAN",
            Self::ConstInf => "CONST_INF",
            Self::ConstTrue => "CONST_TRUE",
            Self::ConstFalse => "CONST_FALSE",
            Self::ConstNull => "CONST_NULL",

            Self::NaCharacter => "NA_CHARACTER",
            Self::NaInteger => "NA_INTEGER",
            Self::NaReal => "NA_REAL",
            Self::NaComplex => "NA_COMPLEX",
            Self::NaLogical => "NA_LOGICAL",

            Self::KeywordIf => "IF",
            Self::KeywordElse => "ELSE",
            Self::KeywordFor => "FOR",
            Self::KeywordIn => "IN",
            Self::KeywordRepeat => "REPEAT",
            Self::KeywordWhile => "WHILE",
            Self::KeywordNext => "NEXT",
            Self::KeywordBreak => "BREAK",
            Self::KeywordFunction => "FUNCTION",

            Self::Symbol => "SYMBOL",
            Self::Infix => "INFIX",

            Self::OpRightAssign => "RIGHT_ASSIGN",
            Self::OpRightAssign2 => "RIGHT_ASSIGN2",
            Self::OpLeftAssign => "LEFT_ASSIGN",
            Self::OpLeftAssign2 => "LEFT_ASSIGN2",
            Self::OpEqualAssign => "EQUAL_ASSIGN",
            Self::OpColonAssign => "COLON_ASSIGN",

            Self::OpLeftSquare => "LEFT_SQUARE",
            Self::OpLeftSquare2 => "LEFT_SQUARE2",
            Self::OpRightSquare => "RIGHT_SQUARE",
            Self::OpLeftRound => "LEFT_ROUND",
            Self::OpRightRound => "RIGHT_ROUND",
            Self::OpLeftCurly => "LEFT_CURLY",
            Self::OpRightCurly => "RIGHT_CURLY",
            Self::OpColon => "COLON",
            Self::OpNamespace => "NAMESPACE",
            Self::OpNamespaceInternal => "NAMESPACE_INTERNAL",
            Self::OpDollar => "DOLLAR",
            Self::OpAt => "AT",

            Self::OpAdd => "ADD",
            Self::OpSub => "SUB",
            Self::OpMul => "MUL",
            Self::OpMul2 => "MUL2",
            Self::OpDiv => "DIV",
            Self::OpPow => "POW",

            Self::OpGt => "GT",
            Self::OpGe => "GE",
            Self::OpLt => "LT",
            Self::OpLe => "LE",
            Self::OpEq => "EQ",
            Self::OpNot => "NOT",
            Self::OpNe => "NE",
            Self::OpAnd => "AND",
            Self::OpAnd2 => "AND2",
            Self::OpOr => "OR",
            Self::OpOr2 => "OR2",

            Self::OpTilde => "TILDE",
            Self::OpQuestion => "QUESTION",
        };
        f.write_str(s)
    }
}

/// One classified lexical unit.
///
/// Allocated fresh per `next_token` call; immutable once returned, with
/// ownership passing entirely to the caller.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// Token classification.
    pub kind: TokenKind,
    /// Decoded text payload; empty for pure marker kinds.
    pub text: String,
    /// Truncated integer value, populated by the numeric sub-scanners only.
    pub int_value: i64,
    /// Floating value, populated by the numeric sub-scanners only.
    pub real_value: f64,
    /// Byte offset of the token's start.
    pub offset: u32,
    /// 1-based start line.
    pub line: u32,
    /// 1-based start column.
    pub col: u32,
    /// Byte length. Not populated by the current sub-scanners; kept at its
    /// zero default until a consumer contract requires otherwise.
    pub byte_len: u32,
    /// Character length. Same zero default as `byte_len`.
    pub char_len: u32,
}

impl Token {
    /// Fresh token at `pos`, kind `Error` until a sub-scanner classifies it.
    pub(crate) fn at(pos: Pos) -> Self {
        Self {
            kind: TokenKind::Error,
            text: String::new(),
            int_value: 0,
            real_value: 0.0,
            offset: pos.offset,
            line: pos.line,
            col: pos.col,
            byte_len: 0,
            char_len: 0,
        }
    }
}
