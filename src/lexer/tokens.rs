//! Tokens, as produced by the lexer.
use std::fmt::{self, Display};

use crate::span::Bytes;

use super::keywords;

/// Every keyword, operator and punctuation token, plus the markers the parser
/// uses to refer to whole token classes.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // Arithmetic operators
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    LeftShift,
    RightShift,
    Not,
    And,
    Or,
    Xor,
    SelfInc,
    SelfDec,
    // Logic operators
    LogicNot,
    LogicAnd,
    LogicOr,
    // Comparison operators
    Eq,
    Neq,
    Less,
    Greater,
    Leq,
    Geq,
    // Assignment operators
    Assign,
    AddEq,
    SubEq,
    MulEq,
    DivEq,
    ModEq,
    LeftShiftEq,
    RightShiftEq,
    AndEq,
    OrEq,
    XorEq,
    // Parser markers, never produced by the tokenizer itself
    NumberConstant,
    Identifier,
    StrLiteral,
    // Numeric types, in the same order as [`NumericType`]
    Boolean,
    Char,
    I16,
    I32,
    U16,
    U32,
    F32,
    F64,
    // Special keywords
    True,
    False,
    Struct,
    Str,
    Fn,
    Void,
    Static,
    Const,
    Enum,
    Union,
    New,
    Delete,
    DeleteArray,
    Using,
    Cast,
    Decltype,
    Typename,
    Func,
    Lambda,
    Main,
    // Control flow
    If,
    Else,
    For,
    While,
    Do,
    Continue,
    Break,
    Return,
    // Threading
    Synchronized,
    TidT,
    MutexT,
    OnceFlag,
    // Punctuation
    Comma,
    Period,
    Semicolon,
    Question,
    Colon,
    MemberAccess,
    ClassScope,
    Sizeof,
    LeftParenthesis,
    RightParenthesis,
    LeftSquareBracket,
    RightSquareBracket,
    LeftCurlyBracket,
    RightCurlyBracket,
    Eof,
}

impl TokenKind {
    /// The [`NumericType`] named by a numeric type keyword, if this is one.
    pub fn numeric_type(self) -> Option<NumericType> {
        NumericType::ALL.into_iter().find(|ty| ty.keyword() == self)
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(keywords::spelling(*self))
    }
}

/// The declared type of a numeric literal.
///
/// The ordering mirrors the numeric type keywords in [`TokenKind`]; type
/// promotion relies on comparing ordinals, so the two must not drift apart.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum NumericType {
    Boolean,
    Char,
    I16,
    I32,
    U16,
    U32,
    F32,
    F64,
}

impl NumericType {
    pub const ALL: [NumericType; 8] = [
        NumericType::Boolean,
        NumericType::Char,
        NumericType::I16,
        NumericType::I32,
        NumericType::U16,
        NumericType::U32,
        NumericType::F32,
        NumericType::F64,
    ];

    const KEYWORDS: [TokenKind; 8] = [
        TokenKind::Boolean,
        TokenKind::Char,
        TokenKind::I16,
        TokenKind::I32,
        TokenKind::U16,
        TokenKind::U32,
        TokenKind::F32,
        TokenKind::F64,
    ];

    /// The keyword spelling this type, looked up by ordinal.
    pub fn keyword(self) -> TokenKind {
        Self::KEYWORDS[self as usize]
    }
}

impl Display for NumericType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        Display::fmt(&self.keyword(), f)
    }
}

/// The payload of a token.
///
/// Numbers are always held in double precision; the [`NumericType`] records
/// the width they are meant to be narrowed to later.
#[derive(Clone, Debug, PartialEq)]
pub enum TokenValue {
    Kind(TokenKind),
    Identifier(String),
    Numeric(f64, NumericType),
    StringLiteral(String),
}

impl TokenValue {
    /// The kind a parser matches this value against.
    pub fn kind(&self) -> TokenKind {
        match self {
            TokenValue::Kind(kind) => *kind,
            TokenValue::Identifier(_) => TokenKind::Identifier,
            TokenValue::Numeric(..) => TokenKind::NumberConstant,
            TokenValue::StringLiteral(_) => TokenKind::StrLiteral,
        }
    }
}

impl Display for TokenValue {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            TokenValue::Kind(kind) => write!(f, "{}", kind),
            TokenValue::Identifier(name) => write!(f, "identifier `{}`", name),
            TokenValue::Numeric(value, ty) => write!(f, "{} number {}", ty, value),
            TokenValue::StringLiteral(text) => write!(f, "string {:?}", text),
        }
    }
}

/// A token straight out of the tokenizer, positioned at the first byte of its lexeme.
#[derive(Clone, Debug, PartialEq)]
pub struct RawToken {
    pub value: TokenValue,
    pub position: Bytes,
}

/// A token placed in its source file, as handed to the parser.
#[derive(Clone, Debug, PartialEq)]
pub struct Token {
    pub value: TokenValue,
    pub position: Bytes,
    pub line: usize,
}
impl Token {
    pub fn new(raw: RawToken, line: usize) -> Self {
        Self {
            value: raw.value,
            position: raw.position,
            line,
        }
    }

    pub fn kind(&self) -> TokenKind {
        self.value.kind()
    }
}
impl Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:>4}:{:<5} {}", self.line, self.position, self.value)
    }
}
