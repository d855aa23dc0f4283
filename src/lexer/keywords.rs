//! The keyword and operator table.
//!
//! Built once on first use and only ever read afterwards, so it can be shared
//! by any number of tokenizer runs.
use std::collections::HashMap;

use lazy_static::lazy_static;

use super::tokens::TokenKind;

/// Every spelling the tokenizer can produce, paired with its kind.
const LEXEMES: &[(&str, TokenKind)] = &[
    // Arithmetic operators
    ("+", TokenKind::Add),
    ("-", TokenKind::Sub),
    ("*", TokenKind::Mul),
    ("/", TokenKind::Div),
    ("%", TokenKind::Mod),
    ("<<", TokenKind::LeftShift),
    (">>", TokenKind::RightShift),
    ("~", TokenKind::Not),
    ("&", TokenKind::And),
    ("|", TokenKind::Or),
    ("^", TokenKind::Xor),
    ("++", TokenKind::SelfInc),
    ("--", TokenKind::SelfDec),
    // Logic operators
    ("!", TokenKind::LogicNot),
    ("&&", TokenKind::LogicAnd),
    ("||", TokenKind::LogicOr),
    // Comparison operators
    ("==", TokenKind::Eq),
    ("!=", TokenKind::Neq),
    ("<", TokenKind::Less),
    (">", TokenKind::Greater),
    ("<=", TokenKind::Leq),
    (">=", TokenKind::Geq),
    // Assignment operators
    ("=", TokenKind::Assign),
    ("+=", TokenKind::AddEq),
    ("-=", TokenKind::SubEq),
    ("*=", TokenKind::MulEq),
    ("/=", TokenKind::DivEq),
    ("%=", TokenKind::ModEq),
    ("<<=", TokenKind::LeftShiftEq),
    (">>=", TokenKind::RightShiftEq),
    ("&=", TokenKind::AndEq),
    ("|=", TokenKind::OrEq),
    ("^=", TokenKind::XorEq),
    // Numeric types
    ("bool", TokenKind::Boolean),
    ("char", TokenKind::Char),
    ("i16", TokenKind::I16),
    ("i32", TokenKind::I32),
    ("u16", TokenKind::U16),
    ("u32", TokenKind::U32),
    ("f32", TokenKind::F32),
    ("f64", TokenKind::F64),
    // Special keywords
    ("true", TokenKind::True),
    ("false", TokenKind::False),
    ("struct", TokenKind::Struct),
    ("str", TokenKind::Str),
    ("fn", TokenKind::Fn),
    ("void", TokenKind::Void),
    ("static", TokenKind::Static),
    ("const", TokenKind::Const),
    ("enum", TokenKind::Enum),
    ("union", TokenKind::Union),
    ("new", TokenKind::New),
    ("delete", TokenKind::Delete),
    ("delete[]", TokenKind::DeleteArray),
    ("using", TokenKind::Using),
    ("cast", TokenKind::Cast),
    ("decltype", TokenKind::Decltype),
    ("typename", TokenKind::Typename),
    ("func", TokenKind::Func),
    ("lambda", TokenKind::Lambda),
    ("main", TokenKind::Main),
    // Control flow
    ("if", TokenKind::If),
    ("else", TokenKind::Else),
    ("for", TokenKind::For),
    ("while", TokenKind::While),
    ("do", TokenKind::Do),
    ("continue", TokenKind::Continue),
    ("break", TokenKind::Break),
    ("return", TokenKind::Return),
    // Threading
    ("synchronized", TokenKind::Synchronized),
    ("tid_t", TokenKind::TidT),
    ("mutex_t", TokenKind::MutexT),
    ("once_flag", TokenKind::OnceFlag),
    // Punctuation
    (",", TokenKind::Comma),
    (".", TokenKind::Period),
    (";", TokenKind::Semicolon),
    ("?", TokenKind::Question),
    (":", TokenKind::Colon),
    ("->", TokenKind::MemberAccess),
    ("::", TokenKind::ClassScope),
    ("sizeof", TokenKind::Sizeof),
    ("(", TokenKind::LeftParenthesis),
    (")", TokenKind::RightParenthesis),
    ("[", TokenKind::LeftSquareBracket),
    ("]", TokenKind::RightSquareBracket),
    ("{", TokenKind::LeftCurlyBracket),
    ("}", TokenKind::RightCurlyBracket),
];

/// Display names of the kinds that never come from source text.
const MARKERS: &[(&str, TokenKind)] = &[
    ("num", TokenKind::NumberConstant),
    ("id", TokenKind::Identifier),
    ("str_literal", TokenKind::StrLiteral),
    ("$eof$", TokenKind::Eof),
];

lazy_static! {
    static ref KEYWORDS: HashMap<&'static str, TokenKind> = LEXEMES.iter().copied().collect();
    static ref SPELLINGS: HashMap<TokenKind, &'static str> = LEXEMES
        .iter()
        .chain(MARKERS)
        .map(|&(spelling, kind)| (kind, spelling))
        .collect();
}

/// Looks up a lexeme, returning its kind if it is a keyword or operator.
pub fn lookup(lexeme: &[u8]) -> Option<TokenKind> {
    let lexeme = std::str::from_utf8(lexeme).ok()?;
    KEYWORDS.get(lexeme).copied()
}

/// The canonical spelling of a kind, for diagnostics.
pub fn spelling(kind: TokenKind) -> &'static str {
    SPELLINGS.get(&kind).copied().unwrap_or("<unknown>")
}
