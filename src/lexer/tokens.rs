use std::fmt::Display;

use serde::Serialize;

use crate::Span;

/// Token categories, declared in the order the grammar consults them.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Serialize)]
pub enum TokenKind {
    Float,
    Scientific,
    Binary,
    Octal,
    Decimal,
    Hexadecimal,
    Boolean,
    String,
    Operator,
    Assignment,
    Arrow,
    Keyword,
    Return,
    Name,
    Whitespace,
    Newline,
    Comment,

    OpenParen,
    OpenBracket,
    OpenCurly,
    CloseParen,
    CloseBracket,
    CloseCurly,
    Colon,
    Dot,
    Comma,
}

impl TokenKind {
    pub const ALL: [TokenKind; 26] = [
        TokenKind::Float,
        TokenKind::Scientific,
        TokenKind::Binary,
        TokenKind::Octal,
        TokenKind::Decimal,
        TokenKind::Hexadecimal,
        TokenKind::Boolean,
        TokenKind::String,
        TokenKind::Operator,
        TokenKind::Assignment,
        TokenKind::Arrow,
        TokenKind::Keyword,
        TokenKind::Return,
        TokenKind::Name,
        TokenKind::Whitespace,
        TokenKind::Newline,
        TokenKind::Comment,
        TokenKind::OpenParen,
        TokenKind::OpenBracket,
        TokenKind::OpenCurly,
        TokenKind::CloseParen,
        TokenKind::CloseBracket,
        TokenKind::CloseCurly,
        TokenKind::Colon,
        TokenKind::Dot,
        TokenKind::Comma,
    ];

    /// Kinds that can stand on their own as a value.
    pub fn is_value(&self) -> bool {
        matches!(
            self,
            TokenKind::String
                | TokenKind::Binary
                | TokenKind::Octal
                | TokenKind::Decimal
                | TokenKind::Hexadecimal
                | TokenKind::Float
                | TokenKind::Scientific
                | TokenKind::Boolean
                | TokenKind::Name
        )
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Tokens compare by kind and text; where they came from is not part of
/// their identity.
#[derive(Debug, Clone, Serialize)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    #[serde(skip)]
    pub span: Span,
}

impl PartialEq for Token {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind && self.value == other.value
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Token {{\nkind: {},\nvalue: {}}}", self.kind, self.value)
    }
}

impl Token {
    pub fn is_one_of_many(&self, kinds: &[TokenKind]) -> bool {
        kinds.contains(&self.kind)
    }
}
