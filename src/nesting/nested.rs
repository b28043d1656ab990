use crate::{
    lexer::tokens::{Token, TokenKind},
    Position,
};

/// A token tree. Nesting first mirrors indentation, and later, inside the
/// value builder, parenthesis groups.
#[derive(Debug, Clone, PartialEq)]
pub enum NestedToken {
    Token(Token),
    Nested(Vec<NestedToken>),
}

impl NestedToken {
    pub fn as_token(&self) -> Option<&Token> {
        match self {
            NestedToken::Token(token) => Some(token),
            NestedToken::Nested(_) => None,
        }
    }

    pub fn as_nested(&self) -> Option<&[NestedToken]> {
        match self {
            NestedToken::Token(_) => None,
            NestedToken::Nested(children) => Some(children),
        }
    }

    pub fn is_kind(&self, kind: TokenKind) -> bool {
        self.as_token().is_some_and(|token| token.kind == kind)
    }

    pub fn is_one_of(&self, kinds: &[TokenKind]) -> bool {
        self.as_token().is_some_and(|token| token.is_one_of_many(kinds))
    }

    pub fn is_nested(&self) -> bool {
        matches!(self, NestedToken::Nested(_))
    }
}

/// Flattens one level of nesting.
pub fn flatten_once(tokens: &[NestedToken]) -> Vec<NestedToken> {
    let mut out = vec![];
    for token in tokens {
        match token {
            NestedToken::Token(_) => out.push(token.clone()),
            NestedToken::Nested(children) => out.extend(children.iter().cloned()),
        }
    }
    out
}

/// Flattens every level of nesting into plain tokens.
pub fn flatten(tokens: &[NestedToken]) -> Vec<Token> {
    let mut out = vec![];
    for token in tokens {
        match token {
            NestedToken::Token(token) => out.push(token.clone()),
            NestedToken::Nested(children) => out.extend(flatten(children)),
        }
    }
    out
}

/// The first token anywhere in the tree, depth first.
pub fn first_token(tokens: &[NestedToken]) -> Option<&Token> {
    tokens.iter().find_map(|token| match token {
        NestedToken::Token(token) => Some(token),
        NestedToken::Nested(children) => first_token(children),
    })
}

/// Best-effort origin of a span, null when it holds no token.
pub fn position_of(tokens: &[NestedToken]) -> Position {
    first_token(tokens)
        .map(|token| token.span.start.clone())
        .unwrap_or_else(Position::null)
}

pub fn wrap(tokens: Vec<Token>) -> Vec<NestedToken> {
    tokens.into_iter().map(NestedToken::Token).collect()
}
