//! Bracket-balance aware primitives. Everything here only acts on tokens
//! outside of any `()`, `[]` or `{}` pair.

use std::mem::take;

use crate::{lexer::tokens::TokenKind, nesting::nested::NestedToken};

use super::lookups::detect_block_type;

#[derive(Default)]
struct BracketDepth {
    parentheses: i32,
    brackets: i32,
    braces: i32,
}

impl BracketDepth {
    fn track(&mut self, token: &NestedToken) {
        let Some(token) = token.as_token() else {
            return;
        };

        match token.kind {
            TokenKind::OpenParen => self.parentheses += 1,
            TokenKind::OpenBracket => self.brackets += 1,
            TokenKind::OpenCurly => self.braces += 1,
            TokenKind::CloseParen => self.parentheses -= 1,
            TokenKind::CloseBracket => self.brackets -= 1,
            TokenKind::CloseCurly => self.braces -= 1,
            _ => {}
        }
    }

    fn at_top_level(&self) -> bool {
        self.parentheses == 0 && self.brackets == 0 && self.braces == 0
    }
}

/// Splits `tokens` at every top-level token of one of the `delimiters` kinds.
/// With `keep_delimiter` the delimiter opens the following group.
pub fn split(
    tokens: &[NestedToken],
    delimiters: &[TokenKind],
    keep_delimiter: bool,
) -> Vec<Vec<NestedToken>> {
    if tokens.is_empty() {
        return vec![];
    }

    let mut depth = BracketDepth::default();
    let mut groups = vec![];
    let mut current = vec![];

    for token in tokens {
        depth.track(token);

        if token.is_one_of(delimiters) && depth.at_top_level() {
            groups.push(take(&mut current));
            if keep_delimiter {
                current.push(token.clone());
            }
        } else {
            current.push(token.clone());
        }
    }

    groups.push(current);
    groups
}

/// Index of the first top-level token of one of `kinds`.
pub fn has_top_level_token(tokens: &[NestedToken], kinds: &[TokenKind]) -> Option<usize> {
    let mut depth = BracketDepth::default();

    for (index, token) in tokens.iter().enumerate() {
        depth.track(token);

        if token.is_one_of(kinds) && depth.at_top_level() {
            return Some(index);
        }
    }

    None
}

/// Index of the bracket closing the one opened at `open`.
pub fn closing_index(tokens: &[NestedToken], open: usize) -> Option<usize> {
    let (open_kind, close_kind) = match tokens.get(open)?.as_token()?.kind {
        TokenKind::OpenParen => (TokenKind::OpenParen, TokenKind::CloseParen),
        TokenKind::OpenBracket => (TokenKind::OpenBracket, TokenKind::CloseBracket),
        TokenKind::OpenCurly => (TokenKind::OpenCurly, TokenKind::CloseCurly),
        _ => return None,
    };

    let mut depth = 0;
    for (index, token) in tokens.iter().enumerate().skip(open) {
        if token.is_kind(open_kind) {
            depth += 1;
        } else if token.is_kind(close_kind) {
            depth -= 1;
            if depth == 0 {
                return Some(index);
            }
        }
    }

    None
}

/// Index of the `[` matching the `]` that ends `tokens`.
pub fn opening_bracket_index(tokens: &[NestedToken]) -> Option<usize> {
    if !tokens.last()?.is_kind(TokenKind::CloseBracket) {
        return None;
    }

    let mut depth = 0;
    for (index, token) in tokens.iter().enumerate().rev() {
        if token.is_kind(TokenKind::CloseBracket) {
            depth += 1;
        } else if token.is_kind(TokenKind::OpenBracket) {
            depth -= 1;
            if depth == 0 {
                return Some(index);
            }
        }
    }

    None
}

/// The interior of a span shaped exactly `( group )`.
pub fn parenthesized(tokens: &[NestedToken]) -> Option<&[NestedToken]> {
    match tokens {
        [open, NestedToken::Nested(inner), close]
            if open.is_kind(TokenKind::OpenParen) && close.is_kind(TokenKind::CloseParen) =>
        {
            Some(inner.as_slice())
        }
        _ => None,
    }
}

fn starts_block(token: &NestedToken) -> bool {
    token.as_token().and_then(detect_block_type).is_some()
}

/// Rewrites every balanced top-level `( ... )` run as `(`, the re-nested
/// interior as one group, `)`. A block keyword at the top level ends the
/// rewrite; the block owns the rest of the span unchanged.
pub fn nest_by_parentheses(tokens: &[NestedToken]) -> Vec<NestedToken> {
    let mut depth = 0;
    let mut out = vec![];
    let mut group: Vec<NestedToken> = vec![];

    for (index, token) in tokens.iter().enumerate() {
        if depth == 0 && starts_block(token) {
            out.extend(tokens[index..].iter().cloned());
            return out;
        }

        if token.is_kind(TokenKind::OpenParen) {
            depth += 1;
        } else if token.is_kind(TokenKind::CloseParen) && depth > 0 {
            depth -= 1;

            if depth == 0 {
                let mut interior = take(&mut group);
                let open = interior.remove(0);
                out.push(open);
                out.push(NestedToken::Nested(nest_by_parentheses(&interior)));
                out.push(token.clone());
                continue;
            }
        }

        if depth > 0 {
            group.push(token.clone());
        } else {
            out.push(token.clone());
        }
    }

    // Unclosed parenthesis: keep the opener, nest what followed it.
    if !group.is_empty() {
        let open = group.remove(0);
        out.push(open);
        if !group.is_empty() {
            out.push(NestedToken::Nested(nest_by_parentheses(&group)));
        }
    }

    out
}
