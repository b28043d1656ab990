use crate::{
    ast::{ast::Value, constructs::ConstructType},
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
    nesting::nested::{first_token, position_of, NestedToken},
    Position,
};

use super::{
    brackets::{nest_by_parentheses, parenthesized},
    lookups::{construct_handler, detect_block_type},
    parser::to_block,
};

fn starts_block(token: &NestedToken) -> bool {
    token.as_token().and_then(detect_block_type).is_some()
}

/// Flattens indentation groups into `out`, dropping newline markers. Once a
/// block keyword is reached the rest of the span is copied as is, so the
/// block keeps its indented body.
fn flatten_expression(tokens: &[NestedToken], out: &mut Vec<NestedToken>) -> bool {
    for (index, token) in tokens.iter().enumerate() {
        match token {
            NestedToken::Token(token) if token.kind == TokenKind::Newline => {}
            NestedToken::Token(_) if starts_block(token) => {
                out.extend(tokens[index..].iter().cloned());
                return true;
            }
            NestedToken::Token(_) => out.push(token.clone()),
            NestedToken::Nested(children) => {
                if flatten_expression(children, out) {
                    out.extend(tokens[index + 1..].iter().cloned());
                    return true;
                }
            }
        }
    }

    false
}

fn as_literal(tokens: &[NestedToken]) -> Option<Value> {
    match tokens {
        [NestedToken::Token(token)] if token.kind.is_value() => Some(Value::Literal(token.clone())),
        _ => None,
    }
}

/// Builds a value from a span of the token tree.
///
/// Literals, parenthesized groups and inline blocks are recognised directly.
/// Anything else is flattened, re-nested by parentheses and offered to each
/// construct matcher in priority order; the first match wins.
pub fn build_value(tokens: &[NestedToken]) -> Result<Value, Error> {
    let expression: Vec<NestedToken> = tokens
        .iter()
        .filter(|token| !token.is_kind(TokenKind::Newline))
        .cloned()
        .collect();

    let Some(first) = expression.first() else {
        return Err(Error::new(ErrorImpl::NoExpression, Position::null()));
    };

    if starts_block(first) {
        return Ok(to_block(&expression)?.into());
    }

    if let Some(literal) = as_literal(&expression) {
        return Ok(literal);
    }

    if let [NestedToken::Nested(children)] = expression.as_slice() {
        return build_value(children);
    }

    if let Some(inner) = parenthesized(&expression) {
        return build_value(inner);
    }

    let mut flat = vec![];
    flatten_expression(&expression, &mut flat);
    let expression = nest_by_parentheses(&flat);

    if let Some(literal) = as_literal(&expression) {
        return Ok(literal);
    }

    if let Some(inner) = parenthesized(&expression) {
        return build_value(inner);
    }

    for construct_type in ConstructType::PRIORITY {
        if let Some(construct) = construct_handler(construct_type)(&expression)? {
            return Ok(construct.into());
        }
    }

    let token = first_token(&expression)
        .map(|token| token.value.clone())
        .unwrap_or_default();
    Err(Error::new(
        ErrorImpl::UnexpectedToken { token },
        position_of(&expression),
    ))
}

/// Builds a value, pointing errors raised on an empty span at `position`.
pub fn build_value_near(tokens: &[NestedToken], position: &Position) -> Result<Value, Error> {
    build_value(tokens).map_err(|error| error.or_position(position))
}
