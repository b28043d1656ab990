use crate::{
    ast::{ast::Value, constructs::Construct},
    errors::errors::Error,
    lexer::tokens::{Token, TokenKind},
    nesting::nested::{flatten, position_of, wrap, NestedToken},
    Position, Span, MK_TOKEN,
};

use super::{
    brackets::{closing_index, has_top_level_token, opening_bracket_index, split},
    expr::postfix_expression,
    values::{build_value, build_value_near},
};

fn start_of(token: &NestedToken) -> Position {
    position_of(std::slice::from_ref(token))
}

/// A span that may be the subject of a call, access or chain: non-empty and
/// free of top-level operators, assignments and arrows.
fn is_subject(tokens: &[NestedToken]) -> bool {
    !tokens.is_empty()
        && has_top_level_token(
            tokens,
            &[TokenKind::Operator, TokenKind::Assignment, TokenKind::Arrow],
        )
        .is_none()
}

fn has_top_level_arrow(tokens: &[NestedToken]) -> bool {
    has_top_level_token(tokens, &[TokenKind::Arrow]).is_some()
}

pub fn parse_return_construct(tokens: &[NestedToken]) -> Result<Option<Construct>, Error> {
    let Some(keyword) = tokens.first().filter(|token| token.is_kind(TokenKind::Return)) else {
        return Ok(None);
    };

    let value = build_value_near(&tokens[1..], &start_of(keyword))?;
    Ok(Some(Construct::Return { value }))
}

/// `callee(a, name: b)`
pub fn parse_call_construct(tokens: &[NestedToken]) -> Result<Option<Construct>, Error> {
    let length = tokens.len();
    if length < 4
        || !tokens[length - 1].is_kind(TokenKind::CloseParen)
        || !tokens[length - 3].is_kind(TokenKind::OpenParen)
    {
        return Ok(None);
    }

    let Some(arguments) = tokens[length - 2].as_nested() else {
        return Ok(None);
    };

    let callee = &tokens[..length - 3];
    if has_top_level_arrow(tokens) || !is_subject(callee) {
        return Ok(None);
    }

    let open = start_of(&tokens[length - 3]);
    let mut args: Vec<(String, Value)> = vec![];

    for (index, argument) in split(arguments, &[TokenKind::Comma], false)
        .into_iter()
        .enumerate()
    {
        let (name, value) = match argument.as_slice() {
            [NestedToken::Token(name), colon, rest @ ..]
                if name.kind == TokenKind::Name && colon.is_kind(TokenKind::Colon) =>
            {
                (name.value.clone(), build_value_near(rest, &name.span.start)?)
            }
            _ => (index.to_string(), build_value_near(&argument, &open)?),
        };

        match args.iter_mut().find(|entry| entry.0 == name) {
            Some(entry) => entry.1 = value,
            None => args.push((name, value)),
        }
    }

    let value = build_value(callee)?;
    Ok(Some(Construct::Call { value, args }))
}

/// `subject[key]`
pub fn parse_access_construct(tokens: &[NestedToken]) -> Result<Option<Construct>, Error> {
    let Some(open) = opening_bracket_index(tokens) else {
        return Ok(None);
    };

    let subject = &tokens[..open];
    if has_top_level_arrow(tokens) || !is_subject(subject) {
        return Ok(None);
    }

    let key = build_value_near(&tokens[open + 1..tokens.len() - 1], &start_of(&tokens[open]))?;
    let value = build_value(subject)?;
    Ok(Some(Construct::Access { value, key }))
}

/// `subject.a.b`
pub fn parse_chain_construct(tokens: &[NestedToken]) -> Result<Option<Construct>, Error> {
    if has_top_level_arrow(tokens) {
        return Ok(None);
    }

    let Some(dot) = has_top_level_token(tokens, &[TokenKind::Dot]) else {
        return Ok(None);
    };

    let subject = &tokens[..dot];
    if !is_subject(subject) {
        return Ok(None);
    }

    let mut accessor_list = vec![];
    for token in &tokens[dot..] {
        match token.as_token() {
            Some(token) if token.kind == TokenKind::Dot => {}
            Some(token) if token.kind.is_value() => accessor_list.push(token.clone()),
            _ => return Ok(None),
        }
    }

    if accessor_list.is_empty() {
        return Ok(None);
    }

    let value = build_value(subject)?;
    Ok(Some(Construct::Chain {
        value,
        accessor_list,
    }))
}

/// Parameter names of a lambda: a single name, or a parenthesized list of
/// names separated by commas.
fn lambda_parameters(tokens: &[NestedToken]) -> Option<Vec<String>> {
    let tokens = flatten(tokens);

    match tokens.as_slice() {
        [name] if name.kind == TokenKind::Name => Some(vec![name.value.clone()]),
        [open, inner @ .., close]
            if open.kind == TokenKind::OpenParen && close.kind == TokenKind::CloseParen =>
        {
            split(&wrap(inner.to_vec()), &[TokenKind::Comma], false)
                .iter()
                .map(|parameter| match parameter.as_slice() {
                    [NestedToken::Token(name)] if name.kind == TokenKind::Name => {
                        Some(name.value.clone())
                    }
                    _ => None,
                })
                .collect()
        }
        _ => None,
    }
}

/// `x => body` or `(a, b) => body`
pub fn parse_lambda_construct(tokens: &[NestedToken]) -> Result<Option<Construct>, Error> {
    let Some(arrow) = has_top_level_token(tokens, &[TokenKind::Arrow]) else {
        return Ok(None);
    };

    let Some(args) = lambda_parameters(&tokens[..arrow]) else {
        return Ok(None);
    };

    let value = build_value_near(&tokens[arrow + 1..], &start_of(&tokens[arrow]))?;
    Ok(Some(Construct::Lambda { args, value }))
}

/// `{key: value, value}`
pub fn parse_dictionary_construct(tokens: &[NestedToken]) -> Result<Option<Construct>, Error> {
    let length = tokens.len();
    if length < 2
        || !tokens[0].is_kind(TokenKind::OpenCurly)
        || closing_index(tokens, 0) != Some(length - 1)
    {
        return Ok(None);
    }

    let open = start_of(&tokens[0]);
    let mut values: Vec<(Value, Value)> = vec![];

    for (index, entry) in split(&tokens[1..length - 1], &[TokenKind::Comma], false)
        .into_iter()
        .enumerate()
    {
        let (key, value) = match has_top_level_token(&entry, &[TokenKind::Colon]) {
            Some(colon) => {
                let at = start_of(&entry[colon]);
                (
                    build_value_near(&entry[..colon], &at)?,
                    build_value_near(&entry[colon + 1..], &at)?,
                )
            }
            None => {
                let at = position_of(&entry);
                let at = if at.is_null() { open.clone() } else { at };
                let span = Span {
                    start: at.clone(),
                    end: at.clone(),
                };
                let key = Value::Literal(MK_TOKEN!(TokenKind::Decimal, index.to_string(), span));
                (key, build_value_near(&entry, &at)?)
            }
        };

        match values.iter_mut().find(|entry| entry.0 == key) {
            Some(entry) => entry.1 = value,
            None => values.push((key, value)),
        }
    }

    Ok(Some(Construct::Dictionary { values }))
}

/// An operator expression, unless an assignment comes first.
pub fn parse_operation_construct(tokens: &[NestedToken]) -> Result<Option<Construct>, Error> {
    let Some(operator) = has_top_level_token(tokens, &[TokenKind::Operator]) else {
        return Ok(None);
    };

    if has_top_level_token(tokens, &[TokenKind::Assignment]).is_some_and(|assign| assign < operator)
    {
        return Ok(None);
    }

    let expression = postfix_expression(tokens)?;
    Ok(Some(Construct::Operation { expression }))
}

/// `left = right`, unless an operator comes first.
pub fn parse_assignment_construct(tokens: &[NestedToken]) -> Result<Option<Construct>, Error> {
    let Some(assign) = has_top_level_token(tokens, &[TokenKind::Assignment]) else {
        return Ok(None);
    };

    if has_top_level_token(tokens, &[TokenKind::Operator]).is_some_and(|operator| operator < assign)
    {
        return Ok(None);
    }

    let Some(operator) = tokens[assign].as_token().cloned() else {
        return Ok(None);
    };

    let left = build_value_near(&tokens[..assign], &operator.span.start)?;
    let right = build_value_near(&tokens[assign + 1..], &operator.span.start)?;

    Ok(Some(Construct::Assignment {
        left,
        operator,
        right,
    }))
}
