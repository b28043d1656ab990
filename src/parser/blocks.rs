use crate::{
    ast::{
        ast::Value,
        blocks::{Block, BlockKind, BlockType},
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind},
    nesting::nested::{flatten, flatten_once, position_of, wrap, NestedToken},
    Position,
};

use super::{
    brackets::split,
    parser::fetch_symbols,
    values::build_value_near,
};

/// A block symbol with its keyword and declaration list taken off.
pub struct Declared<'a> {
    pub origin: Position,
    pub declarations: Vec<Token>,
    pub body: &'a [NestedToken],
}

fn invalid(block_type: BlockType, origin: &Position) -> Error {
    Error::new(
        ErrorImpl::InvalidBlock { block: block_type },
        origin.clone(),
    )
}

/// Strips the keyword and an optional `[name, ...]` declaration list.
pub fn get_optional_declarations(
    tokens: &[NestedToken],
    block_type: BlockType,
) -> Result<Declared<'_>, Error> {
    let origin = position_of(tokens);

    let keyword_matches = tokens
        .first()
        .and_then(NestedToken::as_token)
        .is_some_and(|token| token.kind == TokenKind::Keyword && token.value == block_type.keyword());
    if !keyword_matches {
        return Err(invalid(block_type, &origin));
    }

    let rest = &tokens[1..];
    if !rest.first().is_some_and(|token| token.is_kind(TokenKind::OpenBracket)) {
        return Ok(Declared {
            origin,
            declarations: vec![],
            body: rest,
        });
    }

    let mut declarations = vec![];
    for (index, token) in rest.iter().enumerate().skip(1) {
        match token.as_token() {
            Some(token) if token.kind == TokenKind::CloseBracket => {
                return Ok(Declared {
                    origin,
                    declarations,
                    body: &rest[index + 1..],
                });
            }
            Some(token) if token.kind == TokenKind::Name => declarations.push(token.clone()),
            _ => {}
        }
    }

    Err(invalid(block_type, &origin))
}

/// Splits a block body into the header on the keyword's line and the
/// indented remainder, starting at the first nested group.
fn split_header(body: &[NestedToken]) -> (&[NestedToken], &[NestedToken]) {
    match body.iter().position(NestedToken::is_nested) {
        Some(index) => body.split_at(index),
        None => (body, &[]),
    }
}

fn single_name(tokens: &[NestedToken]) -> Option<String> {
    match tokens {
        [NestedToken::Token(token)] if token.kind == TokenKind::Name => Some(token.value.clone()),
        _ => None,
    }
}

pub fn parse_import_block(tokens: &[NestedToken]) -> Result<Block, Error> {
    let declared = get_optional_declarations(tokens, BlockType::Import)?;

    let symbols: Option<Vec<Token>> = declared
        .body
        .iter()
        .map(|token| {
            token
                .as_token()
                .filter(|token| token.is_one_of_many(&[TokenKind::Name, TokenKind::Dot]))
                .cloned()
        })
        .collect();

    match symbols {
        Some(symbols) if !symbols.is_empty() => Ok(Block {
            declarations: declared.declarations,
            kind: BlockKind::Import { symbols },
            origin: declared.origin,
        }),
        _ => Err(invalid(BlockType::Import, &declared.origin)),
    }
}

pub fn parse_closure_block(tokens: &[NestedToken]) -> Result<Block, Error> {
    let declared = get_optional_declarations(tokens, BlockType::Closure)?;
    let (header, body) = split_header(declared.body);

    let Some(name) = single_name(header) else {
        return Err(invalid(BlockType::Closure, &declared.origin));
    };

    Ok(Block {
        declarations: declared.declarations,
        kind: BlockKind::Closure {
            name,
            symbols: fetch_symbols(&flatten_once(body))?,
        },
        origin: declared.origin,
    })
}

pub fn parse_if_block(tokens: &[NestedToken]) -> Result<Block, Error> {
    let declared = get_optional_declarations(tokens, BlockType::If)?;
    let (header, body) = split_header(declared.body);

    if header.is_empty() || body.is_empty() {
        return Err(invalid(BlockType::If, &declared.origin));
    }

    let condition = build_value_near(header, &declared.origin)?;
    let value = build_value_near(body, &declared.origin)?;

    Ok(Block {
        declarations: declared.declarations,
        kind: BlockKind::If { condition, value },
        origin: declared.origin,
    })
}

pub fn parse_else_block(tokens: &[NestedToken]) -> Result<Block, Error> {
    let declared = get_optional_declarations(tokens, BlockType::Else)?;
    let value = build_value_near(declared.body, &declared.origin)?;

    Ok(Block {
        declarations: declared.declarations,
        kind: BlockKind::Else { value },
        origin: declared.origin,
    })
}

/// Steps are separated by commas or line breaks, on the keyword's line and
/// in the indented body alike.
pub fn parse_do_block(tokens: &[NestedToken]) -> Result<Block, Error> {
    let declared = get_optional_declarations(tokens, BlockType::Do)?;

    let steps = split(
        &flatten_once(declared.body),
        &[TokenKind::Comma, TokenKind::Newline],
        false,
    )
    .iter()
    .filter(|step| !step.is_empty())
    .map(|step| build_value_near(step, &declared.origin))
    .collect::<Result<Vec<Value>, Error>>()?;

    if steps.is_empty() {
        return Err(invalid(BlockType::Do, &declared.origin));
    }

    Ok(Block {
        declarations: declared.declarations,
        kind: BlockKind::Do { steps },
        origin: declared.origin,
    })
}

/// `each item in items` followed by an indented body. The word between the
/// iterator name and the iteratee is not checked.
pub fn parse_each_block(tokens: &[NestedToken]) -> Result<Block, Error> {
    let declared = get_optional_declarations(tokens, BlockType::Each)?;
    let (header, body) = split_header(declared.body);

    let iterator_name = match header {
        [NestedToken::Token(name), _, iteratee @ ..]
            if name.kind == TokenKind::Name && !iteratee.is_empty() && !body.is_empty() =>
        {
            name.value.clone()
        }
        _ => return Err(invalid(BlockType::Each, &declared.origin)),
    };

    let iteratee = build_value_near(&header[2..], &declared.origin)?;
    let value = build_value_near(body, &declared.origin)?;

    Ok(Block {
        declarations: declared.declarations,
        kind: BlockKind::Each {
            iterator_name,
            iteratee,
            value,
        },
        origin: declared.origin,
    })
}

pub fn parse_repeat_block(tokens: &[NestedToken]) -> Result<Block, Error> {
    let declared = get_optional_declarations(tokens, BlockType::Repeat)?;
    let (header, body) = split_header(declared.body);

    if header.is_empty() || body.is_empty() {
        return Err(invalid(BlockType::Repeat, &declared.origin));
    }

    let repeat = build_value_near(header, &declared.origin)?;
    let value = build_value_near(body, &declared.origin)?;

    Ok(Block {
        declarations: declared.declarations,
        kind: BlockKind::Repeat { repeat, value },
        origin: declared.origin,
    })
}

/// Splits a function header into its parameter names and whatever follows
/// the closing parenthesis on the same line.
fn function_signature(header: &[Token]) -> Option<(Vec<String>, Vec<Token>)> {
    let Some(open) = header.first() else {
        return Some((vec![], vec![]));
    };

    if open.kind != TokenKind::OpenParen {
        return None;
    }

    let mut depth = 0;
    for (index, token) in header.iter().enumerate() {
        match token.kind {
            TokenKind::OpenParen => depth += 1,
            TokenKind::CloseParen => {
                depth -= 1;
                if depth == 0 {
                    let parameters = &header[1..index];
                    let args = parameters
                        .iter()
                        .filter(|token| token.kind != TokenKind::Comma)
                        .map(|token| (token.kind == TokenKind::Name).then(|| token.value.clone()))
                        .collect::<Option<Vec<String>>>()?;

                    return Some((args, header[index + 1..].to_vec()));
                }
            }
            _ => {}
        }
    }

    None
}

/// `fn name(a, b)` followed by an indented body or an inline one.
pub fn parse_fn_block(tokens: &[NestedToken]) -> Result<Block, Error> {
    let declared = get_optional_declarations(tokens, BlockType::Function)?;
    let (header, body) = split_header(declared.body);
    let header = flatten(header);

    let name = match header.first() {
        Some(token) if token.kind == TokenKind::Name => token.value.clone(),
        _ => return Err(invalid(BlockType::Function, &declared.origin)),
    };

    let Some((args, inline)) = function_signature(&header[1..]) else {
        return Err(invalid(BlockType::Function, &declared.origin));
    };

    let mut value = wrap(inline);
    value.extend(flatten_once(body));
    let value = build_value_near(&value, &declared.origin)?;

    Ok(Block {
        declarations: declared.declarations,
        kind: BlockKind::Function { name, args, value },
        origin: declared.origin,
    })
}
