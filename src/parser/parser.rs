//! Symbol splitting and block dispatch.
//!
//! A program is a sequence of symbols, one per line at the same indentation.
//! Each symbol must start with a block keyword, which selects the block
//! constructor from the lookup table in [`super::lookups`].

use std::rc::Rc;

use crate::{
    ast::blocks::{Block, BlockKind},
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
    nesting::nested::{position_of, NestedToken},
    Position, Source,
};

use super::lookups::{block_handler, detect_block_type};

/// Parses a whole program into the implicit top-level closure `main`.
pub fn parse(tree: &[NestedToken], file: Rc<Source>) -> Result<Block, Error> {
    Ok(Block {
        declarations: vec![],
        kind: BlockKind::Closure {
            name: String::from("main"),
            symbols: fetch_symbols(tree)?,
        },
        origin: Position::new(0, &file),
    })
}

/// Splits a sequence at its newline markers and turns every non-empty group
/// into a block.
pub fn fetch_symbols(tokens: &[NestedToken]) -> Result<Vec<Block>, Error> {
    tokens
        .split(|token| token.is_kind(TokenKind::Newline))
        .filter(|symbol| !symbol.is_empty())
        .map(to_block)
        .collect()
}

/// Dispatches a symbol to the constructor selected by its leading keyword.
pub fn to_block(symbol: &[NestedToken]) -> Result<Block, Error> {
    let Some(first) = symbol.first() else {
        return Err(Error::new(ErrorImpl::UnexpectedBlock, Position::null()));
    };

    let Some(token) = first.as_token() else {
        return Err(Error::new(ErrorImpl::UnexpectedBlock, position_of(symbol)));
    };

    let Some(block_type) = detect_block_type(token) else {
        return Err(Error::new(
            ErrorImpl::UnexpectedToken {
                token: token.value.clone(),
            },
            token.span.start.clone(),
        ));
    };

    block_handler(block_type)(symbol)
}
