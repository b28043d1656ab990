use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::{
    ast::{
        blocks::{Block, BlockType},
        constructs::{Construct, ConstructType},
    },
    errors::errors::Error,
    lexer::tokens::{Token, TokenKind},
    nesting::nested::NestedToken,
};

use super::{blocks::*, constructs::*};

pub type BlockHandler = fn(&[NestedToken]) -> Result<Block, Error>;
/// Returns `Ok(None)` when the span does not have the construct's shape.
pub type ConstructHandler = fn(&[NestedToken]) -> Result<Option<Construct>, Error>;

const BLOCK_TYPES: [BlockType; 8] = [
    BlockType::Import,
    BlockType::Closure,
    BlockType::If,
    BlockType::Else,
    BlockType::Do,
    BlockType::Each,
    BlockType::Repeat,
    BlockType::Function,
];

lazy_static! {
    pub static ref BLOCK_LOOKUP: HashMap<&'static str, BlockType> = BLOCK_TYPES
        .iter()
        .map(|block_type| (block_type.keyword(), *block_type))
        .collect();
}

/// The block a keyword token introduces, if any.
pub fn detect_block_type(token: &Token) -> Option<BlockType> {
    if token.kind != TokenKind::Keyword {
        return None;
    }

    BLOCK_LOOKUP.get(token.value.as_str()).copied()
}

pub fn block_handler(block_type: BlockType) -> BlockHandler {
    match block_type {
        BlockType::Import => parse_import_block,
        BlockType::Closure => parse_closure_block,
        BlockType::If => parse_if_block,
        BlockType::Else => parse_else_block,
        BlockType::Do => parse_do_block,
        BlockType::Each => parse_each_block,
        BlockType::Repeat => parse_repeat_block,
        BlockType::Function => parse_fn_block,
    }
}

pub fn construct_handler(construct_type: ConstructType) -> ConstructHandler {
    match construct_type {
        ConstructType::Return => parse_return_construct,
        ConstructType::Call => parse_call_construct,
        ConstructType::Access => parse_access_construct,
        ConstructType::Chain => parse_chain_construct,
        ConstructType::Lambda => parse_lambda_construct,
        ConstructType::Dictionary => parse_dictionary_construct,
        ConstructType::Operation => parse_operation_construct,
        ConstructType::Assignment => parse_assignment_construct,
    }
}
