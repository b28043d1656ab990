use std::fmt::Display;

use serde::Serialize;

use crate::{lexer::tokens::Token, Position};

use super::ast::Value;

/// Block Types
#[derive(PartialEq, Eq, Clone, Copy, Debug, Hash, Serialize)]
pub enum BlockType {
    Import,
    Closure,
    If,
    Else,
    Do,
    Each,
    Repeat,
    Function,
}

impl BlockType {
    /// The keyword that introduces the block.
    pub fn keyword(&self) -> &'static str {
        match self {
            BlockType::Import => "import",
            BlockType::Closure => "closure",
            BlockType::If => "if",
            BlockType::Else => "else",
            BlockType::Do => "do",
            BlockType::Each => "each",
            BlockType::Repeat => "repeat",
            BlockType::Function => "fn",
        }
    }
}

impl Display for BlockType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Block {
    /// Names captured through a `[name, ...]` list after the keyword.
    pub declarations: Vec<Token>,
    pub kind: BlockKind,
    #[serde(skip)]
    pub origin: Position,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum BlockKind {
    Import {
        symbols: Vec<Token>,
    },
    Closure {
        name: String,
        symbols: Vec<Block>,
    },
    If {
        condition: Value,
        value: Value,
    },
    Else {
        value: Value,
    },
    Do {
        steps: Vec<Value>,
    },
    Each {
        iterator_name: String,
        iteratee: Value,
        value: Value,
    },
    Repeat {
        repeat: Value,
        value: Value,
    },
    Function {
        name: String,
        args: Vec<String>,
        value: Value,
    },
}

impl Block {
    pub fn get_block_type(&self) -> BlockType {
        match self.kind {
            BlockKind::Import { .. } => BlockType::Import,
            BlockKind::Closure { .. } => BlockType::Closure,
            BlockKind::If { .. } => BlockType::If,
            BlockKind::Else { .. } => BlockType::Else,
            BlockKind::Do { .. } => BlockType::Do,
            BlockKind::Each { .. } => BlockType::Each,
            BlockKind::Repeat { .. } => BlockType::Repeat,
            BlockKind::Function { .. } => BlockType::Function,
        }
    }

    /// Child symbols of a closure, empty for every other block.
    pub fn symbols(&self) -> &[Block] {
        match &self.kind {
            BlockKind::Closure { symbols, .. } => symbols,
            _ => &[],
        }
    }
}
