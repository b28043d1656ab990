use serde::Serialize;

use crate::lexer::tokens::Token;

use super::{blocks::Block, constructs::Construct};

/// Anything usable as an expression result.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Value {
    /// A string, number, boolean or name token.
    Literal(Token),
    /// Blocks are first-class values, e.g. an inline closure.
    Block(Box<Block>),
    Construct(Box<Construct>),
}

impl Value {
    pub fn as_literal(&self) -> Option<&Token> {
        match self {
            Value::Literal(token) => Some(token),
            _ => None,
        }
    }

    pub fn as_block(&self) -> Option<&Block> {
        match self {
            Value::Block(block) => Some(block),
            _ => None,
        }
    }

    pub fn as_construct(&self) -> Option<&Construct> {
        match self {
            Value::Construct(construct) => Some(construct),
            _ => None,
        }
    }
}

impl From<Block> for Value {
    fn from(block: Block) -> Self {
        Value::Block(Box::new(block))
    }
}

impl From<Construct> for Value {
    fn from(construct: Construct) -> Self {
        Value::Construct(Box::new(construct))
    }
}

/// One element of an operation in postfix order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum ExpressionItem {
    Operator(Token),
    /// An operator applied to the single operand before it, e.g. `not` or a
    /// leading `-`.
    PrefixOperator(Token),
    Operand(Value),
}
