use serde::Serialize;

use crate::lexer::tokens::Token;

use super::ast::{ExpressionItem, Value};

/// Construct Types, in the order the value builder tries them.
#[derive(PartialEq, Eq, Clone, Copy, Debug, Hash, Serialize)]
pub enum ConstructType {
    Return,
    Call,
    Access,
    Chain,
    Lambda,
    Dictionary,
    Operation,
    Assignment,
}

impl ConstructType {
    pub const PRIORITY: [ConstructType; 8] = [
        ConstructType::Return,
        ConstructType::Call,
        ConstructType::Access,
        ConstructType::Chain,
        ConstructType::Lambda,
        ConstructType::Dictionary,
        ConstructType::Operation,
        ConstructType::Assignment,
    ];
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Construct {
    Return {
        value: Value,
    },
    /// Arguments keyed by name, or by their position for unnamed ones.
    Call {
        value: Value,
        args: Vec<(String, Value)>,
    },
    /// `value[key]`
    Access {
        value: Value,
        key: Value,
    },
    /// `value.a.b`
    Chain {
        value: Value,
        accessor_list: Vec<Token>,
    },
    Lambda {
        args: Vec<String>,
        value: Value,
    },
    /// Unlabelled entries are keyed by their 0-based position.
    Dictionary {
        values: Vec<(Value, Value)>,
    },
    /// Operators and operands in postfix order.
    Operation {
        expression: Vec<ExpressionItem>,
    },
    Assignment {
        left: Value,
        operator: Token,
        right: Value,
    },
}

impl Construct {
    pub fn get_construct_type(&self) -> ConstructType {
        match self {
            Construct::Return { .. } => ConstructType::Return,
            Construct::Call { .. } => ConstructType::Call,
            Construct::Access { .. } => ConstructType::Access,
            Construct::Chain { .. } => ConstructType::Chain,
            Construct::Lambda { .. } => ConstructType::Lambda,
            Construct::Dictionary { .. } => ConstructType::Dictionary,
            Construct::Operation { .. } => ConstructType::Operation,
            Construct::Assignment { .. } => ConstructType::Assignment,
        }
    }
}
