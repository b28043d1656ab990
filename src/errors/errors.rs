use std::fmt::Display;

use thiserror::Error;

use crate::{ast::blocks::BlockType, Position};

#[derive(Debug, Clone)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_error(&self) -> &ErrorImpl {
        &self.internal_error
    }

    /// Attaches `position` when the error was raised without an origin, e.g.
    /// on an empty span.
    pub fn or_position(mut self, position: &Position) -> Self {
        if self.position.is_null() {
            self.position = position.clone();
        }
        self
    }

    pub fn get_error_name(&self) -> String {
        match &self.internal_error {
            ErrorImpl::UnexpectedToken { .. } => String::from("Unexpected token"),
            ErrorImpl::UnexpectedBlock => String::from("Unexpected block"),
            ErrorImpl::InvalidBlock { block } => format!("Invalid {}", block),
            ErrorImpl::NoExpression => String::from("No expression"),
            ErrorImpl::InconsistentIndentation { .. } => String::from("Inconsistent indentation"),
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnexpectedToken { token } if !token.is_empty() => {
                ErrorTip::Suggestion(format!("Unexpected token: `{}`", token.escape_debug()))
            }
            ErrorImpl::UnexpectedToken { .. } => ErrorTip::None,
            ErrorImpl::UnexpectedBlock => ErrorTip::Suggestion(String::from(
                "A symbol must start with a keyword, is this line indented too far?",
            )),
            ErrorImpl::InvalidBlock { .. } => ErrorTip::None,
            ErrorImpl::NoExpression => ErrorTip::None,
            ErrorImpl::InconsistentIndentation { width, unit } => ErrorTip::Suggestion(format!(
                "Indentation of width {} is not a multiple of the indent unit ({})",
                width, unit
            )),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.get_error_name())
    }
}

impl std::error::Error for Error {}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("unexpected token: {token:?}")]
    UnexpectedToken { token: String },
    #[error("unexpected block")]
    UnexpectedBlock,
    #[error("invalid {block}")]
    InvalidBlock { block: BlockType },
    #[error("no expression")]
    NoExpression,
    #[error("inconsistent indentation: width {width} with unit {unit}")]
    InconsistentIndentation { width: usize, unit: usize },
}
