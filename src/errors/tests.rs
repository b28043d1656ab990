//! Unit tests for error handling.
//!
//! This module contains tests for error types and error reporting.

use crate::ast::blocks::BlockType;
use crate::errors::errors::{Error, ErrorImpl, ErrorTip};
use crate::{Position, Source};

fn position(offset: u32) -> Position {
    Position::new(offset, &Source::new("test.ark", "fn ()\n  1\n"))
}

#[test]
fn test_error_creation() {
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            token: "@".to_string(),
        },
        position(0),
    );

    assert_eq!(error.get_error_name(), "Unexpected token");
}

#[test]
fn test_error_position() {
    let error = Error::new(ErrorImpl::UnexpectedBlock, position(3));

    assert_eq!(error.get_position().0, 3);
    assert_eq!(error.get_position().column(), 4);
}

#[test]
fn test_invalid_block_names() {
    let names = [
        (BlockType::Import, "Invalid Import"),
        (BlockType::Closure, "Invalid Closure"),
        (BlockType::If, "Invalid If"),
        (BlockType::Else, "Invalid Else"),
        (BlockType::Do, "Invalid Do"),
        (BlockType::Each, "Invalid Each"),
        (BlockType::Repeat, "Invalid Repeat"),
        (BlockType::Function, "Invalid Function"),
    ];

    for (block, name) in names {
        let error = Error::new(ErrorImpl::InvalidBlock { block }, position(0));
        assert_eq!(error.get_error_name(), name);
    }
}

#[test]
fn test_no_expression_error() {
    let error = Error::new(ErrorImpl::NoExpression, Position::null());

    assert_eq!(error.get_error_name(), "No expression");
    assert!(error.get_position().is_null());
}

#[test]
fn test_or_position_fills_missing_origin() {
    let error = Error::new(ErrorImpl::NoExpression, Position::null()).or_position(&position(8));
    assert_eq!(error.get_position().0, 8);

    let error = Error::new(ErrorImpl::NoExpression, position(2)).or_position(&position(8));
    assert_eq!(error.get_position().0, 2);
}

#[test]
fn test_error_tip_none() {
    let error = Error::new(
        ErrorImpl::InvalidBlock {
            block: BlockType::Function,
        },
        position(0),
    );

    assert!(matches!(error.get_tip(), ErrorTip::None));
}

#[test]
fn test_error_tip_suggestion() {
    let error = Error::new(
        ErrorImpl::InconsistentIndentation { width: 3, unit: 2 },
        position(0),
    );

    match error.get_tip() {
        ErrorTip::Suggestion(tip) => assert!(tip.contains("multiple")),
        _ => panic!("Expected suggestion tip"),
    }
}

#[test]
fn test_error_tip_display() {
    let tip = ErrorTip::Suggestion("Try this instead".to_string());
    assert_eq!(tip.to_string(), "Try this instead");

    let tip = ErrorTip::None;
    assert_eq!(tip.to_string(), "");
}

#[test]
fn test_error_display_uses_kind_name() {
    let error = Error::new(ErrorImpl::UnexpectedBlock, position(0));
    assert_eq!(error.to_string(), "Unexpected block");
}
