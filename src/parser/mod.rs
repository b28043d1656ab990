//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module turns the indentation-nested token tree into blocks and
//! values. It handles:
//!
//! - Symbol splitting and keyword dispatch to the eight block constructors
//! - Optional `[name, ...]` declaration lists on every block
//! - Value building: literals, inline blocks and the eight constructs,
//!   tried in a fixed priority order
//! - Bracket-balance aware splitting, searching and parenthesis re-nesting
//! - Infix to postfix conversion of operator expressions (shunting-yard)

pub mod blocks;
pub mod brackets;
pub mod constructs;
pub mod expr;
pub mod lookups;
pub mod parser;
pub mod values;
