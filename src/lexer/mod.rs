//! Lexical analysis module for the compiler.
//!
//! This module contains the lexer (tokenizer) that converts source code
//! into a stream of tokens for the indentation stage. It handles:
//!
//! - The declarative token grammar (literal sets, regexes and predicates)
//! - The operator precedence table
//! - Two interchangeable tokenization strategies (fast and classic)
//! - Lazily derived token origins for error reporting
//! - Comment removal

pub mod grammar;
pub mod lexer;
pub mod tokens;
