//! Indentation handling for the compiler.
//!
//! Turns the flat token stream into the nested token tree the parser
//! consumes:
//!
//! - Leading whitespace is normalized to whole indent units
//! - The stream is split into logical lines
//! - Lines are grouped recursively so nesting depth follows indentation

pub mod nested;
pub mod nesting;

#[cfg(test)]
mod tests;
