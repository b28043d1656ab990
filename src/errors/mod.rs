//! Error types and error handling for the compiler.
//!
//! This module defines the error types used throughout the front-end. It
//! includes:
//!
//! - Error structures with source position information
//! - Specific error variants for every fatal condition of the pipeline
//! - Error naming and suggestions used by the diagnostic renderer

pub mod errors;

#[cfg(test)]
mod tests;
