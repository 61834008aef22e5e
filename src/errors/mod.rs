//! Error types and error handling for the front end.
//!
//! This module defines the error types raised while turning source text
//! into an AST. It includes:
//!
//! - Error structures with source position information
//! - Lexical and syntax error variants
//! - The set of token kinds expected at a failure point
//! - Helpful error messages and suggestions

pub mod errors;

#[cfg(test)]
mod tests;
