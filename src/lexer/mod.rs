//! Lexical analysis module.
//!
//! This module contains the lexer (tokenizer) that converts source code
//! into the token stream the parser consumes. It handles:
//!
//! - Tokenization of source code using regex patterns
//! - Recognition of type keywords, control keywords, identifiers, literals and operators
//! - Line and column tracking for error reporting
//! - Comments and whitespace handling

pub mod lexer;
pub mod tokens;

#[cfg(test)]
mod tests;
