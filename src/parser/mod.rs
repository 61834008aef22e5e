//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module contains the parser that transforms a stream of tokens
//! into an Abstract Syntax Tree. It uses precedence climbing for
//! expressions and handles:
//!
//! - Program structure (leading globals, then functions and statements)
//! - Statement parsing (declarations, assignments, control flow)
//! - Expression parsing (binary ops, negation, calls, literals)
//! - Type keywords and parameter lists
//!
//! The parser uses NUD (null denotation) and LED (left denotation) functions
//! for expression parsing with binding power for precedence handling. The
//! first error aborts the parse; there is no recovery.

pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;
pub mod types;
