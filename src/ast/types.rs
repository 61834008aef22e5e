//! Type annotations in the AST.
//!
//! The language has a closed set of five primitive types. A type is always
//! written as a single keyword token, so there is nothing to resolve here:
//! the parser maps the keyword straight onto [`Type`].

use std::fmt::Display;

use crate::lexer::tokens::TokenKind;

/// The primitive types a declaration, parameter or function may name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Type {
    Int,
    Float,
    Double,
    String,
    Void,
}

impl Type {
    pub const KEYWORDS: [TokenKind; 5] = [
        TokenKind::Int,
        TokenKind::Float,
        TokenKind::Double,
        TokenKind::StringType,
        TokenKind::Void,
    ];

    pub fn from_token_kind(kind: TokenKind) -> Option<Type> {
        match kind {
            TokenKind::Int => Some(Type::Int),
            TokenKind::Float => Some(Type::Float),
            TokenKind::Double => Some(Type::Double),
            TokenKind::StringType => Some(Type::String),
            TokenKind::Void => Some(Type::Void),
            _ => None,
        }
    }

    pub fn keyword(&self) -> &'static str {
        match self {
            Type::Int => "int",
            Type::Float => "float",
            Type::Double => "double",
            Type::String => "string",
            Type::Void => "void",
        }
    }
}

impl Display for Type {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.keyword())
    }
}
