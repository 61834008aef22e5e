use std::collections::HashMap;

use crate::{
    ast::{expressions::Expr, statements::Stmt},
    errors::errors::Error,
    lexer::tokens::TokenKind,
};

use super::{expr::*, parser::Parser, stmt::*};

/// Precedence-climbing weight. An infix operator keeps extending the left
/// operand while its power is strictly greater than the current minimum.
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Debug, Hash)]
pub struct BindingPower(pub u8);

impl BindingPower {
    pub const DEFAULT: BindingPower = BindingPower(0);

    /// Minimum for the operand of `!`: `&&` and `||` end it, every tighter
    /// operator stays inside.
    pub const NOT_OPERAND: BindingPower = BindingPower(9);

    pub fn next(self) -> BindingPower {
        BindingPower(self.0.saturating_add(1))
    }
}

/// Infix operators and their binding powers. Additive operators bind
/// tighter than multiplicative ones, so `a + b * c` is `(a + b) * c`.
/// Changing a value changes the meaning of existing programs.
pub const BINARY_OPERATORS: [(TokenKind, BindingPower); 13] = [
    (TokenKind::Plus, BindingPower(20)),
    (TokenKind::Dash, BindingPower(19)),
    (TokenKind::Star, BindingPower(18)),
    (TokenKind::Slash, BindingPower(17)),
    (TokenKind::Percent, BindingPower(16)),
    (TokenKind::Less, BindingPower(15)),
    (TokenKind::Greater, BindingPower(14)),
    (TokenKind::LessEquals, BindingPower(13)),
    (TokenKind::GreaterEquals, BindingPower(12)),
    (TokenKind::Equals, BindingPower(11)),
    (TokenKind::NotEquals, BindingPower(10)),
    (TokenKind::And, BindingPower(9)),
    (TokenKind::Or, BindingPower(8)),
];

pub type StmtHandler = fn(&mut Parser) -> Result<Stmt, Error>;
pub type NUDHandler = fn(&mut Parser) -> Result<Expr, Error>;
pub type LEDHandler = fn(&mut Parser, Expr, BindingPower) -> Result<Expr, Error>;

pub fn create_token_lookups(parser: &mut Parser) {
    // Binary operators
    for (kind, binding_power) in BINARY_OPERATORS {
        parser.led(kind, binding_power, parse_binary_expr);
    }

    // Prefix forms
    parser.nud(TokenKind::Not, parse_not_expr);
    parser.nud(TokenKind::OpenParen, parse_grouping_expr);
    parser.nud(TokenKind::Identifier, parse_identifier_expr);
    parser.nud(TokenKind::Number, parse_primary_expr);
    parser.nud(TokenKind::String, parse_primary_expr);

    // Statements
    parser.stmt(TokenKind::Int, parse_var_decl_stmt);
    parser.stmt(TokenKind::Float, parse_var_decl_stmt);
    parser.stmt(TokenKind::Double, parse_var_decl_stmt);
    parser.stmt(TokenKind::StringType, parse_var_decl_stmt);
    parser.stmt(TokenKind::Void, parse_var_decl_stmt);
    parser.stmt(TokenKind::Identifier, parse_identifier_stmt);
    parser.stmt(TokenKind::PlusPlus, parse_prefix_inc_dec_stmt);
    parser.stmt(TokenKind::MinusMinus, parse_prefix_inc_dec_stmt);
    parser.stmt(TokenKind::If, parse_if_stmt);
    parser.stmt(TokenKind::For, parse_for_stmt);
    parser.stmt(TokenKind::While, parse_while_stmt);
    parser.stmt(TokenKind::Return, parse_return_stmt);
}

// Lookup tables inside parser struct, so it's easier
pub type StmtLookup = HashMap<TokenKind, StmtHandler>;
pub type NUDLookup = HashMap<TokenKind, NUDHandler>;
pub type LEDLookup = HashMap<TokenKind, LEDHandler>;
pub type BPLookup = HashMap<TokenKind, BindingPower>;
