use crate::{lexer::tokens::TokenKind, Span};

use super::ast::ExprType;

/// Binary operators, in the order of the binding power table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    Less,
    Greater,
    LessEquals,
    GreaterEquals,
    Equals,
    NotEquals,
    And,
    Or,
}

impl BinaryOperator {
    pub fn from_token_kind(kind: TokenKind) -> Option<BinaryOperator> {
        match kind {
            TokenKind::Plus => Some(BinaryOperator::Add),
            TokenKind::Dash => Some(BinaryOperator::Sub),
            TokenKind::Star => Some(BinaryOperator::Mul),
            TokenKind::Slash => Some(BinaryOperator::Div),
            TokenKind::Percent => Some(BinaryOperator::Mod),
            TokenKind::Less => Some(BinaryOperator::Less),
            TokenKind::Greater => Some(BinaryOperator::Greater),
            TokenKind::LessEquals => Some(BinaryOperator::LessEquals),
            TokenKind::GreaterEquals => Some(BinaryOperator::GreaterEquals),
            TokenKind::Equals => Some(BinaryOperator::Equals),
            TokenKind::NotEquals => Some(BinaryOperator::NotEquals),
            TokenKind::And => Some(BinaryOperator::And),
            TokenKind::Or => Some(BinaryOperator::Or),
            _ => None,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            BinaryOperator::Add => "+",
            BinaryOperator::Sub => "-",
            BinaryOperator::Mul => "*",
            BinaryOperator::Div => "/",
            BinaryOperator::Mod => "%",
            BinaryOperator::Less => "<",
            BinaryOperator::Greater => ">",
            BinaryOperator::LessEquals => "<=",
            BinaryOperator::GreaterEquals => ">=",
            BinaryOperator::Equals => "==",
            BinaryOperator::NotEquals => "!=",
            BinaryOperator::And => "&&",
            BinaryOperator::Or => "||",
        }
    }
}

// LITERALS

/// Number Expression
/// The literal text is kept as written; conversion belongs to later phases.
#[derive(Debug, Clone, PartialEq)]
pub struct NumberExpr {
    pub value: String,
    pub span: Span,
}

/// String Expression
/// Holds the decoded contents, without the surrounding quotes.
#[derive(Debug, Clone, PartialEq)]
pub struct StringExpr {
    pub value: String,
    pub span: Span,
}

/// Symbol Expression
/// A bare identifier. No binding is resolved at parse time.
#[derive(Debug, Clone, PartialEq)]
pub struct SymbolExpr {
    pub value: String,
    pub span: Span,
}

// COMPOUND

/// Logical negation, `!operand`.
#[derive(Debug, Clone, PartialEq)]
pub struct NotExpr {
    pub operand: Box<Expr>,
    pub span: Span,
}

/// A parenthesized expression. Kept as its own node so the tree prints
/// back to the source it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupingExpr {
    pub inner: Box<Expr>,
    pub span: Span,
}

/// `target = value` used as an expression. Right-associative.
#[derive(Debug, Clone, PartialEq)]
pub struct AssignmentExpr {
    pub target: String,
    pub value: Box<Expr>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BinaryExpr {
    pub operator: BinaryOperator,
    pub left: Box<Expr>,
    pub right: Box<Expr>,
    pub span: Span,
}

/// A call by name; arguments keep their call order.
#[derive(Debug, Clone, PartialEq)]
pub struct CallExpr {
    pub callee: String,
    pub arguments: Vec<Expr>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Symbol(SymbolExpr),
    Number(NumberExpr),
    String(StringExpr),
    Not(NotExpr),
    Grouping(GroupingExpr),
    Assignment(AssignmentExpr),
    Binary(BinaryExpr),
    Call(CallExpr),
}

impl Expr {
    pub fn get_expr_type(&self) -> ExprType {
        match self {
            Expr::Symbol(_) => ExprType::Symbol,
            Expr::Number(_) => ExprType::Number,
            Expr::String(_) => ExprType::String,
            Expr::Not(_) => ExprType::Not,
            Expr::Grouping(_) => ExprType::Grouping,
            Expr::Assignment(_) => ExprType::Assignment,
            Expr::Binary(_) => ExprType::Binary,
            Expr::Call(_) => ExprType::CallExpr,
        }
    }

    pub fn get_span(&self) -> &Span {
        match self {
            Expr::Symbol(expr) => &expr.span,
            Expr::Number(expr) => &expr.span,
            Expr::String(expr) => &expr.span,
            Expr::Not(expr) => &expr.span,
            Expr::Grouping(expr) => &expr.span,
            Expr::Assignment(expr) => &expr.span,
            Expr::Binary(expr) => &expr.span,
            Expr::Call(expr) => &expr.span,
        }
    }
}
