use std::slice::Iter;

use crate::{lexer::tokens::TokenKind, Span};

use super::{
    ast::StmtType,
    expressions::{CallExpr, Expr},
    types::Type,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssignmentOperator {
    Assign,
    AddAssign,
    SubAssign,
    MulAssign,
    DivAssign,
    ModAssign,
}

impl AssignmentOperator {
    pub fn from_token_kind(kind: TokenKind) -> Option<AssignmentOperator> {
        match kind {
            TokenKind::Assignment => Some(AssignmentOperator::Assign),
            TokenKind::PlusEquals => Some(AssignmentOperator::AddAssign),
            TokenKind::MinusEquals => Some(AssignmentOperator::SubAssign),
            TokenKind::StarEquals => Some(AssignmentOperator::MulAssign),
            TokenKind::SlashEquals => Some(AssignmentOperator::DivAssign),
            TokenKind::PercentEquals => Some(AssignmentOperator::ModAssign),
            _ => None,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            AssignmentOperator::Assign => "=",
            AssignmentOperator::AddAssign => "+=",
            AssignmentOperator::SubAssign => "-=",
            AssignmentOperator::MulAssign => "*=",
            AssignmentOperator::DivAssign => "/=",
            AssignmentOperator::ModAssign => "%=",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IncDecOperator {
    Increment,
    Decrement,
}

impl IncDecOperator {
    pub fn from_token_kind(kind: TokenKind) -> Option<IncDecOperator> {
        match kind {
            TokenKind::PlusPlus => Some(IncDecOperator::Increment),
            TokenKind::MinusMinus => Some(IncDecOperator::Decrement),
            _ => None,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            IncDecOperator::Increment => "++",
            IncDecOperator::Decrement => "--",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BlockStmt {
    pub body: Vec<Stmt>,
    pub span: Span,
}

impl BlockStmt {
    pub fn iter(&self) -> Iter<'_, Stmt> {
        self.body.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

/// `type name [= value];`
#[derive(Debug, Clone, PartialEq)]
pub struct VarDeclStmt {
    pub var_type: Type,
    pub identifier: String,
    pub assigned_value: Option<Expr>,
    pub span: Span,
}

/// `name op value;` where op is `=` or a compound assignment.
#[derive(Debug, Clone, PartialEq)]
pub struct AssignmentStmt {
    pub identifier: String,
    pub operator: AssignmentOperator,
    pub value: Expr,
    pub span: Span,
}

/// `name++`, `name--`, `++name` or `--name`.
#[derive(Debug, Clone, PartialEq)]
pub struct IncDecStmt {
    pub identifier: String,
    pub operator: IncDecOperator,
    pub is_prefix: bool,
    pub span: Span,
}

/// There is no else-if form: a chain nests an IfStmt inside the else block.
#[derive(Debug, Clone, PartialEq)]
pub struct IfStmt {
    pub condition: Expr,
    pub then_body: BlockStmt,
    pub else_body: Option<BlockStmt>,
    pub span: Span,
}

/// Third clause of a for header.
#[derive(Debug, Clone, PartialEq)]
pub enum ForStep {
    Assignment(AssignmentStmt),
    IncDec(IncDecStmt),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ForStmt {
    pub init: VarDeclStmt,
    pub condition: Expr,
    pub step: ForStep,
    pub body: BlockStmt,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WhileStmt {
    pub condition: Expr,
    pub body: BlockStmt,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReturnStmt {
    pub value: Option<Expr>,
    pub span: Span,
}

/// A bare function call used as a statement.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpressionStmt {
    pub call: CallExpr,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Parameter {
    pub param_type: Type,
    pub name: String,
    pub span: Span,
}

/// Parameter names are not checked for duplicates here.
#[derive(Debug, Clone, PartialEq)]
pub struct FnDeclStmt {
    pub return_type: Type,
    pub identifier: String,
    pub parameters: Vec<Parameter>,
    pub body: BlockStmt,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    VarDecl(VarDeclStmt),
    Assignment(AssignmentStmt),
    IncDec(IncDecStmt),
    If(IfStmt),
    For(ForStmt),
    While(WhileStmt),
    Return(ReturnStmt),
    Expression(ExpressionStmt),
}

impl Stmt {
    pub fn get_stmt_type(&self) -> StmtType {
        match self {
            Stmt::VarDecl(_) => StmtType::VarDeclStmt,
            Stmt::Assignment(_) => StmtType::AssignmentStmt,
            Stmt::IncDec(_) => StmtType::IncDecStmt,
            Stmt::If(_) => StmtType::IfStmt,
            Stmt::For(_) => StmtType::ForStmt,
            Stmt::While(_) => StmtType::WhileStmt,
            Stmt::Return(_) => StmtType::ReturnStmt,
            Stmt::Expression(_) => StmtType::ExpressionStmt,
        }
    }

    pub fn get_span(&self) -> &Span {
        match self {
            Stmt::VarDecl(stmt) => &stmt.span,
            Stmt::Assignment(stmt) => &stmt.span,
            Stmt::IncDec(stmt) => &stmt.span,
            Stmt::If(stmt) => &stmt.span,
            Stmt::For(stmt) => &stmt.span,
            Stmt::While(stmt) => &stmt.span,
            Stmt::Return(stmt) => &stmt.span,
            Stmt::Expression(stmt) => &stmt.span,
        }
    }
}
