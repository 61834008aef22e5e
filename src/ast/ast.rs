use std::slice::Iter;

use crate::Span;

use super::statements::{FnDeclStmt, Stmt, VarDeclStmt};

/// Statement Types
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum StmtType {
    VarDeclStmt,
    AssignmentStmt,
    IncDecStmt,
    IfStmt,
    ForStmt,
    WhileStmt,
    ReturnStmt,
    ExpressionStmt,
}

/// Expression Types
///
/// Defines the various kinds of expressions in the AST.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum ExprType {
    Number,
    String,
    Symbol,
    Not,
    Grouping,
    Assignment,
    Binary,
    CallExpr,
}

/// A top-level entry of a program.
#[derive(Debug, Clone, PartialEq)]
pub enum Item {
    /// Declaration from the leading run of global variables.
    Global(VarDeclStmt),
    Function(FnDeclStmt),
    Statement(Stmt),
}

/// The root of the tree. Owns every node produced by a parse.
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    pub items: Vec<Item>,
    pub span: Span,
}

impl Program {
    pub fn iter(&self) -> Iter<'_, Item> {
        self.items.iter()
    }

    pub fn globals(&self) -> impl Iterator<Item = &VarDeclStmt> {
        self.items.iter().filter_map(|item| match item {
            Item::Global(decl) => Some(decl),
            _ => None,
        })
    }

    pub fn functions(&self) -> impl Iterator<Item = &FnDeclStmt> {
        self.items.iter().filter_map(|item| match item {
            Item::Function(function) => Some(function),
            _ => None,
        })
    }

    pub fn statements(&self) -> impl Iterator<Item = &Stmt> {
        self.items.iter().filter_map(|item| match item {
            Item::Statement(stmt) => Some(stmt),
            _ => None,
        })
    }
}
