//! Traversal over a parsed program.
//!
//! Downstream consumers (analyzers, interpreters, printers) implement
//! [`Visitor`] and hand it to [`walk_program`]. Every node is announced
//! twice: `enter` before its children (pre-order) and `exit` after them
//! (post-order). Children are visited left to right in the order they
//! appear in the source: a `for` visits its initializer, condition, step
//! and body; an `if` its condition, then-block and else-block.

use super::{
    ast::{Item, Program},
    expressions::{
        AssignmentExpr, BinaryExpr, CallExpr, Expr, GroupingExpr, NotExpr, NumberExpr,
        StringExpr, SymbolExpr,
    },
    statements::{
        AssignmentStmt, BlockStmt, ExpressionStmt, FnDeclStmt, ForStep, ForStmt, IfStmt,
        IncDecStmt, Parameter, ReturnStmt, Stmt, VarDeclStmt, WhileStmt,
    },
};

/// A borrowed view of one node, one case per node kind.
#[derive(Debug, Clone, Copy)]
pub enum Node<'a> {
    Program(&'a Program),
    Function(&'a FnDeclStmt),
    Parameter(&'a Parameter),
    Block(&'a BlockStmt),
    VarDecl(&'a VarDeclStmt),
    Assignment(&'a AssignmentStmt),
    IncDec(&'a IncDecStmt),
    If(&'a IfStmt),
    For(&'a ForStmt),
    While(&'a WhileStmt),
    Return(&'a ReturnStmt),
    ExpressionStmt(&'a ExpressionStmt),
    Symbol(&'a SymbolExpr),
    Number(&'a NumberExpr),
    String(&'a StringExpr),
    Not(&'a NotExpr),
    Grouping(&'a GroupingExpr),
    AssignmentExpr(&'a AssignmentExpr),
    Binary(&'a BinaryExpr),
    Call(&'a CallExpr),
}

impl Node<'_> {
    /// Node kind plus its own content (names, operators, literal text),
    /// never its children or its span.
    pub fn describe(&self) -> String {
        match self {
            Node::Program(_) => String::from("Program"),
            Node::Function(function) => {
                format!("Function {} {}", function.return_type, function.identifier)
            }
            Node::Parameter(parameter) => {
                format!("Parameter {} {}", parameter.param_type, parameter.name)
            }
            Node::Block(_) => String::from("Block"),
            Node::VarDecl(decl) => format!("VarDecl {} {}", decl.var_type, decl.identifier),
            Node::Assignment(stmt) => {
                format!("Assignment {} {}", stmt.identifier, stmt.operator.symbol())
            }
            Node::IncDec(stmt) => format!(
                "IncDec {} {} {}",
                stmt.identifier,
                stmt.operator.symbol(),
                if stmt.is_prefix { "prefix" } else { "postfix" }
            ),
            Node::If(_) => String::from("If"),
            Node::For(_) => String::from("For"),
            Node::While(_) => String::from("While"),
            Node::Return(_) => String::from("Return"),
            Node::ExpressionStmt(_) => String::from("ExpressionStmt"),
            Node::Symbol(expr) => format!("Symbol {}", expr.value),
            Node::Number(expr) => format!("Number {}", expr.value),
            Node::String(expr) => format!("String {:?}", expr.value),
            Node::Not(_) => String::from("Not"),
            Node::Grouping(_) => String::from("Grouping"),
            Node::AssignmentExpr(expr) => format!("AssignmentExpr {}", expr.target),
            Node::Binary(expr) => format!("Binary {}", expr.operator.symbol()),
            Node::Call(expr) => format!("Call {}", expr.callee),
        }
    }
}

pub trait Visitor {
    fn enter(&mut self, _node: Node<'_>) {}
    fn exit(&mut self, _node: Node<'_>) {}
}

pub fn walk_program<V: Visitor + ?Sized>(program: &Program, visitor: &mut V) {
    visitor.enter(Node::Program(program));
    for item in program.iter() {
        match item {
            Item::Global(decl) => walk_var_decl(decl, visitor),
            Item::Function(function) => walk_function(function, visitor),
            Item::Statement(stmt) => walk_stmt(stmt, visitor),
        }
    }
    visitor.exit(Node::Program(program));
}

pub fn walk_function<V: Visitor + ?Sized>(function: &FnDeclStmt, visitor: &mut V) {
    visitor.enter(Node::Function(function));
    for parameter in &function.parameters {
        visitor.enter(Node::Parameter(parameter));
        visitor.exit(Node::Parameter(parameter));
    }
    walk_block(&function.body, visitor);
    visitor.exit(Node::Function(function));
}

pub fn walk_block<V: Visitor + ?Sized>(block: &BlockStmt, visitor: &mut V) {
    visitor.enter(Node::Block(block));
    for stmt in block.iter() {
        walk_stmt(stmt, visitor);
    }
    visitor.exit(Node::Block(block));
}

fn walk_var_decl<V: Visitor + ?Sized>(decl: &VarDeclStmt, visitor: &mut V) {
    visitor.enter(Node::VarDecl(decl));
    if let Some(value) = &decl.assigned_value {
        walk_expr(value, visitor);
    }
    visitor.exit(Node::VarDecl(decl));
}

fn walk_assignment<V: Visitor + ?Sized>(stmt: &AssignmentStmt, visitor: &mut V) {
    visitor.enter(Node::Assignment(stmt));
    walk_expr(&stmt.value, visitor);
    visitor.exit(Node::Assignment(stmt));
}

fn walk_inc_dec<V: Visitor + ?Sized>(stmt: &IncDecStmt, visitor: &mut V) {
    visitor.enter(Node::IncDec(stmt));
    visitor.exit(Node::IncDec(stmt));
}

pub fn walk_stmt<V: Visitor + ?Sized>(stmt: &Stmt, visitor: &mut V) {
    match stmt {
        Stmt::VarDecl(decl) => walk_var_decl(decl, visitor),
        Stmt::Assignment(assignment) => walk_assignment(assignment, visitor),
        Stmt::IncDec(inc_dec) => walk_inc_dec(inc_dec, visitor),
        Stmt::If(if_stmt) => {
            visitor.enter(Node::If(if_stmt));
            walk_expr(&if_stmt.condition, visitor);
            walk_block(&if_stmt.then_body, visitor);
            if let Some(else_body) = &if_stmt.else_body {
                walk_block(else_body, visitor);
            }
            visitor.exit(Node::If(if_stmt));
        }
        Stmt::For(for_stmt) => {
            visitor.enter(Node::For(for_stmt));
            walk_var_decl(&for_stmt.init, visitor);
            walk_expr(&for_stmt.condition, visitor);
            match &for_stmt.step {
                ForStep::Assignment(assignment) => walk_assignment(assignment, visitor),
                ForStep::IncDec(inc_dec) => walk_inc_dec(inc_dec, visitor),
            }
            walk_block(&for_stmt.body, visitor);
            visitor.exit(Node::For(for_stmt));
        }
        Stmt::While(while_stmt) => {
            visitor.enter(Node::While(while_stmt));
            walk_expr(&while_stmt.condition, visitor);
            walk_block(&while_stmt.body, visitor);
            visitor.exit(Node::While(while_stmt));
        }
        Stmt::Return(return_stmt) => {
            visitor.enter(Node::Return(return_stmt));
            if let Some(value) = &return_stmt.value {
                walk_expr(value, visitor);
            }
            visitor.exit(Node::Return(return_stmt));
        }
        Stmt::Expression(expression_stmt) => {
            visitor.enter(Node::ExpressionStmt(expression_stmt));
            walk_call(&expression_stmt.call, visitor);
            visitor.exit(Node::ExpressionStmt(expression_stmt));
        }
    }
}

fn walk_call<V: Visitor + ?Sized>(call: &CallExpr, visitor: &mut V) {
    visitor.enter(Node::Call(call));
    for argument in &call.arguments {
        walk_expr(argument, visitor);
    }
    visitor.exit(Node::Call(call));
}

pub fn walk_expr<V: Visitor + ?Sized>(expr: &Expr, visitor: &mut V) {
    match expr {
        Expr::Symbol(symbol) => {
            visitor.enter(Node::Symbol(symbol));
            visitor.exit(Node::Symbol(symbol));
        }
        Expr::Number(number) => {
            visitor.enter(Node::Number(number));
            visitor.exit(Node::Number(number));
        }
        Expr::String(string) => {
            visitor.enter(Node::String(string));
            visitor.exit(Node::String(string));
        }
        Expr::Not(not) => {
            visitor.enter(Node::Not(not));
            walk_expr(&not.operand, visitor);
            visitor.exit(Node::Not(not));
        }
        Expr::Grouping(grouping) => {
            visitor.enter(Node::Grouping(grouping));
            walk_expr(&grouping.inner, visitor);
            visitor.exit(Node::Grouping(grouping));
        }
        Expr::Assignment(assignment) => {
            visitor.enter(Node::AssignmentExpr(assignment));
            walk_expr(&assignment.value, visitor);
            visitor.exit(Node::AssignmentExpr(assignment));
        }
        Expr::Binary(binary) => {
            visitor.enter(Node::Binary(binary));
            walk_expr(&binary.left, visitor);
            walk_expr(&binary.right, visitor);
            visitor.exit(Node::Binary(binary));
        }
        Expr::Call(call) => walk_call(call, visitor),
    }
}

struct StructureRecorder {
    events: Vec<String>,
}

impl Visitor for StructureRecorder {
    fn enter(&mut self, node: Node<'_>) {
        self.events.push(format!("enter {}", node.describe()));
    }

    fn exit(&mut self, node: Node<'_>) {
        self.events.push(format!("exit {}", node.describe()));
    }
}

/// The full enter/exit event sequence of a program. Two programs have the
/// same tree shape and content, ignoring spans, exactly when these match.
pub fn structure(program: &Program) -> Vec<String> {
    let mut recorder = StructureRecorder { events: vec![] };
    walk_program(program, &mut recorder);
    recorder.events
}
