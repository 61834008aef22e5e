//! Re-serializes the AST to source text.
//!
//! The output emits the same token sequence the tree was parsed from
//! (parentheses live on as `GroupingExpr`), so printing and re-parsing
//! yields an identical tree. Layout is canonical: four-space indentation,
//! one statement per line.

use std::fmt::{Display, Formatter, Result};

use super::{
    ast::{Item, Program},
    expressions::{BinaryOperator, CallExpr, Expr},
    statements::{
        AssignmentOperator, AssignmentStmt, BlockStmt, FnDeclStmt, ForStep, IncDecOperator,
        IncDecStmt, Stmt, VarDeclStmt,
    },
};

const INDENT: &str = "    ";

/// Encodes a decoded string literal back into its quoted source form.
pub fn escape_string(value: &str) -> String {
    let mut result = String::from("\"");
    for ch in value.chars() {
        match ch {
            '\n' => result.push_str("\\n"),
            '\t' => result.push_str("\\t"),
            '\r' => result.push_str("\\r"),
            '\\' => result.push_str("\\\\"),
            '"' => result.push_str("\\\""),
            '\0' => result.push_str("\\0"),
            c if (c as u32) < 0x20 || c as u32 == 0x7f => {
                result.push_str(&format!("\\x{:02x}", c as u32))
            }
            c => result.push(c),
        }
    }
    result.push('"');
    result
}

/// Compact prefix form, e.g. `(* (+ a b) c)`. Handy for checking shape.
pub fn sexpr(expr: &Expr) -> String {
    match expr {
        Expr::Symbol(symbol) => symbol.value.clone(),
        Expr::Number(number) => number.value.clone(),
        Expr::String(string) => escape_string(&string.value),
        Expr::Not(not) => format!("(! {})", sexpr(&not.operand)),
        Expr::Grouping(grouping) => format!("(group {})", sexpr(&grouping.inner)),
        Expr::Assignment(assignment) => {
            format!("(= {} {})", assignment.target, sexpr(&assignment.value))
        }
        Expr::Binary(binary) => format!(
            "({} {} {})",
            binary.operator.symbol(),
            sexpr(&binary.left),
            sexpr(&binary.right)
        ),
        Expr::Call(call) => {
            let mut out = format!("(call {}", call.callee);
            for argument in &call.arguments {
                out.push(' ');
                out.push_str(&sexpr(argument));
            }
            out.push(')');
            out
        }
    }
}

impl Display for BinaryOperator {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{}", self.symbol())
    }
}

impl Display for AssignmentOperator {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{}", self.symbol())
    }
}

impl Display for IncDecOperator {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{}", self.symbol())
    }
}

impl Display for Expr {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Expr::Symbol(symbol) => write!(f, "{}", symbol.value),
            Expr::Number(number) => write!(f, "{}", number.value),
            Expr::String(string) => write!(f, "{}", escape_string(&string.value)),
            Expr::Not(not) => write!(f, "!{}", not.operand),
            Expr::Grouping(grouping) => write!(f, "({})", grouping.inner),
            Expr::Assignment(assignment) => {
                write!(f, "{} = {}", assignment.target, assignment.value)
            }
            Expr::Binary(binary) => {
                write!(f, "{} {} {}", binary.left, binary.operator, binary.right)
            }
            Expr::Call(call) => write_call(f, call),
        }
    }
}

fn write_call(f: &mut Formatter<'_>, call: &CallExpr) -> Result {
    write!(f, "{}(", call.callee)?;
    for (i, argument) in call.arguments.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{}", argument)?;
    }
    write!(f, ")")
}

fn write_var_decl(f: &mut Formatter<'_>, decl: &VarDeclStmt) -> Result {
    match &decl.assigned_value {
        Some(value) => write!(f, "{} {} = {};", decl.var_type, decl.identifier, value),
        None => write!(f, "{} {};", decl.var_type, decl.identifier),
    }
}

// Header forms omit the trailing semicolon.
fn write_assignment(f: &mut Formatter<'_>, stmt: &AssignmentStmt) -> Result {
    write!(f, "{} {} {}", stmt.identifier, stmt.operator, stmt.value)
}

fn write_inc_dec(f: &mut Formatter<'_>, stmt: &IncDecStmt) -> Result {
    if stmt.is_prefix {
        write!(f, "{}{}", stmt.operator, stmt.identifier)
    } else {
        write!(f, "{}{}", stmt.identifier, stmt.operator)
    }
}

fn write_block(f: &mut Formatter<'_>, block: &BlockStmt, depth: usize) -> Result {
    if block.is_empty() {
        return write!(f, "{{}}");
    }

    writeln!(f, "{{")?;
    for stmt in block.iter() {
        write!(f, "{}", INDENT.repeat(depth + 1))?;
        write_stmt(f, stmt, depth + 1)?;
        writeln!(f)?;
    }
    write!(f, "{}}}", INDENT.repeat(depth))
}

fn write_stmt(f: &mut Formatter<'_>, stmt: &Stmt, depth: usize) -> Result {
    match stmt {
        Stmt::VarDecl(decl) => write_var_decl(f, decl),
        Stmt::Assignment(assignment) => {
            write_assignment(f, assignment)?;
            write!(f, ";")
        }
        Stmt::IncDec(inc_dec) => {
            write_inc_dec(f, inc_dec)?;
            write!(f, ";")
        }
        Stmt::If(if_stmt) => {
            write!(f, "if ({}) ", if_stmt.condition)?;
            write_block(f, &if_stmt.then_body, depth)?;
            if let Some(else_body) = &if_stmt.else_body {
                write!(f, " else ")?;
                write_block(f, else_body, depth)?;
            }
            Ok(())
        }
        Stmt::For(for_stmt) => {
            write!(f, "for (")?;
            write_var_decl(f, &for_stmt.init)?;
            write!(f, " {}; ", for_stmt.condition)?;
            match &for_stmt.step {
                ForStep::Assignment(assignment) => write_assignment(f, assignment)?,
                ForStep::IncDec(inc_dec) => write_inc_dec(f, inc_dec)?,
            }
            write!(f, ") ")?;
            write_block(f, &for_stmt.body, depth)
        }
        Stmt::While(while_stmt) => {
            write!(f, "while ({}) ", while_stmt.condition)?;
            write_block(f, &while_stmt.body, depth)
        }
        Stmt::Return(return_stmt) => match &return_stmt.value {
            Some(value) => write!(f, "return {};", value),
            None => write!(f, "return;"),
        },
        Stmt::Expression(expression_stmt) => {
            write_call(f, &expression_stmt.call)?;
            write!(f, ";")
        }
    }
}

fn write_function(f: &mut Formatter<'_>, function: &FnDeclStmt) -> Result {
    write!(f, "{} {}(", function.return_type, function.identifier)?;
    for (i, parameter) in function.parameters.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{} {}", parameter.param_type, parameter.name)?;
    }
    write!(f, ") ")?;
    write_block(f, &function.body, 0)
}

impl Display for Stmt {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write_stmt(f, self, 0)
    }
}

impl Display for FnDeclStmt {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write_function(f, self)
    }
}

impl Display for Item {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Item::Global(decl) => write_var_decl(f, decl),
            Item::Function(function) => write_function(f, function),
            Item::Statement(stmt) => write_stmt(f, stmt, 0),
        }
    }
}

impl Display for Program {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        for item in self.iter() {
            writeln!(f, "{}", item)?;
        }
        Ok(())
    }
}
