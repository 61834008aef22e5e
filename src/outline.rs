//! Program outline: a summary of globals, functions and control flow.
//!
//! Built by walking the tree with a [`Visitor`], so it doubles as the
//! reference consumer of the traversal contract. No checking happens here:
//! a duplicate name or a call to an unknown function is reported as is.

use std::fmt::Display;

use tracing::debug;

use crate::{
    ast::{
        ast::Program,
        statements::{FnDeclStmt, VarDeclStmt},
        types::Type,
        visitor::{walk_program, Node, Visitor},
    },
    Position,
};

#[derive(Debug, Clone, PartialEq)]
pub struct VariableEntry {
    pub var_type: Type,
    pub name: String,
    pub has_initializer: bool,
}

impl VariableEntry {
    fn from_decl(decl: &VarDeclStmt) -> Self {
        VariableEntry {
            var_type: decl.var_type,
            name: decl.identifier.clone(),
            has_initializer: decl.assigned_value.is_some(),
        }
    }
}

impl Display for VariableEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.var_type, self.name)?;
        if self.has_initializer {
            write!(f, " = ...")?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlKind {
    If,
    Else,
    For,
    While,
}

impl ControlKind {
    pub fn keyword(&self) -> &'static str {
        match self {
            ControlKind::If => "if",
            ControlKind::Else => "else",
            ControlKind::For => "for",
            ControlKind::While => "while",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ControlStructure {
    pub kind: ControlKind,
    /// Printed condition; `else` has none.
    pub condition: Option<String>,
    pub line: u32,
}

impl Display for ControlStructure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.condition {
            Some(condition) => write!(
                f,
                "{} ({}) line {}",
                self.kind.keyword(),
                condition,
                self.line
            ),
            None => write!(f, "{} line {}", self.kind.keyword(), self.line),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FunctionOutline {
    pub name: String,
    pub return_type: Type,
    pub parameters: Vec<VariableEntry>,
    /// Declarations anywhere in the body, for-loop initializers included.
    pub locals: Vec<VariableEntry>,
    /// In source order.
    pub control_structures: Vec<ControlStructure>,
    /// The body calls the function by its own name.
    pub is_recursive: bool,
}

impl FunctionOutline {
    fn new(function: &FnDeclStmt) -> Self {
        FunctionOutline {
            name: function.identifier.clone(),
            return_type: function.return_type,
            parameters: vec![],
            locals: vec![],
            control_structures: vec![],
            is_recursive: false,
        }
    }
}

fn join<T: Display>(entries: &[T]) -> String {
    if entries.is_empty() {
        return String::from("-");
    }
    entries
        .iter()
        .map(|entry| entry.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

impl Display for FunctionOutline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "function {} ({})",
            self.name,
            if self.is_recursive {
                "recursive"
            } else {
                "iterative"
            }
        )?;
        writeln!(f, "  returns: {}", self.return_type)?;
        writeln!(f, "  parameters: {}", join(&self.parameters))?;
        writeln!(f, "  locals: {}", join(&self.locals))?;
        write!(f, "  control structures: {}", join(&self.control_structures))
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProgramOutline {
    /// Declarations made outside any function.
    pub globals: Vec<VariableEntry>,
    pub functions: Vec<FunctionOutline>,
}

impl ProgramOutline {
    pub fn from_program(program: &Program) -> Self {
        let mut builder = OutlineBuilder::default();
        walk_program(program, &mut builder);
        debug!(
            globals = builder.outline.globals.len(),
            functions = builder.outline.functions.len(),
            "built outline"
        );
        builder.outline
    }

    pub fn function(&self, name: &str) -> Option<&FunctionOutline> {
        self.functions.iter().find(|function| function.name == name)
    }
}

impl Display for ProgramOutline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "globals: {}", join(&self.globals))?;
        for function in &self.functions {
            writeln!(f, "{}", function)?;
        }
        Ok(())
    }
}

#[derive(Default)]
struct OutlineBuilder {
    outline: ProgramOutline,
    current: Option<FunctionOutline>,
    /// Start positions of else blocks announced by an enclosing `if`.
    pending_else: Vec<Position>,
}

impl OutlineBuilder {
    fn record(&mut self, kind: ControlKind, condition: Option<String>, line: u32) {
        if let Some(function) = self.current.as_mut() {
            function.control_structures.push(ControlStructure {
                kind,
                condition,
                line,
            });
        }
    }
}

impl Visitor for OutlineBuilder {
    fn enter(&mut self, node: Node<'_>) {
        match node {
            Node::Function(function) => self.current = Some(FunctionOutline::new(function)),
            Node::Parameter(parameter) => {
                if let Some(function) = self.current.as_mut() {
                    function.parameters.push(VariableEntry {
                        var_type: parameter.param_type,
                        name: parameter.name.clone(),
                        has_initializer: false,
                    });
                }
            }
            Node::VarDecl(decl) => match self.current.as_mut() {
                Some(function) => function.locals.push(VariableEntry::from_decl(decl)),
                None => self.outline.globals.push(VariableEntry::from_decl(decl)),
            },
            Node::If(if_stmt) => {
                if let Some(else_body) = &if_stmt.else_body {
                    self.pending_else.push(else_body.span.start);
                }
                self.record(
                    ControlKind::If,
                    Some(if_stmt.condition.to_string()),
                    if_stmt.span.start.line,
                );
            }
            Node::Block(block) => {
                if self.pending_else.last() == Some(&block.span.start) {
                    self.pending_else.pop();
                    self.record(ControlKind::Else, None, block.span.start.line);
                }
            }
            Node::For(for_stmt) => self.record(
                ControlKind::For,
                Some(for_stmt.condition.to_string()),
                for_stmt.span.start.line,
            ),
            Node::While(while_stmt) => self.record(
                ControlKind::While,
                Some(while_stmt.condition.to_string()),
                while_stmt.span.start.line,
            ),
            Node::Call(call) => {
                if let Some(function) = self.current.as_mut() {
                    if call.callee == function.name {
                        function.is_recursive = true;
                    }
                }
            }
            _ => {}
        }
    }

    fn exit(&mut self, node: Node<'_>) {
        if let Node::Function(_) = node {
            if let Some(function) = self.current.take() {
                self.outline.functions.push(function);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse_source;

    const SOURCE: &str = "int total = 0;
string label;
int fact(int n) {
    if (n <= 1) {
        return 1;
    } else {
        return n * fact(n - 1);
    }
}
void count(int limit, float step) {
    int seen;
    for (int i = 0; i < limit; i++) {
        while (seen > i) {
            seen--;
        }
    }
}
";

    #[test]
    fn test_globals() {
        let outline = ProgramOutline::from_program(&parse_source(SOURCE).unwrap());

        assert_eq!(outline.globals.len(), 2);
        assert_eq!(outline.globals[0].name, "total");
        assert!(outline.globals[0].has_initializer);
        assert_eq!(outline.globals[1].var_type, Type::String);
        assert!(!outline.globals[1].has_initializer);
    }

    #[test]
    fn test_recursive_function() {
        let outline = ProgramOutline::from_program(&parse_source(SOURCE).unwrap());
        let fact = outline.function("fact").unwrap();

        assert!(fact.is_recursive);
        assert_eq!(fact.return_type, Type::Int);
        assert_eq!(fact.parameters[0].name, "n");
        assert!(fact.locals.is_empty());
        assert_eq!(
            fact.control_structures,
            vec![
                ControlStructure {
                    kind: ControlKind::If,
                    condition: Some(String::from("n <= 1")),
                    line: 4,
                },
                ControlStructure {
                    kind: ControlKind::Else,
                    condition: None,
                    line: 6,
                },
            ]
        );
    }

    #[test]
    fn test_iterative_function() {
        let outline = ProgramOutline::from_program(&parse_source(SOURCE).unwrap());
        let count = outline.function("count").unwrap();

        assert!(!count.is_recursive);
        assert_eq!(count.parameters.len(), 2);
        assert_eq!(count.parameters[1].var_type, Type::Float);

        let locals: Vec<_> = count.locals.iter().map(|local| local.name.as_str()).collect();
        assert_eq!(locals, vec!["seen", "i"]);

        let kinds: Vec<_> = count
            .control_structures
            .iter()
            .map(|structure| (structure.kind, structure.line))
            .collect();
        assert_eq!(kinds, vec![(ControlKind::For, 12), (ControlKind::While, 13)]);
    }

    #[test]
    fn test_top_level_declarations_count_as_globals() {
        let outline =
            ProgramOutline::from_program(&parse_source("void f() {} int late = 1;").unwrap());

        assert_eq!(outline.globals.len(), 1);
        assert_eq!(outline.globals[0].name, "late");
    }

    #[test]
    fn test_display() {
        let outline = ProgramOutline::from_program(&parse_source(SOURCE).unwrap());
        let text = outline.to_string();

        assert!(text.starts_with("globals: int total = ..., string label\n"));
        assert!(text.contains("function fact (recursive)\n  returns: int\n"));
        assert!(text.contains("  control structures: if (n <= 1) line 4, else line 6\n"));
        assert!(text.contains("function count (iterative)"));
        assert!(text.contains("  locals: int seen, int i = ...\n"));
    }
}
