//! Integration tests for the complete front end.
//!
//! These tests drive the public API from source text through tokenization
//! and parsing, then exercise the consumers of the tree: the printer, the
//! traversal and the outline.

use minilang::{
    ast::{
        ast::Item,
        statements::Stmt,
        visitor::{structure, walk_program, Node, Visitor},
    },
    config::ParserConfig,
    lexer::{lexer::tokenize, tokens::TokenKind},
    outline::ProgramOutline,
    parse_source,
    parser::parser::{parse, parse_with_config},
    render_error,
};

const PROGRAM: &str = r#"
int limit = 10;
double scale = 0.5;
string banner;

/* Sums the squares below `n`. */
int sum_squares(int n) {
    int total = 0;
    for (int i = 0; i < n; i++) {
        total += i * i;
    }
    return total;
}

int fib(int n) {
    if (n < 2) {
        return n;
    } else {
        return fib(n - 1) + fib(n - 2);
    }
}

void main() {
    int k = limit;
    while (k > 0 && !(k == 5)) {
        print("k = ", k, "\n");
        k--;
    }
    banner = "done";
    print(banner);
}

main();
"#;

fn assert_round_trip(source: &str) {
    let program = parse_source(source).unwrap();
    let printed = program.to_string();
    let reparsed = parse_source(&printed).unwrap();

    assert_eq!(structure(&program), structure(&reparsed), "printed:\n{}", printed);
    // Printing is a fixed point after the first pass.
    assert_eq!(reparsed.to_string(), printed);
}

#[test]
fn test_parse_complete_program() {
    let program = parse_source(PROGRAM).unwrap();

    assert_eq!(program.globals().count(), 3);
    let functions: Vec<_> = program
        .functions()
        .map(|function| function.identifier.as_str())
        .collect();
    assert_eq!(functions, vec!["sum_squares", "fib", "main"]);

    match program.items.last().unwrap() {
        Item::Statement(Stmt::Expression(stmt)) => assert_eq!(stmt.call.callee, "main"),
        other => panic!("expected call statement, got {:?}", other),
    }
}

#[test]
fn test_round_trip_complete_program() {
    assert_round_trip(PROGRAM);
}

#[test]
fn test_round_trip_expressions() {
    assert_round_trip("int r = a+b*c-d/e%f;");
    assert_round_trip("int r = !a&&b||!(c<=d)==e!=f>=g;");
    assert_round_trip("int r = a=b=(c+1);");
    assert_round_trip("int r = f(g(h()), \"s\\\"q\\\\\", 1.25);");
    assert_round_trip("x *= (y); y /= 2; z %= 3; w -= 1;");
    assert_round_trip("for (float x = 1.5; x > 0; x -= 0.5) {} ++a; --b; c--;");
    assert_round_trip("void f() {} if (a) {} else {} while (b) { return; }");
}

#[test]
fn test_round_trip_keeps_odd_precedence() {
    let program = parse_source("int r = a + b * c;").unwrap();
    let reparsed = parse_source(&program.to_string()).unwrap();

    let events = structure(&reparsed);
    // Multiplication is the root: additive operators bind tighter.
    assert_eq!(events[2], "enter Binary *");
    assert_eq!(events[3], "enter Binary +");
}

#[test]
fn test_parse_tokens_directly() {
    let tokens = tokenize("int x = 1;").unwrap();
    assert_eq!(tokens.last().map(|token| token.kind), Some(TokenKind::EOF));

    let program = parse(tokens).unwrap();
    assert_eq!(program.globals().count(), 1);
}

#[test]
fn test_lexical_error_reported_through_parse_source() {
    let error = parse_source("int x = 1 @ 2;").unwrap_err();
    assert_eq!(error.get_error_name(), "UnrecognisedToken");
    assert_eq!(error.get_position().column, 11);
}

#[test]
fn test_syntax_error_stops_at_first_failure() {
    let source = "int a = ;\nint b = ;\n";
    let error = parse_source(source).unwrap_err();

    assert_eq!(error.get_position().line, 1);
    let rendered = render_error(&error, source, "broken.ml");
    assert!(rendered.starts_with("Error: ExpectedExpression"));
    assert!(rendered.contains("-> broken.ml:1:9"));
    assert!(rendered.contains("1 | int a = ;"));
}

#[test]
fn test_nesting_limit_from_config() {
    let source = format!("int r = {}1{};", "(".repeat(100), ")".repeat(100));

    let config = ParserConfig::with_max_nesting_depth(50);
    let error = parse_with_config(tokenize(&source).unwrap(), &config).unwrap_err();
    assert_eq!(error.get_error_name(), "NestingTooDeep");

    let program = parse_source(&source).unwrap();
    assert_eq!(program.items.len(), 1);
}

#[derive(Default)]
struct Trace {
    open: Vec<String>,
    log: Vec<String>,
}

impl Visitor for Trace {
    fn enter(&mut self, node: Node<'_>) {
        let name = node.describe();
        self.log.push(format!("+{}", name));
        self.open.push(name);
    }

    fn exit(&mut self, node: Node<'_>) {
        let name = node.describe();
        // Every exit closes the most recent enter.
        assert_eq!(self.open.pop().as_deref(), Some(name.as_str()));
        self.log.push(format!("-{}", name));
    }
}

#[test]
fn test_visitor_events_are_balanced() {
    let program = parse_source(PROGRAM).unwrap();

    let mut trace = Trace::default();
    walk_program(&program, &mut trace);

    assert!(trace.open.is_empty());
    assert_eq!(trace.log.first().map(String::as_str), Some("+Program"));
    assert_eq!(trace.log.last().map(String::as_str), Some("-Program"));
}

#[test]
fn test_outline_of_complete_program() {
    let outline = ProgramOutline::from_program(&parse_source(PROGRAM).unwrap());

    let globals: Vec<_> = outline.globals.iter().map(|global| global.name.as_str()).collect();
    assert_eq!(globals, vec!["limit", "scale", "banner"]);

    let sum_squares = outline.function("sum_squares").unwrap();
    assert!(!sum_squares.is_recursive);
    let locals: Vec<_> = sum_squares.locals.iter().map(|local| local.name.as_str()).collect();
    assert_eq!(locals, vec!["total", "i"]);

    let fib = outline.function("fib").unwrap();
    assert!(fib.is_recursive);
    assert_eq!(fib.control_structures.len(), 2);

    let main = outline.function("main").unwrap();
    assert_eq!(main.control_structures[0].line, 25);
    assert_eq!(
        main.control_structures[0].condition.as_deref(),
        Some("k > 0 && !(k == 5)")
    );
}
