//! Unit tests for the lexer module.
//!
//! This module contains tests for tokenization including:
//! - Type and control keywords
//! - Identifiers and literals
//! - String literals with escape sequences
//! - Operators and punctuation
//! - Comments
//! - Positions and error cases

use super::{
    lexer::{check_source_len, tokenize, unescape},
    tokens::TokenKind,
};

fn kinds(source: &str) -> Vec<TokenKind> {
    tokenize(source)
        .unwrap()
        .into_iter()
        .map(|token| token.kind)
        .collect()
}

#[test]
fn test_tokenize_keywords() {
    let tokens = tokenize("int float double string void if else for while return").unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Int);
    assert_eq!(tokens[1].kind, TokenKind::Float);
    assert_eq!(tokens[2].kind, TokenKind::Double);
    assert_eq!(tokens[3].kind, TokenKind::StringType);
    assert_eq!(tokens[4].kind, TokenKind::Void);
    assert_eq!(tokens[5].kind, TokenKind::If);
    assert_eq!(tokens[6].kind, TokenKind::Else);
    assert_eq!(tokens[7].kind, TokenKind::For);
    assert_eq!(tokens[8].kind, TokenKind::While);
    assert_eq!(tokens[9].kind, TokenKind::Return);
    assert_eq!(tokens[10].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_identifiers() {
    let tokens = tokenize("foo bar baz_123 _underscore CamelCase integer").unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[0].value, "foo");
    assert_eq!(tokens[2].value, "baz_123");
    assert_eq!(tokens[3].value, "_underscore");
    assert_eq!(tokens[4].value, "CamelCase");
    // keywords only match whole words
    assert_eq!(tokens[5].kind, TokenKind::Identifier);
    assert_eq!(tokens[5].value, "integer");
    assert_eq!(tokens[6].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_numbers() {
    let tokens = tokenize("42 3.14 0 100.5").unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Number);
    assert_eq!(tokens[0].value, "42");
    assert_eq!(tokens[1].value, "3.14");
    assert_eq!(tokens[2].value, "0");
    assert_eq!(tokens[3].value, "100.5");
    assert_eq!(tokens[4].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_strings() {
    let tokens = tokenize(r#""hello" "multiple words" """#).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::String);
    assert_eq!(tokens[0].value, "hello");
    assert_eq!(tokens[1].value, "multiple words");
    assert_eq!(tokens[2].kind, TokenKind::String);
    assert_eq!(tokens[2].value, "");
    assert_eq!(tokens[3].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_string_escapes() {
    let tokens = tokenize(r#""hello\nworld" "tab\there" "backslash\\" "hex\x41" "quote\"test""#)
        .unwrap();

    assert_eq!(tokens[0].value, "hello\nworld");
    assert_eq!(tokens[1].value, "tab\there");
    assert_eq!(tokens[2].value, "backslash\\");
    assert_eq!(tokens[3].value, "hexA");
    assert_eq!(tokens[4].value, "quote\"test");
    assert_eq!(tokens[5].kind, TokenKind::EOF);
}

#[test]
fn test_unescape_unknown_escape_keeps_backslash() {
    assert_eq!(unescape(r"a\qb"), "a\\qb");
    assert_eq!(unescape(r"\x"), "\\x");
}

#[test]
fn test_unescape_high_hex_is_a_code_point() {
    assert_eq!(unescape(r"caf\xe9"), "caf\u{e9}");
    assert_eq!(unescape(r"\xff").chars().count(), 1);
    assert_eq!(unescape(r"\x7f"), "\u{7f}");
}

#[test]
fn test_source_length_must_fit_offsets() {
    assert!(check_source_len(0).is_ok());
    assert!(check_source_len(u32::MAX as usize).is_ok());

    let error = check_source_len(usize::MAX).unwrap_err();
    assert_eq!(error.get_error_name(), "SourceTooLarge");
    assert!(!error.is_syntax_error());
}

#[test]
fn test_tokenize_operators() {
    assert_eq!(
        kinds("+ - * / % == != < > <= >= = && || !"),
        vec![
            TokenKind::Plus,
            TokenKind::Dash,
            TokenKind::Star,
            TokenKind::Slash,
            TokenKind::Percent,
            TokenKind::Equals,
            TokenKind::NotEquals,
            TokenKind::Less,
            TokenKind::Greater,
            TokenKind::LessEquals,
            TokenKind::GreaterEquals,
            TokenKind::Assignment,
            TokenKind::And,
            TokenKind::Or,
            TokenKind::Not,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_tokenize_compound_operators() {
    assert_eq!(
        kinds("++ -- += -= *= /= %="),
        vec![
            TokenKind::PlusPlus,
            TokenKind::MinusMinus,
            TokenKind::PlusEquals,
            TokenKind::MinusEquals,
            TokenKind::StarEquals,
            TokenKind::SlashEquals,
            TokenKind::PercentEquals,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_tokenize_without_spaces() {
    assert_eq!(
        kinds("i++<=a!=b"),
        vec![
            TokenKind::Identifier,
            TokenKind::PlusPlus,
            TokenKind::LessEquals,
            TokenKind::Identifier,
            TokenKind::NotEquals,
            TokenKind::Identifier,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_tokenize_punctuation() {
    assert_eq!(
        kinds("( ) { } , ;"),
        vec![
            TokenKind::OpenParen,
            TokenKind::CloseParen,
            TokenKind::OpenCurly,
            TokenKind::CloseCurly,
            TokenKind::Comma,
            TokenKind::Semicolon,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_tokenize_comments() {
    let tokens = tokenize("int x = 5; // line comment\n/* block\n comment */ x = 10;").unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Int);
    assert_eq!(tokens[1].value, "x");
    assert_eq!(tokens[3].value, "5");
    assert_eq!(tokens[4].kind, TokenKind::Semicolon);
    assert_eq!(tokens[5].kind, TokenKind::Identifier);
    assert_eq!(tokens[5].value, "x");
    assert_eq!(tokens[7].value, "10");
    assert_eq!(tokens[9].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_positions() {
    let tokens = tokenize("int x;\n  x = 1;").unwrap();

    assert_eq!(tokens[0].span.start.line, 1);
    assert_eq!(tokens[0].span.start.column, 1);
    assert_eq!(tokens[1].span.start.column, 5);
    assert_eq!(tokens[3].value, "x");
    assert_eq!(tokens[3].span.start.line, 2);
    assert_eq!(tokens[3].span.start.column, 3);
    assert_eq!(tokens[3].span.start.offset, 9);
    assert_eq!(tokens[5].span.start.column, 7);
}

#[test]
fn test_tokenize_simple_program() {
    let tokens = tokenize("int x = 42;").unwrap();

    assert_eq!(tokens.len(), 6); // int, x, =, 42, ;, EOF
    assert_eq!(tokens[0].kind, TokenKind::Int);
    assert_eq!(tokens[1].kind, TokenKind::Identifier);
    assert_eq!(tokens[2].kind, TokenKind::Assignment);
    assert_eq!(tokens[3].kind, TokenKind::Number);
    assert_eq!(tokens[4].kind, TokenKind::Semicolon);
    assert_eq!(tokens[5].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_empty_source() {
    assert_eq!(kinds(""), vec![TokenKind::EOF]);
    assert_eq!(kinds("  \n\t // nothing"), vec![TokenKind::EOF]);
}

#[test]
fn test_tokenize_unrecognised_character() {
    let error = tokenize("int x = 1 @ 2;").unwrap_err();

    assert_eq!(error.get_error_name(), "UnrecognisedToken");
    assert_eq!(error.get_position().column, 11);
}

#[test]
fn test_tokenize_unterminated_string() {
    let error = tokenize("string s = \"open;\n").unwrap_err();

    assert_eq!(error.get_error_name(), "UnterminatedString");
    assert_eq!(error.get_position().column, 12);
}

#[test]
fn test_tokenize_unterminated_comment() {
    let error = tokenize("int x; /* never closed").unwrap_err();

    assert_eq!(error.get_error_name(), "UnterminatedComment");
    assert_eq!(error.get_position().column, 8);
}
