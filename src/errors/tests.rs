//! Unit tests for error handling.
//!
//! This module contains tests for error types and error reporting.

use crate::errors::errors::{Error, ErrorImpl, ErrorTip, EXPRESSION_START};
use crate::lexer::tokens::TokenKind;
use crate::Position;

#[test]
fn test_error_creation() {
    let error = Error::new(
        ErrorImpl::UnrecognisedToken {
            token: "@".to_string(),
        },
        Position::new(10, 1, 11),
    );

    assert_eq!(error.get_error_name(), "UnrecognisedToken");
    assert!(!error.is_syntax_error());
}

#[test]
fn test_error_position() {
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            token: "}".to_string(),
            found: TokenKind::CloseCurly,
            expected: vec![TokenKind::Semicolon],
        },
        Position::new(42, 3, 7),
    );

    assert_eq!(error.get_position().line, 3);
    assert_eq!(error.get_position().column, 7);
    assert!(error.is_syntax_error());
}

#[test]
fn test_expected_kinds_of_unexpected_token() {
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            token: "x".to_string(),
            found: TokenKind::Identifier,
            expected: vec![TokenKind::OpenParen],
        },
        Position::null(),
    );

    assert_eq!(error.expected_kinds(), vec![TokenKind::OpenParen]);
    assert_eq!(error.found_kind(), Some(TokenKind::Identifier));
}

#[test]
fn test_expected_expression_lists_expression_starts() {
    let error = Error::new(
        ErrorImpl::ExpectedExpression {
            token: ";".to_string(),
            found: TokenKind::Semicolon,
        },
        Position::null(),
    );

    assert_eq!(error.get_error_name(), "ExpectedExpression");
    assert_eq!(error.expected_kinds(), EXPRESSION_START.to_vec());
    assert_eq!(error.found_kind(), Some(TokenKind::Semicolon));
}

#[test]
fn test_unclosed_block_expects_close_curly() {
    let error = Error::new(
        ErrorImpl::UnclosedBlock {
            token: "EOF".to_string(),
        },
        Position::null(),
    );

    assert_eq!(error.expected_kinds(), vec![TokenKind::CloseCurly]);
    assert_eq!(error.found_kind(), Some(TokenKind::EOF));
}

#[test]
fn test_lexical_errors_have_no_expected_kinds() {
    let error = Error::new(ErrorImpl::UnterminatedString, Position::null());

    assert!(error.expected_kinds().is_empty());
    assert_eq!(error.found_kind(), None);
    assert!(!error.is_syntax_error());
}

#[test]
fn test_error_tip_none() {
    let error = Error::new(
        ErrorImpl::UnrecognisedToken {
            token: "@".to_string(),
        },
        Position::null(),
    );

    assert!(matches!(error.get_tip(), ErrorTip::None));
}

#[test]
fn test_error_tip_missing_semicolon() {
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            token: "y".to_string(),
            found: TokenKind::Identifier,
            expected: vec![TokenKind::Semicolon],
        },
        Position::null(),
    );

    assert_eq!(
        error.get_tip().to_string(),
        "Unexpected token: `y`, expected `;`, did you miss a semicolon?"
    );
}

#[test]
fn test_error_tip_missing_semicolon_keeps_other_kinds() {
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            token: "5".to_string(),
            found: TokenKind::Number,
            expected: vec![TokenKind::Assignment, TokenKind::Semicolon],
        },
        Position::null(),
    );

    assert_eq!(
        error.get_tip().to_string(),
        "Unexpected token: `5`, expected one of `=`, `;`, did you miss a semicolon?"
    );
}

#[test]
fn test_expected_expression_names_accepted_kinds() {
    let error = Error::new(
        ErrorImpl::ExpectedExpression {
            token: ";".to_string(),
            found: TokenKind::Semicolon,
        },
        Position::new(8, 1, 9),
    );

    let accepted = "one of `identifier`, `number`, `string literal`, `(`, `!`";
    assert_eq!(
        error.to_string(),
        format!("expected expression ({}), found \";\" at 1:9", accepted)
    );
    assert_eq!(
        error.get_tip().to_string(),
        format!("Expected an expression starting with {}, found `;`", accepted)
    );
}

#[test]
fn test_error_tip_lists_expected() {
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            token: "1".to_string(),
            found: TokenKind::Number,
            expected: vec![TokenKind::Identifier, TokenKind::OpenParen],
        },
        Position::null(),
    );

    assert_eq!(
        error.get_tip().to_string(),
        "Unexpected token: `1`, expected one of `identifier`, `(`"
    );
}

#[test]
fn test_error_tip_display() {
    let tip = ErrorTip::Suggestion("Try this instead".to_string());
    assert_eq!(tip.to_string(), "Try this instead");

    let tip = ErrorTip::None;
    assert_eq!(tip.to_string(), "");
}

#[test]
fn test_error_display() {
    let error = Error::new(
        ErrorImpl::NestingTooDeep { limit: 4 },
        Position::new(0, 2, 5),
    );

    assert_eq!(error.to_string(), "nesting exceeds the limit of 4 at 2:5");
}
