use std::fmt::Display;

use thiserror::Error;

use crate::{lexer::tokens::TokenKind, Position};

/// Token kinds that can begin an expression.
pub const EXPRESSION_START: [TokenKind; 5] = [
    TokenKind::Identifier,
    TokenKind::Number,
    TokenKind::String,
    TokenKind::OpenParen,
    TokenKind::Not,
];

#[derive(Error, Debug, Clone, PartialEq)]
#[error("{internal_error} at {position}")]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_impl(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => "UnrecognisedToken",
            ErrorImpl::UnterminatedString => "UnterminatedString",
            ErrorImpl::UnterminatedComment => "UnterminatedComment",
            ErrorImpl::SourceTooLarge { .. } => "SourceTooLarge",
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::ExpectedExpression { .. } => "ExpectedExpression",
            ErrorImpl::UnclosedBlock { .. } => "UnclosedBlock",
            ErrorImpl::NestingTooDeep { .. } => "NestingTooDeep",
        }
    }

    /// Lexical errors come from the tokenizer; everything else is a syntax error.
    pub fn is_syntax_error(&self) -> bool {
        !matches!(
            self.internal_error,
            ErrorImpl::UnrecognisedToken { .. }
                | ErrorImpl::UnterminatedString
                | ErrorImpl::UnterminatedComment
                | ErrorImpl::SourceTooLarge { .. }
        )
    }

    /// The token kinds that would have been accepted at the failure point.
    pub fn expected_kinds(&self) -> Vec<TokenKind> {
        match &self.internal_error {
            ErrorImpl::UnexpectedToken { expected, .. } => expected.clone(),
            ErrorImpl::ExpectedExpression { .. } => EXPRESSION_START.to_vec(),
            ErrorImpl::UnclosedBlock { .. } => vec![TokenKind::CloseCurly],
            _ => vec![],
        }
    }

    /// The kind of the offending token, when the error came from the parser.
    pub fn found_kind(&self) -> Option<TokenKind> {
        match &self.internal_error {
            ErrorImpl::UnexpectedToken { found, .. } => Some(*found),
            ErrorImpl::ExpectedExpression { found, .. } => Some(*found),
            ErrorImpl::UnclosedBlock { .. } => Some(TokenKind::EOF),
            _ => None,
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => ErrorTip::None,
            ErrorImpl::UnterminatedString => {
                ErrorTip::Suggestion(String::from("String literal is missing its closing `\"`"))
            }
            ErrorImpl::UnterminatedComment => {
                ErrorTip::Suggestion(String::from("Block comment is missing its closing `*/`"))
            }
            ErrorImpl::SourceTooLarge { .. } => ErrorTip::Suggestion(format!(
                "Source files are limited to {} bytes",
                u32::MAX
            )),
            ErrorImpl::UnexpectedToken {
                token,
                found,
                expected,
            } => {
                if expected.contains(&TokenKind::Semicolon) && *found != TokenKind::Semicolon {
                    ErrorTip::Suggestion(format!(
                        "Unexpected token: `{}`, expected {}, did you miss a semicolon?",
                        token,
                        describe_kinds(expected)
                    ))
                } else {
                    ErrorTip::Suggestion(format!(
                        "Unexpected token: `{}`, expected {}",
                        token,
                        describe_kinds(expected)
                    ))
                }
            }
            ErrorImpl::ExpectedExpression { token, .. } => ErrorTip::Suggestion(format!(
                "Expected an expression starting with {}, found `{}`",
                describe_kinds(&EXPRESSION_START),
                token
            )),
            ErrorImpl::UnclosedBlock { .. } => ErrorTip::Suggestion(String::from(
                "Block reaches the end of input, is a `}` missing?",
            )),
            ErrorImpl::NestingTooDeep { limit } => ErrorTip::Suggestion(format!(
                "Nesting is deeper than the configured limit of {}",
                limit
            )),
        }
    }
}

pub fn describe_kinds(kinds: &[TokenKind]) -> String {
    let described: Vec<String> = kinds
        .iter()
        .map(|kind| format!("`{}`", kind.describe()))
        .collect();

    match described.len() {
        0 => String::from("nothing"),
        1 => described[0].clone(),
        _ => format!("one of {}", described.join(", ")),
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("unrecognised token: {token:?}")]
    UnrecognisedToken { token: String },
    #[error("unterminated string literal")]
    UnterminatedString,
    #[error("unterminated block comment")]
    UnterminatedComment,
    #[error("source of {len} bytes does not fit 32-bit offsets")]
    SourceTooLarge { len: usize },
    #[error("unexpected token {token:?}, expected {}", describe_kinds(.expected))]
    UnexpectedToken {
        token: String,
        found: TokenKind,
        expected: Vec<TokenKind>,
    },
    #[error("expected expression ({}), found {token:?}", describe_kinds(&EXPRESSION_START))]
    ExpectedExpression { token: String, found: TokenKind },
    #[error("unclosed block, found {token:?} before `}}`")]
    UnclosedBlock { token: String },
    #[error("nesting exceeds the limit of {limit}")]
    NestingTooDeep { limit: usize },
}
