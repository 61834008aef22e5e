//! Type and parameter list parsing.
//!
//! A type is a single keyword token, so unlike expressions there is no
//! precedence to climb: the current token either names one of the five
//! primitive types or the parse fails listing all of them.

use crate::{
    ast::{statements::Parameter, types::Type},
    errors::errors::Error,
    lexer::tokens::TokenKind,
    Span,
};

use super::parser::Parser;

pub fn parse_type(parser: &mut Parser) -> Result<Type, Error> {
    match Type::from_token_kind(parser.current_token_kind()) {
        Some(parsed) => {
            parser.advance();
            Ok(parsed)
        }
        None => Err(parser.unexpected(&Type::KEYWORDS)),
    }
}

/// `type name`
pub fn parse_parameter(parser: &mut Parser) -> Result<Parameter, Error> {
    let start = parser.get_position();
    let param_type = parse_type(parser)?;
    let name = parser.expect(TokenKind::Identifier)?;

    Ok(Parameter {
        param_type,
        name: name.value,
        span: Span::new(start, name.span.end),
    })
}

/// `( [type name {, type name}] )`, parentheses included. A trailing comma
/// is rejected because another parameter must follow it.
pub fn parse_parameter_list(parser: &mut Parser) -> Result<Vec<Parameter>, Error> {
    parser.expect(TokenKind::OpenParen)?;

    let mut parameters = Vec::new();

    if parser.current_token_kind() != TokenKind::CloseParen {
        parameters.push(parse_parameter(parser)?);

        while parser.current_token_kind() == TokenKind::Comma {
            parser.advance();
            parameters.push(parse_parameter(parser)?);
        }
    }

    if parser.current_token_kind() != TokenKind::CloseParen {
        let mut expected = vec![TokenKind::CloseParen];
        if parameters.is_empty() {
            expected.extend(Type::KEYWORDS);
        } else {
            expected.insert(0, TokenKind::Comma);
        }
        return Err(parser.unexpected(&expected));
    }
    parser.advance();

    Ok(parameters)
}
