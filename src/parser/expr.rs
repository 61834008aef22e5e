use crate::{
    ast::expressions::{
        AssignmentExpr, BinaryExpr, BinaryOperator, CallExpr, Expr, GroupingExpr, NotExpr,
        NumberExpr, StringExpr, SymbolExpr,
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
    Span,
};

use super::{lookups::BindingPower, parser::Parser};

pub fn parse_expr(parser: &mut Parser, bp: BindingPower) -> Result<Expr, Error> {
    parser.enter_nested()?;
    let result = parse_expr_inner(parser, bp);
    parser.leave_nested();
    result
}

fn parse_expr_inner(parser: &mut Parser, bp: BindingPower) -> Result<Expr, Error> {
    // First parse NUD
    let token_kind = parser.current_token_kind();
    let nud_fn = match parser.get_nud_lookup().get(&token_kind).copied() {
        Some(nud_fn) => nud_fn,
        None => {
            let token = parser.current_token();
            return Err(Error::new(
                ErrorImpl::ExpectedExpression {
                    token: token.value.clone(),
                    found: token.kind,
                },
                token.span.start,
            ));
        }
    };

    let mut left = nud_fn(parser)?;

    // Extend the left side while the next operator binds tighter than `bp`.
    // Anything without a binding power ends the expression.
    loop {
        let token_kind = parser.current_token_kind();
        let operator_bp = match parser.get_bp_lookup().get(&token_kind) {
            Some(operator_bp) if *operator_bp > bp => *operator_bp,
            _ => break,
        };

        let led_fn = match parser.get_led_lookup().get(&token_kind).copied() {
            Some(led_fn) => led_fn,
            None => break,
        };

        left = led_fn(parser, left, operator_bp)?;
    }

    Ok(left)
}

pub fn parse_primary_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let token = parser.expect_one_of(&[TokenKind::Number, TokenKind::String])?;

    match token.kind {
        TokenKind::Number => Ok(Expr::Number(NumberExpr {
            value: token.value,
            span: token.span,
        })),
        _ => Ok(Expr::String(StringExpr {
            value: token.value,
            span: token.span,
        })),
    }
}

pub fn parse_binary_expr(
    parser: &mut Parser,
    left: Expr,
    bp: BindingPower,
) -> Result<Expr, Error> {
    let operator_token = parser.advance();
    let operator = match BinaryOperator::from_token_kind(operator_token.kind) {
        Some(operator) => operator,
        None => {
            return Err(Error::new(
                ErrorImpl::ExpectedExpression {
                    token: operator_token.value,
                    found: operator_token.kind,
                },
                operator_token.span.start,
            ))
        }
    };

    let right = parse_expr(parser, bp.next())?;

    Ok(Expr::Binary(BinaryExpr {
        span: Span::new(left.get_span().start, right.get_span().end),
        operator,
        left: Box::new(left),
        right: Box::new(right),
    }))
}

pub fn parse_not_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let start = parser.expect(TokenKind::Not)?.span.start;
    let operand = parse_expr(parser, BindingPower::NOT_OPERAND)?;

    Ok(Expr::Not(NotExpr {
        span: Span::new(start, operand.get_span().end),
        operand: Box::new(operand),
    }))
}

pub fn parse_grouping_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let start = parser.expect(TokenKind::OpenParen)?.span.start;
    let inner = parse_expr(parser, BindingPower::DEFAULT)?;
    let end = parser.expect(TokenKind::CloseParen)?.span.end;

    Ok(Expr::Grouping(GroupingExpr {
        inner: Box::new(inner),
        span: Span::new(start, end),
    }))
}

/// Identifier-led prefix forms: `name(args)`, `name = value` and `name`.
pub fn parse_identifier_expr(parser: &mut Parser) -> Result<Expr, Error> {
    match parser.peek_kind(1) {
        TokenKind::OpenParen => Ok(Expr::Call(parse_call_expr(parser)?)),
        TokenKind::Assignment => {
            let target = parser.expect(TokenKind::Identifier)?;
            parser.expect(TokenKind::Assignment)?;
            // Parsing the right side from the bottom lets `a = b = c` nest to the right.
            let value = parse_expr(parser, BindingPower::DEFAULT)?;

            Ok(Expr::Assignment(AssignmentExpr {
                span: Span::new(target.span.start, value.get_span().end),
                target: target.value,
                value: Box::new(value),
            }))
        }
        _ => {
            let token = parser.expect(TokenKind::Identifier)?;
            Ok(Expr::Symbol(SymbolExpr {
                value: token.value,
                span: token.span,
            }))
        }
    }
}

/// `name ( [expr {, expr}] )`
pub fn parse_call_expr(parser: &mut Parser) -> Result<CallExpr, Error> {
    let callee = parser.expect(TokenKind::Identifier)?;
    parser.expect(TokenKind::OpenParen)?;

    let mut arguments = vec![];

    if parser.current_token_kind() != TokenKind::CloseParen {
        arguments.push(parse_expr(parser, BindingPower::DEFAULT)?);

        while parser.current_token_kind() == TokenKind::Comma {
            parser.advance();
            arguments.push(parse_expr(parser, BindingPower::DEFAULT)?);
        }
    }

    if parser.current_token_kind() != TokenKind::CloseParen {
        return Err(parser.unexpected(&[TokenKind::Comma, TokenKind::CloseParen]));
    }
    let end = parser.advance().span.end;

    Ok(CallExpr {
        callee: callee.value,
        arguments,
        span: Span::new(callee.span.start, end),
    })
}
