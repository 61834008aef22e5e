use tracing::trace;

use crate::{
    ast::{
        expressions::Expr,
        statements::{
            AssignmentOperator, AssignmentStmt, BlockStmt, ExpressionStmt, FnDeclStmt, ForStep,
            ForStmt, IfStmt, IncDecOperator, IncDecStmt, ReturnStmt, Stmt, VarDeclStmt, WhileStmt,
        },
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind},
    parser::{
        expr::{parse_call_expr, parse_expr},
        lookups::BindingPower,
    },
    Span,
};

use super::{
    parser::Parser,
    types::{parse_parameter_list, parse_type},
};

/// Token kinds that may follow an identifier at the start of a statement.
const AFTER_IDENTIFIER: [TokenKind; 9] = [
    TokenKind::Assignment,
    TokenKind::PlusEquals,
    TokenKind::MinusEquals,
    TokenKind::StarEquals,
    TokenKind::SlashEquals,
    TokenKind::PercentEquals,
    TokenKind::PlusPlus,
    TokenKind::MinusMinus,
    TokenKind::OpenParen,
];

pub fn parse_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let token_kind = parser.current_token_kind();
    trace!(kind = %token_kind, position = %parser.get_position(), "statement");

    match parser.get_stmt_lookup().get(&token_kind).copied() {
        Some(stmt_fn) => stmt_fn(parser),
        None => Err(parser.unexpected(&parser.statement_starts())),
    }
}

/// `type name [= expr];` as a Stmt.
pub fn parse_var_decl_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    Ok(Stmt::VarDecl(parse_var_decl(parser)?))
}

/// `type name [= expr];`, semicolon included. Shared by globals, local
/// declarations and the for-loop initializer.
pub fn parse_var_decl(parser: &mut Parser) -> Result<VarDeclStmt, Error> {
    let start = parser.get_position();
    let var_type = parse_type(parser)?;
    let identifier = parser.expect(TokenKind::Identifier)?.value;

    let assigned_value = match parser.current_token_kind() {
        TokenKind::Assignment => {
            parser.advance();
            Some(parse_expr(parser, BindingPower::DEFAULT)?)
        }
        _ => None,
    };

    let expected: &[TokenKind] = match assigned_value {
        Some(_) => &[TokenKind::Semicolon],
        None => &[TokenKind::Assignment, TokenKind::Semicolon],
    };
    let end = parser.expect_one_of(expected)?.span.end;

    Ok(VarDeclStmt {
        var_type,
        identifier,
        assigned_value,
        span: Span::new(start, end),
    })
}

/// Statements led by an identifier: assignment, postfix inc/dec or a call.
pub fn parse_identifier_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let next = parser.peek_kind(1);

    let stmt = if next.is_assignment_operator() {
        Stmt::Assignment(parse_assignment(parser)?)
    } else if next.is_inc_dec() {
        Stmt::IncDec(parse_inc_dec(parser)?)
    } else if next == TokenKind::OpenParen {
        let call = parse_call_expr(parser)?;
        let end = parser.expect(TokenKind::Semicolon)?.span.end;
        return Ok(Stmt::Expression(ExpressionStmt {
            span: Span::new(call.span.start, end),
            call,
        }));
    } else {
        parser.advance();
        return Err(parser.unexpected(&AFTER_IDENTIFIER));
    };

    parser.expect(TokenKind::Semicolon)?;
    Ok(extend_to_previous(parser, stmt))
}

/// `++name;` or `--name;`
pub fn parse_prefix_inc_dec_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let stmt = Stmt::IncDec(parse_inc_dec(parser)?);
    parser.expect(TokenKind::Semicolon)?;
    Ok(extend_to_previous(parser, stmt))
}

// Statement spans cover the trailing semicolon.
fn extend_to_previous(parser: &Parser, mut stmt: Stmt) -> Stmt {
    let end = parser.previous_end();
    match &mut stmt {
        Stmt::Assignment(assignment) => assignment.span.end = end,
        Stmt::IncDec(inc_dec) => inc_dec.span.end = end,
        _ => {}
    }
    stmt
}

/// `name op expr` without the semicolon.
fn parse_assignment(parser: &mut Parser) -> Result<AssignmentStmt, Error> {
    let identifier = parser.expect(TokenKind::Identifier)?;
    let operator_token = parser.advance();
    let operator = match AssignmentOperator::from_token_kind(operator_token.kind) {
        Some(operator) => operator,
        None => return Err(unexpected_token(&operator_token, &AFTER_IDENTIFIER[..6])),
    };

    let value = parse_expr(parser, BindingPower::DEFAULT)?;

    Ok(AssignmentStmt {
        span: Span::new(identifier.span.start, value.get_span().end),
        identifier: identifier.value,
        operator,
        value,
    })
}

/// `name++`, `name--`, `++name` or `--name`, without the semicolon.
fn parse_inc_dec(parser: &mut Parser) -> Result<IncDecStmt, Error> {
    let first = parser.advance();

    let (identifier, operator_token, is_prefix) = if first.kind.is_inc_dec() {
        (parser.expect(TokenKind::Identifier)?, first, true)
    } else {
        let operator_token =
            parser.expect_one_of(&[TokenKind::PlusPlus, TokenKind::MinusMinus])?;
        (first, operator_token, false)
    };

    let operator = match IncDecOperator::from_token_kind(operator_token.kind) {
        Some(operator) => operator,
        None => {
            return Err(unexpected_token(
                &operator_token,
                &[TokenKind::PlusPlus, TokenKind::MinusMinus],
            ))
        }
    };

    let (start, end) = if is_prefix {
        (operator_token.span.start, identifier.span.end)
    } else {
        (identifier.span.start, operator_token.span.end)
    };

    Ok(IncDecStmt {
        identifier: identifier.value,
        operator,
        is_prefix,
        span: Span::new(start, end),
    })
}

fn unexpected_token(token: &Token, expected: &[TokenKind]) -> Error {
    Error::new(
        ErrorImpl::UnexpectedToken {
            token: token.value.clone(),
            found: token.kind,
            expected: expected.to_vec(),
        },
        token.span.start,
    )
}

/// `( expr )`, as used by `if` and `while`.
fn parse_condition(parser: &mut Parser) -> Result<Expr, Error> {
    parser.expect(TokenKind::OpenParen)?;
    let condition = parse_expr(parser, BindingPower::DEFAULT)?;
    parser.expect(TokenKind::CloseParen)?;
    Ok(condition)
}

pub fn parse_if_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let start = parser.expect(TokenKind::If)?.span.start;

    let condition = parse_condition(parser)?;
    let then_body = parse_block_stmt(parser)?;

    let else_body = match parser.current_token_kind() {
        TokenKind::Else => {
            parser.advance();
            Some(parse_block_stmt(parser)?)
        }
        _ => None,
    };

    Ok(Stmt::If(IfStmt {
        condition,
        then_body,
        else_body,
        span: Span::new(start, parser.previous_end()),
    }))
}

/// `for ( VarDecl ; expr ; step ) block`. The declaration brings its own
/// first semicolon and the step has none.
pub fn parse_for_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let start = parser.expect(TokenKind::For)?.span.start;
    parser.expect(TokenKind::OpenParen)?;

    let init = parse_var_decl(parser)?;
    let condition = parse_expr(parser, BindingPower::DEFAULT)?;
    parser.expect(TokenKind::Semicolon)?;

    let step = parse_for_step(parser)?;
    parser.expect(TokenKind::CloseParen)?;

    let body = parse_block_stmt(parser)?;

    Ok(Stmt::For(ForStmt {
        init,
        condition,
        step,
        body,
        span: Span::new(start, parser.previous_end()),
    }))
}

fn parse_for_step(parser: &mut Parser) -> Result<ForStep, Error> {
    match parser.current_token_kind() {
        TokenKind::PlusPlus | TokenKind::MinusMinus => {
            Ok(ForStep::IncDec(parse_inc_dec(parser)?))
        }
        TokenKind::Identifier => {
            let next = parser.peek_kind(1);
            if next.is_assignment_operator() {
                Ok(ForStep::Assignment(parse_assignment(parser)?))
            } else if next.is_inc_dec() {
                Ok(ForStep::IncDec(parse_inc_dec(parser)?))
            } else {
                parser.advance();
                Err(parser.unexpected(&AFTER_IDENTIFIER[..8]))
            }
        }
        _ => Err(parser.unexpected(&[
            TokenKind::Identifier,
            TokenKind::PlusPlus,
            TokenKind::MinusMinus,
        ])),
    }
}

pub fn parse_while_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let start = parser.expect(TokenKind::While)?.span.start;

    let condition = parse_condition(parser)?;
    let body = parse_block_stmt(parser)?;

    Ok(Stmt::While(WhileStmt {
        condition,
        body,
        span: Span::new(start, parser.previous_end()),
    }))
}

pub fn parse_return_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let start = parser.expect(TokenKind::Return)?.span.start;

    let value = match parser.current_token_kind() {
        TokenKind::Semicolon => None,
        _ => Some(parse_expr(parser, BindingPower::DEFAULT)?),
    };

    let end = parser.expect(TokenKind::Semicolon)?.span.end;

    Ok(Stmt::Return(ReturnStmt {
        value,
        span: Span::new(start, end),
    }))
}

pub fn parse_block_stmt(parser: &mut Parser) -> Result<BlockStmt, Error> {
    let start = parser.expect(TokenKind::OpenCurly)?.span.start;
    parser.enter_nested()?;

    let mut body = Vec::new();
    while parser.current_token_kind() != TokenKind::CloseCurly {
        if !parser.has_tokens() {
            let token = parser.current_token();
            return Err(Error::new(
                ErrorImpl::UnclosedBlock {
                    token: token.value.clone(),
                },
                token.span.start,
            ));
        }
        body.push(parse_stmt(parser)?);
    }

    let end = parser.expect(TokenKind::CloseCurly)?.span.end;
    parser.leave_nested();

    Ok(BlockStmt {
        body,
        span: Span::new(start, end),
    })
}

/// `type name ( parameters ) block`
pub fn parse_fn_decl_stmt(parser: &mut Parser) -> Result<FnDeclStmt, Error> {
    let start = parser.get_position();

    let return_type = parse_type(parser)?;
    let identifier = parser.expect(TokenKind::Identifier)?.value;
    let parameters = parse_parameter_list(parser)?;
    let body = parse_block_stmt(parser)?;

    Ok(FnDeclStmt {
        span: Span::new(start, body.span.end),
        return_type,
        identifier,
        parameters,
        body,
    })
}
