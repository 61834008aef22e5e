//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the main Parser struct and the program-level
//! parsing loop. Statements are dispatched through a lookup table keyed by
//! the current token; expressions use precedence climbing with NUD/LED
//! handlers.
//!
//! It maintains lookup tables for:
//! - Statement handlers
//! - NUD (null denotation) handlers for prefix expression forms
//! - LED (left denotation) handlers for infix operators
//! - Binding powers for operator precedence

use std::collections::HashMap;

use tracing::{debug, trace};

use crate::{
    ast::{
        ast::{Item, Program},
        statements::Stmt,
    },
    config::ParserConfig,
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind},
    Position, Span, MK_TOKEN,
};

use super::{
    lookups::{
        create_token_lookups, BPLookup, BindingPower, LEDHandler, LEDLookup, NUDHandler,
        NUDLookup, StmtHandler, StmtLookup,
    },
    stmt::{parse_fn_decl_stmt, parse_stmt, parse_var_decl},
};

/// The main parser structure that maintains parsing state.
///
/// One instance serves one parse. It owns the token stream, the cursor into
/// it and the current nesting depth; nothing is shared between parses.
pub struct Parser {
    /// The tokens to parse, always ending in EOF
    tokens: Vec<Token>,
    /// Current position in the token stream
    pos: usize,
    /// Lookup table for statement parsing handlers
    stmt_lookup: StmtLookup,
    /// Lookup table for null denotation (prefix) expression handlers
    nud_lookup: NUDLookup,
    /// Lookup table for left denotation (infix) expression handlers
    led_lookup: LEDLookup,
    /// Lookup table for infix binding powers
    binding_power_lookup: BPLookup,
    /// Blocks and expressions currently open
    depth: usize,
    max_depth: usize,
}

impl Parser {
    /// Creates a new Parser instance.
    ///
    /// # Arguments
    ///
    /// * `tokens` - Tokens to parse; an EOF token is appended when missing
    /// * `config` - Limits applied while parsing
    ///
    /// # Returns
    ///
    /// A new Parser with its lookup tables populated.
    pub fn new(mut tokens: Vec<Token>, config: &ParserConfig) -> Self {
        if tokens.last().map(|token| token.kind) != Some(TokenKind::EOF) {
            let end = tokens
                .last()
                .map(|token| token.span.end)
                .unwrap_or_else(Position::null);
            tokens.push(MK_TOKEN!(
                TokenKind::EOF,
                String::from("EOF"),
                Span::new(end, end)
            ));
        }

        let mut parser = Parser {
            tokens,
            pos: 0,
            stmt_lookup: HashMap::new(),
            nud_lookup: HashMap::new(),
            led_lookup: HashMap::new(),
            binding_power_lookup: HashMap::new(),
            depth: 0,
            max_depth: config.max_nesting_depth,
        };
        create_token_lookups(&mut parser);
        parser
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        self.peek_token(0)
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current_token().kind
    }

    /// Returns the token `offset` places ahead, or EOF past the end.
    pub fn peek_token(&self, offset: usize) -> &Token {
        let last = self.tokens.len() - 1;
        &self.tokens[(self.pos + offset).min(last)]
    }

    pub fn peek_kind(&self, offset: usize) -> TokenKind {
        self.peek_token(offset).kind
    }

    /// Advances to the next token and returns the previous one. The cursor
    /// never moves past EOF.
    pub fn advance(&mut self) -> Token {
        let token = self.current_token().clone();
        if token.kind != TokenKind::EOF {
            self.pos += 1;
        }
        token
    }

    /// Consumes the current token if it is of the expected kind.
    ///
    /// # Returns
    ///
    /// Returns Ok(Token) if the current token matches, otherwise an
    /// UnexpectedToken error naming `expected_kind`.
    pub fn expect(&mut self, expected_kind: TokenKind) -> Result<Token, Error> {
        self.expect_one_of(&[expected_kind])
    }

    /// Consumes the current token if it is any of `expected`.
    pub fn expect_one_of(&mut self, expected: &[TokenKind]) -> Result<Token, Error> {
        if expected.contains(&self.current_token_kind()) {
            Ok(self.advance())
        } else {
            Err(self.unexpected(expected))
        }
    }

    /// Builds an UnexpectedToken error at the current token.
    pub fn unexpected(&self, expected: &[TokenKind]) -> Error {
        let token = self.current_token();
        Error::new(
            ErrorImpl::UnexpectedToken {
                token: token.value.clone(),
                found: token.kind,
                expected: expected.to_vec(),
            },
            token.span.start,
        )
    }

    /// Checks if there are more tokens to parse.
    pub fn has_tokens(&self) -> bool {
        self.current_token_kind() != TokenKind::EOF
    }

    /// Opens one level of nesting, failing past the configured limit.
    pub fn enter_nested(&mut self) -> Result<(), Error> {
        if self.depth >= self.max_depth {
            return Err(Error::new(
                ErrorImpl::NestingTooDeep {
                    limit: self.max_depth,
                },
                self.get_position(),
            ));
        }
        self.depth += 1;
        Ok(())
    }

    pub fn leave_nested(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    /// Returns a reference to the statement lookup table.
    pub fn get_stmt_lookup(&self) -> &StmtLookup {
        &self.stmt_lookup
    }

    /// Returns a reference to the NUD (null denotation) lookup table.
    pub fn get_nud_lookup(&self) -> &NUDLookup {
        &self.nud_lookup
    }

    /// Returns a reference to the LED (left denotation) lookup table.
    pub fn get_led_lookup(&self) -> &LEDLookup {
        &self.led_lookup
    }

    /// Returns a reference to the binding power lookup table.
    pub fn get_bp_lookup(&self) -> &BPLookup {
        &self.binding_power_lookup
    }

    /// Token kinds that can start a statement, in a stable order.
    pub fn statement_starts(&self) -> Vec<TokenKind> {
        let mut kinds: Vec<TokenKind> = self.stmt_lookup.keys().copied().collect();
        kinds.sort();
        kinds
    }

    /// Registers a left denotation (infix) handler for a token.
    ///
    /// # Arguments
    ///
    /// * `kind` - The token kind to register
    /// * `binding_power` - The precedence/binding power for this operator
    /// * `led_fn` - The handler function for this infix operator
    pub fn led(&mut self, kind: TokenKind, binding_power: BindingPower, led_fn: LEDHandler) {
        self.binding_power_lookup.insert(kind, binding_power);
        self.led_lookup.insert(kind, led_fn);
    }

    /// Registers a null denotation (prefix) handler for a token.
    pub fn nud(&mut self, kind: TokenKind, nud_fn: NUDHandler) {
        self.nud_lookup.insert(kind, nud_fn);
    }

    /// Registers a statement handler for a token.
    pub fn stmt(&mut self, kind: TokenKind, stmt_fn: StmtHandler) {
        self.stmt_lookup.insert(kind, stmt_fn);
    }

    /// Returns the source position of the current token.
    pub fn get_position(&self) -> Position {
        self.current_token().span.start
    }

    /// Returns the end of the most recently consumed token.
    pub fn previous_end(&self) -> Position {
        match self.pos {
            0 => self.current_token().span.start,
            pos => self.tokens[pos - 1].span.end,
        }
    }

    /// `type IDENTIFIER` followed by `=` or `;`.
    fn at_global_declaration(&self) -> bool {
        self.current_token_kind().is_type_keyword()
            && self.peek_kind(1) == TokenKind::Identifier
            && matches!(
                self.peek_kind(2),
                TokenKind::Assignment | TokenKind::Semicolon
            )
    }

    /// `type IDENTIFIER (`.
    fn at_function_declaration(&self) -> bool {
        self.current_token_kind().is_type_keyword()
            && self.peek_kind(1) == TokenKind::Identifier
            && self.peek_kind(2) == TokenKind::OpenParen
    }
}

/// Parses a stream of tokens into a Program.
///
/// This is the main entry point for parsing. The leading run of global
/// variable declarations is read first; after it, function declarations
/// and statements may follow in any order until end of input.
///
/// # Returns
///
/// The Program, or the first error encountered. Nothing after the failure
/// point is parsed.
pub fn parse(tokens: Vec<Token>) -> Result<Program, Error> {
    parse_with_config(tokens, &ParserConfig::default())
}

pub fn parse_with_config(tokens: Vec<Token>, config: &ParserConfig) -> Result<Program, Error> {
    let mut parser = Parser::new(tokens, config);
    let start = parser.get_position();
    let mut items = vec![];

    while parser.at_global_declaration() {
        trace!(name = %parser.peek_token(1).value, "global declaration");
        items.push(Item::Global(parse_var_decl(&mut parser)?));
    }

    while parser.has_tokens() {
        if parser.at_function_declaration() {
            debug!(name = %parser.peek_token(1).value, "function declaration");
            items.push(Item::Function(parse_fn_decl_stmt(&mut parser)?));
        } else {
            let stmt: Stmt = parse_stmt(&mut parser)?;
            items.push(Item::Statement(stmt));
        }
    }

    debug!(items = items.len(), "parsed program");

    Ok(Program {
        items,
        span: Span::new(start, parser.get_position()),
    })
}
