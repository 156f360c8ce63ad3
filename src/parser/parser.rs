//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the main Parser struct and the `parse` entry point.
//! Statements are dispatched through a keyword lookup table; expressions are
//! parsed by a cascade of precedence levels driven by an operator binding
//! power table (see [`super::lookups`]).

use std::{
    collections::{HashMap, HashSet},
    sync::Arc,
};

use crate::{
    ast::ast::Program,
    errors::errors::{Error, ErrorImpl, TokenDescription},
    lexer::tokens::{Token, TokenKind},
    Position, Span, MK_TOKEN,
};

use super::{
    lookups::{create_token_lookups, BPLookup, BindingPower, PrefixLookup, StmtHandler, StmtLookup},
    stmt::parse_stmt,
};

/// How deep statements and expressions may nest before parsing fails.
pub const MAX_DEPTH: usize = 256;

/// The main parser structure that maintains parsing state.
///
/// This struct holds the token stream and the lookup tables for statements
/// and operators. It tracks the current position in the token stream and
/// provides methods for token consumption.
pub struct Parser {
    /// The list of tokens to parse, always terminated by `EOF`
    tokens: Vec<Token>,
    /// Current position in the token stream
    pos: usize,
    /// Statement handlers keyed by keyword
    stmt_lookup: StmtLookup,
    /// Binding powers of infix operators
    binding_power_lookup: BPLookup,
    /// Operators accepted in prefix position
    prefix_lookup: PrefixLookup,
    /// Statements and expressions currently being parsed
    depth: usize,
}

impl Parser {
    /// Creates a new Parser instance.
    ///
    /// An `EOF` token is appended if `tokens` does not already end with one,
    /// so the cursor always has a token to look at.
    pub fn new(mut tokens: Vec<Token>) -> Self {
        if tokens.last().map(|token| token.kind) != Some(TokenKind::EOF) {
            let end = tokens
                .last()
                .map(|token| token.span.end.clone())
                .unwrap_or_else(Position::null);
            tokens.push(MK_TOKEN!(
                TokenKind::EOF,
                String::from("EOF"),
                Span {
                    start: end.clone(),
                    end
                }
            ));
        }

        Parser {
            tokens,
            pos: 0,
            stmt_lookup: HashMap::new(),
            binding_power_lookup: HashMap::new(),
            prefix_lookup: HashSet::new(),
            depth: 0,
        }
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        self.peek(0)
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current_token().kind
    }

    /// Looks `offset` tokens ahead without advancing. Looking past the end yields `EOF`.
    pub fn peek(&self, offset: usize) -> &Token {
        let last = self.tokens.len() - 1;
        &self.tokens[(self.pos + offset).min(last)]
    }

    /// Advances to the next token and returns the previous one. Never moves past `EOF`.
    pub fn advance(&mut self) -> &Token {
        let index = self.pos;
        if self.current_token_kind() != TokenKind::EOF {
            self.pos += 1;
        }
        &self.tokens[index]
    }

    /// Returns `true` if the current token has the given kind and text.
    pub fn is(&self, kind: TokenKind, value: &str) -> bool {
        self.current_token().is(kind, value)
    }

    /// Consumes the current token if it has the given kind and text.
    pub fn eat(&mut self, kind: TokenKind, value: &str) -> bool {
        if self.is(kind, value) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Expects a token of the specified kind.
    ///
    /// # Returns
    ///
    /// Returns Ok(Token) if the current token matches, otherwise an `ExpectedToken` error.
    pub fn expect(&mut self, expected_kind: TokenKind) -> Result<Token, Error> {
        if self.current_token_kind() == expected_kind {
            Ok(self.advance().clone())
        } else {
            Err(self.expected(TokenDescription::kind(expected_kind)))
        }
    }

    /// Expects a token of the specified kind with exactly the given text.
    pub fn expect_value(&mut self, expected_kind: TokenKind, value: &str) -> Result<Token, Error> {
        if self.is(expected_kind, value) {
            Ok(self.advance().clone())
        } else {
            Err(self.expected(TokenDescription::exact(expected_kind, value)))
        }
    }

    fn expected(&self, expected: TokenDescription) -> Error {
        let token = self.current_token();
        Error::new(
            ErrorImpl::ExpectedToken {
                expected,
                found: TokenDescription::exact(token.kind, token.value.clone()),
            },
            token.span.start.clone(),
        )
    }

    /// Builds an error for a current token that cannot appear where it is.
    pub fn unexpected(&self) -> Error {
        let token = self.current_token();
        Error::new(
            ErrorImpl::UnexpectedToken {
                found: TokenDescription::exact(token.kind, token.value.clone()),
            },
            token.span.start.clone(),
        )
    }

    /// Enters one level of nesting, failing with `NestingTooDeep` past [`MAX_DEPTH`].
    /// Every successful call must be paired with [`Parser::leave`].
    pub fn enter(&mut self) -> Result<(), Error> {
        if self.depth >= MAX_DEPTH {
            return Err(Error::new(
                ErrorImpl::NestingTooDeep { limit: MAX_DEPTH },
                self.get_position(),
            ));
        }

        self.depth += 1;
        Ok(())
    }

    pub fn leave(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    /// Checks if there are more tokens to parse.
    pub fn has_tokens(&self) -> bool {
        self.current_token_kind() != TokenKind::EOF
    }

    /// Returns the statement handler for the current token, if it is a statement keyword.
    pub fn stmt_handler(&self) -> Option<StmtHandler> {
        let token = self.current_token();
        if token.kind != TokenKind::Keyword {
            return None;
        }
        self.stmt_lookup.get(token.value.as_str()).copied()
    }

    /// Returns the binding power of the current token, if it is an infix operator.
    pub fn binding_power(&self) -> Option<BindingPower> {
        let token = self.current_token();
        if token.kind != TokenKind::Operator {
            return None;
        }
        self.binding_power_lookup.get(token.value.as_str()).copied()
    }

    /// Returns `true` if the current token is a prefix operator.
    pub fn at_prefix_operator(&self) -> bool {
        let token = self.current_token();
        token.kind == TokenKind::Operator && self.prefix_lookup.contains(token.value.as_str())
    }

    /// Registers an infix operator with its binding power.
    pub fn infix(&mut self, operator: &'static str, binding_power: BindingPower) {
        self.binding_power_lookup.insert(operator, binding_power);
    }

    /// Registers a prefix operator.
    pub fn prefix(&mut self, operator: &'static str) {
        self.prefix_lookup.insert(operator);
    }

    /// Registers a statement handler for a keyword.
    pub fn stmt(&mut self, keyword: &'static str, stmt_fn: StmtHandler) {
        self.stmt_lookup.insert(keyword, stmt_fn);
    }

    /// Returns the start of the current token.
    pub fn get_position(&self) -> Position {
        self.current_token().span.start.clone()
    }

    /// Returns a span from `start` to the end of the last consumed token.
    pub fn span_from(&self, start: Position) -> Span {
        let end = match self.pos.checked_sub(1) {
            Some(previous) => self.tokens[previous].span.end.clone(),
            None => start.clone(),
        };
        Span { start, end }
    }
}

/// Parses a stream of tokens into an Abstract Syntax Tree.
///
/// This is the main entry point for parsing. It creates a parser instance,
/// registers the lookup tables, and parses statements until `EOF`. The first
/// error aborts the parse.
pub fn parse(tokens: Vec<Token>) -> Result<Program, Error> {
    let mut parser = Parser::new(tokens);
    create_token_lookups(&mut parser);

    let file = Arc::clone(&parser.get_position().1);
    let mut body = vec![];

    while parser.has_tokens() {
        body.push(parse_stmt(&mut parser)?);
    }

    Ok(Program {
        body,
        span: Span {
            start: Position(0, file),
            end: parser.current_token().span.end.clone(),
        },
    })
}
