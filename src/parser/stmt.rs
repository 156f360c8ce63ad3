use crate::{
    ast::{
        expressions::Identifier,
        statements::{
            BlockStmt, ExpressionStmt, FnDeclStmt, IfStmt, ReturnStmt, Stmt, VarDeclStmt,
            VarDeclarator, VarKind,
        },
    },
    errors::errors::Error,
    lexer::tokens::TokenKind,
    parser::expr::parse_expr,
};

use super::parser::Parser;

/// Parses one statement. Each call is one level of nesting.
pub fn parse_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    parser.enter()?;
    let stmt = match parser.stmt_handler() {
        Some(handler) => handler(parser),
        None => parse_expression_stmt(parser),
    };
    parser.leave();

    stmt
}

pub fn parse_expression_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let expression = parse_expr(parser)?;
    parser.eat(TokenKind::Punctuator, ";");

    Ok(Stmt::Expression(ExpressionStmt {
        span: parser.span_from(expression.get_span().start.clone()),
        expression,
    }))
}

pub fn parse_var_decl_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let kind = match VarKind::from_keyword(&parser.current_token().value) {
        Some(kind) => kind,
        None => return Err(parser.unexpected()),
    };
    let start = parser.advance().span.start.clone();

    let mut declarations = Vec::new();
    loop {
        let id = parse_identifier(parser)?;
        let init = if parser.eat(TokenKind::Operator, "=") {
            Some(parse_expr(parser)?)
        } else {
            None
        };

        declarations.push(VarDeclarator {
            span: parser.span_from(id.span.start.clone()),
            id,
            init,
        });

        if !parser.eat(TokenKind::Punctuator, ",") {
            break;
        }
    }

    parser.eat(TokenKind::Punctuator, ";");

    Ok(Stmt::VarDecl(VarDeclStmt {
        kind,
        declarations,
        span: parser.span_from(start),
    }))
}

pub fn parse_fn_decl_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let start = parser.advance().span.start.clone();

    let id = parse_identifier(parser)?;

    parser.expect_value(TokenKind::Punctuator, "(")?;

    let mut params = Vec::new();
    while !parser.is(TokenKind::Punctuator, ")") {
        params.push(parse_identifier(parser)?);

        if !parser.eat(TokenKind::Punctuator, ",") {
            break;
        }
    }

    parser.expect_value(TokenKind::Punctuator, ")")?;

    let body = parse_block(parser)?;

    Ok(Stmt::FnDecl(FnDeclStmt {
        id,
        params,
        body,
        span: parser.span_from(start),
    }))
}

pub fn parse_return_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let start = parser.advance().span.start.clone();

    let ends_here = parser.is(TokenKind::Punctuator, ";")
        || parser.is(TokenKind::Punctuator, "}")
        || !parser.has_tokens();
    let argument = if ends_here {
        None
    } else {
        Some(parse_expr(parser)?)
    };

    parser.eat(TokenKind::Punctuator, ";");

    Ok(Stmt::Return(ReturnStmt {
        argument,
        span: parser.span_from(start),
    }))
}

pub fn parse_if_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let start = parser.advance().span.start.clone();

    parser.expect_value(TokenKind::Punctuator, "(")?;
    let test = parse_expr(parser)?;
    parser.expect_value(TokenKind::Punctuator, ")")?;

    let consequent = Box::new(parse_branch(parser)?);

    let alternate = if parser.eat(TokenKind::Keyword, "else") {
        Some(Box::new(parse_branch(parser)?))
    } else {
        None
    };

    Ok(Stmt::If(IfStmt {
        test,
        consequent,
        alternate,
        span: parser.span_from(start),
    }))
}

/// Parses the body of an `if` or `else`: a block when one opens here, otherwise a single statement.
fn parse_branch(parser: &mut Parser) -> Result<Stmt, Error> {
    if parser.is(TokenKind::Punctuator, "{") {
        Ok(Stmt::Block(parse_block(parser)?))
    } else {
        parse_stmt(parser)
    }
}

pub fn parse_block(parser: &mut Parser) -> Result<BlockStmt, Error> {
    let start = parser
        .expect_value(TokenKind::Punctuator, "{")?
        .span
        .start;

    let mut body = Vec::new();
    while parser.has_tokens() && !parser.is(TokenKind::Punctuator, "}") {
        body.push(parse_stmt(parser)?);
    }

    parser.expect_value(TokenKind::Punctuator, "}")?;

    Ok(BlockStmt {
        body,
        span: parser.span_from(start),
    })
}

pub fn parse_identifier(parser: &mut Parser) -> Result<Identifier, Error> {
    let token = parser.expect(TokenKind::Identifier)?;

    Ok(Identifier {
        name: token.value,
        span: token.span,
    })
}
