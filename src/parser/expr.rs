use crate::{
    ast::expressions::{
        ArrayExpr, AssignmentExpr, BinaryExpr, CallExpr, Expr, Identifier, LiteralExpr,
        LiteralValue, MemberExpr, UnaryExpr,
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
    Span,
};

use super::{lookups::BindingPower, parser::Parser, stmt::parse_identifier};

/// Parses any expression. Each call is one level of nesting.
pub fn parse_expr(parser: &mut Parser) -> Result<Expr, Error> {
    parser.enter()?;
    let expr = parse_expr_at(parser, BindingPower::Assignment);
    parser.leave();

    expr
}

/// Parses an expression whose loosest operator binds at least as tightly as `bp`.
pub fn parse_expr_at(parser: &mut Parser, bp: BindingPower) -> Result<Expr, Error> {
    match bp {
        BindingPower::Assignment => parse_assignment_expr(parser),
        BindingPower::Relational | BindingPower::Additive | BindingPower::Multiplicative => {
            parse_binary_expr(parser, bp)
        }
        BindingPower::Unary => parse_prefix_expr(parser),
        BindingPower::Call => parse_call_member_expr(parser),
        BindingPower::Primary => parse_primary_expr(parser),
    }
}

fn span_between(start: &Span, end: &Span) -> Span {
    Span {
        start: start.start.clone(),
        end: end.end.clone(),
    }
}

/// `target = value`, right-associative.
pub fn parse_assignment_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let left = parse_expr_at(parser, BindingPower::Assignment.tighter())?;

    if parser.binding_power() != Some(BindingPower::Assignment) {
        return Ok(left);
    }

    let operator = parser.advance().value.clone();
    let right = parse_expr(parser)?;

    Ok(Expr::Assignment(AssignmentExpr {
        span: span_between(left.get_span(), right.get_span()),
        operator,
        left: Box::new(left),
        right: Box::new(right),
    }))
}

/// One left-associative binary level: relational, additive or multiplicative.
pub fn parse_binary_expr(parser: &mut Parser, bp: BindingPower) -> Result<Expr, Error> {
    let mut left = parse_expr_at(parser, bp.tighter())?;

    while parser.binding_power() == Some(bp) {
        let operator = parser.advance().value.clone();
        let right = parse_expr_at(parser, bp.tighter())?;

        left = Expr::Binary(BinaryExpr {
            span: span_between(left.get_span(), right.get_span()),
            operator,
            left: Box::new(left),
            right: Box::new(right),
        });
    }

    Ok(left)
}

pub fn parse_prefix_expr(parser: &mut Parser) -> Result<Expr, Error> {
    if !parser.at_prefix_operator() {
        return parse_expr_at(parser, BindingPower::Unary.tighter());
    }

    parser.enter()?;
    let operator_token = parser.advance().clone();
    let argument = parse_prefix_expr(parser);
    parser.leave();
    let argument = argument?;

    Ok(Expr::Unary(UnaryExpr {
        span: span_between(&operator_token.span, argument.get_span()),
        operator: operator_token.value,
        prefix: true,
        argument: Box::new(argument),
    }))
}

/// A primary expression followed by any chain of calls, `.name` and `[expr]` accesses.
pub fn parse_call_member_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let mut expr = parse_expr_at(parser, BindingPower::Primary)?;

    loop {
        expr = if parser.is(TokenKind::Punctuator, "(") {
            parse_call_expr(parser, expr)?
        } else if parser.is(TokenKind::Punctuator, ".") {
            parse_member_expr(parser, expr)?
        } else if parser.is(TokenKind::Punctuator, "[") {
            parse_computed_member_expr(parser, expr)?
        } else {
            break;
        };
    }

    Ok(expr)
}

pub fn parse_call_expr(parser: &mut Parser, callee: Expr) -> Result<Expr, Error> {
    parser.advance();

    let arguments = parse_expr_list(parser, ")")?;

    parser.expect_value(TokenKind::Punctuator, ")")?;

    Ok(Expr::Call(CallExpr {
        span: parser.span_from(callee.get_span().start.clone()),
        callee: Box::new(callee),
        arguments,
    }))
}

pub fn parse_member_expr(parser: &mut Parser, object: Expr) -> Result<Expr, Error> {
    parser.advance();

    let property = parse_identifier(parser)?;

    Ok(Expr::Member(MemberExpr {
        span: span_between(object.get_span(), &property.span),
        object: Box::new(object),
        property: Box::new(Expr::Identifier(property)),
        computed: false,
    }))
}

pub fn parse_computed_member_expr(parser: &mut Parser, object: Expr) -> Result<Expr, Error> {
    parser.advance();

    let property = parse_expr(parser)?;

    parser.expect_value(TokenKind::Punctuator, "]")?;

    Ok(Expr::Member(MemberExpr {
        span: parser.span_from(object.get_span().start.clone()),
        object: Box::new(object),
        property: Box::new(property),
        computed: true,
    }))
}

/// Comma-separated expressions up to (not including) the `close` punctuator.
/// A trailing comma is accepted.
fn parse_expr_list(parser: &mut Parser, close: &str) -> Result<Vec<Expr>, Error> {
    let mut items = vec![];

    while !parser.is(TokenKind::Punctuator, close) {
        items.push(parse_expr(parser)?);

        if !parser.eat(TokenKind::Punctuator, ",") {
            break;
        }
    }

    Ok(items)
}

pub fn parse_primary_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let token = parser.current_token().clone();

    let value = match token.kind {
        TokenKind::Number => match token.value.parse() {
            Ok(value) => LiteralValue::Number(value),
            Err(_) => {
                return Err(Error::new(
                    ErrorImpl::NumberParseError { token: token.value },
                    token.span.start,
                ))
            }
        },
        TokenKind::String => LiteralValue::String(token.value.clone()),
        TokenKind::Keyword => match token.value.as_str() {
            "true" => LiteralValue::Boolean(true),
            "false" => LiteralValue::Boolean(false),
            "null" => LiteralValue::Null,
            _ => return Err(parser.unexpected()),
        },
        TokenKind::Identifier => {
            parser.advance();
            return Ok(Expr::Identifier(Identifier {
                name: token.value,
                span: token.span,
            }));
        }
        TokenKind::Punctuator if token.value == "(" => return parse_grouping_expr(parser),
        TokenKind::Punctuator if token.value == "[" => return parse_array_expr(parser),
        _ => return Err(parser.unexpected()),
    };

    parser.advance();

    Ok(Expr::Literal(LiteralExpr {
        value,
        raw: token.value,
        span: token.span,
    }))
}

pub fn parse_grouping_expr(parser: &mut Parser) -> Result<Expr, Error> {
    parser.advance();
    let expr = parse_expr(parser)?;
    parser.expect_value(TokenKind::Punctuator, ")")?;

    Ok(expr)
}

pub fn parse_array_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let start = parser.advance().span.start.clone();

    let elements = parse_expr_list(parser, "]")?;

    parser.expect_value(TokenKind::Punctuator, "]")?;

    Ok(Expr::Array(ArrayExpr {
        elements,
        span: parser.span_from(start),
    }))
}
