use std::fmt::Display;

use crate::Span;

use super::ast::ExprType;

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Identifier(Identifier),
    Literal(LiteralExpr),
    Binary(BinaryExpr),
    Unary(UnaryExpr),
    Assignment(AssignmentExpr),
    Call(CallExpr),
    Member(MemberExpr),
    Array(ArrayExpr),
}

impl Expr {
    pub fn get_expr_type(&self) -> ExprType {
        match self {
            Expr::Identifier(_) => ExprType::Identifier,
            Expr::Literal(_) => ExprType::Literal,
            Expr::Binary(_) => ExprType::BinaryExpression,
            Expr::Unary(_) => ExprType::UnaryExpression,
            Expr::Assignment(_) => ExprType::AssignmentExpression,
            Expr::Call(_) => ExprType::CallExpression,
            Expr::Member(_) => ExprType::MemberExpression,
            Expr::Array(_) => ExprType::ArrayExpression,
        }
    }

    pub fn get_span(&self) -> &Span {
        match self {
            Expr::Identifier(expr) => &expr.span,
            Expr::Literal(expr) => &expr.span,
            Expr::Binary(expr) => &expr.span,
            Expr::Unary(expr) => &expr.span,
            Expr::Assignment(expr) => &expr.span,
            Expr::Call(expr) => &expr.span,
            Expr::Member(expr) => &expr.span,
            Expr::Array(expr) => &expr.span,
        }
    }
}

// LITERALS

#[derive(Debug, Clone, PartialEq)]
pub struct Identifier {
    pub name: String,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub enum LiteralValue {
    Number(f64),
    String(String),
    Boolean(bool),
    Null,
}

/// Formats the value the way it appears in printed trees: strings quoted,
/// everything else bare.
impl Display for LiteralValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LiteralValue::Number(value) => write!(f, "{}", value),
            LiteralValue::String(value) => write!(f, "{:?}", value),
            LiteralValue::Boolean(value) => write!(f, "{}", value),
            LiteralValue::Null => write!(f, "null"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LiteralExpr {
    pub value: LiteralValue,
    /// The token text the literal was read from.
    pub raw: String,
    pub span: Span,
}

// OPERATORS

#[derive(Debug, Clone, PartialEq)]
pub struct BinaryExpr {
    pub operator: String,
    pub left: Box<Expr>,
    pub right: Box<Expr>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UnaryExpr {
    pub operator: String,
    /// Always `true`: only prefix operators exist.
    pub prefix: bool,
    pub argument: Box<Expr>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AssignmentExpr {
    pub operator: String,
    pub left: Box<Expr>,
    pub right: Box<Expr>,
    pub span: Span,
}

// ACCESS

#[derive(Debug, Clone, PartialEq)]
pub struct CallExpr {
    pub callee: Box<Expr>,
    pub arguments: Vec<Expr>,
    pub span: Span,
}

/// `object.property` when not `computed`, `object[property]` otherwise.
#[derive(Debug, Clone, PartialEq)]
pub struct MemberExpr {
    pub object: Box<Expr>,
    pub property: Box<Expr>,
    pub computed: bool,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ArrayExpr {
    pub elements: Vec<Expr>,
    pub span: Span,
}
