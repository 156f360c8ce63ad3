use std::fmt::Display;

use crate::Span;

use super::{
    expressions::{Expr, Identifier},
    statements::{BlockStmt, Stmt, VarDeclarator},
};

/// The root of every parse: the top-level statements in source order.
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    pub body: Vec<Stmt>,
    pub span: Span,
}

impl Program {
    pub fn iter(&self) -> std::slice::Iter<'_, Stmt> {
        self.body.iter()
    }
}

/// Statement Types
///
/// Displays as the ESTree node type name.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum StmtType {
    VariableDeclaration,
    FunctionDeclaration,
    BlockStatement,
    ReturnStatement,
    IfStatement,
    ExpressionStatement,
}

impl Display for StmtType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Expression Types
///
/// Displays as the ESTree node type name.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum ExprType {
    Identifier,
    Literal,
    BinaryExpression,
    UnaryExpression,
    AssignmentExpression,
    CallExpression,
    MemberExpression,
    ArrayExpression,
}

impl Display for ExprType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// A borrowed reference to any node of the tree.
#[derive(Debug, Clone, Copy)]
pub enum Node<'a> {
    Program(&'a Program),
    Stmt(&'a Stmt),
    Block(&'a BlockStmt),
    Declarator(&'a VarDeclarator),
    Expr(&'a Expr),
    Identifier(&'a Identifier),
}

impl<'a> Node<'a> {
    /// The ESTree type name of the node.
    pub fn type_name(&self) -> String {
        match self {
            Node::Program(_) => String::from("Program"),
            Node::Stmt(stmt) => stmt.get_stmt_type().to_string(),
            Node::Block(_) => StmtType::BlockStatement.to_string(),
            Node::Declarator(_) => String::from("VariableDeclarator"),
            Node::Expr(expr) => expr.get_expr_type().to_string(),
            Node::Identifier(_) => ExprType::Identifier.to_string(),
        }
    }
}

impl<'a> From<&'a Program> for Node<'a> {
    fn from(program: &'a Program) -> Self {
        Node::Program(program)
    }
}

impl<'a> From<&'a Stmt> for Node<'a> {
    fn from(stmt: &'a Stmt) -> Self {
        Node::Stmt(stmt)
    }
}

impl<'a> From<&'a BlockStmt> for Node<'a> {
    fn from(block: &'a BlockStmt) -> Self {
        Node::Block(block)
    }
}

impl<'a> From<&'a VarDeclarator> for Node<'a> {
    fn from(declarator: &'a VarDeclarator) -> Self {
        Node::Declarator(declarator)
    }
}

impl<'a> From<&'a Expr> for Node<'a> {
    fn from(expr: &'a Expr) -> Self {
        Node::Expr(expr)
    }
}

impl<'a> From<&'a Identifier> for Node<'a> {
    fn from(identifier: &'a Identifier) -> Self {
        Node::Identifier(identifier)
    }
}
