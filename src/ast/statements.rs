use std::fmt::Display;

use crate::Span;

use super::{
    ast::StmtType,
    expressions::{Expr, Identifier},
};

#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    VarDecl(VarDeclStmt),
    FnDecl(FnDeclStmt),
    Block(BlockStmt),
    Return(ReturnStmt),
    If(IfStmt),
    Expression(ExpressionStmt),
}

impl Stmt {
    pub fn get_stmt_type(&self) -> StmtType {
        match self {
            Stmt::VarDecl(_) => StmtType::VariableDeclaration,
            Stmt::FnDecl(_) => StmtType::FunctionDeclaration,
            Stmt::Block(_) => StmtType::BlockStatement,
            Stmt::Return(_) => StmtType::ReturnStatement,
            Stmt::If(_) => StmtType::IfStatement,
            Stmt::Expression(_) => StmtType::ExpressionStatement,
        }
    }

    pub fn get_span(&self) -> &Span {
        match self {
            Stmt::VarDecl(stmt) => &stmt.span,
            Stmt::FnDecl(stmt) => &stmt.span,
            Stmt::Block(stmt) => &stmt.span,
            Stmt::Return(stmt) => &stmt.span,
            Stmt::If(stmt) => &stmt.span,
            Stmt::Expression(stmt) => &stmt.span,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BlockStmt {
    pub body: Vec<Stmt>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExpressionStmt {
    pub expression: Expr,
    pub span: Span,
}

/// The keyword a variable declaration was introduced with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VarKind {
    Var,
    Let,
    Const,
}

impl VarKind {
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "var" => Some(VarKind::Var),
            "let" => Some(VarKind::Let),
            "const" => Some(VarKind::Const),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            VarKind::Var => "var",
            VarKind::Let => "let",
            VarKind::Const => "const",
        }
    }
}

impl Display for VarKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct VarDeclStmt {
    pub kind: VarKind,
    pub declarations: Vec<VarDeclarator>,
    pub span: Span,
}

/// One `name [= init]` entry of a variable declaration.
#[derive(Debug, Clone, PartialEq)]
pub struct VarDeclarator {
    pub id: Identifier,
    pub init: Option<Expr>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FnDeclStmt {
    pub id: Identifier,
    pub params: Vec<Identifier>,
    pub body: BlockStmt,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReturnStmt {
    pub argument: Option<Expr>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct IfStmt {
    pub test: Expr,
    pub consequent: Box<Stmt>,
    pub alternate: Option<Box<Stmt>>,
    pub span: Span,
}
