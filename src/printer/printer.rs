//! Indented text rendering of the AST.
//!
//! Every node prints its type tag, then its fields two spaces deeper. Child
//! nodes go two further under a `name:` line, so a tree reads top-down:
//!
//! ```text
//! ExpressionStatement
//!   expression:
//!     Identifier
//!       name: "x"
//! ```

use crate::ast::{
    ast::Node,
    expressions::{Expr, Identifier},
    statements::{BlockStmt, Stmt, VarDeclarator},
};

const INDENT: usize = 2;

/// Renders `node` and everything beneath it. Lines are joined with `\n`,
/// without a trailing newline.
pub fn print_ast<'a>(node: impl Into<Node<'a>>) -> String {
    let mut printer = AstPrinter::default();
    printer.node(node.into(), 0);
    printer.lines.join("\n")
}

#[derive(Default)]
struct AstPrinter {
    lines: Vec<String>,
}

impl AstPrinter {
    fn line(&mut self, indent: usize, text: impl AsRef<str>) {
        self.lines
            .push(format!("{:indent$}{}", "", text.as_ref(), indent = indent));
    }

    fn scalar(&mut self, indent: usize, name: &str, value: impl std::fmt::Display) {
        self.line(indent, format!("{}: {}", name, value));
    }

    fn quoted(&mut self, indent: usize, name: &str, value: &str) {
        self.line(indent, format!("{}: {:?}", name, value));
    }

    fn child<'a>(&mut self, indent: usize, name: &str, node: impl Into<Node<'a>>) {
        self.line(indent, format!("{}:", name));
        self.node(node.into(), indent + INDENT);
    }

    fn optional<'a, T: 'a>(&mut self, indent: usize, name: &str, node: Option<&'a T>)
    where
        &'a T: Into<Node<'a>>,
    {
        match node {
            Some(node) => self.child(indent, name, node),
            None => self.scalar(indent, name, "null"),
        }
    }

    fn list<'a, T: 'a>(&mut self, indent: usize, name: &str, nodes: &'a [T])
    where
        &'a T: Into<Node<'a>>,
    {
        if nodes.is_empty() {
            self.scalar(indent, name, "[]");
            return;
        }

        self.line(indent, format!("{}:", name));
        for node in nodes {
            self.node(node.into(), indent + INDENT);
        }
    }

    fn node(&mut self, node: Node<'_>, indent: usize) {
        self.line(indent, node.type_name());
        let fields = indent + INDENT;

        match node {
            Node::Program(program) => self.list(fields, "body", &program.body),
            Node::Stmt(stmt) => self.stmt(stmt, fields),
            Node::Block(block) => self.block(block, fields),
            Node::Declarator(declarator) => self.declarator(declarator, fields),
            Node::Expr(expr) => self.expr(expr, fields),
            Node::Identifier(identifier) => self.identifier(identifier, fields),
        }
    }

    fn block(&mut self, block: &BlockStmt, indent: usize) {
        self.list(indent, "body", &block.body);
    }

    fn declarator(&mut self, declarator: &VarDeclarator, indent: usize) {
        self.child(indent, "id", &declarator.id);
        self.optional(indent, "init", declarator.init.as_ref());
    }

    fn identifier(&mut self, identifier: &Identifier, indent: usize) {
        self.quoted(indent, "name", &identifier.name);
    }

    fn stmt(&mut self, stmt: &Stmt, indent: usize) {
        match stmt {
            Stmt::VarDecl(decl) => {
                self.quoted(indent, "kind", decl.kind.as_str());
                self.list(indent, "declarations", &decl.declarations);
            }
            Stmt::FnDecl(decl) => {
                self.child(indent, "id", &decl.id);
                self.list(indent, "params", &decl.params);
                self.child(indent, "body", &decl.body);
            }
            Stmt::Block(block) => self.block(block, indent),
            Stmt::Return(ret) => self.optional(indent, "argument", ret.argument.as_ref()),
            Stmt::If(stmt) => {
                self.child(indent, "test", &stmt.test);
                self.child(indent, "consequent", &*stmt.consequent);
                self.optional(indent, "alternate", stmt.alternate.as_deref());
            }
            Stmt::Expression(stmt) => self.child(indent, "expression", &stmt.expression),
        }
    }

    fn expr(&mut self, expr: &Expr, indent: usize) {
        match expr {
            Expr::Identifier(identifier) => self.identifier(identifier, indent),
            Expr::Literal(literal) => {
                self.scalar(indent, "value", &literal.value);
                self.quoted(indent, "raw", &literal.raw);
            }
            Expr::Binary(binary) => {
                self.quoted(indent, "operator", &binary.operator);
                self.child(indent, "left", &*binary.left);
                self.child(indent, "right", &*binary.right);
            }
            Expr::Unary(unary) => {
                self.quoted(indent, "operator", &unary.operator);
                self.scalar(indent, "prefix", unary.prefix);
                self.child(indent, "argument", &*unary.argument);
            }
            Expr::Assignment(assignment) => {
                self.quoted(indent, "operator", &assignment.operator);
                self.child(indent, "left", &*assignment.left);
                self.child(indent, "right", &*assignment.right);
            }
            Expr::Call(call) => {
                self.child(indent, "callee", &*call.callee);
                self.list(indent, "arguments", &call.arguments);
            }
            Expr::Member(member) => {
                self.child(indent, "object", &*member.object);
                self.child(indent, "property", &*member.property);
                self.scalar(indent, "computed", member.computed);
            }
            Expr::Array(array) => self.list(indent, "elements", &array.elements),
        }
    }
}
