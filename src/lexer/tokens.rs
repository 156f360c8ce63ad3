use lazy_static::lazy_static;
use std::{collections::HashSet, fmt::Display};

use crate::Span;

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashSet<&'static str> = {
        let mut set = HashSet::new();
        set.insert("var");
        set.insert("let");
        set.insert("const");
        set.insert("function");
        set.insert("return");
        set.insert("if");
        set.insert("else");
        set.insert("true");
        set.insert("false");
        set.insert("null");
        set
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    Number,
    String,
    Identifier,
    Keyword,
    Operator,
    Punctuator,
    EOF,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub span: Span,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} `{}`", self.kind, self.value)
    }
}

impl Token {
    /// Returns `true` if this token has the given kind and exact text.
    pub fn is(&self, kind: TokenKind, value: &str) -> bool {
        self.kind == kind && self.value == value
    }

    pub fn debug(&self) {
        if self.kind == TokenKind::EOF {
            println!("{:>5}  {}", self.span.start.0, self.kind);
        } else {
            println!(
                "{:>5}  {:<10} {}",
                self.span.start.0,
                self.kind.to_string(),
                self.value
            );
        }
    }
}
