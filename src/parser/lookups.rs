use std::collections::{HashMap, HashSet};

use crate::{ast::statements::Stmt, errors::errors::Error};

use super::{parser::Parser, stmt::*};

/// Precedence levels, loosest first.
#[derive(PartialEq, PartialOrd, Clone, Copy, Debug)]
pub enum BindingPower {
    Assignment,
    Relational,
    Additive,
    Multiplicative,
    Unary,
    Call,
    Primary,
}

impl BindingPower {
    /// The next tighter level. `Primary` is the tightest.
    pub fn tighter(self) -> Self {
        match self {
            BindingPower::Assignment => BindingPower::Relational,
            BindingPower::Relational => BindingPower::Additive,
            BindingPower::Additive => BindingPower::Multiplicative,
            BindingPower::Multiplicative => BindingPower::Unary,
            BindingPower::Unary => BindingPower::Call,
            BindingPower::Call | BindingPower::Primary => BindingPower::Primary,
        }
    }
}

pub type StmtHandler = fn(&mut Parser) -> Result<Stmt, Error>;

pub fn create_token_lookups(parser: &mut Parser) {
    parser.infix("=", BindingPower::Assignment);

    // Relational
    parser.infix("==", BindingPower::Relational);
    parser.infix("===", BindingPower::Relational);
    parser.infix("!=", BindingPower::Relational);
    parser.infix("!==", BindingPower::Relational);
    parser.infix("<", BindingPower::Relational);
    parser.infix(">", BindingPower::Relational);
    parser.infix("<=", BindingPower::Relational);
    parser.infix(">=", BindingPower::Relational);

    // Additive and multiplicative
    parser.infix("+", BindingPower::Additive);
    parser.infix("-", BindingPower::Additive);
    parser.infix("*", BindingPower::Multiplicative);
    parser.infix("/", BindingPower::Multiplicative);
    parser.infix("%", BindingPower::Multiplicative);

    // Prefix
    parser.prefix("!");
    parser.prefix("-");
    parser.prefix("+");

    // Statements
    parser.stmt("var", parse_var_decl_stmt);
    parser.stmt("let", parse_var_decl_stmt);
    parser.stmt("const", parse_var_decl_stmt);
    parser.stmt("function", parse_fn_decl_stmt);
    parser.stmt("return", parse_return_stmt);
    parser.stmt("if", parse_if_stmt);
}

// Lookup tables inside parser struct, so it's easier
pub type StmtLookup = HashMap<&'static str, StmtHandler>;
pub type BPLookup = HashMap<&'static str, BindingPower>;
pub type PrefixLookup = HashSet<&'static str>;
