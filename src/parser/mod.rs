//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module contains the parser that transforms a stream of tokens
//! into an Abstract Syntax Tree. It handles:
//!
//! - Statement parsing dispatched on keywords (declarations, functions, control flow)
//! - Expression parsing by precedence level (assignment down to primary)
//! - Structured errors for the first unmet expectation
//!
//! Infix operators are looked up in a binding power table, so each binary
//! level only loops while the current operator belongs to it.

pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;
