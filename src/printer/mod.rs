//! AST printing.
//!
//! Renders any node of the tree as indented text for diagnostics and tests.
//! Printing has no effect on parsing.

pub mod printer;

#[cfg(test)]
mod tests;
