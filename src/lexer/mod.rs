//! Lexical analysis module.
//!
//! This module contains the lexer (tokenizer) that converts source code
//! into a stream of tokens for parsing. It handles:
//!
//! - Tokenization of source code using an ordered table of regex patterns
//! - Recognition of keywords, identifiers, literals, operators and punctuation
//! - Token position tracking for error reporting
//! - Whitespace handling and silent skipping of unrecognised characters

pub mod lexer;
pub mod tokens;
