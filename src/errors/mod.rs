//! Error types and error handling for the tokenizer and parser.
//!
//! This module defines the error types produced while turning source text
//! into an AST. It includes:
//!
//! - Error structures with source position information
//! - Specific error variants for tokenizing and parsing failures
//! - Helpful error messages and suggestions

pub mod errors;
