//! Utility macros for the tokenizer.
//!
//! This module defines helper macros used by the lexer:
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_DEFAULT_HANDLER!` - Creates a default lexer handler that emits the matched text
//!
//! These macros reduce boilerplate in the lexer implementation.

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$value` - The token's string value
/// * `$span` - The source span
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Number, "42".to_string(), span);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $value:expr, $span:expr) => {
        $crate::lexer::tokens::Token {
            kind: $kind,
            value: $value,
            span: $span,
        }
    };
}

/// Creates a default lexer handler that emits the whole match as one token.
///
/// Generates a handler function that creates a token of the given kind whose
/// value is the matched source text, then advances the lexer past the match.
///
/// # Arguments
///
/// * `$kind` - The TokenKind to create
///
/// # Example
///
/// ```ignore
/// RegexPattern {
///     regex: Regex::new(r"^[(){}\[\];,.]").unwrap(),
///     handler: MK_DEFAULT_HANDLER!(TokenKind::Punctuator),
/// }
/// ```
#[macro_export]
macro_rules! MK_DEFAULT_HANDLER {
    ($kind:expr) => {
        |lexer: &mut $crate::lexer::lexer::Lexer, len: usize| {
            let span = lexer.span(len);
            let value = lexer.slice(len).to_string();
            lexer.push($crate::MK_TOKEN!($kind, value, span));
            lexer.advance_n(len);
        }
    };
}
