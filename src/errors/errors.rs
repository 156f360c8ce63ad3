use std::fmt::Display;

use thiserror::Error;

use crate::{lexer::tokens::TokenKind, Position};

#[derive(Error, Debug, Clone, PartialEq)]
#[error("{internal_error}")]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_error_impl(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => "UnrecognisedToken",
            ErrorImpl::ExpectedToken { .. } => "ExpectedToken",
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::NumberParseError { .. } => "NumberParseError",
            ErrorImpl::NestingTooDeep { .. } => "NestingTooDeep",
        }
    }

    /// Returns `true` for errors raised while parsing, as opposed to tokenizing.
    pub fn is_syntax_error(&self) -> bool {
        !matches!(self.internal_error, ErrorImpl::UnrecognisedToken { .. })
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => ErrorTip::None,
            ErrorImpl::ExpectedToken { expected, found } => {
                ErrorTip::Suggestion(format!("Expected {}, found {}", expected, found))
            }
            ErrorImpl::UnexpectedToken { found } if found.kind == TokenKind::EOF => {
                ErrorTip::Suggestion(String::from("Input ended where an expression was expected"))
            }
            ErrorImpl::UnexpectedToken { found } => ErrorTip::Suggestion(format!(
                "Unexpected {}, expected an expression",
                found
            )),
            ErrorImpl::NumberParseError { token } => {
                ErrorTip::Suggestion(format!("Invalid number: `{}`", token))
            }
            ErrorImpl::NestingTooDeep { limit } => ErrorTip::Suggestion(format!(
                "Nesting is limited to {} levels",
                limit
            )),
        }
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

/// A token as named in an error: its kind, and the exact text when it matters.
#[derive(Debug, Clone, PartialEq)]
pub struct TokenDescription {
    pub kind: TokenKind,
    pub value: Option<String>,
}

impl TokenDescription {
    pub fn kind(kind: TokenKind) -> Self {
        TokenDescription { kind, value: None }
    }

    pub fn exact(kind: TokenKind, value: impl Into<String>) -> Self {
        TokenDescription {
            kind,
            value: Some(value.into()),
        }
    }
}

impl Display for TokenDescription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (&self.kind, &self.value) {
            (TokenKind::EOF, _) => write!(f, "end of input"),
            (kind, Some(value)) => write!(f, "{} `{}`", kind, value),
            (kind, None) => write!(f, "{}", kind),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("unrecognised character: {token:?}")]
    UnrecognisedToken { token: String },
    #[error("expected {expected}, found {found}")]
    ExpectedToken {
        expected: TokenDescription,
        found: TokenDescription,
    },
    #[error("unexpected {found}")]
    UnexpectedToken { found: TokenDescription },
    #[error("error parsing number: {token:?}")]
    NumberParseError { token: String },
    #[error("nesting deeper than {limit} levels")]
    NestingTooDeep { limit: usize },
}
