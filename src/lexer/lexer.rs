use std::sync::Arc;

use lazy_static::lazy_static;
use regex::Regex;

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position, Span, MK_DEFAULT_HANDLER, MK_TOKEN,
};

use super::tokens::{Token, TokenKind, RESERVED_LOOKUP};

/// Consumes `len` bytes of matched input at the cursor.
pub type RegexHandler = fn(&mut Lexer, usize);

pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler,
}

lazy_static! {
    /// Tried in order at the cursor; the first pattern that matches wins.
    static ref PATTERNS: Vec<RegexPattern> = vec![
        RegexPattern { regex: Regex::new(r"^\s+").unwrap(), handler: skip_handler },
        RegexPattern { regex: Regex::new(r"^[A-Za-z_$][A-Za-z0-9_$]*").unwrap(), handler: symbol_handler },
        RegexPattern { regex: Regex::new(r"^[0-9]+(\.[0-9]*)?").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Number) },
        RegexPattern { regex: Regex::new(r#"^"[^"]*"?"#).unwrap(), handler: string_handler },
        RegexPattern { regex: Regex::new(r"^'[^']*'?").unwrap(), handler: string_handler },
        RegexPattern { regex: Regex::new(r"^[=+\-*/%<>!&|][=<>&|]{0,2}").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Operator) },
        RegexPattern { regex: Regex::new(r"^[(){}\[\];,.]").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Punctuator) },
    ];
}

/// A character the tokenizer dropped because no pattern matched it.
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedChar {
    pub character: char,
    pub position: Position,
}

/// The full result of a scan: the token stream plus everything that was skipped.
#[derive(Debug, Clone)]
pub struct Scan {
    pub tokens: Vec<Token>,
    pub skipped: Vec<SkippedChar>,
}

pub struct Lexer {
    tokens: Vec<Token>,
    skipped: Vec<SkippedChar>,
    source: String,
    pos: usize,
    file: Arc<String>,
}

impl Lexer {
    pub fn new(source: &str, file: Option<String>) -> Lexer {
        let file_name = if let Some(file) = file {
            Arc::new(file)
        } else {
            Arc::new(String::from("shell"))
        };

        Lexer {
            tokens: vec![],
            skipped: vec![],
            source: source.to_string(),
            pos: 0,
            file: file_name,
        }
    }

    pub fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    pub fn at(&self) -> Option<char> {
        self.remainder().chars().next()
    }

    pub fn remainder(&self) -> &str {
        &self.source[self.pos..]
    }

    /// The next `len` bytes of input.
    pub fn slice(&self, len: usize) -> &str {
        &self.source[self.pos..self.pos + len]
    }

    pub fn position(&self) -> Position {
        Position(self.pos as u32, Arc::clone(&self.file))
    }

    /// The span of the next `len` bytes of input.
    pub fn span(&self, len: usize) -> Span {
        Span {
            start: self.position(),
            end: Position((self.pos + len) as u32, Arc::clone(&self.file)),
        }
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    fn skip_char(&mut self) {
        if let Some(character) = self.at() {
            self.skipped.push(SkippedChar {
                character,
                position: self.position(),
            });
            self.advance_n(character.len_utf8());
        }
    }

    /// Runs the scan to the end of the input and terminates the stream with `EOF`.
    pub fn run(mut self) -> Scan {
        while !self.at_eof() {
            let matched = PATTERNS.iter().find_map(|pattern| {
                pattern
                    .regex
                    .find(self.remainder())
                    .filter(|m| !m.is_empty())
                    .map(|m| (pattern.handler, m.end()))
            });

            match matched {
                Some((handler, len)) => handler(&mut self, len),
                None => self.skip_char(),
            }
        }

        let eof = MK_TOKEN!(TokenKind::EOF, String::from("EOF"), self.span(0));
        self.push(eof);

        Scan {
            tokens: self.tokens,
            skipped: self.skipped,
        }
    }
}

fn skip_handler(lexer: &mut Lexer, len: usize) {
    lexer.advance_n(len);
}

fn string_handler(lexer: &mut Lexer, len: usize) {
    let span = lexer.span(len);
    let matched = lexer.slice(len);

    let mut chars = matched.chars();
    let quote = chars.next();
    let body = chars.as_str();
    let string_literal = match quote {
        Some(quote) if body.ends_with(quote) => &body[..body.len() - quote.len_utf8()],
        _ => body,
    }
    .to_string();

    lexer.push(MK_TOKEN!(TokenKind::String, string_literal, span));
    lexer.advance_n(len);
}

fn symbol_handler(lexer: &mut Lexer, len: usize) {
    let span = lexer.span(len);
    let value = lexer.slice(len).to_string();

    let kind = if RESERVED_LOOKUP.contains(value.as_str()) {
        TokenKind::Keyword
    } else {
        TokenKind::Identifier
    };

    lexer.push(MK_TOKEN!(kind, value, span));
    lexer.advance_n(len);
}

/// Scans `source`, reporting skipped characters alongside the tokens.
pub fn scan(source: &str, file: Option<String>) -> Scan {
    Lexer::new(source, file).run()
}

/// Tokenizes `source`. Never fails: characters no pattern recognises are dropped.
/// The result always ends with exactly one `EOF` token.
pub fn tokenize(source: &str, file: Option<String>) -> Vec<Token> {
    scan(source, file).tokens
}

/// Like [`tokenize`], but an unrecognised character is an error instead of being dropped.
pub fn tokenize_strict(source: &str, file: Option<String>) -> Result<Vec<Token>, Error> {
    let scan = scan(source, file);

    match scan.skipped.into_iter().next() {
        Some(skipped) => Err(Error::new(
            ErrorImpl::UnrecognisedToken {
                token: skipped.character.to_string(),
            },
            skipped.position,
        )),
        None => Ok(scan.tokens),
    }
}
