//! Parser Types and Errors
//!
//! Error types shared across the lexing and parsing modules. Lexer errors
//! carry the offending source line, parser errors the offending token. Both
//! are fatal to the whole script: nothing executes after either.

use thiserror::Error;

use crate::parser::lexer::Token;

/// Error thrown when the lexer encounters malformed input.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{message} on line {line:?}")]
pub struct LexerError {
    pub message: String,
    /// The source line being scanned when the error occurred.
    pub line: String,
}

impl LexerError {
    pub fn new(message: impl Into<String>, line: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            line: line.into(),
        }
    }
}

/// Error thrown when a token appears where the grammar forbids it.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{message} on token {token}")]
pub struct ParseException {
    pub message: String,
    /// The token that could not be consumed.
    pub token: Token,
}

impl ParseException {
    pub fn new(message: impl Into<String>, token: Token) -> Self {
        Self {
            message: message.into(),
            token,
        }
    }
}

/// Any front-end failure: the whole script is rejected before anything runs.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    #[error(transparent)]
    Lexer(#[from] LexerError),
    #[error(transparent)]
    Parser(#[from] ParseException),
}
