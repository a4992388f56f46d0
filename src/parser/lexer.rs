//! Lexer for Setup Scripts
//!
//! Scans a line-buffered character stream into a flat token stream on
//! demand (pull model). The lexer holds a single current token and advances
//! to the next when asked; word scanning is delegated to the word parser.
//!
//! Every source line implicitly ends a command: when a line is exhausted
//! right after a word, a `Separator` is synthesized before the next line is
//! fetched. There is no line continuation; a command never spans two lines.

use std::fmt;
use std::io::BufRead;

use crate::ast::types::WordNode;
use crate::parser::types::LexerError;
use crate::parser::word_parser::{is_whitespace, parse_word};

/// A token produced by the lexer.
///
/// `End` is terminal and idempotent: once produced, every further request
/// yields `End` again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    Word(WordNode),
    Separator,
    End,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Word(word) => write!(f, "word {:?}", word.to_string()),
            Token::Separator => write!(f, "separator"),
            Token::End => write!(f, "end"),
        }
    }
}

/// Pull-based lexer over any buffered reader.
#[derive(Debug)]
pub struct Lexer<R> {
    reader: R,
    line: Vec<char>,
    pos: usize,
    token: Token,
}

impl<R: BufRead> Lexer<R> {
    /// Create a lexer and scan the first token.
    pub fn new(reader: R) -> Result<Self, LexerError> {
        let mut lexer = Self {
            reader,
            line: Vec::new(),
            pos: 0,
            // Start-of-input behaves like "just after a separator": an empty
            // line fetches the next one instead of synthesizing a separator.
            token: Token::Separator,
        };
        lexer.advance()?;
        Ok(lexer)
    }

    /// The current token.
    pub fn current(&self) -> &Token {
        &self.token
    }

    fn line_text(&self) -> String {
        self.line.iter().collect()
    }

    /// Advance to the next token and return it.
    ///
    /// After an error the lexer pins itself to `End`; it must not be resumed.
    pub fn advance(&mut self) -> Result<&Token, LexerError> {
        if self.token == Token::End {
            return Ok(&self.token);
        }
        loop {
            while self.pos < self.line.len() && is_whitespace(self.line[self.pos]) {
                self.pos += 1;
            }
            if self.pos == self.line.len() {
                if matches!(self.token, Token::Word(_)) {
                    self.token = Token::Separator;
                    return Ok(&self.token);
                }
                let mut buf = String::new();
                let read = self.reader.read_line(&mut buf).map_err(|e| {
                    self.token = Token::End;
                    LexerError::new(e.to_string(), self.line_text())
                })?;
                if read == 0 {
                    self.token = Token::End;
                    return Ok(&self.token);
                }
                if buf.ends_with('\n') {
                    buf.pop();
                }
                self.line = buf.chars().collect();
                self.pos = 0;
                continue;
            }
            match self.line[self.pos] {
                '#' => {
                    self.pos = self.line.len();
                }
                ';' => {
                    self.pos += 1;
                    self.token = Token::Separator;
                    return Ok(&self.token);
                }
                _ => match parse_word(&self.line, self.pos) {
                    Ok((next, word)) => {
                        self.pos = next;
                        self.token = Token::Word(word);
                        return Ok(&self.token);
                    }
                    Err(error) => {
                        self.token = Token::End;
                        return Err(error);
                    }
                },
            }
        }
    }
}
