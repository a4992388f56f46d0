//! Setup script front end: word model, lexer, and parser.

pub mod lexer;
pub mod parser;
pub mod types;
pub mod word_parser;

pub use lexer::{Lexer, Token};
pub use parser::Parser;
pub use types::{LexerError, ParseError, ParseException};

use std::io::BufRead;

use crate::ast::types::SequenceNode;

/// Parse a whole script from a buffered reader.
pub fn parse<R: BufRead>(reader: R) -> Result<SequenceNode, ParseError> {
    let lexer = Lexer::new(reader)?;
    Parser::new(lexer).parse()
}
