//! Parser for Setup Scripts
//!
//! Recursive-descent builder over the lexer's token stream. One token of
//! lookahead (the lexer's current token) suffices; there is no backtracking.
//!
//! Grammar:
//! ```text
//! sequence := (command | SEPARATOR)* END
//! command  := WORD+          ; terminated by SEPARATOR (consumed) or END
//! ```

use std::io::BufRead;

use crate::ast::types::{CommandNode, SequenceNode};
use crate::parser::lexer::{Lexer, Token};
use crate::parser::types::{ParseError, ParseException};

pub struct Parser<R> {
    lexer: Lexer<R>,
}

impl<R: BufRead> Parser<R> {
    pub fn new(lexer: Lexer<R>) -> Self {
        Self { lexer }
    }

    /// Parse the whole input into a sequence.
    pub fn parse(mut self) -> Result<SequenceNode, ParseError> {
        self.parse_sequence()
    }

    fn parse_sequence(&mut self) -> Result<SequenceNode, ParseError> {
        let mut commands = Vec::new();
        loop {
            match self.lexer.current() {
                Token::End => return Ok(SequenceNode::new(commands)),
                Token::Separator => {
                    self.lexer.advance()?;
                }
                Token::Word(_) => commands.push(self.parse_command()?),
            }
        }
    }

    /// Consume consecutive words into one command. The terminating separator
    /// is consumed; a terminating End is left in place.
    ///
    /// The first token must be a word; anything else is an "unexpected token"
    /// error. Unreachable from `parse_sequence` with the current token set,
    /// guarded defensively.
    fn parse_command(&mut self) -> Result<CommandNode, ParseError> {
        let mut words = Vec::new();
        match self.lexer.current() {
            Token::Word(word) => {
                words.push(word.clone());
                self.lexer.advance()?;
            }
            token => {
                return Err(ParseException::new("unexpected token", token.clone()).into());
            }
        }
        loop {
            match self.lexer.current() {
                Token::Word(word) => {
                    words.push(word.clone());
                    self.lexer.advance()?;
                }
                Token::Separator => {
                    self.lexer.advance()?;
                    return Ok(CommandNode::new(words));
                }
                Token::End => return Ok(CommandNode::new(words)),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::types::{Segment, WordNode};
    use std::io::Cursor;

    fn parse(input: &str) -> SequenceNode {
        let lexer = Lexer::new(Cursor::new(input)).unwrap();
        Parser::new(lexer).parse().unwrap()
    }

    fn raw(value: &str) -> WordNode {
        WordNode::new(vec![Segment::Raw(value.to_string())])
    }

    #[test]
    fn test_empty_script() {
        assert_eq!(parse(""), SequenceNode::default());
    }

    #[test]
    fn test_comment_only_script() {
        assert_eq!(parse("# nothing\n# here\n"), SequenceNode::default());
    }

    #[test]
    fn test_separator_only_script() {
        assert_eq!(parse(";;;\n;\n"), SequenceNode::default());
    }

    #[test]
    fn test_single_command() {
        assert_eq!(
            parse("echo hi"),
            SequenceNode::new(vec![CommandNode::new(vec![raw("echo"), raw("hi")])])
        );
    }

    #[test]
    fn test_commands_split_on_separator() {
        assert_eq!(
            parse("set X 1; echo ${X}"),
            SequenceNode::new(vec![
                CommandNode::new(vec![raw("set"), raw("X"), raw("1")]),
                CommandNode::new(vec![
                    raw("echo"),
                    WordNode::new(vec![Segment::Variable("X".to_string())]),
                ]),
            ])
        );
    }

    #[test]
    fn test_one_command_per_line() {
        let sequence = parse("first one\nsecond two three\n\nthird\n");
        assert_eq!(
            sequence,
            SequenceNode::new(vec![
                CommandNode::new(vec![raw("first"), raw("one")]),
                CommandNode::new(vec![raw("second"), raw("two"), raw("three")]),
                CommandNode::new(vec![raw("third")]),
            ])
        );
    }

    #[test]
    fn test_plain_lines_whitespace_split() {
        // With no comments, separators, quotes, variables, or escapes, each
        // non-blank line is one command of its whitespace-split words.
        let input = "alpha beta gamma\n\ndelta  epsilon\n";
        let sequence = parse(input);
        let expected: Vec<CommandNode> = input
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(|line| CommandNode::new(line.split_whitespace().map(raw).collect()))
            .collect();
        assert_eq!(sequence, SequenceNode::new(expected));
    }

    #[test]
    fn test_quoted_word_stays_one_word() {
        assert_eq!(
            parse("\"a b\" c"),
            SequenceNode::new(vec![CommandNode::new(vec![
                WordNode::new(vec![Segment::Quoted(vec![Segment::Raw("a b".to_string())])]),
                raw("c"),
            ])])
        );
    }

    #[test]
    fn test_lexer_error_propagates() {
        // The bad escape is past the first token, so it surfaces mid-parse.
        let lexer = Lexer::new(Cursor::new("ok\necho \\z")).unwrap();
        let err = Parser::new(lexer).parse().unwrap_err();
        assert!(matches!(err, ParseError::Lexer(_)));
    }
}
