//! Abstract Syntax Tree Types for Setup Scripts
//!
//! A parsed script is a `SequenceNode` of `CommandNode`s, each command an
//! ordered list of `WordNode`s. Words are built from `Segment`s: raw text,
//! variable references resolved at execution time, and quoted groups whose
//! content keeps whitespace literal.
//!
//! All nodes are immutable values with structural equality. `Display` renders
//! a node back to script syntax; re-lexing the rendering yields a
//! structurally equal node.

use std::fmt;

/// One piece of a word.
///
/// A quoted group only ever contains `Raw` and `Variable` segments; the
/// grammar cannot produce nested quotes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// A literal text fragment.
    Raw(String),
    /// A reference to a variable, looked up when the command runs.
    Variable(String),
    /// A double-quoted group: whitespace inside is literal.
    Quoted(Vec<Segment>),
}

/// One shell-like argument: an ordered list of segments.
///
/// A word with zero segments is valid and resolves to the empty string.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WordNode {
    pub segments: Vec<Segment>,
}

impl WordNode {
    pub fn new(segments: Vec<Segment>) -> Self {
        Self { segments }
    }
}

/// One command: a non-empty list of words, the first naming the command.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CommandNode {
    pub words: Vec<WordNode>,
}

impl CommandNode {
    pub fn new(words: Vec<WordNode>) -> Self {
        Self { words }
    }
}

/// Root node: the whole parsed script.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SequenceNode {
    pub commands: Vec<CommandNode>,
}

impl SequenceNode {
    pub fn new(commands: Vec<CommandNode>) -> Self {
        Self { commands }
    }
}

/// Escape a raw fragment back to source syntax.
fn escape_raw(value: &str, out: &mut fmt::Formatter<'_>) -> fmt::Result {
    for ch in value.chars() {
        match ch {
            '\n' => write!(out, "\\n")?,
            '\t' => write!(out, "\\t")?,
            '$' => write!(out, "\\$")?,
            '\\' => write!(out, "\\\\")?,
            '"' => write!(out, "\\\"")?,
            '\x07' => write!(out, "\\a")?,
            '\x08' => write!(out, "\\b")?,
            '\x0c' => write!(out, "\\f")?,
            '\r' => write!(out, "\\r")?,
            '\x0b' => write!(out, "\\v")?,
            _ => write!(out, "{}", ch)?,
        }
    }
    Ok(())
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Segment::Raw(value) => escape_raw(value, f),
            Segment::Variable(name) => write!(f, "${{{}}}", name),
            Segment::Quoted(segments) => {
                write!(f, "\"")?;
                for segment in segments {
                    write!(f, "{}", segment)?;
                }
                write!(f, "\"")
            }
        }
    }
}

impl fmt::Display for WordNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for segment in &self.segments {
            write!(f, "{}", segment)?;
        }
        Ok(())
    }
}

impl fmt::Display for CommandNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, word) in self.words.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", word)?;
        }
        Ok(())
    }
}

impl fmt::Display for SequenceNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, command) in self.commands.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", command)?;
        }
        Ok(())
    }
}
