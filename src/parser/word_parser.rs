//! Word Parsing
//!
//! Scans one "word" of source text starting at a cursor, producing a
//! `WordNode` and the cursor position immediately after it. A bare word ends
//! at the first unescaped space or `;`, or at end of line. Inside a word the
//! same three constructs are recognized whether quoted or not:
//!
//! - `\X` escapes, with X one of `n t $ \ " a b f r v`;
//! - `${NAME}` variable references, NAME taken verbatim up to the first `}`;
//! - `"…"` quoted groups, inside which whitespace is literal.
//!
//! Adjacent raw characters coalesce into a single `Raw` segment; a quote or
//! variable boundary always starts a new segment.

use std::collections::HashMap;

use crate::ast::types::{Segment, WordNode};
use crate::parser::types::LexerError;

lazy_static::lazy_static! {
    /// The nine valid escape sequences.
    static ref ESCAPES: HashMap<char, char> = {
        let mut m = HashMap::new();
        m.insert('n', '\n');
        m.insert('t', '\t');
        m.insert('$', '$');
        m.insert('\\', '\\');
        m.insert('"', '"');
        m.insert('a', '\x07');
        m.insert('b', '\x08');
        m.insert('f', '\x0c');
        m.insert('r', '\r');
        m.insert('v', '\x0b');
        m
    };
}

/// Horizontal whitespace between words.
pub fn is_whitespace(ch: char) -> bool {
    ch == ' '
}

/// Reserved separator characters that end a bare word.
pub fn is_special(ch: char) -> bool {
    ch == ';'
}

fn line_of(chars: &[char]) -> String {
    chars.iter().collect()
}

/// Parse a `\X` escape at `i` (pointing at the backslash).
/// Returns the index after the escape and the character it denotes.
fn parse_escaped(chars: &[char], i: usize) -> Result<(usize, char), LexerError> {
    let i = i + 1;
    if i == chars.len() {
        return Err(LexerError::new("missing escaped character", line_of(chars)));
    }
    match ESCAPES.get(&chars[i]) {
        Some(&ch) => Ok((i + 1, ch)),
        None => Err(LexerError::new("invalid escaped character", line_of(chars))),
    }
}

/// Parse a `${NAME}` reference at `i` (pointing at the `$`).
///
/// NAME is every character up to the next `}`, verbatim: no nesting and no
/// escaping inside the name.
fn parse_variable(chars: &[char], i: usize) -> Result<(usize, Segment), LexerError> {
    let mut i = i + 1;
    if i == chars.len() || chars[i] != '{' {
        return Err(LexerError::new("missing variable start", line_of(chars)));
    }
    i += 1;
    let mut name = String::new();
    while i < chars.len() && chars[i] != '}' {
        name.push(chars[i]);
        i += 1;
    }
    if i == chars.len() {
        return Err(LexerError::new("missing variable end", line_of(chars)));
    }
    Ok((i + 1, Segment::Variable(name)))
}

/// Parse a `"…"` group at `i` (pointing at the opening quote).
///
/// Scanning inside a quote follows the same grammar as a bare word minus the
/// whitespace/`;` termination: only an unescaped `"` ends the group.
fn parse_quoted(chars: &[char], i: usize) -> Result<(usize, Segment), LexerError> {
    let mut segments = Vec::new();
    let mut current = String::new();
    let mut i = i + 1;
    while i < chars.len() && chars[i] != '"' {
        match chars[i] {
            '$' => {
                if !current.is_empty() {
                    segments.push(Segment::Raw(std::mem::take(&mut current)));
                }
                let (next, variable) = parse_variable(chars, i)?;
                segments.push(variable);
                i = next;
            }
            '\\' => {
                let (next, ch) = parse_escaped(chars, i)?;
                current.push(ch);
                i = next;
            }
            ch => {
                current.push(ch);
                i += 1;
            }
        }
    }
    if i == chars.len() {
        return Err(LexerError::new("missing quote end", line_of(chars)));
    }
    if !current.is_empty() {
        segments.push(Segment::Raw(current));
    }
    Ok((i + 1, Segment::Quoted(segments)))
}

/// Parse one word starting at `i`, returning the index just past it.
pub fn parse_word(chars: &[char], i: usize) -> Result<(usize, WordNode), LexerError> {
    let mut segments = Vec::new();
    let mut current = String::new();
    let mut i = i;
    while i < chars.len() && !is_whitespace(chars[i]) && !is_special(chars[i]) {
        match chars[i] {
            '"' => {
                if !current.is_empty() {
                    segments.push(Segment::Raw(std::mem::take(&mut current)));
                }
                let (next, quoted) = parse_quoted(chars, i)?;
                segments.push(quoted);
                i = next;
            }
            '$' => {
                if !current.is_empty() {
                    segments.push(Segment::Raw(std::mem::take(&mut current)));
                }
                let (next, variable) = parse_variable(chars, i)?;
                segments.push(variable);
                i = next;
            }
            '\\' => {
                let (next, ch) = parse_escaped(chars, i)?;
                current.push(ch);
                i = next;
            }
            ch => {
                current.push(ch);
                i += 1;
            }
        }
    }
    if !current.is_empty() {
        segments.push(Segment::Raw(current));
    }
    Ok((i, WordNode::new(segments)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(input: &str) -> Result<(usize, WordNode), LexerError> {
        let chars: Vec<char> = input.chars().collect();
        parse_word(&chars, 0)
    }

    fn word(input: &str) -> WordNode {
        parse(input).unwrap().1
    }

    #[test]
    fn test_plain_word() {
        assert_eq!(
            word("test123_:=&@"),
            WordNode::new(vec![Segment::Raw("test123_:=&@".to_string())])
        );
    }

    #[test]
    fn test_word_stops_at_space() {
        let (end, node) = parse("first second").unwrap();
        assert_eq!(end, 5);
        assert_eq!(node, WordNode::new(vec![Segment::Raw("first".to_string())]));
    }

    #[test]
    fn test_word_stops_at_separator() {
        let (end, node) = parse("first;second").unwrap();
        assert_eq!(end, 5);
        assert_eq!(node, WordNode::new(vec![Segment::Raw("first".to_string())]));
    }

    #[test]
    fn test_escapes() {
        assert_eq!(
            word("a\\tb\\nc\\$d\\\\e\\\"f\\a\\b\\f\\r\\v"),
            WordNode::new(vec![Segment::Raw(
                "a\tb\nc$d\\e\"f\x07\x08\x0c\r\x0b".to_string()
            )])
        );
    }

    #[test]
    fn test_invalid_escape() {
        let err = parse("\\z").unwrap_err();
        assert_eq!(err.message, "invalid escaped character");
    }

    #[test]
    fn test_trailing_backslash() {
        let err = parse("\\").unwrap_err();
        assert_eq!(err.message, "missing escaped character");
    }

    #[test]
    fn test_variable() {
        assert_eq!(
            word("${var}"),
            WordNode::new(vec![Segment::Variable("var".to_string())])
        );
    }

    #[test]
    fn test_variable_name_verbatim() {
        assert_eq!(
            word("${my  variable123}"),
            WordNode::new(vec![Segment::Variable("my  variable123".to_string())])
        );
    }

    #[test]
    fn test_variable_missing_brace() {
        let err = parse("$var").unwrap_err();
        assert_eq!(err.message, "missing variable start");
        let err = parse("$").unwrap_err();
        assert_eq!(err.message, "missing variable start");
    }

    #[test]
    fn test_variable_unterminated() {
        let err = parse("${var").unwrap_err();
        assert_eq!(err.message, "missing variable end");
        let err = parse("${").unwrap_err();
        assert_eq!(err.message, "missing variable end");
    }

    #[test]
    fn test_quoted() {
        assert_eq!(
            word("\"first   word123\""),
            WordNode::new(vec![Segment::Quoted(vec![Segment::Raw(
                "first   word123".to_string()
            )])])
        );
    }

    #[test]
    fn test_quoted_with_variable() {
        assert_eq!(
            word("\"first  ${var} word123\""),
            WordNode::new(vec![Segment::Quoted(vec![
                Segment::Raw("first  ".to_string()),
                Segment::Variable("var".to_string()),
                Segment::Raw(" word123".to_string()),
            ])])
        );
    }

    #[test]
    fn test_quoted_empty() {
        assert_eq!(word("\"\""), WordNode::new(vec![Segment::Quoted(vec![])]));
    }

    #[test]
    fn test_quoted_unterminated() {
        let err = parse("\"abc").unwrap_err();
        assert_eq!(err.message, "missing quote end");
    }

    #[test]
    fn test_quoted_escape_inside() {
        assert_eq!(
            word("\"a\\\"b\""),
            WordNode::new(vec![Segment::Quoted(vec![Segment::Raw("a\"b".to_string())])])
        );
    }

    #[test]
    fn test_segments_not_merged_across_boundaries() {
        assert_eq!(
            word("a\"b\"c"),
            WordNode::new(vec![
                Segment::Raw("a".to_string()),
                Segment::Quoted(vec![Segment::Raw("b".to_string())]),
                Segment::Raw("c".to_string()),
            ])
        );
    }

    #[test]
    fn test_mixed_word() {
        assert_eq!(
            word("pre${x}post"),
            WordNode::new(vec![
                Segment::Raw("pre".to_string()),
                Segment::Variable("x".to_string()),
                Segment::Raw("post".to_string()),
            ])
        );
    }

    #[test]
    fn test_escaped_raw_coalesces() {
        // Escapes contribute to the surrounding raw segment, not a new one.
        assert_eq!(
            word("a\\tb"),
            WordNode::new(vec![Segment::Raw("a\tb".to_string())])
        );
    }

    #[test]
    fn test_round_trip() {
        for input in [
            "plain",
            "a\\tb\\nc",
            "${var}",
            "\"a b c\"",
            "\"a ${x} b\"",
            "pre\"quoted ${v}\"post\\$",
            "\\\"\\\\",
        ] {
            let node = word(input);
            let rendered = node.to_string();
            assert_eq!(word(&rendered), node, "round trip failed for {:?}", input);
        }
    }
}
