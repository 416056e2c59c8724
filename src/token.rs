//! Tokenizer for top-level connectives.
//!
//! Only connectives at parenthesis depth zero are reported. Everything inside
//! a parenthesized group is left for the recursive parse of that group, and
//! variable names are not tokens at all: they are whatever text remains
//! between connectives.

use std::iter::Peekable;
use std::str::CharIndices;

use crate::error::ParseError;
use crate::ops::Operator;

/// A connective occurrence, as a byte span `start..end` of the scanned text.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Token {
    pub start: usize,
    pub end: usize,
    pub op: Operator,
}

/// Iterator over the top-level connectives of an expression, left to right.
///
/// Yields a single [`ParseError::UnbalancedParentheses`] and stops if the
/// parentheses of the scanned text do not match.
pub struct Tokenizer<'a> {
    text: &'a str,
    chars: Peekable<CharIndices<'a>>,
    /// Offsets of the currently open parentheses.
    open: Vec<usize>,
    finished: bool,
}

impl<'a> Tokenizer<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            text,
            chars: text.char_indices().peekable(),
            open: Vec::new(),
            finished: false,
        }
    }

    fn unbalanced(&mut self, position: usize) -> ParseError {
        self.finished = true;
        ParseError::UnbalancedParentheses {
            input: self.text.to_string(),
            position,
        }
    }

    fn token(start: usize, len: usize, op: Operator) -> Token {
        Token {
            start,
            end: start + len,
            op,
        }
    }
}

impl Iterator for Tokenizer<'_> {
    type Item = Result<Token, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        while let Some((i, c)) = self.chars.next() {
            match c {
                '(' => self.open.push(i),
                ')' => {
                    if self.open.pop().is_none() {
                        return Some(Err(self.unbalanced(i)));
                    }
                }
                _ if !self.open.is_empty() => {}
                '-' => {
                    if let Some(&(_, '>')) = self.chars.peek() {
                        self.chars.next();
                        return Some(Ok(Self::token(i, 2, Operator::IMPLIES)));
                    }
                }
                '<' => {
                    // `<->` must win over the `->` it contains.
                    if self.text[i..].starts_with("<->") {
                        self.chars.next();
                        self.chars.next();
                        return Some(Ok(Self::token(i, 3, Operator::BICONDITIONAL)));
                    }
                }
                _ => {
                    if let Some(op) = Operator::from_char(c) {
                        return Some(Ok(Self::token(i, c.len_utf8(), op)));
                    }
                }
            }
        }

        self.finished = true;
        match self.open.first() {
            Some(&position) => Some(Err(self.unbalanced(position))),
            None => None,
        }
    }
}

/// Collects the top-level connectives of `text` in textual order.
pub fn tokenize(text: &str) -> Result<Vec<Token>, ParseError> {
    Tokenizer::new(text).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    use test_log::test;

    fn spans(text: &str) -> Vec<(usize, usize, Operator)> {
        tokenize(text)
            .unwrap()
            .into_iter()
            .map(|t| (t.start, t.end, t.op))
            .collect()
    }

    #[test]
    fn test_empty() {
        assert_eq!(tokenize("").unwrap(), vec![]);
        assert_eq!(tokenize("A").unwrap(), vec![]);
    }

    #[test]
    fn test_single_char_connectives() {
        assert_eq!(spans("A*B"), vec![(1, 2, Operator::AND)]);
        assert_eq!(spans("A+B"), vec![(1, 2, Operator::OR)]);
        assert_eq!(spans("~A"), vec![(0, 1, Operator::Not)]);
    }

    #[test]
    fn test_multi_char_connectives() {
        assert_eq!(spans("A->B"), vec![(1, 3, Operator::IMPLIES)]);
        assert_eq!(spans("A<->B"), vec![(1, 4, Operator::BICONDITIONAL)]);
        assert_eq!(
            spans("A<->B->C"),
            vec![(1, 4, Operator::BICONDITIONAL), (5, 7, Operator::IMPLIES)]
        );
    }

    #[test]
    fn test_textual_order() {
        assert_eq!(
            spans("A<->B*C+~D"),
            vec![
                (1, 4, Operator::BICONDITIONAL),
                (5, 6, Operator::AND),
                (7, 8, Operator::OR),
                (8, 9, Operator::Not),
            ]
        );
    }

    #[test]
    fn test_skips_parenthesized() {
        assert_eq!(spans("(A+B)*C"), vec![(5, 6, Operator::AND)]);
        assert_eq!(spans("(A+B)"), vec![]);
        assert_eq!(spans("~(A->(B*C))"), vec![(0, 1, Operator::Not)]);
    }

    #[test]
    fn test_unicode_connectives() {
        assert_eq!(spans("A ∧ B"), vec![(2, 5, Operator::AND)]);
        assert_eq!(spans("¬A ≡ B"), vec![(0, 2, Operator::Not), (4, 7, Operator::BICONDITIONAL)]);
    }

    #[test]
    fn test_lone_dash_is_not_a_token() {
        assert_eq!(spans("A-B"), vec![]);
        assert_eq!(spans("A<B"), vec![]);
    }

    #[test]
    fn test_unbalanced() {
        assert_eq!(
            tokenize("A)+B"),
            Err(ParseError::UnbalancedParentheses {
                input: "A)+B".to_string(),
                position: 1,
            })
        );
        assert_eq!(
            tokenize("(A+(B"),
            Err(ParseError::UnbalancedParentheses {
                input: "(A+(B".to_string(),
                position: 0,
            })
        );
    }
}
