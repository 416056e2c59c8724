//! Error types for parsing expressions and building truth tables.

use std::fmt;

/// Error raised while parsing an expression.
///
/// Every variant carries the offending substring. Positions are byte offsets
/// into that substring.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum ParseError {
    /// A closing parenthesis without a matching opening one, or an opening
    /// parenthesis that is never closed.
    UnbalancedParentheses { input: String, position: usize },
    /// A connective is missing an operand, or the expression is empty.
    EmptyOperand { input: String, position: usize },
    /// A leaf is not a valid identifier.
    InvalidVariableName { name: String },
    /// Text stands to the left of a negation that has no binary connective
    /// to attach it to, as in `A~B`.
    MisplacedNegation { input: String },
    /// The expression tree would be deeper than the configured limit.
    NestingTooDeep { input: String, depth: usize },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::UnbalancedParentheses { input, position } => {
                write!(f, "unbalanced parentheses at position {} in {:?}", position, input)
            }
            ParseError::EmptyOperand { input, position } => {
                write!(f, "missing operand at position {} in {:?}", position, input)
            }
            ParseError::InvalidVariableName { name } => {
                write!(f, "invalid variable name {:?}", name)
            }
            ParseError::MisplacedNegation { input } => {
                write!(f, "negation must prefix its operand in {:?}", input)
            }
            ParseError::NestingTooDeep { input, depth } => {
                write!(f, "expression nested deeper than {} levels at {:?}", depth, input)
            }
        }
    }
}

impl std::error::Error for ParseError {}

/// Error raised while enumerating assignments.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum TableError {
    /// The expression has more variables than the configured limit.
    TooManyVariables { count: usize, limit: usize },
}

impl fmt::Display for TableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableError::TooManyVariables { count, limit } => {
                write!(f, "expression has {} variables, at most {} are supported", count, limit)
            }
        }
    }
}

impl std::error::Error for TableError {}
