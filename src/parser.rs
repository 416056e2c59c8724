//! Recursive precedence-by-scan parser.
//!
//! An expression is parsed by finding its loosest top-level connective,
//! splitting the text around it and parsing both sides recursively. Text
//! without top-level connectives is a leaf: a constant or a variable name.
//!
//! Binding, tightest first: `~`, `*`, `+`, `->`, `<->`. Among several
//! connectives of the loosest tier the leftmost one is the split point, so
//! `A+B+C` parses as `A + (B+C)`.
//!
//! Variables are interned by name: each new name takes the next bit of a
//! shared [`BitRegister`], in order of first appearance.

use std::collections::HashMap;
use std::rc::Rc;

use log::debug;

use crate::ast::Expr;
use crate::error::ParseError;
use crate::ops::Operator;
use crate::register::BitRegister;
use crate::simplify::{simplify, Law};
use crate::token::{tokenize, Token};
use crate::variable::{Variable, FALSITY};

/// A parsed expression together with its variables and their register.
#[derive(Debug, Clone)]
pub struct Formula {
    /// Root of the expression tree.
    pub expr: Expr,
    /// Bound variables in discovery order; `variables[i]` reads bit `i`.
    pub variables: Vec<Variable>,
    /// Register with one bit per variable.
    pub register: BitRegister,
}

impl Formula {
    /// Number of distinct variables.
    pub fn num_vars(&self) -> usize {
        self.variables.len()
    }

    /// Evaluates the expression under the current register value.
    pub fn evaluate(&self) -> bool {
        self.expr.evaluate(&self.register)
    }

    /// Applies [`simplify`] to the expression in place and returns the laws used.
    ///
    /// Variables are kept even if they no longer occur in the expression.
    pub fn simplify(&mut self) -> Vec<Law> {
        let expr = std::mem::replace(&mut self.expr, Expr::var(FALSITY));
        let (expr, laws) = simplify(expr);
        self.expr = expr;
        laws
    }
}

/// Configuration for the parser.
#[derive(Debug, Clone)]
pub struct ParserConfig {
    /// Largest depth of the expression tree, counting a leaf as one level (default: 500)
    pub max_depth: usize,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self { max_depth: 500 }
    }
}

/// Parses an expression with the default [`ParserConfig`].
///
/// # Examples
///
/// ```
/// use truthtab::parser::parse;
///
/// let formula = parse("(A+B)*C").unwrap();
/// assert_eq!(formula.expr.render(), "(A ∨ B) ∧ C");
/// assert_eq!(formula.num_vars(), 3);
/// ```
pub fn parse(input: &str) -> Result<Formula, ParseError> {
    parse_with(input, &ParserConfig::default())
}

/// Parses an expression.
pub fn parse_with(input: &str, config: &ParserConfig) -> Result<Formula, ParseError> {
    let mut parser = Parser::with_config(config.clone());
    let expr = parser.parse_expr(input)?;
    Ok(parser.finish(expr))
}

/// Parser state shared by all recursive calls of one parse.
#[derive(Debug, Default)]
pub struct Parser {
    config: ParserConfig,
    register: BitRegister,
    symbols: HashMap<Rc<str>, Variable>,
    variables: Vec<Variable>,
    /// Number of `parse_expr` calls currently on the stack.
    depth: usize,
}

impl Parser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ParserConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Parses `text`, interning its variables into this parser.
    ///
    /// Fails with [`ParseError::NestingTooDeep`] instead of recursing past
    /// [`ParserConfig::max_depth`] levels.
    pub fn parse_expr(&mut self, text: &str) -> Result<Expr, ParseError> {
        if self.depth >= self.config.max_depth {
            return Err(ParseError::NestingTooDeep {
                input: text.trim().to_string(),
                depth: self.depth,
            });
        }
        self.depth += 1;
        let result = self.parse_nested(text);
        self.depth -= 1;
        result
    }

    fn parse_nested(&mut self, text: &str) -> Result<Expr, ParseError> {
        let inner = strip_enclosing(text);
        let tokens = tokenize(inner)?;

        let Some(token) = split_point(&tokens) else {
            return self.parse_leaf(text, inner);
        };
        debug!("parse_expr({:?}): split at {} ({}..{})", inner, token.op, token.start, token.end);

        match token.op {
            Operator::Not => {
                if !inner[..token.start].trim().is_empty() {
                    return Err(ParseError::MisplacedNegation {
                        input: inner.to_string(),
                    });
                }
                let operand = self.parse_operand(inner, &inner[token.end..], token.end)?;
                Ok(Expr::not(operand))
            }
            Operator::Binary(op) => {
                let lhs = self.parse_operand(inner, &inner[..token.start], token.start)?;
                let rhs = self.parse_operand(inner, &inner[token.end..], token.end)?;
                Ok(Expr::binary(op, lhs, rhs))
            }
        }
    }

    /// Parses `text`, one side of a connective in `parent` adjacent to `position`.
    fn parse_operand(&mut self, parent: &str, text: &str, position: usize) -> Result<Expr, ParseError> {
        if text.trim().is_empty() {
            return Err(ParseError::EmptyOperand {
                input: parent.to_string(),
                position,
            });
        }
        self.parse_expr(text)
    }

    fn parse_leaf(&mut self, text: &str, name: &str) -> Result<Expr, ParseError> {
        if name.is_empty() {
            return Err(ParseError::EmptyOperand {
                input: text.to_string(),
                position: 0,
            });
        }
        if let Some(constant) = Variable::constant_from_symbol(name) {
            return Ok(Expr::var(constant));
        }
        if !is_identifier(name) {
            return Err(ParseError::InvalidVariableName {
                name: name.to_string(),
            });
        }
        Ok(Expr::var(self.intern(name)))
    }

    /// Returns the variable for `name`, allocating a register bit on first sight.
    fn intern(&mut self, name: &str) -> Variable {
        if let Some(v) = self.symbols.get(name) {
            return v.clone();
        }
        let index = self.register.grow_by_one();
        let name: Rc<str> = Rc::from(name);
        debug!("intern({:?}) -> bit {}", name, index);
        let v = Variable::bound(Rc::clone(&name), index);
        self.symbols.insert(name, v.clone());
        self.variables.push(v.clone());
        v
    }

    pub fn finish(self, expr: Expr) -> Formula {
        debug_assert_eq!(self.register.width(), self.variables.len());
        Formula {
            expr,
            variables: self.variables,
            register: self.register,
        }
    }
}

/// Selects the leftmost token of the loosest-binding tier.
fn split_point(tokens: &[Token]) -> Option<Token> {
    let mut best: Option<Token> = None;
    for &token in tokens {
        match best {
            Some(b) if b.op.precedence() >= token.op.precedence() => {}
            _ => best = Some(token),
        }
    }
    best
}

/// Removes whitespace and every pair of parentheses that encloses the whole
/// text, as in `((A+B))`.
///
/// `(A)+(B)` is returned unchanged: its first group closes before the end.
pub fn strip_enclosing(text: &str) -> &str {
    let mut text = text.trim();
    while is_enclosed(text) {
        text = text[1..text.len() - 1].trim();
    }
    text
}

fn is_enclosed(text: &str) -> bool {
    if !(text.starts_with('(') && text.ends_with(')')) {
        return false;
    }
    let last = text.len() - 1;
    let mut depth: usize = 0;
    for (i, c) in text.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => {
                depth = match depth.checked_sub(1) {
                    Some(d) => d,
                    None => return false,
                };
                if depth == 0 && i != last {
                    return false;
                }
            }
            _ => {}
        }
    }
    depth == 0
}

fn is_identifier(name: &str) -> bool {
    !name.is_empty() && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::variable::TRUTH;

    use test_log::test;

    fn names(formula: &Formula) -> Vec<&str> {
        formula.variables.iter().map(|v| v.symbol()).collect()
    }

    #[test]
    fn test_strip_enclosing() {
        assert_eq!(strip_enclosing("(A+B)"), "A+B");
        assert_eq!(strip_enclosing("(A)+(B)"), "(A)+(B)");
        assert_eq!(strip_enclosing("((A+B))"), "A+B");
        assert_eq!(strip_enclosing(" ( A ) "), "A");
        assert_eq!(strip_enclosing("(A))"), "(A))");
        assert_eq!(strip_enclosing("((A)"), "((A)");
        assert_eq!(strip_enclosing("()"), "");
    }

    #[test]
    fn test_leaf() {
        let f = parse("A").unwrap();
        assert_eq!(names(&f), vec!["A"]);
        assert_eq!(f.expr, Expr::var(Variable::bound("A", 0)));
        assert_eq!(f.register.width(), 1);
    }

    #[test]
    fn test_constants() {
        let f = parse("T").unwrap();
        assert_eq!(f.expr, Expr::var(TRUTH));
        assert_eq!(f.num_vars(), 0);
        let f = parse("F*A").unwrap();
        assert_eq!(f.expr, Expr::and(Expr::var(FALSITY), Expr::var(Variable::bound("A", 0))));
        assert_eq!(names(&f), vec!["A"]);
    }

    #[test]
    fn test_interning() {
        let f = parse("A*B+A").unwrap();
        assert_eq!(names(&f), vec!["A", "B"]);
        assert_eq!(f.register.width(), 2);

        let Expr::Binary(_, lhs, rhs) = &f.expr else {
            panic!("expected a binary node, got {:?}", f.expr);
        };
        let Expr::Binary(_, first, _) = lhs.as_ref() else {
            panic!("expected a binary node, got {:?}", lhs);
        };
        match (first.as_var(), rhs.as_var()) {
            (Some(Variable::Bound { name: n1, index: i1 }), Some(Variable::Bound { name: n2, index: i2 })) => {
                assert_eq!(i1, i2);
                assert!(Rc::ptr_eq(n1, n2));
            }
            other => panic!("expected two bound leaves, got {:?}", other),
        }
    }

    #[test]
    fn test_parser_shares_symbols_across_calls() {
        let mut parser = Parser::new();
        let first = parser.parse_expr("A*B").unwrap();
        let second = parser.parse_expr("B->C").unwrap();
        let conj = Expr::and(first, second);
        let mut f = parser.finish(conj);
        assert_eq!(names(&f), vec!["A", "B", "C"]);

        f.register.overwrite(0b111);
        assert!(f.evaluate());
        f.register.overwrite(0b110);
        assert!(!f.evaluate());
    }

    #[test]
    fn test_discovery_order() {
        let f = parse("(C->A)*B").unwrap();
        assert_eq!(names(&f), vec!["C", "A", "B"]);
        let indices: Vec<_> = f.variables.iter().map(|v| v.index().unwrap()).collect();
        assert_eq!(indices, vec![0, 1, 2]);
    }

    #[test]
    fn test_precedence() {
        assert_eq!(parse("A+B*C").unwrap().expr.render(), "A ∨ (B ∧ C)");
        assert_eq!(parse("A*B+C").unwrap().expr.render(), "(A ∧ B) ∨ C");
        assert_eq!(parse("A->B+C").unwrap().expr.render(), "A → (B ∨ C)");
        assert_eq!(parse("A<->B->C").unwrap().expr.render(), "A ≡ (B → C)");
        assert_eq!(parse("~A*B").unwrap().expr.render(), "¬A ∧ B");
        assert_eq!(parse("~(A*B)").unwrap().expr.render(), "¬(A ∧ B)");
    }

    #[test]
    fn test_leftmost_tie_break() {
        assert_eq!(parse("A+B+C").unwrap().expr.render(), "A ∨ (B ∨ C)");
        assert_eq!(parse("A->B->C").unwrap().expr.render(), "A → (B → C)");
        assert_eq!(parse("~~A").unwrap().expr.render(), "¬¬A");
    }

    #[test]
    fn test_parenthesized_operands() {
        let f = parse("(A)+(B)").unwrap();
        assert_eq!(f.expr.render(), "A ∨ B");
        let f = parse("((A+B))*(C)").unwrap();
        assert_eq!(f.expr.render(), "(A ∨ B) ∧ C");
    }

    #[test]
    fn test_whitespace_and_unicode() {
        let f = parse(" foo_1 <-> ~ bar ").unwrap();
        assert_eq!(f.expr.render(), "foo_1 ≡ ¬bar");
        let f = parse("(A ∨ B) ∧ ¬C").unwrap();
        assert_eq!(f.expr.render(), "(A ∨ B) ∧ ¬C");
    }

    #[test]
    fn test_empty_operand() {
        assert_eq!(
            parse("").unwrap_err(),
            ParseError::EmptyOperand {
                input: "".to_string(),
                position: 0,
            }
        );
        assert_eq!(
            parse("A*").unwrap_err(),
            ParseError::EmptyOperand {
                input: "A*".to_string(),
                position: 2,
            }
        );
        assert_eq!(
            parse("->B").unwrap_err(),
            ParseError::EmptyOperand {
                input: "->B".to_string(),
                position: 0,
            }
        );
        assert!(matches!(parse("~"), Err(ParseError::EmptyOperand { .. })));
        assert!(matches!(parse("A+()"), Err(ParseError::EmptyOperand { .. })));
    }

    #[test]
    fn test_unbalanced() {
        assert!(matches!(parse("(A+B"), Err(ParseError::UnbalancedParentheses { .. })));
        assert!(matches!(parse("A+B)"), Err(ParseError::UnbalancedParentheses { .. })));
        assert!(matches!(parse(")A("), Err(ParseError::UnbalancedParentheses { .. })));
    }

    #[test]
    fn test_invalid_name() {
        assert_eq!(
            parse("A B").unwrap_err(),
            ParseError::InvalidVariableName { name: "A B".to_string() }
        );
        assert!(matches!(parse("A-B"), Err(ParseError::InvalidVariableName { .. })));
        assert!(matches!(parse("A(B)"), Err(ParseError::InvalidVariableName { .. })));
        assert!(matches!(parse("A*$"), Err(ParseError::InvalidVariableName { .. })));
    }

    fn nested_negations(depth: usize) -> String {
        "~(".repeat(depth) + "A" + &")".repeat(depth)
    }

    #[test]
    fn test_nesting_too_deep() {
        let limit = ParserConfig::default().max_depth;
        match parse(&nested_negations(10_000)) {
            Err(ParseError::NestingTooDeep { input, depth }) => {
                assert_eq!(depth, limit);
                assert!(input.starts_with("(~("));
                assert!(input.len() < nested_negations(10_000).len());
            }
            other => panic!("expected NestingTooDeep, got {:?}", other.map(|f| f.expr.size())),
        }
    }

    #[test]
    fn test_nesting_within_limit() {
        let mut f = parse(&nested_negations(200)).unwrap();
        assert_eq!(f.expr.size(), 201);
        assert_eq!(f.num_vars(), 1);
        f.register.overwrite(1);
        assert!(f.evaluate());
    }

    #[test]
    fn test_custom_max_depth() {
        let config = ParserConfig { max_depth: 2 };
        assert!(parse_with("~A", &config).is_ok());
        assert!(parse_with("A*B", &config).is_ok());
        assert_eq!(
            parse_with("~~A", &config).unwrap_err(),
            ParseError::NestingTooDeep {
                input: "A".to_string(),
                depth: 2,
            }
        );
        assert!(matches!(
            parse_with("(A+B)*C", &config),
            Err(ParseError::NestingTooDeep { depth: 2, .. })
        ));
    }

    #[test]
    fn test_misplaced_negation() {
        assert_eq!(
            parse("A~B").unwrap_err(),
            ParseError::MisplacedNegation { input: "A~B".to_string() }
        );
    }
}
