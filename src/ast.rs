//! Expression trees over propositional variables.

use std::fmt;

use crate::ops::{BinaryOp, Operator};
use crate::register::BitRegister;
use crate::variable::Variable;

/// A propositional expression.
///
/// Each node owns its operands; leaves hold [`Variable`] values, which may be
/// shared (by name and bit index) between many leaves of the same tree.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Expr {
    Var(Variable),
    Not(Box<Expr>),
    Binary(BinaryOp, Box<Expr>, Box<Expr>),
}

// Constructors
impl Expr {
    pub fn var(variable: Variable) -> Self {
        Expr::Var(variable)
    }

    pub fn not(operand: Self) -> Self {
        Expr::Not(Box::new(operand))
    }

    pub fn binary(op: BinaryOp, lhs: Self, rhs: Self) -> Self {
        Expr::Binary(op, Box::new(lhs), Box::new(rhs))
    }

    pub fn and(lhs: Self, rhs: Self) -> Self {
        Self::binary(BinaryOp::And, lhs, rhs)
    }

    pub fn or(lhs: Self, rhs: Self) -> Self {
        Self::binary(BinaryOp::Or, lhs, rhs)
    }

    pub fn implies(lhs: Self, rhs: Self) -> Self {
        Self::binary(BinaryOp::Implies, lhs, rhs)
    }

    pub fn iff(lhs: Self, rhs: Self) -> Self {
        Self::binary(BinaryOp::Biconditional, lhs, rhs)
    }
}

impl Expr {
    /// Returns the leaf variable, if this is a leaf.
    pub fn as_var(&self) -> Option<&Variable> {
        match self {
            Expr::Var(v) => Some(v),
            _ => None,
        }
    }

    /// Evaluates the expression under the assignment held by `register`.
    pub fn evaluate(&self, register: &BitRegister) -> bool {
        match self {
            Expr::Var(v) => v.evaluate(register),
            Expr::Not(a) => !a.evaluate(register),
            Expr::Binary(op, a, b) => {
                let lhs = a.evaluate(register);
                let rhs = b.evaluate(register);
                op.apply(lhs, rhs)
            }
        }
    }

    /// Whether this expression must be parenthesized when it appears as an
    /// operand of another connective.
    ///
    /// Only binary nodes need it: a leaf is atomic and `¬` binds tightest.
    pub fn needs_parens(&self) -> bool {
        match self {
            Expr::Var(_) | Expr::Not(_) => false,
            Expr::Binary(..) => true,
        }
    }

    /// Renders the expression in infix form with Unicode connectives.
    pub fn render(&self) -> String {
        let mut out = String::new();
        self.render_into(&mut out);
        out
    }

    fn render_into(&self, out: &mut String) {
        match self {
            Expr::Var(v) => out.push_str(v.symbol()),
            Expr::Not(a) => {
                out.push(Operator::Not.glyph());
                a.render_operand(out);
            }
            Expr::Binary(op, a, b) => {
                a.render_operand(out);
                out.push(' ');
                out.push(op.glyph());
                out.push(' ');
                b.render_operand(out);
            }
        }
    }

    fn render_operand(&self, out: &mut String) {
        if self.needs_parens() {
            out.push('(');
            self.render_into(out);
            out.push(')');
        } else {
            self.render_into(out);
        }
    }

    /// Number of nodes in the tree.
    pub fn size(&self) -> usize {
        match self {
            Expr::Var(_) => 1,
            Expr::Not(a) => 1 + a.size(),
            Expr::Binary(_, a, b) => 1 + a.size() + b.size(),
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
