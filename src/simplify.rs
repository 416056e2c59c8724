//! Constant simplification of disjunctions.
//!
//! Only two laws are applied, bottom-up over the whole tree:
//!
//! - dominance: `X ∨ T ⇒ T` and `T ∨ X ⇒ T`,
//! - identity: `X ∨ F ⇒ X` and `F ∨ X ⇒ X`.
//!
//! Both preserve the truth table of the expression.

use std::fmt;

use log::debug;

use crate::ast::Expr;
use crate::ops::BinaryOp;
use crate::variable::TRUTH;

/// A rewrite law applied by [`simplify`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Law {
    Dominance,
    Identity,
}

impl fmt::Display for Law {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Law::Dominance => write!(f, "dominance"),
            Law::Identity => write!(f, "identity"),
        }
    }
}

/// Simplifies `expr`, returning the new tree and the laws applied, in order.
pub fn simplify(expr: Expr) -> (Expr, Vec<Law>) {
    let mut laws = Vec::new();
    let expr = simplify_with(expr, &mut laws);
    (expr, laws)
}

fn simplify_with(expr: Expr, laws: &mut Vec<Law>) -> Expr {
    match expr {
        Expr::Var(_) => expr,
        Expr::Not(a) => Expr::not(simplify_with(*a, laws)),
        Expr::Binary(op, a, b) => {
            let lhs = simplify_with(*a, laws);
            let rhs = simplify_with(*b, laws);
            if op != BinaryOp::Or {
                return Expr::binary(op, lhs, rhs);
            }
            match (constant(&lhs), constant(&rhs)) {
                (Some(true), _) | (_, Some(true)) => {
                    debug!("simplify: {} ∨ {} => T", lhs, rhs);
                    laws.push(Law::Dominance);
                    Expr::var(TRUTH)
                }
                (Some(false), _) => {
                    debug!("simplify: F ∨ {} => {}", rhs, rhs);
                    laws.push(Law::Identity);
                    rhs
                }
                (_, Some(false)) => {
                    debug!("simplify: {} ∨ F => {}", lhs, lhs);
                    laws.push(Law::Identity);
                    lhs
                }
                (None, None) => Expr::or(lhs, rhs),
            }
        }
    }
}

fn constant(expr: &Expr) -> Option<bool> {
    expr.as_var().and_then(|v| v.constant_value())
}
