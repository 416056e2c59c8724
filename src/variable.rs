//! Propositional variables and the two truth constants.

use std::fmt;
use std::rc::Rc;

use crate::register::BitRegister;

/// A leaf of an expression tree.
///
/// # Invariants
///
/// - A bound variable never changes its bit index after creation.
/// - Within one parse, every occurrence of a name is the same `Bound` value
///   (same index, same shared name).
/// - Constants never read a register.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub enum Variable {
    /// A named variable reading bit `index` of the shared register.
    Bound { name: Rc<str>, index: usize },
    /// A fixed truth value, displayed as `T` or `F`.
    Constant(bool),
}

/// The true constant, written `T`.
pub const TRUTH: Variable = Variable::Constant(true);
/// The false constant, written `F`.
pub const FALSITY: Variable = Variable::Constant(false);

impl Variable {
    /// Creates a variable bound to the given register bit.
    pub fn bound(name: impl Into<Rc<str>>, index: usize) -> Self {
        Variable::Bound {
            name: name.into(),
            index,
        }
    }

    /// Returns the constant denoted by a reserved literal (`T` or `F`), if any.
    pub fn constant_from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "T" => Some(TRUTH),
            "F" => Some(FALSITY),
            _ => None,
        }
    }

    /// Returns the current truth value of the variable.
    pub fn evaluate(&self, register: &BitRegister) -> bool {
        match self {
            Variable::Bound { index, .. } => register.bit_at(*index),
            Variable::Constant(value) => *value,
        }
    }

    /// Returns the display symbol: the name, or `T`/`F` for constants.
    pub fn symbol(&self) -> &str {
        match self {
            Variable::Bound { name, .. } => &**name,
            Variable::Constant(true) => "T",
            Variable::Constant(false) => "F",
        }
    }

    /// Returns the bit index of a bound variable.
    pub fn index(&self) -> Option<usize> {
        match self {
            Variable::Bound { index, .. } => Some(*index),
            Variable::Constant(_) => None,
        }
    }

    pub fn is_constant(&self) -> bool {
        matches!(self, Variable::Constant(_))
    }

    /// Returns the value of a constant.
    pub fn constant_value(&self) -> Option<bool> {
        match self {
            Variable::Bound { .. } => None,
            Variable::Constant(value) => Some(*value),
        }
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use test_log::test;

    #[test]
    fn test_bound_reads_register() {
        let mut reg = BitRegister::new(2);
        let a = Variable::bound("A", 0);
        let b = Variable::bound("B", 1);
        reg.overwrite(0b10);
        assert!(a.evaluate(&reg));
        assert!(!b.evaluate(&reg));
        reg.increment();
        assert!(a.evaluate(&reg));
        assert!(b.evaluate(&reg));
    }

    #[test]
    fn test_constants_ignore_register() {
        let mut reg = BitRegister::new(1);
        for _ in 0..2 {
            assert!(TRUTH.evaluate(&reg));
            assert!(!FALSITY.evaluate(&reg));
            reg.increment();
        }
        assert_eq!(TRUTH.index(), None);
        assert!(FALSITY.is_constant());
    }

    #[test]
    fn test_symbols() {
        assert_eq!(Variable::bound("foo", 3).symbol(), "foo");
        assert_eq!(TRUTH.to_string(), "T");
        assert_eq!(FALSITY.to_string(), "F");
        assert_eq!(Variable::constant_from_symbol("T"), Some(TRUTH));
        assert_eq!(Variable::constant_from_symbol("F"), Some(FALSITY));
        assert_eq!(Variable::constant_from_symbol("t"), None);
        assert_eq!(Variable::constant_from_symbol("TF"), None);
    }
}
