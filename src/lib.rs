//! # truthtab: truth tables for propositional logic
//!
//! **`truthtab`** parses a propositional-logic expression into a tree and
//! enumerates every assignment of its variables to build a truth table.
//!
//! ## Syntax
//!
//! | connective    | ASCII | Unicode | binds    |
//! |---------------|-------|---------|----------|
//! | negation      | `~`   | `¬`     | tightest |
//! | conjunction   | `*`   | `∧`     |          |
//! | disjunction   | `+`   | `∨`     |          |
//! | implication   | `->`  | `→`     |          |
//! | biconditional | `<->` | `≡`     | loosest  |
//!
//! Parentheses group. Variable names are runs of ASCII letters, digits and
//! `_`. The literals `T` and `F` are the constants true and false.
//!
//! ## Basic Usage
//!
//! ```rust
//! use truthtab::parser::parse;
//! use truthtab::table::{TableConfig, TruthTable};
//!
//! let mut formula = parse("(A+B)*C").unwrap();
//! assert_eq!(formula.expr.render(), "(A ∨ B) ∧ C");
//!
//! let table = TruthTable::build(&mut formula, &TableConfig::default()).unwrap();
//! assert_eq!(table.header(), ["A", "B", "C"]);
//! assert_eq!(table.rows().len(), 8);
//!
//! // A=F, B=T, C=T
//! assert!(table.rows()[0b011].value);
//! ```
//!
//! ## Core Components
//!
//! - **[`parser`]**: splits an expression at its loosest top-level connective, recursively.
//! - **[`register`]**: the bit register holding one bit per variable.
//! - **[`table`]**: enumerates assignments and formats the table.
//! - **[`simplify`]**: constant folding of disjunctions.

pub mod ast;
pub mod error;
pub mod ops;
pub mod parser;
pub mod register;
pub mod simplify;
pub mod table;
pub mod token;
pub mod variable;
