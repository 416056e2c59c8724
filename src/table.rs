//! Assignment enumeration and truth tables.
//!
//! Rows are produced by driving the formula's [`BitRegister`] from `0` to
//! `2^n - 1`, one increment per row, and evaluating the expression after each
//! step. Since the first-discovered variable owns the most significant bit,
//! the first column changes slowest.

use std::fmt;

use log::{info, trace};
use num_bigint::BigUint;

use crate::ast::Expr;
use crate::error::TableError;
use crate::parser::Formula;
use crate::register::BitRegister;
use crate::variable::Variable;

/// Configuration for building and printing truth tables.
///
/// # Examples
///
/// ```
/// use truthtab::parser::parse;
/// use truthtab::table::{TableConfig, TruthTable};
///
/// let mut formula = parse("A*B").unwrap();
/// let config = TableConfig {
///     max_variables: 8,
///     true_symbol: '1',
///     false_symbol: '0',
/// };
/// let table = TruthTable::build(&mut formula, &config).unwrap();
/// assert_eq!(table.rows().len(), 4);
/// ```
#[derive(Debug, Clone)]
pub struct TableConfig {
    /// Largest number of variables to enumerate (default: 20)
    pub max_variables: usize,
    /// Symbol printed for true (default: 'T')
    pub true_symbol: char,
    /// Symbol printed for false (default: 'F')
    pub false_symbol: char,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            max_variables: 20,
            true_symbol: 'T',
            false_symbol: 'F',
        }
    }
}

impl TableConfig {
    /// Hard limit imposed by counting rows in a `u64`.
    ///
    /// The register itself is unbounded, but the enumerator starts it with
    /// [`BitRegister::overwrite`], which only takes a `u64`.
    pub const MAX_SUPPORTED: usize = 63;

    fn limit(&self) -> usize {
        self.max_variables.min(Self::MAX_SUPPORTED)
    }

    pub fn symbol(&self, value: bool) -> char {
        if value {
            self.true_symbol
        } else {
            self.false_symbol
        }
    }
}

/// One row of a truth table.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Row {
    /// Variable values, in discovery order.
    pub assignment: Vec<bool>,
    /// Value of the expression under the assignment.
    pub value: bool,
}

/// Iterator over all assignments of a formula's variables.
///
/// Owns the register exclusively while it runs. After the last row the
/// register holds `2^n - 1`; it is never incremented past it.
pub struct AssignmentEnumerator<'a> {
    expr: &'a Expr,
    variables: &'a [Variable],
    register: &'a mut BitRegister,
    remaining: u64,
}

impl<'a> AssignmentEnumerator<'a> {
    pub fn new(formula: &'a mut Formula, config: &TableConfig) -> Result<Self, TableError> {
        let Formula {
            expr,
            variables,
            register,
        } = formula;

        let count = variables.len();
        if count > config.limit() {
            return Err(TableError::TooManyVariables {
                count,
                limit: config.limit(),
            });
        }
        debug_assert_eq!(register.width(), count);

        register.overwrite(0);
        Ok(Self {
            expr,
            variables,
            register,
            remaining: 1u64 << count,
        })
    }
}

impl Iterator for AssignmentEnumerator<'_> {
    type Item = Row;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        let register: &BitRegister = &*self.register;
        let assignment: Vec<bool> = self.variables.iter().map(|v| v.evaluate(register)).collect();
        let value = self.expr.evaluate(register);
        trace!("row {} -> {}", register, value);

        self.remaining -= 1;
        if self.remaining > 0 {
            self.register.increment();
        }
        Some(Row { assignment, value })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match usize::try_from(self.remaining) {
            Ok(n) => (n, Some(n)),
            Err(_) => (usize::MAX, None),
        }
    }
}

/// Whether an expression is always, never, or sometimes true.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Classification {
    Tautology,
    Contradiction,
    Contingent,
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Classification::Tautology => write!(f, "tautology"),
            Classification::Contradiction => write!(f, "contradiction"),
            Classification::Contingent => write!(f, "contingent"),
        }
    }
}

/// A complete truth table: one column per variable, then the expression.
#[derive(Debug, Clone)]
pub struct TruthTable {
    header: Vec<String>,
    expression: String,
    rows: Vec<Row>,
    config: TableConfig,
}

impl TruthTable {
    /// Enumerates every assignment of `formula`.
    pub fn build(formula: &mut Formula, config: &TableConfig) -> Result<Self, TableError> {
        let header = formula.variables.iter().map(|v| v.symbol().to_string()).collect();
        let expression = formula.expr.render();
        let rows: Vec<Row> = AssignmentEnumerator::new(formula, config)?.collect();
        info!("truth table for {:?}: {} variables, {} rows", expression, formula.num_vars(), rows.len());
        Ok(Self {
            header,
            expression,
            rows,
            config: config.clone(),
        })
    }

    /// Variable names, in discovery order.
    pub fn header(&self) -> &[String] {
        &self.header
    }

    /// The rendered expression, labelling the last column.
    pub fn expression(&self) -> &str {
        &self.expression
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn num_vars(&self) -> usize {
        self.header.len()
    }

    /// Number of rows, `2^n`.
    pub fn row_count(&self) -> BigUint {
        BigUint::from(1u8) << self.num_vars()
    }

    /// Number of rows where the expression is true.
    pub fn true_count(&self) -> BigUint {
        BigUint::from(self.rows.iter().filter(|row| row.value).count())
    }

    pub fn classify(&self) -> Classification {
        if self.rows.iter().all(|row| row.value) {
            Classification::Tautology
        } else if self.rows.iter().all(|row| !row.value) {
            Classification::Contradiction
        } else {
            Classification::Contingent
        }
    }

    fn widths(&self) -> Vec<usize> {
        self.header
            .iter()
            .map(|h| h.as_str())
            .chain(std::iter::once(self.expression.as_str()))
            .map(|h| h.chars().count().max(1))
            .collect()
    }
}

impl fmt::Display for TruthTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let widths = self.widths();

        let titles = self.header.iter().map(String::as_str).chain(std::iter::once(self.expression.as_str()));
        let cells: Vec<String> = titles.zip(&widths).map(|(t, &w)| format!(" {:^w$} ", t, w = w)).collect();
        writeln!(f, "{}", cells.join("│"))?;

        let rules: Vec<String> = widths.iter().map(|&w| "─".repeat(w + 2)).collect();
        writeln!(f, "{}", rules.join("┼"))?;

        for row in &self.rows {
            let values = row.assignment.iter().copied().chain(std::iter::once(row.value));
            let cells: Vec<String> = values
                .zip(&widths)
                .map(|(v, &w)| format!(" {:^w$} ", self.config.symbol(v), w = w))
                .collect();
            writeln!(f, "{}", cells.join("│"))?;
        }
        Ok(())
    }
}
