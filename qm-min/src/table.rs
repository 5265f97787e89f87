// Copyright (c) The qm-min Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::{
    errors::{EmptyInputError, Error, RangeError},
    expr::ParsedExpr,
    rows::{RowBits, RowSet},
    MAX_VARIABLES,
};
use arrayvec::ArrayVec;
use std::fmt;

/// A complete truth table for an expression over at most [`MAX_VARIABLES`]
/// variables.
///
/// Row index `i` encodes the assignment whose k-th variable (alphabetical,
/// 0-indexed) reads bit `n - 1 - k` of `i`, so the first variable is the most
/// significant bit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TruthTable {
    variables: ArrayVec<char, MAX_VARIABLES>,
    outputs: RowBits,
}

impl TruthTable {
    /// Evaluates `expr` over every assignment of its variables.
    ///
    /// Fails with [`EmptyInputError::NoVariables`] for a variable-free
    /// expression and [`RangeError::VariableCount`] for one with more than
    /// [`MAX_VARIABLES`] variables.
    pub fn build(expr: &ParsedExpr) -> Result<Self, Error> {
        let vars = expr.variables();
        if vars.is_empty() {
            return Err(EmptyInputError::NoVariables.into());
        }
        if vars.len() > MAX_VARIABLES {
            return Err(RangeError::VariableCount(vars.len()).into());
        }

        let variables: ArrayVec<char, MAX_VARIABLES> = vars.iter().copied().collect();
        let mut outputs = RowBits::default();
        for row in 0..1usize << variables.len() {
            let assignment = Self::assignment_for(&variables, row);
            let value = expr.evaluate(&assignment)?;
            outputs.set(row, value);
        }
        Ok(Self { variables, outputs })
    }

    fn assignment_for(
        variables: &[char],
        row: usize,
    ) -> ArrayVec<(char, bool), MAX_VARIABLES> {
        let n = variables.len();
        variables
            .iter()
            .enumerate()
            .map(|(k, &var)| (var, row & (1 << (n - 1 - k)) != 0))
            .collect()
    }

    #[inline]
    pub fn variables(&self) -> &[char] {
        &self.variables
    }

    #[inline]
    pub fn row_count(&self) -> usize {
        1 << self.variables.len()
    }

    #[inline]
    pub fn output(&self, row: usize) -> bool {
        self.outputs[row]
    }

    /// The rows where the expression evaluates to 1.
    pub fn minterms(&self) -> RowSet {
        self.outputs.iter_ones().collect()
    }
}

impl fmt::Display for TruthTable {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for &var in &self.variables {
            write!(f, "{} ", var)?;
        }
        writeln!(f, "| f")?;
        let n = self.variables.len();
        for row in 0..self.row_count() {
            for k in 0..n {
                let bit = row & (1 << (n - 1 - k)) != 0;
                write!(f, "{} ", if bit { '1' } else { '0' })?;
            }
            writeln!(f, "| {}", if self.output(row) { '1' } else { '0' })?;
        }
        Ok(())
    }
}
