// Copyright (c) The qm-min Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

mod cover;
mod primes;
mod trace;

pub use trace::{Step, StepDisplay};

use crate::{
    errors::{EmptyInputError, Error, RangeError},
    expr::{self, ParsedExpr},
    implicant::Implicant,
    rows::RowSet,
    table::TruthTable,
    MAX_VARIABLES, MIN_VARIABLES,
};
use arrayvec::ArrayVec;
use std::fmt;

/// The result of one minimization run: the selected cover, its rendered
/// sum-of-products expression, and the stage-by-stage trace.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Minimization {
    variables: ArrayVec<char, MAX_VARIABLES>,
    cover: Vec<Implicant>,
    expression: String,
    steps: Vec<Step>,
}

impl Minimization {
    #[inline]
    pub fn variables(&self) -> &[char] {
        &self.variables
    }

    /// The selected prime implicants, in selection order.
    #[inline]
    pub fn cover(&self) -> &[Implicant] {
        &self.cover
    }

    /// The minimized sum-of-products expression, `"0"` for the empty
    /// function and `"1"` for the constant-true function.
    #[inline]
    pub fn expression(&self) -> &str {
        &self.expression
    }

    /// The ordered stage snapshots of the run.
    #[inline]
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Renders the whole trace, one stage after another.
    #[inline]
    pub fn trace_display(&self) -> TraceDisplay<'_> {
        TraceDisplay { minimization: self }
    }
}

pub struct TraceDisplay<'a> {
    minimization: &'a Minimization,
}

impl<'a> fmt::Display for TraceDisplay<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let n = self.minimization.variables.len();
        for step in &self.minimization.steps {
            write!(f, "{}", step.display(n))?;
        }
        Ok(())
    }
}

/// Minimizes an n-variable function given explicit minterm and don't-care
/// row indices.
///
/// Rejects `n` outside `[MIN_VARIABLES, MAX_VARIABLES]`, indices outside
/// `[0, 2^n)`, and overlapping minterm/don't-care sets before any computation
/// starts.
pub fn minimize_from_minterms(
    n: usize,
    minterms: &[usize],
    dont_cares: &[usize],
) -> Result<Minimization, Error> {
    if !(MIN_VARIABLES..=MAX_VARIABLES).contains(&n) {
        return Err(RangeError::VariableCount(n).into());
    }
    let limit = 1 << n;
    for &index in minterms.iter().chain(dont_cares) {
        if index >= limit {
            return Err(RangeError::RowIndex { index, limit }.into());
        }
    }

    let minterm_set = RowSet::from_rows(minterms.iter().copied());
    let dont_care_set = RowSet::from_rows(dont_cares.iter().copied());
    if let Some(row) = minterm_set.intersection(&dont_care_set).iter().next() {
        return Err(EmptyInputError::OverlappingSets { row }.into());
    }

    let variables: ArrayVec<char, MAX_VARIABLES> =
        ('A'..).take(n).collect();
    Ok(minimize(variables, minterm_set, dont_care_set))
}

/// Minimizes the function denoted by an infix expression: parses it, builds
/// the truth table, and minimizes its minterm set with no don't-cares.
pub fn minimize_from_expression(input: &str) -> Result<Minimization, Error> {
    let table = truth_table(input)?;
    let n = table.variables().len();
    if n < MIN_VARIABLES {
        return Err(RangeError::VariableCount(n).into());
    }
    let variables: ArrayVec<char, MAX_VARIABLES> = table.variables().iter().copied().collect();
    Ok(minimize(variables, table.minterms(), RowSet::new()))
}

/// Parses an expression and evaluates it over every assignment of its
/// variables.
pub fn truth_table(input: &str) -> Result<TruthTable, Error> {
    let parsed: ParsedExpr = expr::parse(input)?;
    TruthTable::build(&parsed)
}

fn minimize(
    variables: ArrayVec<char, MAX_VARIABLES>,
    minterms: RowSet,
    dont_cares: RowSet,
) -> Minimization {
    let n = variables.len();
    let care = minterms.union(&dont_cares);
    let generation = primes::prime_implicants(n, &care);
    let selected = cover::select_cover(&generation.primes, n, &minterms);
    let expression = cover::sop_expression(&selected, &variables);

    let mut steps = generation.steps;
    steps.push(Step::SelectedCover {
        implicants: selected.clone(),
    });

    Minimization {
        variables,
        cover: selected,
        expression,
        steps,
    }
}
