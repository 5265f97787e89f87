// Copyright (c) The qm-min Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

mod parse;

pub use parse::parse;

use crate::errors::EvalError;
use once_cell::sync::OnceCell;
use std::{collections::BTreeSet, fmt};

/// A boolean expression over single-letter variables.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Expr {
    Const(bool),
    Var(char),
    Not(Box<Expr>),
    And(Box<Expr>, Box<Expr>),
    Or(Box<Expr>, Box<Expr>),
}

impl Expr {
    fn evaluate(&self, assignment: &[(char, bool)]) -> Result<bool, EvalError> {
        match self {
            Self::Const(value) => Ok(*value),
            Self::Var(var) => assignment
                .iter()
                .find_map(|&(v, value)| (v == *var).then(|| value))
                .ok_or(EvalError::UnboundVariable(*var)),
            Self::Not(inner) => Ok(!inner.evaluate(assignment)?),
            Self::And(lhs, rhs) => Ok(lhs.evaluate(assignment)? && rhs.evaluate(assignment)?),
            Self::Or(lhs, rhs) => Ok(lhs.evaluate(assignment)? || rhs.evaluate(assignment)?),
        }
    }

    fn collect_variables(&self, out: &mut BTreeSet<char>) {
        match self {
            Self::Const(_) => {}
            Self::Var(var) => {
                out.insert(*var);
            }
            Self::Not(inner) => inner.collect_variables(out),
            Self::And(lhs, rhs) | Self::Or(lhs, rhs) => {
                lhs.collect_variables(out);
                rhs.collect_variables(out);
            }
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Const(true) => write!(f, "1"),
            Self::Const(false) => write!(f, "0"),
            Self::Var(var) => write!(f, "{}", var),
            Self::Not(inner) => match inner.as_ref() {
                Self::Var(var) => write!(f, "{}'", var),
                Self::Const(_) => write!(f, "{}'", inner),
                _ => write!(f, "({})'", inner),
            },
            Self::And(lhs, rhs) => {
                let wrap = |expr: &Expr| matches!(expr, Self::Or(..));
                if wrap(lhs) {
                    write!(f, "({})", lhs)?;
                } else {
                    write!(f, "{}", lhs)?;
                }
                if wrap(rhs) {
                    write!(f, "({})", rhs)
                } else {
                    write!(f, "{}", rhs)
                }
            }
            Self::Or(lhs, rhs) => write!(f, "{} + {}", lhs, rhs),
        }
    }
}

/// A parsed expression together with its lazily computed variable list.
#[derive(Clone, Debug)]
pub struct ParsedExpr {
    root: Expr,
    variables: OnceCell<Vec<char>>,
}

impl ParsedExpr {
    pub(crate) fn new(root: Expr) -> Self {
        Self {
            root,
            variables: OnceCell::new(),
        }
    }

    #[inline]
    pub fn root(&self) -> &Expr {
        &self.root
    }

    /// The sorted, deduplicated variables of the expression. Position in this
    /// list fixes bit-position semantics: the first variable is the most
    /// significant bit of a row index.
    pub fn variables(&self) -> &[char] {
        self.variables.get_or_init(|| {
            let mut vars = BTreeSet::new();
            self.root.collect_variables(&mut vars);
            vars.into_iter().collect()
        })
    }

    /// Evaluates against an assignment of variables to truth values.
    pub fn evaluate(&self, assignment: &[(char, bool)]) -> Result<bool, EvalError> {
        self.root.evaluate(assignment)
    }
}

impl fmt::Display for ParsedExpr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.root)
    }
}
