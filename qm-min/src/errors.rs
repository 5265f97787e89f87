// Copyright (c) The qm-min Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use std::{error, fmt};

/// Errors reported while tokenizing or parsing an expression.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SyntaxError {
    /// A character outside the expression alphabet.
    UnexpectedChar { ch: char, pos: usize },
    /// A token that cannot start or continue a term at this position.
    UnexpectedToken { pos: usize },
    /// The expression ended while a term or group was still open.
    UnexpectedEnd,
    /// A closing parenthesis with no matching opening parenthesis.
    UnbalancedParen { pos: usize },
}

impl fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::UnexpectedChar { ch, pos } => {
                write!(f, "unexpected character '{}' at position {}", ch, pos)
            }
            Self::UnexpectedToken { pos } => {
                write!(f, "misplaced operator or operand at position {}", pos)
            }
            Self::UnexpectedEnd => write!(f, "unexpected end of expression"),
            Self::UnbalancedParen { pos } => {
                write!(f, "unbalanced parenthesis at position {}", pos)
            }
        }
    }
}

impl error::Error for SyntaxError {}

/// Errors reported while evaluating a parsed expression.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EvalError {
    /// A variable in the expression has no value in the assignment.
    UnboundVariable(char),
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::UnboundVariable(var) => {
                write!(f, "variable '{}' has no value in the assignment", var)
            }
        }
    }
}

impl error::Error for EvalError {}

/// Errors reported when an input is outside the bounds the minimizer supports.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RangeError {
    /// The variable count is outside `[MIN_VARIABLES, MAX_VARIABLES]`.
    VariableCount(usize),
    /// A minterm or don't-care index is outside `[0, 2^n)`.
    RowIndex { index: usize, limit: usize },
}

impl fmt::Display for RangeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::VariableCount(count) => {
                write!(
                    f,
                    "variable count {} is outside the supported range [{}, {}]",
                    count,
                    crate::MIN_VARIABLES,
                    crate::MAX_VARIABLES
                )
            }
            Self::RowIndex { index, limit } => {
                write!(f, "row index {} is outside [0, {})", index, limit)
            }
        }
    }
}

impl error::Error for RangeError {}

/// Errors reported for inputs that are well-formed but unusable.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EmptyInputError {
    /// The expression contains no variables, so there is nothing to tabulate.
    NoVariables,
    /// A row was claimed as both a minterm and a don't-care.
    OverlappingSets { row: usize },
}

impl fmt::Display for EmptyInputError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::NoVariables => write!(f, "expression contains no variables"),
            Self::OverlappingSets { row } => {
                write!(
                    f,
                    "row {} appears in both the minterm and don't-care sets",
                    row
                )
            }
        }
    }
}

impl error::Error for EmptyInputError {}

/// Any error the library can report.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Error {
    Syntax(SyntaxError),
    Eval(EvalError),
    Range(RangeError),
    EmptyInput(EmptyInputError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Syntax(err) => write!(f, "syntax error: {}", err),
            Self::Eval(err) => write!(f, "evaluation error: {}", err),
            Self::Range(err) => write!(f, "range error: {}", err),
            Self::EmptyInput(err) => write!(f, "empty input error: {}", err),
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Self::Syntax(err) => Some(err),
            Self::Eval(err) => Some(err),
            Self::Range(err) => Some(err),
            Self::EmptyInput(err) => Some(err),
        }
    }
}

impl From<SyntaxError> for Error {
    fn from(err: SyntaxError) -> Self {
        Self::Syntax(err)
    }
}

impl From<EvalError> for Error {
    fn from(err: EvalError) -> Self {
        Self::Eval(err)
    }
}

impl From<RangeError> for Error {
    fn from(err: RangeError) -> Self {
        Self::Range(err)
    }
}

impl From<EmptyInputError> for Error {
    fn from(err: EmptyInputError) -> Self {
        Self::EmptyInput(err)
    }
}
