// Copyright (c) The qm-min Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! A bounded Quine-McCluskey minimizer for boolean functions of 2 to 4
//! variables.
//!
//! Functions come in either as infix expressions (`A + A'B`, with `'` as
//! postfix NOT, implicit or `*`/`&` AND, and `+`/`|` OR) or as explicit
//! minterm and don't-care row sets. The minimizer enumerates prime implicants
//! by pairwise combination, greedily selects a cover, and reports every
//! intermediate stage as a renderable trace alongside the final
//! sum-of-products expression.

pub mod errors;
pub mod expr;
pub mod implicant;
pub mod kmap;
pub mod minimize;
#[cfg(any(test, feature = "proptest1"))]
pub mod proptest_helpers;
pub mod rows;
pub mod table;

pub use minimize::{minimize_from_expression, minimize_from_minterms, truth_table, Minimization};

/// The smallest variable count the minimizer accepts.
pub const MIN_VARIABLES: usize = 2;

/// The largest variable count the minimizer accepts.
pub const MAX_VARIABLES: usize = 4;

/// The largest truth-table size, `2^MAX_VARIABLES`.
pub const MAX_ROWS: usize = 1 << MAX_VARIABLES;
