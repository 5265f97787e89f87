// Copyright (c) The qm-min Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Karnaugh-map grid layout for an n-variable function.
//!
//! The drawing itself belongs to the caller; this module only fixes the
//! geometry: which variables label the rows and columns, and which truth-table
//! row each cell denotes. Adjacent rows and columns follow Gray-code order so
//! neighboring cells differ in exactly one variable.

use crate::{
    errors::RangeError,
    MAX_VARIABLES, MIN_VARIABLES,
};
use arrayvec::ArrayVec;

/// The Gray-code sequence over `bits` bits: `0, 1, 3, 2, ...`.
pub fn gray_sequence(bits: usize) -> Vec<usize> {
    (0..1usize << bits).map(|i| i ^ (i >> 1)).collect()
}

/// The cell geometry of a Karnaugh map over the ordered variable list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KmapLayout {
    variables: ArrayVec<char, MAX_VARIABLES>,
    row_bits: usize,
    col_bits: usize,
    row_codes: Vec<usize>,
    col_codes: Vec<usize>,
}

impl KmapLayout {
    /// Lays out a map for `n` variables named `A`, `B`, ... in order. The
    /// first `n / 2` variables label the rows, the rest the columns.
    pub fn new(n: usize) -> Result<Self, RangeError> {
        if !(MIN_VARIABLES..=MAX_VARIABLES).contains(&n) {
            return Err(RangeError::VariableCount(n));
        }
        let row_bits = n / 2;
        let col_bits = n - row_bits;
        Ok(Self {
            variables: ('A'..).take(n).collect(),
            row_bits,
            col_bits,
            row_codes: gray_sequence(row_bits),
            col_codes: gray_sequence(col_bits),
        })
    }

    #[inline]
    pub fn row_variables(&self) -> &[char] {
        &self.variables[..self.row_bits]
    }

    #[inline]
    pub fn col_variables(&self) -> &[char] {
        &self.variables[self.row_bits..]
    }

    #[inline]
    pub fn row_count(&self) -> usize {
        self.row_codes.len()
    }

    #[inline]
    pub fn col_count(&self) -> usize {
        self.col_codes.len()
    }

    /// The truth-table row index displayed at grid position `(row, col)`.
    ///
    /// Row variables occupy the high bits of the index, column variables the
    /// low bits, matching the MSB-first variable ordering of the truth table.
    pub fn cell(&self, row: usize, col: usize) -> usize {
        (self.row_codes[row] << self.col_bits) | self.col_codes[col]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gray_sequence() {
        assert_eq!(gray_sequence(1), vec![0, 1]);
        assert_eq!(gray_sequence(2), vec![0, 1, 3, 2]);
        assert_eq!(gray_sequence(3), vec![0, 1, 3, 2, 6, 7, 5, 4]);
    }

    #[test]
    fn test_layout_shapes() {
        let two = KmapLayout::new(2).unwrap();
        assert_eq!((two.row_count(), two.col_count()), (2, 2));
        assert_eq!(two.row_variables(), &['A']);
        assert_eq!(two.col_variables(), &['B']);

        let three = KmapLayout::new(3).unwrap();
        assert_eq!((three.row_count(), three.col_count()), (2, 4));

        let four = KmapLayout::new(4).unwrap();
        assert_eq!((four.row_count(), four.col_count()), (4, 4));
        assert_eq!(four.row_variables(), &['A', 'B']);
        assert_eq!(four.col_variables(), &['C', 'D']);

        assert_eq!(KmapLayout::new(5), Err(RangeError::VariableCount(5)));
    }

    #[test]
    fn test_cells_cover_every_row_once() {
        let layout = KmapLayout::new(4).unwrap();
        let mut seen = [false; 16];
        for row in 0..layout.row_count() {
            for col in 0..layout.col_count() {
                seen[layout.cell(row, col)] = true;
            }
        }
        assert!(seen.iter().all(|&cell| cell));
    }

    #[test]
    fn test_neighbors_differ_in_one_bit() {
        let layout = KmapLayout::new(3).unwrap();
        for row in 0..layout.row_count() {
            for col in 0..layout.col_count() - 1 {
                let diff = layout.cell(row, col) ^ layout.cell(row, col + 1);
                assert_eq!(diff.count_ones(), 1);
            }
        }
    }
}
