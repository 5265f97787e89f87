// Copyright (c) The qm-min Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::rows::RowSet;
use std::fmt;

/// A product term over the ordered variable list, stored as a `(base, mask)`
/// pair of row-index bit patterns.
///
/// Set bits of `mask` mark positions that are "don't care within this
/// implicant"; the implicant covers every row of the form `base | (s & mask)`.
/// `base` is kept normalized: bits under `mask` are always zero.
///
/// Bit `n - 1 - k` of a row index corresponds to the k-th variable, so the
/// first (alphabetically smallest) variable is the most significant bit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Implicant {
    base: u8,
    mask: u8,
}

impl Implicant {
    /// The implicant covering exactly one row.
    #[inline]
    pub fn minterm(row: usize) -> Self {
        Self {
            base: row as u8,
            mask: 0,
        }
    }

    #[inline]
    pub fn base(&self) -> u8 {
        self.base
    }

    #[inline]
    pub fn mask(&self) -> u8 {
        self.mask
    }

    /// Combines two implicants whose bases differ in exactly one position and
    /// whose masks agree. The result absorbs the differing position into the
    /// mask and covers the union of both row sets.
    pub fn combine(&self, other: &Self) -> Option<Self> {
        if self.mask != other.mask {
            return None;
        }
        let diff = self.base ^ other.base;
        if diff.count_ones() != 1 {
            return None;
        }
        Some(Self {
            base: self.base & !diff,
            mask: self.mask | diff,
        })
    }

    #[inline]
    pub fn covers(&self, row: usize) -> bool {
        (row as u8) & !self.mask == self.base
    }

    /// The set of rows this implicant denotes within an n-variable table.
    pub fn row_set(&self, n: usize) -> RowSet {
        (0..1usize << n).filter(|&row| self.covers(row)).collect()
    }

    /// True if this implicant's row set contains `other`'s row set.
    pub fn subsumes(&self, other: &Self) -> bool {
        other.mask & !self.mask == 0 && other.base & !self.mask == self.base
    }

    /// Number of literals in the rendered product term.
    #[inline]
    pub fn literal_count(&self, n: usize) -> usize {
        n - self.mask.count_ones() as usize
    }

    /// Displays the implicant as an n-character binary pattern, `-` marking
    /// masked positions, most significant variable first.
    #[inline]
    pub fn bits_display(&self, n: usize) -> ImplicantBitsDisplay<'_> {
        ImplicantBitsDisplay { implicant: self, n }
    }

    /// Displays the implicant as a product term over `variables`, e.g. `AB'`.
    /// An implicant with no literals displays as `1`.
    #[inline]
    pub fn term_display<'a>(&'a self, variables: &'a [char]) -> ImplicantTermDisplay<'a> {
        ImplicantTermDisplay {
            implicant: self,
            variables,
        }
    }
}

pub struct ImplicantBitsDisplay<'a> {
    implicant: &'a Implicant,
    n: usize,
}

impl<'a> fmt::Display for ImplicantBitsDisplay<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for k in 0..self.n {
            let bit = 1u8 << (self.n - 1 - k);
            let ch = if self.implicant.mask & bit != 0 {
                '-'
            } else if self.implicant.base & bit != 0 {
                '1'
            } else {
                '0'
            };
            write!(f, "{}", ch)?;
        }
        Ok(())
    }
}

pub struct ImplicantTermDisplay<'a> {
    implicant: &'a Implicant,
    variables: &'a [char],
}

impl<'a> fmt::Display for ImplicantTermDisplay<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let n = self.variables.len();
        if self.implicant.literal_count(n) == 0 {
            return write!(f, "1");
        }
        for (k, var) in self.variables.iter().enumerate() {
            let bit = 1u8 << (n - 1 - k);
            if self.implicant.mask & bit != 0 {
                continue;
            }
            if self.implicant.base & bit != 0 {
                write!(f, "{}", var)?;
            } else {
                write!(f, "{}'", var)?;
            }
        }
        Ok(())
    }
}
