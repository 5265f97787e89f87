// Copyright (c) The qm-min Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::MAX_ROWS;
use bitvec::prelude::*;
use itertools::Itertools;
use std::fmt;

pub(crate) type RowBits = BitArr!(for MAX_ROWS, in u16);

/// A set of truth-table row indices, at most [`MAX_ROWS`] of them.
#[derive(Clone, Copy, Default, PartialEq, Eq)]
pub struct RowSet {
    bits: RowBits,
}

impl RowSet {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a set from row indices. Indices must be below [`MAX_ROWS`].
    pub fn from_rows(rows: impl IntoIterator<Item = usize>) -> Self {
        let mut set = Self::new();
        for row in rows {
            set.insert(row);
        }
        set
    }

    #[inline]
    pub fn insert(&mut self, row: usize) {
        self.bits.set(row, true);
    }

    #[inline]
    pub fn contains(&self, row: usize) -> bool {
        self.bits[row]
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.bits.count_ones()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bits.not_any()
    }

    /// Iterates over the rows in ascending order.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.bits.iter_ones()
    }

    pub fn union(&self, other: &Self) -> Self {
        let mut out = *self;
        for row in other.iter() {
            out.insert(row);
        }
        out
    }

    pub fn intersection(&self, other: &Self) -> Self {
        self.iter().filter(|&row| other.contains(row)).collect()
    }

    pub fn is_subset(&self, other: &Self) -> bool {
        self.iter().all(|row| other.contains(row))
    }

    pub fn is_disjoint(&self, other: &Self) -> bool {
        self.iter().all(|row| !other.contains(row))
    }
}

impl FromIterator<usize> for RowSet {
    fn from_iter<T: IntoIterator<Item = usize>>(iter: T) -> Self {
        Self::from_rows(iter)
    }
}

impl fmt::Debug for RowSet {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "RowSet {{{}}}", self.iter().join(", "))
    }
}
