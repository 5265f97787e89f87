// Copyright (c) The qm-min Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::{rows::RowSet, MAX_ROWS, MAX_VARIABLES, MIN_VARIABLES};
use proptest::prelude::*;

impl Arbitrary for RowSet {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        prop::collection::btree_set(0..MAX_ROWS, 0..=MAX_ROWS)
            .prop_map(RowSet::from_rows)
            .boxed()
    }
}

/// What a truth-table row is, from the minimizer's point of view.
#[derive(Clone, Copy, Debug)]
enum RowKind {
    Off,
    Minterm,
    DontCare,
}

/// Generates a variable count in the supported range together with disjoint
/// minterm and don't-care index lists over its rows.
pub fn care_split() -> impl Strategy<Value = (usize, Vec<usize>, Vec<usize>)> {
    (MIN_VARIABLES..=MAX_VARIABLES)
        .prop_flat_map(|n| {
            let kinds = prop_oneof![
                Just(RowKind::Off),
                Just(RowKind::Minterm),
                Just(RowKind::DontCare),
            ];
            (Just(n), prop::collection::vec(kinds, 1 << n))
        })
        .prop_map(|(n, kinds)| {
            let mut minterms = Vec::new();
            let mut dont_cares = Vec::new();
            for (row, kind) in kinds.into_iter().enumerate() {
                match kind {
                    RowKind::Off => {}
                    RowKind::Minterm => minterms.push(row),
                    RowKind::DontCare => dont_cares.push(row),
                }
            }
            (n, minterms, dont_cares)
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    proptest! {
        #[test]
        fn test_care_split_is_disjoint((n, minterms, dont_cares) in care_split()) {
            let limit = 1usize << n;
            let minterm_set = RowSet::from_rows(minterms.iter().copied());
            let dont_care_set = RowSet::from_rows(dont_cares.iter().copied());
            prop_assert!(minterm_set.is_disjoint(&dont_care_set));
            prop_assert!(minterms.iter().chain(&dont_cares).all(|&row| row < limit));
        }

        #[test]
        fn test_row_set_arbitrary_in_bounds(set in any::<RowSet>()) {
            prop_assert!(set.iter().all(|row| row < MAX_ROWS));
        }
    }
}
