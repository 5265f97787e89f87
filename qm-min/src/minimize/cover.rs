// Copyright (c) The qm-min Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::{implicant::Implicant, rows::RowSet};
use itertools::Itertools;

/// Greedily selects prime implicants, in generation order, until every
/// minterm is covered. Don't-cares never count toward coverage.
///
/// This is a greedy approximation: where several minimal-cost covers exist it
/// returns the one the scan reaches first, not necessarily a globally minimal
/// one (that would take Petrick's method).
pub(super) fn select_cover(primes: &[Implicant], n: usize, minterms: &RowSet) -> Vec<Implicant> {
    let mut cover = Vec::new();
    let mut covered = RowSet::new();
    for prime in primes {
        if covered == *minterms {
            break;
        }
        let gained = prime.row_set(n).intersection(minterms);
        if !gained.is_subset(&covered) {
            cover.push(*prime);
            covered = covered.union(&gained);
        }
    }
    debug_assert_eq!(covered, *minterms, "every minterm is covered");
    cover
}

/// Renders a cover as a sum-of-products expression.
///
/// The empty cover renders as `0`; a literal-free term renders as `1`.
pub(super) fn sop_expression(cover: &[Implicant], variables: &[char]) -> String {
    if cover.is_empty() {
        return "0".to_string();
    }
    cover
        .iter()
        .map(|imp| imp.term_display(variables).to_string())
        .join(" + ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::minimize::primes::prime_implicants;

    fn minimize_terms(n: usize, minterms: &[usize]) -> (Vec<Implicant>, RowSet) {
        let set = RowSet::from_rows(minterms.iter().copied());
        let generation = prime_implicants(n, &set);
        (select_cover(&generation.primes, n, &set), set)
    }

    #[test]
    fn test_empty_minterms_render_zero() {
        let (cover, _) = minimize_terms(2, &[]);
        assert!(cover.is_empty());
        assert_eq!(sop_expression(&cover, &['A', 'B']), "0");
    }

    #[test]
    fn test_full_universe_renders_one() {
        let (cover, _) = minimize_terms(2, &[0, 1, 2, 3]);
        assert_eq!(sop_expression(&cover, &['A', 'B']), "1");
    }

    #[test]
    fn test_cover_is_exact() {
        let (cover, minterms) = minimize_terms(3, &[1, 3, 5]);
        let mut covered = RowSet::new();
        for implicant in &cover {
            covered = covered.union(&implicant.row_set(3).intersection(&minterms));
        }
        assert_eq!(covered, minterms);
    }

    #[test]
    fn test_redundant_primes_skipped() {
        // f = A'B' + AB over two variables has primes covering {0} and {3};
        // neither is redundant, and both survive selection.
        let (cover, _) = minimize_terms(2, &[0, 3]);
        assert_eq!(cover.len(), 2);
        assert_eq!(sop_expression(&cover, &['A', 'B']), "A'B' + AB");
    }
}
