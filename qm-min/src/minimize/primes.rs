// Copyright (c) The qm-min Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use super::Step;
use crate::{implicant::Implicant, rows::RowSet};
use itertools::Itertools;
use std::collections::{BTreeMap, BTreeSet};

pub(super) struct PrimeGeneration {
    pub(super) primes: Vec<Implicant>,
    pub(super) steps: Vec<Step>,
}

/// Generates all prime implicants of the care set (minterms plus don't-cares)
/// by iterative pairwise combination.
///
/// Each round combines same-mask implicant pairs whose bases differ in exactly
/// one bit; implicants untouched by any combination in their round are
/// promoted prime. Working lists are kept sorted, so the procedure is
/// deterministic. A final pass drops promoted implicants whose row set is a
/// strict subset of another prime's.
pub(super) fn prime_implicants(n: usize, care: &RowSet) -> PrimeGeneration {
    let mut working: Vec<Implicant> = care.iter().map(Implicant::minterm).collect();
    let mut steps = Vec::new();
    steps.push(initial_groups(&working));

    let mut primes: Vec<Implicant> = Vec::new();
    let mut round = 1;
    while !working.is_empty() {
        let mut used = vec![false; working.len()];
        let mut combined = BTreeSet::new();
        for (i, j) in (0..working.len()).tuple_combinations() {
            if let Some(merged) = working[i].combine(&working[j]) {
                used[i] = true;
                used[j] = true;
                combined.insert(merged);
            }
        }

        for (ix, implicant) in working.iter().enumerate() {
            if !used[ix] {
                primes.push(*implicant);
            }
        }

        working = combined.into_iter().collect();
        if !working.is_empty() {
            steps.push(Step::CombineRound {
                round,
                implicants: working.clone(),
            });
            round += 1;
        }
    }

    // An implicant promoted in an early round can be swallowed by a larger
    // one found later; drop such subsets.
    let primes: Vec<Implicant> = primes
        .iter()
        .filter(|imp| !primes.iter().any(|other| *imp != other && other.subsumes(imp)))
        .copied()
        .collect();

    steps.push(Step::PrimeImplicants {
        implicants: primes.clone(),
    });
    PrimeGeneration { primes, steps }
}

fn initial_groups(seeds: &[Implicant]) -> Step {
    let mut groups: BTreeMap<u32, Vec<Implicant>> = BTreeMap::new();
    for &implicant in seeds {
        groups
            .entry(implicant.base().count_ones())
            .or_default()
            .push(implicant);
    }
    Step::InitialGroups { groups }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn primes_for(n: usize, care: &[usize]) -> Vec<Implicant> {
        prime_implicants(n, &RowSet::from_rows(care.iter().copied())).primes
    }

    #[test]
    fn test_single_minterm_is_its_own_prime() {
        let primes = primes_for(2, &[3]);
        assert_eq!(primes, vec![Implicant::minterm(3)]);
    }

    #[test]
    fn test_all_even_rows_collapse() {
        // Rows with the last bit clear combine into the single prime `D'`.
        let primes = primes_for(4, &[0, 2, 4, 6, 8, 10, 12, 14]);
        assert_eq!(primes.len(), 1);
        assert_eq!(primes[0].bits_display(4).to_string(), "---0");
    }

    #[test]
    fn test_full_universe_collapses_to_one() {
        let primes = primes_for(2, &[0, 1, 2, 3]);
        assert_eq!(primes.len(), 1);
        assert_eq!(primes[0].bits_display(2).to_string(), "--");
    }

    #[test]
    fn test_primes_are_maximal() {
        let care = RowSet::from_rows([1, 3, 5, 7, 6]);
        let generation = prime_implicants(3, &care);
        for (a, b) in generation.primes.iter().tuple_combinations() {
            assert!(
                !a.subsumes(b) && !b.subsumes(a),
                "{} and {} overlap entirely",
                a.bits_display(3),
                b.bits_display(3)
            );
        }
        // Every prime stays within the care set.
        for prime in &generation.primes {
            assert!(prime.row_set(3).is_subset(&care));
        }
    }

    #[test]
    fn test_trace_stages() {
        let generation = prime_implicants(3, &RowSet::from_rows([1, 3, 5]));
        assert!(matches!(generation.steps[0], Step::InitialGroups { .. }));
        assert!(matches!(
            generation.steps[1],
            Step::CombineRound { round: 1, .. }
        ));
        assert!(matches!(
            generation.steps.last(),
            Some(Step::PrimeImplicants { .. })
        ));
    }
}
