// Copyright (c) The qm-min Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::implicant::Implicant;
use itertools::Itertools;
use std::{collections::BTreeMap, fmt};

/// One stage snapshot of the minimization pipeline.
///
/// The trace is a first-class output: callers render it to walk a reader
/// through the procedure, stage by stage.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Step {
    /// The seed implicants, grouped by the number of 1-bits in their rows.
    InitialGroups {
        groups: BTreeMap<u32, Vec<Implicant>>,
    },
    /// The implicants produced by one pairwise-combination round.
    CombineRound {
        round: usize,
        implicants: Vec<Implicant>,
    },
    /// All prime implicants, in generation order.
    PrimeImplicants { implicants: Vec<Implicant> },
    /// The greedily selected cover.
    SelectedCover { implicants: Vec<Implicant> },
}

impl Step {
    /// Renders the step for an n-variable function.
    #[inline]
    pub fn display(&self, n: usize) -> StepDisplay<'_> {
        StepDisplay { step: self, n }
    }
}

pub struct StepDisplay<'a> {
    step: &'a Step,
    n: usize,
}

impl<'a> StepDisplay<'a> {
    fn write_implicants(&self, f: &mut fmt::Formatter, implicants: &[Implicant]) -> fmt::Result {
        writeln!(
            f,
            "  {}",
            implicants
                .iter()
                .map(|imp| imp.bits_display(self.n))
                .join(", ")
        )
    }
}

impl<'a> fmt::Display for StepDisplay<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.step {
            Step::InitialGroups { groups } => {
                writeln!(f, "initial groups by 1-bit count:")?;
                for (ones, implicants) in groups {
                    write!(f, "  {}: ", ones)?;
                    writeln!(
                        f,
                        "{}",
                        implicants
                            .iter()
                            .map(|imp| imp.bits_display(self.n))
                            .join(", ")
                    )?;
                }
                Ok(())
            }
            Step::CombineRound { round, implicants } => {
                writeln!(f, "combination round {}:", round)?;
                self.write_implicants(f, implicants)
            }
            Step::PrimeImplicants { implicants } => {
                writeln!(f, "prime implicants:")?;
                self.write_implicants(f, implicants)
            }
            Step::SelectedCover { implicants } => {
                writeln!(f, "selected cover:")?;
                self.write_implicants(f, implicants)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_rendering() {
        let a = Implicant::minterm(0b01);
        let b = Implicant::minterm(0b11);
        let combined = a.combine(&b).unwrap();

        let mut groups = BTreeMap::new();
        groups.insert(1, vec![a]);
        groups.insert(2, vec![b]);
        let initial = Step::InitialGroups { groups };
        assert_eq!(
            initial.display(2).to_string(),
            "initial groups by 1-bit count:\n  1: 01\n  2: 11\n"
        );

        let round = Step::CombineRound {
            round: 1,
            implicants: vec![combined],
        };
        assert_eq!(
            round.display(2).to_string(),
            "combination round 1:\n  -1\n"
        );
    }
}
