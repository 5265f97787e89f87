// Copyright (c) The qm-min Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use clap::Parser;
use color_eyre::Result;
use qm_min::{minimize_from_expression, minimize_from_minterms, truth_table};

#[derive(Debug, Parser)]
pub struct QmApp {
    #[clap(subcommand)]
    command: QmCommand,
}

#[derive(Debug, Parser)]
pub enum QmCommand {
    /// Minimize an n-variable function given explicit minterm rows.
    Minimize {
        /// Number of variables (2 to 4).
        #[clap(long, short)]
        vars: usize,

        /// Minterm row index; repeat for each minterm.
        #[clap(long, short)]
        minterms: Vec<usize>,

        /// Don't-care row index; repeat for each don't-care.
        #[clap(long, short)]
        dont_cares: Vec<usize>,
    },

    /// Minimize the function denoted by an infix expression.
    Simplify {
        /// Expression such as "A + A'B".
        expression: String,
    },

    /// Print the truth table of an infix expression.
    Table {
        /// Expression such as "A + A'B".
        expression: String,
    },
}

impl QmApp {
    pub fn exec(self) -> Result<()> {
        self.command.exec()
    }
}

impl QmCommand {
    pub fn exec(self) -> Result<()> {
        match self {
            Self::Minimize {
                vars,
                minterms,
                dont_cares,
            } => {
                let result = minimize_from_minterms(vars, &minterms, &dont_cares)?;
                print!("{}", result.trace_display());
                println!("minimized: {}", result.expression());
                Ok(())
            }
            Self::Simplify { expression } => {
                let result = minimize_from_expression(&expression)?;
                print!("{}", result.trace_display());
                println!("minimized: {}", result.expression());
                Ok(())
            }
            Self::Table { expression } => {
                let table = truth_table(&expression)?;
                print!("{}", table);
                Ok(())
            }
        }
    }
}
