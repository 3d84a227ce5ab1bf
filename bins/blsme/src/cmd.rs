//! `blsme` subcommands.
pub mod add;
pub mod conformance;

use clap::Parser;

/// `blsme` entry point.
#[derive(Parser, Debug)]
#[command(infer_subcommands = true)]
pub enum MainCmd {
    /// Run CSV conformance fixtures against a precompile
    Fixtures(conformance::Cmd),
    /// Evaluate a single hex encoded input
    Add(add::Cmd),
}

/// Error returned by a subcommand.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Fixture run failed.
    #[error(transparent)]
    Fixtures(#[from] conformance::TestError),
    /// Single evaluation failed.
    #[error(transparent)]
    Add(#[from] add::Error),
}

impl MainCmd {
    /// Runs the selected subcommand.
    pub fn run(&self) -> Result<(), Error> {
        match self {
            Self::Fixtures(cmd) => cmd.run().map_err(Into::into),
            Self::Add(cmd) => cmd.run().map_err(Into::into),
        }
    }
}
