//! `add` subcommand.
use clap::Parser;
use precompile::{Operation, PrecompileError, Precompiles};

/// `add` subcommand
#[derive(Parser, Debug)]
pub struct Cmd {
    /// Hex encoded input, optionally `0x` prefixed
    input: String,
    /// Selector of the operation to run
    #[arg(short, long, default_value_t = Operation::G1Add.selector())]
    selector: u8,
}

/// Error returned by the `add` subcommand.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Input is not valid hex.
    #[error("invalid hex input: {0}")]
    Hex(#[from] hex::FromHexError),
    /// The precompile rejected the input.
    #[error(transparent)]
    Precompile(#[from] PrecompileError),
}

impl Cmd {
    /// Runs `add` command.
    pub fn run(&self) -> Result<(), Error> {
        println!("{}", evaluate(self.selector, &self.input)?);
        Ok(())
    }
}

fn evaluate(selector: u8, input: &str) -> Result<String, Error> {
    let input = input.trim();
    let input = hex::decode(input.strip_prefix("0x").unwrap_or(input))?;
    let output = Precompiles::eip2537().run(selector, &input)?;
    Ok(format!("0x{}", hex::encode(output.bytes)))
}
