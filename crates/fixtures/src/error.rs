use std::{num::ParseIntError, path::PathBuf};
use thiserror::Error;

/// Errors that can occur while reading a fixture file.
#[derive(Debug, Error)]
pub enum FixtureError {
    /// A line has fewer than the `input,result,gas,notes` columns.
    #[error("line {line}: missing `{field}` column")]
    MissingField {
        /// One based line number.
        line: usize,
        /// Name of the missing column.
        field: &'static str,
    },
    /// A byte column is not valid hex.
    #[error("line {line}: invalid hex in `{field}` column: {source}")]
    InvalidHex {
        /// One based line number.
        line: usize,
        /// Name of the column.
        field: &'static str,
        /// Underlying decoding error.
        source: hex::FromHexError,
    },
    /// The gas column is not a decimal number.
    #[error("line {line}: invalid gas value: {source}")]
    InvalidGas {
        /// One based line number.
        line: usize,
        /// Underlying parsing error.
        source: ParseIntError,
    },
    /// The fixture file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        /// Path of the fixture file.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
}
