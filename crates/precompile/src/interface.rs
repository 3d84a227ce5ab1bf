//! Interface for the precompiles. It contains the precompile result type,
//! the precompile output type, and the precompile error type.
use core::fmt;
use std::vec::Vec;

use crate::bls12_381::DecodeError;

/// A precompile operation result type
///
/// Returns either `Ok(output_bytes)` or `Err(error)`.
pub type PrecompileResult = Result<PrecompileOutput, PrecompileError>;

/// Precompile function type. Takes the raw input and returns precompile result.
pub type PrecompileFn = fn(&[u8]) -> PrecompileResult;

/// Precompile execution output
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PrecompileOutput {
    /// Output bytes
    pub bytes: Vec<u8>,
}

impl PrecompileOutput {
    /// Returns new precompile output with the given output bytes.
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            bytes: bytes.into(),
        }
    }

    /// Length of the output in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Is the output empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// Precompile error type.
///
/// The [`Display`](fmt::Display) output is the caller-facing message and is fixed per variant,
/// so identical failing inputs always produce identical messages.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PrecompileError {
    /// The G1 addition input is not exactly 256 bytes.
    InvalidInputLength,
    /// A coordinate is greater than or equal to the base field modulus.
    CoordinateOutOfRange,
    /// Decoded coordinates do not satisfy the curve equation.
    PointNotOnCurve,
    /// The point is not in the prime-order subgroup.
    ///
    /// Not raised by G1 addition, reserved for the rest of the EIP-2537 family.
    PointNotInSubgroup,
    /// The point encoding is structurally malformed.
    ///
    /// Reserved for the rest of the EIP-2537 family.
    MalformedEncoding,
    /// No precompile is registered under the selector.
    UnsupportedOperation(u8),
    /// The caller supplied output buffer cannot hold the result.
    OutputBufferTooSmall,
}

impl PrecompileError {
    /// Returns `true` if the error was caused by the input bytes rather than the call itself.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidInputLength
                | Self::CoordinateOutOfRange
                | Self::PointNotOnCurve
                | Self::PointNotInSubgroup
                | Self::MalformedEncoding
        )
    }
}

impl From<DecodeError> for PrecompileError {
    fn from(err: DecodeError) -> Self {
        match err {
            // A single point never reaches the codec with a bad length from `g1_add`,
            // so a length failure here is a malformed call.
            DecodeError::InvalidLength { .. } => Self::InvalidInputLength,
            DecodeError::CoordinateOutOfRange => Self::CoordinateOutOfRange,
            DecodeError::PointNotOnCurve => Self::PointNotOnCurve,
        }
    }
}

impl core::error::Error for PrecompileError {}

impl fmt::Display for PrecompileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::InvalidInputLength => {
                "invalid input parameters, invalid input length for G1 addition"
            }
            Self::CoordinateOutOfRange => {
                "invalid input parameters, coordinate is not a canonical field element"
            }
            Self::PointNotOnCurve => "invalid input parameters, point is not on curve",
            Self::PointNotInSubgroup => {
                "invalid input parameters, point is not in the correct subgroup"
            }
            Self::MalformedEncoding => "invalid input parameters, malformed point encoding",
            Self::UnsupportedOperation(selector) => {
                return write!(f, "unsupported operation {selector}")
            }
            Self::OutputBufferTooSmall => "output buffer too small",
        };
        f.write_str(s)
    }
}
