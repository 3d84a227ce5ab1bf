//! BLS12-381 G1 add precompile. More details in [`g1_add`]
use super::g1::{decode_point, encode_point};
use crate::bls12_381_const::{G1_ADD_INPUT_LENGTH, G1_OUTPUT_LENGTH, PADDED_G1_LENGTH};
use crate::{
    Operation, PrecompileError, PrecompileOutput, PrecompileResult, PrecompileWithOperation,
};

/// [EIP-2537](https://eips.ethereum.org/EIPS/eip-2537#specification) BLS12_G1ADD precompile.
pub const PRECOMPILE: PrecompileWithOperation = PrecompileWithOperation(Operation::G1Add, g1_add);

/// G1 addition call expects `256` bytes as an input that is interpreted as byte
/// concatenation of two G1 points (`128` bytes each).
/// Output is an encoding of addition operation result - single G1 point (`128`
/// bytes).
/// See also: <https://eips.ethereum.org/EIPS/eip-2537#abi-for-g1-addition>
pub fn g1_add(input: &[u8]) -> PrecompileResult {
    g1_add_bytes(input).map(PrecompileOutput::new)
}

/// Same as [`g1_add`] but returns the encoded sum as a fixed size array.
pub fn g1_add_bytes(input: &[u8]) -> Result<[u8; G1_OUTPUT_LENGTH], PrecompileError> {
    if input.len() != G1_ADD_INPUT_LENGTH {
        tracing::trace!(len = input.len(), "G1ADD input has invalid length");
        return Err(PrecompileError::InvalidInputLength);
    }

    // G1 addition does _not_ require a subgroup check, any point on the curve is accepted.
    let (a, b) = input.split_at(PADDED_G1_LENGTH);
    let a = decode_point(a).inspect_err(|err| tracing::trace!(%err, "invalid first G1 point"))?;
    let b = decode_point(b).inspect_err(|err| tracing::trace!(%err, "invalid second G1 point"))?;

    Ok(encode_point(&(a + b)))
}
