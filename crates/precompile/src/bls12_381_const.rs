//! Constants related to the bls12-381 precompile inputs and outputs.

/// FP_LENGTH specifies the number of bytes needed to represent an
/// Fp element. This is an element in the base field of BLS12-381.
///
/// Note: The base field is used to define G1 elements.
pub const FP_LENGTH: usize = 48;
/// PADDED_FP_LENGTH specifies the number of bytes that the EVM will use
/// to represent an Fp element according to EIP-2537.
///
/// Note: We only need FP_LENGTH number of bytes to represent it,
/// but we pad the byte representation to be 32 byte aligned as specified in EIP 2537.
pub const PADDED_FP_LENGTH: usize = 64;
/// FP_PAD_BY specifies the number of zero bytes an Fp element is left padded by.
pub const FP_PAD_BY: usize = PADDED_FP_LENGTH - FP_LENGTH;

/// PADDED_G1_LENGTH specifies the number of bytes that the EVM will use to represent
/// a G1 element according to padding rules specified in EIP-2537.
///
/// Note: A G1 element contains 2 Fp elements.
pub const PADDED_G1_LENGTH: usize = 2 * PADDED_FP_LENGTH;

/// G1_ADD_INPUT_LENGTH specifies the number of bytes that the input to G1ADD
/// must use.
///
/// Note: The input to the G1 addition precompile is 2 G1 elements.
pub const G1_ADD_INPUT_LENGTH: usize = 2 * PADDED_G1_LENGTH;
/// G1_OUTPUT_LENGTH specifies the number of bytes of a G1 operation result.
pub const G1_OUTPUT_LENGTH: usize = PADDED_G1_LENGTH;

/// Number of bytes the native EIP-2537 calling convention preallocates for a result.
///
/// Sized for the largest result of the family, a padded G2 point.
pub const PREALLOCATE_FOR_RESULT_BYTES: usize = 2 * PADDED_G1_LENGTH;
/// Number of bytes the native EIP-2537 calling convention preallocates for an error message.
pub const PREALLOCATE_FOR_ERROR_BYTES: usize = 256;

/// Constant `b` of the G1 curve equation `y^2 = x^3 + b`.
pub const G1_CURVE_B: u64 = 4;

/// Base field modulus, big-endian non-Montgomery form.
pub const MODULUS_REPR: [u8; FP_LENGTH] = [
    0x1a, 0x01, 0x11, 0xea, 0x39, 0x7f, 0xe6, 0x9a, 0x4b, 0x1b, 0xa7, 0xb6, 0x43, 0x4b, 0xac, 0xd7,
    0x64, 0x77, 0x4b, 0x84, 0xf3, 0x85, 0x12, 0xbf, 0x67, 0x30, 0xd2, 0xa0, 0xf6, 0xb0, 0xf6, 0x24,
    0x1e, 0xab, 0xff, 0xfe, 0xb1, 0x53, 0xff, 0xff, 0xb9, 0xfe, 0xff, 0xff, 0xff, 0xff, 0xaa, 0xab,
];
