use super::g1::DecodeError;
use crate::bls12_381_const::{FP_PAD_BY, MODULUS_REPR, PADDED_FP_LENGTH};
use ark_bls12_381::Fq;
use ark_ff::{BigInteger, PrimeField};
use core::cmp::Ordering;

/// Encodes a single finite field element into byte slice with padding.
pub(super) fn fp_to_bytes(out: &mut [u8], input: &Fq) {
    if out.len() != PADDED_FP_LENGTH {
        return;
    }
    let (padding, rest) = out.split_at_mut(FP_PAD_BY);
    padding.fill(0);
    rest.copy_from_slice(&input.into_bigint().to_bytes_be());
}

/// Decodes a padded big-endian field element.
///
/// The whole 64 byte value must be smaller than the base field modulus, so non-zero padding is
/// rejected the same way as an unpadded value that is too large.
pub(super) fn fp_from_bendian(input: &[u8]) -> Result<Fq, DecodeError> {
    if input.len() != PADDED_FP_LENGTH {
        return Err(DecodeError::InvalidLength {
            expected: PADDED_FP_LENGTH,
            actual: input.len(),
        });
    }
    let (padding, unpadded) = input.split_at(FP_PAD_BY);
    if padding.iter().any(|&x| x != 0) || !is_valid_be(unpadded) {
        return Err(DecodeError::CoordinateOutOfRange);
    }

    Ok(Fq::from_be_bytes_mod_order(unpadded))
}

/// Checks if the unpadded input is a valid big-endian representation of a field element.
fn is_valid_be(input: &[u8]) -> bool {
    for (i, modul) in input.iter().zip(MODULUS_REPR.iter()) {
        match i.cmp(modul) {
            Ordering::Greater => return false,
            Ordering::Less => return true,
            Ordering::Equal => continue,
        }
    }
    // false if matching the modulus
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use ark_ff::{One, Zero};

    fn padded(value: &[u8]) -> [u8; PADDED_FP_LENGTH] {
        let mut out = [0u8; PADDED_FP_LENGTH];
        out[PADDED_FP_LENGTH - value.len()..].copy_from_slice(value);
        out
    }

    #[test]
    fn modulus_is_out_of_range() {
        assert_eq!(
            fp_from_bendian(&padded(&MODULUS_REPR)),
            Err(DecodeError::CoordinateOutOfRange)
        );
    }

    #[test]
    fn modulus_minus_one_is_canonical() {
        let mut value = MODULUS_REPR;
        value[value.len() - 1] -= 1;
        assert_eq!(fp_from_bendian(&padded(&value)), Ok(-Fq::one()));
    }

    #[test]
    fn all_ones_is_out_of_range() {
        assert_eq!(
            fp_from_bendian(&padded(&[0xff; 48])),
            Err(DecodeError::CoordinateOutOfRange)
        );
    }

    #[test]
    fn non_zero_padding_is_out_of_range() {
        let mut input = padded(&[1]);
        input[0] = 1;
        assert_eq!(fp_from_bendian(&input), Err(DecodeError::CoordinateOutOfRange));
        input[0] = 0;
        input[FP_PAD_BY - 1] = 1;
        assert_eq!(fp_from_bendian(&input), Err(DecodeError::CoordinateOutOfRange));
    }

    #[test]
    fn wrong_length_is_rejected() {
        assert_eq!(
            fp_from_bendian(&[0u8; 48]),
            Err(DecodeError::InvalidLength {
                expected: 64,
                actual: 48
            })
        );
    }

    #[test]
    fn small_values_decode() {
        assert_eq!(fp_from_bendian(&padded(&[])), Ok(Fq::zero()));
        assert_eq!(fp_from_bendian(&padded(&[4])), Ok(Fq::from(4u64)));
        assert_eq!(fp_from_bendian(&padded(&[1, 0])), Ok(Fq::from(256u64)));
    }

    #[test]
    fn encodes_with_zero_padding() {
        let mut out = [0xaa; PADDED_FP_LENGTH];
        fp_to_bytes(&mut out, &Fq::from(0x0102u64));
        assert_eq!(out, padded(&[1, 2]));

        let mut value = MODULUS_REPR;
        value[value.len() - 1] -= 1;
        fp_to_bytes(&mut out, &-Fq::one());
        assert_eq!(out, padded(&value));
    }

    #[test]
    fn encode_ignores_wrong_sized_output() {
        let mut out = [0xaa; 48];
        fp_to_bytes(&mut out, &Fq::one());
        assert_eq!(out, [0xaa; 48]);
    }
}
