use super::utils::{fp_from_bendian, fp_to_bytes};
use crate::bls12_381_const::{G1_CURVE_B, PADDED_FP_LENGTH, PADDED_G1_LENGTH};
use ark_bls12_381::Fq;
use ark_ff::Field;
use core::fmt;

/// A member of the BLS12-381 G1 group in affine form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AffinePoint {
    /// The group identity. It has no coordinates and is encoded as all zeroes.
    Infinity,
    /// A finite point satisfying `y^2 = x^3 + 4`.
    Point {
        /// Affine x coordinate.
        x: Fq,
        /// Affine y coordinate.
        y: Fq,
    },
}

impl AffinePoint {
    /// Creates a finite point, checking that it lies on the curve.
    pub fn new(x: Fq, y: Fq) -> Result<Self, DecodeError> {
        let point = Self::Point { x, y };
        if !point.is_on_curve() {
            return Err(DecodeError::PointNotOnCurve);
        }
        Ok(point)
    }

    /// Returns `true` if this is the point at infinity.
    #[inline]
    pub fn is_infinity(&self) -> bool {
        matches!(self, Self::Infinity)
    }

    /// Returns the affine coordinates, or `None` for the point at infinity.
    #[inline]
    pub fn xy(&self) -> Option<(Fq, Fq)> {
        match *self {
            Self::Infinity => None,
            Self::Point { x, y } => Some((x, y)),
        }
    }

    /// Checks the curve equation. The point at infinity is always on the curve.
    pub fn is_on_curve(&self) -> bool {
        let Some((x, y)) = self.xy() else {
            return true;
        };
        y.square() == x.square() * x + Fq::from(G1_CURVE_B)
    }
}

/// Error returned when a G1 point encoding cannot be decoded.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DecodeError {
    /// The encoding is not of the expected length.
    InvalidLength {
        /// Expected length in bytes.
        expected: usize,
        /// Actual length in bytes.
        actual: usize,
    },
    /// A coordinate is greater than or equal to the field modulus.
    CoordinateOutOfRange,
    /// The coordinates do not satisfy the curve equation.
    PointNotOnCurve,
}

impl core::error::Error for DecodeError {}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength { expected, actual } => {
                write!(f, "point encoding should be {expected} bytes, was {actual}")
            }
            Self::CoordinateOutOfRange => {
                f.write_str("coordinate is not a canonical field element")
            }
            Self::PointNotOnCurve => f.write_str("point is not on curve"),
        }
    }
}

/// Encodes a G1 point in affine format into byte slice with padded elements.
///
/// The point at infinity encodes as all zeroes.
pub fn encode_point(point: &AffinePoint) -> [u8; PADDED_G1_LENGTH] {
    let mut out = [0u8; PADDED_G1_LENGTH];
    if let Some((x, y)) = point.xy() {
        let (out_x, out_y) = out.split_at_mut(PADDED_FP_LENGTH);
        fp_to_bytes(out_x, &x);
        fp_to_bytes(out_y, &y);
    }
    out
}

/// Decodes a G1 point from its 128 byte representation with padded elements.
///
/// - The all zero encoding is the point at infinity.
/// - If the x or y coordinate do not represent a canonical field element, an error is returned.
/// - If the point is not on the curve, an error is returned.
///
/// Note: no subgroup check is performed.
pub fn decode_point(input: &[u8]) -> Result<AffinePoint, DecodeError> {
    if input.len() != PADDED_G1_LENGTH {
        return Err(DecodeError::InvalidLength {
            expected: PADDED_G1_LENGTH,
            actual: input.len(),
        });
    }

    // (0, 0) is not on the curve, EIP-2537 reserves it for the identity.
    if input.iter().all(|&b| b == 0) {
        return Ok(AffinePoint::Infinity);
    }

    let x = fp_from_bendian(&input[..PADDED_FP_LENGTH])?;
    let y = fp_from_bendian(&input[PADDED_FP_LENGTH..])?;
    AffinePoint::new(x, y)
}
