//! Affine group law on the G1 curve `y^2 = x^3 + 4`.
//!
//! Operands are expected to be on the curve, which [`decode_point`](super::decode_point)
//! guarantees. Subgroup membership is not required.
use super::g1::AffinePoint;
use ark_bls12_381::Fq;
use ark_ff::Field;
use core::ops::{Add, Neg};

impl AffinePoint {
    /// Doubles the point using the tangent rule.
    pub fn double(&self) -> Self {
        let Some((x, y)) = self.xy() else {
            return Self::Infinity;
        };
        // Vertical tangent, the point is its own inverse.
        let Some(inv) = (y + y).inverse() else {
            return Self::Infinity;
        };
        let x_squared = x.square();
        let lambda = (x_squared + x_squared + x_squared) * inv;
        let x3 = lambda.square() - x - x;
        let y3 = lambda * (x - x3) - y;
        Self::Point { x: x3, y: y3 }
    }
}

/// Chord rule for two finite points with distinct x coordinates.
fn add_distinct(x1: Fq, y1: Fq, x2: Fq, y2: Fq) -> AffinePoint {
    let Some(inv) = (x2 - x1).inverse() else {
        return AffinePoint::Infinity;
    };
    let lambda = (y2 - y1) * inv;
    let x3 = lambda.square() - x1 - x2;
    let y3 = lambda * (x1 - x3) - y1;
    AffinePoint::Point { x: x3, y: y3 }
}

impl Add for AffinePoint {
    type Output = AffinePoint;

    fn add(self, rhs: AffinePoint) -> AffinePoint {
        let (x1, y1, x2, y2) = match (self, rhs) {
            (AffinePoint::Infinity, q) => return q,
            (p, AffinePoint::Infinity) => return p,
            (AffinePoint::Point { x: x1, y: y1 }, AffinePoint::Point { x: x2, y: y2 }) => {
                (x1, y1, x2, y2)
            }
        };

        if x1 != x2 {
            return add_distinct(x1, y1, x2, y2);
        }
        // Same x on the curve means y2 = y1 or y2 = -y1.
        if y1 == y2 {
            self.double()
        } else {
            AffinePoint::Infinity
        }
    }
}

impl Neg for AffinePoint {
    type Output = AffinePoint;

    fn neg(self) -> AffinePoint {
        match self {
            AffinePoint::Infinity => AffinePoint::Infinity,
            AffinePoint::Point { x, y } => AffinePoint::Point { x, y: -y },
        }
    }
}
