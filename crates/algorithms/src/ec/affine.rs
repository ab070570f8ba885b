//! Affine point arithmetic
//!
//! The slope-based textbook group law. Every addition or doubling pays one
//! modular inversion, which makes this the slow path; it exists as the
//! correctness baseline the Jacobian strategy is validated against.

use num_bigint::BigUint;
use num_traits::Zero;

use super::{AffinePoint, Curve, PointArithmetic};
use crate::error::Result;
use crate::modular;

/// Baseline strategy operating directly on affine coordinates
pub struct AffineArithmetic;

impl PointArithmetic for AffineArithmetic {
    fn add(curve: &Curve, p: &AffinePoint, q: &AffinePoint) -> Result<AffinePoint> {
        let (x1, y1) = match p {
            AffinePoint::Infinity => return Ok(q.clone()),
            AffinePoint::Affine { x, y } => (x, y),
        };
        let (x2, y2) = match q {
            AffinePoint::Infinity => return Ok(p.clone()),
            AffinePoint::Affine { x, y } => (x, y),
        };

        if x1 == x2 {
            if y1 == y2 {
                return Self::double(curve, p);
            }
            // Same x, different y: the points are inverses of each other.
            return Ok(AffinePoint::Infinity);
        }

        let m = &curve.p;
        let num = modular::sub_mod(y2, y1, m);
        let den = modular::sub_mod(x2, x1, m);
        let lambda = modular::mul_mod(
            &num,
            &modular::inverse_ctx(&den, m, "affine point addition")?,
            m,
        );

        Ok(chord_point(curve, &lambda, x1, y1, x2))
    }

    fn double(curve: &Curve, p: &AffinePoint) -> Result<AffinePoint> {
        let (x, y) = match p {
            AffinePoint::Infinity => return Ok(AffinePoint::Infinity),
            AffinePoint::Affine { x, y } => (x, y),
        };

        // A point of order two doubles to infinity; the slope denominator
        // 2y would otherwise be an uninvertible zero.
        if y.is_zero() {
            return Ok(AffinePoint::Infinity);
        }

        let m = &curve.p;
        let three = BigUint::from(3u32);
        let two = BigUint::from(2u32);
        let x_sq = modular::mul_mod(x, x, m);
        let num = modular::add_mod(&modular::mul_mod(&three, &x_sq, m), &curve.a, m);
        let den = modular::mul_mod(&two, y, m);
        let lambda = modular::mul_mod(
            &num,
            &modular::inverse_ctx(&den, m, "affine point doubling")?,
            m,
        );

        Ok(chord_point(curve, &lambda, x, y, x))
    }

    fn scalar_mul(curve: &Curve, k: &BigUint, p: &AffinePoint) -> Result<AffinePoint> {
        let mut result = AffinePoint::Infinity;
        let mut current = p.clone();
        let mut k = k.clone();

        while !k.is_zero() {
            if k.bit(0) {
                result = Self::add(curve, &result, &current)?;
            }
            k >>= 1u32;
            if !k.is_zero() {
                current = Self::double(curve, &current)?;
            }
        }

        Ok(result)
    }
}

/// Third intersection of the chord/tangent with slope `lambda`:
/// `x' = λ² - x1 - x2`, `y' = λ(x1 - x') - y1`
fn chord_point(
    curve: &Curve,
    lambda: &BigUint,
    x1: &BigUint,
    y1: &BigUint,
    x2: &BigUint,
) -> AffinePoint {
    let m = &curve.p;
    let lambda_sq = modular::mul_mod(lambda, lambda, m);
    let x3 = modular::sub_mod(&modular::sub_mod(&lambda_sq, x1, m), x2, m);
    let y3 = modular::sub_mod(&modular::mul_mod(lambda, &modular::sub_mod(x1, &x3, m), m), y1, m);
    AffinePoint::Affine { x: x3, y: y3 }
}
