//! Jacobian projective point arithmetic
//!
//! A projective triple `(X, Y, Z)` with `Z != 0` denotes the affine point
//! `(X / Z², Y / Z³)`; `Z = 0` is the point at infinity. Additions and
//! doublings stay inversion-free, so a full scalar multiplication costs a
//! single modular inversion when the accumulator is converted back to affine
//! coordinates at the end.

use num_bigint::BigUint;
use num_traits::{One, Zero};

use super::{AffinePoint, Curve, PointArithmetic};
use crate::error::Result;
use crate::modular::{add_mod, inverse_ctx, mul_mod, sub_mod};

/// Optimized strategy carrying intermediate points in Jacobian coordinates
pub struct JacobianArithmetic;

/// Projective triple; `z = 0` encodes the point at infinity
#[derive(Clone, Debug)]
struct JacobianPoint {
    x: BigUint,
    y: BigUint,
    z: BigUint,
}

impl JacobianPoint {
    /// The identity in projective form: (0 : 1 : 0)
    fn infinity() -> Self {
        JacobianPoint {
            x: BigUint::zero(),
            y: BigUint::one(),
            z: BigUint::zero(),
        }
    }

    fn is_infinity(&self) -> bool {
        self.z.is_zero()
    }

    fn from_affine(point: &AffinePoint) -> Self {
        match point {
            AffinePoint::Infinity => Self::infinity(),
            AffinePoint::Affine { x, y } => JacobianPoint {
                x: x.clone(),
                y: y.clone(),
                z: BigUint::one(),
            },
        }
    }

    /// Convert back to affine with one inversion: `x = X/Z²`, `y = Y/Z³`
    fn to_affine(&self, curve: &Curve) -> Result<AffinePoint> {
        if self.is_infinity() {
            return Ok(AffinePoint::Infinity);
        }

        let m = &curve.p;
        let z_inv = inverse_ctx(&self.z, m, "projective-to-affine conversion")?;
        let z_inv_sq = mul_mod(&z_inv, &z_inv, m);
        let z_inv_cu = mul_mod(&z_inv_sq, &z_inv, m);
        Ok(AffinePoint::Affine {
            x: mul_mod(&self.x, &z_inv_sq, m),
            y: mul_mod(&self.y, &z_inv_cu, m),
        })
    }

    /// Inversion-free doubling
    ///
    /// `S = 2((X + YY)² - XX - YYYY)`, `M = 3·XX + a·ZZ²`, `T = M² - 2S`,
    /// then `X' = T`, `Y' = M(S - T) - 8·YYYY`, `Z' = (Y + Z)² - YY - ZZ`.
    /// A point with `Y = 0` lands on `Z' = 0`, the identity, without a
    /// special case.
    fn double(&self, curve: &Curve) -> JacobianPoint {
        if self.is_infinity() {
            return self.clone();
        }

        let m = &curve.p;
        let two = BigUint::from(2u32);
        let three = BigUint::from(3u32);
        let eight = BigUint::from(8u32);

        let xx = mul_mod(&self.x, &self.x, m);
        let yy = mul_mod(&self.y, &self.y, m);
        let yyyy = mul_mod(&yy, &yy, m);
        let zz = mul_mod(&self.z, &self.z, m);

        let x_plus_yy = add_mod(&self.x, &yy, m);
        let inner = sub_mod(
            &sub_mod(&mul_mod(&x_plus_yy, &x_plus_yy, m), &xx, m),
            &yyyy,
            m,
        );
        let s = mul_mod(&two, &inner, m);

        let zz_sq = mul_mod(&zz, &zz, m);
        let big_m = add_mod(
            &mul_mod(&three, &xx, m),
            &mul_mod(&curve.a, &zz_sq, m),
            m,
        );

        let t = sub_mod(
            &mul_mod(&big_m, &big_m, m),
            &mul_mod(&two, &s, m),
            m,
        );

        let y3 = sub_mod(
            &mul_mod(&big_m, &sub_mod(&s, &t, m), m),
            &mul_mod(&eight, &yyyy, m),
            m,
        );

        let y_plus_z = add_mod(&self.y, &self.z, m);
        let z3 = sub_mod(
            &sub_mod(&mul_mod(&y_plus_z, &y_plus_z, m), &yy, m),
            &zz,
            m,
        );

        JacobianPoint { x: t, y: y3, z: z3 }
    }

    /// Inversion-free addition
    ///
    /// `H = U2 - U1` distinguishes the cases: `H = 0, R = 0` is a doubling,
    /// `H = 0, R != 0` is a pair of inverses summing to the identity.
    fn add(&self, other: &JacobianPoint, curve: &Curve) -> JacobianPoint {
        if self.is_infinity() {
            return other.clone();
        }
        if other.is_infinity() {
            return self.clone();
        }

        let m = &curve.p;
        let two = BigUint::from(2u32);

        let z1z1 = mul_mod(&self.z, &self.z, m);
        let z2z2 = mul_mod(&other.z, &other.z, m);
        let u1 = mul_mod(&self.x, &z2z2, m);
        let u2 = mul_mod(&other.x, &z1z1, m);
        let s1 = mul_mod(&mul_mod(&self.y, &other.z, m), &z2z2, m);
        let s2 = mul_mod(&mul_mod(&other.y, &self.z, m), &z1z1, m);

        let h = sub_mod(&u2, &u1, m);
        let r = sub_mod(&s2, &s1, m);

        if h.is_zero() {
            if r.is_zero() {
                return self.double(curve);
            }
            return Self::infinity();
        }

        let hh = mul_mod(&h, &h, m);
        let hhh = mul_mod(&h, &hh, m);
        let v = mul_mod(&u1, &hh, m);

        let x3 = sub_mod(
            &sub_mod(&mul_mod(&r, &r, m), &hhh, m),
            &mul_mod(&two, &v, m),
            m,
        );
        let y3 = sub_mod(
            &mul_mod(&r, &sub_mod(&v, &x3, m), m),
            &mul_mod(&s1, &hhh, m),
            m,
        );
        let z3 = mul_mod(&mul_mod(&h, &self.z, m), &other.z, m);

        JacobianPoint {
            x: x3,
            y: y3,
            z: z3,
        }
    }
}

impl PointArithmetic for JacobianArithmetic {
    fn add(curve: &Curve, p: &AffinePoint, q: &AffinePoint) -> Result<AffinePoint> {
        let sum = JacobianPoint::from_affine(p).add(&JacobianPoint::from_affine(q), curve);
        sum.to_affine(curve)
    }

    fn double(curve: &Curve, p: &AffinePoint) -> Result<AffinePoint> {
        JacobianPoint::from_affine(p).double(curve).to_affine(curve)
    }

    fn scalar_mul(curve: &Curve, k: &BigUint, p: &AffinePoint) -> Result<AffinePoint> {
        if p.is_infinity() {
            return Ok(AffinePoint::Infinity);
        }

        let mut result = JacobianPoint::infinity();
        let mut current = JacobianPoint::from_affine(p);
        let mut k = k.clone();

        while !k.is_zero() {
            if k.bit(0) {
                result = result.add(&current, curve);
            }
            k >>= 1u32;
            if !k.is_zero() {
                current = current.double(curve);
            }
        }

        result.to_affine(curve)
    }
}
