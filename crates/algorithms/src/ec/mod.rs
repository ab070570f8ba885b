//! SM2 elliptic-curve primitives
//!
//! The curve is `y² = x³ + ax + b` over the 256-bit prime field given by
//! [`gmcrypt_params`]. Points are affine coordinate pairs or the distinguished
//! point at infinity; the uncompressed codec is the 65-byte
//! `0x04 || X || Y` form and nothing else.
//!
//! Point arithmetic is pluggable through [`PointArithmetic`]. Two strategies
//! are provided: [`AffineArithmetic`], the slope-based baseline that inverts
//! a denominator on every operation, and [`JacobianArithmetic`], which works
//! on projective triples and defers the single field inversion to the end of
//! a scalar multiplication. Both must agree on every input; the higher-level
//! schemes are generic over the choice.

mod affine;
mod jacobian;

pub use affine::AffineArithmetic;
pub use jacobian::JacobianArithmetic;

use std::sync::OnceLock;

use num_bigint::{BigUint, RandBigInt};
use num_traits::{One, Zero};
use rand::{CryptoRng, RngCore};

use crate::error::{validate, Error, Result};
use crate::modular;
use gmcrypt_params::{
    SM2_A, SM2_B, SM2_FIELD_ELEMENT_SIZE, SM2_GX, SM2_GY, SM2_N, SM2_P,
    SM2_POINT_UNCOMPRESSED_SIZE, SM2_POINT_UNCOMPRESSED_TAG,
};

/// A point on the curve: the point at infinity or an affine coordinate pair
///
/// Infinity is a distinct variant rather than a reserved coordinate value, so
/// it can never be confused with a finite point.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AffinePoint {
    /// The group identity
    Infinity,
    /// A finite point with canonical coordinates `0 <= x, y < p`
    Affine {
        /// x-coordinate
        x: BigUint,
        /// y-coordinate
        y: BigUint,
    },
}

impl AffinePoint {
    /// Is this the point at infinity?
    pub fn is_infinity(&self) -> bool {
        matches!(self, AffinePoint::Infinity)
    }

    /// The additive inverse: `(x, p - y)`, with infinity mapping to itself
    pub fn negate(&self, curve: &Curve) -> AffinePoint {
        match self {
            AffinePoint::Infinity => AffinePoint::Infinity,
            AffinePoint::Affine { x, y } => AffinePoint::Affine {
                x: x.clone(),
                y: modular::neg_mod(y, &curve.p),
            },
        }
    }
}

/// Strategy interface for point arithmetic on the SM2 curve
///
/// Implementations must satisfy the short-Weierstrass group law exactly: for
/// every scalar `k` and point `P`, the affine result of `scalar_mul` is
/// independent of the strategy.
pub trait PointArithmetic {
    /// Group addition, handling doubling and inverse pairs internally
    fn add(curve: &Curve, p: &AffinePoint, q: &AffinePoint) -> Result<AffinePoint>;

    /// Group doubling: `2P`
    fn double(curve: &Curve, p: &AffinePoint) -> Result<AffinePoint>;

    /// Scalar multiplication `k * P` via binary double-and-add
    fn scalar_mul(curve: &Curve, k: &BigUint, p: &AffinePoint) -> Result<AffinePoint>;
}

/// The SM2 curve: immutable domain parameters plus the point codec
#[derive(Clone, Debug)]
pub struct Curve {
    pub(crate) p: BigUint,
    pub(crate) a: BigUint,
    pub(crate) b: BigUint,
    n: BigUint,
    g: AffinePoint,
}

static SM2_CURVE: OnceLock<Curve> = OnceLock::new();

impl Curve {
    /// The process-wide SM2 curve instance
    pub fn sm2() -> &'static Curve {
        SM2_CURVE.get_or_init(|| {
            Curve::from_parameters(&SM2_P, &SM2_A, &SM2_B, &SM2_GX, &SM2_GY, &SM2_N)
                .expect("SM2 domain parameters are valid")
        })
    }

    /// Build a curve from big-endian parameter bytes
    ///
    /// Rejects parameters whose base point does not satisfy the curve
    /// equation or whose order does not have the expected 256-bit width.
    pub fn from_parameters(
        p: &[u8; 32],
        a: &[u8; 32],
        b: &[u8; 32],
        gx: &[u8; 32],
        gy: &[u8; 32],
        n: &[u8; 32],
    ) -> Result<Curve> {
        let curve = Curve {
            p: BigUint::from_bytes_be(p),
            a: BigUint::from_bytes_be(a),
            b: BigUint::from_bytes_be(b),
            n: BigUint::from_bytes_be(n),
            g: AffinePoint::Affine {
                x: BigUint::from_bytes_be(gx),
                y: BigUint::from_bytes_be(gy),
            },
        };

        validate::parameter(
            curve.contains(&curve.g),
            "curve parameters",
            "base point does not satisfy the curve equation",
        )?;
        validate::parameter(
            curve.n.bits() == 256,
            "curve parameters",
            "group order does not have the expected width",
        )?;

        Ok(curve)
    }

    /// The base point G
    pub fn generator(&self) -> &AffinePoint {
        &self.g
    }

    /// The group order n
    pub fn order(&self) -> &BigUint {
        &self.n
    }

    /// The field modulus p
    pub fn modulus(&self) -> &BigUint {
        &self.p
    }

    /// The curve coefficient a
    pub fn coefficient_a(&self) -> &BigUint {
        &self.a
    }

    /// The curve coefficient b
    pub fn coefficient_b(&self) -> &BigUint {
        &self.b
    }

    /// Does the point satisfy `y² = x³ + ax + b`? Infinity always belongs.
    pub fn contains(&self, point: &AffinePoint) -> bool {
        match point {
            AffinePoint::Infinity => true,
            AffinePoint::Affine { x, y } => {
                if x >= &self.p || y >= &self.p {
                    return false;
                }
                let lhs = modular::mul_mod(y, y, &self.p);
                let x_sq = modular::mul_mod(x, x, &self.p);
                let x_cu = modular::mul_mod(&x_sq, x, &self.p);
                let ax = modular::mul_mod(&self.a, x, &self.p);
                let rhs = modular::add_mod(&modular::add_mod(&x_cu, &ax, &self.p), &self.b, &self.p);
                lhs == rhs
            }
        }
    }

    /// Serialize a finite point as `0x04 || X || Y` (65 bytes)
    ///
    /// The point at infinity has no uncompressed encoding and is rejected.
    pub fn encode_point(&self, point: &AffinePoint) -> Result<[u8; SM2_POINT_UNCOMPRESSED_SIZE]> {
        match point {
            AffinePoint::Infinity => Err(Error::PointAtInfinity {
                context: "point encoding",
            }),
            AffinePoint::Affine { x, y } => {
                let mut out = [0u8; SM2_POINT_UNCOMPRESSED_SIZE];
                out[0] = SM2_POINT_UNCOMPRESSED_TAG;
                out[1..1 + SM2_FIELD_ELEMENT_SIZE].copy_from_slice(&field_bytes(x));
                out[1 + SM2_FIELD_ELEMENT_SIZE..].copy_from_slice(&field_bytes(y));
                Ok(out)
            }
        }
    }

    /// Deserialize an uncompressed point, validating range and curve membership
    pub fn decode_point(&self, bytes: &[u8]) -> Result<AffinePoint> {
        validate::length("uncompressed point", bytes.len(), SM2_POINT_UNCOMPRESSED_SIZE)?;
        if bytes[0] != SM2_POINT_UNCOMPRESSED_TAG {
            return Err(Error::Encoding {
                context: "uncompressed point",
                reason: "leading byte is not the uncompressed tag 0x04",
            });
        }

        let x = BigUint::from_bytes_be(&bytes[1..1 + SM2_FIELD_ELEMENT_SIZE]);
        let y = BigUint::from_bytes_be(&bytes[1 + SM2_FIELD_ELEMENT_SIZE..]);
        if x >= self.p || y >= self.p {
            return Err(Error::Encoding {
                context: "uncompressed point",
                reason: "coordinate is not a canonical field element",
            });
        }

        let point = AffinePoint::Affine { x, y };
        if !self.contains(&point) {
            return Err(Error::PointNotOnCurve {
                context: "uncompressed point",
            });
        }
        Ok(point)
    }
}

/// Big-endian, left-padded 32-byte image of a canonical field element
pub fn field_bytes(value: &BigUint) -> [u8; SM2_FIELD_ELEMENT_SIZE] {
    let raw = value.to_bytes_be();
    let mut out = [0u8; SM2_FIELD_ELEMENT_SIZE];
    out[SM2_FIELD_ELEMENT_SIZE - raw.len()..].copy_from_slice(&raw);
    out
}

/// Uniform scalar in `[1, bound - 1]` from the supplied RNG
pub fn random_scalar<R: CryptoRng + RngCore>(rng: &mut R, bound: &BigUint) -> BigUint {
    rng.gen_biguint_range(&BigUint::one(), bound)
}

/// Generate an SM2 keypair: `d` uniform in `[1, n-1]`, `P = d * G`
pub fn generate_keypair<S: PointArithmetic, R: CryptoRng + RngCore>(
    rng: &mut R,
) -> Result<(BigUint, AffinePoint)> {
    let curve = Curve::sm2();
    let d = random_scalar(rng, curve.order());
    let public = S::scalar_mul(curve, &d, curve.generator())?;
    Ok((d, public))
}

/// Is the scalar a canonical private key, i.e. in `[1, n-1]`?
pub fn is_valid_secret_scalar(d: &BigUint, curve: &Curve) -> bool {
    !d.is_zero() && d < curve.order()
}

#[cfg(test)]
mod tests;
