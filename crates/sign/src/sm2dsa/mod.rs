//! SM2 digital signature scheme
//!
//! Implements signing and verification per the SM2 signature algorithm.
//! Every digest binds the signer's identity and public key through the ZA
//! value, so a signature only verifies against the exact identity and key it
//! was produced for.
//!
//! Algorithm outline:
//! 1. `ZA = SM3(ENTL || id || a || b || Gx || Gy || Px || Py)`
//! 2. `e = int(SM3(ZA || message))`
//! 3. Sample `k` in `[1, n-1]`; `(x1, _) = k·G`; `r = (e + x1) mod n`,
//!    rejecting `r = 0` and `r + k = n`
//! 4. `s = (1 + d)⁻¹ · (k - r·d) mod n`, rejecting `s = 0`
//! 5. Signature is `r || s`, 32 big-endian bytes each

use std::marker::PhantomData;

use num_bigint::BigUint;
use num_traits::Zero;
use rand::{CryptoRng, RngCore};
use sm3::{Digest, Sm3};
use zeroize::Zeroize;

use gmcrypt_algorithms::ec::{
    self, field_bytes, AffinePoint, Curve, JacobianArithmetic, PointArithmetic,
};
use gmcrypt_algorithms::error::Error as PrimitiveError;
use gmcrypt_algorithms::modular;
use gmcrypt_api::{Error as ApiError, Result as ApiResult, Signature as SignatureTrait};
use gmcrypt_params::{SM2_DEFAULT_ID, SM2_POINT_UNCOMPRESSED_SIZE, SM2_SCALAR_SIZE, SM2_SIGNATURE_SIZE};

use crate::error::{Error, Result};

/// Longest identity whose bit length fits the 2-byte ENTL field
const MAX_IDENTITY_SIZE: usize = u16::MAX as usize / 8;

/// SM2 signature scheme, generic over the point-arithmetic strategy
pub struct Sm2Dsa<S: PointArithmetic = JacobianArithmetic>(PhantomData<S>);

/// SM2 public key in uncompressed format (0x04 || X || Y)
#[derive(Clone)]
pub struct Sm2VerifyingKey(pub [u8; SM2_POINT_UNCOMPRESSED_SIZE]);

/// SM2 secret key
///
/// Contains both the scalar value and its byte representation. The scalar d
/// must satisfy 1 <= d <= n-1 where n is the order of the base point G.
#[derive(Clone)]
pub struct Sm2SigningKey {
    d: BigUint,
    bytes: [u8; SM2_SCALAR_SIZE],
}

/// SM2 signature: r || s, 32 big-endian bytes each
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Sm2Signature(pub [u8; SM2_SIGNATURE_SIZE]);

impl AsRef<[u8]> for Sm2VerifyingKey {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl AsRef<[u8]> for Sm2SigningKey {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl AsRef<[u8]> for Sm2Signature {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl Zeroize for Sm2SigningKey {
    fn zeroize(&mut self) {
        // Wipe the byte image; the BigUint scalar does not implement Zeroize
        // and is freed when the struct is dropped.
        self.bytes.zeroize();
    }
}

impl Drop for Sm2SigningKey {
    fn drop(&mut self) {
        self.zeroize();
    }
}

impl Sm2VerifyingKey {
    /// Import a public key, validating the encoding and curve membership
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let point = Curve::sm2().decode_point(bytes)?;
        let encoded = Curve::sm2().encode_point(&point)?;
        Ok(Sm2VerifyingKey(encoded))
    }
}

impl Sm2SigningKey {
    /// Import a secret scalar, validating the range `[1, n-1]`
    pub fn from_bytes(bytes: &[u8; SM2_SCALAR_SIZE]) -> Result<Self> {
        let d = BigUint::from_bytes_be(bytes);
        if !ec::is_valid_secret_scalar(&d, Curve::sm2()) {
            return Err(Error::Primitive(PrimitiveError::param(
                "SM2 secret key",
                "scalar outside the range [1, n-1]",
            )));
        }
        Ok(Sm2SigningKey { d, bytes: *bytes })
    }

    /// The public key `d * G` under the chosen strategy
    pub fn verifying_key<S: PointArithmetic>(&self) -> Result<Sm2VerifyingKey> {
        let curve = Curve::sm2();
        let public = S::scalar_mul(curve, &self.d, curve.generator())?;
        Ok(Sm2VerifyingKey(curve.encode_point(&public)?))
    }
}

impl Sm2Signature {
    /// Import a signature from its 64-byte wire form
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != SM2_SIGNATURE_SIZE {
            return Err(Error::InvalidSignature("signature must be 64 bytes"));
        }
        let mut out = [0u8; SM2_SIGNATURE_SIZE];
        out.copy_from_slice(bytes);
        Ok(Sm2Signature(out))
    }

    fn r(&self) -> BigUint {
        BigUint::from_bytes_be(&self.0[..SM2_SCALAR_SIZE])
    }

    fn s(&self) -> BigUint {
        BigUint::from_bytes_be(&self.0[SM2_SCALAR_SIZE..])
    }
}

/// Identity-binding digest ZA
///
/// `SM3(ENTL || id || a || b || Gx || Gy || Px || Py)` with ENTL the identity
/// bit length as two big-endian bytes and every curve/point field a 32-byte
/// big-endian block. Signer and verifier recompute this identically; a
/// different identity or public key yields a different digest and therefore a
/// failed verification.
pub fn compute_za(id: &[u8], curve: &Curve, public_key: &AffinePoint) -> Result<[u8; 32]> {
    if id.len() > MAX_IDENTITY_SIZE {
        return Err(Error::InvalidIdentity(
            "identity bit length exceeds the 2-byte ENTL field",
        ));
    }
    let (px, py) = match public_key {
        AffinePoint::Affine { x, y } => (x, y),
        AffinePoint::Infinity => {
            return Err(Error::Primitive(PrimitiveError::PointAtInfinity {
                context: "identity digest",
            }))
        }
    };
    let (gx, gy) = match curve.generator() {
        AffinePoint::Affine { x, y } => (x, y),
        AffinePoint::Infinity => {
            return Err(Error::Primitive(PrimitiveError::PointAtInfinity {
                context: "identity digest",
            }))
        }
    };

    let entl = ((id.len() * 8) as u16).to_be_bytes();
    let mut hasher = Sm3::new();
    hasher.update(entl);
    hasher.update(id);
    hasher.update(field_bytes(curve.coefficient_a()));
    hasher.update(field_bytes(curve.coefficient_b()));
    hasher.update(field_bytes(gx));
    hasher.update(field_bytes(gy));
    hasher.update(field_bytes(px));
    hasher.update(field_bytes(py));
    Ok(hasher.finalize().into())
}

/// The message digest integer `e = int(SM3(ZA || message))`
fn message_digest(za: &[u8; 32], message: &[u8]) -> BigUint {
    let mut hasher = Sm3::new();
    hasher.update(za);
    hasher.update(message);
    BigUint::from_bytes_be(&hasher.finalize())
}

impl<S: PointArithmetic> Sm2Dsa<S> {
    /// Sign a message binding the given identity
    ///
    /// The rejection loop resamples `k` on the degenerate cases `r = 0`,
    /// `r + k = n`, and `s = 0`; those never surface to the caller. A secret
    /// key with `1 + d ≡ 0 (mod n)` cannot produce signatures and is a hard
    /// error.
    pub fn sign_with_id<R: CryptoRng + RngCore>(
        message: &[u8],
        secret_key: &Sm2SigningKey,
        id: &[u8],
        rng: &mut R,
    ) -> Result<Sm2Signature> {
        let curve = Curve::sm2();
        let n = curve.order();
        let d = &secret_key.d;

        let public = S::scalar_mul(curve, d, curve.generator())?;
        let za = compute_za(id, curve, &public)?;
        let e = message_digest(&za, message);

        // (1 + d)⁻¹ does not depend on k; fails only for d = n - 1.
        let one_plus_d = modular::add_mod(&(d % n), &BigUint::from(1u32), n);
        let inv = modular::inverse_ctx(&one_plus_d, n, "signature generation")?;

        loop {
            let k = ec::random_scalar(rng, n);
            let x1 = match S::scalar_mul(curve, &k, curve.generator())? {
                AffinePoint::Affine { x, .. } => x,
                // Unreachable for k in [1, n-1]; resampling is still the
                // correct response.
                AffinePoint::Infinity => continue,
            };

            let r = (&e + &x1) % n;
            if r.is_zero() || &r + &k == *n {
                continue;
            }

            let rd = modular::mul_mod(&r, d, n);
            let s = modular::mul_mod(&inv, &modular::sub_mod(&k, &rd, n), n);
            if s.is_zero() {
                continue;
            }

            let mut out = [0u8; SM2_SIGNATURE_SIZE];
            out[..SM2_SCALAR_SIZE].copy_from_slice(&field_bytes(&r));
            out[SM2_SCALAR_SIZE..].copy_from_slice(&field_bytes(&s));
            return Ok(Sm2Signature(out));
        }
    }

    /// Verify a signature binding the given identity
    ///
    /// Every malformed or non-verifying input is a terminal error; nothing is
    /// repaired or retried.
    pub fn verify_with_id(
        message: &[u8],
        signature: &Sm2Signature,
        public_key: &Sm2VerifyingKey,
        id: &[u8],
    ) -> Result<()> {
        let curve = Curve::sm2();
        let n = curve.order();

        let r = signature.r();
        let s = signature.s();
        if r.is_zero() || &r >= n {
            return Err(Error::InvalidSignature("r outside the range [1, n-1]"));
        }
        if s.is_zero() || &s >= n {
            return Err(Error::InvalidSignature("s outside the range [1, n-1]"));
        }

        let public_point = curve.decode_point(&public_key.0)?;
        let za = compute_za(id, curve, &public_point)?;
        let e = message_digest(&za, message);

        let t = modular::add_mod(&r, &s, n);
        if t.is_zero() {
            return Err(Error::InvalidSignature("r + s vanishes modulo n"));
        }

        let sg = S::scalar_mul(curve, &s, curve.generator())?;
        let tp = S::scalar_mul(curve, &t, &public_point)?;
        let x1 = match S::add(curve, &sg, &tp)? {
            AffinePoint::Affine { x, .. } => x,
            AffinePoint::Infinity => {
                return Err(Error::InvalidSignature(
                    "verification point is the point at infinity",
                ))
            }
        };

        if (&e + &x1) % n == r {
            Ok(())
        } else {
            Err(Error::InvalidSignature("signature does not verify"))
        }
    }
}

impl<S: PointArithmetic> SignatureTrait for Sm2Dsa<S> {
    type PublicKey = Sm2VerifyingKey;
    type SecretKey = Sm2SigningKey;
    type SignatureData = Sm2Signature;
    type KeyPair = (Self::PublicKey, Self::SecretKey);

    fn name() -> &'static str {
        "SM2DSA"
    }

    fn keypair<R: CryptoRng + RngCore>(rng: &mut R) -> ApiResult<Self::KeyPair> {
        let curve = Curve::sm2();
        let (d, public) = ec::generate_keypair::<S, R>(rng).map_err(ApiError::from)?;
        let verifying = Sm2VerifyingKey(curve.encode_point(&public).map_err(ApiError::from)?);
        let bytes = field_bytes(&d);
        Ok((verifying, Sm2SigningKey { d, bytes }))
    }

    fn public_key(keypair: &Self::KeyPair) -> Self::PublicKey {
        keypair.0.clone()
    }

    fn secret_key(keypair: &Self::KeyPair) -> Self::SecretKey {
        keypair.1.clone()
    }

    fn sign<R: CryptoRng + RngCore>(
        message: &[u8],
        secret_key: &Self::SecretKey,
        rng: &mut R,
    ) -> ApiResult<Self::SignatureData> {
        Self::sign_with_id(message, secret_key, SM2_DEFAULT_ID, rng).map_err(ApiError::from)
    }

    fn verify(
        message: &[u8],
        signature: &Self::SignatureData,
        public_key: &Self::PublicKey,
    ) -> ApiResult<()> {
        Self::verify_with_id(message, signature, public_key, SM2_DEFAULT_ID)
            .map_err(ApiError::from)
    }
}
