//! SM2 public-key encryption scheme
//!
//! Wire format: `C1 || C3 || C2` where C1 is the 65-byte uncompressed
//! encoding of the ephemeral point `k·G`, C3 is the 32-byte SM3 tag over
//! `message || Z`, and C2 is the message XOR-masked with the KDF keystream.
//! `Z` is the 65-byte uncompressed encoding of the shared point `k·P`
//! (encryption) respectively `d·C1` (decryption), so both sides derive the
//! identical keystream and tag preimage.

use std::marker::PhantomData;

use num_bigint::BigUint;
use rand::{CryptoRng, RngCore};
use sm3::{Digest, Sm3};
use zeroize::{Zeroize, ZeroizeOnDrop};

use gmcrypt_algorithms::ec::{
    self, Curve, JacobianArithmetic, PointArithmetic,
};
use gmcrypt_algorithms::error::Error as PrimitiveError;
use gmcrypt_algorithms::kdf;
use gmcrypt_api::{Error as ApiError, Pke, Result as ApiResult};
use gmcrypt_params::{
    SM2_C3_SIZE, SM2_CIPHERTEXT_MIN_SIZE, SM2_POINT_UNCOMPRESSED_SIZE,
    SM2_POINT_UNCOMPRESSED_TAG, SM2_SCALAR_SIZE,
};

use crate::error::{Error, Result};

/// SM2 encryption scheme, generic over the point-arithmetic strategy
pub struct Sm2Pke<S: PointArithmetic = JacobianArithmetic>(PhantomData<S>);

/// Public key for SM2 encryption. Stores the serialized uncompressed point.
#[derive(Clone, Debug)]
pub struct Sm2PkePublicKey(pub [u8; SM2_POINT_UNCOMPRESSED_SIZE]);

/// Secret key for SM2 encryption. Stores the serialized scalar.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Sm2PkeSecretKey([u8; SM2_SCALAR_SIZE]);

impl AsRef<[u8]> for Sm2PkePublicKey {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl AsRef<[u8]> for Sm2PkeSecretKey {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl Sm2PkePublicKey {
    /// Import a public key, validating the encoding and curve membership
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let curve = Curve::sm2();
        let point = curve.decode_point(bytes)?;
        Ok(Sm2PkePublicKey(curve.encode_point(&point)?))
    }
}

impl Sm2PkeSecretKey {
    /// Import a secret scalar, validating the range `[1, n-1]`
    pub fn from_bytes(bytes: &[u8; SM2_SCALAR_SIZE]) -> Result<Self> {
        let d = BigUint::from_bytes_be(bytes);
        if !ec::is_valid_secret_scalar(&d, Curve::sm2()) {
            return Err(Error::Primitive(PrimitiveError::param(
                "SM2 secret key",
                "scalar outside the range [1, n-1]",
            )));
        }
        Ok(Sm2PkeSecretKey(*bytes))
    }
}

/// Parsed view of a `C1 || C3 || C2` ciphertext
struct CiphertextParts<'a> {
    c1: &'a [u8],
    c3: &'a [u8],
    c2: &'a [u8],
}

impl<'a> CiphertextParts<'a> {
    fn parse(bytes: &'a [u8]) -> Result<Self> {
        if bytes.len() < SM2_CIPHERTEXT_MIN_SIZE {
            return Err(Error::InvalidCiphertextFormat(
                "shorter than C1 plus C3",
            ));
        }
        if bytes[0] != SM2_POINT_UNCOMPRESSED_TAG {
            return Err(Error::InvalidCiphertextFormat(
                "C1 does not start with the uncompressed tag 0x04",
            ));
        }
        let (c1, rest) = bytes.split_at(SM2_POINT_UNCOMPRESSED_SIZE);
        let (c3, c2) = rest.split_at(SM2_C3_SIZE);
        Ok(CiphertextParts { c1, c3, c2 })
    }
}

/// SM3 tag over `message || Z`; identical on both sides by construction
fn integrity_tag(message: &[u8], z: &[u8]) -> [u8; SM2_C3_SIZE] {
    let mut hasher = Sm3::new();
    hasher.update(message);
    hasher.update(z);
    hasher.finalize().into()
}

fn xor_keystream(data: &[u8], keystream: &[u8]) -> Vec<u8> {
    data.iter()
        .zip(keystream.iter())
        .map(|(d, k)| d ^ k)
        .collect()
}

impl<S: PointArithmetic> Pke for Sm2Pke<S> {
    type PublicKey = Sm2PkePublicKey;
    type SecretKey = Sm2PkeSecretKey;
    type Ciphertext = Vec<u8>;

    fn name() -> &'static str {
        "SM2PKE"
    }

    fn keypair<R: CryptoRng + RngCore>(
        rng: &mut R,
    ) -> ApiResult<(Self::PublicKey, Self::SecretKey)> {
        let curve = Curve::sm2();
        let (d, public) = ec::generate_keypair::<S, R>(rng)
            .map_err(|e| ApiError::from(Error::from(e)))?;
        let encoded = curve
            .encode_point(&public)
            .map_err(|e| ApiError::from(Error::from(e)))?;
        Ok((
            Sm2PkePublicKey(encoded),
            Sm2PkeSecretKey(ec::field_bytes(&d)),
        ))
    }

    fn encrypt<R: RngCore + CryptoRng>(
        pk_recipient: &Self::PublicKey,
        plaintext: &[u8],
        rng: &mut R,
    ) -> ApiResult<Self::Ciphertext> {
        let curve = Curve::sm2();
        let recipient = curve
            .decode_point(&pk_recipient.0)
            .map_err(|e| ApiError::from(Error::from(e)))?;

        loop {
            let k = ec::random_scalar(rng, curve.order());

            let c1_point = S::scalar_mul(curve, &k, curve.generator())
                .map_err(|e| ApiError::from(Error::from(e)))?;
            let c1 = curve
                .encode_point(&c1_point)
                .map_err(|e| ApiError::from(Error::from(e)))?;

            let shared = S::scalar_mul(curve, &k, &recipient)
                .map_err(|e| ApiError::from(Error::from(e)))?;
            if shared.is_infinity() {
                return Err(ApiError::from(Error::InvalidPublicPoint(
                    "shared secret is the point at infinity",
                )));
            }
            let z = curve
                .encode_point(&shared)
                .map_err(|e| ApiError::from(Error::from(e)))?;

            // An all-zero keystream would send the plaintext in the clear;
            // restart with a fresh ephemeral scalar.
            let keystream = match kdf::derive_key::<Sm3>(&z, plaintext.len()) {
                Ok(keystream) => keystream,
                Err(PrimitiveError::DegenerateKeystream) => continue,
                Err(e) => return Err(ApiError::from(Error::from(e))),
            };

            let c2 = xor_keystream(plaintext, &keystream);
            let c3 = integrity_tag(plaintext, &z);

            let mut out = Vec::with_capacity(c1.len() + c3.len() + c2.len());
            out.extend_from_slice(&c1);
            out.extend_from_slice(&c3);
            out.extend_from_slice(&c2);
            return Ok(out);
        }
    }

    fn decrypt(
        sk_recipient: &Self::SecretKey,
        ciphertext: &Self::Ciphertext,
    ) -> ApiResult<Vec<u8>> {
        let parts = CiphertextParts::parse(ciphertext).map_err(ApiError::from)?;

        let curve = Curve::sm2();
        let c1_point = curve
            .decode_point(parts.c1)
            .map_err(|e| ApiError::from(Error::from(e)))?;

        let d = BigUint::from_bytes_be(&sk_recipient.0);
        let shared = S::scalar_mul(curve, &d, &c1_point)
            .map_err(|e| ApiError::from(Error::from(e)))?;
        if shared.is_infinity() {
            return Err(ApiError::from(Error::InvalidCiphertextFormat(
                "C1 collapses to the point at infinity",
            )));
        }
        let z = curve
            .encode_point(&shared)
            .map_err(|e| ApiError::from(Error::from(e)))?;

        // Degenerate keystreams cannot be retried on this side; surface them.
        let keystream = kdf::derive_key::<Sm3>(&z, parts.c2.len())
            .map_err(|e| ApiError::from(Error::from(e)))?;
        let plaintext = xor_keystream(parts.c2, &keystream);

        if integrity_tag(&plaintext, &z)[..] != *parts.c3 {
            return Err(ApiError::from(Error::IntegrityCheckFailed));
        }

        Ok(plaintext)
    }
}
