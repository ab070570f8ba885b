//! SM2 public-key encryption for the gmcrypt library
//!
//! Implements the SM2 encryption scheme: an ephemeral Diffie-Hellman shared
//! point expanded by the counter-mode KDF into an XOR keystream, with an SM3
//! integrity tag over the plaintext and the shared-point encoding. The scheme
//! is generic over the point-arithmetic strategy from `gmcrypt-algorithms`
//! and behaves identically with the affine baseline and the Jacobian
//! optimization.

pub mod error;
pub mod sm2pke;

pub use error::{Error, Result};
pub use sm2pke::{Sm2Pke, Sm2PkePublicKey, Sm2PkeSecretKey};
