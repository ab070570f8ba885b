//! SM2 digital signatures for the gmcrypt library
//!
//! Implements the SM2 signature scheme: the ZA identity-binding digest, the
//! rejection-sampling signing loop, and verification. The scheme is generic
//! over the point-arithmetic strategy from `gmcrypt-algorithms` and behaves
//! identically with the affine baseline and the Jacobian optimization.

pub mod error;
pub mod sm2dsa;

pub use error::{Error, Result};
pub use sm2dsa::{compute_za, Sm2Dsa, Sm2Signature, Sm2SigningKey, Sm2VerifyingKey};
