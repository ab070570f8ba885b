//! Arithmetic primitives for the gmcrypt library
//!
//! This crate implements everything below the SM2 scheme layer:
//!
//! - modular arithmetic over canonical residues, including extended-Euclid
//!   inversion (`modular`)
//! - the SM2 curve object, affine points, the uncompressed point codec, and
//!   two interchangeable point-arithmetic strategies (`ec`)
//! - the counter-mode key-derivation function used by SM2 encryption (`kdf`)
//!
//! The two strategies, [`ec::AffineArithmetic`] and [`ec::JacobianArithmetic`],
//! satisfy the same [`ec::PointArithmetic`] contract and must produce
//! identical affine results for every scalar and point; the scheme crates are
//! generic over the strategy and behave identically with either.

pub mod ec;
pub mod error;
pub mod kdf;
pub mod modular;

pub use error::{Error, Result};
