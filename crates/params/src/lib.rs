//! Domain parameters for the gmcrypt library
//!
//! This crate is pure data: the constants of the SM2 256-bit prime curve as
//! published in GB/T 32918, stored as big-endian byte arrays, plus the byte
//! sizes of the wire formats built on them. It has no dependencies and no
//! operations; the `gmcrypt-algorithms` crate turns these bytes into live
//! curve arithmetic.

pub mod sm2;

pub use sm2::*;
