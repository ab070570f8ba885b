//! # gmcrypt
//!
//! A pure Rust implementation of the SM2 elliptic-curve public-key
//! cryptosystem: curve arithmetic with interchangeable affine and Jacobian
//! strategies, SM2 public-key encryption, and SM2 digital signatures.
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several
//! sub-crates:
//!
//! - [`gmcrypt-api`]: trait surface and core error types
//! - [`gmcrypt-params`]: SM2 domain-parameter constants
//! - [`gmcrypt-algorithms`]: point arithmetic, modular arithmetic, KDF
//! - [`gmcrypt-sign`]: SM2 digital signatures
//! - [`gmcrypt-pke`]: SM2 public-key encryption
//!
//! ## Example
//!
//! ```
//! use gmcrypt::prelude::*;
//! use rand::rngs::OsRng;
//!
//! type Dsa = Sm2Dsa<JacobianArithmetic>;
//!
//! let (verifying, signing) = Dsa::keypair(&mut OsRng)?;
//! let signature = Dsa::sign(b"message", &signing, &mut OsRng)?;
//! Dsa::verify(b"message", &signature, &verifying)?;
//! # Ok::<(), gmcrypt::api::Error>(())
//! ```

// Core re-exports (always available)
pub use gmcrypt_api as api;
pub use gmcrypt_algorithms as algorithms;
pub use gmcrypt_params as params;

// Feature-gated re-exports
#[cfg(feature = "sign")]
pub use gmcrypt_sign as sign;

#[cfg(feature = "pke")]
pub use gmcrypt_pke as pke;

/// Common imports for gmcrypt users
pub mod prelude {
    // Re-export error types
    pub use crate::api::{Error, Result};

    // Re-export core traits
    pub use crate::api::{Pke, Signature};

    // Re-export the curve and the point-arithmetic strategies
    pub use crate::algorithms::ec::{
        AffineArithmetic, AffinePoint, Curve, JacobianArithmetic, PointArithmetic,
    };

    #[cfg(feature = "sign")]
    pub use crate::sign::{Sm2Dsa, Sm2Signature, Sm2SigningKey, Sm2VerifyingKey};

    #[cfg(feature = "pke")]
    pub use crate::pke::{Sm2Pke, Sm2PkePublicKey, Sm2PkeSecretKey};
}
