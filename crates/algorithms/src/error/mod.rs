//! Error handling for arithmetic primitives

use std::fmt;

use gmcrypt_api::Error as ApiError;

/// The error type for arithmetic primitives
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Parameter validation error
    Parameter {
        /// Name of the invalid parameter
        name: &'static str,
        /// Reason why the parameter is invalid
        reason: &'static str,
    },

    /// Length validation error
    Length {
        /// Context where the length error occurred
        context: &'static str,
        /// Expected length in bytes
        expected: usize,
        /// Actual length in bytes
        actual: usize,
    },

    /// Malformed point encoding
    Encoding {
        /// Context where the encoding error occurred
        context: &'static str,
        /// What was wrong with the encoding
        reason: &'static str,
    },

    /// Modular inverse of an argument that is not coprime to the modulus
    NotInvertible {
        /// Operation that required the inverse
        context: &'static str,
    },

    /// Coordinates that do not satisfy the curve equation
    PointNotOnCurve {
        /// Operation that rejected the point
        context: &'static str,
    },

    /// The point at infinity where a finite point is required
    PointAtInfinity {
        /// Operation that rejected the point
        context: &'static str,
    },

    /// Key-derivation output that is entirely zero
    DegenerateKeystream,
}

impl Error {
    /// Shorthand to create a Parameter error
    pub fn param(name: &'static str, reason: &'static str) -> Self {
        Error::Parameter { name, reason }
    }
}

/// Result type for arithmetic primitive operations
pub type Result<T> = core::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Parameter { name, reason } => {
                write!(f, "Invalid parameter '{}': {}", name, reason)
            }
            Error::Length {
                context,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "Invalid length for {}: expected {}, got {}",
                    context, expected, actual
                )
            }
            Error::Encoding { context, reason } => {
                write!(f, "Malformed encoding in {}: {}", context, reason)
            }
            Error::NotInvertible { context } => {
                write!(f, "Value not invertible in {}", context)
            }
            Error::PointNotOnCurve { context } => {
                write!(f, "Point not on curve in {}", context)
            }
            Error::PointAtInfinity { context } => {
                write!(f, "Unexpected point at infinity in {}", context)
            }
            Error::DegenerateKeystream => {
                write!(f, "Derived keystream is entirely zero")
            }
        }
    }
}

impl std::error::Error for Error {}

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        match err {
            Error::Parameter { name, reason } => ApiError::InvalidParameter {
                context: name,
                message: reason.to_string(),
            },
            Error::Length {
                context,
                expected,
                actual,
            } => ApiError::InvalidLength {
                context,
                expected,
                actual,
            },
            Error::Encoding { context, reason } => ApiError::InvalidParameter {
                context,
                message: reason.to_string(),
            },
            Error::NotInvertible { context } => ApiError::Other {
                context,
                message: "value not invertible".to_string(),
            },
            Error::PointNotOnCurve { context } => ApiError::InvalidKey {
                context,
                message: "point not on curve".to_string(),
            },
            Error::PointAtInfinity { context } => ApiError::InvalidKey {
                context,
                message: "point at infinity".to_string(),
            },
            Error::DegenerateKeystream => ApiError::Other {
                context: "KDF",
                message: "derived keystream is entirely zero".to_string(),
            },
        }
    }
}

// Include the validation submodule
pub mod validate;
