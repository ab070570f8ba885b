//! Error handling for PKE operations.

use std::fmt;

use gmcrypt_algorithms::error::Error as PrimitiveError;
use gmcrypt_api::error::Error as CoreError;

/// Error type for PKE operations.
#[derive(Debug)]
pub enum Error {
    /// Failure inside the arithmetic primitives
    Primitive(PrimitiveError),
    /// Ciphertext that cannot be parsed into C1 || C3 || C2
    InvalidCiphertextFormat(&'static str),
    /// A public or shared point that is the point at infinity
    InvalidPublicPoint(&'static str),
    /// Recomputed integrity tag does not match C3
    IntegrityCheckFailed,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Primitive(e) => write!(f, "PKE primitive error: {}", e),
            Error::InvalidCiphertextFormat(reason) => {
                write!(f, "Invalid SM2 ciphertext format: {}", reason)
            }
            Error::InvalidPublicPoint(reason) => {
                write!(f, "Invalid public point: {}", reason)
            }
            Error::IntegrityCheckFailed => {
                write!(f, "SM2 ciphertext integrity check failed")
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Primitive(e) => Some(e),
            _ => None,
        }
    }
}

impl From<PrimitiveError> for Error {
    fn from(err: PrimitiveError) -> Self {
        Error::Primitive(err)
    }
}

// Conversion from PKE Error to API Error
impl From<Error> for CoreError {
    fn from(err: Error) -> Self {
        match err {
            Error::Primitive(e) => e.into(),
            Error::InvalidCiphertextFormat(reason) => CoreError::InvalidCiphertext {
                context: "SM2PKE",
                message: reason.to_string(),
            },
            Error::InvalidPublicPoint(reason) => CoreError::InvalidKey {
                context: "SM2PKE",
                message: reason.to_string(),
            },
            Error::IntegrityCheckFailed => CoreError::DecryptionFailed {
                context: "SM2PKE",
                message: "integrity check failed".to_string(),
            },
        }
    }
}

/// Result type for PKE operations.
pub type Result<T> = core::result::Result<T, Error>;
