//! Error handling for signature operations.

use std::fmt;

use gmcrypt_algorithms::error::Error as PrimitiveError;
use gmcrypt_api::error::Error as CoreError;

/// Error type for signature operations.
#[derive(Debug)]
pub enum Error {
    /// Failure inside the arithmetic primitives
    Primitive(PrimitiveError),
    /// A signature that is malformed or does not verify
    InvalidSignature(&'static str),
    /// An identity string the ZA digest cannot bind
    InvalidIdentity(&'static str),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Primitive(e) => write!(f, "Signature primitive error: {}", e),
            Error::InvalidSignature(reason) => write!(f, "Invalid SM2 signature: {}", reason),
            Error::InvalidIdentity(reason) => write!(f, "Invalid signer identity: {}", reason),
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

// Conversion from signature Error to API Error
impl From<Error> for CoreError {
    fn from(err: Error) -> Self {
        match err {
            Error::Primitive(e) => e.into(),
            Error::InvalidSignature(reason) => CoreError::InvalidSignature {
                context: "SM2DSA",
                message: reason.to_string(),
            },
            Error::InvalidIdentity(reason) => CoreError::InvalidParameter {
                context: "SM2DSA identity",
                message: reason.to_string(),
            },
        }
    }
}

/// Result type for signature operations.
pub type Result<T> = core::result::Result<T, Error>;
