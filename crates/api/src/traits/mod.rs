//! Trait definitions for the gmcrypt schemes

pub mod pke;
pub mod signature;

pub use pke::Pke;
pub use signature::Signature;
