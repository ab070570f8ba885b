//! Public API traits and types for the gmcrypt library
//!
//! This crate provides the public API surface shared by the gmcrypt member
//! crates: the scheme-level trait definitions and the error type that every
//! member crate's errors convert into.

pub mod error;
pub mod traits;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, Result};

// Re-export all traits from the traits module
pub use traits::{Pke, Signature};

// Re-export trait modules for direct access
pub use traits::{pke, signature};
