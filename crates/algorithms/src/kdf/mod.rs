//! Counter-mode key derivation
//!
//! The SM2 key-derivation function expands a shared secret `Z` into a
//! keystream by hashing `Z || counter` for a 32-bit big-endian counter that
//! starts at 1, concatenating digests until enough bytes exist, then
//! truncating. The hash is injected through the [`Digest`] trait the same way
//! the rest of the library consumes SM3.

use digest::Digest;

use crate::error::{Error, Result};

/// Expand `z` into exactly `output_len` keystream bytes
///
/// Fails with [`Error::DegenerateKeystream`] when a non-empty output consists
/// entirely of zero bytes; the caller must restart the enclosing operation
/// with a fresh ephemeral scalar. An `output_len` of zero yields an empty
/// keystream and is not degenerate.
pub fn derive_key<D: Digest>(z: &[u8], output_len: usize) -> Result<Vec<u8>> {
    let mut output = Vec::with_capacity(output_len);
    let mut counter: u32 = 1;

    while output.len() < output_len {
        let mut hasher = D::new();
        hasher.update(z);
        hasher.update(counter.to_be_bytes());
        output.extend_from_slice(&hasher.finalize());
        counter = counter
            .checked_add(1)
            .ok_or(Error::param("KDF output length", "counter space exhausted"))?;
    }

    output.truncate(output_len);
    if !output.is_empty() && all_zero(&output) {
        return Err(Error::DegenerateKeystream);
    }
    Ok(output)
}

fn all_zero(bytes: &[u8]) -> bool {
    bytes.iter().all(|&b| b == 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use digest::consts::U32;
    use digest::{FixedOutput, HashMarker, Output, OutputSizeUser, Update};
    use sm3::Sm3;

    /// Degenerate stand-in hash that always outputs 32 zero bytes
    #[derive(Clone, Default)]
    struct ZeroHash;

    impl HashMarker for ZeroHash {}

    impl OutputSizeUser for ZeroHash {
        type OutputSize = U32;
    }

    impl Update for ZeroHash {
        fn update(&mut self, _data: &[u8]) {}
    }

    impl FixedOutput for ZeroHash {
        fn finalize_into(self, out: &mut Output<Self>) {
            out.iter_mut().for_each(|b| *b = 0);
        }
    }

    #[test]
    fn output_is_concatenated_counter_digests() {
        let z = b"shared secret bytes";
        let derived = derive_key::<Sm3>(z, 64).unwrap();

        let mut expected = Vec::new();
        for counter in [1u32, 2] {
            let mut hasher = Sm3::new();
            Digest::update(&mut hasher, z);
            Digest::update(&mut hasher, counter.to_be_bytes());
            expected.extend_from_slice(&hasher.finalize());
        }
        assert_eq!(derived, expected);
    }

    #[test]
    fn matches_cross_implementation_fixture() {
        // Two-block expansion of "shared secret bytes", computed with an
        // independent SM3 implementation.
        let derived = derive_key::<Sm3>(b"shared secret bytes", 64).unwrap();
        assert_eq!(
            hex::encode(derived),
            "6470e1a0f0439c3f4dbfbe5ab934576a0f23ed015a8b761ff4ed9c15004bf434\
             5613ce6adc6d9f7e022ca8a3652ba38d06731dee4889124b3be6e24905663d32"
        );
    }

    #[test]
    fn output_truncates_to_requested_length() {
        let z = b"shared secret bytes";
        let long = derive_key::<Sm3>(z, 64).unwrap();
        for len in [1usize, 31, 32, 33, 63] {
            let short = derive_key::<Sm3>(z, len).unwrap();
            assert_eq!(short.len(), len);
            assert_eq!(short[..], long[..len]);
        }
    }

    #[test]
    fn zero_length_output_is_empty_and_ok() {
        assert_eq!(derive_key::<Sm3>(b"z", 0).unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn all_zero_keystream_is_rejected() {
        for len in [1usize, 32, 100] {
            assert_eq!(
                derive_key::<ZeroHash>(b"z", len),
                Err(Error::DegenerateKeystream)
            );
        }
        // Zero-length output stays exempt even under the degenerate hash.
        assert!(derive_key::<ZeroHash>(b"z", 0).is_ok());
    }

    #[test]
    fn different_secrets_give_different_keystreams() {
        let a = derive_key::<Sm3>(b"secret a", 48).unwrap();
        let b = derive_key::<Sm3>(b"secret b", 48).unwrap();
        assert_ne!(a, b);
    }
}
