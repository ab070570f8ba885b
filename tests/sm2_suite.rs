//! End-to-end exercise of the SM2 suite through the facade crate

use gmcrypt::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

type Dsa = Sm2Dsa<JacobianArithmetic>;
type DsaAffine = Sm2Dsa<AffineArithmetic>;
type Cipher = Sm2Pke<JacobianArithmetic>;
type CipherAffine = Sm2Pke<AffineArithmetic>;

#[test]
fn full_suite_scenario() {
    let mut rng = ChaCha20Rng::seed_from_u64(0x534D32);
    let message = "Hello World! This is SDU DUDU!".repeat(10);
    let message = message.as_bytes();

    // Encryption round trip with the expected wire shape
    let (enc_pk, enc_sk) = Cipher::keypair(&mut rng).unwrap();
    let ciphertext = Cipher::encrypt(&enc_pk, message, &mut rng).unwrap();
    assert_eq!(ciphertext.len(), 65 + 32 + message.len());
    assert_eq!(Cipher::decrypt(&enc_sk, &ciphertext).unwrap(), message);

    // Signature round trip with the expected wire shape
    let (verifying, signing) = Dsa::keypair(&mut rng).unwrap();
    let signature = Dsa::sign(message, &signing, &mut rng).unwrap();
    assert_eq!(signature.as_ref().len(), 64);
    Dsa::verify(message, &signature, &verifying).unwrap();

    // Corrupting the first signature byte must break verification
    let mut corrupted = signature.clone();
    corrupted.0[0] ^= 0x01;
    assert!(Dsa::verify(message, &corrupted, &verifying).is_err());

    // Corrupting any ciphertext segment must break decryption
    for index in [1usize, 70, 100] {
        let mut tampered = ciphertext.clone();
        tampered[index] ^= 0x80;
        assert!(Cipher::decrypt(&enc_sk, &tampered).is_err());
    }
}

#[test]
fn strategies_are_interchangeable_end_to_end() {
    let mut rng = ChaCha20Rng::seed_from_u64(0x5757);
    let message = b"one suite, two arithmetic strategies";

    // Keys generated under one strategy work under the other.
    let (enc_pk, enc_sk) = CipherAffine::keypair(&mut rng).unwrap();
    let ciphertext = Cipher::encrypt(&enc_pk, message, &mut rng).unwrap();
    assert_eq!(CipherAffine::decrypt(&enc_sk, &ciphertext).unwrap(), message);

    let (verifying, signing) = Dsa::keypair(&mut rng).unwrap();
    let signature = DsaAffine::sign(message, &signing, &mut rng).unwrap();
    Dsa::verify(message, &signature, &verifying).unwrap();
}

#[test]
fn signature_and_cipher_keys_share_the_curve() {
    // Both schemes run over the same curve instance; a signing keypair can be
    // imported as an encryption keypair through the byte representations.
    let mut rng = ChaCha20Rng::seed_from_u64(0x4242);
    let (verifying, signing) = Dsa::keypair(&mut rng).unwrap();

    let enc_pk = Sm2PkePublicKey::from_bytes(verifying.as_ref()).unwrap();
    let mut sk_bytes = [0u8; 32];
    sk_bytes.copy_from_slice(signing.as_ref());
    let enc_sk = Sm2PkeSecretKey::from_bytes(&sk_bytes).unwrap();

    let message = b"shared domain parameters";
    let ciphertext = Cipher::encrypt(&enc_pk, message, &mut rng).unwrap();
    assert_eq!(Cipher::decrypt(&enc_sk, &ciphertext).unwrap(), message);
}
