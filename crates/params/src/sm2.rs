//! Constants for the SM2 elliptic curve
//!
//! The curve is `y² = x³ + ax + b` over the 256-bit prime field `F_p`, with
//! base point `G = (Gx, Gy)` of prime order `n`. All values are big-endian.

/// Size of an SM2 scalar in bytes (32 bytes = 256 bits)
pub const SM2_SCALAR_SIZE: usize = 32;

/// Size of an SM2 field element in bytes (32 bytes = 256 bits)
pub const SM2_FIELD_ELEMENT_SIZE: usize = 32;

/// Size of an uncompressed SM2 point in bytes: tag byte (0x04) + x + y
pub const SM2_POINT_UNCOMPRESSED_SIZE: usize = 1 + 2 * SM2_FIELD_ELEMENT_SIZE; // 65 bytes: 0x04 || x || y

/// Tag byte opening an uncompressed point encoding
pub const SM2_POINT_UNCOMPRESSED_TAG: u8 = 0x04;

/// Size of an SM2 signature in bytes: r and s concatenated, 32 bytes each
pub const SM2_SIGNATURE_SIZE: usize = 2 * SM2_SCALAR_SIZE;

/// Size of the C3 integrity tag inside an SM2 ciphertext (one SM3 digest)
pub const SM2_C3_SIZE: usize = 32;

/// Smallest well-formed SM2 ciphertext: C1 and C3 with an empty C2
pub const SM2_CIPHERTEXT_MIN_SIZE: usize = SM2_POINT_UNCOMPRESSED_SIZE + SM2_C3_SIZE;

/// Default signer identity used when the caller does not supply one
pub const SM2_DEFAULT_ID: &[u8; 16] = b"1234567812345678";

/// Prime modulus p of the field
pub const SM2_P: [u8; 32] = [
    0xFF, 0xFF, 0xFF, 0xFE, 0xFF, 0xFF, 0xFF, 0xFF,
    0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
    0xFF, 0xFF, 0xFF, 0xFF, 0x00, 0x00, 0x00, 0x00,
    0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
];

/// Curve coefficient a (= p - 3)
pub const SM2_A: [u8; 32] = [
    0xFF, 0xFF, 0xFF, 0xFE, 0xFF, 0xFF, 0xFF, 0xFF,
    0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
    0xFF, 0xFF, 0xFF, 0xFF, 0x00, 0x00, 0x00, 0x00,
    0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFC,
];

/// Curve coefficient b
pub const SM2_B: [u8; 32] = [
    0x28, 0xE9, 0xFA, 0x9E, 0x9D, 0x9F, 0x5E, 0x34,
    0x4D, 0x5A, 0x9E, 0x4B, 0xCF, 0x65, 0x09, 0xA7,
    0xF3, 0x97, 0x89, 0xF5, 0x15, 0xAB, 0x8F, 0x92,
    0xDD, 0xBC, 0xBD, 0x41, 0x4D, 0x94, 0x0E, 0x93,
];

/// Order n of the base point G
pub const SM2_N: [u8; 32] = [
    0xFF, 0xFF, 0xFF, 0xFE, 0xFF, 0xFF, 0xFF, 0xFF,
    0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
    0x72, 0x03, 0xDF, 0x6B, 0x21, 0xC6, 0x05, 0x2B,
    0x53, 0xBB, 0xF4, 0x09, 0x39, 0xD5, 0x41, 0x23,
];

/// x-coordinate of the base point G
pub const SM2_GX: [u8; 32] = [
    0x32, 0xC4, 0xAE, 0x2C, 0x1F, 0x19, 0x81, 0x19,
    0x5F, 0x99, 0x04, 0x46, 0x6A, 0x39, 0xC9, 0x94,
    0x8F, 0xE3, 0x0B, 0xBF, 0xF2, 0x66, 0x0B, 0xE1,
    0x71, 0x5A, 0x45, 0x89, 0x33, 0x4C, 0x74, 0xC7,
];

/// y-coordinate of the base point G
pub const SM2_GY: [u8; 32] = [
    0xBC, 0x37, 0x36, 0xA2, 0xF4, 0xF6, 0x77, 0x9C,
    0x59, 0xBD, 0xCE, 0xE3, 0x6B, 0x69, 0x21, 0x53,
    0xD0, 0xA9, 0x87, 0x7C, 0xC6, 0x2A, 0x47, 0x40,
    0x02, 0xDF, 0x32, 0xE5, 0x21, 0x39, 0xF0, 0xA0,
];
