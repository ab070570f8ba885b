use super::*;
use crate::error::Error;

use num_bigint::BigUint;
use num_traits::{One, Zero};
use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

fn curve() -> &'static Curve {
    Curve::sm2()
}

fn scalar(k: u64) -> BigUint {
    BigUint::from(k)
}

fn point_from_hex(x: &str, y: &str) -> AffinePoint {
    AffinePoint::Affine {
        x: BigUint::from_bytes_be(&hex::decode(x).unwrap()),
        y: BigUint::from_bytes_be(&hex::decode(y).unwrap()),
    }
}

/// 2G, computed with an independent implementation
fn two_g() -> AffinePoint {
    point_from_hex(
        "56cefd60d7c87c000d58ef57fa73ba4d9c0dfa08c08a7331495c2e1da3f2bd52",
        "31b7e7e6cc8189f668535ce0f8eaf1bd6de84c182f6c8e716f780d3a970a23c3",
    )
}

/// 3G, computed with an independent implementation
fn three_g() -> AffinePoint {
    point_from_hex(
        "a97f7cd4b3c993b4be2daa8cdb41e24ca13f6bd945302244e26918f1d0509ebf",
        "530b5dd88c688ef5ccc5cec08a72150f7c400ee5cd045292aaacdd037458f6e6",
    )
}

#[test]
fn sm2_parameters_are_accepted() {
    let c = curve();
    assert!(c.contains(c.generator()));
    assert_eq!(c.order().bits(), 256);
    assert_eq!(c.modulus().bits(), 256);
}

#[test]
fn tampered_base_point_is_rejected() {
    use gmcrypt_params::{SM2_A, SM2_B, SM2_GX, SM2_GY, SM2_N, SM2_P};

    let mut bad_gy = SM2_GY;
    bad_gy[31] = bad_gy[31].wrapping_add(1);
    let result = Curve::from_parameters(&SM2_P, &SM2_A, &SM2_B, &SM2_GX, &bad_gy, &SM2_N);
    assert!(matches!(result, Err(Error::Parameter { .. })));
}

#[test]
fn small_multiples_match_fixtures() {
    let c = curve();
    let g = c.generator();

    assert_eq!(AffineArithmetic::double(c, g).unwrap(), two_g());
    assert_eq!(JacobianArithmetic::double(c, g).unwrap(), two_g());

    assert_eq!(AffineArithmetic::add(c, &two_g(), g).unwrap(), three_g());
    assert_eq!(JacobianArithmetic::add(c, &two_g(), g).unwrap(), three_g());

    for k in [2u64, 3] {
        let expected = if k == 2 { two_g() } else { three_g() };
        assert_eq!(
            AffineArithmetic::scalar_mul(c, &scalar(k), g).unwrap(),
            expected
        );
        assert_eq!(
            JacobianArithmetic::scalar_mul(c, &scalar(k), g).unwrap(),
            expected
        );
    }
}

#[test]
fn infinity_is_the_identity() {
    let c = curve();
    let g = c.generator();

    for result in [
        AffineArithmetic::add(c, g, &AffinePoint::Infinity).unwrap(),
        AffineArithmetic::add(c, &AffinePoint::Infinity, g).unwrap(),
        JacobianArithmetic::add(c, g, &AffinePoint::Infinity).unwrap(),
        JacobianArithmetic::add(c, &AffinePoint::Infinity, g).unwrap(),
    ] {
        assert_eq!(&result, g);
    }

    for result in [
        AffineArithmetic::double(c, &AffinePoint::Infinity).unwrap(),
        JacobianArithmetic::double(c, &AffinePoint::Infinity).unwrap(),
        AffineArithmetic::scalar_mul(c, &scalar(12345), &AffinePoint::Infinity).unwrap(),
        JacobianArithmetic::scalar_mul(c, &scalar(12345), &AffinePoint::Infinity).unwrap(),
    ] {
        assert!(result.is_infinity());
    }
}

#[test]
fn adding_a_point_to_its_negation_gives_infinity() {
    let c = curve();
    let p = JacobianArithmetic::scalar_mul(c, &scalar(987_654_321), c.generator()).unwrap();
    let neg = p.negate(c);

    assert!(c.contains(&neg));
    assert!(AffineArithmetic::add(c, &p, &neg).unwrap().is_infinity());
    assert!(JacobianArithmetic::add(c, &p, &neg).unwrap().is_infinity());
}

#[test]
fn doubling_matches_self_addition() {
    let c = curve();
    let p = JacobianArithmetic::scalar_mul(c, &scalar(31_337), c.generator()).unwrap();

    let via_add_affine = AffineArithmetic::add(c, &p, &p).unwrap();
    let via_add_jacobian = JacobianArithmetic::add(c, &p, &p).unwrap();
    let doubled = AffineArithmetic::double(c, &p).unwrap();

    assert_eq!(via_add_affine, doubled);
    assert_eq!(via_add_jacobian, doubled);
    assert_eq!(JacobianArithmetic::double(c, &p).unwrap(), doubled);
}

#[test]
fn scalar_multiplication_is_additive() {
    let c = curve();
    let g = c.generator();
    let mut rng = ChaCha20Rng::seed_from_u64(7);

    for _ in 0..8 {
        let k1 = random_scalar(&mut rng, c.order());
        let k2 = random_scalar(&mut rng, c.order());
        let lhs = JacobianArithmetic::scalar_mul(c, &(&k1 + &k2), g).unwrap();
        let rhs = JacobianArithmetic::add(
            c,
            &JacobianArithmetic::scalar_mul(c, &k1, g).unwrap(),
            &JacobianArithmetic::scalar_mul(c, &k2, g).unwrap(),
        )
        .unwrap();
        assert_eq!(lhs, rhs);
    }
}

#[test]
fn scalar_edge_cases_agree_across_strategies() {
    let c = curve();
    let g = c.generator();
    let n = c.order().clone();

    let edges = [
        BigUint::zero(),
        BigUint::one(),
        scalar(2),
        scalar(3),
        &n - 2u32,
        &n - 1u32,
        n.clone(),
        &n + 1u32,
        &n * 2u32,
    ];

    for k in &edges {
        let affine = AffineArithmetic::scalar_mul(c, k, g).unwrap();
        let jacobian = JacobianArithmetic::scalar_mul(c, k, g).unwrap();
        assert_eq!(affine, jacobian, "strategies disagree for k = {}", k);
        assert!(c.contains(&affine));
    }

    assert!(AffineArithmetic::scalar_mul(c, &n, g).unwrap().is_infinity());
    assert_eq!(
        &JacobianArithmetic::scalar_mul(c, &(&n + 1u32), g).unwrap(),
        g
    );
}

#[test]
fn order_times_any_point_is_infinity() {
    let c = curve();
    let mut rng = ChaCha20Rng::seed_from_u64(99);

    for _ in 0..4 {
        let k = random_scalar(&mut rng, c.order());
        let p = JacobianArithmetic::scalar_mul(c, &k, c.generator()).unwrap();
        assert!(JacobianArithmetic::scalar_mul(c, c.order(), &p)
            .unwrap()
            .is_infinity());
    }
}

#[test]
fn point_codec_round_trip() {
    let c = curve();
    let p = JacobianArithmetic::scalar_mul(c, &scalar(0xDEAD_BEEF), c.generator()).unwrap();

    let encoded = c.encode_point(&p).unwrap();
    assert_eq!(encoded.len(), 65);
    assert_eq!(encoded[0], 0x04);
    assert_eq!(c.decode_point(&encoded).unwrap(), p);
}

#[test]
fn point_codec_rejects_malformed_input() {
    let c = curve();
    let good = c.encode_point(c.generator()).unwrap();

    // Wrong tag
    let mut bad_tag = good;
    bad_tag[0] = 0x02;
    assert!(matches!(
        c.decode_point(&bad_tag),
        Err(Error::Encoding { .. })
    ));

    // Wrong lengths
    assert!(matches!(
        c.decode_point(&good[..64]),
        Err(Error::Length { .. })
    ));
    assert!(matches!(c.decode_point(&[]), Err(Error::Length { .. })));

    // Coordinate out of field range: x = p
    let mut oversized = [0u8; 65];
    oversized[0] = 0x04;
    oversized[1..33].copy_from_slice(&field_bytes(c.modulus()));
    oversized[33..].copy_from_slice(&good[33..]);
    assert!(matches!(
        c.decode_point(&oversized),
        Err(Error::Encoding { .. })
    ));

    // Valid field elements that miss the curve
    let mut off_curve = good;
    off_curve[64] = off_curve[64].wrapping_add(1);
    assert!(matches!(
        c.decode_point(&off_curve),
        Err(Error::PointNotOnCurve { .. })
    ));
}

#[test]
fn infinity_has_no_encoding() {
    assert!(matches!(
        curve().encode_point(&AffinePoint::Infinity),
        Err(Error::PointAtInfinity { .. })
    ));
}

#[test]
fn generated_keypairs_are_well_formed() {
    let c = curve();
    let mut rng = ChaCha20Rng::seed_from_u64(2024);

    for _ in 0..8 {
        let (d, public) = generate_keypair::<JacobianArithmetic, _>(&mut rng).unwrap();
        assert!(is_valid_secret_scalar(&d, c));
        assert!(!public.is_infinity());
        assert!(c.contains(&public));
    }
}

#[test]
fn random_scalars_stay_in_range() {
    let c = curve();
    let mut rng = ChaCha20Rng::seed_from_u64(5);

    for _ in 0..64 {
        let k = random_scalar(&mut rng, c.order());
        assert!(!k.is_zero());
        assert!(&k < c.order());
    }
}

prop_compose! {
    fn arbitrary_scalar()(bytes in any::<[u8; 32]>()) -> BigUint {
        BigUint::from_bytes_be(&bytes)
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(1024))]

    /// The optimization contract: both strategies agree on every scalar and
    /// every point in the subgroup.
    #[test]
    fn strategies_agree_on_random_inputs(k in arbitrary_scalar(), base in arbitrary_scalar()) {
        let c = curve();
        let p = JacobianArithmetic::scalar_mul(c, &base, c.generator()).unwrap();

        let affine = AffineArithmetic::scalar_mul(c, &k, &p).unwrap();
        let jacobian = JacobianArithmetic::scalar_mul(c, &k, &p).unwrap();
        prop_assert_eq!(&affine, &jacobian);
        prop_assert!(c.contains(&affine));
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn strategies_agree_on_random_sums(a in arbitrary_scalar(), b in arbitrary_scalar()) {
        let c = curve();
        let p = JacobianArithmetic::scalar_mul(c, &a, c.generator()).unwrap();
        let q = JacobianArithmetic::scalar_mul(c, &b, c.generator()).unwrap();

        let affine = AffineArithmetic::add(c, &p, &q).unwrap();
        let jacobian = JacobianArithmetic::add(c, &p, &q).unwrap();
        prop_assert_eq!(&affine, &jacobian);
        prop_assert!(c.contains(&affine));
    }

    #[test]
    fn codec_round_trips_random_points(k in arbitrary_scalar()) {
        let c = curve();
        let p = JacobianArithmetic::scalar_mul(c, &k, c.generator()).unwrap();
        if !p.is_infinity() {
            let encoded = c.encode_point(&p).unwrap();
            prop_assert_eq!(c.decode_point(&encoded).unwrap(), p);
        }
    }
}
