//! Modular arithmetic over canonical residues
//!
//! Every helper in this module expects and maintains the canonical-residue
//! invariant: operands and results are reduced into `[0, m)`. Keeping the
//! invariant at this layer means the point-arithmetic strategies never see a
//! value that would underflow an unsigned subtraction.

use num_bigint::{BigInt, BigUint};
use num_traits::{One, Zero};

use crate::error::{Error, Result};

/// `(a + b) mod m` for canonical `a`, `b`
pub fn add_mod(a: &BigUint, b: &BigUint, m: &BigUint) -> BigUint {
    let mut sum = a + b;
    if sum >= *m {
        sum -= m;
    }
    sum
}

/// `(a - b) mod m` for canonical `a`, `b`
pub fn sub_mod(a: &BigUint, b: &BigUint, m: &BigUint) -> BigUint {
    if a >= b {
        a - b
    } else {
        m - (b - a)
    }
}

/// `(a * b) mod m` for canonical `a`, `b`
pub fn mul_mod(a: &BigUint, b: &BigUint, m: &BigUint) -> BigUint {
    (a * b) % m
}

/// `(-a) mod m` for canonical `a`
pub fn neg_mod(a: &BigUint, m: &BigUint) -> BigUint {
    if a.is_zero() {
        BigUint::zero()
    } else {
        m - a
    }
}

/// Modular inverse via the extended Euclidean algorithm
///
/// Returns `x` with `a * x ≡ 1 (mod m)`, reduced into `[0, m)`. Fails with
/// [`Error::NotInvertible`] when `gcd(a, m) != 1`, which for the prime moduli
/// used by SM2 means `a ≡ 0 (mod m)`. Callers that can meet a zero
/// denominator legitimately (doubling a point with `y = 0`) must special-case
/// it before asking for the inverse.
pub fn inverse(a: &BigUint, m: &BigUint) -> Result<BigUint> {
    inverse_ctx(a, m, "modular inverse")
}

/// [`inverse`] with a caller-supplied error context
pub fn inverse_ctx(a: &BigUint, m: &BigUint, context: &'static str) -> Result<BigUint> {
    if m <= &BigUint::one() {
        return Err(Error::param("modulus", "modulus must exceed 1"));
    }

    let modulus = BigInt::from(m.clone());
    let mut old_r = BigInt::from(a % m);
    let mut r = modulus.clone();
    let mut old_s = BigInt::one();
    let mut s = BigInt::zero();

    while !r.is_zero() {
        let quotient = &old_r / &r;
        let next_r = &old_r - &quotient * &r;
        old_r = std::mem::replace(&mut r, next_r);
        let next_s = &old_s - &quotient * &s;
        old_s = std::mem::replace(&mut s, next_s);
    }

    if !old_r.is_one() {
        return Err(Error::NotInvertible { context });
    }

    let reduced = ((old_s % &modulus) + &modulus) % &modulus;
    // Sign is non-negative after the double reduction, so this cannot fail.
    Ok(reduced.to_biguint().unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn big(n: u32) -> BigUint {
        BigUint::from(n)
    }

    #[test]
    fn add_mod_wraps() {
        let m = big(17);
        assert_eq!(add_mod(&big(9), &big(9), &m), big(1));
        assert_eq!(add_mod(&big(0), &big(16), &m), big(16));
    }

    #[test]
    fn sub_mod_wraps() {
        let m = big(17);
        assert_eq!(sub_mod(&big(3), &big(5), &m), big(15));
        assert_eq!(sub_mod(&big(5), &big(5), &m), big(0));
    }

    #[test]
    fn neg_mod_of_zero_is_zero() {
        let m = big(17);
        assert_eq!(neg_mod(&big(0), &m), big(0));
        assert_eq!(neg_mod(&big(4), &m), big(13));
    }

    #[test]
    fn inverse_times_value_is_one() {
        let m = big(0xFFFF_FFFB); // prime
        for a in [2u32, 3, 1234, 0xFFFF_FFFA] {
            let inv = inverse(&big(a), &m).unwrap();
            assert_eq!(mul_mod(&big(a), &inv, &m), big(1));
        }
    }

    #[test]
    fn inverse_of_zero_fails() {
        let m = big(17);
        assert!(matches!(
            inverse(&big(0), &m),
            Err(Error::NotInvertible { .. })
        ));
        assert!(matches!(
            inverse(&big(17), &m),
            Err(Error::NotInvertible { .. })
        ));
    }

    #[test]
    fn inverse_requires_coprime_arguments() {
        let m = big(15);
        assert!(matches!(
            inverse(&big(5), &m),
            Err(Error::NotInvertible { .. })
        ));
        let inv = inverse(&big(7), &m).unwrap();
        assert_eq!(mul_mod(&big(7), &inv, &m), big(1));
    }

    #[test]
    fn inverse_reduces_oversized_argument() {
        let m = big(17);
        let inv = inverse(&big(3 + 17 * 4), &m).unwrap();
        assert_eq!(mul_mod(&big(3), &inv, &m), big(1));
    }
}
