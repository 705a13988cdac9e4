//! Modular inversion.

use crate::{Error, Result};
use num_bigint::{BigInt, BigUint, Sign};
use num_integer::{ExtendedGcd, Integer};
use num_traits::{One, Zero};

/// Compute `n⁻¹ mod m`.
///
/// `n` may be negative or larger than `m`: it is reduced into `[0, m)` first.
/// The result is the unique `x ∈ [1, m-1]` with `n·x ≡ 1 (mod m)`.
///
/// Uses the extended Euclidean algorithm, so the cost is `O(log m)` steps
/// regardless of whether `m` is prime.
///
/// # Errors
///
/// - [`Error::InvalidModulus`] if `m < 2`.
/// - [`Error::NoInverse`] if `gcd(n, m) != 1`, which includes `n ≡ 0 (mod m)`.
pub fn inverse(n: &BigInt, m: &BigUint) -> Result<BigUint> {
    if *m <= BigUint::one() {
        return Err(Error::InvalidModulus);
    }

    invert_residue(&reduce_signed(n, m), m)
}

/// Reduce a signed integer into `[0, m)`. `m` must be non-zero.
pub(crate) fn reduce_signed(n: &BigInt, m: &BigUint) -> BigUint {
    let r = n.magnitude() % m;

    if n.sign() == Sign::Minus && !r.is_zero() {
        m - r
    } else {
        r
    }
}

/// Invert a residue already in `[0, m)` with `m >= 2`.
pub(crate) fn invert_residue(n: &BigUint, m: &BigUint) -> Result<BigUint> {
    if n.is_zero() {
        return Err(Error::NoInverse);
    }

    let modulus = BigInt::from(m.clone());
    let ExtendedGcd { gcd, x, .. } = BigInt::from(n.clone()).extended_gcd(&modulus);

    if !gcd.is_one() {
        return Err(Error::NoInverse);
    }

    Ok(reduce_signed(&x, m))
}

#[cfg(test)]
mod tests {
    use super::{inverse, reduce_signed};
    use crate::Error;
    use num_bigint::{BigInt, BigUint};
    use num_traits::ToPrimitive;

    fn inv(n: i64, m: u64) -> Result<u64, Error> {
        inverse(&BigInt::from(n), &BigUint::from(m)).map(|x| x.to_u64().unwrap())
    }

    #[test]
    fn small_prime_modulus() {
        assert_eq!(inv(2, 17), Ok(9));
        assert_eq!(inv(3, 17), Ok(6));
        assert_eq!(inv(1, 17), Ok(1));
        assert_eq!(inv(16, 17), Ok(16));
    }

    #[test]
    fn negative_and_oversized_inputs() {
        assert_eq!(inv(-1, 17), Ok(16));
        assert_eq!(inv(-15, 17), inv(2, 17));
        assert_eq!(inv(19, 17), inv(2, 17));
        assert_eq!(inv(-36, 17), inv(15, 17));
    }

    #[test]
    fn composite_modulus() {
        assert_eq!(inv(7, 40), Ok(23));
        assert_eq!(inv(4, 40), Err(Error::NoInverse));
    }

    #[test]
    fn zero_has_no_inverse() {
        assert_eq!(inv(0, 17), Err(Error::NoInverse));
        assert_eq!(inv(34, 17), Err(Error::NoInverse));
        assert_eq!(inv(-17, 17), Err(Error::NoInverse));
    }

    #[test]
    fn degenerate_moduli() {
        assert_eq!(inv(1, 0), Err(Error::InvalidModulus));
        assert_eq!(inv(1, 1), Err(Error::InvalidModulus));
    }

    #[test]
    fn reduce_negative() {
        let m = BigUint::from(17u8);
        assert_eq!(reduce_signed(&BigInt::from(-3), &m), BigUint::from(14u8));
        assert_eq!(reduce_signed(&BigInt::from(-34), &m), BigUint::from(0u8));
        assert_eq!(reduce_signed(&BigInt::from(40), &m), BigUint::from(6u8));
    }
}
