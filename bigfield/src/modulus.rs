//! Canonical residue arithmetic over a runtime modulus.

use crate::{
    Error, Result,
    inverse::{invert_residue, reduce_signed},
    primality::is_probable_prime,
};
use core::fmt;
use num_bigint::{BigInt, BigUint};
use num_traits::{One, Zero};

/// A modulus `m >= 2` together with arithmetic on residues in `[0, m)`.
///
/// Operands need not be canonical, but results always are.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Modulus {
    value: BigUint,
}

impl Modulus {
    /// Wrap `value` as a modulus.
    ///
    /// Returns [`Error::InvalidModulus`] if `value < 2`.
    pub fn new(value: BigUint) -> Result<Self> {
        if value <= BigUint::one() {
            return Err(Error::InvalidModulus);
        }

        Ok(Self { value })
    }

    /// The modulus as an integer.
    pub fn value(&self) -> &BigUint {
        &self.value
    }

    /// Bit length of the modulus.
    pub fn bits(&self) -> u64 {
        self.value.bits()
    }

    /// Number of bytes needed to hold any residue.
    pub fn byte_len(&self) -> usize {
        self.bits().div_ceil(8) as usize
    }

    /// Is `n` a canonical residue, i.e. `n < m`?
    pub fn contains(&self, n: &BigUint) -> bool {
        *n < self.value
    }

    /// Is `n` in `[1, m-1]`?
    pub fn is_valid_scalar(&self, n: &BigUint) -> bool {
        !n.is_zero() && self.contains(n)
    }

    /// Is the modulus (probably) prime?
    pub fn is_probable_prime(&self) -> bool {
        is_probable_prime(&self.value)
    }

    /// Reduce an arbitrary non-negative integer.
    pub fn reduce(&self, n: &BigUint) -> BigUint {
        n % &self.value
    }

    /// Reduce an arbitrary signed integer.
    pub fn reduce_signed(&self, n: &BigInt) -> BigUint {
        reduce_signed(n, &self.value)
    }

    /// `a + b mod m`
    pub fn add(&self, a: &BigUint, b: &BigUint) -> BigUint {
        (a + b) % &self.value
    }

    /// `a - b mod m`
    pub fn sub(&self, a: &BigUint, b: &BigUint) -> BigUint {
        if a >= b {
            (a - b) % &self.value
        } else {
            self.neg(&(b - a))
        }
    }

    /// `-a mod m`
    pub fn neg(&self, a: &BigUint) -> BigUint {
        let a = self.reduce(a);

        if a.is_zero() {
            a
        } else {
            &self.value - a
        }
    }

    /// `a · b mod m`
    pub fn mul(&self, a: &BigUint, b: &BigUint) -> BigUint {
        (a * b) % &self.value
    }

    /// `a² mod m`
    pub fn square(&self, a: &BigUint) -> BigUint {
        self.mul(a, a)
    }

    /// `2a mod m`
    pub fn double(&self, a: &BigUint) -> BigUint {
        self.add(a, a)
    }

    /// `a⁻¹ mod m`, reducing `a` first.
    ///
    /// Returns [`Error::NoInverse`] if `gcd(a, m) != 1`.
    pub fn invert(&self, a: &BigUint) -> Result<BigUint> {
        invert_residue(&self.reduce(a), &self.value)
    }
}

impl AsRef<BigUint> for Modulus {
    fn as_ref(&self) -> &BigUint {
        &self.value
    }
}

impl fmt::Display for Modulus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.value, f)
    }
}

impl TryFrom<BigUint> for Modulus {
    type Error = Error;

    fn try_from(value: BigUint) -> Result<Self> {
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::Modulus;
    use crate::Error;
    use num_bigint::{BigInt, BigUint};

    fn m17() -> Modulus {
        Modulus::new(BigUint::from(17u8)).unwrap()
    }

    fn n(v: u32) -> BigUint {
        BigUint::from(v)
    }

    #[test]
    fn rejects_tiny_moduli() {
        assert_eq!(Modulus::new(n(0)), Err(Error::InvalidModulus));
        assert_eq!(Modulus::new(n(1)), Err(Error::InvalidModulus));
        assert!(Modulus::new(n(2)).is_ok());
    }

    #[test]
    fn add_sub_wrap() {
        let m = m17();
        assert_eq!(m.add(&n(10), &n(9)), n(2));
        assert_eq!(m.add(&n(10), &n(7)), n(0));
        assert_eq!(m.sub(&n(3), &n(5)), n(15));
        assert_eq!(m.sub(&n(5), &n(3)), n(2));
        assert_eq!(m.sub(&n(3), &n(40)), n(14));
        assert_eq!(m.sub(&n(40), &n(3)), n(3));
    }

    #[test]
    fn neg() {
        let m = m17();
        assert_eq!(m.neg(&n(0)), n(0));
        assert_eq!(m.neg(&n(1)), n(16));
        assert_eq!(m.neg(&n(34)), n(0));
        assert_eq!(m.add(&n(5), &m.neg(&n(5))), n(0));
    }

    #[test]
    fn mul_square_double() {
        let m = m17();
        assert_eq!(m.mul(&n(5), &n(7)), n(1));
        assert_eq!(m.square(&n(6)), n(2));
        assert_eq!(m.double(&n(9)), n(1));
    }

    #[test]
    fn invert() {
        let m = m17();
        assert_eq!(m.invert(&n(2)), Ok(n(9)));
        assert_eq!(m.invert(&n(19)), Ok(n(9)));
        assert_eq!(m.invert(&n(0)), Err(Error::NoInverse));
    }

    #[test]
    fn reduce_signed() {
        assert_eq!(m17().reduce_signed(&BigInt::from(-3)), n(14));
    }

    #[test]
    fn scalar_range() {
        let m = m17();
        assert!(!m.is_valid_scalar(&n(0)));
        assert!(m.is_valid_scalar(&n(1)));
        assert!(m.is_valid_scalar(&n(16)));
        assert!(!m.is_valid_scalar(&n(17)));
    }

    #[test]
    fn byte_len() {
        assert_eq!(m17().byte_len(), 1);
        assert_eq!(Modulus::new(n(256)).unwrap().byte_len(), 2);
        assert_eq!(Modulus::new(n(255)).unwrap().byte_len(), 1);
    }
}
