//! Probable-prime test backed by `crypto-primes`.

use crypto_bigint::BoxedUint;
use num_bigint::BigUint;

/// Is `n` a probable prime?
///
/// Runs the Baillie-PSW test (strong base-2 Miller-Rabin plus a strong Lucas
/// test) followed by a Miller-Rabin round with a random base. No composite is
/// known to pass Baillie-PSW.
pub fn is_probable_prime(n: &BigUint) -> bool {
    if n.bits() < 2 {
        return false;
    }

    if !n.bit(0) {
        return n.bits() == 2;
    }

    // Whole 64-bit words, which is also a whole number of 32-bit limbs.
    let precision = n.bits().next_multiple_of(64);

    match u32::try_from(precision)
        .ok()
        .and_then(|bits| BoxedUint::from_be_slice(&n.to_bytes_be(), bits).ok())
    {
        Some(candidate) => crypto_primes::is_prime(&candidate),
        None => false,
    }
}
