//! Named curve parameters.
//!
//! Each function rebuilds the parameters from constants; hold on to the
//! returned value rather than calling it per operation.

use crate::CurveParameters;
use bigfield::Modulus;
use hex_literal::hex;
use num_bigint::BigUint;

/// `y² = x³ + 2x + 2` over `F₁₇`, `G = (5, 1)` of order 19.
///
/// Small enough to check every group operation by hand.
pub fn textbook_p17() -> CurveParameters {
    from_constants(&[2], &[2], &[17], &[19], (&[5], &[1]))
}

/// `y² = x³ - 3x + 69424` over `F₁₁₄₉₇₃`, `G = (11570, 42257)` of order
/// 114467.
pub fn demo_p114973() -> CurveParameters {
    from_constants(
        &hex!("01c11a"),
        &hex!("010f30"),
        &hex!("01c11d"),
        &hex!("01bf23"),
        (&hex!("2d32"), &hex!("a511")),
    )
}

/// secp256k1: `y² = x³ + 7` over a 256-bit prime field.
///
/// Specified in Certicom's SECG in SEC 2: Recommended Elliptic Curve Domain
/// Parameters: <https://www.secg.org/sec2-v2.pdf>
pub fn secp256k1() -> CurveParameters {
    from_constants(
        &[0],
        &[7],
        &hex!("fffffffffffffffffffffffffffffffffffffffffffffffffffffffefffffc2f"),
        &hex!("fffffffffffffffffffffffffffffffebaaedce6af48a03bbfd25e8cd0364141"),
        (
            &hex!("79be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798"),
            &hex!("483ada7726a3c4655da4fbfc0e1108a8fd17b448a68554199c47d08ffb10d4b8"),
        ),
    )
}

/// NIST P-256 (a.k.a. secp256r1, prime256v1) as defined in SP 800-186.
pub fn nist_p256() -> CurveParameters {
    from_constants(
        &hex!("ffffffff00000001000000000000000000000000fffffffffffffffffffffffc"),
        &hex!("5ac635d8aa3a93e7b3ebbd55769886bc651d06b0cc53b0f63bce3c3e27d2604b"),
        &hex!("ffffffff00000001000000000000000000000000ffffffffffffffffffffffff"),
        &hex!("ffffffff00000000ffffffffffffffffbce6faada7179e84f3b9cac2fc632551"),
        (
            &hex!("6b17d1f2e12c4247f8bce6e563a440f277037d812deb33a0f4a13945d898c296"),
            &hex!("4fe342e2fe1a7f9b8ee7eb4a7c0f9e162bce33576b315ececbb6406837bf51f5"),
        ),
    )
}

/// Big-endian constants known to satisfy every invariant checked by
/// [`CurveParameters::new`].
fn from_constants(
    a: &[u8],
    b: &[u8],
    p: &[u8],
    n: &[u8],
    (gx, gy): (&[u8], &[u8]),
) -> CurveParameters {
    CurveParameters::new_unchecked(
        BigUint::from_bytes_be(a),
        BigUint::from_bytes_be(b),
        constant_modulus(p),
        constant_modulus(n),
        (BigUint::from_bytes_be(gx), BigUint::from_bytes_be(gy)),
    )
}

fn constant_modulus(bytes: &[u8]) -> Modulus {
    Modulus::new(BigUint::from_bytes_be(bytes)).expect("named curve modulus exceeds one")
}
