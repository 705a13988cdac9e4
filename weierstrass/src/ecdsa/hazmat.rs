//! Low-level ECDSA primitives.
//!
//! # ⚠️ Warning: Hazmat!
//!
//! These functions take the nonce from the caller and do not retry. Reusing
//! or predicting a nonce leaks the private key. Prefer [`Signer`] unless
//! nonces are managed elsewhere.
//!
//! [`Signer`]: super::Signer

use super::Signature;
use crate::{CurveParameters, Error, Point, Result};
use num_bigint::BigUint;
use num_traits::Zero;

/// Sign the message residue `m` with private scalar `d` and nonce `k`.
///
/// `m` is reduced mod `n`. Computes `R = k·G`, `r = R.x mod n` and
/// `s = k⁻¹·(m + d·r) mod n`.
///
/// # Errors
///
/// - [`Error::InvalidScalar`] if `d` or `k` lies outside `[1, n-1]`.
/// - [`Error::DegenerateSignature`] if `r = 0` or `s = 0`. The caller must
///   pick a fresh nonce and try again.
pub fn sign_prehashed(
    curve: &CurveParameters,
    d: &BigUint,
    m: &BigUint,
    k: &BigUint,
) -> Result<Signature> {
    let n = curve.scalars();

    if !n.is_valid_scalar(d) || !n.is_valid_scalar(k) {
        return Err(Error::InvalidScalar);
    }

    // Lift the x-coordinate of 𝑘×𝑮 from the base field into the scalar field.
    let r = match curve.mul_by_generator(k) {
        Point::Identity => return Err(Error::DegenerateSignature),
        Point::Affine(point) => n.reduce(point.x()),
    };

    if r.is_zero() {
        return Err(Error::DegenerateSignature);
    }

    let k_inverse = n.invert(k)?;
    let z = n.reduce(m);
    let s = n.mul(&k_inverse, &n.add(&z, &n.mul(d, &r)));

    if s.is_zero() {
        return Err(Error::DegenerateSignature);
    }

    Ok(Signature::from_components(r, s))
}

/// Verify `signature` over the message residue `m` against public key `q`.
///
/// Returns `false` for out-of-range signature components rather than an
/// error. `q` is trusted to be a point on `curve`; [`Verifier`] checks this
/// once at construction.
///
/// [`Verifier`]: super::Verifier
pub fn verify_prehashed(
    curve: &CurveParameters,
    q: &Point,
    m: &BigUint,
    signature: &Signature,
) -> bool {
    let n = curve.scalars();
    let (r, s) = (signature.r(), signature.s());

    if !n.is_valid_scalar(r) || !n.is_valid_scalar(s) {
        return false;
    }

    let Ok(s_inverse) = n.invert(s) else {
        return false;
    };

    let z = n.reduce(m);
    let u1 = n.mul(&z, &s_inverse);
    let u2 = n.mul(r, &s_inverse);

    match curve.lincomb(curve.generator(), &u1, q, &u2) {
        Point::Identity => false,
        // The base field and scalar field differ: compare `x mod n`.
        Point::Affine(x) => n.reduce(x.x()) == *r,
    }
}
