//! Elliptic Curve Digital Signature Algorithm (ECDSA)
//!
//! Signing and verification over any [`CurveParameters`]. Messages are
//! supplied as integers already reduced (or reducible) mod the group order
//! `n`; hashing arbitrary byte strings into that residue is left to the
//! caller.
//!
//! ## Nonces
//!
//! Every signature needs a fresh secret nonce `k ∈ [1, n-1]`. The nonce must
//! come from a cryptographically secure RNG, must be unique per signature
//! and must never be derived from public data. Two signatures under the same
//! key and nonce give two linear equations in `(d, k)` and reveal the private
//! key. [`Signer::sign_prehashed_with_rng`] draws nonces itself and is the
//! recommended entry point; [`Signer::sign_prehashed`] and
//! [`hazmat::sign_prehashed`] take a caller-chosen nonce and exist for test
//! vectors and protocols that manage nonces externally.
//!
//! ## Signing/Verification Example
//!
//! ```
//! use weierstrass::{BigUint, ecdsa::Signer, named, rand_core::OsRng};
//!
//! let curve = named::secp256k1();
//! let signer = Signer::random(&curve, &mut OsRng);
//!
//! let message = BigUint::from(0x1234_5678u32);
//! let signature = signer.sign_prehashed_with_rng(&mut OsRng, &message).unwrap();
//!
//! let verifier = signer.verifier();
//! assert!(verifier.verify_prehashed(&message, &signature));
//! ```

pub mod hazmat;

mod sign;
mod verify;

pub use self::{sign::Signer, verify::Verifier};

use crate::{CurveParameters, Error, Result};
use core::fmt;
use num_bigint::BigUint;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// ECDSA signature `(r, s)`.
///
/// Signatures produced by this crate always have both components in
/// `[1, n-1]`. Signatures built with [`Signature::from_components`] (or
/// deserialized) may hold anything; verification rejects out-of-range
/// components.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Signature {
    r: BigUint,
    s: BigUint,
}

impl Signature {
    /// Build a signature, checking both components lie in `[1, n-1]`.
    ///
    /// Returns [`Error::InvalidSignatureFormat`] otherwise.
    pub fn from_scalars(curve: &CurveParameters, r: BigUint, s: BigUint) -> Result<Self> {
        let n = curve.scalars();

        if n.is_valid_scalar(&r) && n.is_valid_scalar(&s) {
            Ok(Self { r, s })
        } else {
            Err(Error::InvalidSignatureFormat)
        }
    }

    /// Build a signature without range checks.
    pub fn from_components(r: BigUint, s: BigUint) -> Self {
        Self { r, s }
    }

    /// `r` component.
    pub fn r(&self) -> &BigUint {
        &self.r
    }

    /// `s` component.
    pub fn s(&self) -> &BigUint {
        &self.s
    }

    /// Split into `(r, s)`.
    pub fn split_scalars(self) -> (BigUint, BigUint) {
        (self.r, self.s)
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.r, self.s)
    }
}
