//! Private/public key pairs.

use crate::{CurveParameters, Error, Point, Result};
use core::fmt;
use num_bigint::BigUint;
use rand_core::CryptoRngCore;

/// Private scalar `d ∈ [1, n-1]` together with its public key `Q = d·G`.
///
/// The public key is always derived from the private key; there is no way to
/// set it independently.
#[derive(Clone, Eq, PartialEq)]
pub struct KeyPair {
    private_key: BigUint,
    public_key: Point,
}

impl KeyPair {
    /// Derive the key pair for private scalar `d`.
    ///
    /// Returns [`Error::InvalidScalar`] unless `d ∈ [1, n-1]`.
    pub fn from_private_key(curve: &CurveParameters, private_key: BigUint) -> Result<Self> {
        if !curve.scalars().is_valid_scalar(&private_key) {
            return Err(Error::InvalidScalar);
        }

        let public_key = curve.mul_by_generator(&private_key);

        Ok(Self {
            private_key,
            public_key,
        })
    }

    /// Generate a random key pair.
    pub fn generate(curve: &CurveParameters, rng: &mut impl CryptoRngCore) -> Self {
        let private_key = curve.random_scalar(rng);
        let public_key = curve.mul_by_generator(&private_key);

        Self {
            private_key,
            public_key,
        }
    }

    /// Private scalar `d`.
    pub fn private_key(&self) -> &BigUint {
        &self.private_key
    }

    /// Public key `Q = d·G`.
    pub fn public_key(&self) -> &Point {
        &self.public_key
    }
}

impl fmt::Debug for KeyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyPair")
            .field("public_key", &self.public_key)
            .finish_non_exhaustive()
    }
}
