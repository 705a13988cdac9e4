//! ECDSA signer

use super::{Signature, Verifier, hazmat};
use crate::{CurveParameters, Error, KeyPair, Point, Result};
use core::fmt;
use num_bigint::BigUint;
use rand_core::CryptoRngCore;

/// Upper bound on nonces drawn by [`Signer::sign_prehashed_with_rng`].
///
/// On cryptographic-size curves a degenerate nonce has probability about
/// `2/n`, so this bound is only reachable on toy curves.
const MAX_NONCE_ATTEMPTS: usize = 128;

/// ECDSA signing key bound to the curve it was derived on.
#[derive(Clone)]
pub struct Signer<'c> {
    curve: &'c CurveParameters,
    keypair: KeyPair,
}

impl<'c> Signer<'c> {
    /// Create a signer from the private scalar `d ∈ [1, n-1]`.
    pub fn new(curve: &'c CurveParameters, private_key: BigUint) -> Result<Self> {
        KeyPair::from_private_key(curve, private_key).map(|keypair| Self { curve, keypair })
    }

    /// Create a signer from a key pair generated on `curve`.
    pub fn from_keypair(curve: &'c CurveParameters, keypair: KeyPair) -> Self {
        Self { curve, keypair }
    }

    /// Generate a signer with a random private key.
    pub fn random(curve: &'c CurveParameters, rng: &mut impl CryptoRngCore) -> Self {
        Self::from_keypair(curve, KeyPair::generate(curve, rng))
    }

    /// Curve parameters this signer operates on.
    pub fn curve(&self) -> &'c CurveParameters {
        self.curve
    }

    /// Key pair used for signing.
    pub fn keypair(&self) -> &KeyPair {
        &self.keypair
    }

    /// Public key `Q = d·G`.
    pub fn public_key(&self) -> &Point {
        self.keypair.public_key()
    }

    /// [`Verifier`] for this signer's public key.
    pub fn verifier(&self) -> Verifier<'c> {
        Verifier::from_trusted(self.curve, self.keypair.public_key().clone())
    }

    /// Sign the message residue `m` with the caller-supplied nonce `k`.
    ///
    /// Makes a single attempt: [`Error::DegenerateSignature`] means `k` must
    /// be replaced by a fresh nonce. See the [module docs](super) for the
    /// requirements on `k`.
    pub fn sign_prehashed(&self, m: &BigUint, k: &BigUint) -> Result<Signature> {
        hazmat::sign_prehashed(self.curve, self.keypair.private_key(), m, k)
    }

    /// Sign the message residue `m`, drawing nonces from `rng` until one
    /// produces a non-degenerate signature.
    ///
    /// Returns [`Error::DegenerateSignature`] only if every one of a fixed
    /// number of nonces was degenerate, which requires a tiny group order.
    pub fn sign_prehashed_with_rng(
        &self,
        rng: &mut impl CryptoRngCore,
        m: &BigUint,
    ) -> Result<Signature> {
        for _ in 0..MAX_NONCE_ATTEMPTS {
            let k = self.curve.random_scalar(rng);

            match self.sign_prehashed(m, &k) {
                Err(Error::DegenerateSignature) => continue,
                result => return result,
            }
        }

        Err(Error::DegenerateSignature)
    }
}

impl fmt::Debug for Signer<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Signer")
            .field("public_key", self.keypair.public_key())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::Signer;
    use crate::{Error, named};
    use num_bigint::BigUint;
    use rand_core::{CryptoRng, RngCore};

    /// Replays a fixed byte sequence, for driving the nonce retry loop.
    struct ScriptedRng {
        bytes: &'static [u8],
        pos: usize,
    }

    impl RngCore for ScriptedRng {
        fn next_u32(&mut self) -> u32 {
            let mut buf = [0u8; 4];
            self.fill_bytes(&mut buf);
            u32::from_be_bytes(buf)
        }

        fn next_u64(&mut self) -> u64 {
            let mut buf = [0u8; 8];
            self.fill_bytes(&mut buf);
            u64::from_be_bytes(buf)
        }

        fn fill_bytes(&mut self, dest: &mut [u8]) {
            for byte in dest {
                *byte = self.bytes[self.pos % self.bytes.len()];
                self.pos += 1;
            }
        }

        fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand_core::Error> {
            self.fill_bytes(dest);
            Ok(())
        }
    }

    impl CryptoRng for ScriptedRng {}

    fn n(v: u32) -> BigUint {
        BigUint::from(v)
    }

    #[test]
    fn retries_degenerate_nonces() {
        let curve = named::textbook_p17();
        let signer = Signer::new(&curve, n(7)).unwrap();

        // 0 and 19 fall outside [1, 18]; 7 gives r = 0; 3 gives s = 0 for m = 6;
        // 5 succeeds.
        let mut rng = ScriptedRng {
            bytes: &[0, 19, 7, 3, 5],
            pos: 0,
        };

        let signature = signer.sign_prehashed_with_rng(&mut rng, &n(6)).unwrap();
        assert_eq!(signature, signer.sign_prehashed(&n(6), &n(5)).unwrap());
        assert_eq!(rng.pos, 5);
    }

    #[test]
    fn gives_up_on_always_degenerate_nonces() {
        let curve = named::textbook_p17();
        let signer = Signer::new(&curve, n(7)).unwrap();
        let mut rng = ScriptedRng {
            bytes: &[7],
            pos: 0,
        };

        assert_eq!(
            signer.sign_prehashed_with_rng(&mut rng, &n(6)),
            Err(Error::DegenerateSignature)
        );
    }

    #[test]
    fn rejects_invalid_private_key() {
        let curve = named::textbook_p17();
        assert_eq!(Signer::new(&curve, n(0)).err(), Some(Error::InvalidScalar));
        assert_eq!(Signer::new(&curve, n(19)).err(), Some(Error::InvalidScalar));
    }
}
