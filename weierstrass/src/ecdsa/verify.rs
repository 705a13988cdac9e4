//! ECDSA verifier

use super::{Signature, hazmat};
use crate::{CurveParameters, Error, Point, Result};
use num_bigint::BigUint;

/// ECDSA public key bound to the curve it lives on.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Verifier<'c> {
    curve: &'c CurveParameters,
    public_key: Point,
}

impl<'c> Verifier<'c> {
    /// Create a verifier for `public_key`.
    ///
    /// Returns [`Error::PointNotOnCurve`] if `public_key` is the identity or
    /// does not satisfy the curve equation.
    pub fn new(curve: &'c CurveParameters, public_key: Point) -> Result<Self> {
        match &public_key {
            Point::Affine(q) if curve.is_on_curve(q.x(), q.y()) => {
                Ok(Self::from_trusted(curve, public_key))
            }
            _ => Err(Error::PointNotOnCurve),
        }
    }

    /// Create a verifier from affine coordinates.
    pub fn from_affine_coordinates(
        curve: &'c CurveParameters,
        x: BigUint,
        y: BigUint,
    ) -> Result<Self> {
        Self::new(curve, curve.point(x, y)?)
    }

    pub(crate) fn from_trusted(curve: &'c CurveParameters, public_key: Point) -> Self {
        Self { curve, public_key }
    }

    /// Public key `Q`.
    pub fn public_key(&self) -> &Point {
        &self.public_key
    }

    /// Verify `signature` over the message residue `m`.
    pub fn verify_prehashed(&self, m: &BigUint, signature: &Signature) -> bool {
        hazmat::verify_prehashed(self.curve, &self.public_key, m, signature)
    }
}
