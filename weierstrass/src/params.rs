//! Curve domain parameters.

use crate::{AffinePoint, Error, Point, Result};
use alloc::vec;
use bigfield::Modulus;
use core::fmt;
use num_bigint::{BigInt, BigUint};
use num_traits::Zero;
use rand_core::CryptoRngCore;

/// Domain parameters `(a, b, p, n, G)` of the curve `y² = x³ + a·x + b` over
/// `F_p`, with base point `G` of prime order `n`.
///
/// Immutable once constructed. Every group and signature operation takes the
/// parameters explicitly, so a single value can be shared by any number of
/// concurrent callers.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CurveParameters {
    /// Coefficient `a` in the curve equation.
    a: BigUint,

    /// Coefficient `b` in the curve equation.
    b: BigUint,

    /// Base field modulus `p`.
    field: Modulus,

    /// Order `n` of the base point.
    scalars: Modulus,

    /// Base point `G`.
    generator: Point,
}

impl CurveParameters {
    /// Validate and wrap curve parameters.
    ///
    /// Checks that `p > 3` and `n` are (probable) primes, that `a` and `b` are
    /// residues mod `p`, that the curve is non-singular
    /// (`4a³ + 27b² ≢ 0 mod p`), that `G` lies on the curve and that
    /// `n·G` is the identity.
    ///
    /// Coefficients are taken as residues: pass `p - 3` for `a = -3`, or use
    /// [`CurveParameters::from_signed_coefficients`].
    pub fn new(
        a: BigUint,
        b: BigUint,
        p: BigUint,
        order: BigUint,
        generator: (BigUint, BigUint),
    ) -> Result<Self> {
        let field = Modulus::new(p).map_err(|_| Error::InvalidCurveParameters("p < 2"))?;
        let scalars = Modulus::new(order).map_err(|_| Error::InvalidCurveParameters("n < 2"))?;

        if field.bits() < 3 || !field.is_probable_prime() {
            return Err(Error::InvalidCurveParameters("p is not a prime above 3"));
        }

        if !scalars.is_probable_prime() {
            return Err(Error::InvalidCurveParameters("n is not prime"));
        }

        if !field.contains(&a) || !field.contains(&b) {
            return Err(Error::InvalidCurveParameters("coefficient not reduced mod p"));
        }

        let params = Self::new_unchecked(a, b, field, scalars, generator);

        if params.discriminant().is_zero() {
            return Err(Error::InvalidCurveParameters("curve is singular"));
        }

        if let Point::Affine(g) = &params.generator {
            if !params.is_on_curve(&g.x, &g.y) {
                return Err(Error::PointNotOnCurve);
            }
        }

        if !params.mul_unreduced(&params.generator, params.order()).is_identity() {
            return Err(Error::InvalidCurveParameters("n·G is not the identity"));
        }

        Ok(params)
    }

    /// Like [`CurveParameters::new`], reducing signed coefficients mod `p`
    /// first.
    pub fn from_signed_coefficients(
        a: &BigInt,
        b: &BigInt,
        p: BigUint,
        order: BigUint,
        generator: (BigUint, BigUint),
    ) -> Result<Self> {
        let field = Modulus::new(p).map_err(|_| Error::InvalidCurveParameters("p < 2"))?;
        let a = field.reduce_signed(a);
        let b = field.reduce_signed(b);
        Self::new(a, b, field.value().clone(), order, generator)
    }

    /// Wrap parameters without checking them. Only for constants known to be
    /// valid.
    pub(crate) fn new_unchecked(
        a: BigUint,
        b: BigUint,
        field: Modulus,
        scalars: Modulus,
        (gx, gy): (BigUint, BigUint),
    ) -> Self {
        Self {
            a,
            b,
            field,
            scalars,
            generator: Point::Affine(AffinePoint { x: gx, y: gy }),
        }
    }

    /// Coefficient `a` in the curve equation.
    pub fn a(&self) -> &BigUint {
        &self.a
    }

    /// Coefficient `b` in the curve equation.
    pub fn b(&self) -> &BigUint {
        &self.b
    }

    /// Base field modulus `p`.
    pub fn p(&self) -> &BigUint {
        self.field.value()
    }

    /// Order `n` of the base point.
    pub fn order(&self) -> &BigUint {
        self.scalars.value()
    }

    /// Arithmetic mod `p`, for coordinates.
    pub fn field(&self) -> &Modulus {
        &self.field
    }

    /// Arithmetic mod `n`, for scalars.
    pub fn scalars(&self) -> &Modulus {
        &self.scalars
    }

    /// Base point `G`.
    pub fn generator(&self) -> &Point {
        &self.generator
    }

    /// Build an affine point, checking that it lies on the curve.
    ///
    /// Returns [`Error::PointNotOnCurve`] if either coordinate is outside
    /// `[0, p)` or `y² ≢ x³ + a·x + b (mod p)`.
    pub fn point(&self, x: BigUint, y: BigUint) -> Result<Point> {
        if self.is_on_curve(&x, &y) {
            Ok(Point::Affine(AffinePoint { x, y }))
        } else {
            Err(Error::PointNotOnCurve)
        }
    }

    /// Draw a uniformly random scalar in `[1, n-1]`.
    pub fn random_scalar(&self, rng: &mut impl CryptoRngCore) -> BigUint {
        let len = self.scalars.byte_len();
        let excess_bits = len * 8 - self.scalars.bits() as usize;
        let mut bytes = vec![0u8; len];

        loop {
            rng.fill_bytes(&mut bytes);
            bytes[0] &= 0xff >> excess_bits;

            let candidate = BigUint::from_bytes_be(&bytes);

            if self.scalars.is_valid_scalar(&candidate) {
                return candidate;
            }
        }
    }

    /// `4a³ + 27b² mod p`
    fn discriminant(&self) -> BigUint {
        let f = &self.field;
        let a3 = f.mul(&f.square(&self.a), &self.a);
        let b2 = f.square(&self.b);
        f.add(
            &f.mul(&BigUint::from(4u8), &a3),
            &f.mul(&BigUint::from(27u8), &b2),
        )
    }
}

impl fmt::Display for CurveParameters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "y^2 = x^3 + {}x + {} mod {}, G = {}, n = {}",
            self.a,
            self.b,
            self.field,
            self.generator,
            self.scalars
        )
    }
}
