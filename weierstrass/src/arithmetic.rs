//! Group law for short Weierstrass curves in affine coordinates.
//!
//! Formulas are the textbook chord-and-tangent rules. For `P = (x₁, y₁)` and
//! `Q = (x₂, y₂)` with slope `λ`:
//!
//! ```text
//! x₃ = λ² - x₁ - x₂
//! y₃ = λ·(x₁ - x₃) - y₁
//! ```
//!
//! where `λ = (y₂ - y₁) / (x₂ - x₁)` for distinct points and
//! `λ = (3x₁² + a) / 2y₁` for doubling.
//!
//! None of this is constant-time.

use crate::{AffinePoint, CurveParameters, Point};
use num_bigint::BigUint;

impl CurveParameters {
    /// Does `(x, y)` satisfy `y² ≡ x³ + a·x + b (mod p)` with both
    /// coordinates in `[0, p)`?
    pub fn is_on_curve(&self, x: &BigUint, y: &BigUint) -> bool {
        let f = self.field();

        if !f.contains(x) || !f.contains(y) {
            return false;
        }

        let rhs = f.add(&f.mul(&f.add(&f.square(x), self.a()), x), self.b());
        f.square(y) == rhs
    }

    /// Returns `-P`.
    pub fn negate(&self, point: &Point) -> Point {
        match point {
            Point::Identity => Point::Identity,
            Point::Affine(p) => Point::Affine(AffinePoint {
                x: p.x.clone(),
                y: self.field().neg(&p.y),
            }),
        }
    }

    /// Returns `P + Q`.
    pub fn add(&self, lhs: &Point, rhs: &Point) -> Point {
        let (p, q) = match (lhs, rhs) {
            (Point::Identity, _) => return rhs.clone(),
            (_, Point::Identity) => return lhs.clone(),
            (Point::Affine(p), Point::Affine(q)) => (p, q),
        };

        let f = self.field();

        if p.x == q.x {
            // Same x-coordinate: either `Q = -P` or `Q = P`.
            if p.y == f.neg(&q.y) {
                return Point::Identity;
            }

            if p.y == q.y {
                return self.double_affine(p);
            }

            // Unreachable for points on the curve.
            return Point::Identity;
        }

        match f.invert(&f.sub(&q.x, &p.x)) {
            Ok(dx_inv) => {
                let slope = f.mul(&f.sub(&q.y, &p.y), &dx_inv);
                self.chord(p, q, &slope)
            }
            // `x₂ - x₁` is non-zero, so this only fails for composite `p`.
            Err(_) => Point::Identity,
        }
    }

    /// Returns `2P`.
    pub fn double(&self, point: &Point) -> Point {
        match point {
            Point::Identity => Point::Identity,
            Point::Affine(p) => self.double_affine(p),
        }
    }

    /// Returns `k·P`, with `k` reduced mod `n` first.
    pub fn mul(&self, point: &Point, k: &BigUint) -> Point {
        self.mul_unreduced(point, &self.scalars().reduce(k))
    }

    /// Returns `k·G`.
    pub fn mul_by_generator(&self, k: &BigUint) -> Point {
        self.mul(self.generator(), k)
    }

    /// Returns `k·P + l·Q`, sharing one doubling chain between both terms.
    pub fn lincomb(&self, p: &Point, k: &BigUint, q: &Point, l: &BigUint) -> Point {
        let k = self.scalars().reduce(k);
        let l = self.scalars().reduce(l);
        let sum = self.add(p, q);
        let mut acc = Point::Identity;

        for i in (0..k.bits().max(l.bits())).rev() {
            acc = self.double(&acc);

            match (k.bit(i), l.bit(i)) {
                (true, true) => acc = self.add(&acc, &sum),
                (true, false) => acc = self.add(&acc, p),
                (false, true) => acc = self.add(&acc, q),
                (false, false) => (),
            }
        }

        acc
    }

    /// Left-to-right double-and-add over every bit of `k`.
    pub(crate) fn mul_unreduced(&self, point: &Point, k: &BigUint) -> Point {
        let mut acc = Point::Identity;

        for i in (0..k.bits()).rev() {
            acc = self.double(&acc);

            if k.bit(i) {
                acc = self.add(&acc, point);
            }
        }

        acc
    }

    fn double_affine(&self, p: &AffinePoint) -> Point {
        let f = self.field();
        let numerator = f.add(&f.mul(&BigUint::from(3u8), &f.square(&p.x)), self.a());

        match f.invert(&f.double(&p.y)) {
            Ok(denominator_inv) => {
                let slope = f.mul(&numerator, &denominator_inv);
                self.chord(p, p, &slope)
            }
            // `y = 0`: vertical tangent at a point of order two.
            Err(_) => Point::Identity,
        }
    }

    fn chord(&self, p: &AffinePoint, q: &AffinePoint, slope: &BigUint) -> Point {
        let f = self.field();
        let x = f.sub(&f.sub(&f.square(slope), &p.x), &q.x);
        let y = f.sub(&f.mul(slope, &f.sub(&p.x, &x)), &p.y);
        Point::Affine(AffinePoint { x, y })
    }
}
