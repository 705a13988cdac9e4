//! Curve points.

use core::fmt;
use num_bigint::BigUint;

#[cfg(feature = "serde")]
use serde::Serialize;

/// Point on a short Weierstrass curve in affine coordinates.
///
/// Obtained from [`CurveParameters::point`](crate::CurveParameters::point),
/// which checks the curve equation, or as the output of group operations.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct AffinePoint {
    /// x-coordinate
    pub(crate) x: BigUint,

    /// y-coordinate
    pub(crate) y: BigUint,
}

impl AffinePoint {
    /// x-coordinate in `[0, p)`.
    pub fn x(&self) -> &BigUint {
        &self.x
    }

    /// y-coordinate in `[0, p)`.
    pub fn y(&self) -> &BigUint {
        &self.y
    }

    /// Decompose into `(x, y)`.
    pub fn into_coordinates(self) -> (BigUint, BigUint) {
        (self.x, self.y)
    }
}

impl fmt::Display for AffinePoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Element of the curve group: an affine point or the point at infinity.
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum Point {
    /// Additive identity of the group a.k.a. the point at infinity.
    #[default]
    Identity,

    /// Affine point on the curve.
    Affine(AffinePoint),
}

impl Point {
    /// Additive identity of the group a.k.a. the point at infinity.
    pub const IDENTITY: Self = Point::Identity;

    /// Is this point the point at infinity?
    pub fn is_identity(&self) -> bool {
        matches!(self, Point::Identity)
    }

    /// Affine coordinates, unless this is the identity.
    pub fn as_affine(&self) -> Option<&AffinePoint> {
        match self {
            Point::Identity => None,
            Point::Affine(point) => Some(point),
        }
    }

    /// x-coordinate, unless this is the identity.
    pub fn x(&self) -> Option<&BigUint> {
        self.as_affine().map(AffinePoint::x)
    }

    /// y-coordinate, unless this is the identity.
    pub fn y(&self) -> Option<&BigUint> {
        self.as_affine().map(AffinePoint::y)
    }
}

impl From<AffinePoint> for Point {
    fn from(point: AffinePoint) -> Self {
        Point::Affine(point)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Point::Identity => f.write_str("infinity"),
            Point::Affine(point) => fmt::Display::fmt(point, f),
        }
    }
}
