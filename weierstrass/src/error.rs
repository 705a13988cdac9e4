//! Error types.

use core::fmt;

/// Elliptic curve and ECDSA errors.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Error {
    /// A modular inverse was required but does not exist.
    NoInverse,

    /// The nonce produced `r = 0` or `s = 0`. Sign again with a fresh nonce.
    DegenerateSignature,

    /// Coordinates do not satisfy the curve equation, or the point cannot be
    /// used where an affine curve point is required.
    PointNotOnCurve,

    /// A signature component lies outside `[1, n-1]`.
    InvalidSignatureFormat,

    /// A private key or nonce lies outside `[1, n-1]`.
    InvalidScalar,

    /// Curve parameters violate a domain invariant.
    InvalidCurveParameters(&'static str),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::NoInverse => f.write_str("no modular inverse exists"),
            Error::DegenerateSignature => f.write_str("degenerate signature; retry with a new nonce"),
            Error::PointNotOnCurve => f.write_str("point is not on the curve"),
            Error::InvalidSignatureFormat => f.write_str("signature component out of range"),
            Error::InvalidScalar => f.write_str("scalar out of range"),
            Error::InvalidCurveParameters(reason) => {
                write!(f, "invalid curve parameters: {reason}")
            }
        }
    }
}

impl core::error::Error for Error {}

impl From<bigfield::Error> for Error {
    fn from(err: bigfield::Error) -> Self {
        match err {
            bigfield::Error::NoInverse => Error::NoInverse,
            bigfield::Error::InvalidModulus => Error::InvalidCurveParameters("modulus below 2"),
        }
    }
}

/// Result type.
pub type Result<T> = core::result::Result<T, Error>;
