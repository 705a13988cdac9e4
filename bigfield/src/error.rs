//! Error types.

use core::fmt;

/// Error type.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Error {
    /// The operand shares a factor with the modulus, so no inverse exists.
    NoInverse,

    /// Moduli must be at least 2.
    InvalidModulus,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::NoInverse => f.write_str("no modular inverse exists"),
            Error::InvalidModulus => f.write_str("modulus must be at least 2"),
        }
    }
}

impl core::error::Error for Error {}

/// Result type.
pub type Result<T> = core::result::Result<T, Error>;
