#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![doc(
    html_logo_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg",
    html_favicon_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg"
)]
#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, unused_qualifications)]
#![doc = include_str!("../README.md")]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

#[cfg(feature = "ecdsa")]
pub mod ecdsa;
pub mod named;

#[cfg(any(feature = "test-vectors", test))]
pub mod test_vectors;

mod affine;
mod arithmetic;
mod error;
mod keypair;
mod params;

pub use crate::{
    affine::{AffinePoint, Point},
    error::{Error, Result},
    keypair::KeyPair,
    params::CurveParameters,
};
pub use bigfield::{self, BigInt, BigUint, Modulus};
pub use rand_core;
