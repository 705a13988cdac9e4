//! Test vectors.

pub mod ecdsa;
pub mod group;
