//! ECDSA test vectors.
//!
//! All values are big-endian. `m` is the message residue handed to the
//! signer, i.e. already hashed and encoded as an integer.

use hex_literal::hex;

/// ECDSA test vector.
#[derive(Clone, Copy, Debug)]
pub struct TestVector {
    /// Private scalar.
    pub d: &'static [u8],

    /// Public key x-coordinate.
    pub q_x: &'static [u8],

    /// Public key y-coordinate.
    pub q_y: &'static [u8],

    /// Nonce.
    pub k: &'static [u8],

    /// Message residue.
    pub m: &'static [u8],

    /// Signature `r` component.
    pub r: &'static [u8],

    /// Signature `s` component.
    pub s: &'static [u8],
}

/// [`textbook_p17`](crate::named::textbook_p17) vectors.
pub const TEXTBOOK_ECDSA_TEST_VECTORS: &[TestVector] = &[TestVector {
    d: &[7],
    q_x: &[0],
    q_y: &[6],
    k: &[3],
    m: &[10],
    r: &[10],
    s: &[14],
}];

/// [`demo_p114973`](crate::named::demo_p114973) vectors.
///
/// The second vector's nonce yields `k·G` with an x-coordinate above the
/// group order, so `r = x mod n` differs from `x`.
pub const DEMO_ECDSA_TEST_VECTORS: &[TestVector] = &[
    TestVector {
        d: &hex!("01505d"),
        q_x: &hex!("18c9"),
        q_y: &hex!("6f85"),
        k: &hex!("0149ce"),
        m: &hex!("6aac58bd"),
        r: &hex!("79bf"),
        s: &hex!("1277"),
    },
    TestVector {
        d: &hex!("01505d"),
        q_x: &hex!("18c9"),
        q_y: &hex!("6f85"),
        k: &hex!("76"),
        m: &hex!("6aac58bd"),
        r: &hex!("01d1"),
        s: &hex!("1962"),
    },
];

/// [`secp256k1`](crate::named::secp256k1) vectors.
pub const SECP256K1_ECDSA_TEST_VECTORS: &[TestVector] = &[TestVector {
    d: &hex!("ebb2c082fd7727890a28ac82f6bdf97bad8de9f5d7c9028692de1a255cad3e0f"),
    q_x: &hex!("779dd197a5df977ed2cf6cb31d82d43328b790dc6b3b7d4437a427bd5847dfcd"),
    q_y: &hex!("e94b724a555b6d017bb7607c3e3281daf5b1699d6ef4124975c9237b917d426f"),
    k: &hex!("49a0d7b786ec9cde0d0721d72804befd06571c974b191efb42ecf322ba9ddd9a"),
    m: &hex!("4b688df40bcedbe641ddb16ff0a1842d9c67ea1c3bf63f3e0471baa664531d1a"),
    r: &hex!("241097efbf8b63bf145c8961dbdf10c310efbb3b2676bbc0f8b08505c9e2f795"),
    s: &hex!("021006b7838609339e8b415a7f9acb1b661828131aef1ecbc7955dfb01f3ca0e"),
}];

/// [`nist_p256`](crate::named::nist_p256) vectors.
///
/// RFC 6979 A.2.5, SHA-256, message "sample".
pub const P256_ECDSA_TEST_VECTORS: &[TestVector] = &[TestVector {
    d: &hex!("c9afa9d845ba75166b5c215767b1d6934e50c3db36e89b127b8a622b120f6721"),
    q_x: &hex!("60fed4ba255a9d31c961eb74c6356d68c049b8923b61fa6ce669622e60f29fb6"),
    q_y: &hex!("7903fe1008b8bc99a41ae9e95628bc64f2f1b20c2d7e9f5177a3c294d4462299"),
    k: &hex!("a6e3c57dd01abe90086538398355dd4c3b17aa873382b0f24d6129493d8aad60"),
    m: &hex!("af2bdbe1aa9b6ec1e2ade1d694f41fc71a831d0268e9891562113d8a62add1bf"),
    r: &hex!("efd48b2aacb6a8fd1140dd9cd45e81d69d2c877b56aaf991c34d0ea84eaf3716"),
    s: &hex!("f7cb1c942d657c41d436c7a1b6e29f65f3e900dbb9aff4064dc4ab2f843acda8"),
}];
