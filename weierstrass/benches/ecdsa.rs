//! ECDSA benchmarks

use criterion::{Criterion, criterion_group, criterion_main};
use hex_literal::hex;
use rand_core::OsRng;
use std::hint::black_box;
use weierstrass::{BigUint, ecdsa::Signer, named};

const SIGNING_KEY_BYTES: [u8; 32] =
    hex!("1cf6bc6c7f642a84994119e206c9f0753ff100709f4fd12f2338c1be60bf4175");

const MESSAGE_BYTES: [u8; 32] =
    hex!("af2bdbe1aa9b6ec1e2ade1d694f41fc71a831d0268e9891562113d8a62add1bf");

fn bench_ecdsa(c: &mut Criterion) {
    let curve = named::secp256k1();
    let signer = Signer::new(&curve, BigUint::from_bytes_be(&SIGNING_KEY_BYTES)).unwrap();
    let verifier = signer.verifier();
    let message = BigUint::from_bytes_be(&MESSAGE_BYTES);
    let signature = signer.sign_prehashed_with_rng(&mut OsRng, &message).unwrap();

    let mut group = c.benchmark_group("ECDSA/secp256k1");
    group.bench_function("try_sign_prehashed", |b| {
        b.iter(|| signer.sign_prehashed_with_rng(&mut OsRng, black_box(&message)))
    });
    group.bench_function("verify_prehashed", |b| {
        b.iter(|| verifier.verify_prehashed(black_box(&message), black_box(&signature)))
    });
    group.finish();
}

criterion_group!(benches, bench_ecdsa);
criterion_main!(benches);
