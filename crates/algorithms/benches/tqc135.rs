//! Benchmarks for the TQC-135 block cipher
//!
//! Covers round-key derivation (the dominant setup cost, one field
//! inversion per column per schedule pass), single-block encryption and
//! decryption, and raw field inversion.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tqc_algorithms::block::{BlockCipher, Tqc135};
use tqc_algorithms::gf::FieldElement;
use tqc_algorithms::types::QuinaryKey;

fn random_digits<const N: usize>(rng: &mut ChaCha8Rng) -> [u8; N] {
    let mut digits = [0u8; N];
    for digit in digits.iter_mut() {
        *digit = rng.gen_range(0..5);
    }
    digits
}

/// Benchmark round-key stream derivation
fn bench_key_schedule(c: &mut Criterion) {
    let mut group = c.benchmark_group("tqc135_key_schedule");
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    let key = QuinaryKey::new(random_digits(&mut rng)).unwrap();

    for rounds in [5usize, 10] {
        group.bench_with_input(BenchmarkId::from_parameter(rounds), &rounds, |b, &rounds| {
            b.iter(|| {
                let cipher = Tqc135::with_rounds(black_box(&key), rounds).unwrap();
                black_box(cipher);
            });
        });
    }

    group.finish();
}

/// Benchmark single block encryption and decryption
fn bench_block(c: &mut Criterion) {
    let mut group = c.benchmark_group("tqc135_block");
    group.throughput(Throughput::Bytes(135));
    let mut rng = ChaCha8Rng::seed_from_u64(42);

    let key = QuinaryKey::new(random_digits(&mut rng)).unwrap();
    let cipher = Tqc135::new(&key).unwrap();
    let block: [u8; 135] = random_digits(&mut rng);

    group.bench_function("encrypt", |b| {
        b.iter(|| {
            let mut state = black_box(block);
            cipher.encrypt_block(&mut state).unwrap();
            black_box(state);
        });
    });

    group.bench_function("decrypt", |b| {
        b.iter(|| {
            let mut state = black_box(block);
            cipher.decrypt_block(&mut state).unwrap();
            black_box(state);
        });
    });

    group.finish();
}

/// Benchmark multiplicative inversion in GF(5^45)
fn bench_field_inverse(c: &mut Criterion) {
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    let element = FieldElement::new(random_digits(&mut rng)).unwrap();

    c.bench_function("gf5_45_inverse", |b| {
        b.iter(|| {
            let inverse = black_box(&element).inverse().unwrap();
            black_box(inverse);
        });
    });
}

criterion_group!(
    benches,
    bench_key_schedule,
    bench_block,
    bench_field_inverse
);
criterion_main!(benches);
