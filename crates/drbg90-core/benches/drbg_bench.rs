//! Hash-DRBG benchmarks.
//!
//! Run with: cargo bench -p drbg90-core

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use drbg90_core::HashDrbg;
use drbg90_types::HashAlgId;

fn bench_instantiate(c: &mut Criterion) {
    let mut group = c.benchmark_group("instantiate");

    let entropy = [0x42u8; 55];
    let nonce = [0x24u8; 28];

    for (alg, label) in [
        (HashAlgId::Sha256, "sha256"),
        (HashAlgId::Sha512, "sha512"),
    ] {
        group.bench_function(label, |b| {
            b.iter(|| {
                HashDrbg::instantiate(alg, 128, &entropy, &nonce, &[]).unwrap()
            });
        });
    }

    group.finish();
}

fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");

    let entropy = [0x42u8; 55];
    let nonce = [0x24u8; 28];

    for (alg, label) in [
        (HashAlgId::Sha256, "sha256"),
        (HashAlgId::Sha512, "sha512"),
    ] {
        for size in [64usize, 2048] {
            group.throughput(Throughput::Bytes(size as u64));

            let mut drbg = HashDrbg::instantiate(alg, 128, &entropy, &nonce, &[]).unwrap();
            let mut output = vec![0u8; size];

            group.bench_with_input(BenchmarkId::new(label, size), &size, |b, _| {
                b.iter(|| {
                    if drbg.generate(&mut output, None).is_err() {
                        drbg.reseed(&entropy, None).unwrap();
                        drbg.generate(&mut output, None).unwrap();
                    }
                });
            });
        }
    }

    group.finish();
}

criterion_group!(benches, bench_instantiate, bench_generate);
criterion_main!(benches);
