//! Benchmarks for the EIP-2537 G1 addition precompile.
use ark_bls12_381::{Fr, G1Affine};
use ark_ec::{AffineRepr, CurveGroup};
use bls12_precompile::{
    bls12_381::{encode_point, g1_add::PRECOMPILE, AffinePoint},
    bls12_381_const::{PREALLOCATE_FOR_ERROR_BYTES, PREALLOCATE_FOR_RESULT_BYTES},
    perform_operation, Operation,
};
use criterion::{
    black_box, criterion_group, criterion_main, measurement::Measurement, BenchmarkGroup,
    Criterion,
};

const NUM_TEST_VECTORS: u64 = 16;

fn g1_point(k: u64) -> AffinePoint {
    let point = (G1Affine::generator() * Fr::from(k)).into_affine();
    AffinePoint::Point {
        x: point.x,
        y: point.y,
    }
}

fn g1_add_test_vectors() -> Vec<Vec<u8>> {
    (1..=NUM_TEST_VECTORS)
        .map(|k| {
            let mut input = Vec::with_capacity(256);
            input.extend(encode_point(&g1_point(k)));
            input.extend(encode_point(&g1_point(k * 7919 + 3)));
            input
        })
        .collect()
}

fn add_g1_add_benches<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    let test_vectors = g1_add_test_vectors();
    let precompile = *PRECOMPILE.precompile();

    group.bench_function("g1_add operation", |b| {
        b.iter(|| {
            for input in &test_vectors {
                black_box(precompile(black_box(input)).unwrap());
            }
        });
    });

    group.bench_function("g1_add doubling", |b| {
        let mut input = encode_point(&g1_point(5)).to_vec();
        input.extend_from_within(..);
        b.iter(|| black_box(precompile(black_box(&input)).unwrap()));
    });

    group.bench_function("g1_add perform_operation", |b| {
        let mut output = [0u8; PREALLOCATE_FOR_RESULT_BYTES];
        let mut error = [0u8; PREALLOCATE_FOR_ERROR_BYTES];
        b.iter(|| {
            for input in &test_vectors {
                black_box(perform_operation(
                    Operation::G1Add as u8,
                    black_box(input),
                    &mut output,
                    &mut error,
                ));
            }
        });
    });
}

/// Benchmarks the BLS12-381 precompiles.
pub fn benchmark_bls12_381(c: &mut Criterion) {
    let mut group = c.benchmark_group("bls12-381 precompile bench");
    add_g1_add_benches(&mut group);
    group.finish();
}

criterion_group! {
    name = benches;
    config = Criterion::default();
    targets = benchmark_bls12_381
}
criterion_main!(benches);
