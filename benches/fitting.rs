use criterion::{criterion_group, criterion_main, Criterion};
use polyrecover::{decode, DecodedPoint, FitRequest, Integer, PointSet};
use std::hint::black_box;

/// Samples y = sum(x^j for j in 0..=degree) at x = 1..=n, exactly.
fn gen_sample_points(n: u64, degree: usize) -> PointSet {
    let points = (1..=n)
        .map(|x| {
            let x_int = Integer::from(x);
            let mut y = Integer::new(0);
            for j in 0..=degree {
                y = y + x_int.pow(j);
            }
            DecodedPoint::new(x, y)
        })
        .collect();
    PointSet::from_points(points)
}

fn criterion_benchmark(c: &mut Criterion) {
    //
    // Decode scaling with digit-string length (base 7 keeps every digit valid)
    let mut group = c.benchmark_group("decode_vs_len");
    for len in [8usize, 64, 512, 4096] {
        let digits = "6".repeat(len);
        group.bench_function(format!("len={len}"), |b| {
            b.iter(|| decode(black_box(&digits), 7).unwrap())
        });
    }
    group.finish();

    //
    // Full fit scaling with degree
    let mut group = c.benchmark_group("fit_vs_degree");
    for degree in [2usize, 5, 10, 20] {
        let points = gen_sample_points(degree as u64 + 1, degree);
        group.bench_function(format!("degree={degree}"), |b| {
            b.iter(|| {
                FitRequest::new(black_box(points.clone()), degree)
                    .solve()
                    .unwrap()
            })
        });
    }
    group.finish();

    //
    // Fit with very wide ordinates (secret-sized values)
    let mut group = c.benchmark_group("fit_wide_ordinates");
    let secret = decode(&"9".repeat(77), 10).unwrap();
    for degree in [2usize, 5] {
        let points = PointSet::from_points(
            (1..=degree as u64 + 1)
                .map(|x| {
                    let y = secret.clone() + Integer::from(x) * Integer::from(x);
                    DecodedPoint::new(x, y)
                })
                .collect(),
        );
        group.bench_function(format!("degree={degree}"), |b| {
            b.iter(|| {
                FitRequest::new(black_box(points.clone()), degree)
                    .solve()
                    .unwrap()
            })
        });
    }
    group.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
