use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use utils::fractile::fractile;
use utils::test_utils::generate_random_vector_f64;

fn bench_fractile(c: &mut Criterion) {
    let mut group = c.benchmark_group("Fractile");
    for size in [128, 1024, 8192, 65536, 524288].iter() {
        let values = generate_random_vector_f64(*size);

        group.bench_with_input(BenchmarkId::new("QuickSelect", *size), &size, |bencher, _| {
            bencher.iter(|| fractile(black_box(&values), black_box(0.9)))
        });

        group.bench_with_input(BenchmarkId::new("Sort", *size), &size, |bencher, _| {
            bencher.iter(|| {
                let mut v = black_box(&values).clone();
                v.sort_by(|a, b| a.partial_cmp(b).unwrap());
                v[(0.9 * v.len() as f64) as usize]
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_fractile);
criterion_main!(benches);
