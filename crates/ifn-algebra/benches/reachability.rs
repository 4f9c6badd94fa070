use criterion::{criterion_group, criterion_main, Criterion};
use ifn_algebra::{gen_complete, gen_cycle_with_chords, is_irreducible};
use ifn_core::rng::RngHandle;

fn bench_sparse_reachability(c: &mut Criterion) {
    let mut rng = RngHandle::from_seed(11);
    let capacity = gen_cycle_with_chords(64, 128, 9, &mut rng).unwrap();
    c.bench_function("is_irreducible_sparse_64", |b| {
        b.iter(|| {
            let _ = is_irreducible(&capacity);
        });
    });
}

fn bench_dense_reachability(c: &mut Criterion) {
    let mut rng = RngHandle::from_seed(12);
    let capacity = gen_complete(64, 9, &mut rng).unwrap();
    c.bench_function("is_irreducible_dense_64", |b| {
        b.iter(|| {
            let _ = is_irreducible(&capacity);
        });
    });
}

criterion_group!(benches, bench_sparse_reachability, bench_dense_reachability);
criterion_main!(benches);
