use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use selectlib::{Selector, Strategy};

fn random_vec(len: usize) -> Vec<u64> {
    let mut rng = ChaCha20Rng::seed_from_u64(len as u64);
    (0..len).map(|_| rng.gen()).collect()
}

fn bench_median(c: &mut Criterion) {
    let mut group = c.benchmark_group("median_low");
    for size in [1_000, 10_000, 100_000, 1_000_000] {
        let data = random_vec(size);
        let mid = (size - 1) / 2;

        group.bench_with_input(BenchmarkId::new("sort_unstable", size), &data, |b, data| {
            b.iter(|| {
                let mut v = data.clone();
                v.sort_unstable();
                black_box(v[mid])
            })
        });

        group.bench_with_input(BenchmarkId::new("select_nth_unstable", size), &data, |b, data| {
            b.iter(|| {
                let mut v = data.clone();
                black_box(*v.select_nth_unstable(mid).1)
            })
        });

        for (name, strategy) in [
            ("nth_element", Strategy::Adaptive),
            ("quickselect", Strategy::Quickselect),
            ("heapselect", Strategy::Heapselect),
        ] {
            let mut selector = Selector::with_seed(1);
            group.bench_with_input(BenchmarkId::new(name, size), &data, |b, data| {
                b.iter(|| {
                    let mut v = data.clone();
                    selector
                        .select_by(strategy, &mut v, mid, selectlib::NaturalOrder)
                        .unwrap();
                    black_box(v[mid])
                })
            });
        }
    }
    group.finish();
}

fn bench_top_k(c: &mut Criterion) {
    let mut group = c.benchmark_group("small_k");
    let data = random_vec(100_000);
    for k in [0, 10, 1_000] {
        let mut selector = Selector::with_seed(2);
        group.bench_with_input(BenchmarkId::new("nth_element", k), &data, |b, data| {
            b.iter(|| {
                let mut v = data.clone();
                selector.nth_element(&mut v, k).unwrap();
                black_box(v[k])
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_median, bench_top_k);
criterion_main!(benches);
