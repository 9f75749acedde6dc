//! Criterion benchmarks: every strategy at a few sizes, aligned and not.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use transpose::{Pool, Strategy};

fn bench_strategies(c: &mut Criterion) {
    let sizes = [(256, 256), (1024, 1024), (1023, 1025), (4096, 4096)];

    for (w, h) in sizes {
        let mut group = c.benchmark_group(format!("transpose_{}x{}", w, h));
        group.throughput(Throughput::Bytes((w * h * std::mem::size_of::<i32>()) as u64));
        if w * h >= 4096 * 4096 {
            group.sample_size(10);
        }

        let pool = Pool::create(2 * w * h).expect("benchmark pool");
        let src = pool.allocate(w * h).expect("src buffer");
        let dst = pool.allocate(w * h).expect("dst buffer");

        let mut rng = StdRng::seed_from_u64(0x5eed);
        src.iter_mut().for_each(|v| *v = rng.next_u32() as i32);

        for strategy in Strategy::ALL {
            group.bench_with_input(BenchmarkId::from_parameter(strategy), &strategy, |b, &s| {
                b.iter(|| s.transpose(black_box(&*src), black_box(&mut *dst), w, h))
            });
        }

        group.finish();
    }
}

criterion_group!(benches, bench_strategies);
criterion_main!(benches);
