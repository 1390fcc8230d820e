use std::hint::black_box;

use blockidx::{strategy::Strategy, util::NUM_CELLS};
use criterion;

fn bench_block_index(c: &mut criterion::Criterion) {
    let mut group = c.benchmark_group("block_index");
    group.throughput(criterion::Throughput::Elements(NUM_CELLS as u64));

    for strategy in Strategy::ALL {
        group.bench_function(strategy.name(), |b| {
            b.iter(|| strategy.summation(black_box(1)));
        });
    }
    group.finish();
}

criterion::criterion_group!(benches, bench_block_index);
criterion::criterion_main!(benches);
