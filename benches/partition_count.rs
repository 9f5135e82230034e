use criterion::{black_box, criterion_group, criterion_main, Criterion};
use std::time::Duration;

use partcount::{naive, PartitionCounter};

fn bench_partition_count(c: &mut Criterion) {
    c.bench_function("worklist_cold_100", |b| {
        b.iter(|| {
            let mut counter = PartitionCounter::new();
            black_box(counter.count(black_box(100)))
        });
    });

    c.bench_function("worklist_warm_100", |b| {
        let mut counter = PartitionCounter::new();
        counter.count(100);
        b.iter(|| black_box(counter.count(black_box(100))));
    });

    c.bench_function("naive_recursion_30", |b| {
        b.iter(|| black_box(naive::count_recursive(black_box(30), 30)));
    });

    c.bench_function("enumeration_20", |b| {
        b.iter(|| black_box(naive::partitions(black_box(20)).len()));
    });
}

criterion_group! {
    name = benches;
    config = Criterion::default()
        .sample_size(200)
        .warm_up_time(Duration::from_millis(500))
        .measurement_time(Duration::from_secs(10));
    targets = bench_partition_count
}

criterion_main!(benches);
