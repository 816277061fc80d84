//! Criterion benchmarks for positional binding.
//! Focus sizes: supplied length in {0, 1, 3, 8} against 3 and 8 slots.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;
use variadics::args;
use variadics::binder::{bind, bind_array};
use variadics::dynamic::Arg;

fn bench_bind(c: &mut Criterion) {
    let mut group = c.benchmark_group("bind");
    for &m in &[0usize, 1, 3, 8] {
        let supplied: Vec<u64> = (0..m as u64).collect();
        group.bench_with_input(BenchmarkId::new("typed_8_slots", m), &supplied, |b, s| {
            b.iter(|| {
                let slots: [Option<u64>; 8] = bind_array(black_box(s.iter().copied()));
                slots
            })
        });
    }

    group.bench_function("args_3_slots", |b| {
        b.iter(|| {
            let mut name: Option<Arg> = None;
            let mut age: Option<Arg> = None;
            let mut height: Option<Arg> = None;
            bind(
                black_box(args!["Gerry", 20, 5.9]),
                &mut [&mut name, &mut age, &mut height],
            );
            (name, age, height)
        })
    });
    group.finish();
}

criterion_group!(benches, bench_bind);
criterion_main!(benches);
