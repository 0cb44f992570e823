use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use trailcursor::model::trail::{Point, Trail};

fn moving_target(step: usize) -> Point {
    let t = step as f64 * 0.05;
    Point::new(40.0 + 30.0 * t.cos(), 12.0 + 10.0 * t.sin())
}

fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("trail_tick");

    for length in [1, 12, 64] {
        group.bench_with_input(BenchmarkId::from_parameter(length), &length, |b, &length| {
            let mut trail = Trail::tapered(length, 0.15, 0.04).expect("valid trail");
            let mut step = 0;
            b.iter(|| {
                trail.set_target(moving_target(step));
                trail.tick();
                step += 1;
                black_box(trail.nodes()[0].position())
            })
        });
    }

    group.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
