//! Criterion microbenches for the spherical samplers and haversine distance.

use criterion::{criterion_group, criterion_main, Criterion};
use lnglat::sphere::{distance, random_point_in_disc, random_point_in_rect, LatLonRect};
use lnglat::Point;
use rand::{rngs::StdRng, SeedableRng};
use std::hint::black_box;

fn bench_sphere(c: &mut Criterion) {
    let mut group = c.benchmark_group("sphere");
    let mut rng = StdRng::seed_from_u64(42);
    let center = Point::new(39.9, 116.4);
    group.bench_function("random_point_in_disc", |b| {
        b.iter(|| random_point_in_disc(&mut rng, black_box(center), 5_000.0))
    });
    let rect = LatLonRect::new(-170.0, 170.0, -10.0, 10.0);
    group.bench_function("random_point_in_rect", |b| {
        b.iter(|| random_point_in_rect(&mut rng, black_box(rect)))
    });
    group.bench_function("distance", |b| {
        b.iter(|| distance(black_box(39.9), 116.4, black_box(31.2), 121.5))
    });
    group.finish();
}

criterion_group!(benches, bench_sphere);
criterion_main!(benches);
