use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::SmallRng;
use rand::SeedableRng;

use triwire::algorithms::triangulate;
use triwire::data::PointSet;
use triwire::wire::{decode_triangles, encode_point_set, encode_triangles};

pub fn criterion_benchmark(c: &mut Criterion) {
  let mut rng = SmallRng::seed_from_u64(0);
  let points = PointSet::random_convex(1000, 1000.0, &mut rng);
  let triangles = triangulate(&points).unwrap();

  c.bench_function("encode_point_set/1000", |b| {
    b.iter(|| encode_point_set(black_box(&points)))
  });

  let encoded = encode_triangles(&points, &triangles);
  c.bench_function("encode_triangles/1000", |b| {
    b.iter(|| encode_triangles(black_box(&points), black_box(&triangles)))
  });
  c.bench_function("decode_triangles/1000", |b| {
    b.iter(|| decode_triangles(black_box(&encoded)))
  });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
