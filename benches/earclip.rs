use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::SmallRng;
use rand::SeedableRng;

use triwire::algorithms::triangulate;
use triwire::data::PointSet;

pub fn criterion_benchmark(c: &mut Criterion) {
  let mut rng = SmallRng::seed_from_u64(0);
  for &n in &[10usize, 100, 1000] {
    let points = PointSet::random_convex(n, 1000.0, &mut rng);
    c.bench_function(&format!("triangulate/convex/{}", n), |b| {
      b.iter(|| triangulate(black_box(&points)))
    });
  }
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
