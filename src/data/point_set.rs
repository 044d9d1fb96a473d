use num_traits::Float;
use rand::Rng;

use crate::data::Point;
use crate::orientation::signed_area_2;

/// Index of a point in a [`PointSet`].
///
/// The index is the point's stable identity for the lifetime of the
/// set; triangles reference points exclusively through it, never by
/// value.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct VertexId(pub usize);

impl VertexId {
  pub fn usize(self) -> usize {
    self.0
  }
}

/// An ordered sequence of points, immutable after construction.
///
/// Order is significant: the triangulation engine treats adjacent
/// entries as polygon boundary edges, including a wrap-around edge from
/// the last point back to the first.
#[derive(Debug, Clone, PartialEq)]
pub struct PointSet<T> {
  points: Vec<Point<T>>,
}

impl<T> PointSet<T> {
  pub fn new(points: Vec<Point<T>>) -> PointSet<T> {
    PointSet { points }
  }

  pub fn len(&self) -> usize {
    self.points.len()
  }

  pub fn is_empty(&self) -> bool {
    self.points.is_empty()
  }

  /// The point behind a vertex id.
  ///
  /// # Panics
  ///
  /// Panics if the id is out of bounds for this set.
  pub fn point(&self, id: VertexId) -> &Point<T> {
    &self.points[id.0]
  }

  pub fn get(&self, idx: usize) -> Option<&Point<T>> {
    self.points.get(idx)
  }

  pub fn iter(&self) -> impl Iterator<Item = &Point<T>> {
    self.points.iter()
  }

  pub fn as_slice(&self) -> &[Point<T>] {
    &self.points
  }

  pub fn cast<U, F>(&self, f: F) -> PointSet<U>
  where
    T: Clone,
    F: Fn(T) -> U + Copy,
  {
    PointSet {
      points: self.points.iter().map(|pt| pt.cast(f)).collect(),
    }
  }
}

impl<T: Float> PointSet<T> {
  /// Doubled signed area of the boundary polygon (shoelace sum over
  /// consecutive edges, wrap-around included). Positive for a
  /// counter-clockwise boundary.
  pub fn signed_area_2(&self) -> T {
    let n = self.points.len();
    if n < 3 {
      return T::zero();
    }
    let origin = &self.points[0];
    let mut sum = T::zero();
    for i in 1..n - 1 {
      sum = sum + signed_area_2(origin, &self.points[i], &self.points[i + 1]);
    }
    sum
  }
}

impl PointSet<f64> {
  /// A random point set in strictly convex position: `n` points on a
  /// circle of the given radius, in counter-clockwise angular order
  /// with jittered spacing. Used by tests and benches.
  pub fn random_convex<R>(n: usize, radius: f64, rng: &mut R) -> PointSet<f64>
  where
    R: Rng + ?Sized,
  {
    let step = std::f64::consts::PI * 2.0 / n as f64;
    let points = (0..n)
      .map(|i| {
        // Jitter below one step keeps the angles strictly increasing.
        let angle = (i as f64 + rng.gen_range(0.0..0.9)) * step;
        Point::new(radius * angle.cos(), radius * angle.sin())
      })
      .collect();
    PointSet::new(points)
  }
}

impl<T> From<Vec<(T, T)>> for PointSet<T> {
  fn from(coords: Vec<(T, T)>) -> PointSet<T> {
    PointSet {
      points: coords.into_iter().map(Point::from).collect(),
    }
  }
}
