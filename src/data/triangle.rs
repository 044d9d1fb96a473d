use num_traits::Float;

use crate::data::{Point, PointLocation, PointSet, VertexId};
use crate::orientation::{signed_area_2, Orientation};
use crate::COLLINEAR_EPSILON;

/// An ordered triple of vertex ids into a specific [`PointSet`].
///
/// A triangle is valid when all three ids are in bounds and pairwise
/// distinct; see [`Triangle::is_valid`]. Validity is not enforced on
/// construction: the wire decoder hands out unchecked triangles and
/// leaves the check to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Triangle(pub VertexId, pub VertexId, pub VertexId);

impl Triangle {
  pub fn new(a: usize, b: usize, c: usize) -> Triangle {
    Triangle(VertexId(a), VertexId(b), VertexId(c))
  }

  /// All three ids in bounds for `points` and pairwise distinct.
  pub fn is_valid<T>(&self, points: &PointSet<T>) -> bool {
    let n = points.len();
    let Triangle(a, b, c) = *self;
    a.usize() < n && b.usize() < n && c.usize() < n && a != b && b != c && a != c
  }

  /// Borrow the three referenced points.
  ///
  /// # Panics
  ///
  /// Panics if any id is out of bounds; check [`Triangle::is_valid`]
  /// first for untrusted input.
  pub fn view<'a, T>(&self, points: &'a PointSet<T>) -> TriangleView<'a, T>
  where
    T: Float,
  {
    TriangleView::new([points.point(self.0), points.point(self.1), points.point(self.2)])
  }
}

/// Three borrowed corner points.
pub struct TriangleView<'a, T>([&'a Point<T>; 3]);

impl<'a, T> TriangleView<'a, T>
where
  T: Float,
{
  // O(1)
  pub fn new(pts: [&'a Point<T>; 3]) -> TriangleView<'a, T> {
    TriangleView(pts)
  }

  /// Absolute area by the shoelace formula:
  /// `|x1(y2-y3) + x2(y3-y1) + x3(y1-y2)| / 2`.
  ///
  /// Always non-negative; zero exactly when the corners are collinear
  /// (up to floating-point rounding).
  pub fn area(&self) -> T {
    let [p1, p2, p3] = self.0;
    let two = T::one() + T::one();
    ((p1.x * (p2.y - p3.y) + p2.x * (p3.y - p1.y) + p3.x * (p1.y - p2.y)) / two).abs()
  }

  /// Collinearity test with the default epsilon,
  /// [`COLLINEAR_EPSILON`](crate::COLLINEAR_EPSILON).
  pub fn is_degenerate(&self) -> bool {
    self.is_degenerate_eps(T::from(COLLINEAR_EPSILON).unwrap())
  }

  /// Collinearity test with a caller-supplied epsilon: true iff
  /// `area < epsilon`.
  pub fn is_degenerate_eps(&self, epsilon: T) -> bool {
    self.area() < epsilon
  }

  pub fn orientation(&self) -> Orientation {
    let [a, b, c] = self.0;
    Orientation::new(a, b, c)
  }

  /// Locate `pt` relative to this triangle by the signs of its three
  /// edge areas.
  ///
  /// The test is boundary-inclusive and orientation-agnostic: `pt` is
  /// outside iff the signs mix strictly positive and strictly
  /// negative. The ear-clipping engine uses its own boundary-exclusive
  /// test; the two are distinct on purpose.
  pub fn locate(&self, pt: &Point<T>) -> PointLocation {
    let [a, b, c] = self.0;
    let d1 = signed_area_2(a, b, pt);
    let d2 = signed_area_2(b, c, pt);
    let d3 = signed_area_2(c, a, pt);
    let zero = T::zero();
    let has_neg = d1 < zero || d2 < zero || d3 < zero;
    let has_pos = d1 > zero || d2 > zero || d3 > zero;
    if has_neg && has_pos {
      PointLocation::Outside
    } else if d1 == zero || d2 == zero || d3 == zero {
      PointLocation::OnBoundary
    } else {
      PointLocation::Inside
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn pts(coords: Vec<(f64, f64)>) -> PointSet<f64> {
    PointSet::from(coords)
  }

  #[test]
  fn classic_area() {
    let points = pts(vec![(0.0, 0.0), (4.0, 0.0), (0.0, 3.0)]);
    assert_eq!(Triangle::new(0, 1, 2).view(&points).area(), 6.0);
  }

  #[test]
  fn collinear_corners() {
    let points = pts(vec![(0.0, 0.0), (1.0, 1.0), (2.0, 2.0), (1.0, 0.0)]);
    assert!(Triangle::new(0, 1, 2).view(&points).is_degenerate());
    assert!(!Triangle::new(0, 3, 1).view(&points).is_degenerate());
  }

  #[test]
  fn index_validity() {
    let points = pts(vec![(0.0, 0.0), (1.0, 0.0), (0.0, 1.0)]);
    assert!(Triangle::new(0, 1, 2).is_valid(&points));
    assert!(!Triangle::new(0, 1, 5).is_valid(&points));
    assert!(!Triangle::new(0, 1, 1).is_valid(&points));
    assert!(!Triangle::new(2, 2, 2).is_valid(&points));
  }

  #[test]
  fn locate_is_boundary_inclusive() {
    let points = pts(vec![(0.0, 0.0), (1.0, 0.0), (0.0, 1.0)]);
    let trig = Triangle::new(0, 1, 2).view(&points);
    assert_eq!(trig.locate(&Point::new(0.2, 0.2)), PointLocation::Inside);
    assert_eq!(trig.locate(&Point::new(1.0, 1.0)), PointLocation::Outside);
    assert_eq!(trig.locate(&Point::new(0.5, 0.0)), PointLocation::OnBoundary);
    assert_eq!(trig.locate(&Point::new(0.0, 0.0)), PointLocation::OnBoundary);
  }

  #[test]
  fn locate_ignores_orientation() {
    // Same triangle, clockwise order: interior points still locate inside.
    let points = pts(vec![(0.0, 0.0), (0.0, 1.0), (1.0, 0.0)]);
    let trig = Triangle::new(0, 1, 2).view(&points);
    assert_eq!(trig.locate(&Point::new(0.2, 0.2)), PointLocation::Inside);
    assert_eq!(trig.orientation(), Orientation::ClockWise);
  }
}
