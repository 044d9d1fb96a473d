use num_traits::Float;

use crate::data::{Point, PointSet, Triangle};
use crate::Error;

pub mod earclip;

/// Triangulate the simple polygon whose boundary is described, in
/// order, by `points` (wrap-around edge from the last point to the
/// first included).
///
/// Fails with [`Error::InsufficientPoints`] for fewer than three
/// points. If every consecutive point triple is collinear the polygon
/// is fully degenerate and the result is an empty triangulation, not
/// an error. Otherwise ears are clipped until three vertices remain;
/// a scan that finds no ear fails with
/// [`Error::ImpossibleTriangulation`].
///
/// The result is deterministic: the same input always yields the same
/// triangle sequence.
pub fn triangulate<T>(points: &PointSet<T>) -> Result<Vec<Triangle>, Error>
where
  T: Float,
{
  earclip::earclip(points)
}

/// Check that a triangulation is structurally and geometrically sound
/// with respect to `points`: every triangle must have in-bounds,
/// pairwise-distinct indices and reference three non-collinear points.
///
/// Necessary conditions only; coverage and overlap of the polygon area
/// are not verified. Usable on arbitrary `(points, triangles)` pairs,
/// engine output included.
pub fn validate_triangulation<T>(points: &PointSet<T>, triangles: &[Triangle]) -> bool
where
  T: Float,
{
  triangles
    .iter()
    .all(|trig| trig.is_valid(points) && !trig.view(points).is_degenerate())
}

/// A triangle enclosing every point of a non-empty set, with a wide
/// (10x bounding-box) margin.
pub fn bounding_triangle<T>(points: &PointSet<T>) -> Result<[Point<T>; 3], Error>
where
  T: Float,
{
  let mut iter = points.iter();
  let first = iter.next().ok_or(Error::InsufficientPoints)?;
  let (mut min_x, mut max_x) = (first.x, first.x);
  let (mut min_y, mut max_y) = (first.y, first.y);
  for pt in iter {
    min_x = min_x.min(pt.x);
    max_x = max_x.max(pt.x);
    min_y = min_y.min(pt.y);
    max_y = max_y.max(pt.y);
  }
  let ten = T::from(10).unwrap();
  let d = (max_x - min_x).max(max_y - min_y) * ten;
  Ok([
    Point::new(min_x - d, min_y - d),
    Point::new(max_x + d, min_y - d),
    Point::new(min_x, max_y + d),
  ])
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::data::PointLocation;
  use crate::data::TriangleView;
  use claims::assert_err;

  #[test]
  fn validator_rejects_bad_indices_and_degenerate_triangles() {
    let points = PointSet::from(vec![(0.0, 0.0), (1.0, 0.0), (0.0, 1.0), (2.0, 0.0)]);
    assert!(validate_triangulation(&points, &[Triangle::new(0, 1, 2)]));
    // Out of range.
    assert!(!validate_triangulation(&points, &[Triangle::new(0, 1, 4)]));
    // Repeated index.
    assert!(!validate_triangulation(&points, &[Triangle::new(0, 1, 1)]));
    // Collinear referenced points.
    assert!(!validate_triangulation(&points, &[Triangle::new(0, 1, 3)]));
    // First violation wins even when later triangles are fine.
    assert!(!validate_triangulation(
      &points,
      &[Triangle::new(0, 1, 3), Triangle::new(0, 1, 2)]
    ));
  }

  #[test]
  fn validator_accepts_empty() {
    let points = PointSet::from(Vec::<(f64, f64)>::new());
    assert!(validate_triangulation(&points, &[]));
  }

  #[test]
  fn bounding_triangle_encloses_input() {
    let points = PointSet::from(vec![(10.0, 10.0), (-3.0, 4.0), (7.0, -2.5)]);
    let [a, b, c] = bounding_triangle(&points).unwrap();
    let trig = TriangleView::new([&a, &b, &c]);
    for pt in points.iter() {
      assert_ne!(trig.locate(pt), PointLocation::Outside);
    }
  }

  #[test]
  fn bounding_triangle_needs_points() {
    let points = PointSet::from(Vec::<(f64, f64)>::new());
    assert_err!(bounding_triangle(&points));
  }
}
