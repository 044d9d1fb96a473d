use num_traits::Float;

use crate::data::Point;

#[derive(PartialEq, Eq, PartialOrd, Ord, Debug, Copy, Clone)]
pub enum Orientation {
  CounterClockWise,
  ClockWise,
  CoLinear,
}

impl Orientation {
  /// Determine the direction you have to turn if you walk from `p1`
  /// to `p2` to `p3`.
  ///
  /// # Examples
  ///
  /// ```rust
  /// # use triwire::data::Point;
  /// # use triwire::Orientation;
  /// let p1 = Point::new(0.0, 0.0);
  /// let p2 = Point::new(0.0, 1.0); // One unit above p1.
  /// // (0,0) -> (0,1) -> (0,2) == Orientation::CoLinear
  /// assert!(Orientation::new(&p1, &p2, &Point::new(0.0, 2.0)).is_colinear());
  /// // (0,0) -> (0,1) -> (-1,2) == Orientation::CounterClockWise
  /// assert!(Orientation::new(&p1, &p2, &Point::new(-1.0, 2.0)).is_ccw());
  /// // (0,0) -> (0,1) -> (1,2) == Orientation::ClockWise
  /// assert!(Orientation::new(&p1, &p2, &Point::new(1.0, 2.0)).is_cw());
  /// ```
  pub fn new<T>(p1: &Point<T>, p2: &Point<T>, p3: &Point<T>) -> Orientation
  where
    T: Float,
  {
    let area = signed_area_2(p1, p2, p3);
    if area > T::zero() {
      Orientation::CounterClockWise
    } else if area < T::zero() {
      Orientation::ClockWise
    } else {
      Orientation::CoLinear
    }
  }

  pub fn is_ccw(self) -> bool {
    self == Orientation::CounterClockWise
  }

  pub fn is_cw(self) -> bool {
    self == Orientation::ClockWise
  }

  pub fn is_colinear(self) -> bool {
    self == Orientation::CoLinear
  }
}

/// Doubled signed area of the triangle `(p, q, r)`:
/// `(qx-px)(ry-py) - (qy-py)(rx-px)`.
///
/// Positive when `p -> q -> r` turns counter-clockwise, negative when
/// it turns clockwise, zero when the three points are collinear (up to
/// floating-point rounding).
pub fn signed_area_2<T>(p: &Point<T>, q: &Point<T>, r: &Point<T>) -> T
where
  T: Float,
{
  (q.x - p.x) * (r.y - p.y) - (q.y - p.y) * (r.x - p.x)
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::Orientation::*;

  #[test]
  fn test_turns() {
    let p = |x: f64, y: f64| Point::new(x, y);
    assert_eq!(Orientation::new(&p(0.0, 0.0), &p(1.0, 1.0), &p(2.0, 2.0)), CoLinear);
    assert_eq!(
      Orientation::new(&p(0.0, 0.0), &p(0.0, 1.0), &p(2.0, 2.0)),
      ClockWise
    );
    assert_eq!(
      Orientation::new(&p(0.0, 0.0), &p(0.0, 1.0), &p(-2.0, 2.0)),
      CounterClockWise
    );
  }

  #[test]
  fn signed_area_sign_flips_with_order() {
    let a = Point::new(0.0, 0.0);
    let b = Point::new(4.0, 0.0);
    let c = Point::new(0.0, 3.0);
    assert_eq!(signed_area_2(&a, &b, &c), 12.0);
    assert_eq!(signed_area_2(&a, &c, &b), -12.0);
  }
}
