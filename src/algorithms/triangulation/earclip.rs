use num_traits::Float;

use crate::data::{Point, PointSet, Triangle, TriangleView, VertexId};
use crate::orientation::signed_area_2;
use crate::Error;

// Ear clipping over a ring of the remaining vertex indices, cyclic in
// input order:
//   Scan the ring from its head; the first vertex whose corner triangle
//   has strictly positive area and holds no other remaining vertex
//   strictly in its interior is an ear.
//   Emit (prev, ear, next), unlink the ear, restart the scan.
//   A full scan without an ear means the boundary is not a simple
//   polygon. Three remaining vertices are emitted as the final
//   triangle with no further checks.
pub fn earclip<T>(points: &PointSet<T>) -> Result<Vec<Triangle>, Error>
where
  T: Float,
{
  let n = points.len();
  if n < 3 {
    return Err(Error::InsufficientPoints);
  }
  if fully_degenerate(points) {
    return Ok(Vec::new());
  }

  let mut ring = Ring::new(n);
  let mut len = n;
  let mut out = Vec::with_capacity(n - 2);
  while len > 3 {
    let mut clipped = false;
    let mut focus = ring.head();
    loop {
      let prev = ring.prev(focus);
      let next = ring.next(focus);
      if is_ear(points, &ring, prev, focus, next) {
        out.push(Triangle(VertexId(prev), VertexId(focus), VertexId(next)));
        ring.delete(focus);
        len -= 1;
        clipped = true;
        break;
      }
      focus = next;
      if focus == ring.head() {
        break;
      }
    }
    if !clipped {
      return Err(Error::ImpossibleTriangulation);
    }
  }
  let a = ring.head();
  let b = ring.next(a);
  let c = ring.next(b);
  out.push(Triangle(VertexId(a), VertexId(b), VertexId(c)));
  Ok(out)
}

// The fully-degenerate short-circuit: every consecutive triple
// (i, i+1, i+2) collinear. Consecutive triples only; this is a policy
// for boundary-ordered input, not a collinearity proof for arbitrary
// orderings.
fn fully_degenerate<T>(points: &PointSet<T>) -> bool
where
  T: Float,
{
  (0..points.len() - 2).all(|i| {
    TriangleView::new([
      points.point(VertexId(i)),
      points.point(VertexId(i + 1)),
      points.point(VertexId(i + 2)),
    ])
    .is_degenerate()
  })
}

fn is_ear<T>(points: &PointSet<T>, ring: &Ring, a: usize, b: usize, c: usize) -> bool
where
  T: Float,
{
  let pa = points.point(VertexId(a));
  let pb = points.point(VertexId(b));
  let pc = points.point(VertexId(c));
  if !(TriangleView::new([pa, pb, pc]).area() > T::zero()) {
    return false;
  }
  // Walking next-pointers from c back around to a visits every
  // remaining vertex except a, b, c.
  let mut focus = ring.next(c);
  while focus != a {
    if strictly_inside(pa, pb, pc, points.point(VertexId(focus))) {
      return false;
    }
    focus = ring.next(focus);
  }
  true
}

// Boundary-exclusive containment: p disqualifies an ear only when all
// three signed sub-areas are strictly positive. Distinct from the
// boundary-inclusive TriangleView::locate.
fn strictly_inside<T>(a: &Point<T>, b: &Point<T>, c: &Point<T>, p: &Point<T>) -> bool
where
  T: Float,
{
  let zero = T::zero();
  signed_area_2(a, b, p) > zero && signed_area_2(b, c, p) > zero && signed_area_2(c, a, p) > zero
}

///////////////////////////////////////////////////////////////////////////////
// Remaining-vertex ring

// Doubly-linked list over vertex indices supporting O(1) deletion while
// preserving cyclic adjacency. The head is the lowest surviving index,
// so scans restarting from it reproduce in-order traversal of the
// remaining vertices.
struct Ring {
  prev: Vec<usize>,
  next: Vec<usize>,
  head: usize,
}

impl Ring {
  fn new(size: usize) -> Ring {
    let mut prev = vec![0; size];
    let mut next = vec![0; size];
    for i in 0..size {
      prev[(i + 1) % size] = i;
      next[i] = (i + 1) % size;
    }
    Ring {
      prev,
      next,
      head: 0,
    }
  }

  fn head(&self) -> usize {
    self.head
  }

  fn prev(&self, vertex: usize) -> usize {
    self.prev[vertex]
  }

  fn next(&self, vertex: usize) -> usize {
    self.next[vertex]
  }

  fn delete(&mut self, vertex: usize) {
    let prev = self.prev[vertex];
    let next = self.next[vertex];
    self.next[prev] = next;
    self.prev[next] = prev;
    // Successors of the lowest index stay in ascending order, so the
    // new head is again the lowest survivor.
    if self.head == vertex {
      self.head = next;
    }
  }
}
