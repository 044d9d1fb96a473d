//! Binary wire format for point sets and triangulations.
//!
//! All fields are little-endian:
//!
//! ```text
//! PointSet:
//!   u32        - point count
//!   f32 x2     - x, y per point
//!
//! Triangles:
//!   PointSet   - the vertices
//!   u32        - triangle count
//!   u32 x3     - vertex indices a, b, c per triangle
//! ```
//!
//! Decoders read exactly the size implied by the count fields and
//! ignore trailing bytes. Decoded triangle indices are not checked
//! against the point count; callers validate them, typically via
//! [`validate_triangulation`](crate::algorithms::validate_triangulation).

use num_traits::Float;

use crate::data::{Point, PointSet, Triangle, VertexId};
use crate::Error;

/// Size of a `u32` count field in bytes.
const COUNT_SIZE: usize = 4;
/// Encoded size of one point (two f32 coordinates).
const POINT_SIZE: usize = 8;
/// Encoded size of one triangle (three u32 indices).
const TRIANGLE_SIZE: usize = 12;

/// Encode a point set, narrowing each coordinate to f32. Never fails;
/// precision loss from the narrowing is accepted, not an error.
pub fn encode_point_set<T>(points: &PointSet<T>) -> Vec<u8>
where
  T: Float,
{
  let mut out = Vec::with_capacity(COUNT_SIZE + POINT_SIZE * points.len());
  out.extend_from_slice(&(points.len() as u32).to_le_bytes());
  for pt in points.iter() {
    // Infallible for float scalars; values beyond f32 range narrow
    // to infinity.
    out.extend_from_slice(&pt.x.to_f32().unwrap().to_le_bytes());
    out.extend_from_slice(&pt.y.to_f32().unwrap().to_le_bytes());
  }
  out
}

/// Decode a point set from the head of `data`.
///
/// Fails with [`Error::TruncatedHeader`] when `data` cannot hold the
/// count field, and with [`Error::TruncatedBody`] when it is shorter
/// than the count implies. Trailing bytes are ignored.
pub fn decode_point_set(data: &[u8]) -> Result<PointSet<f32>, Error> {
  let (points, _) = decode_point_set_partial(data)?;
  Ok(points)
}

/// Encode points plus triangles as one `Triangles` buffer.
///
/// Indices are written as given; the encoder trusts the caller and
/// does not re-validate them against the point set.
pub fn encode_triangles<T>(points: &PointSet<T>, triangles: &[Triangle]) -> Vec<u8>
where
  T: Float,
{
  let mut out = encode_point_set(points);
  out.reserve(COUNT_SIZE + TRIANGLE_SIZE * triangles.len());
  out.extend_from_slice(&(triangles.len() as u32).to_le_bytes());
  for trig in triangles {
    let Triangle(a, b, c) = *trig;
    out.extend_from_slice(&(a.usize() as u32).to_le_bytes());
    out.extend_from_slice(&(b.usize() as u32).to_le_bytes());
    out.extend_from_slice(&(c.usize() as u32).to_le_bytes());
  }
  out
}

/// Decode a `Triangles` buffer into its point set and triangle list.
///
/// The leading point set decodes exactly as [`decode_point_set`]; the
/// triangle section then needs its own count field
/// ([`Error::TruncatedHeader`] otherwise) and `12 * count` further
/// bytes ([`Error::TruncatedBody`] otherwise). Trailing bytes are
/// ignored and indices are not bounds-checked.
pub fn decode_triangles(data: &[u8]) -> Result<(PointSet<f32>, Vec<Triangle>), Error> {
  let (points, points_size) = decode_point_set_partial(data)?;
  let count = read_count(data, points_size)?;
  let mut offset = points_size + COUNT_SIZE;
  if data.len() < offset + TRIANGLE_SIZE * count {
    return Err(Error::TruncatedBody);
  }
  let mut triangles = Vec::with_capacity(count);
  for _ in 0..count {
    let a = read_u32(data, offset) as usize;
    let b = read_u32(data, offset + 4) as usize;
    let c = read_u32(data, offset + 8) as usize;
    triangles.push(Triangle(VertexId(a), VertexId(b), VertexId(c)));
    offset += TRIANGLE_SIZE;
  }
  Ok((points, triangles))
}

// Decodes the leading point set and returns it along with the number
// of bytes it occupied.
fn decode_point_set_partial(data: &[u8]) -> Result<(PointSet<f32>, usize), Error> {
  let count = read_count(data, 0)?;
  let size = COUNT_SIZE + POINT_SIZE * count;
  if data.len() < size {
    return Err(Error::TruncatedBody);
  }
  let mut points = Vec::with_capacity(count);
  let mut offset = COUNT_SIZE;
  for _ in 0..count {
    let x = read_f32(data, offset);
    let y = read_f32(data, offset + 4);
    points.push(Point::new(x, y));
    offset += POINT_SIZE;
  }
  Ok((PointSet::new(points), size))
}

fn read_count(data: &[u8], offset: usize) -> Result<usize, Error> {
  if data.len() < offset + COUNT_SIZE {
    return Err(Error::TruncatedHeader);
  }
  Ok(read_u32(data, offset) as usize)
}

fn read_u32(data: &[u8], offset: usize) -> u32 {
  u32::from_le_bytes([
    data[offset],
    data[offset + 1],
    data[offset + 2],
    data[offset + 3],
  ])
}

fn read_f32(data: &[u8], offset: usize) -> f32 {
  f32::from_le_bytes([
    data[offset],
    data[offset + 1],
    data[offset + 2],
    data[offset + 3],
  ])
}
