//! Caller-facing surface of the core.
//!
//! Exactly four pure operations (decode, triangulate, encode,
//! validate) plus the [`PointSetSource`] capability through which a
//! caller supplies remote point-set retrieval. The request path of the
//! surrounding service is the composition implemented by
//! [`triangulate_bytes`]: decode the request buffer, triangulate,
//! re-encode points and triangles as the response buffer.

use crate::Error;

#[doc(inline)]
pub use crate::algorithms::{bounding_triangle, triangulate, validate_triangulation};
#[doc(inline)]
pub use crate::wire::{decode_point_set, decode_triangles, encode_point_set, encode_triangles};

/// Capability for retrieving an encoded point set by id.
///
/// Constructed and injected by the caller; implementations live
/// outside the core and must not be process-wide singletons. Any fetch
/// failure is reported as [`Error::UpstreamUnavailable`] and surfaces
/// unchanged; the core does not retry, and retry policy belongs to
/// the caller.
pub trait PointSetSource {
  fn fetch(&self, id: &str) -> Result<Vec<u8>, Error>;
}

/// Decode an encoded point set, triangulate it, and encode points plus
/// triangles as a `Triangles` response buffer.
///
/// Geometry runs on `f64` coordinates widened from the decoded `f32`
/// values; the response re-encodes the decoded set itself, so encoding
/// introduces no further rounding.
pub fn triangulate_bytes(data: &[u8]) -> Result<Vec<u8>, Error> {
  let points = decode_point_set(data)?;
  let triangles = triangulate(&points.cast(f64::from))?;
  Ok(encode_triangles(&points, &triangles))
}

/// Fetch the point set `id` from `source` and triangulate it.
pub fn triangulate_fetched<S>(source: &S, id: &str) -> Result<Vec<u8>, Error>
where
  S: PointSetSource + ?Sized,
{
  let data = source.fetch(id)?;
  triangulate_bytes(&data)
}
