#![deny(clippy::cast_lossless)]
//! Planar polygon triangulation with a count-prefixed binary wire format.
//!
//! The crate converts an ordered point set describing the boundary of a
//! simple polygon into a triangulation by ear clipping, and exchanges
//! both point sets and triangulations with external callers through the
//! little-endian wire layout implemented in [`wire`]. The [`api`] module
//! collects the caller-facing operations and the injected fetch
//! capability for remote point sets.

pub mod algorithms;
pub mod api;
pub mod data;
mod orientation;
pub mod wire;

pub use orientation::{signed_area_2, Orientation};

/// Triangles with an absolute area below this threshold count as
/// degenerate (their corners as collinear).
pub const COLLINEAR_EPSILON: f64 = 1e-10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
  /// Fewer than three points were given to the triangulation engine.
  InsufficientPoints,
  /// A full ear-clipping scan found no ear: the boundary is not a
  /// simple polygon, or the configuration is otherwise unresolvable.
  ImpossibleTriangulation,
  /// Decode input too short to hold a structure's count field.
  TruncatedHeader,
  /// Decode input shorter than the size implied by its own count field.
  TruncatedBody,
  /// The external point-set source failed. Propagated unchanged; the
  /// core neither generates nor retries this condition.
  UpstreamUnavailable,
}

impl std::fmt::Display for Error {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
    match self {
      Error::InsufficientPoints => write!(f, "Insufficient points"),
      Error::ImpossibleTriangulation => {
        write!(f, "Triangulation impossible: no ear found in a full scan")
      }
      Error::TruncatedHeader => write!(f, "Truncated header"),
      Error::TruncatedBody => write!(f, "Truncated body"),
      Error::UpstreamUnavailable => write!(f, "Upstream point-set source unavailable"),
    }
  }
}
