pub mod triangulation;

#[doc(inline)]
pub use triangulation::{bounding_triangle, triangulate, validate_triangulation};
