//! Delaunay triangulation and its Voronoi dual.
//!
//! These back the crate's native [`VoronoiEngine`](crate::kernel::VoronoiEngine).

mod delaunay;
mod voronoi;

pub use delaunay::{delaunay_triangulation, in_circumcircle, Triangle};
pub use voronoi::{voronoi_diagram, Ridge, VoronoiDiagram, UNBOUNDED};
