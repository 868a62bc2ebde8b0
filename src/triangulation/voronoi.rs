//! Voronoi diagram computation from Delaunay triangulation.
//!
//! A Voronoi diagram partitions the plane into cells, where each cell contains
//! all points closer to its generating site than to any other site.
//!
//! # How It Works
//!
//! The Voronoi diagram is the dual of the Delaunay triangulation:
//! - Each Delaunay triangle's circumcenter becomes a Voronoi vertex
//! - Each Delaunay edge shared by two triangles becomes a finite ridge
//! - Each edge on the convex hull becomes an unbounded ridge (a ray)
//!
//! Ridges are reported as vertex index pairs. An unbounded end is `None`,
//! or [`UNBOUNDED`] (`-1`) in the raw form.
//!
//! # Example
//!
//! ```
//! use centerline::triangulation::voronoi_diagram;
//! use centerline::Point2;
//!
//! let sites: Vec<Point2<f64>> = vec![
//!     Point2::new(0.0, 0.0),
//!     Point2::new(2.0, 0.0),
//!     Point2::new(1.0, 2.0),
//!     Point2::new(1.0, 0.8),
//! ];
//!
//! let voronoi = voronoi_diagram(&sites).unwrap();
//!
//! // Three triangles, three circumcenters
//! assert_eq!(voronoi.vertices.len(), 3);
//!
//! // The three spokes to the inner site are finite, the hull edges are rays
//! assert_eq!(voronoi.finite_ridges().count(), 3);
//! assert_eq!(voronoi.ridges.len(), 6);
//! ```

use crate::error::VoronoiError;
use crate::primitives::{Point2, Vec2};
use crate::triangulation::delaunay::Edge;
use crate::triangulation::delaunay_triangulation;
use num_traits::Float;
use std::collections::BTreeMap;

/// Raw index marking the unbounded end of a ridge.
pub const UNBOUNDED: isize = -1;

/// A Voronoi diagram: indexed vertices and the ridges joining them.
#[derive(Debug, Clone, PartialEq)]
pub struct VoronoiDiagram<F> {
    /// The Voronoi vertices (circumcenters of Delaunay triangles).
    pub vertices: Vec<Point2<F>>,
    /// One ridge per Delaunay edge.
    pub ridges: Vec<Ridge>,
}

impl<F: Float> VoronoiDiagram<F> {
    /// A diagram with no vertices and no ridges.
    pub fn empty() -> Self {
        Self {
            vertices: Vec::new(),
            ridges: Vec::new(),
        }
    }

    /// Returns `true` if the diagram has no vertices.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty() && self.ridges.is_empty()
    }

    /// Vertex index pairs of every finite ridge, in ridge order.
    pub fn finite_ridges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.ridges.iter().filter_map(|r| r.vertices())
    }
}

/// A Voronoi ridge: two vertex indices, either of which may be unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ridge {
    ends: [Option<usize>; 2],
}

impl Ridge {
    /// A ridge between two vertices.
    #[inline]
    pub fn finite(a: usize, b: usize) -> Self {
        Self {
            ends: [Some(a), Some(b)],
        }
    }

    /// A ray leaving vertex `a`.
    #[inline]
    pub fn ray(a: usize) -> Self {
        Self {
            ends: [None, Some(a)],
        }
    }

    /// Builds a ridge from raw indices, where any negative index is
    /// unbounded.
    pub fn from_raw(raw: [isize; 2]) -> Self {
        let end = |i: isize| usize::try_from(i).ok();
        Self {
            ends: [end(raw[0]), end(raw[1])],
        }
    }

    /// Raw indices, with [`UNBOUNDED`] for an unbounded end.
    pub fn to_raw(self) -> [isize; 2] {
        self.ends
            .map(|e| e.and_then(|i| isize::try_from(i).ok()).unwrap_or(UNBOUNDED))
    }

    /// Both ends, `None` for the vertex at infinity.
    #[inline]
    pub fn ends(self) -> [Option<usize>; 2] {
        self.ends
    }

    /// A ridge is finite iff neither end is unbounded.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.ends.iter().all(Option::is_some)
    }

    /// Both vertex indices, or `None` for an unbounded ridge.
    #[inline]
    pub fn vertices(self) -> Option<(usize, usize)> {
        match self.ends {
            [Some(a), Some(b)] => Some((a, b)),
            _ => None,
        }
    }
}

/// Computes the circumcenter of a triangle.
///
/// The circumcenter is equidistant from all three vertices. It is solved
/// relative to the vertex opposite the longest edge, which keeps thin
/// triangles with two nearly coincident vertices accurate. Collinear input
/// falls back to the centroid.
fn circumcenter<F: Float>(a: Point2<F>, b: Point2<F>, c: Point2<F>) -> Point2<F> {
    let bc = b.distance_squared(c);
    let ca = c.distance_squared(a);
    let ab = a.distance_squared(b);
    let (apex, p, q) = if bc >= ca && bc >= ab {
        (a, b, c)
    } else if ca >= ab {
        (b, c, a)
    } else {
        (c, a, b)
    };

    let u = p - apex;
    let v = q - apex;
    let d = F::from(2.0).unwrap() * u.cross(v);

    if d == F::zero() {
        let three = F::from(3.0).unwrap();
        return Point2::new((a.x + b.x + c.x) / three, (a.y + b.y + c.y) / three);
    }

    let u2 = u.magnitude_squared();
    let v2 = v.magnitude_squared();
    apex + Vec2::new((v.y * u2 - u.y * v2) / d, (u.x * v2 - v.x * u2) / d)
}

/// Computes the Voronoi diagram of a set of sites.
///
/// Exact duplicate sites are merged first. Fewer than 3 distinct sites, or
/// all-collinear sites, give an empty diagram.
///
/// Vertices follow triangle order. Ridges are emitted in ascending order of
/// the Delaunay edge they are dual to.
///
/// # Errors
///
/// [`VoronoiError::NonFiniteSite`] if any site has a NaN or infinite
/// coordinate, [`VoronoiError::NonManifoldEdge`] if the triangulation shares
/// an edge between more than two triangles.
pub fn voronoi_diagram<F: Float>(sites: &[Point2<F>]) -> Result<VoronoiDiagram<F>, VoronoiError> {
    if let Some(index) = sites.iter().position(|p| !p.is_finite()) {
        return Err(VoronoiError::NonFiniteSite { index });
    }

    let mut unique: Vec<Point2<F>> = sites.to_vec();
    unique.sort_by(|a, b| a.lexicographic_cmp(b));
    unique.dedup();

    let triangles = delaunay_triangulation(&unique);
    if triangles.is_empty() {
        return Ok(VoronoiDiagram::empty());
    }

    let vertices: Vec<Point2<F>> = triangles
        .iter()
        .map(|tri| circumcenter(unique[tri.a], unique[tri.b], unique[tri.c]))
        .collect();

    let mut edge_to_triangles: BTreeMap<Edge, Vec<usize>> = BTreeMap::new();
    for (tri_idx, tri) in triangles.iter().enumerate() {
        for (ea, eb) in tri.edges() {
            edge_to_triangles
                .entry(Edge::new(ea, eb))
                .or_default()
                .push(tri_idx);
        }
    }

    let mut ridges = Vec::with_capacity(edge_to_triangles.len());
    for (edge, tris) in &edge_to_triangles {
        match tris.as_slice() {
            [t] => ridges.push(Ridge::ray(*t)),
            [t1, t2] => ridges.push(Ridge::finite(*t1, *t2)),
            _ => {
                return Err(VoronoiError::NonManifoldEdge {
                    a: edge.0,
                    b: edge.1,
                    triangles: tris.len(),
                })
            }
        }
    }

    Ok(VoronoiDiagram { vertices, ridges })
}
