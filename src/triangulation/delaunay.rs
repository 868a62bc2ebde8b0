//! Delaunay triangulation using the Bowyer-Watson algorithm.
//!
//! No site lies strictly inside the circumcircle of any output triangle.
//!
//! # Algorithm
//!
//! 1. Start with a super-triangle containing all points
//! 2. Insert points one at a time, re-triangulating the cavity of triangles
//!    whose circumcircle contains the new point
//! 3. Remove triangles connected to the super-triangle vertices
//!
//! Cavity boundaries are collected in an ordered map, so the output depends
//! only on the input sequence. The in-circle and orientation predicates are
//! exact (adaptive-precision arithmetic from the `robust` crate), so
//! cocircular and collinear sites still give a valid triangulation.
//!
//! # Complexity
//!
//! - Time: O(n²) worst case, O(n log n) expected for random points
//! - Space: O(n)
//!
//! # Example
//!
//! ```
//! use centerline::triangulation::delaunay_triangulation;
//! use centerline::Point2;
//!
//! let points: Vec<Point2<f64>> = vec![
//!     Point2::new(0.0, 0.0),
//!     Point2::new(1.0, 0.0),
//!     Point2::new(0.5, 1.0),
//!     Point2::new(0.5, 0.3),
//! ];
//!
//! let triangles = delaunay_triangulation(&points);
//! assert_eq!(triangles.len(), 3);
//! ```

use crate::geometry::Envelope;
use crate::primitives::Point2;
use num_traits::Float;
use std::collections::BTreeMap;

/// A triangle represented by indices into a point array.
///
/// Vertices are stored in counter-clockwise order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Triangle {
    pub a: usize,
    pub b: usize,
    pub c: usize,
}

impl Triangle {
    /// Creates a triangle from three vertex indices.
    #[inline]
    pub fn new(a: usize, b: usize, c: usize) -> Self {
        Self { a, b, c }
    }

    /// Returns the three edges of this triangle as pairs of indices.
    #[inline]
    pub fn edges(&self) -> [(usize, usize); 3] {
        [(self.a, self.b), (self.b, self.c), (self.c, self.a)]
    }

    /// Returns `true` if `v` is one of the corners.
    #[inline]
    pub fn contains_vertex(&self, v: usize) -> bool {
        self.a == v || self.b == v || self.c == v
    }
}

/// An undirected edge, smaller index first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub(crate) struct Edge(pub(crate) usize, pub(crate) usize);

impl Edge {
    pub(crate) fn new(a: usize, b: usize) -> Self {
        if a < b {
            Edge(a, b)
        } else {
            Edge(b, a)
        }
    }
}

/// Tests if `p` lies strictly inside the circumcircle of the CCW triangle
/// `a`, `b`, `c`.
///
/// The determinant is evaluated exactly, so cocircular points always test
/// as outside.
pub fn in_circumcircle<F: Float>(p: Point2<F>, a: Point2<F>, b: Point2<F>, c: Point2<F>) -> bool {
    robust::incircle(coord(a), coord(b), coord(c), coord(p)) > 0.0
}

/// Exact orientation test: positive if `a`, `b`, `c` turn counter-clockwise,
/// zero if collinear.
#[inline]
fn orient2d<F: Float>(a: Point2<F>, b: Point2<F>, c: Point2<F>) -> f64 {
    robust::orient2d(coord(a), coord(b), coord(c))
}

#[inline]
fn coord<F: Float>(p: Point2<F>) -> robust::Coord<f64> {
    robust::Coord {
        x: p.x.to_f64().unwrap_or(f64::NAN),
        y: p.y.to_f64().unwrap_or(f64::NAN),
    }
}

/// Computes the Delaunay triangulation of a set of points.
///
/// Returns triangles as indices into `points`, in counter-clockwise order.
/// Fewer than 3 points, or all-collinear points, give an empty vector.
/// Exact duplicates of an earlier point are left out of the triangulation.
pub fn delaunay_triangulation<F: Float>(points: &[Point2<F>]) -> Vec<Triangle> {
    if points.len() < 3 {
        return Vec::new();
    }

    let envelope = match Envelope::from_points(points.iter().copied()) {
        Some(env) => env,
        None => return Vec::new(),
    };

    // Super-triangle, CCW: bottom-left, bottom-right, top
    let delta = envelope.width().max(envelope.height());
    let mid = envelope.min.midpoint(envelope.max);
    let margin = F::from(10.0).unwrap();
    let super_a = Point2::new(mid.x - margin * delta, mid.y - delta);
    let super_b = Point2::new(mid.x + margin * delta, mid.y - delta);
    let super_c = Point2::new(mid.x, mid.y + margin * delta);

    let n = points.len();
    let mut all_points: Vec<Point2<F>> = points.to_vec();
    all_points.extend([super_a, super_b, super_c]);

    let mut triangles: Vec<Triangle> = vec![Triangle::new(n, n + 1, n + 2)];

    for (i, &p) in points.iter().enumerate() {
        let mut bad_triangles: Vec<usize> = triangles
            .iter()
            .enumerate()
            .filter(|(_, tri)| {
                in_circumcircle(p, all_points[tri.a], all_points[tri.b], all_points[tri.c])
            })
            .map(|(ti, _)| ti)
            .collect();

        // Cavity boundary: edges used by exactly one bad triangle
        let mut edge_count: BTreeMap<Edge, usize> = BTreeMap::new();
        for &ti in &bad_triangles {
            for (ea, eb) in triangles[ti].edges() {
                *edge_count.entry(Edge::new(ea, eb)).or_insert(0) += 1;
            }
        }

        bad_triangles.sort_unstable();
        for &ti in bad_triangles.iter().rev() {
            triangles.swap_remove(ti);
        }

        for (edge, count) in edge_count {
            if count != 1 {
                continue;
            }
            let (ea, eb) = (edge.0, edge.1);
            if orient2d(all_points[ea], all_points[eb], p) > 0.0 {
                triangles.push(Triangle::new(ea, eb, i));
            } else {
                triangles.push(Triangle::new(eb, ea, i));
            }
        }
    }

    triangles.retain(|tri| !(n..n + 3).any(|s| tri.contains_vertex(s)));
    triangles
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::f64::consts::TAU;

    fn assert_delaunay(points: &[Point2<f64>], triangles: &[Triangle]) {
        for tri in triangles {
            let (a, b, c) = (points[tri.a], points[tri.b], points[tri.c]);
            assert!(orient2d(a, b, c) > 0.0, "triangle {tri:?} is not CCW");
            for (i, &p) in points.iter().enumerate() {
                if !tri.contains_vertex(i) {
                    assert!(
                        !in_circumcircle(p, a, b, c),
                        "point {i} inside circumcircle of {tri:?}"
                    );
                }
            }
        }
    }

    fn assert_manifold(triangles: &[Triangle]) {
        let mut counts: BTreeMap<Edge, usize> = BTreeMap::new();
        for tri in triangles {
            for (a, b) in tri.edges() {
                *counts.entry(Edge::new(a, b)).or_insert(0) += 1;
            }
        }
        for (edge, count) in counts {
            assert!(count <= 2, "edge {edge:?} is shared by {count} triangles");
        }
    }

    /// 12 points with integer coordinates, all exactly on the circle of
    /// radius 5.
    fn exact_circle() -> Vec<Point2<f64>> {
        [
            (5.0, 0.0),
            (4.0, 3.0),
            (3.0, 4.0),
            (0.0, 5.0),
            (-3.0, 4.0),
            (-4.0, 3.0),
            (-5.0, 0.0),
            (-4.0, -3.0),
            (-3.0, -4.0),
            (0.0, -5.0),
            (3.0, -4.0),
            (4.0, -3.0),
        ]
        .into_iter()
        .map(Point2::from)
        .collect()
    }

    fn square_boundary(size: usize) -> Vec<Point2<f64>> {
        let s = size as f64;
        let mut points = Vec::new();
        for i in 0..size {
            let t = i as f64;
            points.push(Point2::new(t, 0.0));
            points.push(Point2::new(s, t));
            points.push(Point2::new(s - t, s));
            points.push(Point2::new(0.0, s - t));
        }
        points
    }

    #[test]
    fn test_triangle_edges() {
        let tri = Triangle::new(0, 1, 2);
        assert_eq!(tri.edges(), [(0, 1), (1, 2), (2, 0)]);
        assert!(tri.contains_vertex(2));
        assert!(!tri.contains_vertex(3));
    }

    #[test]
    fn test_edge_normalization() {
        assert_eq!(Edge::new(1, 2), Edge::new(2, 1));
        assert!(Edge::new(0, 5) < Edge::new(1, 2));
    }

    #[test]
    fn test_in_circumcircle() {
        let a = Point2::new(0.0_f64, 0.0);
        let b = Point2::new(1.0, 0.0);
        let c = Point2::new(0.5, 0.866);
        assert!(in_circumcircle(Point2::new(0.5, 0.288), a, b, c));
        assert!(!in_circumcircle(Point2::new(10.0, 10.0), a, b, c));
    }

    #[test]
    fn test_in_circumcircle_cocircular_is_outside() {
        let a = Point2::new(0.0_f64, 0.0);
        let b = Point2::new(1.0, 0.0);
        let c = Point2::new(0.0, 1.0);
        assert!(!in_circumcircle(Point2::new(1.0, 1.0), a, b, c));
    }

    #[test]
    fn test_delaunay_too_few_points() {
        assert!(delaunay_triangulation::<f64>(&[]).is_empty());
        assert!(delaunay_triangulation(&[Point2::new(0.0_f64, 0.0)]).is_empty());
        assert!(delaunay_triangulation(&[Point2::new(0.0_f64, 0.0), Point2::new(1.0, 0.0)])
            .is_empty());
    }

    #[test]
    fn test_delaunay_collinear() {
        let points = vec![
            Point2::new(0.0_f64, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(2.0, 0.0),
        ];
        assert!(delaunay_triangulation(&points).is_empty());
    }

    #[test]
    fn test_delaunay_square_with_center() {
        let points = vec![
            Point2::new(0.0_f64, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(1.0, 1.0),
            Point2::new(0.0, 1.0),
            Point2::new(0.5, 0.5),
        ];
        let triangles = delaunay_triangulation(&points);
        assert_eq!(triangles.len(), 4);
        assert_delaunay(&points, &triangles);
    }

    #[test]
    fn test_delaunay_scattered() {
        let points: Vec<Point2<f64>> = vec![
            Point2::new(0.1, 0.2),
            Point2::new(0.8, 0.1),
            Point2::new(0.9, 0.9),
            Point2::new(0.2, 0.85),
            Point2::new(0.5, 0.5),
            Point2::new(0.3, 0.3),
            Point2::new(0.7, 0.6),
            Point2::new(0.4, 0.8),
        ];
        let triangles = delaunay_triangulation(&points);
        assert!(!triangles.is_empty());
        assert_delaunay(&points, &triangles);
    }

    #[test]
    fn test_delaunay_boundary_samples() {
        // Densified square outline: many collinear and cocircular sites
        let points = square_boundary(4);
        let triangles = delaunay_triangulation(&points);
        assert!(!triangles.is_empty());
        assert_delaunay(&points, &triangles);

        let used: HashSet<usize> = triangles
            .iter()
            .flat_map(|t| [t.a, t.b, t.c])
            .collect();
        assert_eq!(used.len(), points.len());
    }

    #[test]
    fn test_delaunay_exactly_cocircular() {
        let points = exact_circle();
        let triangles = delaunay_triangulation(&points);

        // A convex polygon with n vertices has n - 2 triangles
        assert_eq!(triangles.len(), points.len() - 2);
        assert_manifold(&triangles);
        assert_delaunay(&points, &triangles);
    }

    #[test]
    fn test_delaunay_points_on_circle() {
        let n = 200;
        let points: Vec<Point2<f64>> = (0..n)
            .map(|i| {
                let angle = i as f64 / n as f64 * TAU;
                Point2::new(10.0 * angle.cos(), 10.0 * angle.sin())
            })
            .collect();
        let triangles = delaunay_triangulation(&points);

        assert!(!triangles.is_empty());
        assert!(triangles.len() <= 2 * n - 5);
        assert_manifold(&triangles);
        assert_delaunay(&points, &triangles);
    }

    #[test]
    fn test_delaunay_regular_polygon_samples() {
        // Vertices and edge midpoints of a regular 64-gon: two rings of 64
        // cocircular points each
        let n = 64;
        let mut points = Vec::new();
        for i in 0..n {
            let a0 = i as f64 / n as f64 * TAU;
            let a1 = (i + 1) as f64 / n as f64 * TAU;
            let v0 = Point2::new(10.0 * a0.cos(), 10.0 * a0.sin());
            let v1 = Point2::new(10.0 * a1.cos(), 10.0 * a1.sin());
            points.push(v0);
            points.push(v0.midpoint(v1));
        }
        let triangles = delaunay_triangulation(&points);

        assert!(triangles.len() <= 2 * points.len() - 5);
        assert_manifold(&triangles);
        assert_delaunay(&points, &triangles);
    }

    #[test]
    fn test_delaunay_skips_duplicates() {
        let mut points = square_boundary(2);
        points.push(points[0]);
        let triangles = delaunay_triangulation(&points);
        let duplicate = points.len() - 1;
        assert!(triangles.iter().all(|t| !t.contains_vertex(duplicate)));
    }

    #[test]
    fn test_delaunay_deterministic() {
        let points = square_boundary(5);
        assert_eq!(delaunay_triangulation(&points), delaunay_triangulation(&points));
    }

    #[test]
    fn test_delaunay_f32() {
        let points: Vec<Point2<f32>> = vec![
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(0.5, 1.0),
        ];
        assert_eq!(delaunay_triangulation(&points).len(), 1);
    }
}
