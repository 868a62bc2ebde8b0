//! 2D line segment type and tolerance-aware segment intersection.

use super::{Point2, Vec2};
use num_traits::Float;
use std::cmp::Ordering;

/// A 2D line segment defined by two endpoints.
///
/// Generic over floating-point types (`f32` or `f64`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment2<F> {
    pub start: Point2<F>,
    pub end: Point2<F>,
}

/// Result of intersecting two segments.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SegmentIntersection<F> {
    /// Segments do not touch.
    None,
    /// Segments touch at a single point.
    Point {
        /// The contact point, on the first segment.
        point: Point2<F>,
        /// Parameter along the first segment, in `[0, 1]`.
        t1: F,
        /// Parameter along the second segment, in `[0, 1]`.
        t2: F,
    },
    /// Segments are collinear and share a stretch of positive length.
    Overlap {
        /// Start of the shared stretch, on the first segment.
        start: Point2<F>,
        /// End of the shared stretch, on the first segment.
        end: Point2<F>,
    },
}

impl<F: Float> Segment2<F> {
    /// Creates a new segment from two points.
    #[inline]
    pub fn new(start: Point2<F>, end: Point2<F>) -> Self {
        Self { start, end }
    }

    /// Creates a segment from coordinate pairs.
    #[inline]
    pub fn from_coords(x1: F, y1: F, x2: F, y2: F) -> Self {
        Self::new(Point2::new(x1, y1), Point2::new(x2, y2))
    }

    /// Returns the direction vector from start to end.
    #[inline]
    pub fn direction(self) -> Vec2<F> {
        self.end - self.start
    }

    /// Squared length.
    #[inline]
    pub fn length_squared(self) -> F {
        self.start.distance_squared(self.end)
    }

    /// Length.
    #[inline]
    pub fn length(self) -> F {
        self.start.distance(self.end)
    }

    /// Point halfway along the segment.
    #[inline]
    pub fn midpoint(self) -> Point2<F> {
        self.start.midpoint(self.end)
    }

    /// Returns the point at parameter `t`; `[0, 1]` spans the segment.
    #[inline]
    pub fn point_at(self, t: F) -> Point2<F> {
        self.start.lerp(self.end, t)
    }

    /// Returns the segment with start and end swapped.
    #[inline]
    pub fn reversed(self) -> Self {
        Self::new(self.end, self.start)
    }

    /// Returns the segment oriented so that `start` precedes `end` in
    /// lexicographic (x, then y) order.
    pub fn canonical(self) -> Self {
        if self.end.lexicographic_cmp(&self.start) == Ordering::Less {
            self.reversed()
        } else {
            self
        }
    }

    /// Parameter of the orthogonal projection of `p` onto the supporting
    /// line. Not clamped. Zero for a degenerate segment.
    pub fn project(self, p: Point2<F>) -> F {
        let v = self.direction();
        let len_sq = v.magnitude_squared();
        if len_sq <= F::epsilon() {
            return F::zero();
        }
        (p - self.start).dot(v) / len_sq
    }

    /// Closest point on the segment to `p`, with its parameter in `[0, 1]`.
    pub fn closest_point(self, p: Point2<F>) -> (Point2<F>, F) {
        let t = self.project(p).max(F::zero()).min(F::one());
        (self.point_at(t), t)
    }

    /// Squared distance from `p` to the closest point on the segment.
    #[inline]
    pub fn distance_squared_to_point(self, p: Point2<F>) -> F {
        let (closest, _) = self.closest_point(p);
        p.distance_squared(closest)
    }

    /// Distance from `p` to the closest point on the segment.
    #[inline]
    pub fn distance_to_point(self, p: Point2<F>) -> F {
        self.distance_squared_to_point(p).sqrt()
    }

    /// Returns `true` if the endpoints are within `eps` of each other.
    #[inline]
    pub fn is_degenerate(self, eps: F) -> bool {
        self.length_squared() <= eps * eps
    }

    /// Returns `true` if the bounding boxes of both segments, grown by `eps`,
    /// overlap.
    pub fn bounds_overlap(self, other: Self, eps: F) -> bool {
        let (min_x1, max_x1) = min_max(self.start.x, self.end.x);
        let (min_y1, max_y1) = min_max(self.start.y, self.end.y);
        let (min_x2, max_x2) = min_max(other.start.x, other.end.x);
        let (min_y2, max_y2) = min_max(other.start.y, other.end.y);

        min_x1 <= max_x2 + eps
            && min_x2 <= max_x1 + eps
            && min_y1 <= max_y2 + eps
            && min_y2 <= max_y1 + eps
    }

    /// Intersects two segments with a distance tolerance `eps`.
    ///
    /// Segments shorter than `eps` never intersect anything. Segments whose
    /// relative tilt stays within `eps` over the length of `other` are
    /// treated as parallel; parallel segments within `eps` of each other are
    /// collinear and either overlap or touch at one point.
    pub fn intersect(self, other: Self, eps: F) -> SegmentIntersection<F> {
        let d1 = self.direction();
        let d2 = other.direction();
        let len1 = d1.magnitude();
        let len2 = d2.magnitude();

        if len1 <= eps || len2 <= eps {
            return SegmentIntersection::None;
        }

        let cross = d1.cross(d2);
        let d = other.start - self.start;

        if cross.abs() / len1 <= eps {
            // Parallel: reject unless `other` lies on our supporting line.
            if d1.cross(d).abs() / len1 > eps {
                return SegmentIntersection::None;
            }

            let ta = self.project(other.start);
            let tb = self.project(other.end);
            let (lo, hi) = min_max(ta, tb);
            let start = lo.max(F::zero());
            let end = hi.min(F::one());
            let tol = eps / len1;

            if start > end + tol {
                return SegmentIntersection::None;
            }

            if end - start <= tol {
                let t1 = clamp_unit((start + end) / F::from(2.0).unwrap());
                let point = self.point_at(t1);
                return SegmentIntersection::Point {
                    point,
                    t1,
                    t2: clamp_unit(other.project(point)),
                };
            }

            return SegmentIntersection::Overlap {
                start: self.point_at(start),
                end: self.point_at(end),
            };
        }

        // Solve self.start + t1 * d1 = other.start + t2 * d2
        let t1 = d.cross(d2) / cross;
        let t2 = d.cross(d1) / cross;
        let tol1 = eps / len1;
        let tol2 = eps / len2;

        if t1 >= -tol1 && t1 <= F::one() + tol1 && t2 >= -tol2 && t2 <= F::one() + tol2 {
            let t1 = clamp_unit(t1);
            SegmentIntersection::Point {
                point: self.point_at(t1),
                t1,
                t2: clamp_unit(t2),
            }
        } else {
            SegmentIntersection::None
        }
    }
}

impl<F: Float> From<(Point2<F>, Point2<F>)> for Segment2<F> {
    fn from((start, end): (Point2<F>, Point2<F>)) -> Self {
        Self::new(start, end)
    }
}

#[inline]
fn min_max<F: Float>(a: F, b: F) -> (F, F) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

#[inline]
fn clamp_unit<F: Float>(t: F) -> F {
    t.max(F::zero()).min(F::one())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_length_and_point_at() {
        let s: Segment2<f64> = Segment2::from_coords(0.0, 0.0, 3.0, 4.0);
        assert_eq!(s.length_squared(), 25.0);
        assert_eq!(s.length(), 5.0);
        assert_eq!(s.point_at(0.0), s.start);
        assert_eq!(s.point_at(1.0), s.end);
        assert_eq!(s.midpoint(), Point2::new(1.5, 2.0));
    }

    #[test]
    fn test_canonical() {
        let s: Segment2<f64> = Segment2::from_coords(5.0, 1.0, 2.0, 7.0);
        let c = s.canonical();
        assert_eq!(c.start, Point2::new(2.0, 7.0));
        assert_eq!(c.end, Point2::new(5.0, 1.0));
        assert_eq!(c.canonical(), c);

        let vertical: Segment2<f64> = Segment2::from_coords(1.0, 3.0, 1.0, -3.0);
        assert_eq!(vertical.canonical().start, Point2::new(1.0, -3.0));
    }

    #[test]
    fn test_project_and_closest_point() {
        let s: Segment2<f64> = Segment2::from_coords(0.0, 0.0, 10.0, 0.0);
        assert_relative_eq!(s.project(Point2::new(2.5, 7.0)), 0.25);
        assert_relative_eq!(s.project(Point2::new(-5.0, 0.0)), -0.5);

        let (closest, t) = s.closest_point(Point2::new(-5.0, 3.0));
        assert_eq!(closest, s.start);
        assert_eq!(t, 0.0);
        assert_relative_eq!(s.distance_to_point(Point2::new(4.0, -3.0)), 3.0);
    }

    #[test]
    fn test_degenerate() {
        let s: Segment2<f64> = Segment2::from_coords(1.0, 1.0, 1.0, 1.0 + 1e-12);
        assert!(s.is_degenerate(EPS));
        assert!(!Segment2::from_coords(0.0, 0.0, 0.0, 1.0).is_degenerate(EPS));
    }

    #[test]
    fn test_intersect_crossing() {
        let a: Segment2<f64> = Segment2::from_coords(0.0, 0.0, 4.0, 4.0);
        let b = Segment2::from_coords(0.0, 4.0, 4.0, 0.0);

        match a.intersect(b, EPS) {
            SegmentIntersection::Point { point, t1, t2 } => {
                assert_relative_eq!(point.x, 2.0, epsilon = 1e-12);
                assert_relative_eq!(point.y, 2.0, epsilon = 1e-12);
                assert_relative_eq!(t1, 0.5, epsilon = 1e-12);
                assert_relative_eq!(t2, 0.5, epsilon = 1e-12);
            }
            other => panic!("expected a point, got {other:?}"),
        }
    }

    #[test]
    fn test_intersect_touching_endpoint() {
        let a: Segment2<f64> = Segment2::from_coords(0.0, 0.0, 2.0, 0.0);
        let b = Segment2::from_coords(1.0, 0.0, 1.0, 5.0);

        match a.intersect(b, EPS) {
            SegmentIntersection::Point { t1, t2, .. } => {
                assert_relative_eq!(t1, 0.5, epsilon = 1e-12);
                assert_eq!(t2, 0.0);
            }
            other => panic!("expected a point, got {other:?}"),
        }
    }

    #[test]
    fn test_intersect_disjoint() {
        let a: Segment2<f64> = Segment2::from_coords(0.0, 0.0, 1.0, 0.0);
        let b = Segment2::from_coords(2.0, -1.0, 2.0, 1.0);
        assert_eq!(a.intersect(b, EPS), SegmentIntersection::None);

        let parallel = Segment2::from_coords(0.0, 1.0, 1.0, 1.0);
        assert_eq!(a.intersect(parallel, EPS), SegmentIntersection::None);
    }

    #[test]
    fn test_intersect_collinear_overlap() {
        let a: Segment2<f64> = Segment2::from_coords(0.0, 0.0, 4.0, 0.0);
        let b = Segment2::from_coords(6.0, 0.0, 2.0, 0.0);

        match a.intersect(b, EPS) {
            SegmentIntersection::Overlap { start, end } => {
                assert_relative_eq!(start.x, 2.0, epsilon = 1e-12);
                assert_relative_eq!(end.x, 4.0, epsilon = 1e-12);
            }
            other => panic!("expected an overlap, got {other:?}"),
        }
    }

    #[test]
    fn test_intersect_collinear_end_to_end() {
        let a: Segment2<f64> = Segment2::from_coords(0.0, 0.0, 1.0, 1.0);
        let b = Segment2::from_coords(1.0, 1.0, 3.0, 3.0);

        match a.intersect(b, EPS) {
            SegmentIntersection::Point { point, t1, t2 } => {
                assert_relative_eq!(point.x, 1.0, epsilon = 1e-12);
                assert_relative_eq!(t1, 1.0, epsilon = 1e-12);
                assert_relative_eq!(t2, 0.0, epsilon = 1e-12);
            }
            other => panic!("expected a point, got {other:?}"),
        }
    }

    #[test]
    fn test_bounds_overlap() {
        let a: Segment2<f64> = Segment2::from_coords(0.0, 0.0, 1.0, 1.0);
        assert!(a.bounds_overlap(Segment2::from_coords(1.0, 0.0, 2.0, 2.0), EPS));
        assert!(!a.bounds_overlap(Segment2::from_coords(1.5, 0.0, 2.0, 2.0), EPS));
    }
}
