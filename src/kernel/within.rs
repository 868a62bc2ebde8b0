//! Segment-in-region containment.

use crate::geometry::{locate_point, Location, Polygon};
use crate::primitives::{Segment2, SegmentIntersection};
use num_traits::Float;
use std::cmp::Ordering;

/// Tests whether `segment` lies within the union of `polygons`.
///
/// Within means no point of the segment is in the exterior (holes count as
/// exterior) and at least one point is in the interior. Touching the
/// boundary is allowed; running entirely along it is not.
///
/// The segment is split at every contact with a ring edge. Between two
/// contacts it cannot change sides, so each endpoint and the midpoint of
/// each piece decide the answer.
pub fn segment_within<F: Float>(segment: Segment2<F>, polygons: &[Polygon<F>], eps: F) -> bool {
    for p in [segment.start, segment.end] {
        if locate_point(polygons, p, eps) == Location::Exterior {
            return false;
        }
    }

    let mut cuts = vec![F::zero(), F::one()];
    for edge in polygons.iter().flat_map(|p| p.rings()).flat_map(|r| r.edges()) {
        if !segment.bounds_overlap(edge, eps) {
            continue;
        }
        match segment.intersect(edge, eps) {
            SegmentIntersection::None => {}
            SegmentIntersection::Point { t1, .. } => cuts.push(t1),
            SegmentIntersection::Overlap { start, end } => {
                cuts.push(segment.project(start));
                cuts.push(segment.project(end));
            }
        }
    }
    cuts.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
    cuts.dedup();

    let mut touches_interior = false;
    for w in cuts.windows(2) {
        if w[1] <= w[0] {
            continue;
        }
        let mid = segment.point_at((w[0] + w[1]) / F::from(2.0).unwrap());
        match locate_point(polygons, mid, eps) {
            Location::Exterior => return false,
            Location::Interior => touches_interior = true,
            Location::Boundary => {}
        }
    }
    touches_interior
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Ring;

    const EPS: f64 = 1e-9;

    fn square(min: f64, max: f64) -> Polygon<f64> {
        Polygon::from_coords([(min, min), (max, min), (max, max), (min, max)])
    }

    fn square_with_hole() -> Vec<Polygon<f64>> {
        vec![Polygon::new(
            Ring::from_coords([(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)]),
            vec![Ring::from_coords([(4.0, 4.0), (6.0, 4.0), (6.0, 6.0), (4.0, 6.0)])],
        )]
    }

    #[test]
    fn test_inside() {
        let region = vec![square(0.0, 10.0)];
        assert!(segment_within(Segment2::from_coords(1.0, 1.0, 9.0, 8.0), &region, EPS));
    }

    #[test]
    fn test_touching_boundary_is_within() {
        let region = vec![square(0.0, 10.0)];
        assert!(segment_within(Segment2::from_coords(0.0, 5.0, 5.0, 5.0), &region, EPS));
        assert!(segment_within(Segment2::from_coords(0.0, 0.0, 10.0, 10.0), &region, EPS));
    }

    #[test]
    fn test_on_boundary_only_is_not_within() {
        let region = vec![square(0.0, 10.0)];
        assert!(!segment_within(Segment2::from_coords(2.0, 0.0, 8.0, 0.0), &region, EPS));
    }

    #[test]
    fn test_crossing_out_is_not_within() {
        let region = vec![square(0.0, 10.0)];
        assert!(!segment_within(Segment2::from_coords(5.0, 5.0, 15.0, 5.0), &region, EPS));
        assert!(!segment_within(Segment2::from_coords(11.0, 1.0, 12.0, 2.0), &region, EPS));
    }

    #[test]
    fn test_concave_shortcut_is_not_within() {
        // U shape: both endpoints inside, the chord crosses the notch
        let region = vec![Polygon::from_coords([
            (0.0, 0.0),
            (9.0, 0.0),
            (9.0, 9.0),
            (6.0, 9.0),
            (6.0, 3.0),
            (3.0, 3.0),
            (3.0, 9.0),
            (0.0, 9.0),
        ])];
        assert!(!segment_within(Segment2::from_coords(1.5, 6.0, 7.5, 6.0), &region, EPS));
        assert!(segment_within(Segment2::from_coords(1.5, 1.5, 7.5, 1.5), &region, EPS));
    }

    #[test]
    fn test_crossing_hole_is_not_within() {
        let region = square_with_hole();
        assert!(!segment_within(Segment2::from_coords(2.0, 5.0, 8.0, 5.0), &region, EPS));
        assert!(!segment_within(Segment2::from_coords(4.5, 4.5, 5.5, 5.5), &region, EPS));
        assert!(segment_within(Segment2::from_coords(2.0, 2.0, 8.0, 2.0), &region, EPS));
        // Grazing the hole's corner
        assert!(segment_within(Segment2::from_coords(2.0, 6.0, 4.0, 4.0), &region, EPS));
    }

    #[test]
    fn test_bridging_two_polygons_is_not_within() {
        let region = vec![square(0.0, 1.0), square(3.0, 4.0)];
        assert!(!segment_within(Segment2::from_coords(0.5, 0.5, 3.5, 3.5), &region, EPS));
        assert!(segment_within(Segment2::from_coords(3.2, 3.2, 3.8, 3.5), &region, EPS));
    }
}
