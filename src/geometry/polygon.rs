//! Polygons with holes, multi-polygons and point location.

use super::{Envelope, Ring};
use crate::primitives::Point2;
use num_traits::Float;

/// Where a point lies relative to a polygonal region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Location {
    /// Strictly inside the region.
    Interior,
    /// Within tolerance of a ring.
    Boundary,
    /// Outside the region, including inside a hole.
    Exterior,
}

/// A polygon: one exterior ring and zero or more interior rings (holes).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Polygon<F> {
    exterior: Ring<F>,
    interiors: Vec<Ring<F>>,
}

impl<F: Float> Polygon<F> {
    /// Creates a polygon from its exterior ring and holes.
    pub fn new(exterior: Ring<F>, interiors: Vec<Ring<F>>) -> Self {
        Self {
            exterior,
            interiors,
        }
    }

    /// Creates a polygon without holes from `(x, y)` pairs.
    pub fn from_coords<I>(exterior: I) -> Self
    where
        I: IntoIterator<Item = (F, F)>,
    {
        Self::new(Ring::from_coords(exterior), Vec::new())
    }

    /// The outer boundary.
    #[inline]
    pub fn exterior(&self) -> &Ring<F> {
        &self.exterior
    }

    /// The holes.
    #[inline]
    pub fn interiors(&self) -> &[Ring<F>] {
        &self.interiors
    }

    /// The exterior ring followed by every hole, in order.
    pub fn rings(&self) -> impl Iterator<Item = &Ring<F>> + '_ {
        std::iter::once(&self.exterior).chain(self.interiors.iter())
    }

    /// Bounding envelope of the exterior, `None` for an empty polygon.
    pub fn envelope(&self) -> Option<Envelope<F>> {
        self.exterior.envelope()
    }

    /// Locates `point` relative to this polygon, treating anything within
    /// `eps` of a ring as boundary.
    pub fn locate(&self, point: Point2<F>, eps: F) -> Location {
        if self.rings().any(|ring| ring.touches_point(point, eps)) {
            return Location::Boundary;
        }
        if !self.exterior.contains_point(point) {
            return Location::Exterior;
        }
        if self.interiors.iter().any(|hole| hole.contains_point(point)) {
            return Location::Exterior;
        }
        Location::Interior
    }
}

/// An ordered collection of polygons.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MultiPolygon<F>(pub Vec<Polygon<F>>);

impl<F: Float> MultiPolygon<F> {
    /// Creates a multi-polygon from its parts.
    pub fn new(polygons: Vec<Polygon<F>>) -> Self {
        Self(polygons)
    }

    /// Returns the parts.
    #[inline]
    pub fn polygons(&self) -> &[Polygon<F>] {
        &self.0
    }

    /// Number of polygons.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if there are no polygons.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<F: Float> From<Vec<Polygon<F>>> for MultiPolygon<F> {
    fn from(polygons: Vec<Polygon<F>>) -> Self {
        Self(polygons)
    }
}

/// Locates `point` against a set of polygons: interior if inside any of
/// them, boundary if on the boundary of any, exterior otherwise.
pub fn locate_point<F: Float>(polygons: &[Polygon<F>], point: Point2<F>, eps: F) -> Location {
    let mut on_boundary = false;
    for polygon in polygons {
        match polygon.locate(point, eps) {
            Location::Interior => return Location::Interior,
            Location::Boundary => on_boundary = true,
            Location::Exterior => {}
        }
    }
    if on_boundary {
        Location::Boundary
    } else {
        Location::Exterior
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn square_with_hole() -> Polygon<f64> {
        Polygon::new(
            Ring::from_coords([(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)]),
            vec![Ring::from_coords([(4.0, 4.0), (6.0, 4.0), (6.0, 6.0), (4.0, 6.0)])],
        )
    }

    #[test]
    fn test_rings_order() {
        let poly = square_with_hole();
        let rings: Vec<_> = poly.rings().collect();
        assert_eq!(rings.len(), 2);
        assert_eq!(rings[0], poly.exterior());
        assert_eq!(rings[1], &poly.interiors()[0]);
    }

    #[test]
    fn test_locate() {
        let poly = square_with_hole();
        assert_eq!(poly.locate(Point2::new(2.0, 2.0), EPS), Location::Interior);
        assert_eq!(poly.locate(Point2::new(5.0, 5.0), EPS), Location::Exterior);
        assert_eq!(poly.locate(Point2::new(12.0, 5.0), EPS), Location::Exterior);
        assert_eq!(poly.locate(Point2::new(10.0, 5.0), EPS), Location::Boundary);
        assert_eq!(poly.locate(Point2::new(4.0, 5.0), EPS), Location::Boundary);
    }

    #[test]
    fn test_locate_point_across_polygons() {
        let polygons = vec![
            Polygon::from_coords([(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]),
            Polygon::from_coords([(3.0, 0.0), (4.0, 0.0), (4.0, 1.0), (3.0, 1.0)]),
        ];
        assert_eq!(locate_point(&polygons, Point2::new(3.5, 0.5), EPS), Location::Interior);
        assert_eq!(locate_point(&polygons, Point2::new(2.0, 0.5), EPS), Location::Exterior);
        assert_eq!(locate_point(&polygons, Point2::new(1.0, 0.5), EPS), Location::Boundary);
        assert_eq!(locate_point::<f64>(&[], Point2::new(0.0, 0.0), EPS), Location::Exterior);
    }

    #[test]
    fn test_envelope() {
        let env = square_with_hole().envelope().unwrap();
        assert_eq!(env.min, Point2::new(0.0, 0.0));
        assert_eq!(env.max, Point2::new(10.0, 10.0));
    }
}
