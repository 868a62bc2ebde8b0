//! Axis-aligned bounding envelope.

use crate::primitives::Point2;
use num_traits::Float;

/// A 2D axis-aligned bounding box, defined by its minimum and maximum
/// corners.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Envelope<F> {
    /// Smallest x and y values.
    pub min: Point2<F>,
    /// Largest x and y values.
    pub max: Point2<F>,
}

impl<F: Float> Envelope<F> {
    /// Creates an envelope from min and max corners. Does not validate that
    /// `min <= max`.
    #[inline]
    pub fn new(min: Point2<F>, max: Point2<F>) -> Self {
        Self { min, max }
    }

    /// Creates an envelope covering a single point.
    #[inline]
    pub fn from_point(p: Point2<F>) -> Self {
        Self { min: p, max: p }
    }

    /// Creates the envelope of an iterator of points.
    ///
    /// Returns `None` if the iterator is empty.
    pub fn from_points<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = Point2<F>>,
    {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        Some(iter.fold(Self::from_point(first), Self::expand_to_include))
    }

    /// Returns the envelope grown to include `p`.
    #[inline]
    pub fn expand_to_include(self, p: Point2<F>) -> Self {
        Self {
            min: Point2::new(self.min.x.min(p.x), self.min.y.min(p.y)),
            max: Point2::new(self.max.x.max(p.x), self.max.y.max(p.y)),
        }
    }

    /// Returns the smallest envelope containing both.
    #[inline]
    pub fn union(self, other: Self) -> Self {
        self.expand_to_include(other.min).expand_to_include(other.max)
    }

    /// Extent along the x axis.
    #[inline]
    pub fn width(self) -> F {
        self.max.x - self.min.x
    }

    /// Extent along the y axis.
    #[inline]
    pub fn height(self) -> F {
        self.max.y - self.min.y
    }

    /// Tests whether `p` lies inside or on the boundary.
    #[inline]
    pub fn contains_point(self, p: Point2<F>) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }

    /// Largest absolute coordinate value of either corner.
    pub fn magnitude(self) -> F {
        self.min
            .x
            .abs()
            .max(self.min.y.abs())
            .max(self.max.x.abs())
            .max(self.max.y.abs())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_points() {
        let env = Envelope::from_points(vec![
            Point2::new(3.0_f64, -1.0),
            Point2::new(-2.0, 4.0),
            Point2::new(1.0, 1.0),
        ])
        .unwrap();
        assert_eq!(env.min, Point2::new(-2.0, -1.0));
        assert_eq!(env.max, Point2::new(3.0, 4.0));
        assert_eq!(env.width(), 5.0);
        assert_eq!(env.height(), 5.0);
    }

    #[test]
    fn test_from_points_empty() {
        assert!(Envelope::<f64>::from_points(Vec::new()).is_none());
    }

    #[test]
    fn test_union_and_contains() {
        let a = Envelope::new(Point2::new(0.0_f64, 0.0), Point2::new(1.0, 1.0));
        let b = Envelope::new(Point2::new(5.0, -2.0), Point2::new(6.0, 0.5));
        let u = a.union(b);
        assert_eq!(u.min, Point2::new(0.0, -2.0));
        assert_eq!(u.max, Point2::new(6.0, 1.0));
        assert!(u.contains_point(Point2::new(3.0, 0.0)));
        assert!(!a.contains_point(Point2::new(3.0, 0.0)));
    }

    #[test]
    fn test_magnitude() {
        let env = Envelope::new(Point2::new(-7.0_f64, 2.0), Point2::new(3.0, 5.0));
        assert_eq!(env.magnitude(), 7.0);
    }
}
