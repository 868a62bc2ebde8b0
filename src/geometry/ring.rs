//! Closed rings: polygon exteriors and holes.

use super::Envelope;
use crate::primitives::{Point2, Segment2};
use num_traits::Float;

/// An ordered, closed sequence of points (first == last).
///
/// [`Ring::new`] closes an open sequence by repeating its first point.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ring<F> {
    points: Vec<Point2<F>>,
}

impl<F: Float> Ring<F> {
    /// Creates a ring, appending the first point if the sequence is open.
    pub fn new(mut points: Vec<Point2<F>>) -> Self {
        if let (Some(&first), Some(&last)) = (points.first(), points.last()) {
            if first != last {
                points.push(first);
            }
        }
        Self { points }
    }

    /// Creates a ring from `(x, y)` pairs.
    pub fn from_coords<I>(coords: I) -> Self
    where
        I: IntoIterator<Item = (F, F)>,
    {
        Self::new(coords.into_iter().map(Point2::from).collect())
    }

    /// The points of the ring, including the closing point.
    #[inline]
    pub fn points(&self) -> &[Point2<F>] {
        &self.points
    }

    /// Number of vertices, closing vertex included.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` if the ring has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// First vertex, if any.
    #[inline]
    pub fn first(&self) -> Option<Point2<F>> {
        self.points.first().copied()
    }

    /// Last vertex, equal to the first once closed.
    #[inline]
    pub fn last(&self) -> Option<Point2<F>> {
        self.points.last().copied()
    }

    /// Iterates over the ring's edges in order.
    pub fn edges(&self) -> impl Iterator<Item = Segment2<F>> + '_ {
        self.points.windows(2).map(|w| Segment2::new(w[0], w[1]))
    }

    /// Total arc length.
    pub fn length(&self) -> F {
        self.edges().fold(F::zero(), |acc, edge| acc + edge.length())
    }

    /// Returns the point at arc length `distance` from the first point.
    ///
    /// The distance is clamped to `[0, length]`. Returns `None` for an empty
    /// ring.
    pub fn interpolate(&self, distance: F) -> Option<Point2<F>> {
        let first = self.first()?;
        let mut remaining = distance.max(F::zero());

        for edge in self.edges() {
            let edge_len = edge.length();
            if remaining <= edge_len {
                // Stepping along the unit direction keeps axis-aligned
                // samples exact.
                return Some(match edge.direction().normalize() {
                    Some(unit) => edge.start + unit * remaining,
                    None => edge.start,
                });
            }
            remaining = remaining - edge_len;
        }

        Some(self.last().unwrap_or(first))
    }

    /// Ray-casting point-in-ring test. Points on the boundary may return
    /// either value; callers test the boundary separately.
    pub fn contains_point(&self, point: Point2<F>) -> bool {
        let mut inside = false;
        for edge in self.edges() {
            let (vi, vj) = (edge.start, edge.end);
            if ((vi.y > point.y) != (vj.y > point.y))
                && (point.x < (vj.x - vi.x) * (point.y - vi.y) / (vj.y - vi.y) + vi.x)
            {
                inside = !inside;
            }
        }
        inside
    }

    /// Returns `true` if `point` is within `eps` of any edge.
    pub fn touches_point(&self, point: Point2<F>, eps: F) -> bool {
        let eps_sq = eps * eps;
        self.edges()
            .any(|edge| edge.distance_squared_to_point(point) <= eps_sq)
    }

    /// Bounding envelope, `None` for an empty ring.
    pub fn envelope(&self) -> Option<Envelope<F>> {
        Envelope::from_points(self.points.iter().copied())
    }
}
