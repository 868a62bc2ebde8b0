//! Line strings and multi-line strings, with WKT rendering.

use super::Envelope;
use crate::primitives::{Point2, Segment2};
use num_traits::Float;
use std::fmt;

/// An ordered sequence of points joined by straight edges.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LineString<F> {
    points: Vec<Point2<F>>,
}

impl<F: Float> LineString<F> {
    /// Creates a line string from its vertices.
    pub fn new(points: Vec<Point2<F>>) -> Self {
        Self { points }
    }

    /// Creates a line string from `(x, y)` pairs.
    pub fn from_coords<I>(coords: I) -> Self
    where
        I: IntoIterator<Item = (F, F)>,
    {
        Self::new(coords.into_iter().map(Point2::from).collect())
    }

    /// Returns the vertices.
    #[inline]
    pub fn points(&self) -> &[Point2<F>] {
        &self.points
    }

    /// Number of vertices.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` if the line has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// First vertex, if any.
    #[inline]
    pub fn start(&self) -> Option<Point2<F>> {
        self.points.first().copied()
    }

    /// Last vertex, if any.
    #[inline]
    pub fn end(&self) -> Option<Point2<F>> {
        self.points.last().copied()
    }

    /// Iterates over consecutive point pairs.
    pub fn segments(&self) -> impl Iterator<Item = Segment2<F>> + '_ {
        self.points.windows(2).map(|w| Segment2::new(w[0], w[1]))
    }

    /// Total length of all segments.
    pub fn length(&self) -> F {
        self.segments().fold(F::zero(), |acc, s| acc + s.length())
    }

    /// Bounding box of the vertices, `None` when empty.
    pub fn envelope(&self) -> Option<Envelope<F>> {
        Envelope::from_points(self.points.iter().copied())
    }
}

impl<F: Float> From<Segment2<F>> for LineString<F> {
    fn from(segment: Segment2<F>) -> Self {
        Self::new(vec![segment.start, segment.end])
    }
}

/// An ordered collection of line strings.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MultiLineString<F> {
    lines: Vec<LineString<F>>,
}

impl<F: Float> MultiLineString<F> {
    /// Creates a multi-line from its parts.
    pub fn new(lines: Vec<LineString<F>>) -> Self {
        Self { lines }
    }

    /// A multi-line with no parts.
    pub fn empty() -> Self {
        Self { lines: Vec::new() }
    }

    /// Returns the parts.
    #[inline]
    pub fn lines(&self) -> &[LineString<F>] {
        &self.lines
    }

    /// Number of parts.
    #[inline]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Returns `true` if there are no parts.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Iterates over the parts.
    pub fn iter(&self) -> std::slice::Iter<'_, LineString<F>> {
        self.lines.iter()
    }

    /// Total length of all line strings.
    pub fn length(&self) -> F {
        self.lines.iter().fold(F::zero(), |acc, l| acc + l.length())
    }

    /// Envelope of every point, `None` when there are no points.
    pub fn envelope(&self) -> Option<Envelope<F>> {
        Envelope::from_points(self.lines.iter().flat_map(|l| l.points().iter().copied()))
    }

    /// Consumes the multi-line, returning its parts.
    pub fn into_lines(self) -> Vec<LineString<F>> {
        self.lines
    }
}

impl<F: Float> FromIterator<LineString<F>> for MultiLineString<F> {
    fn from_iter<I: IntoIterator<Item = LineString<F>>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a, F: Float> IntoIterator for &'a MultiLineString<F> {
    type Item = &'a LineString<F>;
    type IntoIter = std::slice::Iter<'a, LineString<F>>;

    fn into_iter(self) -> Self::IntoIter {
        self.lines.iter()
    }
}

fn write_coords<F: fmt::Display>(f: &mut fmt::Formatter<'_>, points: &[Point2<F>]) -> fmt::Result {
    f.write_str("(")?;
    for (i, p) in points.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{} {}", p.x, p.y)?;
    }
    f.write_str(")")
}

impl<F: Float + fmt::Display> fmt::Display for LineString<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.points.is_empty() {
            return f.write_str("LINESTRING EMPTY");
        }
        f.write_str("LINESTRING ")?;
        write_coords(f, &self.points)
    }
}

impl<F: Float + fmt::Display> fmt::Display for MultiLineString<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.lines.is_empty() {
            return f.write_str("MULTILINESTRING EMPTY");
        }
        f.write_str("MULTILINESTRING (")?;
        for (i, line) in self.lines.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write_coords(f, line.points())?;
        }
        f.write_str(")")
    }
}
