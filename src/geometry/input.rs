//! The geometry accepted at the pipeline boundary.

use super::{LineString, MultiLineString, MultiPolygon, Polygon};
use crate::error::CenterlineError;
use crate::primitives::Point2;
use num_traits::Float;

/// Any supported geometry. Only [`InputGeometry::Polygon`] and
/// [`InputGeometry::MultiPolygon`] have a centerline.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InputGeometry<F> {
    Point(Point2<F>),
    LineString(LineString<F>),
    MultiLineString(MultiLineString<F>),
    Polygon(Polygon<F>),
    MultiPolygon(MultiPolygon<F>),
}

impl<F: Float> InputGeometry<F> {
    /// Name of the geometry variant.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Point(_) => "Point",
            Self::LineString(_) => "LineString",
            Self::MultiLineString(_) => "MultiLineString",
            Self::Polygon(_) => "Polygon",
            Self::MultiPolygon(_) => "MultiPolygon",
        }
    }

    /// Returns the polygon components: the polygon itself, or every member
    /// of a multi-polygon in order.
    ///
    /// # Errors
    ///
    /// [`CenterlineError::InvalidInputType`] for any other variant.
    ///
    /// # Example
    ///
    /// ```
    /// use centerline::geometry::{InputGeometry, LineString, Polygon};
    /// use centerline::CenterlineError;
    ///
    /// let square = Polygon::from_coords([(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]);
    /// let input = InputGeometry::from(square);
    /// assert_eq!(input.polygons().unwrap().len(), 1);
    ///
    /// let line = InputGeometry::from(LineString::from_coords([(0.0, 0.0), (1.0, 1.0)]));
    /// assert_eq!(
    ///     line.polygons(),
    ///     Err(CenterlineError::InvalidInputType { found: "LineString" })
    /// );
    /// ```
    pub fn polygons(&self) -> Result<&[Polygon<F>], CenterlineError> {
        match self {
            Self::Polygon(polygon) => Ok(std::slice::from_ref(polygon)),
            Self::MultiPolygon(multi) => Ok(multi.polygons()),
            other => Err(CenterlineError::InvalidInputType {
                found: other.kind(),
            }),
        }
    }
}

impl<F> From<Point2<F>> for InputGeometry<F> {
    fn from(p: Point2<F>) -> Self {
        Self::Point(p)
    }
}

impl<F> From<LineString<F>> for InputGeometry<F> {
    fn from(line: LineString<F>) -> Self {
        Self::LineString(line)
    }
}

impl<F> From<MultiLineString<F>> for InputGeometry<F> {
    fn from(lines: MultiLineString<F>) -> Self {
        Self::MultiLineString(lines)
    }
}

impl<F> From<Polygon<F>> for InputGeometry<F> {
    fn from(polygon: Polygon<F>) -> Self {
        Self::Polygon(polygon)
    }
}

impl<F> From<MultiPolygon<F>> for InputGeometry<F> {
    fn from(multi: MultiPolygon<F>) -> Self {
        Self::MultiPolygon(multi)
    }
}
