//! Centerline construction.
//!
//! A [`Centerline`] is built from a polygon or multi-polygon in three steps:
//! the boundary is resampled every `interpolation_distance` units, the
//! Voronoi diagram of the samples is built, and the finite ridges lying
//! within the polygon are unioned into a [`MultiLineString`]. The stages
//! themselves are public in [`pipeline`].
//!
//! # Example
//!
//! ```
//! use centerline::{Centerline, Polygon};
//!
//! let road = Polygon::from_coords([(0.0, 0.0), (20.0, 0.0), (20.0, 4.0), (0.0, 4.0)]);
//! let centerline = Centerline::builder(road)
//!     .interpolation_distance(0.5)
//!     .attribute("name", "Main Street")
//!     .attribute("lanes", 2)
//!     .build()
//!     .unwrap();
//!
//! assert!(centerline.len() >= 2);
//! assert_eq!(centerline.attribute_str("name"), Some("Main Street"));
//! assert_eq!(centerline.attribute_i64("lanes"), Some(2));
//! ```

mod attributes;
mod options;
pub mod pipeline;

pub use attributes::{AttributeValue, Attributes};
pub use options::CenterlineOptions;

use crate::error::CenterlineError;
use crate::geometry::{Envelope, InputGeometry, LineString, MultiLineString};
use crate::kernel::{Containment, LineUnion, NativeKernel, VoronoiEngine};
use num_traits::Float;
use std::fmt;

/// The centerline of a polygon: a multi-line plus caller-supplied
/// attributes.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Centerline<F> {
    lines: MultiLineString<F>,
    attributes: Attributes,
    interpolation_distance: F,
}

impl<F: Float> Centerline<F> {
    /// Computes the centerline with default options and no attributes.
    ///
    /// # Errors
    ///
    /// See [`CenterlineBuilder::build`].
    pub fn new(geometry: impl Into<InputGeometry<F>>) -> Result<Self, CenterlineError> {
        Self::builder(geometry).build()
    }

    /// Starts configuring a centerline for `geometry`.
    pub fn builder(geometry: impl Into<InputGeometry<F>>) -> CenterlineBuilder<F> {
        CenterlineBuilder {
            geometry: geometry.into(),
            options: CenterlineOptions::default(),
            attributes: Attributes::new(),
        }
    }

    /// The merged line pieces.
    pub fn lines(&self) -> &[LineString<F>] {
        self.lines.lines()
    }

    /// Number of line pieces.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Returns `true` if the centerline has no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Iterates over the lines.
    pub fn iter(&self) -> std::slice::Iter<'_, LineString<F>> {
        self.lines.iter()
    }

    /// The result as a multi-line.
    pub fn geometry(&self) -> &MultiLineString<F> {
        &self.lines
    }

    /// Consumes the centerline, returning its lines.
    pub fn into_geometry(self) -> MultiLineString<F> {
        self.lines
    }

    /// Splits the result into its geometry and attributes.
    pub fn into_parts(self) -> (MultiLineString<F>, Attributes) {
        (self.lines, self.attributes)
    }

    /// Total length of all pieces.
    pub fn length(&self) -> F {
        self.lines.length()
    }

    /// Bounding box of the lines, `None` when empty.
    pub fn envelope(&self) -> Option<Envelope<F>> {
        self.lines.envelope()
    }

    /// The (absolute) sampling step the centerline was built with.
    pub fn interpolation_distance(&self) -> F {
        self.interpolation_distance
    }

    /// Attributes copied from the builder.
    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    /// Attribute stored under `key`.
    pub fn attribute(&self, key: &str) -> Option<&AttributeValue> {
        self.attributes.get(key)
    }

    /// Text attribute stored under `key`.
    pub fn attribute_str(&self, key: &str) -> Option<&str> {
        self.attribute(key).and_then(AttributeValue::as_str)
    }

    /// Integer attribute stored under `key`.
    pub fn attribute_i64(&self, key: &str) -> Option<i64> {
        self.attribute(key).and_then(AttributeValue::as_i64)
    }

    /// Float attribute stored under `key`.
    pub fn attribute_f64(&self, key: &str) -> Option<f64> {
        self.attribute(key).and_then(AttributeValue::as_f64)
    }

    /// Boolean attribute stored under `key`.
    pub fn attribute_bool(&self, key: &str) -> Option<bool> {
        self.attribute(key).and_then(AttributeValue::as_bool)
    }
}

impl<'a, F> IntoIterator for &'a Centerline<F>
where
    F: Float,
{
    type Item = &'a LineString<F>;
    type IntoIter = std::slice::Iter<'a, LineString<F>>;

    fn into_iter(self) -> Self::IntoIter {
        self.lines.iter()
    }
}

/// Formats the lines as WKT.
impl<F: Float + fmt::Display> fmt::Display for Centerline<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.lines, f)
    }
}

/// Configures and runs centerline construction.
#[derive(Debug, Clone)]
pub struct CenterlineBuilder<F> {
    geometry: InputGeometry<F>,
    options: CenterlineOptions<F>,
    attributes: Attributes,
}

impl<F: Float> CenterlineBuilder<F> {
    /// Sets the boundary sampling step. Its absolute value is used.
    pub fn interpolation_distance(mut self, distance: F) -> Self {
        self.options.interpolation_distance = distance;
        self
    }

    /// Replaces every option at once.
    pub fn options(mut self, options: CenterlineOptions<F>) -> Self {
        self.options = options;
        self
    }

    /// Attaches an attribute. A repeated key keeps the last value.
    pub fn attribute(mut self, key: impl Into<String>, value: impl Into<AttributeValue>) -> Self {
        self.attributes.insert(key, value);
        self
    }

    /// Attaches several attributes. Later keys replace earlier ones.
    pub fn attributes<I, K, V>(mut self, attributes: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<AttributeValue>,
    {
        self.attributes.extend(attributes);
        self
    }

    /// Builds the centerline with [`NativeKernel`].
    ///
    /// # Errors
    ///
    /// - [`CenterlineError::InvalidInputType`] if the geometry is not a
    ///   polygon or multi-polygon
    /// - [`CenterlineError::InvalidInterpolationDistance`] for a zero or
    ///   non-finite distance
    /// - [`CenterlineError::TooFewRidges`] if fewer than two pieces survive
    /// - [`CenterlineError::Voronoi`] if the diagram cannot be built
    pub fn build(self) -> Result<Centerline<F>, CenterlineError> {
        self.build_with(&NativeKernel::default())
    }

    /// Builds the centerline with a caller-supplied geometry kernel.
    ///
    /// # Errors
    ///
    /// As for [`build`](Self::build).
    pub fn build_with<K>(self, kernel: &K) -> Result<Centerline<F>, CenterlineError>
    where
        K: VoronoiEngine<F> + Containment<F> + LineUnion<F> + ?Sized,
    {
        let polygons = self.geometry.polygons()?;
        let step = self.options.step()?;
        let lines = pipeline::run(polygons, step, kernel)?;
        Ok(Centerline {
            lines,
            attributes: self.attributes,
            interpolation_distance: step,
        })
    }
}
