//! Geometry capabilities consumed by the centerline pipeline.
//!
//! The pipeline only talks to these traits, so any of them can be swapped
//! for another geometry kernel or a test double:
//!
//! - [`VoronoiEngine`]: vertices and ridges of the Voronoi diagram of a
//!   point set
//! - [`Containment`]: whether a segment lies within a polygonal region
//! - [`LineUnion`]: planar union of line segments
//!
//! [`NativeKernel`] implements all three on top of this crate's
//! triangulation and predicates.
//!
//! # Example
//!
//! ```
//! use centerline::kernel::{Containment, LineUnion, NativeKernel};
//! use centerline::{Polygon, Segment2};
//!
//! let kernel: NativeKernel<f64> = NativeKernel::default();
//! let square = Polygon::from_coords([(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0)]);
//!
//! let inside = Segment2::from_coords(1.0, 1.0, 3.0, 3.0);
//! let outside = Segment2::from_coords(1.0, 1.0, 5.0, 1.0);
//! assert!(kernel.within(inside, std::slice::from_ref(&square)));
//! assert!(!kernel.within(outside, std::slice::from_ref(&square)));
//!
//! let merged = kernel.union_lines(&[inside, inside.reversed()]);
//! assert_eq!(merged.len(), 1);
//! ```

mod dissolve;
mod within;

pub use dissolve::union_segments;
pub use within::segment_within;

use crate::error::VoronoiError;
use crate::geometry::{Envelope, MultiLineString, Polygon};
use crate::primitives::{Point2, Segment2};
use crate::triangulation::{voronoi_diagram, VoronoiDiagram};
use num_traits::Float;

/// Builds the Voronoi diagram of a point set.
pub trait VoronoiEngine<F> {
    /// Returns the diagram's vertices and ridges. Ridges follow standard
    /// planar Voronoi semantics: each is dual to a Delaunay edge of `sites`,
    /// and hull edges give unbounded ridges.
    fn voronoi(&self, sites: &[Point2<F>]) -> Result<VoronoiDiagram<F>, VoronoiError>;
}

/// Decides segment containment in a polygonal region.
pub trait Containment<F> {
    /// Returns `true` if no point of `segment` lies outside the union of
    /// `region` and at least one lies in its interior.
    fn within(&self, segment: Segment2<F>, region: &[Polygon<F>]) -> bool;
}

/// Merges line segments.
pub trait LineUnion<F> {
    /// Returns a minimal multi-line covering the same points as `segments`.
    fn union_lines(&self, segments: &[Segment2<F>]) -> MultiLineString<F>;
}

/// The crate's own geometry kernel.
///
/// `tolerance` is relative: it is scaled by the magnitude of the
/// coordinates involved (never by less than one), so large projected
/// coordinates get a proportionally larger snapping distance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NativeKernel<F> {
    pub tolerance: F,
}

impl<F: Float> Default for NativeKernel<F> {
    fn default() -> Self {
        Self {
            tolerance: F::from(1e-9).unwrap(),
        }
    }
}

impl<F: Float> NativeKernel<F> {
    /// Creates a kernel with the given relative tolerance.
    pub fn with_tolerance(tolerance: F) -> Self {
        Self { tolerance }
    }

    fn scaled_tolerance(&self, envelope: Option<Envelope<F>>) -> F {
        let magnitude = envelope.map_or(F::one(), |env| env.magnitude().max(F::one()));
        self.tolerance * magnitude
    }
}

impl<F: Float> VoronoiEngine<F> for NativeKernel<F> {
    fn voronoi(&self, sites: &[Point2<F>]) -> Result<VoronoiDiagram<F>, VoronoiError> {
        voronoi_diagram(sites)
    }
}

impl<F: Float> Containment<F> for NativeKernel<F> {
    fn within(&self, segment: Segment2<F>, region: &[Polygon<F>]) -> bool {
        let envelope = Envelope::from_points([segment.start, segment.end]);
        segment_within(segment, region, self.scaled_tolerance(envelope))
    }
}

impl<F: Float> LineUnion<F> for NativeKernel<F> {
    fn union_lines(&self, segments: &[Segment2<F>]) -> MultiLineString<F> {
        let envelope = Envelope::from_points(segments.iter().flat_map(|s| [s.start, s.end]));
        union_segments(segments, self.scaled_tolerance(envelope))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_default_tolerance() {
        let kernel: NativeKernel<f64> = NativeKernel::default();
        assert_relative_eq!(kernel.tolerance, 1e-9);
        assert_eq!(NativeKernel::with_tolerance(1e-6_f64).tolerance, 1e-6);
    }

    #[test]
    fn test_tolerance_scales_with_magnitude() {
        let kernel: NativeKernel<f64> = NativeKernel::default();
        assert_relative_eq!(kernel.scaled_tolerance(None), 1e-9);

        let small = Envelope::new(Point2::new(0.0, 0.0), Point2::new(0.5, 0.5));
        assert_relative_eq!(kernel.scaled_tolerance(Some(small)), 1e-9);

        let utm = Envelope::new(
            Point2::new(500_000.0, 4_000_000.0),
            Point2::new(500_100.0, 4_000_100.0),
        );
        assert_relative_eq!(kernel.scaled_tolerance(Some(utm)), 4.0001e-3, epsilon = 1e-12);
    }

    #[test]
    fn test_within_large_coordinates() {
        let kernel: NativeKernel<f64> = NativeKernel::default();
        let (x0, y0) = (500_000.0, 4_000_000.0);
        let region = vec![Polygon::from_coords([
            (x0, y0),
            (x0 + 10.0, y0),
            (x0 + 10.0, y0 + 10.0),
            (x0, y0 + 10.0),
        ])];
        let inside = Segment2::from_coords(x0 + 1.0, y0 + 1.0, x0 + 9.0, y0 + 2.0);
        let outside = Segment2::from_coords(x0 + 1.0, y0 + 1.0, x0 + 11.0, y0 + 2.0);
        assert!(kernel.within(inside, &region));
        assert!(!kernel.within(outside, &region));
    }

    #[test]
    fn test_voronoi_delegates() {
        let kernel: NativeKernel<f64> = NativeKernel::default();
        let sites = vec![
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(0.5, 1.0),
        ];
        assert_eq!(kernel.voronoi(&sites), voronoi_diagram(&sites));
    }
}
