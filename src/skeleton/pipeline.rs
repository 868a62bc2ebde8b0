//! The centerline stages.
//!
//! Each stage is a plain function so it can be run and tested on its own:
//!
//! 1. [`reduction_origin`]: translation applied before Voronoi construction
//! 2. [`densify_boundaries`]: evenly spaced samples of every ring
//! 3. [`VoronoiEngine::voronoi`] on the samples
//! 4. [`filter_ridges`]: finite ridges that lie within the input
//! 5. [`merge_segments`]: union of the kept ridges
//!
//! [`run`] chains them.

use crate::error::{CenterlineError, VoronoiError};
use crate::geometry::{Envelope, MultiLineString, Polygon, Ring};
use crate::kernel::{Containment, LineUnion, VoronoiEngine};
use crate::primitives::{Point2, Segment2, Vec2};
use crate::triangulation::VoronoiDiagram;
use num_traits::Float;
use tracing::{debug, trace};

/// Returns the integer-truncated lower-left corner of the exterior rings'
/// envelope, or zero for an empty input.
///
/// Subtracting it from every site keeps Voronoi construction well
/// conditioned for large projected coordinates.
pub fn reduction_origin<F: Float>(polygons: &[Polygon<F>]) -> Vec2<F> {
    polygons
        .iter()
        .filter_map(|p| p.exterior().envelope())
        .reduce(Envelope::union)
        .map_or_else(Vec2::zero, |env| Vec2::new(env.min.x.trunc(), env.min.y.trunc()))
}

/// Samples `ring` every `step` units of arc length, translated by `-origin`.
///
/// The first and last vertices are always emitted. `step` must be positive
/// and finite.
pub fn densify_ring<F: Float>(ring: &Ring<F>, step: F, origin: Vec2<F>) -> Vec<Point2<F>> {
    let (Some(first), Some(last)) = (ring.first(), ring.last()) else {
        return Vec::new();
    };

    let length = ring.length();
    let mut points = vec![first - origin];
    let mut distance = step;
    while distance < length {
        if let Some(p) = ring.interpolate(distance) {
            points.push(p - origin);
        }
        let next = distance + step;
        if next <= distance {
            break;
        }
        distance = next;
    }
    points.push(last - origin);

    trace!(vertices = ring.len(), samples = points.len(), "densified ring");
    points
}

/// Densifies every ring of every polygon: each exterior followed by its
/// holes, polygons in order.
pub fn densify_boundaries<F: Float>(
    polygons: &[Polygon<F>],
    step: F,
    origin: Vec2<F>,
) -> Vec<Point2<F>> {
    let points: Vec<_> = polygons
        .iter()
        .flat_map(|p| p.rings())
        .flat_map(|ring| densify_ring(ring, step, origin))
        .collect();
    debug!(polygons = polygons.len(), sites = points.len(), "densified boundaries");
    points
}

/// Keeps the finite ridges of `diagram` that lie within `polygons`.
///
/// Vertices are translated by `origin` back into input coordinates.
/// Unbounded ridges and ridges whose endpoints coincide are dropped.
///
/// # Errors
///
/// [`VoronoiError::VertexOutOfRange`] if a ridge references a vertex the
/// diagram does not have.
pub fn filter_ridges<F, C>(
    diagram: &VoronoiDiagram<F>,
    origin: Vec2<F>,
    polygons: &[Polygon<F>],
    containment: &C,
) -> Result<Vec<Segment2<F>>, VoronoiError>
where
    F: Float,
    C: Containment<F> + ?Sized,
{
    let vertex = |index: usize| {
        diagram
            .vertices
            .get(index)
            .map(|&v| v + origin)
            .ok_or(VoronoiError::VertexOutOfRange {
                index,
                len: diagram.vertices.len(),
            })
    };

    let mut kept = Vec::new();
    for (a, b) in diagram.finite_ridges() {
        let segment = Segment2::new(vertex(a)?, vertex(b)?);
        if segment.start != segment.end && containment.within(segment, polygons) {
            kept.push(segment);
        }
    }

    debug!(
        ridges = diagram.ridges.len(),
        kept = kept.len(),
        "filtered ridges"
    );
    Ok(kept)
}

/// Unions the kept ridges into a multi-line.
///
/// # Errors
///
/// [`CenterlineError::TooFewRidges`] if the union has fewer than two pieces.
pub fn merge_segments<F, U>(
    segments: &[Segment2<F>],
    union: &U,
) -> Result<MultiLineString<F>, CenterlineError>
where
    F: Float,
    U: LineUnion<F> + ?Sized,
{
    let merged = union.union_lines(segments);
    debug!(segments = segments.len(), pieces = merged.len(), "merged segments");
    if merged.len() < 2 {
        return Err(CenterlineError::TooFewRidges {
            pieces: merged.len(),
        });
    }
    Ok(merged)
}

/// Runs every stage on already validated polygons with a positive, finite
/// `step`.
///
/// # Errors
///
/// [`CenterlineError::Voronoi`] if the engine fails or returns a malformed
/// diagram, [`CenterlineError::TooFewRidges`] if too little survives.
pub fn run<F, K>(
    polygons: &[Polygon<F>],
    step: F,
    kernel: &K,
) -> Result<MultiLineString<F>, CenterlineError>
where
    F: Float,
    K: VoronoiEngine<F> + Containment<F> + LineUnion<F> + ?Sized,
{
    let origin = reduction_origin(polygons);
    let sites = densify_boundaries(polygons, step, origin);

    let diagram = kernel.voronoi(&sites)?;
    debug!(
        vertices = diagram.vertices.len(),
        ridges = diagram.ridges.len(),
        "built voronoi diagram"
    );

    let segments = filter_ridges(&diagram, origin, polygons, kernel)?;
    merge_segments(&segments, kernel)
}
