//! Error types for centerline construction.

use thiserror::Error;

/// Errors that can occur while computing a centerline.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CenterlineError {
    /// The input is neither a polygon nor a multi-polygon.
    #[error("invalid input type: expected Polygon or MultiPolygon, got {found}")]
    InvalidInputType {
        /// Name of the geometry variant that was supplied.
        found: &'static str,
    },

    /// The interpolation distance is zero or not finite.
    #[error("interpolation distance must be finite and non-zero, got {distance}")]
    InvalidInterpolationDistance {
        /// The rejected distance.
        distance: f64,
    },

    /// Filtering and merging left fewer than two line pieces.
    #[error("too few ridges: {pieces} line piece(s) after merging, at least 2 required")]
    TooFewRidges {
        /// Number of pieces that survived.
        pieces: usize,
    },

    /// The Voronoi engine failed.
    #[error("voronoi construction failed: {0}")]
    Voronoi(#[from] VoronoiError),
}

/// Errors raised by a Voronoi engine or while reading its output.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum VoronoiError {
    /// A site has a NaN or infinite coordinate.
    #[error("site {index} has a non-finite coordinate")]
    NonFiniteSite {
        /// Index of the offending site.
        index: usize,
    },

    /// A ridge references a vertex that does not exist.
    #[error("ridge references vertex {index}, but the diagram has {len} vertices")]
    VertexOutOfRange {
        /// The referenced vertex index.
        index: usize,
        /// Number of vertices in the diagram.
        len: usize,
    },

    /// A Delaunay edge is shared by more than two triangles.
    #[error("delaunay edge {a}-{b} is shared by {triangles} triangles")]
    NonManifoldEdge {
        /// First site index of the edge.
        a: usize,
        /// Second site index of the edge.
        b: usize,
        /// Number of triangles on the edge.
        triangles: usize,
    },

    /// Failure reported by an external engine.
    #[error("{0}")]
    Engine(String),
}
