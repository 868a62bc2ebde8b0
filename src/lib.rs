//! centerline - Polygon centerlines from Voronoi diagrams
//!
//! The centerline of an elongated polygon (a road, a river, a lake) is
//! approximated by resampling its boundary, building the Voronoi diagram of
//! the samples, and keeping the ridges that fall inside the polygon. The
//! denser the sampling, the closer the result is to the true medial axis.
//!
//! ```
//! use centerline::{Centerline, Polygon};
//!
//! let river = Polygon::from_coords([(0.0, 0.0), (30.0, 0.0), (30.0, 5.0), (0.0, 5.0)]);
//! let centerline = Centerline::new(river).unwrap();
//! println!("{centerline}");
//! ```
//!
//! The pipeline is written against the capability traits in [`kernel`], so
//! the native Voronoi engine, containment test and line union can be
//! replaced with any other geometry kernel.

pub mod error;
pub mod geometry;
pub mod kernel;
pub mod primitives;
pub mod skeleton;
pub mod triangulation;

pub use error::{CenterlineError, VoronoiError};
pub use geometry::{
    Envelope, InputGeometry, LineString, MultiLineString, MultiPolygon, Polygon, Ring,
};
pub use kernel::{Containment, LineUnion, NativeKernel, VoronoiEngine};
pub use primitives::{Point2, Segment2, Vec2};
pub use skeleton::{AttributeValue, Attributes, Centerline, CenterlineBuilder, CenterlineOptions};
