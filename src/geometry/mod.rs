//! Geometry data model: rings, polygons, line strings and the input union.
//!
//! # Example
//!
//! ```
//! use centerline::geometry::{Location, Polygon, Ring};
//! use centerline::Point2;
//!
//! let with_hole = Polygon::new(
//!     Ring::from_coords([(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)]),
//!     vec![Ring::from_coords([(4.0, 4.0), (6.0, 4.0), (6.0, 6.0), (4.0, 6.0)])],
//! );
//!
//! assert_eq!(with_hole.locate(Point2::new(1.0, 1.0), 1e-9), Location::Interior);
//! assert_eq!(with_hole.locate(Point2::new(5.0, 5.0), 1e-9), Location::Exterior);
//! assert_eq!(with_hole.exterior().length(), 40.0);
//! ```

mod envelope;
mod input;
mod lines;
mod polygon;
mod ring;

pub use envelope::Envelope;
pub use input::InputGeometry;
pub use lines::{LineString, MultiLineString};
pub use polygon::{locate_point, Location, MultiPolygon, Polygon};
pub use ring::Ring;
