//! Planar predicates on lat/lon coordinates.
//!
//! Purpose
//! - Treat (longitude, latitude) as planar (x, y) and answer boundary-inclusive
//!   questions: is a point on a segment, do two segments touch, is a point
//!   inside a simple ring.
//! - Keep the API small and numerically explicit (one absolute epsilon, exact
//!   sign tests everywhere else).
//!
//! Code cross-refs: `Point`, `Segment`, `Ring`, `ContainmentRule`, `PlanarCfg`

mod cfg;
pub mod polygon;
mod segment;
mod types;

pub use polygon::{is_in_polygon, is_in_polygon_with, ContainmentRule, Ring};
pub use segment::Segment;
pub use types::{ParsePointError, PlanarCfg, Point};
