//! Lat/lon geometry on a spherical Earth.
//!
//! - `planar`: point-on-segment, segment intersection, point-in-polygon, with
//!   (longitude, latitude) treated as planar (x, y).
//! - `sphere`: haversine distance, area-uniform sampling in caps and boxes,
//!   and the WGS-84 → GCJ-02 offset.
//!
//! All operations are pure functions of their inputs; samplers take the RNG
//! as an argument.

pub mod planar;
pub mod sphere;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use planar::{is_in_polygon, Point, Segment};
pub use sphere::{distance, EARTH_RADIUS_KM};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::planar::{
        is_in_polygon, is_in_polygon_with, ContainmentRule, PlanarCfg, Point, Ring, Segment,
    };
    pub use crate::sphere::{
        distance, distance_between, random_point_in_disc, random_point_in_disc_with,
        random_point_in_rect, sample_disc, sample_rect, wgs84_to_gcj02, LatLonRect, ReplayToken,
        Sphere, EARTH_RADIUS_KM,
    };
}
