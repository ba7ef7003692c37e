//! Spherical Earth model: distances, area-uniform sampling, GCJ-02 offsets.
//!
//! Purpose
//! - Great-circle distances via haversine on a sphere of fixed radius.
//! - Random points that are uniform by *area* inside a cap or a lat/lon box.
//! - The empirical WGS-84 → GCJ-02 correction used by Chinese web maps.
//!
//! Everything is pure apart from the RNG the caller hands in.
//!
//! Code cross-refs: `Sphere`, `rand::{random_point_in_disc, random_point_in_rect}`,
//! `transform::wgs84_to_gcj02`

mod cfg;
mod distance;
pub mod rand;
pub mod transform;

pub use cfg::EARTH_RADIUS_KM;
pub use distance::{distance, distance_between, Sphere};
pub use self::rand::{
    random_point_in_disc, random_point_in_disc_with, random_point_in_rect, sample_disc,
    sample_rect, LatLonRect, ReplayToken,
};
pub use transform::wgs84_to_gcj02;
