//! Haversine great-circle distance.

use super::cfg::{round_to, DISTANCE_KM_DECIMALS, EARTH_RADIUS_KM};
use crate::planar::Point;

/// Sphere of a given radius.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sphere {
    pub radius_km: f64,
}

impl Default for Sphere {
    fn default() -> Self {
        Self {
            radius_km: EARTH_RADIUS_KM,
        }
    }
}

impl Sphere {
    /// Central angle (radians) between two points given in degrees.
    ///
    /// `a = sin²(Δφ/2) + cos φ1 · cos φ2 · sin²(Δλ/2)`, `c = 2 · atan2(√a, √(1−a))`.
    pub fn central_angle(&self, lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
        let phi1 = lat1.to_radians();
        let phi2 = lat2.to_radians();
        let d_phi = phi1 - phi2;
        let d_lambda = lon1.to_radians() - lon2.to_radians();
        let a = (d_phi / 2.0).sin().powi(2)
            + phi1.cos() * phi2.cos() * (d_lambda / 2.0).sin().powi(2);
        2.0 * a.sqrt().atan2((1.0 - a).sqrt())
    }

    /// Distance in metres: kilometres rounded to 4 places, then to whole metres.
    pub fn distance(&self, lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
        let km = self.central_angle(lat1, lon1, lat2, lon2) * self.radius_km;
        let km = round_to(km, DISTANCE_KM_DECIMALS);
        (km * 1000.0).round()
    }

    #[inline]
    pub fn distance_between(&self, a: Point, b: Point) -> f64 {
        self.distance(a.latitude, a.longitude, b.latitude, b.longitude)
    }
}

/// Haversine distance in whole metres on the default sphere.
#[inline]
pub fn distance(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    Sphere::default().distance(lat1, lon1, lat2, lon2)
}

/// Haversine distance in whole metres between two points on the default sphere.
#[inline]
pub fn distance_between(a: Point, b: Point) -> f64 {
    Sphere::default().distance_between(a, b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn known_pairs() {
        // Expected values computed from the haversine formula with R = 6371.0088 km.
        assert_eq!(distance(39.9, 116.4, 39.9, 116.5), 8531.0);
        assert_eq!(distance(0.0, 0.0, 0.0, 1.0), 111195.0);
        assert_eq!(distance(0.0, 0.0, 90.0, 0.0), 10007557.0);
        assert_eq!(distance(51.5007, -0.1246, 40.6892, -74.0445), 5574848.0);
    }

    #[test]
    fn radius_is_explicit() {
        let unit = Sphere { radius_km: 1.0 };
        // Quarter meridian on a 1 km sphere: π/2 km.
        assert_eq!(unit.distance(0.0, 0.0, 90.0, 0.0), 1571.0);
    }

    #[test]
    fn antimeridian_is_short() {
        let d = distance(0.0, 179.5, 0.0, -179.5);
        assert!((d - distance(0.0, 0.0, 0.0, 1.0)).abs() <= 1.0, "{d}");
    }

    proptest! {
        #[test]
        fn zero_on_identical_points(lat in -90.0..=90.0f64, lon in -180.0..=180.0f64) {
            prop_assert_eq!(distance(lat, lon, lat, lon), 0.0);
        }

        #[test]
        fn symmetric(
            a in -90.0..=90.0f64,
            b in -180.0..=180.0f64,
            c in -90.0..=90.0f64,
            d in -180.0..=180.0f64,
        ) {
            prop_assert_eq!(distance(a, b, c, d), distance(c, d, a, b));
        }
    }
}
