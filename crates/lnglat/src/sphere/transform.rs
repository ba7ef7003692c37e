//! WGS-84 → GCJ-02 ("Mars coordinates") correction.
//!
//! GCJ-02 is WGS-84 plus an empirical, deliberately irregular offset. The
//! offset polynomial is evaluated at `(lon − 105, lat − 35)` and converted
//! from metres to degrees on an ellipsoid with eccentricity² `GCJ_EE`.
//! No out-of-China guard is applied.

use crate::planar::Point;
use std::f64::consts::PI;

/// Semi-major axis (metres) used to scale the offset.
const GCJ_AXIS_M: f64 = 6_371_393.0;
/// First eccentricity squared of the offset ellipsoid.
#[allow(clippy::excessive_precision)]
const GCJ_EE: f64 = 0.00669342162296594323;

fn offset_lat(x: f64, y: f64) -> f64 {
    -100.0 + 2.0 * x + 3.0 * y + 0.2 * y * y + 0.1 * x * y + 0.2 * x.abs().sqrt()
        + (20.0 * (6.0 * x * PI).sin() + 20.0 * (2.0 * x * PI).sin()) * 2.0 / 3.0
        + (20.0 * (y * PI).sin() + 40.0 * (y / 3.0 * PI).sin()) * 2.0 / 3.0
        + (160.0 * (y / 12.0 * PI).sin() + 320.0 * (y * PI / 30.0).sin()) * 2.0 / 3.0
}

fn offset_lon(x: f64, y: f64) -> f64 {
    300.0 + x + 2.0 * y + 0.1 * x * x + 0.1 * x * y + 0.1 * x.abs().sqrt()
        + (20.0 * (6.0 * x * PI).sin() + 20.0 * (2.0 * x * PI).sin()) * 2.0 / 3.0
        + (20.0 * (x * PI).sin() + 40.0 * (x / 3.0 * PI).sin()) * 2.0 / 3.0
        + (150.0 * (x / 12.0 * PI).sin() + 300.0 * (x / 30.0 * PI).sin()) * 2.0 / 3.0
}

/// Shift a WGS-84 point onto the GCJ-02 grid used by Amap/Gaode.
pub fn wgs84_to_gcj02(p: Point) -> Point {
    let x = p.longitude - 105.0;
    let y = p.latitude - 35.0;
    let rad_lat = p.latitude / 180.0 * PI;
    let magic = 1.0 - GCJ_EE * rad_lat.sin().powi(2);
    let sqrt_magic = magic.sqrt();
    let d_lat =
        (offset_lat(x, y) * 180.0) / ((GCJ_AXIS_M * (1.0 - GCJ_EE)) / (magic * sqrt_magic) * PI);
    let d_lon = (offset_lon(x, y) * 180.0) / (GCJ_AXIS_M / sqrt_magic * rad_lat.cos() * PI);
    Point::new(p.latitude + d_lat, p.longitude + d_lon)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn beijing_offset_pinned() {
        let q = wgs84_to_gcj02(Point::new(39.990475, 116.481499));
        assert!((q.latitude - 39.991755630424564).abs() < 1e-9, "{q:?}");
        assert!((q.longitude - 116.4875921165036).abs() < 1e-9, "{q:?}");
    }

    #[test]
    fn offset_is_a_few_hundred_metres() {
        use crate::sphere::distance_between;
        let p = Point::new(31.2304, 121.4737);
        let d = distance_between(p, wgs84_to_gcj02(p));
        assert!((100.0..1_000.0).contains(&d), "{d}");
    }
}
