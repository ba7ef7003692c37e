//! Area-uniform random points on the sphere (caps and lat/lon boxes).
//!
//! Model
//! - Cap of angular radius δ: the area within angular distance d of the
//!   centre grows like `1 − cos d`, so d is drawn by inverse CDF as
//!   `acos(u·(cos δ − 1) + 1)` and the bearing uniformly in [0, 2π). The
//!   destination follows from the direct great-circle formula.
//! - Lat/lon box: area per latitude band grows like `sin φ`, so latitude is
//!   `asin(u·(sin N − sin S) + sin S)`; longitude is uniform over the box width
//!   (width + 2π when the box crosses the antimeridian).
//! - Longitudes are wrapped into [−π, π]; outputs are rounded to 8 decimals.
//! - The RNG is always injected. `ReplayToken` derives reproducible streams.
//!
//! Reference: http://www.geomidpoint.com/random/calculation.html

use super::cfg::{round_to, SAMPLE_DECIMALS};
use super::distance::Sphere;
use crate::planar::Point;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::f64::consts::{PI, TAU};

/// Axis-aligned lat/lon box in degrees. `west > east` means the box crosses
/// the antimeridian.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LatLonRect {
    pub east: f64,
    pub west: f64,
    pub south: f64,
    pub north: f64,
}

impl LatLonRect {
    #[inline]
    pub const fn new(east: f64, west: f64, south: f64, north: f64) -> Self {
        Self {
            east,
            west,
            south,
            north,
        }
    }

    /// True iff `p` lies in the box (closed, antimeridian-aware).
    pub fn contains(&self, p: Point) -> bool {
        let lat_ok = self.south <= p.latitude && p.latitude <= self.north;
        let lon_ok = if self.west <= self.east {
            self.west <= p.longitude && p.longitude <= self.east
        } else {
            p.longitude >= self.west || p.longitude <= self.east
        };
        lat_ok && lon_ok
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    pub fn to_std_rng(self) -> StdRng {
        // SplitMix64 finalizer.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

#[inline]
fn wrap_longitude(lon: f64) -> f64 {
    if lon < -PI {
        lon + TAU
    } else if lon > PI {
        lon - TAU
    } else {
        lon
    }
}

#[inline]
fn finish(lat: f64, lon: f64) -> Point {
    Point::new(
        round_to(lat.to_degrees(), SAMPLE_DECIMALS),
        round_to(wrap_longitude(lon).to_degrees(), SAMPLE_DECIMALS),
    )
}

/// Area-uniform random point within `radius_m` metres of `center`.
pub fn random_point_in_disc_with<R: Rng + ?Sized>(
    rng: &mut R,
    sphere: &Sphere,
    center: Point,
    radius_m: f64,
) -> Point {
    let (lat0, lon0) = center.to_radians();
    let u1: f64 = rng.gen();
    let u2: f64 = rng.gen();
    let max_dist = radius_m / 1000.0 / sphere.radius_km;
    let dist = (u1 * (max_dist.cos() - 1.0) + 1.0).acos();
    let brg = TAU * u2;
    let lat = (lat0.sin() * dist.cos() + lat0.cos() * dist.sin() * brg.cos()).asin();
    let lon = lon0
        + (brg.sin() * dist.sin() * lat0.cos()).atan2(dist.cos() - lat0.sin() * lat.sin());
    finish(lat, lon)
}

/// Area-uniform random point inside `rect`.
pub fn random_point_in_rect<R: Rng + ?Sized>(rng: &mut R, rect: LatLonRect) -> Point {
    let north = rect.north.to_radians();
    let south = rect.south.to_radians();
    let west = rect.west.to_radians();
    let east = rect.east.to_radians();
    let u1: f64 = rng.gen();
    let u2: f64 = rng.gen();
    let lat = (u1 * (north.sin() - south.sin()) + south.sin()).asin();
    let mut width = east - west;
    if width < 0.0 {
        width += TAU;
    }
    let lon = west + width * u2;
    finish(lat, lon)
}

/// Area-uniform random point within `radius_m` metres of `center` on the default sphere.
#[inline]
pub fn random_point_in_disc<R: Rng + ?Sized>(rng: &mut R, center: Point, radius_m: f64) -> Point {
    random_point_in_disc_with(rng, &Sphere::default(), center, radius_m)
}

/// `n` disc samples from the stream identified by `tok`.
pub fn sample_disc(tok: ReplayToken, center: Point, radius_m: f64, n: usize) -> Vec<Point> {
    let mut rng = tok.to_std_rng();
    (0..n)
        .map(|_| random_point_in_disc(&mut rng, center, radius_m))
        .collect()
}

/// `n` box samples from the stream identified by `tok`.
pub fn sample_rect(tok: ReplayToken, rect: LatLonRect, n: usize) -> Vec<Point> {
    let mut rng = tok.to_std_rng();
    (0..n).map(|_| random_point_in_rect(&mut rng, rect)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sphere::distance_between;
    use rand::rngs::mock::StepRng;

    #[test]
    fn disc_samples_within_radius() {
        let mut rng = StdRng::seed_from_u64(42);
        let center = Point::new(39.9, 116.4);
        for radius in [10.0, 500.0, 25_000.0] {
            for _ in 0..2_000 {
                let p = random_point_in_disc(&mut rng, center, radius);
                let d = distance_between(center, p);
                assert!(d <= radius + 1.0, "{p:?} at {d} m > {radius} m");
            }
        }
    }

    #[test]
    fn disc_is_area_uniform() {
        // Uniform by area ⇒ (d/r)² is uniform on [0, 1). A uniform distance
        // would put half the samples in the inner quarter.
        let mut rng = StdRng::seed_from_u64(7);
        let center = Point::new(30.0, 120.0);
        let radius = 10_000.0;
        let n = 20_000;
        let mut buckets = [0usize; 4];
        for _ in 0..n {
            let p = random_point_in_disc(&mut rng, center, radius);
            let t = (distance_between(center, p) / radius).powi(2).min(0.999_999);
            buckets[(t * 4.0) as usize] += 1;
        }
        for (k, b) in buckets.iter().enumerate() {
            assert!((*b as i64 - 5_000).abs() < 400, "bucket {k}: {b}");
        }
    }

    #[test]
    fn disc_wraps_across_antimeridian() {
        let mut rng = StdRng::seed_from_u64(3);
        let center = Point::new(0.0, 179.999);
        for _ in 0..1_000 {
            let p = random_point_in_disc(&mut rng, center, 50_000.0);
            assert!((-180.0..=180.0).contains(&p.longitude), "{p:?}");
        }
    }

    #[test]
    fn zero_draws_land_on_center() {
        // u1 = u2 = 0 ⇒ distance 0.
        let mut rng = StepRng::new(0, 0);
        let center = Point::new(12.345, -67.891);
        assert_eq!(random_point_in_disc(&mut rng, center, 1_000.0), center);
    }

    #[test]
    fn rect_samples_within_bounds() {
        let mut rng = StdRng::seed_from_u64(11);
        let rect = LatLonRect::new(10.0, -5.0, 20.0, 45.0);
        for _ in 0..5_000 {
            let p = random_point_in_rect(&mut rng, rect);
            assert!(rect.contains(p), "{p:?}");
        }
    }

    #[test]
    fn rect_across_antimeridian() {
        let mut rng = StdRng::seed_from_u64(12);
        let rect = LatLonRect::new(-170.0, 170.0, -10.0, 10.0);
        let mut east_side = 0usize;
        for _ in 0..5_000 {
            let p = random_point_in_rect(&mut rng, rect);
            assert!(rect.contains(p), "{p:?}");
            if p.longitude < 0.0 {
                east_side += 1;
            }
        }
        // Both halves of the 20° width get roughly half the samples.
        assert!((2_000..3_000).contains(&east_side), "{east_side}");
    }

    #[test]
    fn rect_latitude_is_area_weighted() {
        // P(lat < 30° | 0° ≤ lat ≤ 60°) = sin 30° / sin 60° ≈ 0.577, not 0.5.
        let mut rng = StdRng::seed_from_u64(13);
        let rect = LatLonRect::new(10.0, 0.0, 0.0, 60.0);
        let n = 20_000;
        let low = (0..n)
            .filter(|_| random_point_in_rect(&mut rng, rect).latitude < 30.0)
            .count();
        let frac = low as f64 / n as f64;
        let expected = 30f64.to_radians().sin() / 60f64.to_radians().sin();
        assert!((frac - expected).abs() < 0.02, "{frac}");
    }

    #[test]
    fn outputs_have_eight_decimals() {
        let mut rng = StdRng::seed_from_u64(5);
        let p = random_point_in_disc(&mut rng, Point::new(1.0, 2.0), 1_000.0);
        for v in [p.latitude, p.longitude] {
            let scaled = v * 1e8;
            assert!((scaled - scaled.round()).abs() < 1e-3, "{v}");
        }
    }

    #[test]
    fn replay_token_is_reproducible() {
        let tok = ReplayToken { seed: 42, index: 7 };
        let center = Point::new(39.9, 116.4);
        let a = sample_disc(tok, center, 1_000.0, 16);
        let b = sample_disc(tok, center, 1_000.0, 16);
        assert_eq!(a, b);
        let c = sample_disc(ReplayToken { seed: 42, index: 8 }, center, 1_000.0, 16);
        assert_ne!(a, c);
        let rect = LatLonRect::new(1.0, 0.0, 0.0, 1.0);
        assert_eq!(sample_rect(tok, rect, 8), sample_rect(tok, rect, 8));
    }
}
