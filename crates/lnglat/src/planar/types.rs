//! Basic lat/lon types and tolerances used by the planar predicates.
//!
//! - `Point`: immutable latitude/longitude pair in degrees.
//! - `PlanarCfg`: centralizes the on-segment epsilon and the probe sentinel.
//! - `ParsePointError`: failure modes of the `"lat,lon"` text form.
//!
//! Planar predicates treat longitude as x and latitude as y.

use nalgebra::Vector2;
use std::fmt;
use std::str::FromStr;

use super::cfg::{ON_SEGMENT_EPS, PROBE_LONGITUDE};

/// Geographic point in degrees. Not validated: latitude is expected in
/// [-90, 90] and longitude in [-180, 180].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub latitude: f64,
    pub longitude: f64,
}

impl Point {
    #[inline]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Planar embedding `(x, y) = (longitude, latitude)`.
    #[inline]
    pub fn xy(&self) -> Vector2<f64> {
        Vector2::new(self.longitude, self.latitude)
    }

    /// `(latitude, longitude)` in radians.
    #[inline]
    pub fn to_radians(&self) -> (f64, f64) {
        (self.latitude.to_radians(), self.longitude.to_radians())
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.latitude, self.longitude)
    }
}

/// Errors from parsing `"lat,lon"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsePointError {
    MissingComponent { input: String },
    InvalidNumber { component: &'static str, value: String },
}

impl fmt::Display for ParsePointError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingComponent { input } => {
                write!(f, "expected `lat,lon`, got {input:?}")
            }
            Self::InvalidNumber { component, value } => {
                write!(f, "invalid {component}: {value:?}")
            }
        }
    }
}

impl std::error::Error for ParsePointError {}

impl FromStr for Point {
    type Err = ParsePointError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (lat, lon) = s
            .split_once(',')
            .ok_or_else(|| ParsePointError::MissingComponent {
                input: s.to_string(),
            })?;
        let parse = |component: &'static str, raw: &str| {
            raw.trim()
                .parse::<f64>()
                .ok()
                .filter(|v| v.is_finite())
                .ok_or_else(|| ParsePointError::InvalidNumber {
                    component,
                    value: raw.trim().to_string(),
                })
        };
        Ok(Point::new(parse("latitude", lat)?, parse("longitude", lon)?))
    }
}

/// Planar predicate configuration.
#[derive(Clone, Copy, Debug)]
pub struct PlanarCfg {
    /// Absolute collinearity tolerance for `Segment::contains_point_eps`.
    pub eps_on_segment: f64,
    /// Longitude of the far end of the containment probe.
    pub probe_longitude: f64,
}

impl Default for PlanarCfg {
    fn default() -> Self {
        Self {
            eps_on_segment: ON_SEGMENT_EPS,
            probe_longitude: PROBE_LONGITUDE,
        }
    }
}
