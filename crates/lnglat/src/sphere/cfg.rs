//! Constants for spherical computations.
//!
//! Policy
//! - One Earth radius for the whole crate. Callers needing another sphere pass
//!   an explicit `Sphere` instead of redefining the constant.

/// Mean Earth radius in kilometres (IUGG/WGS-84 mean radius R₁).
pub const EARTH_RADIUS_KM: f64 = 6371.0088;

/// Decimal places kept on the kilometre distance before converting to metres.
pub(crate) const DISTANCE_KM_DECIMALS: i32 = 4;
/// Decimal places kept on sampled coordinates (degrees).
pub(crate) const SAMPLE_DECIMALS: i32 = 8;

/// Round to `decimals` places, halves away from zero.
#[inline]
pub(crate) fn round_to(x: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (x * scale).round() / scale
}
