//! Tolerance defaults for planar predicates (internal).
//!
//! Policy
//! - Coordinates are degrees, so magnitudes stay below a few hundred and an
//!   absolute epsilon is adequate. It is not relative: precision degrades if
//!   callers feed large non-geographic magnitudes.

/// Collinearity tolerance for the point-on-segment cross product.
pub(crate) const ON_SEGMENT_EPS: f64 = 1e-9;
/// Probe end longitude; east of every valid longitude in [-180, 180].
pub(crate) const PROBE_LONGITUDE: f64 = 200.0;
