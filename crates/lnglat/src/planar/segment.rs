//! Closed segments between two lat/lon points.
//!
//! Both predicates are exact sign tests except the collinearity check in
//! `contains_point`, which uses an absolute epsilon (`PlanarCfg`).

use nalgebra::Vector2;

use super::types::{PlanarCfg, Point};

/// Segment `a → b`. Endpoints may coincide; no predicate divides.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub a: Point,
    pub b: Point,
}

impl Segment {
    #[inline]
    pub const fn new(a: Point, b: Point) -> Self {
        Self { a, b }
    }

    /// True iff `p` lies on the closed segment (default tolerance).
    #[inline]
    pub fn contains_point(&self, p: Point) -> bool {
        self.contains_point_eps(p, PlanarCfg::default().eps_on_segment)
    }

    /// True iff `p` lies on the closed segment.
    ///
    /// 1. Exact bounding-box rejection on the rectangle spanned by the segment.
    /// 2. Axis-aligned (or zero-length) segments: the box test is sufficient.
    /// 3. Otherwise `|(a−p) × (b−p)| < eps`.
    pub fn contains_point_eps(&self, p: Point, eps: f64) -> bool {
        let (x0, y0) = (p.longitude, p.latitude);
        let (x1, y1) = (self.a.longitude, self.a.latitude);
        let (x2, y2) = (self.b.longitude, self.b.latitude);
        if (x0 - x1) * (x0 - x2) > 0.0 || (y0 - y1) * (y0 - y2) > 0.0 {
            return false;
        }
        if x1 == x2 || y1 == y2 {
            return true;
        }
        cross(p.xy(), self.a.xy(), self.b.xy()).abs() < eps
    }

    /// Boundary-inclusive intersection test.
    ///
    /// Each segment must straddle (or touch) the supporting line of the other.
    /// Applying the line test in both directions is what makes it a finite
    /// segment test.
    pub fn intersects(&self, other: &Segment) -> bool {
        !strictly_same_side(other.a, other.b, self.a, self.b)
            && !strictly_same_side(self.a, self.b, other.a, other.b)
    }
}

/// `(a−o) × (b−o)`; twice the signed area of triangle (o, a, b).
#[inline]
fn cross(o: Vector2<f64>, a: Vector2<f64>, b: Vector2<f64>) -> f64 {
    let oa = a - o;
    let ob = b - o;
    oa.x * ob.y - ob.x * oa.y
}

/// True iff `c` and `d` lie strictly on the same side of the line through `a`, `b`.
/// A point on the line counts as "not same side".
#[inline]
fn strictly_same_side(a: Point, b: Point, c: Point, d: Point) -> bool {
    let ab = a.xy() - b.xy();
    let side = |p: Point| {
        let ap = p.xy() - a.xy();
        ap.y * ab.x - ap.x * ab.y
    };
    side(c) * side(d) > 0.0
}
