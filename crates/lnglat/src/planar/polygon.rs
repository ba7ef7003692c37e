//! Point-in-polygon for simple lat/lon rings (boundary counts as inside).
//!
//! Model
//! - A ring is an ordered vertex slice, closed implicitly from the last vertex
//!   back to the first. Holes and self-intersections are not supported.
//! - Both rules first test the boundary with `Segment::contains_point_eps`,
//!   then count crossings of an eastward ray at the query latitude.
//!
//! Rules
//! - `HalfOpen` (default): an edge is crossed iff exactly one endpoint lies
//!   strictly north of the query latitude and the crossing is east of the
//!   query. Every vertex is counted once across its two edges.
//! - `RayCast`: intersects a finite probe segment ending at
//!   `PlanarCfg::probe_longitude` with every edge, then subtracts one per
//!   vertex at the query latitude east of the query (each such vertex was hit
//!   by two edges). Known failure modes: an edge collinear with the probe is
//!   counted as a crossing, and a vertex that the probe only grazes (a local
//!   latitude extremum) is still counted. Points level with a horizontal edge
//!   can therefore be misclassified, even outside the bounding box.

use super::segment::Segment;
use super::types::{PlanarCfg, Point};

/// Crossing-count rule used after the boundary check.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ContainmentRule {
    #[default]
    HalfOpen,
    RayCast,
}

/// Borrowed view of a closed vertex ring.
#[derive(Clone, Copy, Debug)]
pub struct Ring<'a> {
    vertices: &'a [Point],
}

impl<'a> Ring<'a> {
    #[inline]
    pub fn new(vertices: &'a [Point]) -> Self {
        Self { vertices }
    }

    #[inline]
    pub fn vertices(&self) -> &'a [Point] {
        self.vertices
    }

    /// Edges `v[i] → v[i+1]`, wrapping `v[n-1] → v[0]`.
    pub fn edges(&self) -> impl Iterator<Item = Segment> + 'a {
        let vs = self.vertices;
        let n = vs.len();
        (0..n).map(move |i| Segment::new(vs[i], vs[(i + 1) % n]))
    }

    /// True iff `p` lies on some edge.
    pub fn on_boundary(&self, p: Point, eps: f64) -> bool {
        self.edges().any(|e| e.contains_point_eps(p, eps))
    }

    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.contains_with(p, ContainmentRule::default(), PlanarCfg::default())
    }

    pub fn contains_with(&self, p: Point, rule: ContainmentRule, cfg: PlanarCfg) -> bool {
        if self.on_boundary(p, cfg.eps_on_segment) {
            return true;
        }
        match rule {
            ContainmentRule::HalfOpen => self.half_open_crossings(p) % 2 == 1,
            ContainmentRule::RayCast => self.ray_cast_crossings(p, cfg.probe_longitude) % 2 == 1,
        }
    }

    fn half_open_crossings(&self, p: Point) -> usize {
        let (x, y) = (p.longitude, p.latitude);
        self.edges()
            .filter(|e| {
                let (xi, yi) = (e.a.longitude, e.a.latitude);
                let (xj, yj) = (e.b.longitude, e.b.latitude);
                // yi != yj whenever the first clause holds, so the division is safe.
                (yi > y) != (yj > y) && x < (xj - xi) * (y - yi) / (yj - yi) + xi
            })
            .count()
    }

    /// Patched crossing count; may be negative for degenerate configurations.
    fn ray_cast_crossings(&self, p: Point, probe_longitude: f64) -> i64 {
        let probe = Segment::new(p, Point::new(p.latitude, probe_longitude));
        let hits = self.edges().filter(|e| e.intersects(&probe)).count() as i64;
        let doubled = self
            .vertices
            .iter()
            .filter(|v| v.latitude == p.latitude && v.longitude > p.longitude)
            .count() as i64;
        hits - doubled
    }
}

/// Boundary-inclusive point-in-polygon test over an implicitly closed ring.
#[inline]
pub fn is_in_polygon(point: Point, vertices: &[Point]) -> bool {
    Ring::new(vertices).contains(point)
}

/// Same as `is_in_polygon` with an explicit crossing rule.
#[inline]
pub fn is_in_polygon_with(point: Point, vertices: &[Point], rule: ContainmentRule) -> bool {
    Ring::new(vertices).contains_with(point, rule, PlanarCfg::default())
}
