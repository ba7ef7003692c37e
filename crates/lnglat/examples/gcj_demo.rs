//! Print a GPS fix on the GCJ-02 grid plus a few nearby random points.
//!
//! Usage:
//!   cargo run -p lnglat --example gcj_demo -- 39.990475,116.481499

use lnglat::sphere::{sample_disc, wgs84_to_gcj02, ReplayToken};
use lnglat::Point;

fn main() {
    let input = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "39.990475,116.481499".to_string());
    let p: Point = match input.parse() {
        Ok(p) => p,
        Err(err) => {
            eprintln!("usage: gcj_demo LAT,LON ({err})");
            return;
        }
    };
    let q = wgs84_to_gcj02(p);
    // Amap expects lon,lat order.
    println!("{},{}", q.longitude, q.latitude);
    for (i, s) in sample_disc(ReplayToken { seed: 2019, index: 0 }, q, 500.0, 3)
        .iter()
        .enumerate()
    {
        println!("nearby {i}: {},{}", s.longitude, s.latitude);
    }
}
