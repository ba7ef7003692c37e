use anyhow::{bail, Result};
use clap::{Parser, Subcommand, ValueEnum};
use lnglat::planar::{is_in_polygon_with, ContainmentRule, Point};
use lnglat::sphere::{
    distance_between, sample_disc, sample_rect, wgs84_to_gcj02, LatLonRect, ReplayToken,
};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

mod batch;
mod provenance;

#[derive(Parser)]
#[command(name = "lnglat")]
#[command(about = "Lat/lon geometry: distances, containment, sampling")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Haversine distance in whole metres
    Distance {
        #[arg(long, allow_hyphen_values = true)]
        from: Point,
        #[arg(long, allow_hyphen_values = true)]
        to: Point,
    },
    /// Point-in-polygon for one point or a table of points
    Contains {
        /// Vertex table (`latitude`,`longitude`), ring closed implicitly
        #[arg(long)]
        polygon: PathBuf,
        #[arg(long, allow_hyphen_values = true, conflicts_with = "points")]
        point: Option<Point>,
        /// Query table; results go to `--out` with an `inside` column
        #[arg(long, requires = "out")]
        points: Option<PathBuf>,
        #[arg(long)]
        out: Option<PathBuf>,
        #[arg(long, value_enum, default_value = "half-open")]
        rule: RuleArg,
    },
    /// Area-uniform random points within a radius (metres) of a center
    SampleDisc {
        #[arg(long, allow_hyphen_values = true)]
        center: Point,
        #[arg(long)]
        radius: f64,
        #[arg(long, default_value_t = 1)]
        count: usize,
        /// Replay seed; drawn from entropy and logged when absent
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Area-uniform random points in a lat/lon box (west > east crosses the antimeridian)
    SampleRect {
        #[arg(long, allow_hyphen_values = true)]
        east: f64,
        #[arg(long, allow_hyphen_values = true)]
        west: f64,
        #[arg(long, allow_hyphen_values = true)]
        south: f64,
        #[arg(long, allow_hyphen_values = true)]
        north: f64,
        #[arg(long, default_value_t = 1)]
        count: usize,
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// WGS-84 → GCJ-02; prints `lon,lat` as map SDKs expect
    ToGcj {
        #[arg(long, allow_hyphen_values = true)]
        point: Point,
    },
    /// Print a small provenance JSON block
    Report,
}

#[derive(Clone, Copy, Debug, Serialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
enum RuleArg {
    HalfOpen,
    RayCast,
}

impl From<RuleArg> for ContainmentRule {
    fn from(rule: RuleArg) -> Self {
        match rule {
            RuleArg::HalfOpen => ContainmentRule::HalfOpen,
            RuleArg::RayCast => ContainmentRule::RayCast,
        }
    }
}

#[derive(Debug, Serialize)]
struct SampleParams {
    seed: u64,
    count: usize,
    #[serde(flatten)]
    region: Region,
}

#[derive(Debug, Serialize)]
#[serde(tag = "region", rename_all = "snake_case")]
enum Region {
    Disc {
        center: (f64, f64),
        radius_m: f64,
    },
    Rect {
        east: f64,
        west: f64,
        south: f64,
        north: f64,
    },
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Distance { from, to } => {
            let d = distance_between(from, to);
            tracing::info!(%from, %to, metres = d, "distance");
            println!("{d}");
            Ok(())
        }
        Action::Contains {
            polygon,
            point,
            points,
            out,
            rule,
        } => contains(&polygon, point, points.as_deref(), out.as_deref(), rule),
        Action::SampleDisc {
            center,
            radius,
            count,
            seed,
            out,
        } => {
            if !(radius.is_finite() && radius >= 0.0) {
                bail!("--radius must be a finite, non-negative number of metres");
            }
            let seed = seed.unwrap_or_else(rand::random);
            let region = Region::Disc {
                center: (center.latitude, center.longitude),
                radius_m: radius,
            };
            let pts = sample_disc(ReplayToken { seed, index: 0 }, center, radius, count);
            emit_samples(SampleParams { seed, count, region }, &pts, out.as_deref())
        }
        Action::SampleRect {
            east,
            west,
            south,
            north,
            count,
            seed,
            out,
        } => {
            if south > north {
                bail!("--south ({south}) must not exceed --north ({north})");
            }
            let seed = seed.unwrap_or_else(rand::random);
            let rect = LatLonRect::new(east, west, south, north);
            let region = Region::Rect {
                east,
                west,
                south,
                north,
            };
            let pts = sample_rect(ReplayToken { seed, index: 0 }, rect, count);
            emit_samples(SampleParams { seed, count, region }, &pts, out.as_deref())
        }
        Action::ToGcj { point } => {
            let q = wgs84_to_gcj02(point);
            tracing::info!(wgs84 = %point, gcj02 = %q, "to_gcj");
            println!("{},{}", q.longitude, q.latitude);
            Ok(())
        }
        Action::Report => report(),
    }
}

fn contains(
    polygon: &Path,
    point: Option<Point>,
    points: Option<&Path>,
    out: Option<&Path>,
    rule: RuleArg,
) -> Result<()> {
    let ring = batch::read_points(polygon)?;
    if ring.len() < 3 {
        bail!(
            "{}: a polygon needs at least 3 vertices, got {}",
            polygon.display(),
            ring.len()
        );
    }
    tracing::info!(polygon = %polygon.display(), vertices = ring.len(), ?rule, "contains");
    match (point, points, out) {
        (Some(p), None, _) => {
            println!("{}", is_in_polygon_with(p, &ring, rule.into()));
            Ok(())
        }
        (None, Some(input), Some(out)) => {
            let queries = batch::read_points(input)?;
            let flags = classify(&ring, &queries, rule.into());
            let inside = flags.iter().filter(|f| **f).count();
            tracing::info!(queries = queries.len(), inside, out = %out.display(), "contains_batch");
            batch::write_points(out, &queries, Some(flags.as_slice()))?;
            provenance::write_sidecar(
                out,
                provenance::Payload::new(
                    "contains",
                    serde_json::json!({
                        "polygon": polygon.to_string_lossy(),
                        "points": input.to_string_lossy(),
                        "rule": rule,
                    }),
                ),
            )?;
            Ok(())
        }
        _ => bail!("pass either --point LAT,LON or --points FILE --out FILE"),
    }
}

fn classify(ring: &[Point], queries: &[Point], rule: ContainmentRule) -> Vec<bool> {
    queries
        .iter()
        .map(|q| is_in_polygon_with(*q, ring, rule))
        .collect()
}

fn emit_samples(params: SampleParams, pts: &[Point], out: Option<&Path>) -> Result<()> {
    tracing::info!(seed = params.seed, count = params.count, "sample");
    match out {
        Some(out) => {
            batch::write_points(out, pts, None)?;
            let command = match params.region {
                Region::Disc { .. } => "sample-disc",
                Region::Rect { .. } => "sample-rect",
            };
            let prov = provenance::write_sidecar(
                out,
                provenance::Payload::new(command, serde_json::to_value(&params)?),
            )?;
            tracing::info!(out = %out.display(), provenance = %prov.display(), "wrote samples");
        }
        None => {
            for p in pts {
                println!("{p}");
            }
        }
    }
    Ok(())
}

fn report() -> Result<()> {
    let obj = serde_json::json!({
        "code_rev": provenance::current_git_rev(),
        "lib_version": lnglat::VERSION,
        "earth_radius_km": lnglat::EARTH_RADIUS_KM,
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cmd::command().debug_assert();
    }

    #[test]
    fn parses_negative_coordinates() {
        let cmd = Cmd::try_parse_from([
            "lnglat",
            "distance",
            "--from",
            "-33.86,151.21",
            "--to",
            "51.5,-0.12",
        ])
        .unwrap();
        match cmd.action {
            Action::Distance { from, to } => {
                assert_eq!(from, Point::new(-33.86, 151.21));
                assert_eq!(to, Point::new(51.5, -0.12));
            }
            _ => panic!("expected distance"),
        }
    }

    #[test]
    fn rejects_bad_point() {
        assert!(Cmd::try_parse_from(["lnglat", "to-gcj", "--point", "north"]).is_err());
    }

    #[test]
    fn classify_unit_square() {
        let ring = [
            Point::new(0.0, 0.0),
            Point::new(0.0, 1.0),
            Point::new(1.0, 1.0),
            Point::new(1.0, 0.0),
        ];
        let queries = [
            Point::new(0.5, 0.5),
            Point::new(2.0, 2.0),
            Point::new(0.0, 0.5),
        ];
        assert_eq!(
            classify(&ring, &queries, ContainmentRule::HalfOpen),
            vec![true, false, true]
        );
    }

    #[test]
    fn sample_params_serialize_flat() {
        let params = SampleParams {
            seed: 9,
            count: 2,
            region: Region::Disc {
                center: (1.0, 2.0),
                radius_m: 50.0,
            },
        };
        let v = serde_json::to_value(&params).unwrap();
        assert_eq!(v["region"], "disc");
        assert_eq!(v["radius_m"], 50.0);
        assert_eq!(v["seed"], 9);
    }
}
