//! Point tables on disk (CSV or Parquet, chosen by extension).
//!
//! Columns: `latitude`, `longitude` (any numeric type, cast to f64), plus an
//! optional boolean `inside` on containment output.

use anyhow::{anyhow, Context, Result};
use lnglat::Point;
use polars::prelude::*;
use std::fs;
use std::path::Path;

pub const LAT: &str = "latitude";
pub const LON: &str = "longitude";
pub const INSIDE: &str = "inside";

fn is_parquet(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "parquet")
}

pub fn read_points(path: &Path) -> Result<Vec<Point>> {
    let scanned = if is_parquet(path) {
        LazyFrame::scan_parquet(path, ScanArgsParquet::default())
    } else {
        LazyCsvReader::new(path)
            .with_infer_schema_length(Some(100))
            .finish()
    };
    let lf = scanned.with_context(|| format!("opening {}", path.display()))?;
    let df = lf
        .select([
            col(LAT).cast(DataType::Float64),
            col(LON).cast(DataType::Float64),
        ])
        .collect()
        .with_context(|| format!("reading {} (need `{LAT}`,`{LON}` columns)", path.display()))?;
    let lat = df.column(LAT)?.f64()?;
    let lon = df.column(LON)?.f64()?;
    lat.into_iter()
        .zip(lon.into_iter())
        .enumerate()
        .map(|(i, row)| match row {
            (Some(a), Some(b)) => Ok(Point::new(a, b)),
            _ => Err(anyhow!("{}: row {} has a missing coordinate", path.display(), i + 1)),
        })
        .collect()
}

pub fn write_points(path: &Path, points: &[Point], inside: Option<&[bool]>) -> Result<()> {
    let mut df = df!(
        LAT => points.iter().map(|p| p.latitude).collect::<Vec<_>>(),
        LON => points.iter().map(|p| p.longitude).collect::<Vec<_>>(),
    )?;
    if let Some(flags) = inside {
        df.with_column(Series::new(INSIDE.into(), flags))?;
    }
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    let mut file =
        fs::File::create(path).with_context(|| format!("creating {}", path.display()))?;
    if is_parquet(path) {
        ParquetWriter::new(&mut file).finish(&mut df)?;
    } else {
        CsvWriter::new(&mut file).finish(&mut df)?;
    }
    Ok(())
}
