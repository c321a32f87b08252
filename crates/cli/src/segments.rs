//! Loading segment tables and testing them pairwise.

use std::path::Path;

use anyhow::{bail, Context, Result};
use ndgeom::{IntersectCfg, Segment};
use polars::prelude::*;

/// Expected columns: one 2D segment `(x1, y1) → (x2, y2)` per row.
pub const COLUMNS: [&str; 4] = ["x1", "y1", "x2", "y2"];

/// Read a `.csv` or `.parquet` table of segments.
pub fn load_segments(path: &Path) -> Result<Vec<Segment>> {
    let lf = match path.extension().and_then(|e| e.to_str()) {
        Some("csv") => LazyCsvReader::new(path)
            .with_infer_schema_length(Some(100))
            .finish()?,
        Some("parquet") => LazyFrame::scan_parquet(path, ScanArgsParquet::default())?,
        other => bail!("unsupported input format {other:?} (expected csv or parquet)"),
    };
    let df = lf
        .select(COLUMNS.map(|c| col(c).cast(DataType::Float64)))
        .collect()
        .with_context(|| format!("reading {}", path.display()))?;

    let mut columns = Vec::with_capacity(COLUMNS.len());
    for name in COLUMNS {
        columns.push(df.column(name)?.f64()?.clone());
    }
    let mut out = Vec::with_capacity(df.height());
    for row in 0..df.height() {
        let mut c = [0.0; 4];
        for (k, ca) in columns.iter().enumerate() {
            c[k] = ca
                .get(row)
                .with_context(|| format!("row {row}: missing {}", COLUMNS[k]))?;
        }
        out.push(Segment::from_coords(&c)?);
    }
    tracing::debug!(rows = out.len(), "segments_loaded");
    Ok(out)
}

/// Parse `x1,y1,x2,y2` already split by clap.
pub fn segment_from_arg(coords: &[f64]) -> Result<Segment> {
    if coords.len() != 4 {
        bail!("expected 4 coordinates x1,y1,x2,y2, got {}", coords.len());
    }
    Ok(Segment::from_coords(coords)?)
}

/// All `(i, j)` with `i < j` whose segments intersect.
pub fn intersecting_pairs(
    segments: &[Segment],
    cfg: IntersectCfg,
) -> Result<Vec<(usize, usize)>> {
    let mut pairs = Vec::new();
    for (i, a) in segments.iter().enumerate() {
        for (j, b) in segments.iter().enumerate().skip(i + 1) {
            if a.intersects_with(b, cfg)? {
                pairs.push((i, j));
            }
        }
    }
    Ok(pairs)
}
