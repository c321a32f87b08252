use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use ndgeom::{BoundsCheck, IntersectCfg};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

mod provenance;
mod segments;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Segment intersection runner")]
struct Cmd {
    /// Use the historical `max(from.y, to.x)` upper y bound in collinear checks
    #[arg(long, global = true)]
    legacy_bounds: bool,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Test every pair of segments in a csv/parquet table (columns x1,y1,x2,y2)
    Intersect {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out: PathBuf,
    },
    /// Test a single pair given as x1,y1,x2,y2
    Check {
        #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
        a: Vec<f64>,
        #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
        b: Vec<f64>,
    },
    /// Print a small provenance JSON block
    Report,
}

#[derive(Serialize)]
struct PairsReport<'a> {
    input: &'a Path,
    bbox: &'static str,
    segments: usize,
    pairs: Vec<(usize, usize)>,
}

#[derive(Serialize)]
struct CheckReport {
    bbox: &'static str,
    intersects: bool,
    lengths: [f64; 2],
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    let cfg = IntersectCfg {
        bbox: if cmd.legacy_bounds {
            BoundsCheck::LegacyMaxX
        } else {
            BoundsCheck::Exact
        },
    };
    match cmd.action {
        Action::Intersect { input, out } => intersect(&input, &out, cfg),
        Action::Check { a, b } => check(&a, &b, cfg),
        Action::Report => report(),
    }
}

fn bbox_name(cfg: IntersectCfg) -> &'static str {
    match cfg.bbox {
        BoundsCheck::Exact => "exact",
        BoundsCheck::LegacyMaxX => "legacy_max_x",
    }
}

fn intersect(input: &Path, out: &Path, cfg: IntersectCfg) -> Result<()> {
    tracing::info!(
        input = %input.display(),
        out = %out.display(),
        bbox = bbox_name(cfg),
        "intersect"
    );
    let segs = segments::load_segments(input)?;
    let pairs = segments::intersecting_pairs(&segs, cfg)?;
    tracing::info!(segments = segs.len(), pairs = pairs.len(), "intersect_done");

    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let report = PairsReport {
        input,
        bbox: bbox_name(cfg),
        segments: segs.len(),
        pairs,
    };
    std::fs::write(out, serde_json::to_vec_pretty(&report)?)
        .with_context(|| format!("writing {}", out.display()))?;

    provenance::write_sidecar(
        out,
        serde_json::json!({
            "action": "intersect",
            "input": input,
            "bbox": bbox_name(cfg),
        }),
    )?;
    Ok(())
}

fn check(a: &[f64], b: &[f64], cfg: IntersectCfg) -> Result<()> {
    let sa = segments::segment_from_arg(a).context("--a")?;
    let sb = segments::segment_from_arg(b).context("--b")?;
    let intersects = sa.intersects_with(&sb, cfg)?;
    tracing::info!(a = %sa, b = %sb, intersects, "check");
    let report = CheckReport {
        bbox: bbox_name(cfg),
        intersects,
        lengths: [sa.length(), sb.length()],
    };
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn report() -> Result<()> {
    let obj = serde_json::json!({
        "code_rev": provenance::current_git_rev(),
        "ndgeom": ndgeom::VERSION,
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
